use serde::{Deserialize, Serialize};
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub region: Option<String>,
    pub metrics_addr: Option<String>,
    pub log_level: String,
    /// Period of the simulation tick, milliseconds.
    pub sim_tick_ms: u64,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        let service_name = env_var("SKYOPS_SERVICE_NAME", default_service_name.to_string());
        let environment = Environment::from_env(&env_var("SKYOPS_ENV", "local".to_string()));
        let region = env::var("SKYOPS_REGION").ok();
        let metrics_addr = env::var("SKYOPS_METRICS_ADDR").ok();
        let log_level = env_var("SKYOPS_LOG_LEVEL", "info".to_string());
        let sim_tick_ms = env::var("SKYOPS_SIM_TICK_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(2_000);

        Self {
            service_name,
            environment,
            region,
            metrics_addr,
            log_level,
            sim_tick_ms,
        }
    }
}

fn env_var(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_aliases() {
        assert_eq!(Environment::from_env("development"), Environment::Dev);
        assert_eq!(Environment::from_env("PROD"), Environment::Prod);
        assert_eq!(Environment::from_env("something-else"), Environment::Local);
    }

    #[test]
    fn environment_displays_short_names() {
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!(Environment::Local.to_string(), "local");
    }
}
