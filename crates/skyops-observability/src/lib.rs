use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
    pub metrics_addr: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityHandle {
    pub service_name: String,
    pub metrics_enabled: bool,
}

/// Installs the global tracing subscriber and, when an address is
/// configured, the Prometheus exporter. Safe to call more than once; later
/// calls keep the first subscriber.
pub fn init(config: &ObservabilityConfig) -> ObservabilityHandle {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let metrics_enabled = match config.metrics_addr.as_deref() {
        Some(addr) => install_exporter(config, addr),
        None => false,
    };
    if metrics_enabled {
        describe_metrics();
    }

    ObservabilityHandle {
        service_name: config.service_name.clone(),
        metrics_enabled,
    }
}

pub fn log_startup(handle: &ObservabilityHandle, environment: &str) {
    tracing::info!(
        service = %handle.service_name,
        environment = %environment,
        metrics_enabled = handle.metrics_enabled,
        "skyops service starting"
    );
}

pub fn log_shutdown(handle: &ObservabilityHandle) {
    tracing::info!(service = %handle.service_name, "skyops service stopping");
}

fn install_exporter(config: &ObservabilityConfig, addr: &str) -> bool {
    let addr: SocketAddr = match addr.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                error = %err,
                "Invalid SKYOPS_METRICS_ADDR value"
            );
            return false;
        }
    };

    let builder = PrometheusBuilder::new()
        .with_http_listener(addr)
        .add_global_label("service", config.service_name.clone())
        .add_global_label("environment", config.environment.clone());

    match builder.install() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                error = %err,
                "Failed to initialize Prometheus exporter"
            );
            false
        }
    }
}

fn describe_metrics() {
    metrics::describe_counter!("skyops_sim_ticks_total", "Simulation ticks executed");
    metrics::describe_gauge!("skyops_fleet_average_battery_pct", "Mean fleet battery level");
    metrics::describe_gauge!("skyops_fleet_in_mission", "Drones currently flying");
    metrics::describe_gauge!("skyops_missions_active", "Missions in the active state");
}
