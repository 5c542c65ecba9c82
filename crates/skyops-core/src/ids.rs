use crate::time::EpochMillis;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Id in the `prefix-<epoch millis>` shape used by the seed data.
            pub fn from_timestamp(at_ms: EpochMillis) -> Self {
                Self(format!(concat!($prefix, "-{}"), at_ms))
            }

            /// Timestamp id with a sequence suffix, for same-millisecond
            /// creation.
            pub fn from_timestamp_seq(at_ms: EpochMillis, seq: u64) -> Self {
                Self(format!(concat!($prefix, "-{}-{}"), at_ms, seq))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type!(DroneId, "drone");
id_type!(MissionId, "mission");
id_type!(TemplateId, "template");
id_type!(ZoneId, "nfz");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ids_carry_prefix_and_millis() {
        let id = MissionId::from_timestamp(1706800000000);
        assert_eq!(id.as_str(), "mission-1706800000000");
        assert_eq!(
            MissionId::from_timestamp_seq(1706800000000, 2).as_str(),
            "mission-1706800000000-2"
        );
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(DroneId::new("drone-001"), DroneId::new("drone-001"));
        assert_ne!(DroneId::new("drone-001"), DroneId::new("drone-002"));
    }
}
