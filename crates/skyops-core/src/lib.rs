pub mod domain;
pub mod error;
pub mod ids;
pub mod time;

pub use domain::{
    Drone, DroneLocation, DroneStatus, FlightPattern, FlightPatternKind, Mission,
    MissionParameters, MissionPriority, MissionStatus, MissionTemplate, MissionType, NoFlyZone,
    NoFlyZoneKind, SkyCondition, TimeOfDay, Waypoint, WaypointAction, WeatherCondition,
};
pub use error::{ErrorCode, OpsError, OpsResult};
pub use ids::{DroneId, MissionId, TemplateId, ZoneId};
pub use time::{now_epoch_millis, EpochMillis};
