use crate::ids::{DroneId, MissionId, TemplateId, ZoneId};
use crate::time::EpochMillis;
use serde::{Deserialize, Serialize};
use skyops_geo::{point_in_polygon, LatLng, SurveyArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneStatus {
    Available,
    InMission,
    Maintenance,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Planned,
    Active,
    Completed,
    Aborted,
}

impl MissionStatus {
    /// Transition table for the mission lifecycle. A planned mission can
    /// launch; an active one can pause back to planned, complete, or abort.
    /// Completed and aborted are terminal.
    pub fn can_transition(self, next: MissionStatus) -> bool {
        use MissionStatus::*;
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Planned, Active) | (Active, Planned) | (Active, Completed) | (Active, Aborted)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    Inspection,
    Mapping,
    Security,
    Monitoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for MissionPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Afternoon,
    Dusk,
    Night,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::Morning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPatternKind {
    Crosshatch,
    Perimeter,
    Grid,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointAction {
    Photo,
    Video,
    Hover,
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: LatLng,
    pub altitude_m: f64,
    #[serde(default)]
    pub speed_mps: Option<f64>,
    #[serde(default)]
    pub action: Option<WaypointAction>,
    #[serde(default)]
    pub hold_secs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPattern {
    pub kind: FlightPatternKind,
    /// Route generation is still upstream; every pattern ships empty today.
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub spacing_m: Option<f64>,
    #[serde(default)]
    pub direction_deg: Option<f64>,
}

impl Default for FlightPattern {
    fn default() -> Self {
        Self {
            kind: FlightPatternKind::Crosshatch,
            waypoints: Vec::new(),
            spacing_m: Some(50.0),
            direction_deg: Some(0.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionParameters {
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub overlap_pct: u8,
    pub side_overlap_pct: u8,
    pub sensors: Vec<String>,
    pub resolution_cm_px: f64,
    pub battery_return_pct: u8,
    pub max_wind_mps: f64,
    pub time_of_day: TimeOfDay,
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            altitude_m: 50.0,
            speed_mps: 5.0,
            overlap_pct: 80,
            side_overlap_pct: 70,
            sensors: vec!["4K Camera".to_string()],
            resolution_cm_px: 2.5,
            battery_return_pct: 25,
            max_wind_mps: 8.0,
            time_of_day: TimeOfDay::Morning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneLocation {
    pub position: LatLng,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    pub id: DroneId,
    pub name: String,
    pub model: String,
    pub battery_pct: u8,
    pub status: DroneStatus,
    pub location: DroneLocation,
    pub flight_hours: f64,
    pub last_maintenance_ms: EpochMillis,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub max_flight_time_min: u32,
    pub max_range_km: f64,
    pub payload_capacity_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub name: String,
    pub mission_type: MissionType,
    #[serde(default)]
    pub description: Option<String>,
    pub survey_area: SurveyArea,
    pub flight_pattern: FlightPattern,
    pub parameters: MissionParameters,
    /// Weak reference into the fleet; nothing enforces that the drone exists.
    #[serde(default)]
    pub assigned_drone: Option<DroneId>,
    pub status: MissionStatus,
    pub created_at_ms: EpochMillis,
    pub scheduled_at_ms: EpochMillis,
    pub estimated_duration_min: f64,
    pub estimated_distance_km: f64,
    pub priority: MissionPriority,
    #[serde(default)]
    pub weather: Option<WeatherCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Clear,
    Cloudy,
    Rain,
    Fog,
    Snow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: f64,
    pub humidity_pct: f64,
    pub visibility_km: f64,
    pub sky: SkyCondition,
}

impl WeatherCondition {
    /// Whether this snapshot permits flying under the given mission
    /// parameters. Wind must stay under the mission limit, visibility above
    /// one kilometer, and precipitation grounds the fleet outright.
    pub fn suitable_for(&self, parameters: &MissionParameters) -> bool {
        if self.wind_speed_mps > parameters.max_wind_mps {
            return false;
        }
        if self.visibility_km < 1.0 {
            return false;
        }
        !matches!(self.sky, SkyCondition::Rain | SkyCondition::Snow)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionTemplate {
    pub id: TemplateId,
    pub name: String,
    pub mission_type: MissionType,
    pub description: String,
    pub default_parameters: MissionParameters,
    pub suggested_models: Vec<String>,
    pub minutes_per_hectare: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoFlyZoneKind {
    Airport,
    Military,
    Restricted,
    Temporary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoFlyZone {
    pub id: ZoneId,
    pub name: String,
    pub kind: NoFlyZoneKind,
    pub boundary: Vec<LatLng>,
    /// Maximum permitted altitude inside the zone; zero closes it entirely.
    pub ceiling_m: f64,
    pub active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl NoFlyZone {
    pub fn contains(&self, point: LatLng) -> bool {
        point_in_polygon(&self.boundary, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_mission_can_only_launch() {
        assert!(MissionStatus::Planned.can_transition(MissionStatus::Active));
        assert!(!MissionStatus::Planned.can_transition(MissionStatus::Completed));
        assert!(!MissionStatus::Planned.can_transition(MissionStatus::Aborted));
    }

    #[test]
    fn active_mission_can_pause_complete_or_abort() {
        assert!(MissionStatus::Active.can_transition(MissionStatus::Planned));
        assert!(MissionStatus::Active.can_transition(MissionStatus::Completed));
        assert!(MissionStatus::Active.can_transition(MissionStatus::Aborted));
    }

    #[test]
    fn terminal_statuses_stay_terminal() {
        for terminal in [MissionStatus::Completed, MissionStatus::Aborted] {
            assert!(!terminal.can_transition(MissionStatus::Active));
            assert!(!terminal.can_transition(MissionStatus::Planned));
            assert!(terminal.can_transition(terminal));
        }
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&DroneStatus::InMission).unwrap(),
            "\"in_mission\""
        );
        assert_eq!(
            serde_json::to_string(&TimeOfDay::Afternoon).unwrap(),
            "\"afternoon\""
        );
    }

    #[test]
    fn rain_and_high_wind_are_unsuitable() {
        let params = MissionParameters::default();
        let calm = WeatherCondition {
            temperature_c: 22.0,
            wind_speed_mps: 3.2,
            wind_direction_deg: 180.0,
            humidity_pct: 65.0,
            visibility_km: 15.0,
            sky: SkyCondition::Clear,
        };
        assert!(calm.suitable_for(&params));

        let windy = WeatherCondition {
            wind_speed_mps: params.max_wind_mps + 1.0,
            ..calm.clone()
        };
        assert!(!windy.suitable_for(&params));

        let raining = WeatherCondition {
            sky: SkyCondition::Rain,
            ..calm
        };
        assert!(!raining.suitable_for(&params));
    }
}
