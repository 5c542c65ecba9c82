//! Seed data for the in-memory stores. Everything here is fixture material:
//! state is reinitialized from these arrays on every start, there is no
//! durable storage behind them.

use skyops_core::{
    Drone, DroneId, DroneLocation, DroneStatus, EpochMillis, FlightPattern, FlightPatternKind,
    Mission, MissionId, MissionParameters, MissionPriority, MissionStatus, MissionTemplate,
    MissionType, NoFlyZone, NoFlyZoneKind, TemplateId, TimeOfDay, ZoneId,
};
use skyops_geo::{LatLng, SurveyArea};

#[allow(clippy::too_many_arguments)]
fn drone(
    id: &str,
    name: &str,
    model: &str,
    battery_pct: u8,
    status: DroneStatus,
    lat: f64,
    lng: f64,
    site: &str,
    flight_hours: f64,
    last_maintenance_ms: EpochMillis,
    capabilities: &[&str],
    max_flight_time_min: u32,
    max_range_km: f64,
    payload_capacity_kg: f64,
) -> Drone {
    Drone {
        id: DroneId::new(id),
        name: name.to_string(),
        model: model.to_string(),
        battery_pct,
        status,
        location: DroneLocation {
            position: LatLng::new(lat, lng),
            name: site.to_string(),
        },
        flight_hours,
        last_maintenance_ms,
        capabilities: capabilities.iter().map(|cap| cap.to_string()).collect(),
        max_flight_time_min,
        max_range_km,
        payload_capacity_kg,
    }
}

pub fn seed_fleet() -> Vec<Drone> {
    use DroneStatus::*;
    vec![
        drone(
            "drone-001", "Falcon Alpha", "DJI Matrice 300 RTK", 87, Available,
            40.7128, -74.0060, "New York HQ", 245.5, 1_705_276_800_000,
            &["4K Camera", "LiDAR", "Thermal Imaging", "RTK GPS"], 55, 15.0, 2.7,
        ),
        drone(
            "drone-002", "Eagle Beta", "Autel EVO II Pro", 23, InMission,
            34.0522, -118.2437, "Los Angeles Facility", 189.2, 1_705_708_800_000,
            &["6K Camera", "Obstacle Avoidance", "Night Vision"], 40, 9.0, 1.8,
        ),
        drone(
            "drone-003", "Hawk Gamma", "Skydio 2+", 95, Available,
            41.8781, -87.6298, "Chicago Distribution Center", 156.8, 1_704_844_800_000,
            &["AI Tracking", "4K HDR", "Autonomous Flight"], 27, 3.5, 0.5,
        ),
        drone(
            "drone-004", "Phoenix Delta", "DJI Phantom 4 RTK", 67, Maintenance,
            29.7604, -95.3698, "Houston Refinery", 312.1, 1_703_721_600_000,
            &["RTK GPS", "Photogrammetry", "Survey Grade"], 30, 7.0, 1.4,
        ),
        drone(
            "drone-005", "Raven Epsilon", "Parrot ANAFI USA", 78, Available,
            47.6062, -122.3321, "Seattle Tech Campus", 98.7, 1_706_140_800_000,
            &["Zoom Camera", "Thermal", "Secure Communications"], 32, 4.0, 0.7,
        ),
        drone(
            "drone-006", "Osprey Zeta", "DJI Mavic 3 Enterprise", 45, InMission,
            25.7617, -80.1918, "Miami Port Authority", 203.4, 1_705_536_000_000,
            &["Hasselblad Camera", "RTK", "Spotlight", "Speaker"], 45, 15.0, 0.9,
        ),
        drone(
            "drone-007", "Condor Eta", "Yuneec H520E", 91, Available,
            39.7392, -104.9903, "Denver Operations", 167.9, 1_705_881_600_000,
            &["E90 Camera", "Infrared", "Long Range"], 28, 2.0, 1.2,
        ),
        drone(
            "drone-008", "Vulture Theta", "Freefly Alta X", 12, Offline,
            33.4484, -112.0740, "Phoenix Solar Farm", 445.6, 1_702_598_400_000,
            &["Heavy Lift", "Custom Payloads", "Professional Cinema"], 35, 8.0, 15.0,
        ),
    ]
}

pub fn seed_missions() -> Vec<Mission> {
    vec![
        Mission {
            id: MissionId::new("mission-001"),
            name: "Solar Panel Inspection - Sector A".to_string(),
            mission_type: MissionType::Inspection,
            description: Some(
                "Routine thermal inspection of solar panels in the eastern sector".to_string(),
            ),
            survey_area: SurveyArea::Rectangle {
                vertices: vec![
                    LatLng::new(40.7580, -73.9855),
                    LatLng::new(40.7590, -73.9855),
                    LatLng::new(40.7590, -73.9835),
                    LatLng::new(40.7580, -73.9835),
                ],
            },
            flight_pattern: FlightPattern {
                kind: FlightPatternKind::Crosshatch,
                waypoints: Vec::new(),
                spacing_m: Some(50.0),
                direction_deg: Some(0.0),
            },
            parameters: MissionParameters {
                altitude_m: 50.0,
                speed_mps: 5.0,
                overlap_pct: 80,
                side_overlap_pct: 70,
                sensors: vec!["Thermal Camera".to_string(), "4K Camera".to_string()],
                resolution_cm_px: 2.5,
                battery_return_pct: 25,
                max_wind_mps: 8.0,
                time_of_day: TimeOfDay::Morning,
            },
            assigned_drone: Some(DroneId::new("drone-001")),
            status: MissionStatus::Planned,
            created_at_ms: 1_706_778_000_000,
            scheduled_at_ms: 1_706_860_800_000,
            estimated_duration_min: 25.0,
            estimated_distance_km: 2.1,
            priority: MissionPriority::Medium,
            weather: None,
        },
        Mission {
            id: MissionId::new("mission-002"),
            name: "Perimeter Security Patrol".to_string(),
            mission_type: MissionType::Security,
            description: Some("Daily security patrol of facility perimeter".to_string()),
            survey_area: SurveyArea::Polygon {
                vertices: vec![
                    LatLng::new(40.7128, -74.0060),
                    LatLng::new(40.7138, -74.0060),
                    LatLng::new(40.7138, -74.0040),
                    LatLng::new(40.7128, -74.0040),
                ],
            },
            flight_pattern: FlightPattern {
                kind: FlightPatternKind::Perimeter,
                waypoints: Vec::new(),
                spacing_m: None,
                direction_deg: None,
            },
            parameters: MissionParameters {
                altitude_m: 30.0,
                speed_mps: 8.0,
                overlap_pct: 60,
                side_overlap_pct: 50,
                sensors: vec!["4K Camera".to_string(), "Night Vision".to_string()],
                resolution_cm_px: 5.0,
                battery_return_pct: 30,
                max_wind_mps: 12.0,
                time_of_day: TimeOfDay::Afternoon,
            },
            assigned_drone: Some(DroneId::new("drone-002")),
            status: MissionStatus::Active,
            created_at_ms: 1_706_796_000_000,
            scheduled_at_ms: 1_706_799_600_000,
            estimated_duration_min: 18.0,
            estimated_distance_km: 1.8,
            priority: MissionPriority::High,
            weather: None,
        },
        Mission {
            id: MissionId::new("mission-003"),
            name: "Construction Site Mapping".to_string(),
            mission_type: MissionType::Mapping,
            description: Some("High-resolution orthomosaic of the downtown site".to_string()),
            survey_area: SurveyArea::Circle {
                center: LatLng::new(40.7484, -73.9857),
                radius_m: 400.0,
            },
            flight_pattern: FlightPattern {
                kind: FlightPatternKind::Grid,
                waypoints: Vec::new(),
                spacing_m: Some(40.0),
                direction_deg: Some(90.0),
            },
            parameters: MissionParameters {
                altitude_m: 80.0,
                speed_mps: 6.0,
                overlap_pct: 85,
                side_overlap_pct: 75,
                sensors: vec!["4K Camera".to_string(), "LiDAR".to_string()],
                resolution_cm_px: 1.5,
                battery_return_pct: 20,
                max_wind_mps: 10.0,
                time_of_day: TimeOfDay::Morning,
            },
            assigned_drone: Some(DroneId::new("drone-006")),
            status: MissionStatus::Completed,
            created_at_ms: 1_706_436_000_000,
            scheduled_at_ms: 1_706_515_200_000,
            estimated_duration_min: 42.0,
            estimated_distance_km: 3.6,
            priority: MissionPriority::Low,
            weather: None,
        },
    ]
}

fn template(
    id: &str,
    name: &str,
    mission_type: MissionType,
    description: &str,
    default_parameters: MissionParameters,
    suggested_models: &[&str],
    minutes_per_hectare: f64,
) -> MissionTemplate {
    MissionTemplate {
        id: TemplateId::new(id),
        name: name.to_string(),
        mission_type,
        description: description.to_string(),
        default_parameters,
        suggested_models: suggested_models.iter().map(|m| m.to_string()).collect(),
        minutes_per_hectare,
    }
}

pub fn mission_templates() -> Vec<MissionTemplate> {
    vec![
        template(
            "template-001",
            "Solar Panel Inspection",
            MissionType::Inspection,
            "Comprehensive thermal and visual inspection of solar installations",
            MissionParameters {
                altitude_m: 50.0,
                speed_mps: 5.0,
                overlap_pct: 80,
                side_overlap_pct: 70,
                sensors: vec!["Thermal Camera".to_string(), "4K Camera".to_string()],
                resolution_cm_px: 2.5,
                battery_return_pct: 25,
                max_wind_mps: 8.0,
                time_of_day: TimeOfDay::Morning,
            },
            &["DJI Matrice 300 RTK", "DJI Matrice 30T"],
            15.0,
        ),
        template(
            "template-002",
            "Infrastructure Mapping",
            MissionType::Mapping,
            "High-resolution mapping for construction and planning",
            MissionParameters {
                altitude_m: 80.0,
                speed_mps: 6.0,
                overlap_pct: 85,
                side_overlap_pct: 75,
                sensors: vec!["4K Camera".to_string(), "LiDAR".to_string()],
                resolution_cm_px: 1.5,
                battery_return_pct: 20,
                max_wind_mps: 10.0,
                time_of_day: TimeOfDay::Morning,
            },
            &["DJI Matrice 300 RTK", "Wingtra WingtraOne GEN II"],
            20.0,
        ),
        template(
            "template-003",
            "Security Patrol",
            MissionType::Security,
            "Perimeter security monitoring and surveillance",
            MissionParameters {
                altitude_m: 40.0,
                speed_mps: 8.0,
                overlap_pct: 60,
                side_overlap_pct: 50,
                sensors: vec![
                    "4K Camera".to_string(),
                    "Night Vision".to_string(),
                    "Thermal Camera".to_string(),
                ],
                resolution_cm_px: 5.0,
                battery_return_pct: 30,
                max_wind_mps: 12.0,
                time_of_day: TimeOfDay::Dusk,
            },
            &["Parrot ANAFI USA", "DJI Mavic 3 Enterprise"],
            8.0,
        ),
        template(
            "template-004",
            "Environmental Monitoring",
            MissionType::Monitoring,
            "Environmental data collection and monitoring",
            MissionParameters {
                altitude_m: 60.0,
                speed_mps: 4.0,
                overlap_pct: 70,
                side_overlap_pct: 60,
                sensors: vec![
                    "Multispectral Camera".to_string(),
                    "4K Camera".to_string(),
                    "Air Quality Sensor".to_string(),
                ],
                resolution_cm_px: 3.0,
                battery_return_pct: 25,
                max_wind_mps: 6.0,
                time_of_day: TimeOfDay::Afternoon,
            },
            &["DJI Matrice 300 RTK", "Autel EVO II Pro"],
            25.0,
        ),
    ]
}

pub fn no_fly_zones() -> Vec<NoFlyZone> {
    vec![
        NoFlyZone {
            id: ZoneId::new("nfz-001"),
            name: "LaGuardia Airport".to_string(),
            kind: NoFlyZoneKind::Airport,
            boundary: vec![
                LatLng::new(40.7769, -73.8740),
                LatLng::new(40.7800, -73.8740),
                LatLng::new(40.7800, -73.8600),
                LatLng::new(40.7769, -73.8600),
            ],
            ceiling_m: 0.0,
            active: true,
            description: Some("Major airport - no drone flights permitted".to_string()),
        },
        NoFlyZone {
            id: ZoneId::new("nfz-002"),
            name: "Military Installation".to_string(),
            kind: NoFlyZoneKind::Military,
            boundary: vec![
                LatLng::new(40.7200, -74.0200),
                LatLng::new(40.7220, -74.0200),
                LatLng::new(40.7220, -74.0150),
                LatLng::new(40.7200, -74.0150),
            ],
            ceiling_m: 0.0,
            active: true,
            description: Some("Restricted military zone".to_string()),
        },
        NoFlyZone {
            id: ZoneId::new("nfz-003"),
            name: "Temporary Event Zone".to_string(),
            kind: NoFlyZoneKind::Temporary,
            boundary: vec![
                LatLng::new(40.7580, -73.9780),
                LatLng::new(40.7590, -73.9780),
                LatLng::new(40.7590, -73.9760),
                LatLng::new(40.7580, -73.9760),
            ],
            ceiling_m: 100.0,
            active: true,
            description: Some("Temporary restriction during public event".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyops_planner::SweepEstimator;
    use skyops_store::{FleetStore, MissionStore};
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let fleet: HashSet<_> = seed_fleet().into_iter().map(|d| d.id).collect();
        assert_eq!(fleet.len(), 8);
        let missions: HashSet<_> = seed_missions().into_iter().map(|m| m.id).collect();
        assert_eq!(missions.len(), 3);
    }

    #[test]
    fn stores_build_from_seed_data() {
        let fleet = FleetStore::new(seed_fleet()).unwrap();
        let missions =
            MissionStore::new(seed_missions(), Box::new(SweepEstimator::default())).unwrap();
        assert_eq!(fleet.stats().total, 8);
        assert_eq!(missions.stats().total, 3);
        assert_eq!(missions.stats().active, 1);
    }

    #[test]
    fn assigned_drones_resolve_against_the_seed_fleet() {
        let fleet = FleetStore::new(seed_fleet()).unwrap();
        for mission in seed_missions() {
            let id = mission.assigned_drone.expect("seed missions are assigned");
            assert!(fleet.get(&id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn battery_levels_are_percentages() {
        for drone in seed_fleet() {
            assert!(drone.battery_pct <= 100);
        }
    }

    #[test]
    fn airport_zone_contains_its_own_interior() {
        let zones = no_fly_zones();
        let airport = &zones[0];
        assert!(airport.contains(skyops_geo::LatLng::new(40.7785, -73.8670)));
        assert!(!airport.contains(skyops_geo::LatLng::new(40.7000, -73.8670)));
    }

    #[test]
    fn templates_cover_every_mission_type() {
        let types: HashSet<_> = mission_templates()
            .into_iter()
            .map(|t| t.mission_type)
            .collect();
        assert_eq!(types.len(), 4);
    }
}
