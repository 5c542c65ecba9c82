use serde::{Deserialize, Serialize};
use skyops_core::{Drone, DroneId, DroneStatus, OpsError, OpsResult};
use std::collections::HashSet;

/// Dashboard aggregate over the whole fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total: usize,
    pub available: usize,
    pub in_mission: usize,
    pub maintenance: usize,
    pub total_flight_hours: f64,
    pub average_battery_pct: f64,
}

/// In-memory fleet state: the drone roster plus the currently viewed drone.
///
/// Single-threaded and synchronous; every mutation is a whole-record or
/// single-field replacement keyed by id, immediately visible to readers.
/// Instances are constructor-injected so tests can build isolated fleets.
#[derive(Debug)]
pub struct FleetStore {
    drones: Vec<Drone>,
    selected: Option<DroneId>,
}

impl FleetStore {
    /// Builds a store over the given roster. Duplicate ids are rejected:
    /// id uniqueness is the one cross-record invariant the fleet carries.
    pub fn new(drones: Vec<Drone>) -> OpsResult<Self> {
        let mut seen = HashSet::new();
        for drone in &drones {
            if !seen.insert(drone.id.clone()) {
                return Err(OpsError::invalid_input(format!(
                    "duplicate drone id {}",
                    drone.id
                )));
            }
        }
        Ok(Self {
            drones,
            selected: None,
        })
    }

    /// All drones in insertion order.
    pub fn list(&self) -> &[Drone] {
        &self.drones
    }

    pub fn get(&self, id: &DroneId) -> Option<&Drone> {
        self.drones.iter().find(|drone| &drone.id == id)
    }

    /// Status-equality filter (`None` means every status) intersected with a
    /// case-insensitive substring match on name, model, or site name.
    /// `filtered(None, "")` is `list()` in the same relative order.
    pub fn filtered(&self, status: Option<DroneStatus>, query: &str) -> Vec<&Drone> {
        let needle = query.to_lowercase();
        self.drones
            .iter()
            .filter(|drone| status.is_none_or(|wanted| drone.status == wanted))
            .filter(|drone| {
                needle.is_empty()
                    || drone.name.to_lowercase().contains(&needle)
                    || drone.model.to_lowercase().contains(&needle)
                    || drone.location.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sets the drone under detailed view; `None` clears it.
    pub fn select(&mut self, id: Option<DroneId>) -> OpsResult<()> {
        if let Some(id) = &id {
            if self.get(id).is_none() {
                return Err(OpsError::not_found(format!("no drone {id}")));
            }
        }
        self.selected = id;
        Ok(())
    }

    pub fn selected(&self) -> Option<&Drone> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Whole-record replacement keyed by id.
    pub fn update(&mut self, drone: Drone) -> OpsResult<()> {
        if drone.battery_pct > 100 {
            return Err(OpsError::invalid_input("battery level above 100"));
        }
        let slot = self
            .drones
            .iter_mut()
            .find(|existing| existing.id == drone.id)
            .ok_or_else(|| OpsError::not_found(format!("no drone {}", drone.id)))?;
        *slot = drone;
        Ok(())
    }

    /// Replaces the battery reading, clamping the level into [0, 100].
    /// Returns the stored value.
    pub fn patch_battery(&mut self, id: &DroneId, level: i64) -> OpsResult<u8> {
        let drone = self
            .drones
            .iter_mut()
            .find(|drone| &drone.id == id)
            .ok_or_else(|| OpsError::not_found(format!("no drone {id}")))?;
        drone.battery_pct = level.clamp(0, 100) as u8;
        Ok(drone.battery_pct)
    }

    pub fn stats(&self) -> FleetStats {
        let total = self.drones.len();
        let count = |wanted: DroneStatus| {
            self.drones
                .iter()
                .filter(|drone| drone.status == wanted)
                .count()
        };
        let battery_sum: u64 = self
            .drones
            .iter()
            .map(|drone| u64::from(drone.battery_pct))
            .sum();
        FleetStats {
            total,
            available: count(DroneStatus::Available),
            in_mission: count(DroneStatus::InMission),
            maintenance: count(DroneStatus::Maintenance),
            total_flight_hours: self.drones.iter().map(|drone| drone.flight_hours).sum(),
            average_battery_pct: if total == 0 {
                0.0
            } else {
                battery_sum as f64 / total as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyops_core::DroneLocation;
    use skyops_geo::LatLng;

    fn drone(id: &str, name: &str, status: DroneStatus, battery: u8) -> Drone {
        Drone {
            id: DroneId::new(id),
            name: name.to_string(),
            model: "Matrice 300 RTK".to_string(),
            battery_pct: battery,
            status,
            location: DroneLocation {
                position: LatLng::new(40.7128, -74.0060),
                name: "New York HQ".to_string(),
            },
            flight_hours: 120.5,
            last_maintenance_ms: 1_705_276_800_000,
            capabilities: vec!["4K Camera".to_string()],
            max_flight_time_min: 55,
            max_range_km: 15.0,
            payload_capacity_kg: 2.7,
        }
    }

    fn store() -> FleetStore {
        FleetStore::new(vec![
            drone("drone-001", "Falcon Alpha", DroneStatus::Available, 87),
            drone("drone-002", "Eagle Beta", DroneStatus::InMission, 23),
            drone("drone-003", "Hawk Gamma", DroneStatus::Maintenance, 95),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let result = FleetStore::new(vec![
            drone("drone-001", "Falcon Alpha", DroneStatus::Available, 87),
            drone("drone-001", "Falcon Clone", DroneStatus::Offline, 10),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unfiltered_view_matches_list_in_order() {
        let store = store();
        let filtered: Vec<&DroneId> = store.filtered(None, "").iter().map(|d| &d.id).collect();
        let listed: Vec<&DroneId> = store.list().iter().map(|d| &d.id).collect();
        assert_eq!(filtered, listed);
    }

    #[test]
    fn filter_intersects_status_and_query() {
        let store = store();
        let hits = store.filtered(Some(DroneStatus::Available), "FALCON");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, DroneId::new("drone-001"));
        // Right name, wrong status.
        assert!(store
            .filtered(Some(DroneStatus::Offline), "falcon")
            .is_empty());
    }

    #[test]
    fn query_matches_model_and_site() {
        let store = store();
        assert_eq!(store.filtered(None, "matrice").len(), 3);
        assert_eq!(store.filtered(None, "new york").len(), 3);
        assert!(store.filtered(None, "berlin").is_empty());
    }

    #[test]
    fn battery_patch_clamps_into_range() {
        let mut store = store();
        let id = DroneId::new("drone-001");
        assert_eq!(store.patch_battery(&id, 150).unwrap(), 100);
        assert_eq!(store.patch_battery(&id, -20).unwrap(), 0);
        assert_eq!(store.get(&id).unwrap().battery_pct, 0);
    }

    #[test]
    fn battery_patch_on_unknown_id_fails() {
        let mut store = store();
        let err = store
            .patch_battery(&DroneId::new("drone-099"), 50)
            .unwrap_err();
        assert_eq!(err.code, skyops_core::ErrorCode::NotFound);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn selection_tracks_known_drones_only() {
        let mut store = store();
        store.select(Some(DroneId::new("drone-002"))).unwrap();
        assert_eq!(store.selected().unwrap().name, "Eagle Beta");
        assert!(store.select(Some(DroneId::new("drone-099"))).is_err());
        // The failed call left the previous selection in place.
        assert!(store.selected().is_some());
        store.select(None).unwrap();
        assert!(store.selected().is_none());
    }

    #[test]
    fn stats_aggregate_the_roster() {
        let stats = store().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.in_mission, 1);
        assert_eq!(stats.maintenance, 1);
        assert!((stats.total_flight_hours - 361.5).abs() < 1e-9);
        assert!((stats.average_battery_pct - (87.0 + 23.0 + 95.0) / 3.0).abs() < 1e-9);
    }
}
