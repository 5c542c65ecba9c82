use serde::{Deserialize, Serialize};
use skyops_core::{now_epoch_millis, DroneStatus, EpochMillis, Mission, MissionId, MissionStatus};
use skyops_store::{FleetStore, MissionStore};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Time source for the simulation. Tests inject [`ManualClock`] and step it
/// by hand instead of sleeping against wall-clock timers.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> EpochMillis;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        now_epoch_millis()
    }
}

#[derive(Debug)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: EpochMillis) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: EpochMillis) {
        self.now.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMillis {
        self.now.load(Ordering::Relaxed)
    }
}

/// Smooth wobble in [-1, 1], a deterministic function of (time, sequence).
fn wobble(now_ms: EpochMillis, seq: usize) -> f64 {
    let t = now_ms as f64 / 1000.0;
    (t / 7.0 + seq as f64 * 0.8).sin()
}

/// Unit wobble shifted into [0, 1].
fn unit_wobble(now_ms: EpochMillis, seq: usize) -> f64 {
    0.5 + 0.5 * wobble(now_ms, seq)
}

/// Live progress snapshot for one active mission. Synthetic: no telemetry
/// link exists, the numbers advance by simulation alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionProgress {
    pub mission_id: MissionId,
    pub percent: f64,
    pub current_waypoint: u32,
    pub total_waypoints: u32,
    pub time_remaining_min: f64,
}

impl MissionProgress {
    /// Seeds a snapshot somewhere mid-flight, the way the monitoring view
    /// first picks up an already-running mission.
    fn seed(now_ms: EpochMillis, seq: usize, mission: &Mission) -> Self {
        let percent = 20.0 + 60.0 * unit_wobble(now_ms, seq);
        let total_waypoints = 10 + (seq as u32 % 5);
        let current_waypoint =
            3 + (unit_wobble(now_ms, seq + 1) * f64::from(total_waypoints - 3)) as u32;
        Self {
            mission_id: mission.id.clone(),
            percent,
            current_waypoint: current_waypoint.min(total_waypoints),
            total_waypoints,
            time_remaining_min: mission.estimated_duration_min * (1.0 - percent / 100.0),
        }
    }

    /// One tick of flight: progress creeps forward by up to two points,
    /// time remaining burns down half a minute, and the waypoint counter
    /// catches up to the total once progress passes 90%.
    fn advance(&mut self, now_ms: EpochMillis, seq: usize) {
        self.percent = (self.percent + 2.0 * unit_wobble(now_ms, seq)).min(100.0);
        self.time_remaining_min = (self.time_remaining_min - 0.5).max(0.0);
        if self.percent > 90.0 {
            self.current_waypoint = self.total_waypoints;
        } else if unit_wobble(now_ms, seq + 2) > 0.8 {
            self.current_waypoint = (self.current_waypoint + 1).min(self.total_waypoints);
        }
    }
}

/// Timer-driven fleet simulation: battery drift on in-mission drones and
/// synthetic progress for active missions. Owns the progress table; the
/// owning service calls [`tick`](Self::tick) on its own interval. Mutations
/// go through the stores' public API, so a concurrent user edit is simply
/// last-write-wins.
pub struct Simulation {
    clock: Arc<dyn Clock>,
    progress: BTreeMap<MissionId, MissionProgress>,
    ticks: u64,
}

impl Simulation {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            progress: BTreeMap::new(),
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Snapshots for every tracked mission, keyed by id.
    pub fn progress(&self) -> &BTreeMap<MissionId, MissionProgress> {
        &self.progress
    }

    pub fn tick(&mut self, fleet: &mut FleetStore, missions: &mut MissionStore) {
        let now_ms = self.clock.now_ms();
        self.ticks += 1;

        self.drift_battery(now_ms, fleet);
        self.advance_missions(now_ms, missions);

        tracing::debug!(
            tick = self.ticks,
            tracked_missions = self.progress.len(),
            "simulation tick"
        );
    }

    /// Nudges one in-mission drone per tick by a value in [-1, +1] battery
    /// points; the store clamps into [0, 100].
    fn drift_battery(&self, now_ms: EpochMillis, fleet: &mut FleetStore) {
        let flying: Vec<_> = fleet
            .list()
            .iter()
            .filter(|drone| drone.status == DroneStatus::InMission)
            .map(|drone| (drone.id.clone(), drone.battery_pct))
            .collect();
        if flying.is_empty() {
            return;
        }
        let seq = (self.ticks as usize) % flying.len();
        let (id, level) = &flying[seq];
        let next = (f64::from(*level) + wobble(now_ms, seq)).round() as i64;
        // The id came out of the same store one statement ago.
        let _ = fleet.patch_battery(id, next);
    }

    fn advance_missions(&mut self, now_ms: EpochMillis, missions: &MissionStore) {
        let active = missions.by_status(MissionStatus::Active);
        let active_ids: Vec<&MissionId> = active.iter().map(|mission| &mission.id).collect();
        self.progress
            .retain(|id, _| active_ids.iter().any(|active| *active == id));

        for (seq, mission) in active.iter().enumerate() {
            match self.progress.get_mut(&mission.id) {
                Some(snapshot) => snapshot.advance(now_ms, seq),
                None => {
                    self.progress.insert(
                        mission.id.clone(),
                        MissionProgress::seed(now_ms, seq, mission),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyops_core::{Drone, DroneId, DroneLocation};
    use skyops_store::MissionDraft;

    struct FixedEstimator;

    impl skyops_planner::RouteEstimator for FixedEstimator {
        fn estimate(
            &self,
            _area: &skyops_geo::SurveyArea,
            _pattern: &skyops_core::FlightPattern,
            _parameters: &skyops_core::MissionParameters,
        ) -> skyops_planner::RouteEstimate {
            skyops_planner::RouteEstimate {
                distance_km: 2.0,
                duration_min: 30.0,
            }
        }
    }

    fn drone(id: &str, status: DroneStatus, battery: u8) -> Drone {
        Drone {
            id: DroneId::new(id),
            name: id.to_string(),
            model: "EVO II Pro".to_string(),
            battery_pct: battery,
            status,
            location: DroneLocation {
                position: skyops_geo::LatLng::new(34.0522, -118.2437),
                name: "Los Angeles Facility".to_string(),
            },
            flight_hours: 10.0,
            last_maintenance_ms: 1_705_276_800_000,
            capabilities: Vec::new(),
            max_flight_time_min: 40,
            max_range_km: 9.0,
            payload_capacity_kg: 1.8,
        }
    }

    fn stores() -> (FleetStore, MissionStore) {
        let fleet = FleetStore::new(vec![
            drone("drone-001", DroneStatus::InMission, 50),
            drone("drone-002", DroneStatus::Available, 80),
        ])
        .unwrap();
        let mut missions = MissionStore::new(Vec::new(), Box::new(FixedEstimator)).unwrap();
        let created = missions
            .create(MissionDraft::default(), 1_706_800_000_000)
            .unwrap();
        missions
            .set_status(&created.id, MissionStatus::Active)
            .unwrap();
        (fleet, missions)
    }

    #[test]
    fn battery_stays_in_range_across_many_ticks() {
        let clock = Arc::new(ManualClock::new(1_706_800_000_000));
        let mut sim = Simulation::new(clock.clone());
        let (mut fleet, mut missions) = stores();
        for _ in 0..500 {
            clock.advance(2_000);
            sim.tick(&mut fleet, &mut missions);
        }
        for drone in fleet.list() {
            assert!(drone.battery_pct <= 100);
        }
        assert_eq!(sim.ticks(), 500);
    }

    #[test]
    fn idle_drones_keep_their_charge() {
        let clock = Arc::new(ManualClock::new(1_706_800_000_000));
        let mut sim = Simulation::new(clock.clone());
        let (mut fleet, mut missions) = stores();
        for _ in 0..50 {
            clock.advance(2_000);
            sim.tick(&mut fleet, &mut missions);
        }
        let idle = fleet.get(&DroneId::new("drone-002")).unwrap();
        assert_eq!(idle.battery_pct, 80);
    }

    #[test]
    fn progress_climbs_to_completion_and_caps() {
        let clock = Arc::new(ManualClock::new(1_706_800_000_000));
        let mut sim = Simulation::new(clock.clone());
        let (mut fleet, mut missions) = stores();

        sim.tick(&mut fleet, &mut missions);
        let seeded = sim.progress().values().next().unwrap().clone();
        assert!(seeded.percent >= 20.0 && seeded.percent <= 80.0);
        assert!(seeded.current_waypoint <= seeded.total_waypoints);

        let mut last = seeded.percent;
        for _ in 0..200 {
            clock.advance(2_000);
            sim.tick(&mut fleet, &mut missions);
            let snapshot = sim.progress().values().next().unwrap();
            assert!(snapshot.percent >= last);
            assert!(snapshot.percent <= 100.0);
            last = snapshot.percent;
        }
        let done = sim.progress().values().next().unwrap();
        assert_eq!(done.percent, 100.0);
        assert_eq!(done.current_waypoint, done.total_waypoints);
        assert_eq!(done.time_remaining_min, 0.0);
    }

    #[test]
    fn aborted_missions_drop_out_of_the_progress_table() {
        let clock = Arc::new(ManualClock::new(1_706_800_000_000));
        let mut sim = Simulation::new(clock.clone());
        let (mut fleet, mut missions) = stores();
        sim.tick(&mut fleet, &mut missions);
        assert_eq!(sim.progress().len(), 1);

        let id = missions.list()[0].id.clone();
        missions.set_status(&id, MissionStatus::Aborted).unwrap();
        clock.advance(2_000);
        sim.tick(&mut fleet, &mut missions);
        assert!(sim.progress().is_empty());
    }
}
