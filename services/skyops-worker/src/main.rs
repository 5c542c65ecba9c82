use skyops_config::ServiceConfig;
use skyops_observability::{init, log_shutdown, log_startup, ObservabilityConfig};
use skyops_planner::SweepEstimator;
use skyops_sim::{Simulation, SystemClock};
use skyops_store::{FleetStore, MissionStore};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("skyops-worker");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let mut fleet = FleetStore::new(skyops_fixtures::seed_fleet())
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.message))?;
    let mut missions = MissionStore::new(
        skyops_fixtures::seed_missions(),
        Box::new(SweepEstimator::default()),
    )
    .map_err(|err| io::Error::new(io::ErrorKind::Other, err.message))?;
    let mut sim = Simulation::new(Arc::new(SystemClock));

    tracing::info!(
        drones = fleet.stats().total,
        missions = missions.stats().total,
        tick_ms = config.sim_tick_ms,
        "fixtures loaded, simulation starting"
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(config.sim_tick_ms));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sim.tick(&mut fleet, &mut missions);
                publish_metrics(&fleet, &missions);
                if sim.ticks() % 30 == 0 {
                    let fleet_stats = fleet.stats();
                    tracing::info!(
                        tick = sim.ticks(),
                        average_battery_pct = fleet_stats.average_battery_pct,
                        in_mission = fleet_stats.in_mission,
                        tracked_missions = sim.progress().len(),
                        "fleet summary"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    log_shutdown(&handle);
    Ok(())
}

fn publish_metrics(fleet: &FleetStore, missions: &MissionStore) {
    let fleet_stats = fleet.stats();
    let mission_stats = missions.stats();
    metrics::counter!("skyops_sim_ticks_total").increment(1);
    metrics::gauge!("skyops_fleet_average_battery_pct").set(fleet_stats.average_battery_pct);
    metrics::gauge!("skyops_fleet_in_mission").set(fleet_stats.in_mission as f64);
    metrics::gauge!("skyops_missions_active").set(mission_stats.active as f64);
}
