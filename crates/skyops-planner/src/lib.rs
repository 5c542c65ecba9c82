use serde::{Deserialize, Serialize};
use skyops_core::{FlightPattern, FlightPatternKind, MissionParameters};
use skyops_geo::{distance_m, SurveyArea};

/// Creation-time route figures for a mission. Computed once when the record
/// is created and never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_min: f64,
}

/// Seam between the mission store and route planning. The shipped
/// implementation is a first-order sweep model; a real coverage planner can
/// replace it without touching any caller.
pub trait RouteEstimator {
    fn estimate(
        &self,
        area: &SurveyArea,
        pattern: &FlightPattern,
        parameters: &MissionParameters,
    ) -> RouteEstimate;
}

/// First-order coverage estimator.
///
/// Coverage patterns sweep the survey area in parallel tracks: track length
/// is area divided by line spacing (taken from the pattern, else derived
/// from the sensor footprint at mission altitude and the side overlap), and
/// a crosshatch flies the sweep twice. Perimeter and custom patterns follow
/// the area boundary, or the waypoint path when one exists. Duration is
/// distance over ground speed plus a fixed launch/recovery overhead and a
/// per-track turn penalty.
///
/// Deterministic: equal inputs always produce equal estimates.
#[derive(Debug, Clone)]
pub struct SweepEstimator {
    /// Sensor footprint width as a fraction of altitude.
    pub footprint_ratio: f64,
    /// Minutes charged for launch and recovery.
    pub overhead_min: f64,
    /// Seconds lost per sweep-line turn.
    pub turn_secs: f64,
}

impl Default for SweepEstimator {
    fn default() -> Self {
        Self {
            footprint_ratio: 1.0,
            overhead_min: 3.0,
            turn_secs: 8.0,
        }
    }
}

const MIN_SPACING_M: f64 = 5.0;
const MIN_DISTANCE_KM: f64 = 0.1;
const MIN_DURATION_MIN: f64 = 5.0;

impl SweepEstimator {
    fn line_spacing_m(&self, pattern: &FlightPattern, parameters: &MissionParameters) -> f64 {
        let spacing = pattern.spacing_m.unwrap_or_else(|| {
            let footprint = parameters.altitude_m * self.footprint_ratio;
            footprint * (1.0 - f64::from(parameters.side_overlap_pct) / 100.0)
        });
        spacing.max(MIN_SPACING_M)
    }

    fn path_distance_m(
        &self,
        area: &SurveyArea,
        pattern: &FlightPattern,
        parameters: &MissionParameters,
    ) -> (f64, f64) {
        match pattern.kind {
            FlightPatternKind::Crosshatch | FlightPatternKind::Grid => {
                let spacing = self.line_spacing_m(pattern, parameters);
                let sweep = area.area_m2() / spacing;
                let passes = if pattern.kind == FlightPatternKind::Crosshatch {
                    2.0
                } else {
                    1.0
                };
                // Track count approximated on a square of equal area.
                let turns = passes * area.area_m2().sqrt() / spacing;
                (sweep * passes, turns)
            }
            FlightPatternKind::Perimeter | FlightPatternKind::Custom => {
                if pattern.waypoints.len() >= 2 {
                    let legs = pattern
                        .waypoints
                        .windows(2)
                        .map(|pair| distance_m(pair[0].position, pair[1].position))
                        .sum();
                    (legs, pattern.waypoints.len() as f64)
                } else {
                    (area.perimeter_m(), 4.0)
                }
            }
        }
    }
}

impl RouteEstimator for SweepEstimator {
    fn estimate(
        &self,
        area: &SurveyArea,
        pattern: &FlightPattern,
        parameters: &MissionParameters,
    ) -> RouteEstimate {
        let (distance_m, turns) = self.path_distance_m(area, pattern, parameters);
        let speed = parameters.speed_mps.max(0.1);
        let flight_min = distance_m / speed / 60.0;
        let turn_min = turns * self.turn_secs / 60.0;

        let distance_km = (distance_m / 1000.0).max(MIN_DISTANCE_KM);
        let duration_min = (flight_min + turn_min + self.overhead_min).max(MIN_DURATION_MIN);
        RouteEstimate {
            distance_km: (distance_km * 10.0).round() / 10.0,
            duration_min: duration_min.round(),
        }
    }
}
