use serde::{Deserialize, Serialize};
use skyops_core::{
    DroneId, EpochMillis, FlightPattern, Mission, MissionId, MissionParameters, MissionPriority,
    MissionStatus, MissionType, OpsError, OpsResult, WeatherCondition,
};
use skyops_geo::{LatLng, SurveyArea};
use skyops_planner::RouteEstimator;
use std::collections::HashSet;

const DAY_MS: EpochMillis = 24 * 60 * 60 * 1000;

/// Dashboard aggregate over the mission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStats {
    pub total: usize,
    pub planned: usize,
    pub active: usize,
    pub completed: usize,
}

/// Partial mission assembled by the planning wizard. Every missing field is
/// filled with a fixed default at creation time.
#[derive(Debug, Clone, Default)]
pub struct MissionDraft {
    pub name: Option<String>,
    pub mission_type: Option<MissionType>,
    pub description: Option<String>,
    pub survey_area: Option<SurveyArea>,
    pub flight_pattern: Option<FlightPattern>,
    pub parameters: Option<MissionParameters>,
    pub assigned_drone: Option<DroneId>,
    pub scheduled_at_ms: Option<EpochMillis>,
    pub priority: Option<MissionPriority>,
    pub weather: Option<WeatherCondition>,
}

/// In-memory mission state: the mission list, the currently viewed mission,
/// and the injected route estimator used once per creation.
///
/// Single-threaded and synchronous, like the fleet store. Status is a
/// guarded state machine: replacement-style updates and direct status sets
/// both go through [`MissionStatus::can_transition`].
pub struct MissionStore {
    missions: Vec<Mission>,
    selected: Option<MissionId>,
    estimator: Box<dyn RouteEstimator>,
    create_seq: u64,
}

impl MissionStore {
    pub fn new(missions: Vec<Mission>, estimator: Box<dyn RouteEstimator>) -> OpsResult<Self> {
        let mut seen = HashSet::new();
        for mission in &missions {
            if !seen.insert(mission.id.clone()) {
                return Err(OpsError::invalid_input(format!(
                    "duplicate mission id {}",
                    mission.id
                )));
            }
        }
        Ok(Self {
            missions,
            selected: None,
            estimator,
            create_seq: 0,
        })
    }

    /// All missions in insertion order.
    pub fn list(&self) -> &[Mission] {
        &self.missions
    }

    pub fn get(&self, id: &MissionId) -> Option<&Mission> {
        self.missions.iter().find(|mission| &mission.id == id)
    }

    pub fn by_status(&self, status: MissionStatus) -> Vec<&Mission> {
        self.missions
            .iter()
            .filter(|mission| mission.status == status)
            .collect()
    }

    pub fn by_type(&self, mission_type: MissionType) -> Vec<&Mission> {
        self.missions
            .iter()
            .filter(|mission| mission.mission_type == mission_type)
            .collect()
    }

    /// Creates a mission from the wizard draft. Missing fields get fixed
    /// defaults, the id derives from `now_ms` (a sequence suffix keeps
    /// same-millisecond creations distinct within the session), and the
    /// duration/distance estimates are computed once here, by the injected
    /// estimator, and never recomputed.
    pub fn create(&mut self, draft: MissionDraft, now_ms: EpochMillis) -> OpsResult<Mission> {
        let parameters = draft.parameters.unwrap_or_default();
        validate_parameters(&parameters)?;

        let survey_area = draft.survey_area.unwrap_or_else(default_survey_area);
        let flight_pattern = draft.flight_pattern.unwrap_or_default();
        let estimate = self
            .estimator
            .estimate(&survey_area, &flight_pattern, &parameters);

        let mut id = MissionId::from_timestamp(now_ms);
        while self.get(&id).is_some() {
            self.create_seq += 1;
            id = MissionId::from_timestamp_seq(now_ms, self.create_seq);
        }

        let name = draft
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Untitled Mission".to_string());

        let mission = Mission {
            id,
            name,
            mission_type: draft.mission_type.unwrap_or(MissionType::Inspection),
            description: draft.description,
            survey_area,
            flight_pattern,
            parameters,
            assigned_drone: draft.assigned_drone,
            status: MissionStatus::Planned,
            created_at_ms: now_ms,
            scheduled_at_ms: draft.scheduled_at_ms.unwrap_or(now_ms + DAY_MS),
            estimated_duration_min: estimate.duration_min,
            estimated_distance_km: estimate.distance_km,
            priority: draft.priority.unwrap_or_default(),
            weather: draft.weather,
        };
        self.missions.push(mission.clone());
        Ok(mission)
    }

    /// Whole-record replacement keyed by id. A status change smuggled in
    /// through the replacement is held to the same transition table as
    /// [`set_status`](Self::set_status).
    pub fn update(&mut self, mission: Mission) -> OpsResult<()> {
        validate_parameters(&mission.parameters)?;
        let slot = self
            .missions
            .iter_mut()
            .find(|existing| existing.id == mission.id)
            .ok_or_else(|| OpsError::not_found(format!("no mission {}", mission.id)))?;
        if !slot.status.can_transition(mission.status) {
            return Err(OpsError::invalid_transition(format!(
                "mission {}: {:?} -> {:?}",
                mission.id, slot.status, mission.status
            )));
        }
        *slot = mission;
        Ok(())
    }

    /// Guarded status change; same-status writes are accepted as no-ops.
    pub fn set_status(&mut self, id: &MissionId, next: MissionStatus) -> OpsResult<()> {
        let mission = self
            .missions
            .iter_mut()
            .find(|mission| &mission.id == id)
            .ok_or_else(|| OpsError::not_found(format!("no mission {id}")))?;
        if !mission.status.can_transition(next) {
            return Err(OpsError::invalid_transition(format!(
                "mission {}: {:?} -> {:?}",
                id, mission.status, next
            )));
        }
        mission.status = next;
        Ok(())
    }

    /// Removes exactly one mission. The selection is cleared when it pointed
    /// at the removed record.
    pub fn delete(&mut self, id: &MissionId) -> OpsResult<Mission> {
        let index = self
            .missions
            .iter()
            .position(|mission| &mission.id == id)
            .ok_or_else(|| OpsError::not_found(format!("no mission {id}")))?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Ok(self.missions.remove(index))
    }

    /// Sets the mission under detailed view; `None` clears it.
    pub fn select(&mut self, id: Option<MissionId>) -> OpsResult<()> {
        if let Some(id) = &id {
            if self.get(id).is_none() {
                return Err(OpsError::not_found(format!("no mission {id}")));
            }
        }
        self.selected = id;
        Ok(())
    }

    pub fn selected(&self) -> Option<&Mission> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn stats(&self) -> MissionStats {
        let count = |wanted: MissionStatus| self.by_status(wanted).len();
        MissionStats {
            total: self.missions.len(),
            planned: count(MissionStatus::Planned),
            active: count(MissionStatus::Active),
            completed: count(MissionStatus::Completed),
        }
    }
}

/// Fallback survey block used when the wizard never drew an area.
fn default_survey_area() -> SurveyArea {
    SurveyArea::Rectangle {
        vertices: vec![
            LatLng::new(40.7580, -73.9855),
            LatLng::new(40.7590, -73.9855),
            LatLng::new(40.7590, -73.9835),
            LatLng::new(40.7580, -73.9835),
        ],
    }
}

fn validate_parameters(parameters: &MissionParameters) -> OpsResult<()> {
    if parameters.overlap_pct > 100 || parameters.side_overlap_pct > 100 {
        return Err(OpsError::invalid_input("overlap percentage above 100"));
    }
    if parameters.battery_return_pct > 100 {
        return Err(OpsError::invalid_input(
            "battery return threshold above 100",
        ));
    }
    if !parameters.altitude_m.is_finite() || parameters.altitude_m <= 0.0 {
        return Err(OpsError::invalid_input("altitude must be positive"));
    }
    if !parameters.speed_mps.is_finite() || parameters.speed_mps <= 0.0 {
        return Err(OpsError::invalid_input("speed must be positive"));
    }
    if !parameters.max_wind_mps.is_finite() || parameters.max_wind_mps < 0.0 {
        return Err(OpsError::invalid_input("wind limit must not be negative"));
    }
    if !parameters.resolution_cm_px.is_finite() || parameters.resolution_cm_px <= 0.0 {
        return Err(OpsError::invalid_input("resolution must be positive"));
    }
    Ok(())
}
