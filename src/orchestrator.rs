//! Turns navigation state into outbound queries and classifies outcomes.
//!
//! Every issued fetch carries a monotonically increasing generation per
//! display section (grid, risk). A resolution whose generation no longer
//! matches the latest issued one is stale and must be discarded by the
//! caller, so an out-of-order resolution can never overwrite a newer one.

use crate::api::types::{BehaviorRequest, BehaviorResponse, HeatmapRequest, HeatmapResponse};
use crate::api::{AnalysisBackend, ApiError};
use crate::labels;
use crate::logging::{json_log, obj, v_num, v_str};
use crate::state::NavState;

pub struct Orchestrator {
    backend: Box<dyn AnalysisBackend + Send + Sync>,
    grid_generation: u64,
    risk_generation: u64,
}

/// Resolved grid fetch, tagged with the generation it was issued under.
pub struct GridFetch {
    pub generation: u64,
    pub result: Result<HeatmapResponse, ApiError>,
}

pub struct RiskFetch {
    pub generation: u64,
    pub result: Result<BehaviorResponse, ApiError>,
}

/// Build the grid query for the current state. Missing birth profile is a
/// local validation failure; the network is never contacted.
pub fn grid_request(state: &NavState) -> Result<HeatmapRequest, ApiError> {
    let birth = state
        .birth
        .clone()
        .ok_or_else(|| ApiError::Validation(labels::MSG_NEED_PROFILE.to_string()))?;
    Ok(HeatmapRequest {
        birth,
        view: state.view,
        year: Some(state.year),
        month: state.month,
        day: state.day,
    })
}

pub fn risk_request(state: &NavState, focus_datetime: &str) -> Result<BehaviorRequest, ApiError> {
    let birth = state
        .birth
        .clone()
        .ok_or_else(|| ApiError::Validation(labels::MSG_NEED_PROFILE.to_string()))?;
    Ok(BehaviorRequest { birth, focus_datetime: focus_datetime.to_string() })
}

impl Orchestrator {
    pub fn new(backend: Box<dyn AnalysisBackend + Send + Sync>) -> Self {
        Self { backend, grid_generation: 0, risk_generation: 0 }
    }

    pub async fn fetch_grid(&mut self, state: &NavState) -> GridFetch {
        self.grid_generation += 1;
        let generation = self.grid_generation;
        json_log(
            "fetch_grid",
            obj(&[
                ("generation", v_num(generation as f64)),
                ("view", v_str(state.view.as_str())),
                ("year", v_num(state.year as f64)),
            ]),
        );
        let result = match grid_request(state) {
            Ok(req) => self.backend.fetch_heatmap(&req).await,
            Err(err) => Err(err),
        };
        GridFetch { generation, result }
    }

    pub async fn fetch_risk(&mut self, state: &NavState, focus_datetime: &str) -> RiskFetch {
        self.risk_generation += 1;
        let generation = self.risk_generation;
        json_log(
            "fetch_risk",
            obj(&[
                ("generation", v_num(generation as f64)),
                ("focus", v_str(focus_datetime)),
            ]),
        );
        let result = match risk_request(state, focus_datetime) {
            Ok(req) => self.backend.fetch_behavior(&req).await,
            Err(err) => Err(err),
        };
        RiskFetch { generation, result }
    }

    /// True iff no newer grid fetch has been issued since `generation`.
    pub fn grid_is_current(&self, generation: u64) -> bool {
        generation == self.grid_generation
    }

    pub fn risk_is_current(&self, generation: u64) -> bool {
        generation == self.risk_generation
    }

    pub async fn health(&self) -> Result<(), ApiError> {
        self.backend.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BirthProfile, Calendar, Gender, Granularity};

    #[test]
    fn grid_request_requires_profile() {
        let state = NavState::new();
        match grid_request(&state) {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, labels::MSG_NEED_PROFILE),
            Err(other) => panic!("expected validation failure, got {other:?}"),
            Ok(_) => panic!("request built without a birth profile"),
        }
    }

    #[test]
    fn grid_request_carries_pinned_coordinates() {
        let mut state = NavState::new();
        state.birth = Some(BirthProfile {
            gender: Gender::Male,
            calendar: Calendar::Lunar,
            birth_date: "1984-02-02".to_string(),
            birth_time: "23:15".to_string(),
            is_leap_month: true,
        });
        state.view = Granularity::Day;
        state.year = 2023;
        state.month = Some(6);
        state.day = Some(15);

        let req = grid_request(&state).unwrap();
        assert_eq!(req.view, Granularity::Day);
        assert_eq!(req.year, Some(2023));
        assert_eq!(req.month, Some(6));
        assert_eq!(req.day, Some(15));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["view"], "day");
        assert_eq!(body["birth"]["calendar"], "lunar");
        assert_eq!(body["birth"]["is_leap_month"], true);
    }
}
