//! Session controller: wires the reducer, orchestrator and render surface.

use crate::labels;
use crate::logging::{json_log, log_at, obj, v_num, v_str, Level};
use crate::orchestrator::Orchestrator;
use crate::reducer::{reduce, Action, Command};
use crate::render::{
    grid_failure_message, project_grid, project_risk, risk_failure_message, view_controls, Surface,
};
use crate::state::{Granularity, NavState};

pub struct App<S: Surface> {
    pub nav: NavState,
    pub orchestrator: Orchestrator,
    pub surface: S,
}

impl<S: Surface> App<S> {
    pub fn new(orchestrator: Orchestrator, surface: S) -> Self {
        Self { nav: NavState::new(), orchestrator, surface }
    }

    /// Run one user action to completion: mutate state through the reducer,
    /// refresh the view controls, then execute the commanded side effects.
    pub async fn dispatch(&mut self, action: Action) {
        let out = reduce(&mut self.nav, action);

        self.surface.update_controls(&view_controls(&self.nav));
        // Leaving the hour view invalidates the risk panel; skip when the
        // reducer already commanded a reset with the same placeholder.
        let commanded_reset = out.commands.iter().any(|c| matches!(c, Command::ResetRisk { .. }));
        if !commanded_reset && self.nav.view != Granularity::Hour {
            self.surface.reset_risk(labels::MSG_DRILL_HINT);
        }

        for command in out.commands {
            match command {
                Command::FetchGrid => self.run_grid_fetch().await,
                Command::FetchRisk { focus_datetime } => self.run_risk_fetch(&focus_datetime).await,
                Command::GridStatus { msg } => self.surface.set_grid_status(&msg),
                Command::ResetRisk { msg } => self.surface.reset_risk(&msg),
            }
        }
    }

    async fn run_grid_fetch(&mut self) {
        self.surface.set_grid_status(labels::MSG_COMPUTING);
        let fetch = self.orchestrator.fetch_grid(&self.nav).await;
        if !self.orchestrator.grid_is_current(fetch.generation) {
            json_log("stale_grid_dropped", obj(&[("generation", v_num(fetch.generation as f64))]));
            return;
        }
        match fetch.result {
            Ok(resp) => {
                json_log(
                    "grid_rendered",
                    obj(&[
                        ("view", v_str(resp.view.as_str())),
                        ("cells", v_num(resp.cells.len() as f64)),
                    ]),
                );
                let view = project_grid(&resp);
                self.surface.show_grid(&view);
                self.surface.show_birth_pillars(&view.birth_pillars_line);
            }
            Err(err) => {
                log_at(Level::Warn, "grid_failed", obj(&[("error", v_str(&err.to_string()))]));
                // Dependent displays are cleared so nothing stale survives a
                // failed request.
                self.surface.clear_grid();
                self.surface.update_controls(&view_controls(&self.nav));
                self.surface.set_grid_status(&grid_failure_message(&err));
                self.surface.show_birth_pillars(&format!("出生四柱：{}", labels::PLACEHOLDER));
                self.surface.reset_risk(labels::MSG_RISK_UNAVAILABLE);
            }
        }
    }

    async fn run_risk_fetch(&mut self, focus_datetime: &str) {
        self.surface.reset_risk(labels::MSG_RISK_COMPUTING);
        let fetch = self.orchestrator.fetch_risk(&self.nav, focus_datetime).await;
        if !self.orchestrator.risk_is_current(fetch.generation) {
            json_log("stale_risk_dropped", obj(&[("generation", v_num(fetch.generation as f64))]));
            return;
        }
        match fetch.result {
            Ok(resp) => {
                json_log("risk_rendered", obj(&[("prompts", v_num(resp.prompts.len() as f64))]));
                self.surface.show_risk(&project_risk(&resp));
            }
            Err(err) => {
                log_at(Level::Warn, "risk_failed", obj(&[("error", v_str(&err.to_string()))]));
                self.surface.reset_risk(&risk_failure_message(&err));
            }
        }
    }
}
