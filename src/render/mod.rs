//! Render pipeline: pure projections from responses to view models.
//!
//! Nothing here touches a concrete UI toolkit. The [`Surface`] capability
//! trait is the only seam to the presentation layer, so the pipeline can be
//! exercised headlessly in tests and drive a terminal, a browser DOM, or a
//! native widget tree interchangeably.

pub mod text;

use crate::api::types::{BehaviorResponse, HeatmapResponse, RiskLevel, format_pillar};
use crate::api::ApiError;
use crate::labels;
use crate::state::{Granularity, NavState};

/// Continuous value→color mapping. Low values come out cool and light, high
/// values warm and dark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HeatColor {
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// hue = 210 − 190·value, lightness = 92 − 35·value, saturation fixed at 70%.
pub fn heat_color(value: f64) -> HeatColor {
    HeatColor {
        hue: 210.0 - 190.0 * value,
        saturation: 70.0,
        lightness: 92.0 - 35.0 * value,
    }
}

/// One rendered grid cell. `iso_datetime` is kept for click-through drill-in.
#[derive(Debug, Clone)]
pub struct CellVisual {
    pub label: String,
    pub color: HeatColor,
    pub iso_datetime: String,
    /// (slot label, pillar display) pairs for the response's granularity.
    pub pillar_lines: Vec<(&'static str, String)>,
    /// Ranked ten-god score lines; a placeholder line when the engine
    /// produced none, never a blank area.
    pub score_lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GridView {
    pub cells: Vec<CellVisual>,
    pub birth_pillars_line: String,
    pub definition: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct RiskGroup {
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RiskView {
    pub note: String,
    /// Rendered order: 宜, 慎, 忌.
    pub groups: [RiskGroup; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewControls {
    pub view_label: &'static str,
    pub back_enabled: bool,
    pub year_nav_visible: bool,
    pub year_display: String,
}

/// Project a successful grid response. Produces exactly one visual per
/// response cell; the pillar slot set is the cumulative table entry for the
/// *response's* view, not the client's.
pub fn project_grid(resp: &HeatmapResponse) -> GridView {
    let cells = resp
        .cells
        .iter()
        .map(|cell| {
            let pillar_lines = resp
                .view
                .pillar_slots()
                .iter()
                .map(|&slot| (labels::pillar_slot_label(slot), format_pillar(cell.pillars.slot(slot))))
                .collect();
            let score_lines = if cell.ten_god_scores.is_empty() {
                vec![labels::MSG_NO_SCORES.to_string()]
            } else {
                cell.ten_god_scores
                    .iter()
                    .map(|s| format!("{} {}", s.label, s.score))
                    .collect()
            };
            CellVisual {
                label: cell.label.clone(),
                color: heat_color(cell.value),
                iso_datetime: cell.iso_datetime.clone(),
                pillar_lines,
                score_lines,
            }
        })
        .collect();

    GridView {
        cells,
        birth_pillars_line: birth_pillars_line(resp),
        definition: resp.definition.clone(),
        status: resp.uncertainty_note.clone().unwrap_or_default(),
    }
}

fn birth_pillars_line(resp: &HeatmapResponse) -> String {
    match &resp.birth_pillars {
        Some(p) => format!(
            "出生四柱：年 {} · 月 {} · 日 {} · 时 {}",
            format_pillar(p.year.as_ref()),
            format_pillar(p.month.as_ref()),
            format_pillar(p.day.as_ref()),
            format_pillar(p.hour.as_ref()),
        ),
        None => format!("出生四柱：{}", labels::PLACEHOLDER),
    }
}

/// Project a successful risk response: relabel categories, bucket by
/// severity preserving response order within each bucket, and attach the
/// relative-strength percentage only when it is a finite number.
pub fn project_risk(resp: &BehaviorResponse) -> RiskView {
    let mut groups = [
        RiskGroup { title: labels::risk_bucket_title(RiskLevel::Low), lines: Vec::new() },
        RiskGroup { title: labels::risk_bucket_title(RiskLevel::Medium), lines: Vec::new() },
        RiskGroup { title: labels::risk_bucket_title(RiskLevel::High), lines: Vec::new() },
    ];
    for prompt in &resp.prompts {
        let percent = match prompt.relative_strength {
            Some(v) if v.is_finite() => format!(" · 相对占比 {}%", (v * 100.0).round() as i64),
            _ => String::new(),
        };
        let line = format!(
            "{}：{}{}",
            labels::category_label(prompt.label),
            labels::risk_level_phrase(prompt.risk_level),
            percent
        );
        let idx = match prompt.risk_level {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        };
        groups[idx].lines.push(line);
    }
    RiskView {
        note: resp.uncertainty_note.clone().unwrap_or_default(),
        groups,
    }
}

/// Failure message for the grid section: remote detail verbatim when present,
/// otherwise the generic backend message; transport failures get the
/// grid-specific offline message.
pub fn grid_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation(msg) => msg.clone(),
        ApiError::Remote { detail, .. } => {
            detail.clone().unwrap_or_else(|| labels::MSG_BACKEND_ERROR.to_string())
        }
        ApiError::Transport(_) => labels::MSG_GRID_OFFLINE.to_string(),
    }
}

pub fn risk_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation(msg) => msg.clone(),
        ApiError::Remote { detail, .. } => {
            detail.clone().unwrap_or_else(|| labels::MSG_BACKEND_ERROR.to_string())
        }
        ApiError::Transport(_) => labels::MSG_RISK_OFFLINE.to_string(),
    }
}

/// View-control projection; recomputed after every state mutation regardless
/// of fetch outcome.
pub fn view_controls(state: &NavState) -> ViewControls {
    ViewControls {
        view_label: labels::view_label(state.view),
        back_enabled: state.view != Granularity::Year,
        year_nav_visible: state.view == Granularity::Year,
        year_display: if state.view == Granularity::Year {
            state.year.to_string()
        } else {
            labels::PLACEHOLDER.to_string()
        },
    }
}

/// Capability seam to the presentation layer.
pub trait Surface {
    fn show_grid(&mut self, view: &GridView);
    fn clear_grid(&mut self);
    fn set_grid_status(&mut self, msg: &str);
    fn show_birth_pillars(&mut self, line: &str);
    fn show_risk(&mut self, view: &RiskView);
    fn reset_risk(&mut self, msg: &str);
    fn update_controls(&mut self, controls: &ViewControls);
}
