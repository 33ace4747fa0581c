//! Wire types for the two analysis endpoints.
//!
//! Responses are read-only to the client and live only for one render pass.
//! Categories and severities deserialize into closed enums; an unknown label
//! fails the exchange instead of rendering a fallback string.

use serde::{Deserialize, Serialize};

use crate::labels::PLACEHOLDER;
use crate::state::{BirthProfile, Granularity};

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRequest {
    pub birth: BirthProfile,
    pub view: Granularity,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeatmapResponse {
    pub view: Granularity,
    #[serde(default)]
    pub next_view: Option<Granularity>,
    pub cells: Vec<GridCell>,
    #[serde(default)]
    pub birth_pillars: Option<BirthPillars>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub uncertainty_note: Option<String>,
    #[serde(default)]
    pub meta: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridCell {
    pub label: String,
    /// Relative score in [0, 1]; drives the heat color.
    pub value: f64,
    pub iso_datetime: String,
    #[serde(default)]
    pub pillars: CellPillars,
    #[serde(default)]
    pub ten_god_scores: Vec<TenGodScore>,
}

/// Stem/branch pair from the remote calendrical engine. Display precedence:
/// label, then stem+branch concatenation, then a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pillar {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub stem: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

impl Pillar {
    pub fn display(&self) -> String {
        if let Some(label) = self.label.as_deref().filter(|s| !s.is_empty()) {
            return label.to_string();
        }
        let joined = format!(
            "{}{}",
            self.stem.as_deref().unwrap_or(""),
            self.branch.as_deref().unwrap_or("")
        );
        if joined.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            joined
        }
    }
}

/// Formats an optional pillar for display, `—` when absent.
pub fn format_pillar(pillar: Option<&Pillar>) -> String {
    pillar.map(Pillar::display).unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellPillars {
    #[serde(default)]
    pub big_luck: Option<Pillar>,
    #[serde(default)]
    pub year: Option<Pillar>,
    #[serde(default)]
    pub month: Option<Pillar>,
    #[serde(default)]
    pub day: Option<Pillar>,
    #[serde(default)]
    pub hour: Option<Pillar>,
}

impl CellPillars {
    pub fn slot(&self, slot: crate::state::PillarSlot) -> Option<&Pillar> {
        use crate::state::PillarSlot;
        match slot {
            PillarSlot::BigLuck => self.big_luck.as_ref(),
            PillarSlot::Year => self.year.as_ref(),
            PillarSlot::Month => self.month.as_ref(),
            PillarSlot::Day => self.day.as_ref(),
            PillarSlot::Hour => self.hour.as_ref(),
        }
    }
}

/// The four natal pillars, fetched alongside every grid response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BirthPillars {
    #[serde(default)]
    pub year: Option<Pillar>,
    #[serde(default)]
    pub month: Option<Pillar>,
    #[serde(default)]
    pub day: Option<Pillar>,
    #[serde(default)]
    pub hour: Option<Pillar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenGodScore {
    #[serde(default)]
    pub key: Option<String>,
    pub label: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BehaviorRequest {
    pub birth: BirthProfile,
    pub focus_datetime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorResponse {
    #[serde(default)]
    pub focus_datetime: Option<String>,
    pub prompts: Vec<RiskPrompt>,
    #[serde(default)]
    pub uncertainty_note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskPrompt {
    pub label: RiskCategory,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub relative_strength: Option<f64>,
}

/// The five fixed structural categories the engine reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "资源获取结构")]
    Resource,
    #[serde(rename = "约束 / 责任结构")]
    Constraint,
    #[serde(rename = "支持 / 缓冲结构")]
    Support,
    #[serde(rename = "输出 / 波动结构")]
    Output,
    #[serde(rename = "竞争 / 内耗结构")]
    Rivalry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

/// Structured payload of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
