//! Static label tables and fixed status strings.
//!
//! All lookups are total functions over closed enums so a missing or
//! misspelled category is a type error, not a silently rendered fallback.

use crate::api::types::{RiskCategory, RiskLevel};
use crate::state::{Granularity, PillarSlot};

pub const MSG_FILL_BIRTH: &str = "请完整填写出生日期与时间。";
pub const MSG_NEED_PROFILE: &str = "请先填写出生信息并生成热力图。";
pub const MSG_COMPUTING: &str = "计算中...";
pub const MSG_RISK_COMPUTING: &str = "生成风险提示中...";
pub const MSG_BAD_TIMESTAMP: &str = "时间格式异常，无法下钻。";
pub const MSG_DRILL_HINT: &str = "请下钻到具体时间层级后查看风险提示。";
pub const MSG_RISK_UNAVAILABLE: &str = "无法生成风险提示。";
pub const MSG_BACKEND_ERROR: &str = "后端错误，无法生成结果。";
pub const MSG_GRID_OFFLINE: &str = "后端未连接，无法生成热力图。";
pub const MSG_RISK_OFFLINE: &str = "后端未连接，无法生成风险提示。";

/// Placeholder for an absent pillar, year display, or similar.
pub const PLACEHOLDER: &str = "—";

pub const MSG_NO_SCORES: &str = "未生成十神评分";
pub const MSG_EMPTY_BUCKET: &str = "暂无";

pub fn view_label(view: Granularity) -> &'static str {
    match view {
        Granularity::Year => "年视图",
        Granularity::Month => "月视图",
        Granularity::Day => "日视图",
        Granularity::Hour => "时视图",
    }
}

pub fn pillar_slot_label(slot: PillarSlot) -> &'static str {
    match slot {
        PillarSlot::BigLuck => "大运",
        PillarSlot::Year => "流年",
        PillarSlot::Month => "流月",
        PillarSlot::Day => "流日",
        PillarSlot::Hour => "流时",
    }
}

/// User-facing relabeling of the five structural categories.
pub fn category_label(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Resource => "资源/资金获取类",
        RiskCategory::Constraint => "规则/承诺/职责类",
        RiskCategory::Support => "学习/修复/准备类",
        RiskCategory::Output => "表达/产出/波动类",
        RiskCategory::Rivalry => "竞争/对抗/消耗类",
    }
}

/// Fixed descriptive phrase per severity.
pub fn risk_level_phrase(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "结构波动更大，承载压力更高",
        RiskLevel::Medium => "结构波动与阻力中等",
        RiskLevel::Low => "结构阻力较小，波动相对低",
    }
}

/// Severity bucket title, in rendered order (low, medium, high).
pub fn risk_bucket_title(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "宜（风险暴露较低）",
        RiskLevel::Medium => "慎（风险暴露中等）",
        RiskLevel::High => "忌（风险暴露较高）",
    }
}
