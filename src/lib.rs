//! Client core for a hierarchical time-drill-down heatmap.
//!
//! Architecture:
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ User Action  │────►│   Reducer    │────►│   Commands   │
//! │ (stdin/etc)  │     │  (pure fn)   │     │ (fetch/etc)  │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!                      ┌──────────────┐     ┌──────▼───────┐
//!                      │   Surface    │◄────│ Orchestrator │
//!                      │ (capability) │     │ (HTTP/gen#)  │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! The remote analysis engine computes all domain values (pillar labels,
//! ten-god scores, risk classification). This crate owns the drill-down
//! navigation state, request orchestration, and the projection of responses
//! into renderable views.

pub mod api;
pub mod app;
pub mod clock;
pub mod labels;
pub mod logging;
pub mod orchestrator;
pub mod reducer;
pub mod render;
pub mod state;
