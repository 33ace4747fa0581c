//! Plain-terminal implementation of the render surface.

use crate::render::{GridView, RiskView, Surface, ViewControls};

/// Prints each display section to stdout as it is rewritten. Cells are
/// numbered so the stdin loop can map a number back to a drill-in click;
/// `cell_timestamps` keeps the click targets of the last rendered grid.
#[derive(Default)]
pub struct TextSurface {
    pub cell_timestamps: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TextSurface {
    fn show_grid(&mut self, view: &GridView) {
        self.cell_timestamps = view.cells.iter().map(|c| c.iso_datetime.clone()).collect();
        if let Some(def) = &view.definition {
            println!("{def}");
        }
        for (idx, cell) in view.cells.iter().enumerate() {
            println!("[{}] {}  {}", idx + 1, cell.label, cell.color.css());
            for (slot, value) in &cell.pillar_lines {
                println!("    {slot} {value}");
            }
            for line in &cell.score_lines {
                println!("    {line}");
            }
        }
        if !view.status.is_empty() {
            println!("{}", view.status);
        }
    }

    fn clear_grid(&mut self) {
        self.cell_timestamps.clear();
        println!("(热力图已清空)");
    }

    fn set_grid_status(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn show_birth_pillars(&mut self, line: &str) {
        println!("{line}");
    }

    fn show_risk(&mut self, view: &RiskView) {
        if !view.note.is_empty() {
            println!("{}", view.note);
        }
        for group in &view.groups {
            println!("{}", group.title);
            if group.lines.is_empty() {
                println!("  {}", crate::labels::MSG_EMPTY_BUCKET);
            } else {
                for line in &group.lines {
                    println!("  {line}");
                }
            }
        }
    }

    fn reset_risk(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn update_controls(&mut self, controls: &ViewControls) {
        let back = if controls.back_enabled { "back可用" } else { "back禁用" };
        let nav = if controls.year_nav_visible {
            format!("年份 {} (prev/next可用)", controls.year_display)
        } else {
            format!("年份 {}", controls.year_display)
        };
        println!("== {} · {} · {} ==", controls.view_label, back, nav);
    }
}
