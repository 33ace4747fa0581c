//! Pure reducer: (NavState, Action) -> (NavState, Vec<Command>)
//!
//! All drill-down transitions happen here. The reducer describes side effects
//! as commands instead of performing them, so every transition is testable
//! without a rendering surface or a network.

use crate::clock;
use crate::labels;
use crate::state::{BirthProfile, Granularity, NavState};

/// A user-originated navigation action.
#[derive(Debug, Clone)]
pub enum Action {
    /// Start (or restart) a session with a fresh birth profile.
    Generate(BirthProfile),
    /// A rendered cell was clicked; carries the cell's timestamp.
    CellClick { iso_datetime: String },
    /// Step back to the coarser granularity.
    Back,
    /// Page the pinned year at the year view.
    PageYear(i32),
}

/// Side effect requested by a transition. The session controller executes
/// these after the state mutation has fully settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the grid for the current navigation state.
    FetchGrid,
    /// Fetch risk prompts for an exact moment (hour-leaf action).
    FetchRisk { focus_datetime: String },
    /// Surface a local status message on the grid panel.
    GridStatus { msg: String },
    /// Reset the risk panel to a placeholder message.
    ResetRisk { msg: String },
}

#[derive(Debug, Default)]
pub struct ReducerOutput {
    pub commands: Vec<Command>,
}

/// Pure transition function.
///
/// State is mutated synchronously; no command has been executed yet when this
/// returns, so a failed fetch can never leave navigation partially applied.
pub fn reduce(state: &mut NavState, action: Action) -> ReducerOutput {
    let mut commands = Vec::new();

    match action {
        Action::Generate(profile) => {
            state.birth = Some(profile);
            state.view = Granularity::Year;
            state.month = None;
            state.day = None;
            // Reset precedes the fetch so a failure's "cannot generate"
            // status is the last write to the risk panel.
            commands.push(Command::ResetRisk { msg: labels::MSG_DRILL_HINT.to_string() });
            commands.push(Command::FetchGrid);
        }

        Action::CellClick { iso_datetime } => {
            if state.birth.is_none() {
                commands.push(Command::GridStatus { msg: labels::MSG_NEED_PROFILE.to_string() });
                return ReducerOutput { commands };
            }
            let Some(moment) = clock::parse_moment(&iso_datetime) else {
                // Malformed timestamp: abort with no partial navigation.
                commands.push(Command::GridStatus { msg: labels::MSG_BAD_TIMESTAMP.to_string() });
                return ReducerOutput { commands };
            };
            state.year = moment.year;
            state.month = Some(moment.month);
            state.day = Some(moment.day);
            match state.view.next() {
                Some(next) => {
                    state.view = next;
                    commands.push(Command::ResetRisk { msg: labels::MSG_DRILL_HINT.to_string() });
                    commands.push(Command::FetchGrid);
                }
                // Hour is a leaf: granularity stays put, fetch the
                // point-in-time risk prompts instead.
                None => {
                    commands.push(Command::FetchRisk { focus_datetime: iso_datetime });
                }
            }
        }

        Action::Back => {
            if let Some(prev) = state.view.prev() {
                state.view = prev;
                commands.push(Command::FetchGrid);
            }
        }

        Action::PageYear(delta) => {
            // Year paging only exists at the year view.
            if state.view == Granularity::Year {
                state.year += delta;
                commands.push(Command::FetchGrid);
            }
        }
    }

    ReducerOutput { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Calendar, Gender};

    fn profile() -> BirthProfile {
        BirthProfile {
            gender: Gender::Female,
            calendar: Calendar::Solar,
            birth_date: "1990-05-01".to_string(),
            birth_time: "08:30".to_string(),
            is_leap_month: false,
        }
    }

    fn session_at(view: Granularity) -> NavState {
        let mut state = NavState::new();
        state.birth = Some(profile());
        state.view = view;
        state
    }

    #[test]
    fn generate_resets_to_year_view() {
        let mut state = NavState::new();
        state.view = Granularity::Day;
        state.month = Some(6);
        state.day = Some(15);

        let out = reduce(&mut state, Action::Generate(profile()));

        assert_eq!(state.view, Granularity::Year);
        assert_eq!(state.month, None);
        assert_eq!(state.day, None);
        assert!(state.birth.is_some());
        assert_eq!(
            out.commands,
            vec![
                Command::ResetRisk { msg: labels::MSG_DRILL_HINT.to_string() },
                Command::FetchGrid,
            ]
        );
    }

    #[test]
    fn risk_reset_precedes_grid_fetch() {
        // The fetch must be the last risk-panel-affecting command, so a
        // failed grid fetch leaves its "cannot generate" reset in place.
        for action in [
            Action::Generate(profile()),
            Action::CellClick { iso_datetime: "2023-06-15T08:00:00".to_string() },
        ] {
            let mut state = session_at(Granularity::Year);
            let out = reduce(&mut state, action);
            let reset_at = out
                .commands
                .iter()
                .position(|c| matches!(c, Command::ResetRisk { .. }))
                .expect("drill transitions reset the risk panel");
            let fetch_at = out
                .commands
                .iter()
                .position(|c| *c == Command::FetchGrid)
                .expect("drill transitions fetch the grid");
            assert!(reset_at < fetch_at);
        }
    }

    #[test]
    fn cell_click_advances_and_pins_coordinates() {
        let mut state = session_at(Granularity::Year);
        let out = reduce(
            &mut state,
            Action::CellClick { iso_datetime: "2023-06-15T08:00:00".to_string() },
        );
        assert_eq!(state.view, Granularity::Month);
        assert_eq!(state.year, 2023);
        assert_eq!(state.month, Some(6));
        assert_eq!(state.day, Some(15));
        assert_eq!(
            out.commands,
            vec![
                Command::ResetRisk { msg: labels::MSG_DRILL_HINT.to_string() },
                Command::FetchGrid,
            ]
        );
    }

    #[test]
    fn cell_click_at_hour_is_leaf_action() {
        let mut state = session_at(Granularity::Hour);
        let out = reduce(
            &mut state,
            Action::CellClick { iso_datetime: "2023-06-15T08:00:00".to_string() },
        );
        // Granularity must not change; the leaf action is a risk fetch.
        assert_eq!(state.view, Granularity::Hour);
        assert_eq!(
            out.commands,
            vec![Command::FetchRisk { focus_datetime: "2023-06-15T08:00:00".to_string() }]
        );
    }

    #[test]
    fn malformed_timestamp_leaves_state_unchanged() {
        let mut state = session_at(Granularity::Month);
        let before = (state.view, state.year, state.month, state.day);
        let out = reduce(&mut state, Action::CellClick { iso_datetime: "not-a-date".to_string() });
        assert_eq!((state.view, state.year, state.month, state.day), before);
        assert_eq!(
            out.commands,
            vec![Command::GridStatus { msg: labels::MSG_BAD_TIMESTAMP.to_string() }]
        );
    }

    #[test]
    fn cell_click_without_profile_is_rejected_locally() {
        let mut state = NavState::new();
        let out = reduce(
            &mut state,
            Action::CellClick { iso_datetime: "2023-06-15T08:00:00".to_string() },
        );
        assert_eq!(
            out.commands,
            vec![Command::GridStatus { msg: labels::MSG_NEED_PROFILE.to_string() }]
        );
    }

    #[test]
    fn back_walks_predecessor_chain() {
        for (from, to) in [
            (Granularity::Hour, Granularity::Day),
            (Granularity::Day, Granularity::Month),
            (Granularity::Month, Granularity::Year),
        ] {
            let mut state = session_at(from);
            let out = reduce(&mut state, Action::Back);
            assert_eq!(state.view, to);
            assert_eq!(out.commands, vec![Command::FetchGrid]);
        }
    }

    #[test]
    fn back_is_noop_at_year() {
        let mut state = session_at(Granularity::Year);
        let out = reduce(&mut state, Action::Back);
        assert_eq!(state.view, Granularity::Year);
        assert!(out.commands.is_empty());
    }

    #[test]
    fn page_year_is_invertible() {
        let mut state = session_at(Granularity::Year);
        state.year = 2024;
        reduce(&mut state, Action::PageYear(1));
        assert_eq!(state.year, 2025);
        reduce(&mut state, Action::PageYear(-1));
        assert_eq!(state.year, 2024);
        assert_eq!(state.view, Granularity::Year);
    }

    #[test]
    fn page_year_disallowed_off_year_view() {
        let mut state = session_at(Granularity::Day);
        let year = state.year;
        let out = reduce(&mut state, Action::PageYear(1));
        assert_eq!(state.year, year);
        assert!(out.commands.is_empty());
    }
}
