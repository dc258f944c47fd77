// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::{AssessmentState, TransitionResult};
use compass_catalog::Catalog;
use compass_domain::{AssessmentResult, Scenario, UserResponse, score_assessment};
use compass_journal::{Action, StateSnapshot, TransitionEvent};

/// Applies a command to the current state, producing a new state and a
/// journal event.
///
/// This function is total and pure: it never fails and never mutates its
/// inputs. Commands issued from an invalid state (e.g., `Next` before any
/// domain is selected) return the unchanged state with the event marked as
/// not applied — the presentation layer is responsible for not exposing
/// such controls, but the state machine stays defensive.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog (consulted by `SelectDomain`)
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// A [`TransitionResult`] containing the new state and the event.
#[must_use]
pub fn apply(catalog: &Catalog, state: &AssessmentState, command: Command) -> TransitionResult {
    match command {
        Command::SelectDomain(domain) => {
            let before: StateSnapshot = state.to_snapshot();

            // Selecting a domain is a hard reset: nothing carries over
            // from a prior session, even mid-progress
            let scenarios: Vec<Scenario> = catalog.scenarios(domain);
            let new_state: AssessmentState = AssessmentState {
                selected_domain: Some(domain),
                current_scenario_index: 0,
                scenarios,
                responses: Vec::new(),
                completed: false,
                result: None,
            };

            let after: StateSnapshot = new_state.to_snapshot();
            let action: Action = Action::new(
                String::from("SelectDomain"),
                Some(format!(
                    "Selected domain '{domain}' with {} scenarios",
                    new_state.scenarios.len()
                )),
            );

            TransitionResult {
                new_state,
                event: TransitionEvent::new(action, before, after, true),
            }
        }
        Command::Next => move_cursor(state, "Next", 1),
        Command::Previous => move_cursor(state, "Previous", -1),
        Command::SubmitResponse(response) => {
            if state.selected_domain.is_none() {
                return ignored(state, "SubmitResponse");
            }

            let before: StateSnapshot = state.to_snapshot();
            let scenario_id: String = response.scenario_id.clone();

            // Upsert by scenario identifier: an existing response is
            // replaced wholesale, never merged field-by-field
            let mut new_responses: Vec<UserResponse> = state.responses.clone();
            let replaced: bool = match new_responses
                .iter_mut()
                .find(|existing| existing.scenario_id == scenario_id)
            {
                Some(existing) => {
                    *existing = response;
                    true
                }
                None => {
                    new_responses.push(response);
                    false
                }
            };

            let new_state: AssessmentState = AssessmentState {
                responses: new_responses,
                ..state.clone()
            };

            let after: StateSnapshot = new_state.to_snapshot();
            let details: String = if replaced {
                format!("Replaced response for scenario '{scenario_id}'")
            } else {
                format!("Recorded response for scenario '{scenario_id}'")
            };
            let action: Action = Action::new(String::from("SubmitResponse"), Some(details));

            TransitionResult {
                new_state,
                event: TransitionEvent::new(action, before, after, true),
            }
        }
        Command::CompleteAssessment => {
            if state.selected_domain.is_none() {
                return ignored(state, "CompleteAssessment");
            }

            let before: StateSnapshot = state.to_snapshot();

            // Scoring is deterministic over the current responses, so a
            // repeated completion recomputes an identical result
            let result: AssessmentResult = score_assessment(&state.scenarios, &state.responses);
            let details: String = format!(
                "Scored {} responses: {}/{}",
                state.responses.len(),
                result.total_score,
                result.max_possible_score
            );

            let new_state: AssessmentState = AssessmentState {
                completed: true,
                result: Some(result),
                ..state.clone()
            };

            let after: StateSnapshot = new_state.to_snapshot();
            let action: Action = Action::new(String::from("CompleteAssessment"), Some(details));

            TransitionResult {
                new_state,
                event: TransitionEvent::new(action, before, after, true),
            }
        }
        Command::Reset => {
            let before: StateSnapshot = state.to_snapshot();
            let new_state: AssessmentState = AssessmentState::new();
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("Reset"),
                Some(String::from("Assessment reset to initial state")),
            );

            TransitionResult {
                new_state,
                event: TransitionEvent::new(action, before, after, true),
            }
        }
    }
}

/// Moves the cursor by one step in either direction, clamped into range.
///
/// A step at the boundary is accepted but leaves the cursor where it is.
fn move_cursor(state: &AssessmentState, name: &str, step: i8) -> TransitionResult {
    if state.selected_domain.is_none() {
        return ignored(state, name);
    }

    let before: StateSnapshot = state.to_snapshot();
    let current: usize = state.current_index();
    let last: usize = state.scenarios.len().saturating_sub(1);
    let target: usize = if step >= 0 {
        current.saturating_add(1).min(last)
    } else {
        current.saturating_sub(1)
    };

    let new_state: AssessmentState = AssessmentState {
        current_scenario_index: target,
        ..state.clone()
    };

    let after: StateSnapshot = new_state.to_snapshot();
    let details: String = if target == current {
        format!("Cursor held at scenario {current}")
    } else {
        format!("Cursor moved from scenario {current} to {target}")
    };
    let action: Action = Action::new(name.to_string(), Some(details));

    TransitionResult {
        new_state,
        event: TransitionEvent::new(action, before, after, true),
    }
}

/// Builds the no-op transition for a command issued with no domain
/// selected.
fn ignored(state: &AssessmentState, name: &str) -> TransitionResult {
    let snapshot: StateSnapshot = state.to_snapshot();
    let action: Action = Action::new(
        name.to_string(),
        Some(String::from("Ignored: no domain selected")),
    );

    TransitionResult {
        new_state: state.clone(),
        event: TransitionEvent::new(action, snapshot.clone(), snapshot, false),
    }
}
