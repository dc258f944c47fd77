// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use compass_domain::{AssessmentResult, Domain, Scenario, UserResponse};
use compass_journal::{StateSnapshot, TransitionEvent};

/// The complete state of one assessment session.
///
/// The state is an explicitly owned value: it is threaded through each
/// transition call rather than held in ambient context, and every
/// transition is a pure function from the old state to a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentState {
    /// The domain selected for this session, if any.
    pub selected_domain: Option<Domain>,
    /// The raw scenario cursor. Read through [`Self::current_index`],
    /// which clamps it into range.
    pub current_scenario_index: usize,
    /// The ordered scenario list loaded at domain-selection time.
    pub scenarios: Vec<Scenario>,
    /// The accumulated responses, at most one per scenario identifier.
    pub responses: Vec<UserResponse>,
    /// Whether the assessment has been completed.
    pub completed: bool,
    /// The derived result, present once the assessment is completed.
    pub result: Option<AssessmentResult>,
}

impl AssessmentState {
    /// Creates the initial empty state: no domain, cursor at zero, no
    /// scenarios, no responses, not completed, no result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_domain: None,
            current_scenario_index: 0,
            scenarios: Vec::new(),
            responses: Vec::new(),
            completed: false,
            result: None,
        }
    }

    /// Returns the scenario cursor clamped into `[0, scenarios.len() - 1]`.
    ///
    /// Clamping happens on every read, not only on transitions, so an
    /// out-of-range cursor from external manipulation can never escape.
    /// An empty scenario list yields 0.
    #[must_use]
    pub fn current_index(&self) -> usize {
        if self.scenarios.is_empty() {
            0
        } else {
            self.current_scenario_index.min(self.scenarios.len() - 1)
        }
    }

    /// Returns the scenario the cursor currently points at, if any.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.scenarios.get(self.current_index())
    }

    /// Looks up the stored response for a scenario, if one was submitted.
    #[must_use]
    pub fn response_for(&self, scenario_id: &str) -> Option<&UserResponse> {
        self.responses
            .iter()
            .find(|response| response.scenario_id == scenario_id)
    }

    /// Converts the state to a snapshot for journal purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let domain: &str = self.selected_domain.as_ref().map_or("none", Domain::as_str);
        StateSnapshot::new(format!(
            "domain={domain},cursor={},responses_count={},completed={}",
            self.current_index(),
            self.responses.len(),
            self.completed
        ))
    }
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a state transition.
///
/// Transitions are total: a command issued from an invalid state produces
/// the unchanged state and an event marked as not applied, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: AssessmentState,
    /// The journal event recording this transition.
    pub event: TransitionEvent,
}
