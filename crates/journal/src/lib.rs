// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

/// Represents the specific transition performed.
///
/// An action describes what state change was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`SelectDomain`", "`SubmitResponse`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of assessment state at a point in time.
///
/// Snapshots are intentionally compact string summaries: enough to follow a
/// session's history without duplicating the full state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable event recording one state transition.
///
/// Every transition produces exactly one event, including transitions that
/// were requested from an invalid state and therefore left the state
/// unchanged. Events capture:
/// - What transition was requested (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
/// - Whether the command actually applied (applied)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// The action that was requested.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// Whether the command applied. `false` marks a command that was
    /// ignored as a no-op (e.g., `Next` with no domain selected).
    pub applied: bool,
}

impl TransitionEvent {
    /// Creates a new `TransitionEvent`.
    ///
    /// Once created, an event is immutable.
    ///
    /// # Arguments
    ///
    /// * `action` - The action that was requested
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `applied` - Whether the command applied
    #[must_use]
    pub const fn new(
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        applied: bool,
    ) -> Self {
        Self {
            action,
            before,
            after,
            applied,
        }
    }
}
