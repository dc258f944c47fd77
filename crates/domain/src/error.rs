// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The domain identifier is not a known domain.
    UnknownDomain(String),
    /// Two scenarios in the catalog share an identifier.
    DuplicateScenarioId(String),
    /// Two options within a scenario share an identifier.
    DuplicateOptionId {
        /// The scenario containing the duplicate.
        scenario: String,
        /// The duplicate option identifier.
        option: String,
    },
    /// A scenario has fewer options than the most/least selection requires.
    NotEnoughOptions {
        /// The scenario identifier.
        scenario: String,
        /// The number of options found.
        count: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDomain(value) => write!(f, "Unknown domain '{value}'"),
            Self::DuplicateScenarioId(id) => {
                write!(f, "Scenario identifier '{id}' appears more than once")
            }
            Self::DuplicateOptionId { scenario, option } => {
                write!(
                    f,
                    "Option identifier '{option}' appears more than once in scenario '{scenario}'"
                )
            }
            Self::NotEnoughOptions { scenario, count } => {
                write!(
                    f,
                    "Scenario '{scenario}' has {count} options; at least 2 are required"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
