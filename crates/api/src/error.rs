// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::response_policy::ResponsePolicyError;
use compass_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A submitted response violated the response policy.
    ResponsePolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// No assessment is in progress.
    NoActiveAssessment,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ResponsePolicyViolation { message } => {
                write!(f, "Response policy violation: {message}")
            }
            Self::NoActiveAssessment => {
                write!(f, "No assessment in progress: select a domain first")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ResponsePolicyError> for ApiError {
    fn from(err: ResponsePolicyError) -> Self {
        Self::ResponsePolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownDomain(value) => ApiError::InvalidInput {
            field: String::from("domain"),
            message: format!("Unknown domain '{value}'"),
        },
        DomainError::DuplicateScenarioId(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_scenario_id"),
            message: format!("Scenario identifier '{id}' appears more than once"),
        },
        DomainError::DuplicateOptionId { scenario, option } => ApiError::DomainRuleViolation {
            rule: String::from("unique_option_id"),
            message: format!(
                "Option identifier '{option}' appears more than once in scenario '{scenario}'"
            ),
        },
        DomainError::NotEnoughOptions { scenario, count } => ApiError::DomainRuleViolation {
            rule: String::from("minimum_options"),
            message: format!("Scenario '{scenario}' has {count} options; at least 2 are required"),
        },
    }
}
