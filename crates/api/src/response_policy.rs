// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response policy validation.
//!
//! This module enforces the boundary rules for submitted responses. The
//! state machine itself tolerates malformed responses (scoring silently
//! skips anything it cannot resolve), so the API boundary is where they
//! are rejected with a usable message.

use crate::request_response::SubmitResponseRequest;
use compass::AssessmentState;
use compass_domain::Scenario;
use thiserror::Error;

/// Response policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponsePolicyError {
    /// No domain has been selected yet.
    #[error("No assessment in progress: select a domain first")]
    NoActiveAssessment,

    /// The scenario is not part of the loaded assessment.
    #[error("Scenario '{scenario_id}' is not part of the current assessment")]
    UnknownScenario { scenario_id: String },

    /// A chosen option does not belong to the scenario.
    #[error("Option '{option_id}' does not belong to scenario '{scenario_id}'")]
    UnknownOption {
        scenario_id: String,
        option_id: String,
    },

    /// The same option was named both most and least effective.
    #[error("Option '{option_id}' cannot be both the most and least effective choice")]
    SameOptionForBoth { option_id: String },
}

/// Validates a submitted response against the current assessment state.
///
/// # Arguments
///
/// * `state` - The current assessment state
/// * `request` - The submitted response
///
/// # Returns
///
/// * `Ok(())` if the response may be recorded
/// * `Err(ResponsePolicyError)` describing the first violation found
///
/// # Errors
///
/// Returns an error if:
/// - No domain is selected
/// - The scenario is not in the loaded scenario list
/// - A chosen option identifier does not belong to the scenario
/// - The most- and least-effective choices name the same option
pub fn validate_response(
    state: &AssessmentState,
    request: &SubmitResponseRequest,
) -> Result<(), ResponsePolicyError> {
    if state.selected_domain.is_none() {
        return Err(ResponsePolicyError::NoActiveAssessment);
    }

    let scenario: &Scenario = state
        .scenarios
        .iter()
        .find(|scenario| scenario.id == request.scenario_id)
        .ok_or_else(|| ResponsePolicyError::UnknownScenario {
            scenario_id: request.scenario_id.clone(),
        })?;

    for option_id in [&request.most_effective_id, &request.least_effective_id]
        .into_iter()
        .flatten()
    {
        if scenario.option(option_id).is_none() {
            return Err(ResponsePolicyError::UnknownOption {
                scenario_id: scenario.id.clone(),
                option_id: option_id.clone(),
            });
        }
    }

    if let (Some(most), Some(least)) = (&request.most_effective_id, &request.least_effective_id) {
        if most == least {
            return Err(ResponsePolicyError::SameOptionForBoth {
                option_id: most.clone(),
            });
        }
    }

    Ok(())
}
