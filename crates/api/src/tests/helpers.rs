// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{SelectDomainRequest, SubmitResponseRequest};
use crate::{complete_assessment, select_domain, submit_response};
use compass::AssessmentState;
use compass_catalog::Catalog;
use time::OffsetDateTime;

pub fn create_test_catalog() -> Catalog {
    Catalog::builtin()
}

pub fn create_submit_request(scenario_id: &str, most: &str, least: &str) -> SubmitResponseRequest {
    SubmitResponseRequest {
        scenario_id: scenario_id.to_string(),
        most_effective_id: Some(most.to_string()),
        least_effective_id: Some(least.to_string()),
    }
}

/// Starts an AI assessment and returns the loaded state.
pub fn start_ai_assessment(catalog: &Catalog) -> AssessmentState {
    select_domain(
        catalog,
        &AssessmentState::new(),
        &SelectDomainRequest {
            domain: String::from("ai"),
        },
    )
    .expect("domain selection succeeds")
    .new_state
}

/// Starts an AI assessment, answers both scenarios optimally, and
/// completes it.
pub fn complete_optimal_ai_assessment(catalog: &Catalog) -> AssessmentState {
    let mut state: AssessmentState = start_ai_assessment(catalog);
    state = submit_response(
        catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .expect("submission succeeds")
    .new_state;
    state = submit_response(
        catalog,
        &state,
        create_submit_request("ai-2", "ai-2-b", "ai-2-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .expect("submission succeeds")
    .new_state;
    complete_assessment(catalog, &state)
        .expect("completion succeeds")
        .new_state
}
