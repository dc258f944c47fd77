// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_catalog, create_test_response, start_assessment};
use crate::{AssessmentState, Command, TransitionResult, apply};
use compass_catalog::Catalog;
use compass_domain::Domain;

#[test]
fn test_reset_from_initial_state_is_stable() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = AssessmentState::new();

    let result: TransitionResult = apply(&catalog, &state, Command::Reset);

    assert_eq!(result.new_state, AssessmentState::new());
    assert!(result.event.applied);
}

#[test]
fn test_reset_mid_assessment_restores_the_initial_shape() {
    let catalog: Catalog = create_test_catalog();
    let mut state: AssessmentState = start_assessment(&catalog, Domain::ServiceNow);
    state = apply(
        &catalog,
        &state,
        Command::SubmitResponse(create_test_response("servicenow-1", "sn-1-b", "sn-1-a")),
    )
    .new_state;
    state = apply(&catalog, &state, Command::Next).new_state;

    let reset: AssessmentState = apply(&catalog, &state, Command::Reset).new_state;

    assert_eq!(reset, AssessmentState::new());
}

#[test]
fn test_reset_after_completion_restores_the_initial_shape() {
    let catalog: Catalog = create_test_catalog();
    let mut state: AssessmentState = start_assessment(&catalog, Domain::Ai);
    state = apply(
        &catalog,
        &state,
        Command::SubmitResponse(create_test_response("ai-1", "ai-1-b", "ai-1-a")),
    )
    .new_state;
    state = apply(&catalog, &state, Command::CompleteAssessment).new_state;
    assert!(state.completed);

    let reset: AssessmentState = apply(&catalog, &state, Command::Reset).new_state;

    // Exact initial shape: no domain, cursor 0, empty lists, no result
    assert_eq!(reset.selected_domain, None);
    assert_eq!(reset.current_index(), 0);
    assert!(reset.scenarios.is_empty());
    assert!(reset.responses.is_empty());
    assert!(!reset.completed);
    assert!(reset.result.is_none());
    assert_eq!(reset, AssessmentState::new());
}
