// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    complete_optimal_ai_assessment, create_submit_request, create_test_catalog,
    start_ai_assessment,
};
use crate::{
    ApiError, SelectDomainRequest, advance_scenario, assessment_progress, assessment_result,
    complete_assessment, current_scenario, list_domains, previous_scenario, reset_assessment,
    select_domain, submit_response,
};
use compass::AssessmentState;
use compass_catalog::Catalog;
use time::OffsetDateTime;

#[test]
fn test_select_domain_starts_an_assessment() {
    let catalog: Catalog = create_test_catalog();

    let result = select_domain(
        &catalog,
        &AssessmentState::new(),
        &SelectDomainRequest {
            domain: String::from("servicenow"),
        },
    )
    .unwrap();

    assert_eq!(result.response.domain, "servicenow");
    assert_eq!(result.response.title, "ServiceNow Implementation");
    assert_eq!(result.response.scenario_count, 2);
    assert_eq!(result.new_state.scenarios.len(), 2);
    assert!(result.event.applied);
}

#[test]
fn test_select_domain_rejects_unknown_identifier() {
    let catalog: Catalog = create_test_catalog();

    let result = select_domain(
        &catalog,
        &AssessmentState::new(),
        &SelectDomainRequest {
            domain: String::from("dynamics"),
        },
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));
    if let ApiError::InvalidInput { field, message } = err {
        assert_eq!(field, "domain");
        assert!(message.contains("dynamics"));
    }
}

#[test]
fn test_submit_response_records_and_counts() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let result = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .unwrap();

    assert_eq!(result.response.scenario_id, "ai-1");
    assert_eq!(result.response.answered_count, 1);
    assert_eq!(result.new_state.responses.len(), 1);
}

#[test]
fn test_submit_response_without_assessment_is_rejected() {
    let catalog: Catalog = create_test_catalog();

    let result = submit_response(
        &catalog,
        &AssessmentState::new(),
        create_submit_request("ai-1", "ai-1-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::ResponsePolicyViolation { .. }));
}

#[test]
fn test_submit_response_rejects_foreign_scenario() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    // servicenow-1 exists in the catalog but not in the loaded AI list
    let result = submit_response(
        &catalog,
        &state,
        create_submit_request("servicenow-1", "sn-1-b", "sn-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::ResponsePolicyViolation { .. }));
    assert!(err.to_string().contains("servicenow-1"));
}

#[test]
fn test_submit_response_rejects_unknown_option() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let result = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-2-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::ResponsePolicyViolation { .. }));
    assert!(err.to_string().contains("ai-2-b"));
}

#[test]
fn test_submit_response_rejects_same_option_for_both() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let result = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-b"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let err: ApiError = result.unwrap_err();
    assert!(matches!(err, ApiError::ResponsePolicyViolation { .. }));
}

#[test]
fn test_failed_submission_does_not_change_state() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let _ = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-b"),
        OffsetDateTime::UNIX_EPOCH,
    );

    assert!(state.responses.is_empty());
}

#[test]
fn test_navigation_moves_and_reports_the_cursor() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let advanced = advance_scenario(&catalog, &state).unwrap();
    assert_eq!(advanced.response.scenario_index, 1);
    assert_eq!(advanced.response.scenario_id, Some(String::from("ai-2")));

    let returned = previous_scenario(&catalog, &advanced.new_state).unwrap();
    assert_eq!(returned.response.scenario_index, 0);
    assert_eq!(returned.response.scenario_id, Some(String::from("ai-1")));
}

#[test]
fn test_navigation_without_assessment_is_rejected() {
    let catalog: Catalog = create_test_catalog();

    assert_eq!(
        advance_scenario(&catalog, &AssessmentState::new()).unwrap_err(),
        ApiError::NoActiveAssessment
    );
    assert_eq!(
        previous_scenario(&catalog, &AssessmentState::new()).unwrap_err(),
        ApiError::NoActiveAssessment
    );
}

#[test]
fn test_complete_assessment_reports_the_score() {
    let catalog: Catalog = create_test_catalog();
    let mut state: AssessmentState = start_ai_assessment(&catalog);
    state = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .unwrap()
    .new_state;
    state = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-2", "ai-2-b", "ai-2-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .unwrap()
    .new_state;

    let result = complete_assessment(&catalog, &state).unwrap();

    assert_eq!(
        result.response.total_score,
        result.response.max_possible_score
    );
    assert!((result.response.overall_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(result.response.performance_label, "Expert Tech Decision-Maker");
    assert!(result.new_state.completed);
}

#[test]
fn test_complete_without_assessment_is_rejected() {
    let catalog: Catalog = create_test_catalog();

    assert_eq!(
        complete_assessment(&catalog, &AssessmentState::new()).unwrap_err(),
        ApiError::NoActiveAssessment
    );
}

#[test]
fn test_reset_returns_the_initial_state() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = complete_optimal_ai_assessment(&catalog);

    let result = reset_assessment(&catalog, &state);

    assert_eq!(result.new_state, AssessmentState::new());
    assert!(result.event.applied);
}

#[test]
fn test_list_domains_covers_every_domain() {
    let catalog: Catalog = create_test_catalog();

    let listing = list_domains(&catalog);

    assert_eq!(listing.domains.len(), 3);
    assert_eq!(listing.domains[0].id, "ai");
    assert_eq!(listing.domains[0].title, "AI Project Management");
    assert!(listing.domains.iter().all(|info| info.scenario_count == 2));
}

#[test]
fn test_current_scenario_hides_scoring_data() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let view = current_scenario(&state);

    let scenario = view.scenario.unwrap();
    assert_eq!(scenario.id, "ai-1");
    assert_eq!(scenario.options.len(), 4);
    // Options expose only id and text; ranks and feedback stay hidden
    assert_eq!(view.scenario_index, 0);
    assert_eq!(view.scenario_count, 2);
    assert!(view.prior_response.is_none());
}

#[test]
fn test_current_scenario_surfaces_the_prior_response_when_revisiting() {
    let catalog: Catalog = create_test_catalog();
    let mut state: AssessmentState = start_ai_assessment(&catalog);
    state = submit_response(
        &catalog,
        &state,
        create_submit_request("ai-1", "ai-1-b", "ai-1-a"),
        OffsetDateTime::UNIX_EPOCH,
    )
    .unwrap()
    .new_state;
    state = advance_scenario(&catalog, &state).unwrap().new_state;
    state = previous_scenario(&catalog, &state).unwrap().new_state;

    let view = current_scenario(&state);

    let prior = view.prior_response.unwrap();
    assert_eq!(prior.scenario_id, "ai-1");
    assert_eq!(prior.most_effective_id, Some(String::from("ai-1-b")));
}

#[test]
fn test_current_scenario_with_no_assessment_is_empty() {
    let view = current_scenario(&AssessmentState::new());

    assert!(view.scenario.is_none());
    assert_eq!(view.scenario_index, 0);
    assert_eq!(view.scenario_count, 0);
}

#[test]
fn test_progress_tracks_answers_and_completion() {
    let catalog: Catalog = create_test_catalog();
    let mut state: AssessmentState = start_ai_assessment(&catalog);

    let in_progress = assessment_progress(&state);
    assert_eq!(in_progress.domain, Some(String::from("ai")));
    assert_eq!(in_progress.answered_count, 0);
    assert!(!in_progress.completed);

    state = complete_optimal_ai_assessment(&catalog);
    let completed = assessment_progress(&state);
    assert_eq!(completed.answered_count, 2);
    assert!(completed.completed);
}

#[test]
fn test_assessment_result_requires_completion() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = start_ai_assessment(&catalog);

    let err: ApiError = assessment_result(&state).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_assessment_result_reports_competency_breakdown() {
    let catalog: Catalog = create_test_catalog();
    let state: AssessmentState = complete_optimal_ai_assessment(&catalog);

    let result = assessment_result(&state).unwrap();

    assert_eq!(result.competency_scores.len(), 4);
    assert_eq!(result.competency_scores[0].competency, "criticalThinking");
    assert_eq!(result.competency_scores[0].display_name, "Critical Thinking");
    for entry in &result.competency_scores {
        assert_eq!(entry.score, entry.max_score);
        assert!((entry.percentage - 100.0).abs() < f64::EPSILON);
    }
    assert!((result.overall_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(result.performance_level, "Expert");
    assert_eq!(result.performance_label, "Expert Tech Decision-Maker");
    assert_eq!(result.strengths.len(), 2);
    assert_eq!(result.growth_areas.len(), 2);
}
