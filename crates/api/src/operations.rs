// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations wrapping the state machine commands and read models.
//!
//! Every mutating operation translates its request into a core command,
//! applies it, and returns the response together with the new state and
//! the journal event. Read models derive views from the state without
//! changing it.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    ChoiceReview, CompetencyScoreView, CompleteAssessmentResponse, CurrentScenarioResponse,
    DetailedFeedbackResponse, DomainInfo, ExpertInsight, ListDomainsResponse, NavigateResponse,
    OptionView, ProgressResponse, ResetResponse, ResponseView, ResultResponse, ScenarioReview,
    ScenarioView, SelectDomainRequest, SelectDomainResponse, SubmitResponseRequest,
    SubmitResponseResponse,
};
use crate::response_policy::validate_response;
use compass::{AssessmentState, Command, TransitionResult, apply};
use compass_catalog::Catalog;
use compass_domain::{
    AnswerOption, AssessmentResult, Domain, Scenario, UserResponse, best_option, percentage,
    worst_option,
};
use compass_journal::TransitionEvent;
use time::OffsetDateTime;
use tracing::info;

/// The result of a mutating API operation.
///
/// Successful operations always return the new state and the journal
/// event alongside the response, so the caller can store and log them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: AssessmentState,
    /// The journal event generated by this operation.
    pub event: TransitionEvent,
}

/// Selects a domain and starts a fresh assessment.
///
/// This discards any prior session state entirely, including mid-progress
/// responses from another domain.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog
/// * `state` - The current assessment state
/// * `request` - The domain selection request
///
/// # Returns
///
/// * `Ok(ApiResult<SelectDomainResponse>)` on success
/// * `Err(ApiError)` if the domain identifier is unknown
///
/// # Errors
///
/// Returns an error if the domain identifier does not parse.
pub fn select_domain(
    catalog: &Catalog,
    state: &AssessmentState,
    request: &SelectDomainRequest,
) -> Result<ApiResult<SelectDomainResponse>, ApiError> {
    let domain: Domain = request.domain.parse().map_err(translate_domain_error)?;

    let transition: TransitionResult = apply(catalog, state, Command::SelectDomain(domain));
    info!(domain = %domain, "Started assessment");

    let response: SelectDomainResponse = SelectDomainResponse {
        domain: domain.as_str().to_string(),
        title: domain.title().to_string(),
        scenario_count: transition.new_state.scenarios.len(),
        message: format!("Assessment started for domain '{domain}'"),
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
        event: transition.event,
    })
}

/// Records a response for one scenario.
///
/// The response is validated against the loaded assessment before it is
/// recorded; the core itself would tolerate a malformed response, but the
/// boundary rejects it with a usable message. Submitting again for the
/// same scenario replaces the stored response wholesale.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog
/// * `state` - The current assessment state
/// * `request` - The response to record
/// * `submitted_at` - The timestamp to stamp the response with
///
/// # Returns
///
/// * `Ok(ApiResult<SubmitResponseResponse>)` on success
/// * `Err(ApiError)` if the response violates the response policy
///
/// # Errors
///
/// Returns an error if:
/// - No assessment is in progress
/// - The scenario or a chosen option is unknown
/// - The most- and least-effective choices name the same option
pub fn submit_response(
    catalog: &Catalog,
    state: &AssessmentState,
    request: SubmitResponseRequest,
    submitted_at: OffsetDateTime,
) -> Result<ApiResult<SubmitResponseResponse>, ApiError> {
    validate_response(state, &request)?;

    let scenario_id: String = request.scenario_id.clone();
    let response_record: UserResponse = UserResponse::new(
        request.scenario_id,
        request.most_effective_id,
        request.least_effective_id,
        submitted_at,
    );

    let transition: TransitionResult =
        apply(catalog, state, Command::SubmitResponse(response_record));
    info!(scenario_id = %scenario_id, "Recorded response");

    let response: SubmitResponseResponse = SubmitResponseResponse {
        scenario_id: scenario_id.clone(),
        answered_count: transition.new_state.responses.len(),
        message: format!("Response recorded for scenario '{scenario_id}'"),
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
        event: transition.event,
    })
}

/// Advances the cursor to the next scenario, clamped at the last one.
///
/// # Errors
///
/// Returns an error if no assessment is in progress.
pub fn advance_scenario(
    catalog: &Catalog,
    state: &AssessmentState,
) -> Result<ApiResult<NavigateResponse>, ApiError> {
    navigate(catalog, state, Command::Next)
}

/// Moves the cursor back one scenario, clamped at the first one.
///
/// # Errors
///
/// Returns an error if no assessment is in progress.
pub fn previous_scenario(
    catalog: &Catalog,
    state: &AssessmentState,
) -> Result<ApiResult<NavigateResponse>, ApiError> {
    navigate(catalog, state, Command::Previous)
}

fn navigate(
    catalog: &Catalog,
    state: &AssessmentState,
    command: Command,
) -> Result<ApiResult<NavigateResponse>, ApiError> {
    if state.selected_domain.is_none() {
        return Err(ApiError::NoActiveAssessment);
    }

    let transition: TransitionResult = apply(catalog, state, command);

    let response: NavigateResponse = NavigateResponse {
        scenario_index: transition.new_state.current_index(),
        scenario_count: transition.new_state.scenarios.len(),
        scenario_id: transition
            .new_state
            .current_scenario()
            .map(|scenario| scenario.id.clone()),
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
        event: transition.event,
    })
}

/// Completes the assessment, scoring the accumulated responses.
///
/// Completion is deterministic: calling it again recomputes an identical
/// result from the same responses.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog
/// * `state` - The current assessment state
///
/// # Returns
///
/// * `Ok(ApiResult<CompleteAssessmentResponse>)` on success
/// * `Err(ApiError)` if no assessment is in progress
///
/// # Errors
///
/// Returns an error if no assessment is in progress.
pub fn complete_assessment(
    catalog: &Catalog,
    state: &AssessmentState,
) -> Result<ApiResult<CompleteAssessmentResponse>, ApiError> {
    if state.selected_domain.is_none() {
        return Err(ApiError::NoActiveAssessment);
    }

    let transition: TransitionResult = apply(catalog, state, Command::CompleteAssessment);

    // The transition just stored the result, so it is always present here
    let (total_score, max_possible_score, performance_label) = transition
        .new_state
        .result
        .as_ref()
        .map_or((0, 0, String::new()), |result| {
            (
                result.total_score,
                result.max_possible_score,
                result.performance_level.label(),
            )
        });
    let overall_percentage: f64 = percentage(total_score, max_possible_score);
    info!(
        total_score = total_score,
        max_possible_score = max_possible_score,
        "Completed assessment"
    );

    let response: CompleteAssessmentResponse = CompleteAssessmentResponse {
        total_score,
        max_possible_score,
        overall_percentage,
        performance_label: performance_label.clone(),
        message: format!("Assessment completed: {performance_label}"),
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
        event: transition.event,
    })
}

/// Resets the session to the initial empty state.
///
/// Reset is unconditional and never fails.
#[must_use]
pub fn reset_assessment(catalog: &Catalog, state: &AssessmentState) -> ApiResult<ResetResponse> {
    let transition: TransitionResult = apply(catalog, state, Command::Reset);
    info!("Reset assessment");

    ApiResult {
        response: ResetResponse {
            message: String::from("Assessment reset"),
        },
        new_state: transition.new_state,
        event: transition.event,
    }
}

/// Lists the selectable domains.
///
/// This operation never fails. Domains appear in declaration order.
#[must_use]
pub fn list_domains(catalog: &Catalog) -> ListDomainsResponse {
    let domains: Vec<DomainInfo> = Domain::ALL
        .iter()
        .map(|domain| DomainInfo {
            id: domain.as_str().to_string(),
            title: domain.title().to_string(),
            description: domain.description().to_string(),
            scenario_count: catalog.scenario_count(*domain),
        })
        .collect();

    ListDomainsResponse { domains }
}

/// Returns the scenario the cursor currently points at, with the stored
/// response when the participant is revisiting.
///
/// This is a read-only operation; with no assessment in progress the
/// scenario is absent and the counts are zero.
#[must_use]
pub fn current_scenario(state: &AssessmentState) -> CurrentScenarioResponse {
    let scenario: Option<&Scenario> = state.current_scenario();
    let prior_response: Option<ResponseView> = scenario
        .and_then(|scenario| state.response_for(&scenario.id))
        .map(response_view);

    CurrentScenarioResponse {
        scenario: scenario.map(scenario_view),
        scenario_index: state.current_index(),
        scenario_count: state.scenarios.len(),
        prior_response,
    }
}

/// Summarizes the session's progress.
///
/// This is a read-only operation and never fails.
#[must_use]
pub fn assessment_progress(state: &AssessmentState) -> ProgressResponse {
    ProgressResponse {
        domain: state
            .selected_domain
            .map(|domain| domain.as_str().to_string()),
        scenario_index: state.current_index(),
        scenario_count: state.scenarios.len(),
        answered_count: state.responses.len(),
        completed: state.completed,
    }
}

/// Returns the stored result of a completed assessment.
///
/// # Arguments
///
/// * `state` - The current assessment state
///
/// # Returns
///
/// * `Ok(ResultResponse)` if the assessment has been completed
/// * `Err(ApiError)` otherwise
///
/// # Errors
///
/// Returns an error if the assessment has not been completed yet.
pub fn assessment_result(state: &AssessmentState) -> Result<ResultResponse, ApiError> {
    let result: &AssessmentResult =
        state
            .result
            .as_ref()
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Assessment result"),
                message: String::from("The assessment has not been completed"),
            })?;

    let competency_scores: Vec<CompetencyScoreView> = result
        .competency_scores
        .iter()
        .map(|entry| CompetencyScoreView {
            competency: entry.competency.as_str().to_string(),
            display_name: entry.competency.display_name().to_string(),
            score: entry.score,
            max_score: entry.max_score,
            percentage: entry.ratio() * 100.0,
        })
        .collect();

    Ok(ResultResponse {
        competency_scores,
        total_score: result.total_score,
        max_possible_score: result.max_possible_score,
        overall_percentage: percentage(result.total_score, result.max_possible_score),
        performance_level: result.performance_level.as_str().to_string(),
        performance_label: result.performance_level.label(),
        strengths: result
            .strengths
            .iter()
            .map(|competency| competency.display_name().to_string())
            .collect(),
        growth_areas: result
            .growth_areas
            .iter()
            .map(|competency| competency.display_name().to_string())
            .collect(),
    })
}

/// Builds the per-scenario feedback review for a completed assessment.
///
/// For every answered scenario, the review carries the chosen options with
/// their feedback and a recomputed correctness check against the
/// scenario's true best and worst options. When a pick was missed, the
/// review also carries the option the participant should have chosen.
/// Unanswered scenarios are omitted.
///
/// # Arguments
///
/// * `state` - The current assessment state
///
/// # Returns
///
/// * `Ok(DetailedFeedbackResponse)` if the assessment has been completed
/// * `Err(ApiError)` otherwise
///
/// # Errors
///
/// Returns an error if the assessment has not been completed yet.
pub fn detailed_feedback(state: &AssessmentState) -> Result<DetailedFeedbackResponse, ApiError> {
    if state.result.is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Assessment result"),
            message: String::from("The assessment has not been completed"),
        });
    }

    let mut reviews: Vec<ScenarioReview> = Vec::new();
    for scenario in &state.scenarios {
        let Some(response) = state.response_for(&scenario.id) else {
            continue;
        };
        let (Some(best), Some(worst)) = (best_option(scenario), worst_option(scenario)) else {
            continue;
        };

        let most_effective: Option<ChoiceReview> = response
            .most_effective_id
            .as_ref()
            .and_then(|option_id| scenario.option(option_id))
            .map(|chosen| choice_review(chosen, chosen.id == best.id));
        let least_effective: Option<ChoiceReview> = response
            .least_effective_id
            .as_ref()
            .and_then(|option_id| scenario.option(option_id))
            .map(|chosen| choice_review(chosen, chosen.id == worst.id));

        // Expert insight appears only for missed picks
        let most_correct: bool = most_effective
            .as_ref()
            .is_some_and(|review| review.correct);
        let least_correct: bool = least_effective
            .as_ref()
            .is_some_and(|review| review.correct);

        reviews.push(ScenarioReview {
            scenario_id: scenario.id.clone(),
            title: scenario.title.clone(),
            most_effective,
            least_effective,
            actual_best: (!most_correct).then(|| expert_insight(best)),
            actual_worst: (!least_correct).then(|| expert_insight(worst)),
        });
    }

    Ok(DetailedFeedbackResponse { reviews })
}

fn scenario_view(scenario: &Scenario) -> ScenarioView {
    ScenarioView {
        id: scenario.id.clone(),
        domain: scenario.domain.as_str().to_string(),
        title: scenario.title.clone(),
        context: scenario.context.clone(),
        problem: scenario.problem.clone(),
        options: scenario
            .options
            .iter()
            .map(|option| OptionView {
                id: option.id.clone(),
                text: option.text.clone(),
            })
            .collect(),
        illustration: scenario.illustration.clone(),
    }
}

fn response_view(response: &UserResponse) -> ResponseView {
    ResponseView {
        scenario_id: response.scenario_id.clone(),
        most_effective_id: response.most_effective_id.clone(),
        least_effective_id: response.least_effective_id.clone(),
        submitted_at: response.submitted_at.to_string(),
    }
}

fn choice_review(option: &AnswerOption, correct: bool) -> ChoiceReview {
    ChoiceReview {
        option_id: option.id.clone(),
        text: option.text.clone(),
        feedback: option.feedback.clone(),
        correct,
    }
}

fn expert_insight(option: &AnswerOption) -> ExpertInsight {
    ExpertInsight {
        option_id: option.id.clone(),
        text: option.text.clone(),
        feedback: option.feedback.clone(),
    }
}
