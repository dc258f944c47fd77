// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Scenario views deliberately omit effectiveness ranks,
//! feedback, and impact values: those would reveal the answers while an
//! assessment is still in progress. They appear only in the result and
//! feedback views.

/// API request to select a domain and start an assessment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectDomainRequest {
    /// The domain identifier ("ai", "servicenow", "salesforce").
    pub domain: String,
}

/// API response for a successful domain selection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectDomainResponse {
    /// The selected domain identifier.
    pub domain: String,
    /// The domain's display title.
    pub title: String,
    /// How many scenarios the assessment holds.
    pub scenario_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to record a response for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitResponseRequest {
    /// The scenario being answered.
    pub scenario_id: String,
    /// The option chosen as most effective, if any.
    pub most_effective_id: Option<String>,
    /// The option chosen as least effective, if any.
    pub least_effective_id: Option<String>,
}

/// API response for a successfully recorded response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitResponseResponse {
    /// The scenario the response was recorded for.
    pub scenario_id: String,
    /// How many scenarios have a response so far.
    pub answered_count: usize,
    /// A success message.
    pub message: String,
}

/// API response for cursor movement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavigateResponse {
    /// The cursor position after the move.
    pub scenario_index: usize,
    /// The total number of scenarios.
    pub scenario_count: usize,
    /// The identifier of the scenario the cursor now points at.
    pub scenario_id: Option<String>,
}

/// API response for a completed assessment.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompleteAssessmentResponse {
    /// The summed clamped competency scores.
    pub total_score: i32,
    /// The summed attainable maximums.
    pub max_possible_score: i32,
    /// The overall percentage (0 when nothing was attainable).
    pub overall_percentage: f64,
    /// The performance tier display label.
    pub performance_label: String,
    /// A success message.
    pub message: String,
}

/// API response for a reset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResetResponse {
    /// A success message.
    pub message: String,
}

/// One selectable domain, for the domain-selection view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DomainInfo {
    /// The domain identifier.
    pub id: String,
    /// The display title.
    pub title: String,
    /// The one-line description.
    pub description: String,
    /// How many scenarios the domain's assessment holds.
    pub scenario_count: usize,
}

/// API response listing the selectable domains.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListDomainsResponse {
    /// The selectable domains, in declaration order.
    pub domains: Vec<DomainInfo>,
}

/// An answer option as presented during the assessment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptionView {
    /// The option identifier.
    pub id: String,
    /// The option display text.
    pub text: String,
}

/// A scenario as presented during the assessment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioView {
    /// The scenario identifier.
    pub id: String,
    /// The domain identifier.
    pub domain: String,
    /// The scenario title.
    pub title: String,
    /// The narrative context.
    pub context: String,
    /// The problem statement.
    pub problem: String,
    /// The options, in presentation order.
    pub options: Vec<OptionView>,
    /// Optional illustration path.
    pub illustration: Option<String>,
}

/// A stored response as presented when revisiting a scenario.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResponseView {
    /// The scenario the response answers.
    pub scenario_id: String,
    /// The option chosen as most effective, if any.
    pub most_effective_id: Option<String>,
    /// The option chosen as least effective, if any.
    pub least_effective_id: Option<String>,
    /// When the response was created or last updated (RFC 3339-like).
    pub submitted_at: String,
}

/// API response for the current scenario view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CurrentScenarioResponse {
    /// The scenario the cursor points at, if an assessment is in progress.
    pub scenario: Option<ScenarioView>,
    /// The cursor position.
    pub scenario_index: usize,
    /// The total number of scenarios.
    pub scenario_count: usize,
    /// The stored response for this scenario, when revisiting.
    pub prior_response: Option<ResponseView>,
}

/// API response summarizing assessment progress.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressResponse {
    /// The selected domain identifier, if any.
    pub domain: Option<String>,
    /// The cursor position.
    pub scenario_index: usize,
    /// The total number of scenarios.
    pub scenario_count: usize,
    /// How many scenarios have a response.
    pub answered_count: usize,
    /// Whether the assessment has been completed.
    pub completed: bool,
}

/// One competency's scores, for the results view.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompetencyScoreView {
    /// The competency identifier.
    pub competency: String,
    /// The competency display name.
    pub display_name: String,
    /// The accumulated score.
    pub score: i32,
    /// The attainable maximum.
    pub max_score: i32,
    /// The normalized percentage (0 when nothing was attainable).
    pub percentage: f64,
}

/// API response for the full assessment result.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultResponse {
    /// Per-competency scores, in competency declaration order.
    pub competency_scores: Vec<CompetencyScoreView>,
    /// The summed clamped competency scores.
    pub total_score: i32,
    /// The summed attainable maximums.
    pub max_possible_score: i32,
    /// The overall percentage.
    pub overall_percentage: f64,
    /// The performance tier name (e.g., "Expert").
    pub performance_level: String,
    /// The performance tier display label.
    pub performance_label: String,
    /// Display names of the two strongest competencies, descending.
    pub strengths: Vec<String>,
    /// Display names of the two weakest competencies, from the tail of the
    /// same descending ranking.
    pub growth_areas: Vec<String>,
}

/// A reviewed choice in the detailed feedback view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChoiceReview {
    /// The chosen option identifier.
    pub option_id: String,
    /// The chosen option's display text.
    pub text: String,
    /// The qualitative feedback for the chosen option.
    pub feedback: String,
    /// Whether the choice matched the scenario's true best/worst option.
    pub correct: bool,
}

/// The expert insight shown when a pick was missed: the option the
/// participant should have chosen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpertInsight {
    /// The option identifier.
    pub option_id: String,
    /// The option's display text.
    pub text: String,
    /// The qualitative feedback for the option.
    pub feedback: String,
}

/// Per-scenario review for the detailed feedback view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioReview {
    /// The scenario identifier.
    pub scenario_id: String,
    /// The scenario title.
    pub title: String,
    /// The review of the most-effective choice, if one was made.
    pub most_effective: Option<ChoiceReview>,
    /// The review of the least-effective choice, if one was made.
    pub least_effective: Option<ChoiceReview>,
    /// The true best option; present only when the most-effective pick
    /// was missed.
    pub actual_best: Option<ExpertInsight>,
    /// The true worst option; present only when the least-effective pick
    /// was missed.
    pub actual_worst: Option<ExpertInsight>,
}

/// API response for the detailed per-scenario feedback view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DetailedFeedbackResponse {
    /// One review per answered scenario, in scenario order.
    pub reviews: Vec<ScenarioReview>,
}
