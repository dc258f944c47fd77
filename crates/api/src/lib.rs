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

mod error;
mod operations;
mod request_response;
mod response_policy;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use operations::{
    ApiResult, advance_scenario, assessment_progress, assessment_result, complete_assessment,
    current_scenario, detailed_feedback, list_domains, previous_scenario, reset_assessment,
    select_domain, submit_response,
};
pub use request_response::{
    ChoiceReview, CompetencyScoreView, CompleteAssessmentResponse, CurrentScenarioResponse,
    DetailedFeedbackResponse, DomainInfo, ExpertInsight, ListDomainsResponse, NavigateResponse,
    OptionView, ProgressResponse, ResetResponse, ResponseView, ResultResponse, ScenarioReview,
    ScenarioView, SelectDomainRequest, SelectDomainResponse, SubmitResponseRequest,
    SubmitResponseResponse,
};
pub use response_policy::{ResponsePolicyError, validate_response};
pub use session::new_session_token;
