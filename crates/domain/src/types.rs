// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Represents a professional domain a participant assesses themselves in.
///
/// Domains are fixed constants; one is selected per assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// AI project management scenarios.
    #[serde(rename = "ai")]
    Ai,
    /// ServiceNow implementation scenarios.
    #[serde(rename = "servicenow")]
    ServiceNow,
    /// Salesforce client interaction scenarios.
    #[serde(rename = "salesforce")]
    Salesforce,
}

impl Domain {
    /// All domains in declaration order.
    pub const ALL: [Self; 3] = [Self::Ai, Self::ServiceNow, Self::Salesforce];

    /// Converts this domain to its identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::ServiceNow => "servicenow",
            Self::Salesforce => "salesforce",
        }
    }

    /// Returns the human-readable title for this domain.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Ai => "AI Project Management",
            Self::ServiceNow => "ServiceNow Implementation",
            Self::Salesforce => "Salesforce Client Interactions",
        }
    }

    /// Returns the one-line description shown when choosing a domain.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ai => {
                "Navigate ethical considerations, stakeholder management, and technical challenges in AI implementations."
            }
            Self::ServiceNow => {
                "Handle scope, integration challenges, and cross-functional requirements in ServiceNow projects."
            }
            Self::Salesforce => {
                "Manage client expectations, requirements gathering, and solution design in Salesforce engagements."
            }
        }
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Self::Ai),
            "servicenow" => Ok(Self::ServiceNow),
            "salesforce" => Ok(Self::Salesforce),
            _ => Err(DomainError::UnknownDomain(s.to_string())),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents one of the four measured skill dimensions.
///
/// The declaration order is the canonical ordering: score reports list
/// competencies in this order, and it breaks ties when ranking strengths
/// and growth areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competency {
    /// Diagnosing problems and weighing tradeoffs.
    #[serde(rename = "criticalThinking")]
    CriticalThinking,
    /// Working with and protecting the delivery team.
    #[serde(rename = "teamCollaboration")]
    TeamCollaboration,
    /// Transparent, timely communication with the client.
    #[serde(rename = "clientCommunication")]
    ClientCommunication,
    /// Sequencing work and adapting under pressure.
    #[serde(rename = "prioritization")]
    Prioritization,
}

impl Competency {
    /// All competencies in declaration order.
    pub const ALL: [Self; 4] = [
        Self::CriticalThinking,
        Self::TeamCollaboration,
        Self::ClientCommunication,
        Self::Prioritization,
    ];

    /// Converts this competency to its identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CriticalThinking => "criticalThinking",
            Self::TeamCollaboration => "teamCollaboration",
            Self::ClientCommunication => "clientCommunication",
            Self::Prioritization => "prioritization",
        }
    }

    /// Returns the human-readable name for this competency.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CriticalThinking => "Critical Thinking",
            Self::TeamCollaboration => "Team Collaboration",
            Self::ClientCommunication => "Client Communication",
            Self::Prioritization => "Prioritization & Adaptability",
        }
    }
}

impl std::fmt::Display for Competency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-competency impact values carried by an answer option.
///
/// Values may in principle be zero or negative; the shipped catalog uses
/// non-negative values only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyImpact {
    /// Impact on the critical thinking score.
    pub critical_thinking: i32,
    /// Impact on the team collaboration score.
    pub team_collaboration: i32,
    /// Impact on the client communication score.
    pub client_communication: i32,
    /// Impact on the prioritization score.
    pub prioritization: i32,
}

impl CompetencyImpact {
    /// Creates a new `CompetencyImpact`.
    ///
    /// # Arguments
    ///
    /// * `critical_thinking` - Impact on critical thinking
    /// * `team_collaboration` - Impact on team collaboration
    /// * `client_communication` - Impact on client communication
    /// * `prioritization` - Impact on prioritization
    #[must_use]
    pub const fn new(
        critical_thinking: i32,
        team_collaboration: i32,
        client_communication: i32,
        prioritization: i32,
    ) -> Self {
        Self {
            critical_thinking,
            team_collaboration,
            client_communication,
            prioritization,
        }
    }

    /// Returns the impact value for a single competency.
    #[must_use]
    pub const fn get(&self, competency: Competency) -> i32 {
        match competency {
            Competency::CriticalThinking => self.critical_thinking,
            Competency::TeamCollaboration => self.team_collaboration,
            Competency::ClientCommunication => self.client_communication,
            Competency::Prioritization => self.prioritization,
        }
    }
}

/// One selectable answer within a scenario.
///
/// Options are ranked by an effectiveness value (higher = better, ties
/// permitted) and tagged with per-competency impact values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// The option identifier (unique within its scenario).
    pub id: String,
    /// The display text for this option.
    pub text: String,
    /// The effectiveness rank (1-5 scale in the shipped catalog).
    pub effectiveness: u8,
    /// Qualitative feedback shown when reviewing this choice.
    pub feedback: String,
    /// Per-competency impact values.
    pub impact: CompetencyImpact,
}

impl AnswerOption {
    /// Creates a new `AnswerOption`.
    ///
    /// # Arguments
    ///
    /// * `id` - The option identifier
    /// * `text` - The display text
    /// * `effectiveness` - The effectiveness rank
    /// * `feedback` - The review feedback text
    /// * `impact` - The per-competency impact values
    #[must_use]
    pub const fn new(
        id: String,
        text: String,
        effectiveness: u8,
        feedback: String,
        impact: CompetencyImpact,
    ) -> Self {
        Self {
            id,
            text,
            effectiveness,
            feedback,
            impact,
        }
    }
}

/// One workplace-situation question with a fixed set of answer options.
///
/// Scenarios are static catalog data: loaded at domain-selection time and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// The scenario identifier (unique across the whole catalog).
    pub id: String,
    /// The domain this scenario belongs to.
    pub domain: Domain,
    /// The scenario title.
    pub title: String,
    /// The narrative context setting up the situation.
    pub context: String,
    /// The problem statement the participant must address.
    pub problem: String,
    /// The answer options, in presentation order.
    pub options: Vec<AnswerOption>,
    /// Optional path to an illustration asset.
    pub illustration: Option<String>,
}

impl Scenario {
    /// Looks up an option by its identifier.
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// A participant's answer to one scenario.
///
/// At most one response exists per scenario identifier; resubmission
/// replaces the stored response wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// The scenario this response answers.
    pub scenario_id: String,
    /// The option chosen as most effective, if any.
    pub most_effective_id: Option<String>,
    /// The option chosen as least effective, if any.
    pub least_effective_id: Option<String>,
    /// When this response was created or last updated.
    pub submitted_at: OffsetDateTime,
}

impl UserResponse {
    /// Creates a new `UserResponse`.
    ///
    /// # Arguments
    ///
    /// * `scenario_id` - The scenario being answered
    /// * `most_effective_id` - The option chosen as most effective
    /// * `least_effective_id` - The option chosen as least effective
    /// * `submitted_at` - The submission timestamp
    #[must_use]
    pub const fn new(
        scenario_id: String,
        most_effective_id: Option<String>,
        least_effective_id: Option<String>,
        submitted_at: OffsetDateTime,
    ) -> Self {
        Self {
            scenario_id,
            most_effective_id,
            least_effective_id,
            submitted_at,
        }
    }
}

/// The accumulated score for one competency dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyScore {
    /// The competency this score measures.
    pub competency: Competency,
    /// The accumulated score (clamped at zero).
    pub score: i32,
    /// The maximum score attainable from the answered scenarios.
    pub max_score: i32,
}

impl CompetencyScore {
    /// Returns the normalized score ratio in `[0, 1]`.
    ///
    /// A zero or negative maximum yields 0 rather than dividing by zero.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max_score > 0 {
            f64::from(self.score) / f64::from(self.max_score)
        } else {
            0.0
        }
    }
}

/// A qualitative performance tier derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    /// 90% and above.
    Expert,
    /// 75% and above.
    Advanced,
    /// 60% and above.
    Proficient,
    /// 40% and above.
    Developing,
    /// Below 40%.
    Emerging,
}

impl PerformanceLevel {
    /// Derives the performance level from an overall percentage.
    ///
    /// # Arguments
    ///
    /// * `percentage` - The overall score percentage in `[0, 100]`
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Expert
        } else if percentage >= 75.0 {
            Self::Advanced
        } else if percentage >= 60.0 {
            Self::Proficient
        } else if percentage >= 40.0 {
            Self::Developing
        } else {
            Self::Emerging
        }
    }

    /// Converts this level to its tier name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Proficient => "Proficient",
            Self::Developing => "Developing",
            Self::Emerging => "Emerging",
        }
    }

    /// Returns the full display label for this level.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} Tech Decision-Maker", self.as_str())
    }
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The derived outcome of a completed assessment.
///
/// Created exactly once per completion and immutable thereafter. Repeating
/// the completion recomputes an identical value from the same responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Per-competency scores, in competency declaration order.
    pub competency_scores: Vec<CompetencyScore>,
    /// Sum of all clamped competency scores.
    pub total_score: i32,
    /// Sum of all competency maximums.
    pub max_possible_score: i32,
    /// The qualitative performance tier.
    pub performance_level: PerformanceLevel,
    /// The two competencies with the highest normalized scores, descending.
    pub strengths: Vec<Competency>,
    /// The two competencies with the lowest normalized scores, taken from
    /// the tail of the same descending ranking.
    pub growth_areas: Vec<Competency>,
    /// A copy of the responses the result was computed from.
    pub responses: Vec<UserResponse>,
}
