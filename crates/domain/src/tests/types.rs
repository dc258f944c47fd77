// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AnswerOption, Competency, CompetencyImpact, CompetencyScore, Domain, DomainError,
    PerformanceLevel, Scenario, UserResponse,
};
use std::str::FromStr;
use time::OffsetDateTime;

#[test]
fn test_domain_parses_known_identifiers() {
    assert_eq!(Domain::from_str("ai").unwrap(), Domain::Ai);
    assert_eq!(Domain::from_str("servicenow").unwrap(), Domain::ServiceNow);
    assert_eq!(Domain::from_str("salesforce").unwrap(), Domain::Salesforce);
}

#[test]
fn test_domain_rejects_unknown_identifier() {
    let result: Result<Domain, DomainError> = Domain::from_str("dynamics");
    assert_eq!(
        result.unwrap_err(),
        DomainError::UnknownDomain(String::from("dynamics"))
    );
}

#[test]
fn test_domain_display_round_trips() {
    for domain in Domain::ALL {
        assert_eq!(Domain::from_str(domain.as_str()).unwrap(), domain);
        assert_eq!(format!("{domain}"), domain.as_str());
    }
}

#[test]
fn test_domain_titles_are_distinct() {
    assert_eq!(Domain::Ai.title(), "AI Project Management");
    assert_eq!(Domain::ServiceNow.title(), "ServiceNow Implementation");
    assert_eq!(Domain::Salesforce.title(), "Salesforce Client Interactions");
}

#[test]
fn test_competency_declaration_order() {
    assert_eq!(
        Competency::ALL,
        [
            Competency::CriticalThinking,
            Competency::TeamCollaboration,
            Competency::ClientCommunication,
            Competency::Prioritization,
        ]
    );
}

#[test]
fn test_competency_display_names() {
    assert_eq!(Competency::CriticalThinking.display_name(), "Critical Thinking");
    assert_eq!(
        Competency::Prioritization.display_name(),
        "Prioritization & Adaptability"
    );
}

#[test]
fn test_competency_impact_lookup() {
    let impact: CompetencyImpact = CompetencyImpact::new(1, 2, 3, 4);

    assert_eq!(impact.get(Competency::CriticalThinking), 1);
    assert_eq!(impact.get(Competency::TeamCollaboration), 2);
    assert_eq!(impact.get(Competency::ClientCommunication), 3);
    assert_eq!(impact.get(Competency::Prioritization), 4);
}

#[test]
fn test_scenario_option_lookup() {
    let scenario: Scenario = Scenario {
        id: String::from("ai-1"),
        domain: Domain::Ai,
        title: String::from("Title"),
        context: String::from("Context"),
        problem: String::from("Problem"),
        options: vec![
            AnswerOption::new(
                String::from("ai-1-a"),
                String::from("A"),
                1,
                String::from("fa"),
                CompetencyImpact::new(0, 0, 0, 0),
            ),
            AnswerOption::new(
                String::from("ai-1-b"),
                String::from("B"),
                5,
                String::from("fb"),
                CompetencyImpact::new(1, 1, 1, 1),
            ),
        ],
        illustration: None,
    };

    assert_eq!(scenario.option("ai-1-b").unwrap().text, "B");
    assert!(scenario.option("ai-1-z").is_none());
}

#[test]
fn test_user_response_creation() {
    let response: UserResponse = UserResponse::new(
        String::from("ai-1"),
        Some(String::from("ai-1-b")),
        None,
        OffsetDateTime::UNIX_EPOCH,
    );

    assert_eq!(response.scenario_id, "ai-1");
    assert_eq!(response.most_effective_id, Some(String::from("ai-1-b")));
    assert_eq!(response.least_effective_id, None);
}

#[test]
fn test_competency_score_ratio() {
    let score: CompetencyScore = CompetencyScore {
        competency: Competency::CriticalThinking,
        score: 3,
        max_score: 4,
    };
    assert!((score.ratio() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_competency_score_ratio_guards_zero_maximum() {
    let score: CompetencyScore = CompetencyScore {
        competency: Competency::CriticalThinking,
        score: 0,
        max_score: 0,
    };
    assert!((score.ratio() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_performance_level_label() {
    assert_eq!(
        PerformanceLevel::Expert.label(),
        "Expert Tech Decision-Maker"
    );
    assert_eq!(
        PerformanceLevel::Emerging.label(),
        "Emerging Tech Decision-Maker"
    );
}
