// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AnswerOption, CompetencyImpact, Domain, DomainError, Scenario, validate_catalog_scenarios,
    validate_scenario,
};

fn create_option(id: &str, effectiveness: u8) -> AnswerOption {
    AnswerOption::new(
        id.to_string(),
        format!("Option {id}"),
        effectiveness,
        format!("Feedback for {id}"),
        CompetencyImpact::new(1, 1, 1, 1),
    )
}

fn create_scenario(id: &str, options: Vec<AnswerOption>) -> Scenario {
    Scenario {
        id: id.to_string(),
        domain: Domain::Ai,
        title: format!("Scenario {id}"),
        context: String::from("Context"),
        problem: String::from("Problem"),
        options,
        illustration: None,
    }
}

#[test]
fn test_well_formed_scenario_passes() {
    let scenario = create_scenario(
        "ai-1",
        vec![
            create_option("ai-1-a", 1),
            create_option("ai-1-b", 5),
            create_option("ai-1-c", 3),
            create_option("ai-1-d", 2),
        ],
    );

    assert!(validate_scenario(&scenario).is_ok());
}

#[test]
fn test_scenario_with_one_option_is_rejected() {
    let scenario = create_scenario("ai-1", vec![create_option("ai-1-a", 1)]);

    assert_eq!(
        validate_scenario(&scenario).unwrap_err(),
        DomainError::NotEnoughOptions {
            scenario: String::from("ai-1"),
            count: 1,
        }
    );
}

#[test]
fn test_scenario_with_no_options_is_rejected() {
    let scenario = create_scenario("ai-1", Vec::new());

    assert_eq!(
        validate_scenario(&scenario).unwrap_err(),
        DomainError::NotEnoughOptions {
            scenario: String::from("ai-1"),
            count: 0,
        }
    );
}

#[test]
fn test_duplicate_option_id_is_rejected() {
    let scenario = create_scenario(
        "ai-1",
        vec![
            create_option("ai-1-a", 1),
            create_option("ai-1-b", 5),
            create_option("ai-1-a", 3),
        ],
    );

    assert_eq!(
        validate_scenario(&scenario).unwrap_err(),
        DomainError::DuplicateOptionId {
            scenario: String::from("ai-1"),
            option: String::from("ai-1-a"),
        }
    );
}

#[test]
fn test_duplicate_effectiveness_is_permitted() {
    // Ties on effectiveness are legal; scoring breaks them by list order
    let scenario = create_scenario(
        "ai-1",
        vec![create_option("ai-1-a", 3), create_option("ai-1-b", 3)],
    );

    assert!(validate_scenario(&scenario).is_ok());
}

#[test]
fn test_catalog_with_unique_scenario_ids_passes() {
    let scenarios = vec![
        create_scenario(
            "ai-1",
            vec![create_option("ai-1-a", 1), create_option("ai-1-b", 5)],
        ),
        create_scenario(
            "ai-2",
            vec![create_option("ai-2-a", 1), create_option("ai-2-b", 5)],
        ),
    ];

    assert!(validate_catalog_scenarios(&scenarios).is_ok());
}

#[test]
fn test_catalog_with_duplicate_scenario_id_is_rejected() {
    let scenarios = vec![
        create_scenario(
            "ai-1",
            vec![create_option("ai-1-a", 1), create_option("ai-1-b", 5)],
        ),
        create_scenario(
            "ai-1",
            vec![create_option("ai-1-c", 1), create_option("ai-1-d", 5)],
        ),
    ];

    assert_eq!(
        validate_catalog_scenarios(&scenarios).unwrap_err(),
        DomainError::DuplicateScenarioId(String::from("ai-1"))
    );
}

#[test]
fn test_catalog_validation_checks_each_scenario() {
    let scenarios = vec![
        create_scenario(
            "ai-1",
            vec![create_option("ai-1-a", 1), create_option("ai-1-b", 5)],
        ),
        create_scenario("ai-2", vec![create_option("ai-2-a", 1)]),
    ];

    assert_eq!(
        validate_catalog_scenarios(&scenarios).unwrap_err(),
        DomainError::NotEnoughOptions {
            scenario: String::from("ai-2"),
            count: 1,
        }
    );
}
