// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Scenario;
use std::collections::HashSet;

/// Validates a single scenario's structural constraints.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `scenario` - The scenario to validate
///
/// # Returns
///
/// * `Ok(())` if the scenario is well-formed
/// * `Err(DomainError)` if a constraint is violated
///
/// # Errors
///
/// Returns an error if:
/// - The scenario has fewer than 2 options (the most/least selection needs
///   at least two distinct choices)
/// - Two options share an identifier
pub fn validate_scenario(scenario: &Scenario) -> Result<(), DomainError> {
    // Rule: most/least selection requires at least two options
    if scenario.options.len() < 2 {
        return Err(DomainError::NotEnoughOptions {
            scenario: scenario.id.clone(),
            count: scenario.options.len(),
        });
    }

    // Rule: option identifiers must be unique within the scenario
    let mut seen: HashSet<&str> = HashSet::new();
    for option in &scenario.options {
        if !seen.insert(option.id.as_str()) {
            return Err(DomainError::DuplicateOptionId {
                scenario: scenario.id.clone(),
                option: option.id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates structural constraints across a whole catalog of scenarios.
///
/// # Arguments
///
/// * `scenarios` - All scenarios in the catalog
///
/// # Returns
///
/// * `Ok(())` if every scenario is well-formed and identifiers are unique
/// * `Err(DomainError)` on the first violation found
///
/// # Errors
///
/// Returns an error if:
/// - Two scenarios share an identifier
/// - Any individual scenario fails [`validate_scenario`]
pub fn validate_catalog_scenarios(scenarios: &[Scenario]) -> Result<(), DomainError> {
    // Rule: scenario identifiers must be unique across the catalog
    let mut seen: HashSet<&str> = HashSet::new();
    for scenario in scenarios {
        if !seen.insert(scenario.id.as_str()) {
            return Err(DomainError::DuplicateScenarioId(scenario.id.clone()));
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}
