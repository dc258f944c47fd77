// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assessment scoring based on per-competency impact accumulation.
//!
//! This module provides deterministic scoring of a completed assessment.
//! Scoring is a pure function of the scenario list and the response list.
//!
//! ## Scoring Rules (Authoritative)
//!
//! For every response whose scenario exists in the scenario list:
//! 1. `best` is the first option with the maximum effectiveness rank,
//!    `worst` the first with the minimum (first-in-list breaks ties)
//! 2. A chosen most-effective option adds its own impact values
//! 3. A chosen least-effective option that is not `worst` subtracts the
//!    absolute per-competency distance from `worst`
//! 4. `best`'s impact values always accumulate into the attainable maximum
//! 5. After accumulation, every competency score is clamped at zero
//!
//! ## Invariants
//!
//! - Responses referencing an unknown scenario identifier are skipped
//! - Scoring is invariant to the order of the response list
//! - A zero attainable maximum yields a 0% overall score, never a division
//!   error
//!
//! ## Usage
//!
//! This logic is used by:
//! - Assessment completion (to produce the stored result)
//! - The detailed feedback view (best/worst lookup per scenario)

use crate::types::{
    AnswerOption, AssessmentResult, Competency, CompetencyScore, PerformanceLevel, Scenario,
    UserResponse,
};

/// Returns the most effective option of a scenario.
///
/// Ties on effectiveness are broken by taking the first such option in the
/// scenario's option list. Returns `None` only for a scenario with no
/// options.
#[must_use]
pub fn best_option(scenario: &Scenario) -> Option<&AnswerOption> {
    let mut best: Option<&AnswerOption> = None;
    for option in &scenario.options {
        match best {
            Some(current) if option.effectiveness <= current.effectiveness => {}
            _ => best = Some(option),
        }
    }
    best
}

/// Returns the least effective option of a scenario.
///
/// Ties on effectiveness are broken by taking the first such option in the
/// scenario's option list. Returns `None` only for a scenario with no
/// options.
#[must_use]
pub fn worst_option(scenario: &Scenario) -> Option<&AnswerOption> {
    let mut worst: Option<&AnswerOption> = None;
    for option in &scenario.options {
        match worst {
            Some(current) if option.effectiveness >= current.effectiveness => {}
            _ => worst = Some(option),
        }
    }
    worst
}

/// Computes the overall percentage for a score against its maximum.
///
/// A zero or negative maximum yields 0 rather than dividing by zero.
#[must_use]
pub fn percentage(total_score: i32, max_possible_score: i32) -> f64 {
    if max_possible_score > 0 {
        f64::from(total_score) / f64::from(max_possible_score) * 100.0
    } else {
        0.0
    }
}

/// Scores a completed assessment.
///
/// Pure and deterministic: calling this twice with the same inputs produces
/// identical results, and the order of the response list does not matter.
///
/// # Arguments
///
/// * `scenarios` - The scenario list the assessment was taken against
/// * `responses` - The accumulated responses (at most one per scenario)
///
/// # Returns
///
/// The derived [`AssessmentResult`]: per-competency scores, totals,
/// performance level, and the strengths/growth-areas ranking.
#[must_use]
pub fn score_assessment(scenarios: &[Scenario], responses: &[UserResponse]) -> AssessmentResult {
    let mut scores: [i32; 4] = [0; 4];
    let mut max_scores: [i32; 4] = [0; 4];

    for response in responses {
        // Responses referencing an unknown scenario are silently skipped
        let Some(scenario) = scenarios
            .iter()
            .find(|scenario| scenario.id == response.scenario_id)
        else {
            continue;
        };
        let (Some(best), Some(worst)) = (best_option(scenario), worst_option(scenario)) else {
            continue;
        };

        // Reward: the chosen most-effective option contributes its own
        // impact values, whether or not it is actually the best option
        if let Some(most_effective_id) = &response.most_effective_id {
            if let Some(chosen) = scenario.option(most_effective_id) {
                for (index, competency) in Competency::ALL.iter().enumerate() {
                    scores[index] += chosen.impact.get(*competency);
                }
            }
        }

        // Penalty: a missed least-effective pick costs the absolute
        // per-competency distance from the true worst option
        if let Some(least_effective_id) = &response.least_effective_id {
            if let Some(chosen) = scenario.option(least_effective_id) {
                if chosen.id != worst.id {
                    for (index, competency) in Competency::ALL.iter().enumerate() {
                        scores[index] -=
                            (chosen.impact.get(*competency) - worst.impact.get(*competency)).abs();
                    }
                }
            }
        }

        // The attainable maximum grows by the best option's impact values
        // regardless of what the participant chose
        for (index, competency) in Competency::ALL.iter().enumerate() {
            max_scores[index] += best.impact.get(*competency);
        }
    }

    // Penalties never carry a competency below zero in the final result
    let competency_scores: Vec<CompetencyScore> = Competency::ALL
        .iter()
        .enumerate()
        .map(|(index, competency)| CompetencyScore {
            competency: *competency,
            score: scores[index].max(0),
            max_score: max_scores[index],
        })
        .collect();

    let total_score: i32 = competency_scores.iter().map(|entry| entry.score).sum();
    let max_possible_score: i32 = competency_scores.iter().map(|entry| entry.max_score).sum();

    let overall: f64 = percentage(total_score, max_possible_score);
    let performance_level: PerformanceLevel = PerformanceLevel::from_percentage(overall);

    let (strengths, growth_areas) = rank_competencies(&competency_scores);

    AssessmentResult {
        competency_scores,
        total_score,
        max_possible_score,
        performance_level,
        strengths,
        growth_areas,
        responses: responses.to_vec(),
    }
}

/// Ranks competencies by normalized score and splits the ranking into the
/// top-two strengths and bottom-two growth areas.
///
/// The sort is stable and descends by ratio, so equal ratios keep
/// competency declaration order. Growth areas are the tail of the same
/// descending ranking, in ranking order.
fn rank_competencies(
    competency_scores: &[CompetencyScore],
) -> (Vec<Competency>, Vec<Competency>) {
    let mut ranked: Vec<(Competency, f64)> = competency_scores
        .iter()
        .map(|entry| (entry.competency, entry.ratio()))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let strengths: Vec<Competency> = ranked
        .iter()
        .take(2)
        .map(|(competency, _)| *competency)
        .collect();
    let growth_areas: Vec<Competency> = ranked
        .iter()
        .skip(ranked.len().saturating_sub(2))
        .map(|(competency, _)| *competency)
        .collect();

    (strengths, growth_areas)
}
