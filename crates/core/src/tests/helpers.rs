// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssessmentState, Command, apply};
use compass_catalog::Catalog;
use compass_domain::{Domain, UserResponse};
use time::OffsetDateTime;

pub fn create_test_catalog() -> Catalog {
    Catalog::builtin()
}

pub fn create_test_response(scenario_id: &str, most: &str, least: &str) -> UserResponse {
    UserResponse::new(
        scenario_id.to_string(),
        Some(most.to_string()),
        Some(least.to_string()),
        OffsetDateTime::UNIX_EPOCH,
    )
}

/// Selects a domain on a fresh state and returns the loaded session.
pub fn start_assessment(catalog: &Catalog, domain: Domain) -> AssessmentState {
    apply(
        catalog,
        &AssessmentState::new(),
        Command::SelectDomain(domain),
    )
    .new_state
}
