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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod builtin;

use compass_domain::{Domain, DomainError, Scenario, validate_catalog_scenarios};
use rand::Rng;

/// The static, read-only table of assessment scenarios.
///
/// The catalog is fixed data: loaded once, validated at construction, and
/// never mutated. Per-domain lookup is deterministic — the primary
/// assessment path never involves randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// All scenarios across all domains, in catalog order.
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Creates a catalog from a scenario list, validating its integrity.
    ///
    /// # Arguments
    ///
    /// * `scenarios` - All scenarios the catalog should hold
    ///
    /// # Returns
    ///
    /// * `Ok(Catalog)` if the scenario list is well-formed
    /// * `Err(DomainError)` on the first integrity violation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two scenarios share an identifier
    /// - Any scenario has duplicate option identifiers or fewer than 2
    ///   options
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, DomainError> {
        validate_catalog_scenarios(&scenarios)?;
        Ok(Self { scenarios })
    }

    /// Returns the catalog shipped with the application.
    ///
    /// The built-in content is known-good; a test guards that it passes the
    /// same integrity validation as externally supplied data.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            scenarios: builtin::builtin_scenarios(),
        }
    }

    /// Returns all scenarios in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Returns the ordered scenario list for one domain.
    ///
    /// This is the lookup used by the assessment path: pure, deterministic,
    /// and identical on repeated calls.
    #[must_use]
    pub fn scenarios(&self, domain: Domain) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .filter(|scenario| scenario.domain == domain)
            .cloned()
            .collect()
    }

    /// Looks up a scenario by its identifier.
    #[must_use]
    pub fn scenario(&self, scenario_id: &str) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.id == scenario_id)
    }

    /// Returns how many scenarios a domain has.
    #[must_use]
    pub fn scenario_count(&self, domain: Domain) -> usize {
        self.scenarios
            .iter()
            .filter(|scenario| scenario.domain == domain)
            .count()
    }

    /// Returns a random subset of a domain's scenarios.
    ///
    /// This is the practice-mode variant only; the primary assessment flow
    /// always uses the full fixed list from [`Self::scenarios`]. Returns at
    /// most `count` distinct scenarios, fewer if the domain has fewer.
    #[must_use]
    pub fn sample_scenarios<R: Rng + ?Sized>(
        &self,
        domain: Domain,
        count: usize,
        rng: &mut R,
    ) -> Vec<Scenario> {
        let domain_scenarios: Vec<&Scenario> = self
            .scenarios
            .iter()
            .filter(|scenario| scenario.domain == domain)
            .collect();

        let amount: usize = count.min(domain_scenarios.len());
        rand::seq::index::sample(rng, domain_scenarios.len(), amount)
            .iter()
            .map(|index| domain_scenarios[index].clone())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
