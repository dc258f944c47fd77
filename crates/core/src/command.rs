// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use compass_domain::{Domain, UserResponse};

/// A command represents participant intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a domain, discarding any prior session state entirely.
    SelectDomain(Domain),
    /// Advance the cursor to the next scenario, clamped at the last one.
    Next,
    /// Move the cursor back one scenario, clamped at the first one.
    Previous,
    /// Record a response, replacing any prior response for the same
    /// scenario. Does not move the cursor.
    SubmitResponse(UserResponse),
    /// Score the accumulated responses and store the result.
    CompleteAssessment,
    /// Return to the initial empty state unconditionally.
    Reset,
}
