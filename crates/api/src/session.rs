// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session token generation.

use time::OffsetDateTime;

/// Generates a fresh session token.
///
/// Tokens identify one assessment session in the server's in-memory store.
/// They are opaque and carry no authentication weight — this system has no
/// accounts or credentials.
#[must_use]
pub fn new_session_token() -> String {
    let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
    format!("session_{timestamp}_{}", rand::random::<u64>())
}
