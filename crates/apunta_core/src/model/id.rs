//! Record identifier generation.
//!
//! # Invariants
//! - Ids are decimal strings of epoch milliseconds, strictly increasing
//!   process-wide. Two calls in the same millisecond never collide.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Returns the next record id.
///
/// The value is the current Unix time in milliseconds, bumped forward past
/// the previously issued value when the clock has not advanced yet. Burst
/// creation (the sample seeder makes seven records back to back) therefore
/// still produces unique ids.
pub fn next_record_id() -> String {
    let now_ms = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
    loop {
        let candidate = if now_ms > last { now_ms } else { last + 1 };
        match LAST_ISSUED_MS.compare_exchange(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(observed) => last = observed,
        }
    }
}
