//! Random test-data generation.

use std::ops::RangeInclusive;

use apiprobe_types::NewPost;
use chrono::Utc;

/// User ids known to exist on the target service.
pub const USER_ID_RANGE: RangeInclusive<u64> = 1..=10;

/// A post draft with a clock-stamped title/body and a random known user id.
///
/// The millisecond stamp keeps payloads distinguishable across runs; it is
/// not a uniqueness guarantee within one run.
#[must_use]
pub fn random_post() -> NewPost {
    let stamp = Utc::now().timestamp_millis();
    NewPost {
        title: format!("Test post {stamp}"),
        body: format!("Test body {stamp}"),
        user_id: rand::random_range(USER_ID_RANGE),
    }
}
