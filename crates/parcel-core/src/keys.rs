//! Storage key generation.
//!
//! Key format: `{issue_millis}-{file_name}`, or `{issue_millis}-{random8}-{file_name}`
//! under [`KeyPolicy::RandomSuffix`]. The timestamp always comes from the server clock,
//! never from the request.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Wall-clock source used when issuing keys.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// How storage keys are made unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// `{millis}-{name}`; two requests for the same name in the same millisecond collide
    /// and the later PUT wins.
    #[default]
    Timestamp,
    /// `{millis}-{random8}-{name}`
    RandomSuffix,
}

/// Generate the storage key for an upload issued at `issued_at_millis`.
pub fn generate_file_key(issued_at_millis: i64, file_name: &str, policy: KeyPolicy) -> String {
    match policy {
        KeyPolicy::Timestamp => format!("{}-{}", issued_at_millis, file_name),
        KeyPolicy::RandomSuffix => {
            let simple = Uuid::new_v4().simple().to_string();
            format!("{}-{}-{}", issued_at_millis, &simple[..8], file_name)
        }
    }
}
