//! Unique id generation

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Source of fresh ids for ingredients and result records
#[derive(Debug, Default)]
pub enum IdGenerator {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// Milliseconds since the epoch, bumped when two calls share a millisecond
    Timestamp(AtomicI64),
}

impl IdGenerator {
    /// Coarse timestamp-derived ids, for when random ids are unavailable
    pub fn timestamp() -> Self {
        IdGenerator::Timestamp(AtomicI64::new(0))
    }

    pub fn next_id(&self) -> String {
        match self {
            IdGenerator::Uuid => Uuid::new_v4().to_string(),
            IdGenerator::Timestamp(last) => {
                let now = Utc::now().timestamp_millis();
                let prev = last
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(now.max(prev + 1)))
                    .unwrap_or(now);
                now.max(prev + 1).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let ids = IdGenerator::timestamp();
        let generated: Vec<i64> = (0..50).map(|_| ids.next_id().parse().unwrap()).collect();
        assert!(generated.windows(2).all(|w| w[1] > w[0]));
    }
}
