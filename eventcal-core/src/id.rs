//! Event identifier generation.

use uuid::Uuid;

/// Source of unique, opaque event ids.
///
/// The calendar trusts the generator; it does not check ids for uniqueness.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String + Send,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Random v4 UUIDs (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::new("event")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("evt");
        assert_eq!(ids.next_id(), "evt-1");
        assert_eq!(ids.next_id(), "evt-2");
        assert_eq!(ids.next_id(), "evt-3");
    }

    #[test]
    fn closure_as_generator() {
        let mut n = 0;
        let mut ids = move || {
            n += 10;
            format!("id{n}")
        };
        assert_eq!(IdGenerator::next_id(&mut ids), "id10");
        assert_eq!(IdGenerator::next_id(&mut ids), "id20");
    }
}
