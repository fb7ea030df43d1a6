use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Weak};

/// Concurrency-safe running total of parsed integers
///
/// Adds are lock-free and may come from any number of threads. A sum can be
/// chained to a parent: every add is applied to the child and then forwarded
/// to the parent, which in turn forwards to its own parent. The parent link
/// is a weak back-reference, so a child never keeps its parent alive; once
/// the parent is dropped, adds stop propagating.
#[derive(Debug, Default)]
pub struct ThreadSafeSum {
    total: AtomicI64,
    parent: Option<Weak<ThreadSafeSum>>,
}

impl ThreadSafeSum {
    /// Create a new standalone sum starting at zero
    pub fn new() -> Self {
        Self {
            total: AtomicI64::new(0),
            parent: None,
        }
    }

    /// Create a sum whose adds are also reflected in `parent`
    pub fn with_parent(parent: &Arc<ThreadSafeSum>) -> Self {
        Self {
            total: AtomicI64::new(0),
            parent: Some(Arc::downgrade(parent)),
        }
    }

    /// Atomically add `delta` to this sum and every ancestor
    ///
    /// Wraps on i64 overflow.
    pub fn add(&self, delta: i64) {
        self.total.fetch_add(delta, Ordering::AcqRel);

        if let Some(parent) = self.parent.as_ref().and_then(Weak::upgrade) {
            parent.add(delta);
        }
    }

    /// Current total
    pub fn value(&self) -> i64 {
        self.total.load(Ordering::Acquire)
    }

    #[cfg(test)]
    fn has_parent(&self) -> bool {
        self.parent
            .as_ref()
            .is_some_and(|parent| parent.strong_count() > 0)
    }
}
