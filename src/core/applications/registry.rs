//! In-memory index of accepted applications
//!
//! Only the admin email and the receipt are retained. The index is lost on
//! restart and is bounded by the configured capacity.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::core::submission::ApplicationReceipt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Application capacity of {0} reached")]
    CapacityReached(usize),
}

/// Accepted applications keyed by normalized admin email
pub struct ApplicationRegistry {
    by_email: DashMap<String, ApplicationReceipt>,
    /// Slots handed out so far; never exceeds `capacity`
    reserved: AtomicUsize,
    capacity: usize,
}

/// Emails compare case-insensitively, ignoring surrounding whitespace
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl ApplicationRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            by_email: DashMap::new(),
            reserved: AtomicUsize::new(0),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    pub fn is_email_available(&self, email: &str) -> bool {
        !self.by_email.contains_key(&normalize_email(email))
    }

    /// Record an application for `email` and issue its receipt.
    ///
    /// The capacity slot is reserved while the vacant entry is held, so
    /// concurrent callers cannot overshoot the limit.
    pub fn register(&self, email: &str) -> Result<ApplicationReceipt, RegistryError> {
        match self.by_email.entry(normalize_email(email)) {
            Entry::Occupied(_) => Err(RegistryError::EmailTaken),
            Entry::Vacant(slot) => {
                self.reserved
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                        (n < self.capacity).then_some(n + 1)
                    })
                    .map_err(|_| RegistryError::CapacityReached(self.capacity))?;

                let receipt = ApplicationReceipt::new();
                slot.insert(receipt.clone());
                Ok(receipt)
            }
        }
    }

    pub fn receipt_for(&self, email: &str) -> Option<ApplicationReceipt> {
        self.by_email
            .get(&normalize_email(email))
            .map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = ApplicationRegistry::new(10);
        assert!(registry.is_empty());
        assert!(registry.is_email_available("ada@brightminds.edu"));

        let receipt = registry.register("ada@brightminds.edu").unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_email_available("ada@brightminds.edu"));
        assert_eq!(registry.receipt_for("ada@brightminds.edu"), Some(receipt));
    }

    #[test]
    fn test_email_comparison_is_normalized() {
        let registry = ApplicationRegistry::new(10);
        registry.register("Ada@BrightMinds.edu").unwrap();

        assert!(!registry.is_email_available("  ada@brightminds.edu "));
        assert_eq!(
            registry.register("ADA@BRIGHTMINDS.EDU"),
            Err(RegistryError::EmailTaken)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let registry = ApplicationRegistry::new(2);
        registry.register("a@example.com").unwrap();
        registry.register("b@example.com").unwrap();

        assert_eq!(
            registry.register("c@example.com"),
            Err(RegistryError::CapacityReached(2))
        );
        assert!(registry.is_email_available("c@example.com"));
    }

    #[test]
    fn test_concurrent_registrations_respect_capacity() {
        let registry = ApplicationRegistry::new(5);

        std::thread::scope(|scope| {
            for i in 0..64 {
                let registry = &registry;
                scope.spawn(move || {
                    let _ = registry.register(&format!("admin{}@example.com", i));
                });
            }
        });

        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.register("late@example.com"),
            Err(RegistryError::CapacityReached(5))
        );
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let registry = ApplicationRegistry::new(0);
        assert_eq!(
            registry.register("a@example.com"),
            Err(RegistryError::CapacityReached(0))
        );
    }
}
