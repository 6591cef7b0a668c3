use dashmap::DashSet;
use domain::error::{Error, ValidationErrorKind};
use log::*;

/// Outcome of an unregister call. Absence is user-visible state rather
/// than an error: the operation is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStatus {
    Removed,
    NotFound,
}

impl RemovalStatus {
    /// The status label used in JSON summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalStatus::Removed => "success",
            RemovalStatus::NotFound => "not_found",
        }
    }
}

/// Concurrency-safe set of registered webhook endpoint URLs.
///
/// Membership is the unit of identity: no duplicates, no ordering.
/// Entries are created by `register` and destroyed only by `unregister`;
/// the dispatcher never prunes on delivery failure.
pub struct Registry {
    endpoints: DashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            endpoints: DashSet::new(),
        }
    }

    /// Validate and idempotently add an endpoint URL. Returns the total
    /// number of registered endpoints.
    pub fn register(&self, url: &str) -> domain::Result<usize> {
        if url.is_empty() {
            return Err(Error::validation(ValidationErrorKind::MissingWebhookUrl));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::validation(ValidationErrorKind::InvalidWebhookUrl));
        }

        if self.endpoints.insert(url.to_string()) {
            info!("Registered webhook: {url}");
        }

        Ok(self.endpoints.len())
    }

    /// Idempotent removal, reporting absence as a status flag. Returns the
    /// status and the total count after the call.
    pub fn unregister(&self, url: &str) -> (RemovalStatus, usize) {
        let status = if self.endpoints.remove(url).is_some() {
            info!("Unregistered webhook: {url}");
            RemovalStatus::Removed
        } else {
            RemovalStatus::NotFound
        };

        (status, self.endpoints.len())
    }

    /// Snapshot of every registered URL, order-irrelevant.
    pub fn list(&self) -> Vec<String> {
        self.endpoints
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::error::DomainErrorKind;
    use std::sync::Arc;

    #[test]
    fn registering_the_same_url_twice_is_idempotent() {
        let registry = Registry::new();
        assert_eq!(registry.register("http://localhost:3000/hook").unwrap(), 1);
        assert_eq!(registry.register("http://localhost:3000/hook").unwrap(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_rejects_a_url_without_a_scheme() {
        let registry = Registry::new();
        let err = registry.register("not-a-url").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation(ValidationErrorKind::InvalidWebhookUrl)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn register_rejects_an_empty_url() {
        let registry = Registry::new();
        let err = registry.register("").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation(ValidationErrorKind::MissingWebhookUrl)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unregistering_an_absent_url_reports_not_found() {
        let registry = Registry::new();
        let (status, total) = registry.unregister("http://localhost:9999/gone");
        assert_eq!(status, RemovalStatus::NotFound);
        assert_eq!(total, 0);
    }

    #[test]
    fn round_trip_membership_goes_zero_one_zero() {
        let registry = Registry::new();
        assert!(registry.list().is_empty());

        registry.register("https://example.com/hook").unwrap();
        assert_eq!(registry.list(), vec!["https://example.com/hook".to_string()]);

        let (status, total) = registry.unregister("https://example.com/hook");
        assert_eq!(status, RemovalStatus::Removed);
        assert_eq!(total, 0);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn concurrent_register_and_unregister_never_duplicate_or_lose_entries() {
        let registry = Arc::new(Registry::new());
        let urls: Vec<String> = (0..8)
            .map(|i| format!("http://localhost:30{i:02}/hook"))
            .collect();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            let urls = urls.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    for url in &urls {
                        registry.register(url).unwrap();
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().expect("register thread panicked");
        }
        assert_eq!(registry.len(), urls.len());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            let urls = urls.clone();
            handles.push(std::thread::spawn(move || {
                for url in &urls {
                    registry.unregister(url);
                }
            }));
        }
        for handle in handles {
            handle.join().expect("unregister thread panicked");
        }
        assert!(registry.is_empty());
    }
}
