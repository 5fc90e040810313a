//! # Handle Resolver
//!
//! Turns whatever is in a recipient field into an address.
//!
//! Addresses resolve immediately, malformed input fails immediately, and
//! `@handles` are looked up in a [`HandleDirectory`] on a spawned task. Every
//! input change bumps a generation counter; a lookup only writes its result
//! if the generation it was started under is still current, so a slow lookup
//! for an old input can never overwrite the state of a newer one.

use std::sync::Arc;

use alloy_primitives::Address;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::core::service::HandleDirectory;
use crate::utils::validation::{classify_recipient, Recipient};

pub const HANDLE_NOT_FOUND: &str = "Handle not found";
pub const INVALID_RECIPIENT: &str = "Invalid address or handle";

/// Snapshot of the resolution state for the current input.
///
/// `is_loading` is never set together with `address` or `error`, and at most
/// one of `address`/`error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: Option<Address>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_handle: bool,
}

impl ResolvedAddress {
    fn resolved(address: Address, is_handle: bool) -> Self {
        Self {
            address: Some(address),
            is_handle,
            ..Self::default()
        }
    }

    fn failed(error: &str, is_handle: bool) -> Self {
        Self {
            error: Some(error.to_string()),
            is_handle,
            ..Self::default()
        }
    }

    fn loading() -> Self {
        Self {
            is_loading: true,
            is_handle: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    input: String,
    result: ResolvedAddress,
}

/// Reactive resolver keyed by a single current input.
pub struct HandleResolver {
    directory: Arc<dyn HandleDirectory>,
    slot: Arc<Mutex<Slot>>,
}

impl HandleResolver {
    pub fn new(directory: Arc<dyn HandleDirectory>) -> Self {
        Self {
            directory,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// Current resolution state.
    pub fn result(&self) -> ResolvedAddress {
        self.slot.lock().result.clone()
    }

    /// The input the current state belongs to.
    pub fn input(&self) -> String {
        self.slot.lock().input.clone()
    }

    /// Feed a new input value.
    ///
    /// Re-sending the current input is a no-op. For handles a lookup task is
    /// spawned (a Tokio runtime must be running) and its handle returned so
    /// callers can await completion; everything else is resolved synchronously.
    pub fn set_input(&self, input: &str) -> Option<JoinHandle<()>> {
        let mut slot = self.slot.lock();
        if slot.input == input {
            return None;
        }

        slot.generation = slot.generation.wrapping_add(1);
        slot.input = input.to_string();
        let generation = slot.generation;

        let handle = match classify_recipient(input) {
            Recipient::Empty => {
                slot.result = ResolvedAddress::default();
                return None;
            }
            Recipient::Address(address) => {
                slot.result = ResolvedAddress::resolved(address, false);
                return None;
            }
            Recipient::Invalid => {
                slot.result = ResolvedAddress::failed(INVALID_RECIPIENT, false);
                return None;
            }
            Recipient::Handle(handle) => handle,
        };

        slot.result = ResolvedAddress::loading();
        drop(slot);

        let directory = Arc::clone(&self.directory);
        let slot = Arc::clone(&self.slot);

        Some(tokio::spawn(async move {
            let result = match directory.resolve(&handle).await {
                Ok(Some(address)) => ResolvedAddress::resolved(address, true),
                Ok(None) => ResolvedAddress::failed(HANDLE_NOT_FOUND, true),
                Err(e) => {
                    tracing::warn!(handle = %handle, error = %e, "Handle lookup failed");
                    ResolvedAddress::failed(HANDLE_NOT_FOUND, true)
                }
            };

            let mut slot = slot.lock();
            if slot.generation != generation {
                tracing::debug!(handle = %handle, "Discarding stale handle lookup");
                return;
            }
            slot.result = result;
        }))
    }
}

/// Why a one-shot resolution produced no address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Recipient is required")]
    Empty,
    #[error("Invalid address or handle")]
    Invalid,
    #[error("Handle not found")]
    NotFound,
}

/// Resolve `input` once, awaiting the directory for handles.
///
/// Directory transport failures count as "not found".
pub async fn resolve_recipient(directory: &dyn HandleDirectory, input: &str) -> Result<Address, ResolveError> {
    match classify_recipient(input) {
        Recipient::Empty => Err(ResolveError::Empty),
        Recipient::Invalid => Err(ResolveError::Invalid),
        Recipient::Address(address) => Ok(address),
        Recipient::Handle(handle) => match directory.resolve(&handle).await {
            Ok(Some(address)) => Ok(address),
            Ok(None) => Err(ResolveError::NotFound),
            Err(e) => {
                tracing::warn!(handle = %handle, error = %e, "Handle lookup failed");
                Err(ResolveError::NotFound)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::InMemoryDirectory;
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    const ADI: &str = "0x1234567890123456789012345678901234567890";
    const UMAR: &str = "0x2345678901234567890123456789012345678901";
    const OTHER: &str = "0x3456789012345678901234567890123456789012";

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    fn book() -> InMemoryDirectory {
        InMemoryDirectory::new().with("@adi", addr(ADI)).with("@umar", addr(UMAR))
    }

    /// Directory whose lookups block until the test releases a permit.
    struct GatedDirectory {
        gate: Arc<Semaphore>,
        inner: InMemoryDirectory,
    }

    #[async_trait]
    impl HandleDirectory for GatedDirectory {
        async fn resolve(&self, handle: &str) -> Result<Option<Address>, String> {
            let permit = self.gate.acquire().await.map_err(|e| e.to_string())?;
            permit.forget();
            self.inner.resolve(handle).await
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl HandleDirectory for FailingDirectory {
        async fn resolve(&self, _handle: &str) -> Result<Option<Address>, String> {
            Err("Network error: connection refused".to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_input_resets() {
        let resolver = HandleResolver::new(Arc::new(book()));
        assert!(resolver.set_input(ADI).is_none());
        assert!(resolver.set_input("   ").is_none());
        assert_eq!(resolver.result(), ResolvedAddress::default());
    }

    #[tokio::test]
    async fn test_address_resolves_immediately() {
        let resolver = HandleResolver::new(Arc::new(book()));
        assert!(resolver.set_input(OTHER).is_none());

        let result = resolver.result();
        assert_eq!(result.address, Some(addr(OTHER)));
        assert!(!result.is_handle);
        assert!(!result.is_loading);
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_invalid_input_fails_immediately() {
        let resolver = HandleResolver::new(Arc::new(book()));
        assert!(resolver.set_input("0xBAD").is_none());

        let result = resolver.result();
        assert_eq!(result.error.as_deref(), Some(INVALID_RECIPIENT));
        assert!(!result.is_loading);
        assert!(!result.is_handle);
    }

    #[tokio::test]
    async fn test_handle_lookup_found_and_missing() {
        let resolver = HandleResolver::new(Arc::new(book()));

        resolver.set_input("@adi").unwrap().await.unwrap();
        assert_eq!(resolver.result(), ResolvedAddress::resolved(addr(ADI), true));

        resolver.set_input("@nobody").unwrap().await.unwrap();
        let result = resolver.result();
        assert_eq!(result.error.as_deref(), Some(HANDLE_NOT_FOUND));
        assert!(result.is_handle);
        assert_eq!(result.address, None);
    }

    #[tokio::test]
    async fn test_directory_failure_surfaces_as_not_found() {
        let resolver = HandleResolver::new(Arc::new(FailingDirectory));
        resolver.set_input("@adi").unwrap().await.unwrap();
        assert_eq!(resolver.result().error.as_deref(), Some(HANDLE_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_loading_state_has_no_outcome() {
        let gate = Arc::new(Semaphore::new(0));
        let resolver = HandleResolver::new(Arc::new(GatedDirectory {
            gate: gate.clone(),
            inner: book(),
        }));

        // Settle on an address first so stale fields would be visible
        resolver.set_input(OTHER);
        let pending = resolver.set_input("@adi").unwrap();

        let result = resolver.result();
        assert!(result.is_loading);
        assert!(result.is_handle);
        assert_eq!(result.address, None);
        assert_eq!(result.error, None);

        gate.add_permits(1);
        pending.await.unwrap();
        assert_eq!(resolver.result().address, Some(addr(ADI)));
    }

    #[tokio::test]
    async fn test_stale_lookup_does_not_overwrite_address() {
        let gate = Arc::new(Semaphore::new(0));
        let resolver = HandleResolver::new(Arc::new(GatedDirectory {
            gate: gate.clone(),
            inner: book(),
        }));

        let slow = resolver.set_input("@adi").unwrap();
        assert!(resolver.set_input(OTHER).is_none());

        gate.add_permits(1);
        slow.await.unwrap();

        let result = resolver.result();
        assert_eq!(result.address, Some(addr(OTHER)));
        assert!(!result.is_handle);
        assert_eq!(resolver.input(), OTHER);
    }

    #[tokio::test]
    async fn test_latest_handle_wins_regardless_of_completion_order() {
        let gate = Arc::new(Semaphore::new(0));
        let resolver = HandleResolver::new(Arc::new(GatedDirectory {
            gate: gate.clone(),
            inner: book(),
        }));

        let first = resolver.set_input("@adi").unwrap();
        let second = resolver.set_input("@umar").unwrap();

        gate.add_permits(2);
        second.await.unwrap();
        first.await.unwrap();

        assert_eq!(resolver.result(), ResolvedAddress::resolved(addr(UMAR), true));
    }

    #[tokio::test]
    async fn test_same_input_is_not_refetched() {
        let resolver = HandleResolver::new(Arc::new(book()));
        resolver.set_input("@adi").unwrap().await.unwrap();
        assert!(resolver.set_input("@adi").is_none());
        assert_eq!(resolver.result().address, Some(addr(ADI)));
    }

    #[tokio::test]
    async fn test_resolve_recipient_one_shot() {
        let directory = book();
        assert_eq!(resolve_recipient(&directory, "@umar").await, Ok(addr(UMAR)));
        assert_eq!(resolve_recipient(&directory, OTHER).await, Ok(addr(OTHER)));
        assert_eq!(resolve_recipient(&directory, "@ghost").await, Err(ResolveError::NotFound));
        assert_eq!(resolve_recipient(&directory, "0xBAD").await, Err(ResolveError::Invalid));
        assert_eq!(resolve_recipient(&directory, "").await, Err(ResolveError::Empty));
        assert_eq!(resolve_recipient(&FailingDirectory, "@adi").await, Err(ResolveError::NotFound));
    }
}
