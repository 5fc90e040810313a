//! # In-Memory Handle Directory
//!
//! Fixed handle → address book, for running without a backend
//! (`CIK_DEMO_DIRECTORY=true`) and for tests. Lookups are case-insensitive,
//! matching the backend.

use std::collections::HashMap;

use alloy_primitives::{address, Address};
use async_trait::async_trait;

use crate::core::service::HandleDirectory;

/// Handles served by [`InMemoryDirectory::demo`].
pub const DEMO_HANDLES: [(&str, Address); 3] = [
    ("@adi", address!("0x1234567890123456789012345678901234567890")),
    ("@umar", address!("0x2345678901234567890123456789012345678901")),
    ("@shad", address!("0x3456789012345678901234567890123456789012")),
];

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: HashMap<String, Address>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory preloaded with [`DEMO_HANDLES`].
    pub fn demo() -> Self {
        DEMO_HANDLES
            .iter()
            .fold(Self::new(), |directory, (handle, address)| directory.with(handle, *address))
    }

    /// Register `handle` (with or without its leading `@`).
    pub fn with(mut self, handle: &str, address: Address) -> Self {
        self.insert(handle, address);
        self
    }

    pub fn insert(&mut self, handle: &str, address: Address) {
        self.entries.insert(normalize(handle), address);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(handle: &str) -> String {
    let name = handle.trim().trim_start_matches('@');
    format!("@{}", name.to_lowercase())
}

#[async_trait]
impl HandleDirectory for InMemoryDirectory {
    async fn resolve(&self, handle: &str) -> Result<Option<Address>, String> {
        Ok(self.entries.get(&normalize(handle)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let adi: Address = "0x1234567890123456789012345678901234567890".parse().unwrap();
        let directory = InMemoryDirectory::new().with("adi", adi);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("@adi").await.unwrap(), Some(adi));
        assert_eq!(directory.resolve("@ADI").await.unwrap(), Some(adi));
        assert_eq!(directory.resolve("@umar").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_demo_book() {
        let directory = InMemoryDirectory::demo();
        assert_eq!(directory.len(), 3);
        assert_eq!(
            directory.resolve("@adi").await.unwrap(),
            "0x1234567890123456789012345678901234567890".parse().ok()
        );
        assert_eq!(
            directory.resolve("@Umar").await.unwrap(),
            "0x2345678901234567890123456789012345678901".parse().ok()
        );
        assert_eq!(
            directory.resolve("@shad").await.unwrap(),
            "0x3456789012345678901234567890123456789012".parse().ok()
        );
    }
}
