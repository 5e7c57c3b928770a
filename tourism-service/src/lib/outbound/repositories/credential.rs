use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::errors::AuthError;
use crate::account::models::CredentialRecord;
use crate::account::models::Username;
use crate::account::ports::CredentialStore;

/// Process-local credential store keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    records: Arc<RwLock<HashMap<Username, CredentialRecord>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, record: CredentialRecord) -> Result<CredentialRecord, AuthError> {
        // Check and insert under one write guard
        let mut records = self.records.write().await;

        match records.entry(record.username.clone()) {
            Entry::Occupied(_) => Err(AuthError::UsernameAlreadyExists(
                record.username.as_str().to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find(&self, username: &Username) -> Result<Option<CredentialRecord>, AuthError> {
        Ok(self.records.read().await.get(username).cloned())
    }
}
