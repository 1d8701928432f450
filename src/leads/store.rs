use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use super::{LeadSubmission, StoredLead};
use crate::error::LeadError;

/// Append-only lead persistence.
pub trait LeadStore: Send + Sync {
    fn save(&self, lead: LeadSubmission) -> Result<StoredLead, LeadError>;

    /// Every stored lead, newest `meta.timestamp` first.
    fn list_all(&self) -> Result<Vec<StoredLead>, LeadError>;
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    leads: Mutex<HashMap<Uuid, StoredLead>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.lock().map(|leads| leads.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LeadStore for MemoryLeadStore {
    fn save(&self, lead: LeadSubmission) -> Result<StoredLead, LeadError> {
        let stored = StoredLead {
            id: Uuid::new_v4(),
            submission: lead,
        };
        let mut leads = self
            .leads
            .lock()
            .map_err(|_| LeadError::Storage("lead store lock poisoned".to_string()))?;
        leads.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<StoredLead>, LeadError> {
        let leads = self
            .leads
            .lock()
            .map_err(|_| LeadError::Storage("lead store lock poisoned".to_string()))?;
        let mut all: Vec<StoredLead> = leads.values().cloned().collect();
        all.sort_by(|a, b| {
            b.submission
                .meta
                .timestamp
                .cmp(&a.submission.meta.timestamp)
        });
        Ok(all)
    }
}
