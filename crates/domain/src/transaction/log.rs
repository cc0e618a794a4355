use common::TransactionId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::Transaction;

/// Append-only record of completed transactions.
///
/// Entries are stored in the order they were appended. History views read
/// them newest-first through [`TransactionLog::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction. IDs must be unique within the log.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), DomainError> {
        if self.get(transaction.id()).is_some() {
            return Err(DomainError::DuplicateTransaction(transaction.id()));
        }
        self.entries.push(transaction);
        Ok(())
    }

    /// Returns transactions newest-first.
    pub fn list(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    /// Returns transactions oldest-first.
    pub fn chronological(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// Returns a transaction by ID.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|tx| tx.id() == id)
    }

    /// Returns the most recently appended transaction.
    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
