//! In-memory consumer directory
//!
//! Keeps consumers in registration order. Lookups are linear scans, which is
//! adequate for the population a single registry holds.

use core_kernel::Username;

use crate::consumer::{Consumer, NewConsumer};
use crate::error::ConsumerError;

/// Registration-ordered collection of consumers, keyed by username
#[derive(Debug, Clone, Default)]
pub struct ConsumerDirectory {
    consumers: Vec<Consumer>,
}

impl ConsumerDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new active consumer
    ///
    /// Usernames stay reserved after deactivation, so a name held by a
    /// deactivated consumer is still a duplicate.
    pub fn register(&mut self, request: NewConsumer) -> Result<&Consumer, ConsumerError> {
        if self.contains(request.username.as_str()) {
            return Err(ConsumerError::duplicate(&request.username));
        }
        self.consumers.push(Consumer::register(request));
        let index = self.consumers.len() - 1;
        Ok(&self.consumers[index])
    }

    /// Returns true if any consumer, active or not, holds this username
    pub fn contains(&self, username: &str) -> bool {
        self.consumers.iter().any(|c| c.username() == username)
    }

    pub fn get(&self, username: &str) -> Option<&Consumer> {
        self.consumers.iter().find(|c| c.username() == username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Consumer> {
        self.consumers.iter_mut().find(|c| c.username() == username)
    }

    /// Soft-deletes a consumer, returning the retained record
    pub fn deactivate(&mut self, username: &str) -> Result<&Consumer, ConsumerError> {
        let consumer = self
            .get_mut(username)
            .ok_or_else(|| ConsumerError::not_found(username))?;
        consumer.deactivate();
        Ok(consumer)
    }

    /// Checks credentials against active consumers only
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&Consumer, ConsumerError> {
        self.get(username)
            .filter(|c| c.is_active() && c.password_matches(password))
            .ok_or_else(|| ConsumerError::InvalidCredentials(username.to_string()))
    }

    /// All consumers in registration order, including inactive ones
    pub fn as_slice(&self) -> &[Consumer] {
        &self.consumers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Consumer> {
        self.consumers.iter()
    }

    /// Usernames of active consumers, in registration order
    pub fn active_usernames(&self) -> Vec<Username> {
        self.consumers
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.username().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}
