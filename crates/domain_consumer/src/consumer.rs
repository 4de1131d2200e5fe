//! Consumer entity and registration request
//!
//! A consumer is a utility customer identified by a unique username. The
//! record is never physically removed: deactivation flips the `active` flag
//! and keeps the contact data for history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::Username;

/// A registered utility customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    /// Login name, immutable after registration
    username: Username,
    /// Plaintext password (placeholder credential, never serialized)
    #[serde(skip_serializing, default)]
    password: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Service address
    pub address: String,
    /// Mobile phone number
    pub mobile_number: String,
    /// Email address
    pub email: String,
    /// Whether the connection is live
    active: bool,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
    /// When the consumer was soft-deleted
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl Consumer {
    /// Creates an active consumer from a registration request
    pub fn register(request: NewConsumer) -> Self {
        Self {
            username: request.username,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            mobile_number: request.mobile_number,
            email: request.email,
            active: true,
            registered_at: Utc::now(),
            deactivated_at: None,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the full name in "First Last" format
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Exact, case-sensitive password comparison
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// Marks the consumer inactive; the record itself is retained
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.deactivated_at = Some(Utc::now());
        }
    }
}

/// Request for registering a new consumer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewConsumer {
    pub username: Username,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub mobile_number: String,
    pub email: String,
}

impl NewConsumer {
    /// Creates a request with credentials only; contact data defaults to empty
    pub fn new(username: impl Into<Username>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Sets the first and last name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the service address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the mobile number
    pub fn with_mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = mobile_number.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
