//! Administrator credential check
//!
//! A fixed literal pair compared verbatim. This is a placeholder gate for the
//! administrative reports, not a security boundary: no hashing, no lockout
//! and no session. Real credential handling belongs to an external identity
//! service.

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminGate;

impl AdminGate {
    /// True iff both fields exactly equal the fixed pair
    pub fn login(&self, username: &str, password: &str) -> bool {
        username == ADMIN_USERNAME && password == ADMIN_PASSWORD
    }
}
