//! # Account Registry
//!
//! Ordered list of registered users. Lookup is a linear scan for the first
//! exact credential match.

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{Order, User, UserId};
use crate::validation::validate_login;

/// Append-only user list.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    users: Vec<User>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a user, returning its handle.
    ///
    /// Duplicate logins are allowed; `find_user` returns the earliest match.
    pub fn add_user(&mut self, user: User) -> CoreResult<UserId> {
        validate_login(user.login())?;

        let id = user.id();
        debug!(user_id = %id, login = user.login(), "user registered");
        self.users.push(user);
        Ok(id)
    }

    /// First user whose login and password both match exactly.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{AccountRegistry, User};
    ///
    /// let mut accounts = AccountRegistry::new();
    /// accounts.add_user(User::new("admin", "admin")).unwrap();
    ///
    /// assert!(accounts.find_user("admin", "admin").is_some());
    /// assert!(accounts.find_user("admin", "wrong").is_none());
    /// ```
    pub fn find_user(&self, login: &str, password: &str) -> Option<&User> {
        let found = self.users.iter().find(|u| u.credentials_match(login, password));
        debug!(login, found = found.is_some(), "credential lookup");
        found
    }

    /// Like [`find_user`](Self::find_user), with a miss reported as
    /// `AuthenticationFailed`.
    pub fn authenticate(&self, login: &str, password: &str) -> CoreResult<&User> {
        self.find_user(login, password).ok_or_else(|| {
            warn!(login, "authentication failed");
            CoreError::AuthenticationFailed {
                login: login.to_string(),
            }
        })
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == *id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Appends `order` to the history of the user behind `id`.
    ///
    /// ## Errors
    /// - `UnknownUser` if no registered user has this handle; nothing changes
    pub(crate) fn record_order(&mut self, id: &UserId, order: Order) -> CoreResult<&Order> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id() == *id)
            .ok_or_else(|| CoreError::UnknownUser(id.to_string()))?;
        Ok(user.record_order(order))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
