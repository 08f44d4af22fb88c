//! User records and the in-memory user directory.
//!
//! The directory is the only process-wide shared state. It is an explicitly
//! owned store injected into the router at construction, guarded internally
//! by a read-write lock, replacing the hidden global map such servers often
//! grow.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An immutable user record. Identity is `user_id`; no field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds a user from decoded form fields.
    ///
    /// The field names are the signup form's wire names. Missing fields
    /// become empty strings; values are taken as-is, with no validation and
    /// no percent-decoding.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |name: &str| params.get(name).cloned().unwrap_or_default();

        Self {
            user_id: field("userId"),
            password: field("password"),
            name: field("name"),
            email: field("email"),
        }
    }

    /// Re-encodes the four fields as a form query string, in form order.
    ///
    /// Inverse of [`User::from_params`] for fields free of `&` and `=`:
    /// decoding the result yields a field-wise equal user.
    pub fn to_query_string(&self) -> String {
        format!(
            "userId={}&password={}&name={}&email={}",
            self.user_id, self.password, self.name, self.email
        )
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User[user_id={}, password={}, name={}, email={}]",
            self.user_id, self.password, self.name, self.email
        )
    }
}

/// Shared in-memory user directory, keyed by user id.
///
/// Cloning is cheap and every clone sees the same directory. Writes take
/// the write lock, lookups the read lock, so concurrent signups are safe.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Adds a user, overwriting any existing record with the same id.
    pub async fn add(&self, user: User) {
        self.users.write().await.insert(user.user_id.clone(), user);
    }

    /// Looks up a user by id.
    pub async fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Returns a snapshot of all users, in no particular order.
    pub async fn find_all(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
