use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{User, UserId};

/// In-memory user registry shared by every actix worker through `web::Data`.
///
/// Reads (`get_all`, `get_by_id`, `len`) take the shared side of the lock and run
/// concurrently; `create`, `update` and `delete` take the exclusive side, so no
/// reader ever sees a record or the map halfway through a mutation.
pub struct UserStore {
    inner: RwLock<StoreState>,
}

struct StoreState {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store pre-populated with the three default users (ids 1, 2 and 3)
    pub fn with_seed_users() -> Self {
        let store = Self::new();
        crate::seeds::users_seed::seed_default_users(&store);
        store
    }

    // Every mutation is a single map operation after the counter bump, so a
    // poisoned lock never guards a half-written state.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates the next id and inserts the record. Never fails; callers are
    /// responsible for rejecting empty fields beforehand.
    pub fn create(&self, name: &str, email: &str) -> User {
        let mut state = self.write();

        let id = state.next_id;
        state.next_id += 1;

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };
        state.users.insert(id, user.clone());

        user
    }

    /// Snapshot of every live user, in no particular order
    pub fn get_all(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// Partial update: an empty `name` or `email` leaves that field untouched.
    /// Returns `None` without mutating anything if `id` is not live.
    pub fn update(&self, id: UserId, name: &str, email: &str) -> Option<User> {
        let mut state = self.write();
        let user = state.users.get_mut(&id)?;

        if !name.is_empty() {
            user.name = name.to_string();
        }
        if !email.is_empty() {
            user.email = email.to_string();
        }

        Some(user.clone())
    }

    pub fn delete(&self, id: UserId) -> bool {
        self.write().users.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
