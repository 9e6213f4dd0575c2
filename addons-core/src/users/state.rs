use std::collections::HashMap;
use std::sync::Arc;

use addons_model::{UserAccount, UserId};
use log::debug;

/// Cached user accounts plus the signed-in pointer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub by_id: HashMap<UserId, Arc<UserAccount>>,
    pub by_username: HashMap<String, Arc<UserAccount>>,
    /// Must name an entry of `by_id` whenever it is set
    pub current_user_id: Option<UserId>,
}

impl UsersState {
    /// Whether no account is cached
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_username.is_empty()
    }

    /// Number of cached accounts
    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}

/// Copy of `state` with `user` cached under both indexes.
///
/// A reload that renames the account drops the old username key. An account
/// cached under a different id that still holds `user.username` is evicted
/// from both indexes, since the username now belongs to `user`. Either way
/// the two indexes keep pointing at the same set of records.
pub fn add_user_to_state(
    state: &UsersState,
    user: &Arc<UserAccount>,
) -> UsersState {
    let mut next = state.clone();

    if let Some(displaced) = next.by_username.get(&user.username)
        && displaced.id != user.id
    {
        let displaced_id = displaced.id;
        debug!(
            "Username {} moved from user {} to {}; evicting stale record",
            user.username, displaced_id, user.id
        );
        next.by_id.remove(&displaced_id);
    }

    if let Some(previous) = next.by_id.get(&user.id)
        && previous.username != user.username
        && next
            .by_username
            .get(&previous.username)
            .is_some_and(|cached| cached.id == user.id)
    {
        let stale = previous.username.clone();
        next.by_username.remove(&stale);
    }

    next.by_id.insert(user.id, Arc::clone(user));
    next.by_username
        .insert(user.username.clone(), Arc::clone(user));
    next
}
