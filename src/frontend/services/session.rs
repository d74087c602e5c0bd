//! Session state shared through the component tree.

use crate::backend::storage::{KeyValueStore, LocalStorage};
use crate::frontend::services::guard;
use anyhow::{Result, bail};
use dioxus::prelude::*;

/// Validates a display name used as the session marker.
pub fn validate_username(username: &str) -> Result<&str> {
    let username = username.trim();
    if !(3..=32).contains(&username.chars().count()) {
        bail!("Name must be 3-32 characters long");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.'))
    {
        bail!("Name can only contain letters, numbers, spaces, '_', '-' and '.'");
    }
    Ok(username)
}

#[derive(Clone, Copy)]
pub struct SessionState {
    pub store: Signal<LocalStorage>,
    pub key: Signal<String>,
}

impl SessionState {
    pub fn new(store: Signal<LocalStorage>, key: Signal<String>) -> Self {
        Self { store, key }
    }

    /// Whether the stored marker denotes a signed-in user.
    ///
    /// Subscribes the calling scope to store changes.
    pub fn is_authenticated(&self) -> bool {
        guard::is_authenticated(&*self.store.read(), &self.key.read())
    }

    pub fn current_user(&self) -> Option<String> {
        KeyValueStore::get(&*self.store.read(), &self.key.read()).filter(|user| !user.is_empty())
    }

    /// Stores `username` as the session marker.
    pub async fn login(&mut self, username: &str) -> Result<()> {
        let username = validate_username(username)?;
        let pending = self.store.read().with_item(&self.key.read(), username);
        let committed = pending.commit().await?;
        self.store.write().apply(committed);
        log::info!("Signed in as {username}");
        Ok(())
    }

    /// Removes the session marker.
    pub async fn logout(&mut self) -> Result<()> {
        let pending = self.store.read().without_item(&self.key.read());
        let committed = pending.commit().await?;
        self.store.write().apply(committed);
        log::info!("Signed out");
        Ok(())
    }
}
