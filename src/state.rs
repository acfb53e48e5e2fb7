//! UI-bound state: the `name` and `greet` fields and their backing files.
//!
//! The holder notifies an explicit subscriber list on every change; the UI
//! decides what to re-render. Lengths are derived on each call, never stored.

use std::fmt;

use crate::commands::Commands;
use crate::transport::BridgeError;
use crate::types::{FileId, StateField};

type Subscriber = Box<dyn FnMut(StateField, &str) + Send>;

/// Handle returned by [`GlobalState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// State for one UI session.
#[derive(Default)]
pub struct GlobalState {
    name: String,
    greet: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greet(&self) -> &str {
        &self.greet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of `name` in UTF-16 code units, as the UI measures text.
    pub fn nlen(&self) -> usize {
        self.name.encode_utf16().count()
    }

    /// Length of `greet` in UTF-16 code units.
    pub fn glen(&self) -> usize {
        self.greet.encode_utf16().count()
    }

    pub fn set_greet(&mut self, value: impl Into<String>) {
        self.set_field(StateField::Greet, value.into());
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_field(StateField::Name, value.into());
    }

    /// Call `callback` after every field change with the field and its new
    /// value.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(StateField, &str) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Load `file` from the host into its field.
    ///
    /// The field is only touched once the read has succeeded.
    pub async fn read(&mut self, commands: &Commands, file: FileId) -> Result<(), BridgeError> {
        let content = commands.read(file).await?;
        tracing::debug!(file = %file, len = content.len(), "loaded state field");
        self.set_field(file.field(), content);
        Ok(())
    }

    /// Persist `contents` to `file`, then update its field.
    ///
    /// No optimistic update: if the host rejects the write the field keeps
    /// its previous value.
    pub async fn write(
        &mut self,
        commands: &Commands,
        file: FileId,
        contents: &str,
    ) -> Result<(), BridgeError> {
        commands.write(file, contents).await?;
        self.set_field(file.field(), contents.to_string());
        Ok(())
    }

    /// Clear both fields. Local only.
    pub fn reset(&mut self) {
        self.set_field(StateField::Name, String::new());
        self.set_field(StateField::Greet, String::new());
    }

    fn set_field(&mut self, field: StateField, value: String) {
        let slot = match field {
            StateField::Name => &mut self.name,
            StateField::Greet => &mut self.greet,
        };
        *slot = value;

        let current = match field {
            StateField::Name => self.name.as_str(),
            StateField::Greet => self.greet.as_str(),
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(field, current);
        }
    }
}

impl fmt::Debug for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalState")
            .field("name", &self.name)
            .field("greet", &self.greet)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
