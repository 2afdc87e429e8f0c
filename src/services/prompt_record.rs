//! The last generated single-line prompt.

use crate::domain::AppError;
use crate::ports::KeyValueStore;
use crate::services::persisted;

pub const LAST_PROMPT_KEY: &str = "ai-art-prompt-last-prompt";

#[derive(Debug)]
pub struct PromptRecord<S: KeyValueStore> {
    store: S,
    last: String,
}

impl<S: KeyValueStore> PromptRecord<S> {
    pub fn load(store: S) -> Self {
        let last = persisted::load_or_default(&store, LAST_PROMPT_KEY);
        Self { store, last }
    }

    /// Last generated prompt; empty when none.
    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn record(&mut self, prompt: &str) -> Result<(), AppError> {
        self.last = prompt.to_string();
        persisted::save(&self.store, LAST_PROMPT_KEY, &self.last)
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        self.record("")
    }
}
