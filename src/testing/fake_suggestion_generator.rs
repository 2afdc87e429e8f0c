use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{SuggestionGenerator, SuggestionRequest};

/// Generator returning a canned reply and recording requests.
#[derive(Clone)]
pub struct FakeSuggestionGenerator {
    reply: Result<String, String>,
    pub requests: Arc<Mutex<Vec<SuggestionRequest>>>,
}

impl FakeSuggestionGenerator {
    pub fn replying(raw: impl Into<String>) -> Self {
        Self { reply: Ok(raw.into()), requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn failing(details: impl Into<String>) -> Self {
        Self { reply: Err(details.into()), requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn get_requests(&self) -> Vec<SuggestionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SuggestionGenerator for FakeSuggestionGenerator {
    fn generate(&self, request: SuggestionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(raw) => Ok(raw.clone()),
            Err(details) => Err(AppError::transport("suggestion generator", details)),
        }
    }
}
