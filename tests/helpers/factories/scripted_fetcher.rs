use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::crawler::{FetchError, FetchOutcome, PageFetcher};
use crate::decoder::RestartToken;

/// `PageFetcher` that replays a fixed script of outcomes.
///
/// Records the token of every request it receives; clone the handle from
/// `seen_tokens` before moving the fetcher into a controller.
pub struct ScriptedFetcher {
    script: VecDeque<Result<FetchOutcome, FetchError>>,
    seen: Arc<Mutex<Vec<Option<Value>>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.script.push_back(Ok(FetchOutcome::Body(body)));
        self
    }

    pub fn with_empty(mut self) -> Self {
        self.script.push_back(Ok(FetchOutcome::Empty));
        self
    }

    pub fn with_empty_times(mut self, times: usize) -> Self {
        for _ in 0..times {
            self.script.push_back(Ok(FetchOutcome::Empty));
        }
        self
    }

    pub fn with_error(mut self, error: FetchError) -> Self {
        self.script.push_back(Err(error));
        self
    }

    /// Tokens seen so far, one entry per fetch, in request order.
    pub fn seen_tokens(&self) -> Arc<Mutex<Vec<Option<Value>>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch(&mut self, token: Option<&RestartToken>) -> Result<FetchOutcome, FetchError> {
        self.seen
            .lock()
            .unwrap()
            .push(token.map(|t| t.as_value().clone()));
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("fetch script exhausted".to_string())))
    }
}
