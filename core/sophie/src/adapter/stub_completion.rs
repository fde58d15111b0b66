//! テスト用: 応答（または失敗）を順に返す Completion 実装

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::ExtractionUnavailable;
use crate::ports::outbound::Completion;

/// 1 回の呼び出しの記録
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
}

/// キューが空になった後の呼び出しは失敗として扱う
#[derive(Default)]
pub struct StubCompletion {
    responses: Mutex<VecDeque<Result<String, ExtractionUnavailable>>>,
    calls: Mutex<Vec<CompletionCall>>,
}

impl StubCompletion {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Result<String, ExtractionUnavailable>>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Completion for StubCompletion {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ExtractionUnavailable> {
        self.calls.lock().unwrap().push(CompletionCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            temperature,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExtractionUnavailable::new("stub: no response queued")))
    }
}
