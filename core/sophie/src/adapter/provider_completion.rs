//! LlmProvider を Completion ポートとして使うアダプタ
//!
//! 通信・HTTP ステータス・JSON・空応答のいずれの失敗も ExtractionUnavailable にまとめる。

use common::llm::LlmProvider;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::ExtractionUnavailable;
use crate::ports::outbound::Completion;

pub struct ProviderCompletion {
    provider: Arc<dyn LlmProvider>,
    log: Arc<dyn Log>,
}

impl ProviderCompletion {
    pub fn new(provider: Arc<dyn LlmProvider>, log: Arc<dyn Log>) -> Self {
        Self { provider, log }
    }

    fn unavailable(&self, reason: String) -> ExtractionUnavailable {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Error, "completion failed")
                .layer("adapter")
                .kind("completion")
                .field("provider", self.provider.name())
                .field("reason", reason.as_str()),
        );
        ExtractionUnavailable::new(reason)
    }
}

impl Completion for ProviderCompletion {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ExtractionUnavailable> {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "completion request")
                .layer("adapter")
                .kind("completion")
                .field("provider", self.provider.name())
                .field("temperature", temperature as f64),
        );
        match self
            .provider
            .complete(user_prompt, Some(system_prompt), temperature)
        {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(self.unavailable(format!(
                "{}: response has no message content",
                self.provider.name()
            ))),
            Err(e) => Err(self.unavailable(format!("{}: {}", self.provider.name(), e))),
        }
    }
}
