//! Echoプロバイダの実装
//!
//! 実際にLLM APIを呼び出さず、ユーザーメッセージをそのまま応答として返す。
//! オフラインでの動作確認やデバッグに使う（抽出結果はすべて既定値になる）。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        temperature: f32,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "query": query,
            "temperature": temperature,
        });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 通信せず、リクエストをそのまま返す
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse echo payload: {}", e)))?;
        Ok(v["query"].as_str().map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload_with_system() {
        let provider = EchoProvider::new();
        let payload = provider
            .make_request_payload("Hola", Some("Eres un extractor"), 0.2)
            .unwrap();
        assert_eq!(payload["query"], "Hola");
        assert_eq!(payload["system_instruction"], "Eres un extractor");
    }

    #[test]
    fn test_echo_provider_complete_returns_query() {
        let provider = EchoProvider::new();
        let text = provider.complete("Mensaje: hoy", Some("sys"), 0.2).unwrap();
        assert_eq!(text.as_deref(), Some("Mensaje: hoy"));
    }
}
