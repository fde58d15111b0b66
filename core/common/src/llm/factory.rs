//! プロバイダファクトリー
//!
//! 解決済みプロファイル（ResolvedProvider）から適切なプロバイダを作成する。

use crate::domain::ModelName;
use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::openai_compat::{OpenAiCompatProvider, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::llm::provider::LlmProvider;
use crate::llm::resolver::ResolvedProvider;
use crate::ports::outbound::EnvResolver;
use serde_json::Value;
use std::time::Duration;

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OPENROUTER_DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const LOCAL_BASE_URL: &str = "http://localhost:11434/v1";

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI 本家
    OpenAi,
    /// OpenRouter（OpenAI 互換）
    OpenRouter,
    /// 任意の Chat Completions 互換エンドポイント
    OpenAiCompat,
    /// Echo（通信しない）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "openrouter" => Some(Self::OpenRouter),
            "openai_compat" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }

    /// 既定の API キー環境変数名（openai_compat は認証なし）
    fn default_api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::OpenRouter => Some("OPENROUTER_API_KEY"),
            Self::OpenAiCompat | Self::Echo => None,
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi | Self::Echo => DEFAULT_BASE_URL,
            Self::OpenRouter => OPENROUTER_BASE_URL,
            Self::OpenAiCompat => LOCAL_BASE_URL,
        }
    }
}

/// プロバイダのenumラッパー
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        temperature: f32,
    ) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(query, system_instruction, temperature),
            Self::Echo(p) => p.make_request_payload(query, system_instruction, temperature),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// * `resolved` - プロファイル解決結果
/// * `model` - CLI 等でのモデル上書き（プロファイルより優先）
/// * `env` - API キーを読むための環境変数解決
///
/// API キーが未設定でもここでは失敗しない（最初のリクエスト時にエラーになる）。
pub fn create_provider(
    resolved: &ResolvedProvider,
    model: Option<&ModelName>,
    env: &dyn EnvResolver,
) -> Result<AnyProvider, Error> {
    let provider_type = resolved.provider_type;
    if provider_type == ProviderType::Echo {
        return Ok(AnyProvider::Echo(EchoProvider::new()));
    }

    let model = model
        .map(|m| m.to_string())
        .or_else(|| resolved.model.clone())
        .or_else(|| {
            (provider_type == ProviderType::OpenRouter).then(|| OPENROUTER_DEFAULT_MODEL.to_string())
        });
    let base_url = resolved
        .base_url
        .clone()
        .unwrap_or_else(|| provider_type.default_base_url().to_string());
    let api_key_env = resolved
        .api_key_env
        .clone()
        .or_else(|| provider_type.default_api_key_env().map(|s| s.to_string()));
    let api_key = api_key_env.as_deref().and_then(|name| env.var(name));
    let timeout = Duration::from_secs(resolved.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    let provider = OpenAiCompatProvider::new(
        resolved.profile_name.clone(),
        model,
        Some(base_url),
        api_key_env,
        api_key,
        timeout,
    )?;
    Ok(AnyProvider::OpenAiCompat(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dirs, HomeDir};
    use std::collections::HashMap;

    struct MapEnv(HashMap<String, String>);

    impl EnvResolver for MapEnv {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new("/tmp/sophie"))
        }
        fn resolve_dirs(&self) -> Result<Dirs, Error> {
            Ok(Dirs {
                config_dir: "/tmp/sophie".into(),
                data_dir: "/tmp/sophie/data".into(),
            })
        }
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    fn resolved(provider_type: ProviderType) -> ResolvedProvider {
        ResolvedProvider {
            profile_name: provider_type.as_str().to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn test_provider_type_parse() {
        assert_eq!(ProviderType::parse("OpenAI"), Some(ProviderType::OpenAi));
        assert_eq!(ProviderType::parse("gpt"), None);
        assert_eq!(ProviderType::parse("openrouter"), Some(ProviderType::OpenRouter));
        assert_eq!(ProviderType::parse("openai_compat"), Some(ProviderType::OpenAiCompat));
        assert_eq!(ProviderType::parse("ECHO"), Some(ProviderType::Echo));
        assert_eq!(ProviderType::parse("desconocido"), None);
    }

    #[test]
    fn test_create_echo_provider() {
        let env = MapEnv(HashMap::new());
        let p = create_provider(&resolved(ProviderType::Echo), None, &env).unwrap();
        assert_eq!(p.name(), "echo");
    }

    #[test]
    fn test_create_openrouter_uses_default_model_and_model_override() {
        let env = MapEnv(HashMap::from([(
            "OPENROUTER_API_KEY".to_string(),
            "sk-or".to_string(),
        )]));
        let p = create_provider(&resolved(ProviderType::OpenRouter), None, &env).unwrap();
        let payload = p.make_request_payload("q", None, 0.2).unwrap();
        assert_eq!(payload["model"], OPENROUTER_DEFAULT_MODEL);

        let m = ModelName::new("openai/gpt-4o");
        let p = create_provider(&resolved(ProviderType::OpenRouter), Some(&m), &env).unwrap();
        let payload = p.make_request_payload("q", None, 0.2).unwrap();
        assert_eq!(payload["model"], "openai/gpt-4o");
    }

    #[test]
    fn test_create_openai_without_key_fails_on_request() {
        let env = MapEnv(HashMap::new());
        let p = create_provider(&resolved(ProviderType::OpenAi), None, &env).unwrap();
        let err = p.make_http_request("{}").unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
