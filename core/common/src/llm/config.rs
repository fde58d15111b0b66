//! config.json のプロバイダプロファイル部分
//!
//! プロバイダ名から ProviderType とオプション（base_url / model / api_key_env / temperature）を解決するための構造体。
//! config.json の他のキー（timezone 等）はアプリ側で読むため、ここでは無視する。

use serde::Deserialize;
use std::collections::HashMap;

/// プロファイル設定のルート
#[derive(Debug, Clone, Default)]
pub struct ProfilesConfig {
    /// 未指定時に使うプロバイダ名
    pub default_provider: Option<String>,
    /// プロバイダ名 -> プロファイル
    pub providers: HashMap<String, ProviderProfile>,
}

/// 1 プロバイダ分の設定
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    /// プロバイダ種別: openai | openrouter | openai_compat | echo
    pub type_: ProviderTypeKind,
    /// API のベース URL（省略時は各プロバイダのデフォルト）
    pub base_url: Option<String>,
    /// モデル名（省略時は各プロバイダのデフォルト）
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は各プロバイダのデフォルト）
    pub api_key_env: Option<String>,
    /// 温度（省略時は抽出用の既定値）
    pub temperature: Option<f32>,
    /// 1 リクエストのタイムアウト秒
    pub timeout_secs: Option<u64>,
}

/// JSON の "type" で使うプロバイダ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderTypeKind {
    Openai,
    OpenRouter,
    OpenaiCompat,
    Echo,
}

impl ProviderTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openai => "openai",
            Self::OpenRouter => "openrouter",
            Self::OpenaiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// serde 用の内部構造（type が予約語のため）
#[derive(Debug, Deserialize)]
struct ProfilesConfigRaw {
    #[serde(alias = "default")]
    default_provider: Option<String>,
    providers: Option<HashMap<String, ProviderProfileRaw>>,
}

#[derive(Debug, Deserialize)]
struct ProviderProfileRaw {
    #[serde(rename = "type", alias = "provider")]
    type_: ProviderTypeKindSerde,
    base_url: Option<String>,
    model: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ProviderTypeKindSerde {
    Openai,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "openai_compat")]
    OpenaiCompat,
    Echo,
}

impl From<ProviderTypeKindSerde> for ProviderTypeKind {
    fn from(s: ProviderTypeKindSerde) -> Self {
        match s {
            ProviderTypeKindSerde::Openai => ProviderTypeKind::Openai,
            ProviderTypeKindSerde::OpenRouter => ProviderTypeKind::OpenRouter,
            ProviderTypeKindSerde::OpenaiCompat => ProviderTypeKind::OpenaiCompat,
            ProviderTypeKindSerde::Echo => ProviderTypeKind::Echo,
        }
    }
}

impl ProfilesConfig {
    /// JSON 文字列からパース（ファイル読みは resolver で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: ProfilesConfigRaw = serde_json::from_str(json)?;
        let providers = raw
            .providers
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Ok(ProfilesConfig {
            default_provider: raw.default_provider,
            providers,
        })
    }
}

impl From<ProviderProfileRaw> for ProviderProfile {
    fn from(r: ProviderProfileRaw) -> Self {
        ProviderProfile {
            type_: r.type_.into(),
            base_url: r.base_url,
            model: r.model,
            api_key_env: r.api_key_env,
            temperature: r.temperature,
            timeout_secs: r.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let cfg = ProfilesConfig::parse("{}").unwrap();
        assert!(cfg.default_provider.is_none());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn test_parse_default_provider_and_providers() {
        let json = r#"
        {
            "default_provider": "router",
            "timezone": "America/Santiago",
            "providers": {
                "router": { "type": "openrouter", "model": "openai/gpt-4o-mini" },
                "main": { "type": "openai", "api_key_env": "OPENAI_KEY", "timeout_secs": 20 },
                "local": { "type": "openai_compat", "base_url": "http://localhost:11434/v1" },
                "echo": { "type": "echo" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("router"));
        assert_eq!(cfg.providers.len(), 4);

        let r = cfg.providers.get("router").unwrap();
        assert_eq!(r.type_, ProviderTypeKind::OpenRouter);
        assert_eq!(r.model.as_deref(), Some("openai/gpt-4o-mini"));

        let m = cfg.providers.get("main").unwrap();
        assert_eq!(m.type_, ProviderTypeKind::Openai);
        assert_eq!(m.api_key_env.as_deref(), Some("OPENAI_KEY"));
        assert_eq!(m.timeout_secs, Some(20));

        let l = cfg.providers.get("local").unwrap();
        assert_eq!(l.type_, ProviderTypeKind::OpenaiCompat);
        assert_eq!(l.base_url.as_deref(), Some("http://localhost:11434/v1"));

        assert_eq!(cfg.providers.get("echo").unwrap().type_, ProviderTypeKind::Echo);
    }

    #[test]
    fn test_parse_default_alias_and_temperature() {
        let json = r#"
        {
            "default": "local",
            "providers": {
                "local": { "type": "openai_compat", "model": "llama3.1", "temperature": 0.1 }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("local"));
        let p = cfg.providers.get("local").unwrap();
        assert_eq!(p.model.as_deref(), Some("llama3.1"));
        assert_eq!(p.temperature, Some(0.1));
    }

    #[test]
    fn test_parse_unknown_type_is_error() {
        let json = r#"{ "providers": { "x": { "type": "gpt" } } }"#;
        assert!(ProfilesConfig::parse(json).is_err());
    }
}
