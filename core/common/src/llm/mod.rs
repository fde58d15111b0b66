//! LLM プロバイダの実装
//!
//! Chat Completions 互換のプロバイダ（OpenAI / OpenRouter / ローカル）と、
//! 通信しない Echo プロバイダを提供する。プロファイル設定の読み込みと解決もここで行う。

pub mod config;
pub mod echo;
pub mod factory;
pub mod openai_compat;
pub mod provider;
pub mod resolver;

pub use config::{ProfilesConfig, ProviderProfile, ProviderTypeKind};
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use provider::LlmProvider;
pub use resolver::{load_profiles_config, resolve_provider, ResolvedProvider};
