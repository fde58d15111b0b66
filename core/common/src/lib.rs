//! Sophie 共通ライブラリ
//!
//! エラー型、Outbound ポート、標準アダプタ、LLM プロバイダを提供する。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// LLMプロバイダとプロファイル解決
pub mod llm;
