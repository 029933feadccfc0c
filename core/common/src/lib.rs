//! adr-generate 共通ライブラリ
//!
//! CLI から使う I/O ポートと標準アダプタ、Chat Completions プロバイダを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLM プロバイダ
pub mod llm;
