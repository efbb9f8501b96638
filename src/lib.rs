//! MyAI stack smoke checker
//!
//! Probes a locally running MyAI deployment (web application plus an
//! Ollama-compatible inference server) and reports pass/fail per check.

#![warn(missing_docs)]

/// Smoke check implementations
pub mod checks;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// Probe error types
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// Check result and suite summary types
pub mod report;
