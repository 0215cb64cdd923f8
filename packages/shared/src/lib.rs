//! # Tour of Heroes 共有ユーティリティ
//!
//! API サーバーから利用される、ドメインに依存しない共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API クレートの責務）
//! - トレーシング関連は `observability` feature でのみ有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
