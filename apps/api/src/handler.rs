//! # HTTP リクエストハンドラ
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、組み立て処理は usecase 層に委譲する
//!
//! ## ハンドラ一覧
//!
//! - `root`: API 情報（`GET /`）
//! - `health`: ヘルスチェック（`GET /api/health`）
//! - `fallback`: 未定義パス（404）

pub mod fallback;
pub mod health;
pub mod root;

pub use fallback::not_found;
pub use health::health_check;
pub use root::{RootState, api_info};
