//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターの liveness プローブ用。
//! 外部依存の状態は確認せず、プロセスが応答できることだけを示す。
//!
//! ```text
//! GET /api/health
//! {"status":"healthy","version":"0.1.0"}
//! ```

use axum::Json;
use tour_of_heroes_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
