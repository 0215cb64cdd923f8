//! # ルートハンドラ
//!
//! API の名前・バージョン・実行環境・関連エンドポイントを返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /
//! ```
//!
//! リクエストのパラメータ・ヘッダー・ボディは一切参照しない。常に 200 OK。
//! レスポンス形状は [`ApiInfo`] を参照。

use std::sync::Arc;

use axum::{Json, extract::State};
use tour_of_heroes_domain::ApiInfo;

use crate::usecase::InfoProvider;

/// ルートハンドラの State
pub struct RootState {
    pub provider: InfoProvider,
}

/// API 情報エンドポイント
pub async fn api_info(State(state): State<Arc<RootState>>) -> Json<ApiInfo> {
    let info = state.provider.build_info();

    tracing::debug!(
        environment = %info.environment,
        database_provider = %info.database_provider,
        "API 情報を返却"
    );

    Json(info)
}
