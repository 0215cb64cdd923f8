//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//! 統合テストも同じルーターを使うため、ライブラリ側に置く。

use std::sync::Arc;

use axum::{Router, routing::get};
use tour_of_heroes_domain::api_info::HEALTH_PATH;
use tour_of_heroes_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{RootState, api_info, health_check, not_found},
    usecase::InfoProvider,
};

/// ルーターを構築する
pub fn build_app(provider: InfoProvider) -> Router {
    let root_state = Arc::new(RootState { provider });

    Router::new()
        .route("/", get(api_info))
        .with_state(root_state)
        .route(HEALTH_PATH, get(health_check))
        .fallback(not_found)
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（クライアント提供値があればそれを使う）
        // 2. TraceLayer: request_id を含むリクエストスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
        // 4. CanonicalLogLineLayer: リクエスト完了サマリをスパン内で出力
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
