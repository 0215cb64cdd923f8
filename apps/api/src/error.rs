//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! `GET /` と `GET /api/health` は失敗しない。このエラー型が使われるのは
//! 未定義パスへのフォールバックと、将来ハンドラが内部エラーを返す場合である。
//!
//! ## エラーの変換
//!
//! ```text
//! ApiError
//!    ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 Problem Details JSON)
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tour_of_heroes_shared::ErrorResponse;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 未定義のパス（404 Not Found）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 内部サーバーエラー（500 Internal Server Error）
    ///
    /// 詳細はサーバーログにのみ出力し、クライアントには返さない。
    #[error("内部サーバーエラー")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(format!("{path} は存在しません")),
            ),
            ApiError::Internal(err) => {
                tracing::error!("内部エラー: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
