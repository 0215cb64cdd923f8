//! # フォールバックハンドラ
//!
//! どのルートにも一致しないリクエストを Problem Details 形式の 404 にする。

use axum::http::Uri;

use crate::error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
