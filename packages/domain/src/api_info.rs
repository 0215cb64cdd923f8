//! # API メタ情報
//!
//! ルートエンドポイント（`GET /`）が返すレスポンスの値オブジェクト。
//!
//! ## 可変フィールド
//!
//! 以下の 3 つ以外はすべてコンパイル時定数であり、どのレスポンスでも同一。
//!
//! | フィールド | 由来 |
//! |-----------|------|
//! | `environment` | 実行環境名（そのままコピー） |
//! | `timestamp` | 組み立て時点の UTC 時刻 |
//! | `databaseProvider` | 設定キー `DATABASE_PROVIDER`（未設定・空なら `SqlServer`） |
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "name": "Tour of Heroes API",
//!   "version": "1.0.0",
//!   "status": "healthy",
//!   "environment": "Development",
//!   "timestamp": "2026-10-19T09:54:00.123456Z",
//!   "databaseProvider": "SqlServer",
//!   "endpoints": {
//!     "heroes": "/api/heroes",
//!     "health": "/api/health",
//!     "swagger": "/swagger",
//!     "metrics": "/metrics"
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API 名
pub const API_NAME: &str = "Tour of Heroes API";
/// API バージョン（crate のバージョンとは独立した公開 API のバージョン）
pub const API_VERSION: &str = "1.0.0";
/// 稼働状態
pub const API_STATUS: &str = "healthy";

/// データベースプロバイダを参照する設定キー
pub const DATABASE_PROVIDER_KEY: &str = "DATABASE_PROVIDER";
/// 設定が存在しない場合のデータベースプロバイダ
pub const DEFAULT_DATABASE_PROVIDER: &str = "SqlServer";

/// 関連エンドポイントのパス
pub const HEROES_PATH: &str = "/api/heroes";
pub const HEALTH_PATH: &str = "/api/health";
pub const SWAGGER_PATH: &str = "/swagger";
pub const METRICS_PATH: &str = "/metrics";

/// 関連エンドポイントの一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub heroes:  String,
    pub health:  String,
    pub swagger: String,
    pub metrics: String,
}

impl Default for EndpointInfo {
    fn default() -> Self {
        Self {
            heroes:  HEROES_PATH.to_string(),
            health:  HEALTH_PATH.to_string(),
            swagger: SWAGGER_PATH.to_string(),
            metrics: METRICS_PATH.to_string(),
        }
    }
}

/// API メタ情報
///
/// リクエストごとに組み立てられ、シリアライズ後に破棄される。
/// JSON のフィールド名は camelCase。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub name:              String,
    pub version:           String,
    pub status:            String,
    /// 実行環境名（例: `"Development"`, `"Production"`）
    pub environment:       String,
    /// 組み立て時点の UTC 時刻（ISO-8601 でシリアライズ）
    pub timestamp:         DateTime<Utc>,
    pub database_provider: String,
    pub endpoints:         EndpointInfo,
}

/// API メタ情報を組み立てる
///
/// 失敗しない全域関数。`lookup_config` が `DATABASE_PROVIDER` に対して
/// `None` または空文字列を返した場合は [`DEFAULT_DATABASE_PROVIDER`] を使う。
///
/// 時刻は引数で受け取るため、この関数自体は時計を読まない。
///
/// ```rust
/// use chrono::Utc;
/// use tour_of_heroes_domain::api_info::build_api_info;
///
/// let info = build_api_info(
///     "Production",
///     |key| (key == "DATABASE_PROVIDER").then(|| "PostgreSQL".to_string()),
///     Utc::now(),
/// );
/// assert_eq!(info.environment, "Production");
/// assert_eq!(info.database_provider, "PostgreSQL");
/// ```
pub fn build_api_info<F>(environment_name: &str, lookup_config: F, now: DateTime<Utc>) -> ApiInfo
where
    F: Fn(&str) -> Option<String>,
{
    let database_provider = lookup_config(DATABASE_PROVIDER_KEY)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_PROVIDER.to_string());

    ApiInfo {
        name: API_NAME.to_string(),
        version: API_VERSION.to_string(),
        status: API_STATUS.to_string(),
        environment: environment_name.to_string(),
        timestamp: now,
        database_provider,
        endpoints: EndpointInfo::default(),
    }
}
