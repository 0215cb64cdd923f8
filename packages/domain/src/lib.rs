//! # Tour of Heroes ドメイン層
//!
//! API メタ情報（ルートエンドポイントが返すレスポンス）のドメインモデルと、
//! それを組み立てるために参照する外部協力者の抽象を定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → domain
//! api → shared
//! ```
//!
//! ドメイン層は HTTP フレームワークにも環境変数にも依存しない。
//! 実行環境名・設定値・現在時刻はすべてトレイト経由で受け取る。
//!
//! ## モジュール構成
//!
//! - [`api_info`] - `ApiInfo` / `EndpointInfo` 値オブジェクトと組み立て関数
//! - [`clock`] - 現在時刻プロバイダ
//! - [`runtime`] - 実行環境名・設定値の参照トレイト
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use tour_of_heroes_domain::api_info::build_api_info;
//!
//! let info = build_api_info("Development", |_| None, Utc::now());
//! assert_eq!(info.database_provider, "SqlServer");
//! ```

pub mod api_info;
pub mod clock;
pub mod runtime;

pub use api_info::{ApiInfo, EndpointInfo, build_api_info};
pub use clock::{Clock, FixedClock, SystemClock};
pub use runtime::{
    ConfigurationAccessor,
    EnvironmentProvider,
    InMemoryConfiguration,
    StaticEnvironment,
};
