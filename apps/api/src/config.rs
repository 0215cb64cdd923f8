//! # アプリケーション設定
//!
//! [12-Factor App](https://12factor.net/ja/config) に従い、すべての設定を
//! 環境変数から読み込む。開発環境では起動時に `dotenvy` が `.env` を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8080` | ポート番号 |
//! | `APP_ENVIRONMENT` | No | `Production` | `GET /` が返す実行環境名 |
//! | `DATABASE_PROVIDER` | No | `SqlServer` | `GET /` が返すデータベースプロバイダ |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,tour_of_heroes=debug` | ログフィルタ |
//!
//! `DATABASE_PROVIDER` は起動時には読まず、[`ProcessEnvConfiguration`] 経由で
//! リクエストごとに参照する。

use std::env;

use thiserror::Error;
use tour_of_heroes_domain::ConfigurationAccessor;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "Production";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// 実行環境名（例: `Development`, `Production`）
    pub environment: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match non_empty("API_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: non_empty("APP_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }
}

/// プロセスの環境変数から設定値を参照する
///
/// 呼び出しのたびに `std::env::var` を読むため、起動後に変更された値も反映される。
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvConfiguration;

impl ConfigurationAccessor for ProcessEnvConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
