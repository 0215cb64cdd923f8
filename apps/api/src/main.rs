//! # Tour of Heroes API サーバー
//!
//! ## 環境変数
//!
//! 一覧は [`tour_of_heroes_api::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! APP_ENVIRONMENT=Development cargo run -p tour-of-heroes-api
//!
//! # 本番環境
//! API_PORT=8080 DATABASE_PROVIDER=PostgreSQL LOG_FORMAT=json \
//!   cargo run -p tour-of-heroes-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use tokio::net::TcpListener;
use tour_of_heroes_api::{
    app_builder::build_app,
    config::{ApiConfig, ProcessEnvConfiguration},
    usecase::InfoProvider,
};
use tour_of_heroes_domain::{StaticEnvironment, SystemClock};
use tour_of_heroes_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("tour-of-heroes-api");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        environment = %config.environment,
        "Tour of Heroes API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let provider = InfoProvider::new(
        Arc::new(StaticEnvironment::new(config.environment.clone())),
        Arc::new(ProcessEnvConfiguration),
        Arc::new(SystemClock),
    );
    let app = build_app(provider);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}:{}", config.host, config.port))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Tour of Heroes API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
