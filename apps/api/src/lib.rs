//! # Tour of Heroes API サーバー
//!
//! API のメタ情報を返すルートエンドポイントを提供する HTTP サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/` | API 情報（名前・バージョン・実行環境・DB プロバイダ・関連エンドポイント） |
//! | GET | `/api/health` | liveness プローブ |
//!
//! 上記以外のパスは RFC 9457 Problem Details 形式の 404 を返す。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの組み立て
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//! - [`handler`] - HTTP ハンドラ
//! - [`usecase`] - API 情報の組み立て

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
