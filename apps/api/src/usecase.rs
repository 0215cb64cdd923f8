//! # ユースケース層
//!
//! ハンドラから呼ばれる処理を実装する。外部協力者（実行環境名・設定値・時計）は
//! すべてトレイトオブジェクトとして外から注入し、ハンドラは薄く保つ。

pub mod info;

pub use info::InfoProvider;
