//! # 実行環境の参照
//!
//! API メタ情報の組み立てに必要な外部情報を読み取るためのトレイト。
//!
//! - [`EnvironmentProvider`]: 実行環境名（`Development` / `Production` など）
//! - [`ConfigurationAccessor`]: キーによる設定値の参照
//!
//! 値の読み込み元（環境変数、`.env` ファイル等）は実装側の責務であり、
//! このクレートは関知しない。どちらも読み取り専用で、複数タスクから
//! 同時に呼ばれてもよい。

use std::collections::HashMap;

/// 実行環境名を提供するトレイト
pub trait EnvironmentProvider: Send + Sync {
    /// 現在の実行環境名を返す
    fn environment_name(&self) -> &str;
}

/// 設定値を参照するトレイト
pub trait ConfigurationAccessor: Send + Sync {
    /// キーに対応する設定値を返す
    ///
    /// 未設定の場合は `None`。空文字列をどう扱うかは呼び出し側が決める。
    fn get(&self, key: &str) -> Option<String>;
}

/// 起動時に確定した環境名を返す実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEnvironment {
    name: String,
}

impl StaticEnvironment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn environment_name(&self) -> &str {
        &self.name
    }
}

/// メモリ上のマップから設定値を返す実装
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfiguration {
    values: HashMap<String, String>,
}

impl InMemoryConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定値を追加した新しいインスタンスを返す
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigurationAccessor for InMemoryConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
