//! # API 情報ユースケース
//!
//! 実行環境名・設定値・現在時刻を読み取り、[`ApiInfo`] を組み立てる。
//!
//! 状態を持たず、複数のリクエストから同時に呼ばれてもよい。

use std::sync::Arc;

use tour_of_heroes_domain::{
    ApiInfo,
    Clock,
    ConfigurationAccessor,
    EnvironmentProvider,
    build_api_info,
};

/// API 情報の組み立て役
pub struct InfoProvider {
    environment:   Arc<dyn EnvironmentProvider>,
    configuration: Arc<dyn ConfigurationAccessor>,
    clock:         Arc<dyn Clock>,
}

impl InfoProvider {
    pub fn new(
        environment: Arc<dyn EnvironmentProvider>,
        configuration: Arc<dyn ConfigurationAccessor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            environment,
            configuration,
            clock,
        }
    }

    /// 現在の API 情報を組み立てる
    pub fn build_info(&self) -> ApiInfo {
        build_api_info(
            self.environment.environment_name(),
            |key| self.configuration.get(key),
            self.clock.now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use tour_of_heroes_domain::{
        FixedClock,
        InMemoryConfiguration,
        StaticEnvironment,
        SystemClock,
        api_info::EndpointInfo,
    };

    use super::*;

    fn provider_with(configuration: InMemoryConfiguration, clock: Arc<dyn Clock>) -> InfoProvider {
        InfoProvider::new(
            Arc::new(StaticEnvironment::new("Development")),
            Arc::new(configuration),
            clock,
        )
    }

    #[fixture]
    fn sut() -> InfoProvider {
        provider_with(
            InMemoryConfiguration::new().with("DATABASE_PROVIDER", "SqlServer"),
            Arc::new(SystemClock),
        )
    }

    #[rstest]
    fn test_名前とバージョンと稼働状態を返す(sut: InfoProvider) {
        let info = sut.build_info();

        assert_eq!(info.name, "Tour of Heroes API");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.status, "healthy");
    }

    #[rstest]
    fn test_実行環境名を返す(sut: InfoProvider) {
        assert_eq!(sut.build_info().environment, "Development");
    }

    #[rstest]
    fn test_設定されたデータベースプロバイダを返す(sut: InfoProvider) {
        assert_eq!(sut.build_info().database_provider, "SqlServer");
    }

    #[rstest]
    fn test_エンドポイント一覧を返す(sut: InfoProvider) {
        assert_eq!(sut.build_info().endpoints, EndpointInfo::default());
    }

    #[rstest]
    fn test_タイムスタンプはエポックでなく呼び出し後の時刻以下(sut: InfoProvider) {
        let info = sut.build_info();
        let after = Utc::now();

        assert_ne!(info.timestamp, DateTime::<Utc>::UNIX_EPOCH);
        assert!(info.timestamp <= after);
    }

    #[rstest]
    fn test_連続呼び出しのタイムスタンプは単調非減少(sut: InfoProvider) {
        let first = sut.build_info();
        let second = sut.build_info();

        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn test_データベースプロバイダ未設定ならsql_serverを返す() {
        let sut = provider_with(InMemoryConfiguration::new(), Arc::new(SystemClock));

        assert_eq!(sut.build_info().database_provider, "SqlServer");
    }

    #[test]
    fn test_postgre_sqlが設定されていればそれを返す() {
        let sut = provider_with(
            InMemoryConfiguration::new().with("DATABASE_PROVIDER", "PostgreSQL"),
            Arc::new(SystemClock),
        );

        assert_eq!(sut.build_info().database_provider, "PostgreSQL");
    }

    #[test]
    fn test_時計の時刻がそのままタイムスタンプになる() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let sut = provider_with(InMemoryConfiguration::new(), Arc::new(FixedClock::new(now)));

        assert_eq!(sut.build_info().timestamp, now);
    }

    #[test]
    fn test_複数スレッドから同時に呼び出せる() {
        let sut = Arc::new(provider_with(
            InMemoryConfiguration::new().with("DATABASE_PROVIDER", "PostgreSQL"),
            Arc::new(SystemClock),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sut = sut.clone();
                std::thread::spawn(move || sut.build_info())
            })
            .collect();

        for handle in handles {
            let info = handle.join().unwrap();
            assert_eq!(info.environment, "Development");
            assert_eq!(info.database_provider, "PostgreSQL");
        }
    }
}
