use crate::config::AppConfig;
use crate::types::Currency;

const ENV_KEYS: [&str; 5] = [
    "FINQUEST__SERVER__PORT",
    "FINQUEST__BACKEND__BASE_URL",
    "FINQUEST__DISPLAY__CURRENCY",
    "FINQUEST__DATA__BUDGETS_FILE",
    "FINQUEST__FORECAST__DAYS_IN_MONTH",
];

#[test]
fn test_defaults_without_environment() {
    temp_env::with_vars_unset(ENV_KEYS, || {
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.display.currency, Currency::Usd);
        assert_eq!(config.data.budgets_file, "data/budgets.json");
        assert_eq!(config.data.transactions_file, "data/transactions.json");
        assert_eq!(config.forecast.days_in_month, 30);
        assert!(config.recommendations.fallback.is_empty());
    });
}

#[test]
fn test_environment_overrides() {
    temp_env::with_vars(
        [
            ("FINQUEST__SERVER__PORT", Some("8181")),
            ("FINQUEST__BACKEND__BASE_URL", Some("http://finance.local:9000")),
            ("FINQUEST__DISPLAY__CURRENCY", Some("EUR")),
            ("FINQUEST__DATA__BUDGETS_FILE", Some("/tmp/budgets.json")),
            ("FINQUEST__FORECAST__DAYS_IN_MONTH", Some("31")),
        ],
        || {
            let config = AppConfig::load().unwrap();

            assert_eq!(config.server.port, 8181);
            assert_eq!(config.backend.base_url, "http://finance.local:9000");
            assert_eq!(config.display.currency, Currency::Eur);
            assert_eq!(config.data.budgets_file, "/tmp/budgets.json");
            assert_eq!(config.forecast.days_in_month, 31);
        },
    );
}

#[test]
fn test_shipped_defaults_seed_a_recommendation() {
    let config: AppConfig = config::Config::builder()
        .add_source(config::File::from_str(
            include_str!("../../../config/default.toml"),
            config::FileFormat::Toml,
        ))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(
        config.recommendations.fallback,
        ["Keep an eye on your budgets this month to maximize your savings!"]
    );
}
