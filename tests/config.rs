#[cfg(test)]
mod tests {
    use inventa::db::db::{Db, DB_FILE_NAME};
    use inventa::db::migrations::{UpgradePolicy, SCHEMA_VERSION};
    use inventa::libs::config::{Config, DatabaseConfig, DB_PATH_ENV};
    use inventa::libs::data_storage::APP_NAME;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Every test here rewrites process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(DB_PATH_ENV);
            ConfigTestContext {
                temp_dir,
                _guard: guard,
            }
        }

        fn teardown(self) {
            std::env::remove_var(DB_PATH_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.database.file_name, DB_FILE_NAME);
        assert_eq!(config.database.upgrade_policy, UpgradePolicy::DropAndRecreate);
        assert_eq!(config.database.options().version, SCHEMA_VERSION);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            database: DatabaseConfig {
                file_name: "shop.db".to_string(),
                upgrade_policy: UpgradePolicy::Refuse,
            },
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let config: Config = serde_json::from_str(r#"{"database": {"file_name": "other.db"}}"#).unwrap();
        assert_eq!(config.database.file_name, "other.db");
        assert_eq!(config.database.upgrade_policy, UpgradePolicy::DropAndRecreate);

        let empty: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Config::default());

        let refuse: DatabaseConfig = serde_json::from_str(r#"{"file_name": "a.db", "upgrade_policy": "refuse"}"#).unwrap();
        assert_eq!(refuse.upgrade_policy, UpgradePolicy::Refuse);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_in_data_directory(ctx: &mut ConfigTestContext) {
        let path = DatabaseConfig::default().path().unwrap();
        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.ends_with(format!("{}/{}", APP_NAME, DB_FILE_NAME)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_env_override(ctx: &mut ConfigTestContext) {
        let custom = ctx.temp_dir.path().join("elsewhere").join("custom.db");
        std::env::set_var(DB_PATH_ENV, &custom);

        assert_eq!(DatabaseConfig::default().path().unwrap(), custom);

        let db = Db::from_config(&DatabaseConfig::default()).unwrap();
        db.close().unwrap();
        assert!(custom.exists());
    }
}
