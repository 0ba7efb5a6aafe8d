#[cfg(test)]
mod tests {
    use klg::db::configs::ConfigStore;
    use klg::db::db::Db;
    use klg::libs::config::{ConfigInput, Configuration};
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigStoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl ConfigStoreTestContext {
        fn store(&self) -> ConfigStore {
            ConfigStore::with_connection(Db::open(&self.db_path).unwrap().conn).unwrap()
        }
    }

    impl TestContext for ConfigStoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("klg.db");
            ConfigStoreTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn input(value: serde_json::Value) -> ConfigInput {
        value.as_object().unwrap().clone()
    }

    #[test_context(ConfigStoreTestContext)]
    #[test]
    fn test_default_row_after_first_open(ctx: &mut ConfigStoreTestContext) {
        let mut store = ctx.store();

        assert_eq!(store.row_count().unwrap(), 1);
        assert_eq!(store.get_config().unwrap(), Configuration::default());

        let record = store.load().unwrap().unwrap();
        assert_eq!(record["show_priority"], json!(1));
        assert_eq!(record["work_hours_per_day"], json!(7));
    }

    #[test_context(ConfigStoreTestContext)]
    #[test]
    fn test_save_updates_the_single_row(ctx: &mut ConfigStoreTestContext) {
        let mut store = ctx.store();
        let config = Configuration {
            show_priority: false,
            show_duration: true,
            work_hours_per_day: 8,
        };

        store.save(&config).unwrap();
        store.save(&config).unwrap();

        assert_eq!(store.row_count().unwrap(), 1);
        assert_eq!(store.get_config().unwrap(), config);

        // Survives reopening
        assert_eq!(ctx.store().get_config().unwrap(), config);
    }

    #[test_context(ConfigStoreTestContext)]
    #[test]
    fn test_save_input_normalizes_submission(ctx: &mut ConfigStoreTestContext) {
        let mut store = ctx.store();

        let saved = store.save_input(&input(json!({
            "show_priority": "1",
            "show_duration": "on",
            "work_hours_per_day": "30"
        })));

        assert!(saved);
        assert_eq!(
            store.get_config().unwrap(),
            Configuration {
                show_priority: true,
                show_duration: false,
                work_hours_per_day: 7,
            }
        );
    }

    #[test_context(ConfigStoreTestContext)]
    #[test]
    fn test_hand_edited_row_is_repaired_on_read(ctx: &mut ConfigStoreTestContext) {
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn
                .execute("UPDATE configs SET show_priority = 5, show_duration = 0, work_hours_per_day = 0", [])
                .unwrap();
        }

        let config = ctx.store().get_config().unwrap();
        assert!(config.show_priority);
        assert!(!config.show_duration);
        assert_eq!(config.work_hours_per_day, 7);
    }

    #[test_context(ConfigStoreTestContext)]
    #[test]
    fn test_uninstall_then_install(ctx: &mut ConfigStoreTestContext) {
        let mut store = ctx.store();
        store
            .save(&Configuration {
                show_priority: false,
                show_duration: false,
                work_hours_per_day: 10,
            })
            .unwrap();

        store.uninstall().unwrap();

        // The table comes back with the default row
        let mut store = ctx.store();
        assert_eq!(store.row_count().unwrap(), 1);
        let record = store.load().unwrap().unwrap();
        assert_eq!(record["work_hours_per_day"], json!(7));
        assert_eq!(store.get_config().unwrap(), Configuration::default());

        store.install().unwrap();
        store.install().unwrap();
        assert_eq!(store.row_count().unwrap(), 1);
    }
}
