#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use klg::db::db::Db;
    use klg::db::items::{Items, Project, ProjectTask};
    use klg::libs::card::{CardFields, CardItem, ItemType};
    use klg::libs::config::Configuration;
    use klg::libs::lookup::{card_metadata_for, ItemLookup};
    use klg::libs::priority::PriorityResolver;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ItemsTestContext {
        _temp_dir: TempDir,
        items: Items,
    }

    impl TestContext for ItemsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("klg.db")).unwrap();
            let items = Items::with_connection(db.conn).unwrap();
            ItemsTestContext { _temp_dir: temp_dir, items }
        }
    }

    /// Counts lookups and answers with a fixed result.
    struct CountingLookup {
        calls: usize,
        fail: bool,
    }

    impl CountingLookup {
        fn new(fail: bool) -> Self {
            Self { calls: 0, fail }
        }
    }

    impl ItemLookup for CountingLookup {
        fn load(&mut self, item_type: ItemType, item_id: i64) -> Result<Option<CardItem>> {
            self.calls += 1;
            if self.fail {
                return Err(anyhow!("database is locked"));
            }
            let fields = CardFields {
                priority_level: 2,
                priority_color: None,
                planned_duration_seconds: Some(60),
            };
            Ok(Some(CardItem::new(item_type, item_id, fields)))
        }
    }

    #[test_context(ItemsTestContext)]
    #[test]
    fn test_project_card_sums_task_durations(ctx: &mut ItemsTestContext) {
        let project_id = ctx.items.insert_project(&Project::new("Website", 4)).unwrap();
        ctx.items.insert_task(&ProjectTask::new(project_id, "Design", 3600)).unwrap();
        ctx.items.insert_task(&ProjectTask::new(project_id, "Review", 1800)).unwrap();

        let item = ctx.items.load(ItemType::Project, project_id).unwrap().unwrap();
        assert_eq!(item.fields.priority_level, 4);
        assert_eq!(item.fields.planned_duration_seconds, Some(5400));

        let metadata = card_metadata_for(
            "Project",
            project_id,
            &Configuration::default(),
            &mut ctx.items,
            &PriorityResolver::new(),
        );
        let badge = metadata.priority_badge.unwrap();
        assert_eq!(badge.label, "High");
        assert_eq!(badge.color_hex.as_deref(), Some("#ff9800"));
        assert_eq!(metadata.duration_label.as_deref(), Some("1h 30min"));
    }

    #[test_context(ItemsTestContext)]
    #[test]
    fn test_task_card_uses_its_own_duration(ctx: &mut ItemsTestContext) {
        let project_id = ctx.items.insert_project(&Project::new("Website", 6)).unwrap();
        let task_id = ctx.items.insert_task(&ProjectTask::new(project_id, "Deploy", 2 * 25200)).unwrap();

        let item = ctx.items.load(ItemType::ProjectTask, task_id).unwrap().unwrap();
        assert_eq!(item.fields.priority_level, 0);

        let metadata = card_metadata_for(
            "ProjectTask",
            task_id,
            &Configuration::default(),
            &mut ctx.items,
            &PriorityResolver::new(),
        );
        assert_eq!(metadata.priority_badge, None);
        assert_eq!(metadata.duration_label.as_deref(), Some("2d"));
    }

    #[test_context(ItemsTestContext)]
    #[test]
    fn test_missing_items(ctx: &mut ItemsTestContext) {
        assert!(ctx.items.load(ItemType::Project, 99).unwrap().is_none());
        assert!(ctx.items.load(ItemType::ProjectTask, 99).unwrap().is_none());

        let metadata = card_metadata_for("Project", 99, &Configuration::default(), &mut ctx.items, &PriorityResolver::new());
        assert!(metadata.is_empty());
    }

    #[test_context(ItemsTestContext)]
    #[test]
    fn test_task_requires_existing_project(ctx: &mut ItemsTestContext) {
        let result = ctx.items.insert_task(&ProjectTask::new(42, "Orphan", 60));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("42"));
    }

    #[test_context(ItemsTestContext)]
    #[test]
    fn test_list_projects(ctx: &mut ItemsTestContext) {
        let first = ctx.items.insert_project(&Project::new("Alpha", 1)).unwrap();
        let second = ctx.items.insert_project(&Project::new("Beta", 0)).unwrap();
        ctx.items.insert_task(&ProjectTask::new(first, "One", 600)).unwrap();
        ctx.items.insert_task(&ProjectTask::new(first, "Two", 900)).unwrap();

        let projects = ctx.items.list_projects().unwrap();
        assert_eq!(projects.len(), 2);

        assert_eq!(projects[0].project.id, Some(first));
        assert_eq!(projects[0].task_count, 2);
        assert_eq!(projects[0].planned_duration, 1500);

        assert_eq!(projects[1].project.id, Some(second));
        assert_eq!(projects[1].project.name, "Beta");
        assert_eq!(projects[1].task_count, 0);
        assert_eq!(projects[1].planned_duration, 0);
    }

    #[test]
    fn test_lookup_skipped_when_nothing_to_show() {
        let mut lookup = CountingLookup::new(false);
        let resolver = PriorityResolver::new();
        let disabled = Configuration {
            show_priority: false,
            show_duration: false,
            work_hours_per_day: 7,
        };

        assert!(card_metadata_for("Project", 1, &disabled, &mut lookup, &resolver).is_empty());
        assert!(card_metadata_for("Ticket", 1, &Configuration::default(), &mut lookup, &resolver).is_empty());
        assert!(card_metadata_for("Project", 0, &Configuration::default(), &mut lookup, &resolver).is_empty());
        assert_eq!(lookup.calls, 0);

        let metadata = card_metadata_for("Project", 1, &Configuration::default(), &mut lookup, &resolver);
        assert_eq!(lookup.calls, 1);
        assert_eq!(metadata.priority_badge.unwrap().label, "Low");
        assert_eq!(metadata.duration_label.as_deref(), Some("1min"));
    }

    #[test]
    fn test_lookup_error_gives_empty_metadata() {
        let mut lookup = CountingLookup::new(true);

        let metadata = card_metadata_for("Project", 1, &Configuration::default(), &mut lookup, &PriorityResolver::new());

        assert_eq!(lookup.calls, 1);
        assert!(metadata.is_empty());
    }
}
