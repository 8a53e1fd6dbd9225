#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use inventa::db::db::{Db, DbOptions};
    use inventa::libs::export::Exporter;
    use inventa::libs::product::Product;
    use inventa::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("export.db"), DbOptions::default()).unwrap();
            ExportTestContext { temp_dir, db }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        ctx.db.products().insert(&Product::new("widget", 9.99, vec![1, 2, 3])).unwrap();
        ctx.db.products().insert(&Product::new("gadget", 2.5, vec![])).unwrap();
        ctx.db.tasks().insert(&Task::new("Restock")).unwrap();

        let output_path = ctx.temp_dir.path().join("export.json");
        let written = Exporter::new(Some(output_path.clone())).export(&ctx.db).unwrap();
        assert_eq!(written, Some(output_path.clone()));

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();

        let products = json["products"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["name"], "widget");
        assert_eq!(products[0]["price"], 9.99);
        assert_eq!(products[0]["image"], STANDARD.encode([1u8, 2, 3]));
        assert!(products[1].get("image").is_none());

        let tasks = json["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["name"], "Restock");
        assert_eq!(json["schema_version"], 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_store(ctx: &mut ExportTestContext) {
        let data = Exporter::gather(&ctx.db).unwrap();
        assert!(data.products.is_empty());
        assert!(data.tasks.is_empty());
    }
}
