#[cfg(test)]
mod tests {
    use inventa::db::db::{Db, DbOptions};
    use inventa::libs::task::Task;

    fn open() -> Db {
        Db::open_in_memory(DbOptions::default()).unwrap()
    }

    #[test]
    fn test_task_insert_and_list() {
        let db = open();
        let tasks = db.tasks();

        assert!(tasks.get_all().unwrap().is_empty());

        let id = tasks.insert(&Task::new("Buy milk")).unwrap();
        tasks.insert(&Task::new("Call supplier")).unwrap();

        let all = tasks.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], Task { id: Some(id), name: "Buy milk".to_string() });
        assert_eq!(all[1].name, "Call supplier");
    }

    #[test]
    fn test_task_rename() {
        let db = open();
        let tasks = db.tasks();
        let id = tasks.insert(&Task::new("Original")).unwrap();

        assert_eq!(tasks.rename("Original", "Updated").unwrap(), 1);
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().name, "Updated");

        assert!(tasks.rename("Original", "Again").unwrap_err().is_not_found());
    }

    #[test]
    fn test_task_rename_by_id() {
        let db = open();
        let tasks = db.tasks();
        let first = tasks.insert(&Task::new("Same")).unwrap();
        let second = tasks.insert(&Task::new("Same")).unwrap();

        assert_eq!(tasks.rename_by_id(second, "Different").unwrap(), 1);
        assert_eq!(tasks.get_by_id(first).unwrap().unwrap().name, "Same");
        assert_eq!(tasks.get_by_id(second).unwrap().unwrap().name, "Different");
        assert!(tasks.rename_by_id(99, "Nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_task_delete() {
        let db = open();
        let tasks = db.tasks();
        tasks.insert(&Task::new("Done")).unwrap();
        tasks.insert(&Task::new("Done")).unwrap();
        let keep = tasks.insert(&Task::new("Pending")).unwrap();

        assert_eq!(tasks.delete("Done").unwrap(), 2);
        assert!(tasks.delete("Done").unwrap_err().is_not_found());

        let remaining = tasks.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(keep));

        assert_eq!(tasks.delete_by_id(keep).unwrap(), 1);
        assert!(tasks.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_tasks_and_products_are_independent() {
        let db = open();
        db.tasks().insert(&Task::new("widget")).unwrap();

        assert!(db.products().get_all().unwrap().is_empty());
        assert!(db.products().delete("widget").unwrap_err().is_not_found());
        assert_eq!(db.tasks().get_all().unwrap().len(), 1);
    }
}
