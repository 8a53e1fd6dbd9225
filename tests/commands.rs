#[cfg(test)]
mod tests {
    use inventa::commands::product::parse_price;
    use inventa::commands::{finish, parse_id, report, require_name};
    use inventa::db::db::{Db, DbOptions};
    use inventa::db::error::StoreError;
    use inventa::libs::messages::Message;
    use inventa::libs::product::Product;

    fn storage_error() -> StoreError {
        StoreError::Storage(rusqlite::Error::InvalidQuery)
    }

    #[test]
    fn test_parse_price_accepts_numbers() {
        assert_eq!(parse_price("9.99").unwrap(), 9.99);
        assert_eq!(parse_price(" 12 ").unwrap(), 12.0);
        assert_eq!(parse_price("-1.5").unwrap(), -1.5);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());

        let message = parse_price("ten").unwrap_err().to_string();
        assert!(message.contains("'ten' is not a valid price"));
    }

    #[test]
    fn test_require_name_rejects_blank_input() {
        for raw in ["", "   ", "\t\n"] {
            let message = require_name(raw).unwrap_err().to_string();
            assert!(message.contains("Name must not be empty"));
        }
    }

    #[test]
    fn test_require_name_keeps_surrounding_spaces() {
        assert_eq!(require_name("widget").unwrap(), "widget");
        assert_eq!(require_name(" widget").unwrap(), " widget");
        assert_eq!(require_name("widget  ").unwrap(), "widget  ");
    }

    #[test]
    fn test_spaced_name_targets_only_its_own_row() {
        let db = Db::open_in_memory(DbOptions::default()).unwrap();
        let products = db.products();
        products.insert(&Product::new(" widget", 1.0, vec![])).unwrap();
        products.insert(&Product::new("widget", 2.0, vec![])).unwrap();

        let key = require_name(" widget").unwrap();
        assert_eq!(products.delete(&key).unwrap(), 1);

        let remaining = products.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "widget");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);

        let message = parse_id("abc").unwrap_err().to_string();
        assert!(message.contains("'abc' is not a valid id"));
        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn test_report_treats_missing_record_as_warning() {
        let missing = Err(StoreError::NotFound {
            entity: "product",
            key: "widget".to_string(),
        });
        let result = report(missing, |count| Message::ProductDeleted("widget".to_string(), count), Message::ProductNotFound("widget".to_string()));
        assert!(result.is_ok());

        let result = report(Ok(2), |count| Message::ProductDeleted("widget".to_string(), count), Message::ProductNotFound("widget".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_report_propagates_storage_errors() {
        let result = report(Err(storage_error()), |count| Message::TaskDeleted("call".to_string(), count), Message::TaskNotFound("call".to_string()));
        assert!(result.unwrap_err().downcast_ref::<StoreError>().is_some());
    }

    #[test]
    fn test_finish_keeps_command_error_over_close_error() {
        let result = finish(Err(anyhow::anyhow!("command failed")), Err(storage_error()));
        assert_eq!(result.unwrap_err().to_string(), "command failed");
    }

    #[test]
    fn test_finish_reports_close_error_after_success() {
        let err = finish(Ok(()), Err(storage_error())).unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::Storage(_))));

        assert!(finish(Ok(()), Ok(())).is_ok());
        assert!(finish(Err(anyhow::anyhow!("command failed")), Ok(())).is_err());
    }
}
