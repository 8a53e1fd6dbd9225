use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
        }
    }
}
