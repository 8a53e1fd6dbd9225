use super::error::{expect_rows, StoreError};
use crate::libs::task::Task;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "task";

const INSERT_TASK: &str = "INSERT INTO tasks (name) VALUES (?1)";
const SELECT_TASKS: &str = "SELECT id, name FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const RENAME_BY_NAME: &str = "UPDATE tasks SET name = ?1 WHERE name = ?2";
const RENAME_BY_ID: &str = "UPDATE tasks SET name = ?1 WHERE id = ?2";
const DELETE_BY_NAME: &str = "DELETE FROM tasks WHERE name = ?1";
const DELETE_BY_ID: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    pub fn insert(&self, task: &Task) -> Result<i64, StoreError> {
        self.conn.execute(INSERT_TASK, params![task.name])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Replaces the text of every task named `old_name`.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<usize, StoreError> {
        let changed = self.conn.execute(RENAME_BY_NAME, params![new_name, old_name])?;
        expect_rows(changed, ENTITY, old_name)
    }

    pub fn rename_by_id(&self, id: i64, new_name: &str) -> Result<usize, StoreError> {
        let changed = self.conn.execute(RENAME_BY_ID, params![new_name, id])?;
        expect_rows(changed, ENTITY, format!("#{}", id))
    }

    pub fn delete(&self, name: &str) -> Result<usize, StoreError> {
        let changed = self.conn.execute(DELETE_BY_NAME, params![name])?;
        expect_rows(changed, ENTITY, name)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        let changed = self.conn.execute(DELETE_BY_ID, params![id])?;
        expect_rows(changed, ENTITY, format!("#{}", id))
    }

    pub fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
        let tasks = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()?;

        Ok(task)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: Some(row.get(0)?),
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        })
    }
}
