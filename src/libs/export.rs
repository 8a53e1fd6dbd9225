//! JSON export of the whole store.
//!
//! Products and tasks are written in storage order. Image blobs are encoded
//! as standard base64 and omitted when empty.
//!
//! ## Usage
//!
//! ```rust
//! use inventa::db::db::{Db, DbOptions};
//! use inventa::libs::export::Exporter;
//! use inventa::libs::product::Product;
//!
//! let db = Db::open_in_memory(DbOptions::default())?;
//! db.products().insert(&Product::new("widget", 4.5, vec![1, 2, 3]))?;
//!
//! let data = Exporter::gather(&db)?;
//! assert_eq!(data.products[0].image.as_deref(), Some("AQID"));
//!
//! let path = std::env::temp_dir().join("inventa-export.json");
//! Exporter::new(Some(path.clone())).export(&db)?;
//! # std::fs::remove_file(path)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::product::Product;
use super::task::Task;
use crate::db::db::Db;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ExportProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Product> for ExportProduct {
    fn from(product: &Product) -> Self {
        ExportProduct {
            id: product.id.unwrap_or(0),
            name: product.name.clone(),
            price: product.price,
            image: product.has_image().then(|| STANDARD.encode(&product.image)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportData {
    pub schema_version: u32,
    pub products: Vec<ExportProduct>,
    pub tasks: Vec<Task>,
}

pub struct Exporter {
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// `output_path` of `None` writes to stdout.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn gather(db: &Db) -> Result<ExportData> {
        let products = db.products().get_all()?;

        Ok(ExportData {
            schema_version: db.schema_version()?,
            products: products.iter().map(ExportProduct::from).collect(),
            tasks: db.tasks().get_all()?,
        })
    }

    /// Writes the export and returns where it went, if to a file.
    pub fn export(&self, db: &Db) -> Result<Option<PathBuf>> {
        let data = Self::gather(db)?;
        let json = serde_json::to_string_pretty(&data)?;

        match &self.output_path {
            Some(path) => {
                fs::write(path, json)?;
                Ok(Some(path.clone()))
            }
            None => {
                println!("{}", json);
                Ok(None)
            }
        }
    }
}
