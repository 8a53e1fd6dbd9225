use super::error::{check_price, expect_rows, StoreError};
use crate::libs::product::Product;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "product";

const INSERT_PRODUCT: &str = "INSERT INTO products (name, price, image) VALUES (?1, ?2, ?3)";
const SELECT_PRODUCTS: &str = "SELECT id, name, price, image FROM products";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_NAME: &str = "WHERE name = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_PRICE_BY_NAME: &str = "UPDATE products SET price = ?1 WHERE name = ?2";
const UPDATE_PRICE_BY_ID: &str = "UPDATE products SET price = ?1 WHERE id = ?2";
const UPDATE_IMAGE_BY_NAME: &str = "UPDATE products SET image = ?1 WHERE name = ?2";
const UPDATE_IMAGE_BY_ID: &str = "UPDATE products SET image = ?1 WHERE id = ?2";
const DELETE_BY_NAME: &str = "DELETE FROM products WHERE name = ?1";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?1";

/// Product operations over a borrowed store connection.
///
/// Name-keyed mutations touch every row carrying that name and return how
/// many rows changed. They fail with [`StoreError::NotFound`] when nothing
/// matched. The `*_by_id` variants target exactly one row. Prices must be
/// finite; NaN and infinities fail with [`StoreError::InvalidPrice`].
pub struct Products<'a> {
    conn: &'a Connection,
}

impl<'a> Products<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Products { conn }
    }

    /// Stores a new product and returns the id assigned to it.
    pub fn insert(&self, product: &Product) -> Result<i64, StoreError> {
        let price = check_price(product.price)?;
        self.conn.execute(INSERT_PRODUCT, params![product.name, price, product.image])?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_price(&self, name: &str, price: f64) -> Result<usize, StoreError> {
        let price = check_price(price)?;
        let changed = self.conn.execute(UPDATE_PRICE_BY_NAME, params![price, name])?;
        expect_rows(changed, ENTITY, name)
    }

    pub fn update_price_by_id(&self, id: i64, price: f64) -> Result<usize, StoreError> {
        let price = check_price(price)?;
        let changed = self.conn.execute(UPDATE_PRICE_BY_ID, params![price, id])?;
        expect_rows(changed, ENTITY, format!("#{}", id))
    }

    pub fn update_image(&self, name: &str, image: &[u8]) -> Result<usize, StoreError> {
        let changed = self.conn.execute(UPDATE_IMAGE_BY_NAME, params![image, name])?;
        expect_rows(changed, ENTITY, name)
    }

    pub fn update_image_by_id(&self, id: i64, image: &[u8]) -> Result<usize, StoreError> {
        let changed = self.conn.execute(UPDATE_IMAGE_BY_ID, params![image, id])?;
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

    /// Every product in storage order. An empty table yields an empty vec.
    pub fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_PRODUCTS, ORDER_BY_ID))?;
        let products = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let product = self
            .conn
            .query_row(&format!("{} {}", SELECT_PRODUCTS, WHERE_ID), params![id], Self::from_row)
            .optional()?;

        Ok(product)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Vec<Product>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_PRODUCTS, WHERE_NAME, ORDER_BY_ID))?;
        let products = stmt.query_map(params![name], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    // Columns are nullable, so rows written by other tools read back with defaults.
    fn from_row(row: &Row) -> rusqlite::Result<Product> {
        Ok(Product {
            id: Some(row.get(0)?),
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            price: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
            image: row.get::<_, Option<Vec<u8>>>(3)?.unwrap_or_default(),
        })
    }
}
