/// A priced item with an optional picture.
///
/// `id` is `None` until the record has been stored; the store assigns it and
/// it never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    /// Opaque image bytes. Empty when the product has no picture.
    pub image: Vec<u8>,
}

impl Product {
    pub fn new(name: &str, price: f64, image: Vec<u8>) -> Self {
        Product {
            id: None,
            name: name.to_string(),
            price,
            image,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
