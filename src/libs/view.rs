use super::product::Product;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn products(products: &[Product]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PRICE", "IMAGE"]);
        for product in products {
            table.add_row(row![
                product.id.unwrap_or(0),
                product.name,
                r->format!("{:.2}", product.price),
                Self::image_label(product)
            ]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK"]);
        for task in tasks {
            table.add_row(row![task.id.unwrap_or(0), task.name]);
        }
        table.printstd();
    }

    fn image_label(product: &Product) -> String {
        if product.has_image() {
            format!("{} bytes", product.image.len())
        } else {
            "-".to_string()
        }
    }
}
