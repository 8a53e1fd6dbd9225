use super::{confirm, parse_id, report, require_name};
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::product::Product;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    command: ProductCommand,
}

#[derive(Debug, Subcommand)]
enum ProductCommand {
    #[command(about = "Add a product")]
    Add {
        name: String,
        price: String,
        #[arg(long, help = "Image file stored with the product")]
        image: Option<PathBuf>,
    },
    #[command(about = "Change the price of a product")]
    Price {
        target: String,
        price: String,
        #[arg(long, help = "Treat TARGET as a product id instead of a name")]
        id: bool,
    },
    #[command(about = "Replace the image of a product")]
    Image {
        target: String,
        file: PathBuf,
        #[arg(long, help = "Treat TARGET as a product id instead of a name")]
        id: bool,
    },
    #[command(about = "Delete a product")]
    Delete {
        target: String,
        #[arg(long, help = "Treat TARGET as a product id instead of a name")]
        id: bool,
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    #[command(about = "List all products")]
    List,
}

pub fn cmd(db: &Db, args: ProductArgs) -> Result<()> {
    match args.command {
        ProductCommand::Add { name, price, image } => {
            let name = require_name(&name)?;
            let price = parse_price(&price)?;
            let image = match image {
                Some(path) => read_image(&path)?,
                None => Vec::new(),
            };
            let id = db.products().insert(&Product::new(&name, price, image))?;
            msg_success!(Message::ProductCreated(name, id));
        }
        ProductCommand::Price { target, price, id } => {
            let price = parse_price(&price)?;
            let key = require_name(&target)?;
            let result = if id {
                db.products().update_price_by_id(parse_id(&key)?, price)
            } else {
                db.products().update_price(&key, price)
            };
            report(result, |count| Message::ProductPriceUpdated(key.clone(), count), Message::ProductNotFound(key.clone()))?;
        }
        ProductCommand::Image { target, file, id } => {
            let key = require_name(&target)?;
            let image = read_image(&file)?;
            let result = if id {
                db.products().update_image_by_id(parse_id(&key)?, &image)
            } else {
                db.products().update_image(&key, &image)
            };
            report(result, |count| Message::ProductImageUpdated(key.clone(), count), Message::ProductNotFound(key.clone()))?;
        }
        ProductCommand::Delete { target, id, yes } => {
            let key = require_name(&target)?;
            if !confirm(Message::ConfirmDeleteProduct(key.clone()), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            let result = if id {
                db.products().delete_by_id(parse_id(&key)?)
            } else {
                db.products().delete(&key)
            };
            report(result, |count| Message::ProductDeleted(key.clone(), count), Message::ProductNotFound(key.clone()))?;
        }
        ProductCommand::List => {}
    }

    list(db)
}

fn list(db: &Db) -> Result<()> {
    let products = db.products().get_all()?;
    if products.is_empty() {
        msg_info!(Message::ProductsEmpty);
        return Ok(());
    }
    msg_print!(Message::ProductsHeader, true);
    View::products(&products);
    Ok(())
}

/// Parses a price typed by the user. Only finite numbers are accepted.
pub fn parse_price(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => msg_bail_anyhow!(Message::InvalidPrice(raw.to_string())),
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| msg_error_anyhow!(Message::ImageReadFailed(path.display().to_string(), e.to_string())))
}
