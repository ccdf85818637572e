//! Reading and writing the order book and the order items catalog.
//!
//! Both live in their own pretty-printed JSON file. A missing file is not an
//! error: it reads as `None` so startup can fall back to sample data.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::model::{Model, OrderBook, OrderItems};
use crate::sample_data::sample_model;

const ORDERS_DESCRIPTION: &str = "orders";
const ORDER_ITEMS_DESCRIPTION: &str = "order items";

/// Where the router keeps the model between sessions.
pub trait Storage {
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the file exists but cannot be read or parsed.
    fn read_order_book(&self) -> Result<Option<OrderBook>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the order book cannot be written.
    fn save_order_book(&self, order_book: &OrderBook) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the file exists but cannot be read or parsed.
    fn read_order_items(&self) -> Result<Option<OrderItems>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the catalog cannot be written.
    fn save_order_items(&self, order_items: &OrderItems) -> Result<(), StorageError>;

    /// Saves everything in `model` that is persisted.
    ///
    /// # Errors
    ///
    /// Stops at the first save that fails.
    fn save_state(&self, model: &Model) -> Result<(), StorageError> {
        self.save_order_book(model.order_book())?;
        self.save_order_items(model.order_items())
    }
}

/// [`Storage`] backed by two JSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStorage {
    orders_path: String,
    order_items_path: String,
}

impl JsonStorage {
    /// Creates storage for the two data files. Nothing is read or written yet.
    ///
    /// # Arguments
    ///
    /// * `orders_path` - JSON file holding the order book
    /// * `order_items_path` - JSON file holding the order items catalog
    #[must_use]
    pub fn new(orders_path: impl Into<String>, order_items_path: impl Into<String>) -> Self {
        Self {
            orders_path: orders_path.into(),
            order_items_path: order_items_path.into(),
        }
    }

    #[must_use]
    pub fn orders_path(&self) -> &str {
        &self.orders_path
    }

    #[must_use]
    pub fn order_items_path(&self) -> &str {
        &self.order_items_path
    }
}

impl Storage for JsonStorage {
    fn read_order_book(&self) -> Result<Option<OrderBook>, StorageError> {
        read_json(ORDERS_DESCRIPTION, &self.orders_path)
    }

    fn save_order_book(&self, order_book: &OrderBook) -> Result<(), StorageError> {
        write_json(ORDERS_DESCRIPTION, &self.orders_path, order_book)
    }

    fn read_order_items(&self) -> Result<Option<OrderItems>, StorageError> {
        read_json(ORDER_ITEMS_DESCRIPTION, &self.order_items_path)
    }

    fn save_order_items(&self, order_items: &OrderItems) -> Result<(), StorageError> {
        write_json(ORDER_ITEMS_DESCRIPTION, &self.order_items_path, order_items)
    }
}

fn read_json<T: DeserializeOwned>(
    file_description: &str,
    path: &str,
) -> Result<Option<T>, StorageError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let reader = File::open(path)
        .map_err(|e| StorageError::io_error(file_description, path, e))?;

    serde_json::from_reader(BufReader::new(reader))
        .map(Some)
        .map_err(|e| StorageError::json_error("reading", file_description, path, e))
}

fn write_json<T: Serialize>(file_description: &str, path: &str, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io_error(file_description, path, e))?;
    }

    let file = File::create(path).map_err(|e| StorageError::io_error(file_description, path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| StorageError::json_error("writing", file_description, path, e))?;
    writer
        .flush()
        .map_err(|e| StorageError::io_error(file_description, path, e))
}

/// Builds the starting model from `storage`.
///
/// A missing file is replaced by sample data dated from `today`. A file that
/// cannot be read is logged and replaced by an empty collection.
///
/// # Arguments
///
/// * `storage` - Where the order book and the catalog are read from
/// * `today` - Date the sample delivery dates are counted from
///
/// # Returns
///
/// The model to start the session with. Loading never fails.
///
/// # Examples
///
/// ```no_run
/// use cake_collate_core::file_handling::{load_model, JsonStorage};
///
/// let storage = JsonStorage::new("data/cakecollate.json", "data/orderItems.json");
/// let model = load_model(&storage, chrono::Local::now().date_naive());
/// println!("{} orders", model.order_book().len());
/// ```
#[must_use]
pub fn load_model(storage: &impl Storage, today: NaiveDate) -> Model {
    let sample = || {
        sample_model(today).unwrap_or_else(|e| {
            warn!("Could not build sample data: {e}");
            Model::default()
        })
    };

    let order_book = match storage.read_order_book() {
        Ok(Some(order_book)) => {
            info!("Loaded {} orders", order_book.len());
            order_book
        }
        Ok(None) => {
            info!("Orders file not found. Starting with sample orders.");
            sample().order_book().clone()
        }
        Err(e) => {
            warn!("{e}. Starting with an empty order book.");
            OrderBook::default()
        }
    };

    let order_items = match storage.read_order_items() {
        Ok(Some(order_items)) => {
            info!("Loaded {} order items", order_items.len());
            order_items
        }
        Ok(None) => {
            info!("Order items file not found. Starting with sample order items.");
            sample().order_items().clone()
        }
        Err(e) => {
            warn!("{e}. Starting with an empty order items list.");
            OrderItems::default()
        }
    };

    Model::new(order_book, order_items)
}
