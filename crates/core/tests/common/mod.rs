//! Helpers shared by the core integration tests.

use std::io;

use cake_collate_core::error::StorageError;
use cake_collate_core::file_handling::{JsonStorage, Storage};
use cake_collate_core::model::{Model, OrderBook, OrderItems};
use tempfile::TempDir;

pub const ADD_AMY: &str = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 \
o/2 x Chocolate Cake d/01/01/2100";

/// Storage whose order book can never be saved.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl FailingStorage {
    pub fn error() -> StorageError {
        StorageError::io_error(
            "orders",
            "/nowhere/orders.json",
            io::Error::new(io::ErrorKind::Other, "dummy exception"),
        )
    }
}

impl Storage for FailingStorage {
    fn read_order_book(&self) -> Result<Option<OrderBook>, StorageError> {
        Ok(None)
    }

    fn save_order_book(&self, _order_book: &OrderBook) -> Result<(), StorageError> {
        Err(Self::error())
    }

    fn read_order_items(&self) -> Result<Option<OrderItems>, StorageError> {
        Ok(None)
    }

    fn save_order_items(&self, _order_items: &OrderItems) -> Result<(), StorageError> {
        Ok(())
    }
}

pub fn json_storage(dir: &TempDir) -> JsonStorage {
    JsonStorage::new(
        dir.path().join("cakecollate.json").to_string_lossy(),
        dir.path().join("orderItems.json").to_string_lossy(),
    )
}

pub fn empty_model() -> Model {
    Model::default()
}
