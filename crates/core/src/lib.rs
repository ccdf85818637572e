//! CakeCollate Core Library
//!
//! This crate holds everything behind the `cakecollate` command line: the
//! validated order record, the in-memory model, the command language with its
//! parsers, and JSON storage for the orders and the order items catalog.
//!
//! # Examples
//!
//! Running commands against a model that is saved to two JSON files:
//!
//! ```no_run
//! use cake_collate_core::config::{get_config_path, load_settings};
//! use cake_collate_core::file_handling::load_model;
//! use cake_collate_core::logic::Logic;
//!
//! let settings = load_settings(&get_config_path(None))?;
//! let storage = settings.storage();
//! let today = chrono::Local::now().date_naive();
//! let mut logic = Logic::new(load_model(&storage, today), storage);
//!
//! let result = logic.execute("list")?;
//! println!("{}", result.feedback);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod index;
pub mod logic;
pub mod messages;
pub mod model;
pub mod order;
pub mod parser;
pub mod sample_data;

#[cfg(test)]
mod testing;
