//! CakeCollate CLI Library
//!
//! This crate provides the terminal front end of CakeCollate. It parses the
//! command line, loads settings and data through [`cake_collate_core`], and
//! either runs one command or reads commands interactively.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`session`]: The read-execute-print loop around the core router
//! - [`display`]: Coloured feedback, the order and order item lists, help text
//!
//! # Examples
//!
//! ```bash
//! # Interactive session with the default data files
//! cakecollate
//!
//! # One command, then exit
//! cakecollate remind 3
//!
//! # Different data files
//! cakecollate -o ~/shop/orders.json -i ~/shop/items.json list
//! ```

pub mod cli_args;
pub mod display;
pub mod error;
pub mod session;
