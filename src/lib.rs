//! Decoder for the binary masterlist served by ASE-style master servers, along with the glue to fetch,
//! cache and dump it.

mod common;
pub mod config;
pub mod error;
pub mod fetch;
pub mod masterlist;
pub mod output;

pub use error::Error;
pub use masterlist::{ServerRecord, find_server, parse_masterlist};
