pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod pagination;
pub mod types;

#[cfg(test)]
mod test_util;

pub use client::{query, BlockCypher, QueryParams};
pub use config::ClientConfig;
pub use context::CallContext;
pub use error::BcyError;
