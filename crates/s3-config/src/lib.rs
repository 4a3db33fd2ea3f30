//! # S3 Client Configuration
//!
//! Settings holder for an S3-compatible object storage client: endpoint,
//! user agent, retry budget, transport protocol, secret storage hint and
//! I/O buffer size.
//!
//! The holder accepts any value. A client reads it through a checked,
//! immutable [`ResolvedConfig`] snapshot.
//!
//! ## Example
//!
//! ```rust
//! use s3_config::{ClientConfig, Protocol};
//!
//! fn main() -> s3_config::Result<()> {
//!     let mut config = ClientConfig::new();
//!     config
//!         .with_service_url("localhost:9000")
//!         .with_communication_protocol(Protocol::Http)
//!         .with_max_error_retry(5);
//!
//!     let resolved = config.resolve()?;
//!     assert_eq!(resolved.base_url(), "http://localhost:9000");
//!     Ok(())
//! }
//! ```

mod config;
pub mod constants;
mod error;
mod loader;
mod protocol;
mod resolved;

pub use crate::config::ClientConfig;
pub use error::{ClientError, Result};
pub use protocol::Protocol;
pub use resolved::ResolvedConfig;
