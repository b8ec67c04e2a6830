//! # Exa SDK
//!
//! Minimal async client for the Exa search API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exa_sdk::{api::SearchRequest, ExaClient, ExaResult};
//!
//! # async fn example() -> ExaResult<()> {
//! let client = ExaClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let response = client.search().search(&SearchRequest::new("rust async", 5)).await?;
//! for hit in &response.results {
//!     println!("{}", hit.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failed calls surface as [`ExaError`]. Non-success responses keep their status
//! and body in [`ExaError::Api`]; requests that never got a response are
//! [`ExaError::Http`]. Nothing is retried.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{ExaClient, ExaClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ExaError, ExaResult};
