//! Transport layer for the Exa SDK.

pub mod http;

pub use http::HttpTransport;
