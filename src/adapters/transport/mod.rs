//! Repository transport
//!
//! The [`Transport`] trait defines what the repository core needs from the
//! network; [`HttpTransport`] is the reqwest implementation.

pub mod http;
mod r#trait;

pub use http::HttpTransport;
pub use r#trait::{AuthMethod, RawResponse, Transport};
