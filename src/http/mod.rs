//! HTTP boundary module
//!
//! Converts hyper request headers into negotiation inputs and maps results
//! onto responses. Routing and storage stay with the host server.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use headers::{accept_language_tokens, accept_tokens, representation_for_headers};
pub use response::{build_406_response, build_representation_response, build_upload_error_response};
