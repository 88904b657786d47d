//! Representation negotiation and upload validation for a static RDF
//! vocabulary server.
//!
//! Request headers resolve to a [`RepresentationTriple`] naming the stored
//! file and response headers to serve. Uploaded files are checked against the
//! format whitelists and, for Turtle, parsed before they are persisted.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod negotiation;
pub mod representation;
pub mod upload;

pub use error::{NegotiationError, RepresentationError, UploadError, ValidationError};
pub use representation::{resolve, RepresentationTriple};
pub use upload::{
    check_upload, is_valid_content_type, is_valid_extension, validate_file_content,
    validate_file_content_async, UploadedFile,
};
