//! Thin wrapper around the Strapi REST API used as the site's CMS.
//!
//! This crate builds requests and decodes responses; it performs no I/O.
//! Hosts hand an [`ApiRequest`] to whatever HTTP client they run on and
//! feed status and body back through [`check_status`] and the `decode_*`
//! helpers.

mod client;
mod error;
mod model;
mod query;

pub use client::{
    check_status, decode_collection, decode_single, ApiRequest, Method, StrapiClient,
};
pub use error::ApiError;
pub use model::{
    Collection, Entry, FeatureAttributes, Media, MediaData, Meta, Pagination, Single,
};
pub use query::{FilterOp, Query};

/// Where a local Strapi instance listens by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
