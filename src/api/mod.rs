//! API Module
//!
//! HTTP client for the remote catalog service.
//!
//! # Resources
//! - `GET /location-area?offset=&limit=` - Paged location area listing
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::ApiClient;
