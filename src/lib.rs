//! Build-time helper that materializes the site's outfit feed from the
//! remote document store.

pub mod config;
pub mod feed;
pub mod model;
pub mod store;
