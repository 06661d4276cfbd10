//! Remote dataset fetching over HTTP.

pub mod client;

pub use client::DatasetClient;
