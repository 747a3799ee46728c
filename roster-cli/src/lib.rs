//! Client side of the roster employee service.

pub mod client;

pub use client::{ApiClient, ClientError};
