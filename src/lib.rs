//! Mispclient - typed client for the MISP event-search REST API.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod search;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use search::SearchRequest;
pub use types::{Attribute, Event, Org, SearchResult, Tag};
