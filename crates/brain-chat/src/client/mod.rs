//! HTTP client for the Project Brain answer service.
//!
//! Implements the `AnswerClient` trait against `POST {base_url}/chat` and
//! exposes the service's `/health` and `/eval` endpoints.

mod api;
mod config;
mod http;

pub use config::HttpClientConfig;
pub use http::HttpAnswerClient;
