//! # Tally Rewards API
//!
//! HTTP service for receipt processing and reward points lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rewards API Routes                               │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │  ├── validate (tally-core) ── reject ──► 400 invalid                   │
//! │  ├── mint UUID v4 id                                                   │
//! │  ├── store receipt verbatim                                            │
//! │  └── 200 {"id": ...}                                                   │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                             │
//! │  ├── look up id ── missing ──► 404 not found                           │
//! │  ├── score (tally-core)                                                │
//! │  └── 200 {"points": ...}                                               │
//! │                                                                         │
//! │  GET /health ──► 200 liveness                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BIND_ADDR` - listen address (default: 0.0.0.0)
//! - `HTTP_PORT` - listen port (default: 8080)
//! - `RUST_LOG` - tracing filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::ReceiptStore;
