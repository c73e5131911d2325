//! Scrap Market - backend for a scrap recycling marketplace
//!
//! Users submit scrap items for pickup; administrators approve or reject
//! them and sell approved items to partner companies; both sides get
//! role-scoped dashboard statistics. Login is delegated to an external
//! identity provider and tracked with seven-day sessions.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases (auth gates, workflows, dashboard)
//! - **infra**: Infrastructure concerns (database, identity provider)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserRole};
pub use errors::{AppError, AppResult};
