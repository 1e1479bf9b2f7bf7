//! HTTP middleware module.
//!
//! - Origin allow-list enforcement
//! - CORS response headers and preflight handling
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, origin_guard, security_headers};
//!
//! let cors = Arc::new(CorsConfig::default());
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&cors)?)
//!     .layer(axum::middleware::from_fn_with_state(cors, origin_guard));
//! ```

pub mod cors;
pub mod origin;
pub mod security;

pub use cors::create_cors_layer;
pub use origin::origin_guard;
pub use security::security_headers;
