//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT bearer token issuance, verification, and route middleware
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (integer id path, validated JSON)
//! - **[`health`]**: Liveness endpoint
//! - **[`shutdown`]**: Graceful shutdown signal handling

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod shutdown;

// Re-export auth types
pub use auth::{JwtAuth, JwtClaims, JwtConfig, TOKEN_TTL, jwt_auth_middleware};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

// Re-export server helpers
pub use health::health_router;
pub use shutdown::shutdown_signal;
