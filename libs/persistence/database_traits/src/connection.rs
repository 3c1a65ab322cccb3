//! Re-exports of the axum extraction machinery used by connection handles
//! and request guards, so downstream crates don't depend on axum directly.

pub use axum_core::extract::{FromRef, FromRequestParts};
pub use http::{StatusCode, header, request::Parts};
