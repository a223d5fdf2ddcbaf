//! Wire envelopes shared with the backend API.
//!
//! The HTTP client that fills these lives outside this crate; only the
//! shapes are pinned here so every screen decodes responses the same way.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Standard envelope for single-object responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Error payload returned on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub status: Option<u16>,
    /// Field-level validation messages, keyed by field name.
    #[serde(default)]
    pub details: HashMap<String, String>,
}

/// Envelope for paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
