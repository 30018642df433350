// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverArtError>;

#[derive(Debug, Error)]
pub enum CoverArtError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response from the Cover Art Archive: {0}")]
    InvalidResponse(String),

    #[error("No cover art at {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}
