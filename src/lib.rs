// SPDX-License-Identifier: GPL-3.0-or-later

//! Cover Art Archive client for fetching release artwork.
//!
//! This crate provides a client for the Cover Art Archive HTTP API,
//! covering the cover art listing for a release as well as downloads of
//! the front image, the back image, or a specific image by cover id.
//! A missing image (HTTP 404) is reported as `None` rather than an
//! error; every other failure surfaces as a [`CoverArtError`].

pub mod client;
pub mod error;
pub mod models;

pub use client::CoverArtClient;
pub use error::{CoverArtError, Result};
pub use models::{CoverArtImage, CoverArtList, CoverId, CoverSize};
