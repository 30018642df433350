// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cover art listing for a release, as returned by the archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverArtList {
    /// Images registered for the release.
    #[serde(default)]
    pub images: Vec<CoverArtImage>,
    /// URL of the release on MusicBrainz.
    #[serde(default)]
    pub release: Option<String>,
}

impl CoverArtList {
    /// The image chosen as the front cover, if any.
    pub fn front(&self) -> Option<&CoverArtImage> {
        self.images.iter().find(|image| image.front)
    }

    /// The image chosen as the back cover, if any.
    pub fn back(&self) -> Option<&CoverArtImage> {
        self.images.iter().find(|image| image.back)
    }
}

/// A single image entry in a cover art listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverArtImage {
    /// Numeric id of the image within the archive.
    #[serde(default)]
    pub id: Option<u64>,
    /// URL of the full-size image.
    pub image: String,
    /// Whether this image is the chosen front cover.
    #[serde(default)]
    pub front: bool,
    /// Whether this image is the chosen back cover.
    #[serde(default)]
    pub back: bool,
    /// Whether the image has passed moderation.
    #[serde(default)]
    pub approved: bool,
    /// Image types (e.g. "Front", "Booklet").
    #[serde(default)]
    pub types: Vec<String>,
    /// Free-text comment attached by the uploader.
    #[serde(default)]
    pub comment: Option<String>,
    /// Pre-scaled thumbnail URLs.
    #[serde(default)]
    pub thumbnails: CoverArtThumbnails,
}

/// Thumbnail URLs for an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CoverArtThumbnails {
    /// 250px thumbnail.
    #[serde(rename = "250", default)]
    pub small: Option<String>,
    /// 500px thumbnail.
    #[serde(rename = "500", default)]
    pub large: Option<String>,
}

/// Thumbnail size for image downloads.
///
/// The archive serves pre-scaled 250px and 500px copies; passing no
/// size downloads the largest copy present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// 250px thumbnail.
    Small,
    /// 500px thumbnail.
    Large,
}

impl CoverSize {
    /// Path token appended to download URLs (e.g. `front-250`).
    pub fn as_str(self) -> &'static str {
        match self {
            CoverSize::Small => "250",
            CoverSize::Large => "500",
        }
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one image within a release's cover art set.
///
/// The archive uses numeric ids; both integer and string forms are
/// accepted and produce identical request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverId(String);

impl CoverId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for CoverId {
    fn from(id: u64) -> Self {
        CoverId(id.to_string())
    }
}

impl From<&str> for CoverId {
    fn from(id: &str) -> Self {
        CoverId(id.to_string())
    }
}

impl From<String> for CoverId {
    fn from(id: String) -> Self {
        CoverId(id)
    }
}

impl fmt::Display for CoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
