// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{CoverArtError, Result};
use crate::models::{CoverArtList, CoverId, CoverSize};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const COVER_ART_ARCHIVE_BASE: &str = "http://coverartarchive.org";
const LIBRARY_IDENT: &str = concat!("caa-client/", env!("CARGO_PKG_VERSION"));

/// Cover Art Archive client.
#[derive(Debug, Clone)]
pub struct CoverArtClient {
    client: Client,
    base_url: String,
    user_agent: Option<String>,
}

/// Which image of a release a download request names.
#[derive(Debug, Clone)]
enum ImageSelector {
    Front,
    Back,
    Cover(CoverId),
}

impl ImageSelector {
    fn as_str(&self) -> &str {
        match self {
            ImageSelector::Front => "front",
            ImageSelector::Back => "back",
            ImageSelector::Cover(id) => id.as_str(),
        }
    }
}

impl CoverArtClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> CoverArtClientBuilder {
        CoverArtClientBuilder::default()
    }

    /// Fetch the cover art listing for a release.
    ///
    /// Returns `None` when no cover art is registered for the release
    /// (HTTP 404). Other failures are reported as errors, notably
    /// [`CoverArtError::ApiError`] with status 400 when the release id
    /// is not a valid MBID and [`CoverArtError::RateLimitExceeded`] for
    /// HTTP 503; the release id is passed through unvalidated.
    ///
    /// # Arguments
    /// * `release_id` - MusicBrainz release ID (MBID).
    ///
    /// # Example
    /// ```no_run
    /// # use caa_client::CoverArtClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CoverArtClient::new()?;
    /// if let Some(listing) = client
    ///     .cover_art_list("8ec178f4-a8e8-4f22-bcba-1964466ef214")
    ///     .await?
    /// {
    ///     println!("{} images", listing.images.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn cover_art_list(&self, release_id: &str) -> Result<Option<CoverArtList>> {
        let url = self.request_url(release_id, None, None)?;

        let body = match self.request(url).await {
            Ok(body) => body,
            Err(CoverArtError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let listing = serde_json::from_slice(&body).map_err(|e| {
            CoverArtError::InvalidResponse(format!("Failed to parse cover art listing: {}", e))
        })?;

        Ok(Some(listing))
    }

    /// Download the front cover of a release.
    ///
    /// With no `size` the largest copy present is downloaded. Returns
    /// `None` when the release has no cover art or no front image has
    /// been chosen; the archive reports both as the same 404.
    ///
    /// # Example
    /// ```no_run
    /// # use caa_client::{CoverArtClient, CoverSize};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CoverArtClient::new()?;
    /// let thumb = client
    ///     .download_front("8ec178f4-a8e8-4f22-bcba-1964466ef214", Some(CoverSize::Small))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_front(
        &self,
        release_id: &str,
        size: Option<CoverSize>,
    ) -> Result<Option<Vec<u8>>> {
        self.download(release_id, ImageSelector::Front, size).await
    }

    /// Download the back cover of a release.
    ///
    /// Same contract as [`CoverArtClient::download_front`].
    pub async fn download_back(
        &self,
        release_id: &str,
        size: Option<CoverSize>,
    ) -> Result<Option<Vec<u8>>> {
        self.download(release_id, ImageSelector::Back, size).await
    }

    /// Download one image of a release by its cover id.
    ///
    /// Returns `None` when the release has no cover art or no image
    /// with that id exists.
    pub async fn download_cover(
        &self,
        release_id: &str,
        cover_id: impl Into<CoverId>,
        size: Option<CoverSize>,
    ) -> Result<Option<Vec<u8>>> {
        self.download(release_id, ImageSelector::Cover(cover_id.into()), size)
            .await
    }

    async fn download(
        &self,
        release_id: &str,
        selector: ImageSelector,
        size: Option<CoverSize>,
    ) -> Result<Option<Vec<u8>>> {
        let url = self.request_url(release_id, Some(&selector), size)?;

        match self.request(url).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(CoverArtError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Compose the resource URL for a request.
    ///
    /// The path is `/release/{id}`, extended with `/{selector}-{size}`
    /// or `/{selector}` when present. Tokens are joined as given;
    /// callers supply already-safe values.
    fn request_url(
        &self,
        release_id: &str,
        selector: Option<&ImageSelector>,
        size: Option<CoverSize>,
    ) -> Result<Url> {
        let mut raw = format!("{}/release/{}", self.base_url, release_id);

        match (selector, size) {
            (Some(selector), Some(size)) => {
                raw.push('/');
                raw.push_str(selector.as_str());
                raw.push('-');
                raw.push_str(size.as_str());
            }
            (Some(selector), None) => {
                raw.push('/');
                raw.push_str(selector.as_str());
            }
            // A size alone names no resource; the listing URL stops at
            // the release id.
            (None, _) => {}
        }

        Url::parse(&raw).map_err(|e| CoverArtError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Internal method to perform GET requests and map response status.
    async fn request(&self, url: Url) -> Result<Vec<u8>> {
        trace!(target: "coverart", "GET {}", url);

        let mut request = self.client.get(url.clone());
        // The archive does not require a User-Agent; send one only if
        // the application configured it.
        if let Some(agent) = &self.user_agent {
            request = request.header("User-Agent", agent.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        debug!(target: "coverart", "response status: {}", status);

        if status == 404 {
            return Err(CoverArtError::NotFound(url.to_string()));
        }

        if status == 503 {
            return Err(CoverArtError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CoverArtError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        // Default should be infallible; if building the configured client fails,
        // fall back to a basic reqwest client while keeping sensible defaults.
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        CoverArtClient {
            client,
            base_url: COVER_ART_ARCHIVE_BASE.to_string(),
            user_agent: None,
        }
    }
}

/// Builder for configuring a Cover Art Archive client.
#[derive(Debug)]
pub struct CoverArtClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for CoverArtClientBuilder {
    fn default() -> Self {
        Self {
            base_url: COVER_ART_ARCHIVE_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl CoverArtClientBuilder {
    /// Point the client at a different archive host. The scheme stays
    /// plain `http`, as on the default host.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.base_url = format!("http://{}", hostname.into());
        self
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Identify the calling application in the `User-Agent` header,
    /// alongside this library's own identifier. Without this, requests
    /// carry no `User-Agent` at all.
    pub fn user_agent(mut self, name: &str, version: &str) -> Self {
        self.user_agent = Some(format!("{}/{} {}", name, version, LIBRARY_IDENT));
        self
    }

    /// Build the Cover Art Archive client.
    pub fn build(self) -> Result<CoverArtClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(CoverArtClient {
            client,
            base_url: self.base_url,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_MBID: &str = "8ec178f4-a8e8-4f22-bcba-1964466ef214";

    fn client() -> CoverArtClient {
        CoverArtClient::new().unwrap()
    }

    #[test]
    fn test_listing_url() {
        let url = client().request_url(RELEASE_MBID, None, None).unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://coverartarchive.org/release/{}", RELEASE_MBID)
        );
    }

    #[test]
    fn test_front_url() {
        let url = client()
            .request_url(RELEASE_MBID, Some(&ImageSelector::Front), None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://coverartarchive.org/release/{}/front", RELEASE_MBID)
        );
    }

    #[test]
    fn test_back_url_with_size() {
        let url = client()
            .request_url(
                RELEASE_MBID,
                Some(&ImageSelector::Back),
                Some(CoverSize::Large),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "http://coverartarchive.org/release/{}/back-500",
                RELEASE_MBID
            )
        );
    }

    #[test]
    fn test_cover_id_url() {
        let url = client()
            .request_url(
                RELEASE_MBID,
                Some(&ImageSelector::Cover(CoverId::from(1234u64))),
                None,
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://coverartarchive.org/release/{}/1234", RELEASE_MBID)
        );
    }

    #[test]
    fn test_cover_id_url_with_size() {
        let url = client()
            .request_url(
                RELEASE_MBID,
                Some(&ImageSelector::Cover(CoverId::from("1234"))),
                Some(CoverSize::Small),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "http://coverartarchive.org/release/{}/1234-250",
                RELEASE_MBID
            )
        );
    }

    #[test]
    fn test_size_without_selector_is_ignored() {
        let url = client()
            .request_url(RELEASE_MBID, None, Some(CoverSize::Small))
            .unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://coverartarchive.org/release/{}", RELEASE_MBID)
        );
    }

    #[test]
    fn test_hostname_override() {
        let client = CoverArtClient::builder()
            .hostname("caa.example.org")
            .build()
            .unwrap();
        let url = client.request_url(RELEASE_MBID, None, None).unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://caa.example.org/release/{}", RELEASE_MBID)
        );
    }

    #[test]
    fn test_invalid_hostname_is_reported() {
        let client = CoverArtClient::builder()
            .hostname("not a hostname")
            .build()
            .unwrap();
        let result = client.request_url(RELEASE_MBID, None, None);
        assert!(matches!(result, Err(CoverArtError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CoverArtClient::builder()
            .base_url("http://127.0.0.1:9999/")
            .build()
            .unwrap();
        let url = client.request_url(RELEASE_MBID, None, None).unwrap();
        assert_eq!(
            url.as_str(),
            format!("http://127.0.0.1:9999/release/{}", RELEASE_MBID)
        );
    }
}
