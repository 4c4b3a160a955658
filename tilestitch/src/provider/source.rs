//! Template-driven tile sources.
//!
//! Any slippy-map server addressed by a `{z}/{x}/{y}` URL template is served
//! by [`TemplateProvider`] (blocking) or [`AsyncTemplateProvider`].

use super::http::{AsyncHttpClient, HttpClient};
use super::template::UrlTemplate;
use super::types::{AsyncTileSource, ProviderError, TileSource};
use crate::coord::TileCoord;
use tracing::trace;

/// Blocking tile source that fills a URL template and GETs the result.
///
/// # Example
///
/// ```ignore
/// use tilestitch::provider::{ReqwestClient, TemplateProvider, UrlPreset};
///
/// let client = ReqwestClient::new()?;
/// let provider = TemplateProvider::new(client, UrlPreset::OpenStreetMap.template());
/// ```
pub struct TemplateProvider<C: HttpClient> {
    http_client: C,
    template: UrlTemplate,
}

impl<C: HttpClient> TemplateProvider<C> {
    pub fn new(http_client: C, template: UrlTemplate) -> Self {
        Self {
            http_client,
            template,
        }
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }
}

impl<C: HttpClient> TileSource for TemplateProvider<C> {
    fn tile_url(&self, coord: &TileCoord) -> String {
        self.template.url_for(coord)
    }

    fn fetch_tile(&self, coord: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        let url = self.tile_url(coord);
        trace!(tile = %coord, url = %url, "Fetching tile");
        self.http_client.get(&url)
    }

    fn name(&self) -> &str {
        self.template.as_str()
    }
}

/// Async tile source that fills a URL template and GETs the result.
pub struct AsyncTemplateProvider<C: AsyncHttpClient> {
    http_client: C,
    template: UrlTemplate,
}

impl<C: AsyncHttpClient> AsyncTemplateProvider<C> {
    pub fn new(http_client: C, template: UrlTemplate) -> Self {
        Self {
            http_client,
            template,
        }
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }
}

impl<C: AsyncHttpClient> AsyncTileSource for AsyncTemplateProvider<C> {
    fn tile_url(&self, coord: &TileCoord) -> String {
        self.template.url_for(coord)
    }

    async fn fetch_tile(&self, coord: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        let url = self.tile_url(coord);
        trace!(tile = %coord, url = %url, "Fetching tile");
        self.http_client.get(&url).await
    }

    fn name(&self) -> &str {
        self.template.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::http::tests::{MockAsyncHttpClient, MockHttpClient, RecordingHttpClient};
    use crate::provider::UrlPreset;

    #[test]
    fn test_fetch_uses_substituted_url() {
        let client = RecordingHttpClient::with_body(vec![7, 7]);
        let provider = TemplateProvider::new(client, UrlPreset::GsiStandard.template());

        let data = provider.fetch_tile(&TileCoord::new(10, 908, 403)).unwrap();

        assert_eq!(data, vec![7, 7]);
        assert_eq!(
            provider.http_client().requested(),
            vec!["https://cyberjapandata.gsi.go.jp/xyz/std/10/908/403.png"]
        );
    }

    #[test]
    fn test_fetch_propagates_error() {
        let client = MockHttpClient {
            response: Err(ProviderError::Status {
                status: 503,
                url: "x".to_string(),
            }),
        };
        let provider = TemplateProvider::new(client, UrlPreset::OpenStreetMap.template());

        let err = provider.fetch_tile(&TileCoord::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 503, .. }));
    }

    #[test]
    fn test_name_is_template() {
        let provider = TemplateProvider::new(
            MockHttpClient {
                response: Ok(Vec::new()),
            },
            UrlPreset::OpenStreetMap.template(),
        );
        assert_eq!(provider.name(), UrlPreset::OpenStreetMap.template_str());
    }

    #[tokio::test]
    async fn test_async_fetch() {
        let client = MockAsyncHttpClient {
            response: Ok(vec![1, 2, 3]),
        };
        let provider = AsyncTemplateProvider::new(client, UrlPreset::OpenStreetMap.template());

        let coord = TileCoord::new(2, 1, 1);
        assert_eq!(
            provider.tile_url(&coord),
            "https://tile.openstreetmap.org/2/1/1.png"
        );
        assert_eq!(provider.fetch_tile(&coord).await.unwrap(), vec![1, 2, 3]);
    }
}
