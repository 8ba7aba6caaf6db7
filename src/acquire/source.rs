//! Remote tile source abstraction and its HTTP implementation

use crate::io::error::{Result, invalid_parameter, tile_unavailable};

/// Provides raw encoded bytes for a tile index
pub trait TileSource {
    /// Fetch the encoded image bytes for the given 1-based index
    ///
    /// # Errors
    ///
    /// Returns `TileUnavailable` on any transport or status failure;
    /// there is no retry and a single failure aborts the run.
    fn fetch(&self, index: u32) -> Result<Vec<u8>>;
}

/// Fetches tiles over HTTP as `{base_url}({index}).png`
///
/// Fetches block the calling thread; non-2xx statuses are treated the
/// same as transport errors.
pub struct HttpTileSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTileSource {
    /// Create a source rooted at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| invalid_parameter("base-url", &"http client", &e))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// URL serving the tile at the given index
    pub fn tile_url(&self, index: u32) -> String {
        format!("{}({index}).png", self.base_url)
    }
}

impl TileSource for HttpTileSource {
    fn fetch(&self, index: u32) -> Result<Vec<u8>> {
        let url = self.tile_url(index);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| tile_unavailable(index, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(tile_unavailable(index, &format!("HTTP status {status}")));
        }

        let bytes = response.bytes().map_err(|e| tile_unavailable(index, &e))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_uses_parenthesized_index() {
        let source = HttpTileSource::new("https://example.test/tiles/").unwrap();
        assert_eq!(source.tile_url(17), "https://example.test/tiles/(17).png");
    }
}
