//! Catalog endpoint construction.
//!
//! [`Catalog`] knows the three hosts the plugin talks to and builds every
//! outbound URL from them: the subject search, the per-work detail record and
//! the cover image.

use super::query::SearchQuery;

/// Number of works requested per subject search.
pub const RESULT_LIMIT: usize = 20;

/// Default catalog host.
pub const DEFAULT_CATALOG_HOST: &str = "https://openlibrary.org";

/// Default cover image host.
pub const DEFAULT_COVER_HOST: &str = "https://covers.openlibrary.org";

/// Bundled cover shown when a work has no cover or its cover fails to load.
pub const DEFAULT_COVER_PATH: &str = "Img/default-image.jpg";

/// Where a card's cover comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverImage {
    /// Medium-size image on the cover host.
    Remote(String),
    /// Local default asset.
    Fallback(String),
}

impl CoverImage {
    /// The image source as it is shown on the card.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Remote(url) | Self::Fallback(url) => url,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// URL builder for the catalog, detail and cover endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    catalog_host: String,
    cover_host: String,
    default_cover: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_HOST, DEFAULT_COVER_HOST, DEFAULT_COVER_PATH)
    }
}

impl Catalog {
    /// Creates a catalog. Trailing slashes on either host are dropped.
    #[must_use]
    pub fn new(catalog_host: &str, cover_host: &str, default_cover: &str) -> Self {
        Self {
            catalog_host: catalog_host.trim_end_matches('/').to_string(),
            cover_host: cover_host.trim_end_matches('/').to_string(),
            default_cover: default_cover.to_string(),
        }
    }

    /// `GET {catalog}/subjects/{subject}.json?limit=20`
    ///
    /// ```
    /// use shelfscout::domain::{Catalog, SearchQuery};
    ///
    /// let url = Catalog::default().search_url(&SearchQuery::normalize("Science"));
    /// assert_eq!(url, "https://openlibrary.org/subjects/science.json?limit=20");
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/subjects/{}.json?limit={RESULT_LIMIT}",
            self.catalog_host,
            query.as_str()
        )
    }

    /// `GET {catalog}{work_key}.json`; work keys already start with `/works/`.
    #[must_use]
    pub fn detail_url(&self, work_key: &str) -> String {
        format!("{}{work_key}.json", self.catalog_host)
    }

    /// Cover for a work, falling back to the bundled asset when there is no id.
    #[must_use]
    pub fn cover(&self, cover_id: Option<u64>) -> CoverImage {
        cover_id.map_or_else(
            || self.fallback_cover(),
            |id| CoverImage::Remote(format!("{}/b/id/{id}-M.jpg", self.cover_host)),
        )
    }

    /// The bundled default cover.
    #[must_use]
    pub fn fallback_cover(&self) -> CoverImage {
        CoverImage::Fallback(self.default_cover.clone())
    }

    /// URL used to check that a remote cover really exists.
    ///
    /// The cover host serves a blank placeholder for unknown ids unless
    /// `default=false` is passed, in which case it answers 404.
    #[must_use]
    pub fn probe_url(cover: &CoverImage) -> Option<String> {
        match cover {
            CoverImage::Remote(url) => Some(format!("{url}?default=false")),
            CoverImage::Fallback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_uses_fixed_limit() {
        let catalog = Catalog::default();
        let query = SearchQuery::normalize("science");
        assert_eq!(
            catalog.search_url(&query),
            "https://openlibrary.org/subjects/science.json?limit=20"
        );
    }

    #[test]
    fn hosts_lose_trailing_slashes() {
        let catalog = Catalog::new("http://localhost:8080/", "http://img/", "x.jpg");
        assert_eq!(catalog.detail_url("/works/OL1W"), "http://localhost:8080/works/OL1W.json");
        assert_eq!(catalog.cover(Some(7)), CoverImage::Remote("http://img/b/id/7-M.jpg".into()));
    }

    #[test]
    fn missing_cover_id_uses_default_asset() {
        let cover = Catalog::default().cover(None);
        assert_eq!(cover, CoverImage::Fallback(DEFAULT_COVER_PATH.to_string()));
        assert!(cover.is_fallback());
        assert_eq!(Catalog::probe_url(&cover), None);
    }

    #[test]
    fn remote_cover_is_medium_size() {
        let cover = Catalog::default().cover(Some(12345));
        assert_eq!(cover.source(), "https://covers.openlibrary.org/b/id/12345-M.jpg");
        assert_eq!(
            Catalog::probe_url(&cover).as_deref(),
            Some("https://covers.openlibrary.org/b/id/12345-M.jpg?default=false")
        );
    }
}
