use cinebd_core::error::SourceError;
use cinebd_core::types::{
    CatalogPage, Episode, FilterGroup, FilterSelection, MediaDetail, MediaItem, VideoSource,
};

/// A scraping source the host can browse, search and stream from.
///
/// Implementations are stateless beyond fixed configuration; every call is
/// independently reentrant.
#[async_trait::async_trait]
pub trait MediaSource: Send + Sync {
    fn name(&self) -> &str;

    /// Language tag for the content this source carries.
    fn language(&self) -> &str;

    /// Facet groups accepted by `search`. Option 0 of each group is the
    /// "no filter" default.
    fn filters(&self) -> Vec<FilterGroup>;

    /// Default site listing, paginated.
    async fn popular(&self, page: u32) -> Result<CatalogPage, SourceError>;

    /// Recently-added listing, paginated.
    async fn latest(&self, page: u32) -> Result<CatalogPage, SourceError>;

    /// Free-text search, optionally narrowed to one category facet.
    async fn search(
        &self,
        page: u32,
        query: &str,
        selection: &FilterSelection,
    ) -> Result<CatalogPage, SourceError>;

    /// Full metadata for one item.
    async fn detail(&self, item: &MediaItem) -> Result<MediaDetail, SourceError>;

    /// Playable entries under an item, season-major for series.
    async fn episodes(&self, item: &MediaItem) -> Result<Vec<Episode>, SourceError>;

    /// Streams for one episode. Empty when nothing playable was found.
    async fn video_sources(&self, episode: &Episode) -> Result<Vec<VideoSource>, SourceError>;
}
