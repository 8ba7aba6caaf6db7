//! Tile acquisition via cache-or-fetch with PNG decoding

/// Resolves tiles by index through the cache and source
pub mod acquirer;
/// On-disk cache of fetched tile bytes
pub mod cache;
/// Remote tile source abstraction and its HTTP implementation
pub mod source;

pub use acquirer::TileAcquirer;
pub use cache::DiskCache;
pub use source::{HttpTileSource, TileSource};
