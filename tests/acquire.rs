//! Validates cache-or-fetch acquisition and its failure modes

use image::{Rgba, RgbaImage};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use tilestitch::StitchError;
use tilestitch::acquire::{DiskCache, TileAcquirer, TileSource};
use tilestitch::io::error::tile_unavailable;

fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// In-memory source that counts how often each tile is fetched
struct CountingSource {
    tiles: HashMap<u32, Vec<u8>>,
    fetches: Rc<Cell<u32>>,
}

impl CountingSource {
    fn single(index: u32, bytes: Vec<u8>) -> (Self, Rc<Cell<u32>>) {
        let fetches = Rc::new(Cell::new(0));
        let source = Self {
            tiles: HashMap::from([(index, bytes)]),
            fetches: Rc::clone(&fetches),
        };
        (source, fetches)
    }
}

impl TileSource for CountingSource {
    fn fetch(&self, index: u32) -> tilestitch::Result<Vec<u8>> {
        self.fetches.set(self.fetches.get() + 1);
        self.tiles
            .get(&index)
            .cloned()
            .ok_or_else(|| tile_unavailable(index, &"no fixture for index"))
    }
}

/// Source that fails every fetch, standing in for a dead network
struct UnreachableSource;

impl TileSource for UnreachableSource {
    fn fetch(&self, index: u32) -> tilestitch::Result<Vec<u8>> {
        Err(tile_unavailable(index, &"connection refused"))
    }
}

#[test]
fn test_acquisition_is_idempotent_and_fetches_once() {
    let dir = tempfile::tempdir().unwrap();
    let image = RgbaImage::from_pixel(6, 6, Rgba([90, 60, 30, 255]));
    let (source, fetches) = CountingSource::single(1, png_bytes(&image));
    let acquirer = TileAcquirer::new(source, DiskCache::new(dir.path().to_path_buf()));

    let first = acquirer.acquire(1).unwrap();
    let second = acquirer.acquire(1).unwrap();

    assert_eq!(first.pixels.as_raw(), second.pixels.as_raw());
    assert_eq!(first.index, 1);
    assert!(first.border.is_none());

    // The second acquisition is served entirely from the cache
    assert_eq!(fetches.get(), 1);
    assert!(acquirer.cache().contains(1));
}

#[test]
fn test_preseeded_cache_short_circuits_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DiskCache::new(dir.path().to_path_buf());
    let image = RgbaImage::from_pixel(6, 6, Rgba([10, 200, 100, 255]));
    cache.store(7, &png_bytes(&image)).unwrap();

    let acquirer = TileAcquirer::new(UnreachableSource, cache);
    let tile = acquirer.acquire(7).unwrap();
    assert_eq!(tile.index, 7);
    assert_eq!(tile.dimensions(), (6, 6));
}

#[test]
fn test_fetch_failure_propagates_and_caches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let acquirer = TileAcquirer::new(UnreachableSource, DiskCache::new(dir.path().to_path_buf()));

    let result = acquirer.acquire(3);
    assert!(matches!(
        result,
        Err(StitchError::TileUnavailable { index: 3, .. })
    ));
    assert!(!acquirer.cache().contains(3));
}

#[test]
fn test_corrupt_bytes_fail_decoding() {
    let dir = tempfile::tempdir().unwrap();
    let (source, _fetches) = CountingSource::single(4, b"definitely not a png".to_vec());
    let acquirer = TileAcquirer::new(source, DiskCache::new(dir.path().to_path_buf()));

    let result = acquirer.acquire(4);
    assert!(matches!(
        result,
        Err(StitchError::TileUnavailable { index: 4, .. })
    ));
    // Bytes are cached write-through before decoding, so the corrupt
    // payload fails identically on a warm cache
    assert!(acquirer.cache().contains(4));
    let retry = acquirer.acquire(4);
    assert!(matches!(
        retry,
        Err(StitchError::TileUnavailable { index: 4, .. })
    ));
}

#[test]
fn test_cache_miss_returns_none_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DiskCache::new(dir.path().to_path_buf());
    assert!(cache.load(99).unwrap().is_none());
    assert!(!cache.contains(99));
}
