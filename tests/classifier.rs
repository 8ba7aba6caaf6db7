//! Validates border marker detection along tile edges

use image::{Rgba, RgbaImage};
use tilestitch::analysis::classifier::{classify_borders, is_marker_pixel};

fn plain_tile(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([200, 150, 100, 255]))
}

#[test]
fn test_clean_tile_has_no_flags() {
    let tile = plain_tile(8, 8);
    let flags = classify_borders(&tile);
    assert!(!flags.left);
    assert!(!flags.right);
    assert!(!flags.top);
    assert!(!flags.bottom);
    assert!(!flags.any());
}

#[test]
fn test_full_marker_column_flags_left_edge() {
    let mut tile = plain_tile(8, 8);
    for y in 0..8 {
        tile.put_pixel(0, y, Rgba([0, 0, 0, 255]));
    }

    let flags = classify_borders(&tile);
    assert!(flags.left);
    assert!(!flags.right);
    assert!(!flags.top);
    assert!(!flags.bottom);
}

#[test]
fn test_single_marker_pixel_is_sufficient() {
    // One matching pixel anywhere along the edge, no continuity required
    let mut tile = plain_tile(8, 8);
    tile.put_pixel(3, 7, Rgba([10, 5, 0, 128]));

    let flags = classify_borders(&tile);
    assert!(flags.bottom);
    assert!(!flags.top);
    assert!(!flags.left);
    assert!(!flags.right);
}

#[test]
fn test_corner_pixel_flags_both_adjacent_edges() {
    let mut tile = plain_tile(8, 8);
    tile.put_pixel(7, 0, Rgba([0, 0, 0, 255]));

    let flags = classify_borders(&tile);
    assert!(flags.top);
    assert!(flags.right);
    assert!(!flags.left);
    assert!(!flags.bottom);
}

#[test]
fn test_transparent_black_is_not_a_marker() {
    let mut tile = plain_tile(8, 8);
    tile.put_pixel(0, 4, Rgba([0, 0, 0, 0]));

    assert!(!classify_borders(&tile).any());
}

#[test]
fn test_marker_threshold_is_exclusive_at_30() {
    assert!(is_marker_pixel([29, 29, 29, 255]));
    assert!(!is_marker_pixel([30, 29, 29, 255]));
    assert!(!is_marker_pixel([29, 30, 29, 255]));
    assert!(!is_marker_pixel([29, 29, 30, 255]));
    assert!(!is_marker_pixel([29, 29, 29, 0]));
}

#[test]
fn test_interior_marker_pixels_are_ignored() {
    let mut tile = plain_tile(8, 8);
    tile.put_pixel(4, 4, Rgba([0, 0, 0, 255]));

    assert!(!classify_borders(&tile).any());
}
