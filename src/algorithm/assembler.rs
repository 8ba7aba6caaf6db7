//! Deterministic tile compositing onto the output canvas

use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::io::image::blit;
use crate::spatial::grid::GridSpec;
use crate::spatial::tile::Tile;
use image::RgbaImage;

/// Composite an ordered tile sequence onto a fresh canvas
///
/// The tile at sequence position `i` lands in grid cell
/// `(i % columns, i / columns)` at the grid's effective tile offsets.
/// Each tile's full pixel data is copied without cropping; under a
/// trimmed grid the overhang past the effective cell is simply clipped
/// at the canvas edges, relying on interior marker rings matching their
/// neighbors' content at the seams. Writes fully overwrite destination
/// pixels, so the same sequence and grid always produce a byte-identical
/// canvas.
///
/// # Errors
///
/// Returns `EmptyTileSet` when no tiles are supplied and an invalid
/// parameter error when the sequence exceeds the grid capacity.
pub fn assemble(tiles: &[Tile], grid: &GridSpec) -> Result<RgbaImage> {
    if tiles.is_empty() {
        return Err(StitchError::EmptyTileSet);
    }
    if tiles.len() > grid.capacity() {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.columns, grid.rows),
            &format!("cannot place {} tiles in {} cells", tiles.len(), grid.capacity()),
        ));
    }

    let (canvas_width, canvas_height) = grid.canvas_dimensions();
    let mut canvas = RgbaImage::new(canvas_width, canvas_height);

    for (position, tile) in tiles.iter().enumerate() {
        let (offset_x, offset_y) = grid.offset(position);
        blit(&mut canvas, &tile.pixels, offset_x, offset_y);
    }

    Ok(canvas)
}
