use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{ImageResult, Rgb, RgbImage};
use mazepath_core::{Grid, SearchResult, Symbol};
use std::path::Path;

pub const WALL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const PATH_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const VISITED_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const FREE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Converts a grid extent or coordinate to a pixel coordinate.
pub fn pixel_dimension(value: usize) -> ImageResult<u32> {
    u32::try_from(value).map_err(|_| {
        ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::Generic(
            format!("maze extent {} does not fit in an image", value),
        )))
    })
}

/// One pixel per cell. Walls win over path, path wins over visited.
pub fn render_image(grid: &Grid, result: &SearchResult) -> ImageResult<RgbImage> {
    let path_cells = result.path_cells();
    let mut image = RgbImage::from_pixel(
        pixel_dimension(grid.width())?,
        pixel_dimension(grid.height())?,
        FREE_COLOR,
    );

    for (cell, symbol) in grid.cells() {
        let color = if symbol == Symbol::Wall {
            WALL_COLOR
        } else if path_cells.contains(&cell) {
            PATH_COLOR
        } else if result.visited.contains(&cell) {
            VISITED_COLOR
        } else {
            continue;
        };
        image.put_pixel(pixel_dimension(cell.col)?, pixel_dimension(cell.row)?, color);
    }

    Ok(image)
}

pub fn write_image(image_path: &Path, grid: &Grid, result: &SearchResult) -> ImageResult<()> {
    render_image(grid, result)?.save(image_path)
}
