use mazepath_core::{Grid, SearchResult};
use std::{fs, io, path::Path};

pub const PATH_MARK: char = '*';

/// The maze in its own notation with every path cell replaced by `*`.
pub fn render_overlay(grid: &Grid, result: &SearchResult) -> String {
    let path_cells = result.path_cells();
    let mut overlay = String::with_capacity(grid.height() * (grid.width() * 2 + 1));

    for (cell, symbol) in grid.cells() {
        let mark = if path_cells.contains(&cell) {
            PATH_MARK
        } else {
            symbol.as_char()
        };
        overlay.push(mark);
        overlay.push(' ');
        if cell.col + 1 == grid.width() {
            overlay.push('\n');
        }
    }

    overlay
}

pub fn write_overlay(overlay_path: &Path, grid: &Grid, result: &SearchResult) -> io::Result<()> {
    fs::write(overlay_path, render_overlay(grid, result))
}
