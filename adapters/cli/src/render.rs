//! Text rendering of generated tile grids.

use std::fmt::Write as _;

use clap::ValueEnum;
use roomgen_core::{Tile, TileGrid};

/// Text encodings available for the generated grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// `#` for walls and `.` for empty tiles.
    #[default]
    Ascii,
    /// Space-separated integer tile codes.
    Codes,
}

/// Renders the grid one line per row.
pub(crate) fn render(grid: &TileGrid, format: OutputFormat) -> String {
    let mut output = String::new();
    match format {
        OutputFormat::Ascii => {
            for row in grid.rows() {
                output.extend(row.iter().map(|&tile| glyph(tile)));
                output.push('\n');
            }
        }
        OutputFormat::Codes => {
            for row in grid.to_codes() {
                let line = row
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(output, "{line}");
            }
        }
    }
    output
}

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Empty => '.',
        Tile::Wall => '#',
    }
}
