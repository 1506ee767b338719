//! Fixed-width inventory listing.

use std::fmt::Write as _;

use crate::store::BinSnapshot;

pub const NAME_WIDTH: usize = 20;
pub const COUNT_WIDTH: usize = 3;

/// One listing line (without newline): name left-aligned, count right-aligned.
pub fn render_line(bin: &BinSnapshot) -> String {
    format!(
        "{:<name_w$}{:>count_w$}",
        bin.name,
        bin.count,
        name_w = NAME_WIDTH,
        count_w = COUNT_WIDTH
    )
}

/// Render a whole listing, one newline-terminated line per bin.
pub fn render(bins: &[BinSnapshot]) -> String {
    let mut out = String::new();
    for bin in bins {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", render_line(bin));
    }
    out
}
