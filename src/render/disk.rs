//! Filled-disk rasterization.
//!
//! A disk of radius `r` centred on `(x, y)` covers the cells of the bounding
//! box `[x - r, y - r, x + r, y + r]` whose offset satisfies
//! `dx² + dy² <= r² + r`. The `+ r` term rounds the rim outward so small
//! radii read as circles rather than diamonds (radius 2 is a 5x5 box without
//! its corners).
//!
//! The box is clipped to the `width x height` area before iterating, so the
//! work is bounded by the area and not by the radius.

use std::ops::RangeInclusive;

/// Iterate the cells of a filled disk inside `[0, width) x [0, height)`, row
/// by row.
///
/// Radius 0 yields the centre only; negative radii yield nothing.
pub fn disk_cells(
    x: i64,
    y: i64,
    radius: i64,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (i64, i64)> {
    // r < 2^63, so r² + r fits in u128
    let limit = radius.max(0) as u128;
    let limit = limit * limit + limit;
    let columns = clip(x, radius, width);

    clip(y, radius, height).flat_map(move |cy| {
        let dy = cy.abs_diff(y) as u128;
        columns
            .clone()
            .filter(move |cx| {
                let dx = cx.abs_diff(x) as u128;
                (dx * dx).saturating_add(dy * dy) <= limit
            })
            .map(move |cx| (cx, cy))
    })
}

/// `[centre - radius, centre + radius]` intersected with `[0, extent)`.
fn clip(centre: i64, radius: i64, extent: u32) -> RangeInclusive<i64> {
    if radius < 0 || extent == 0 {
        return 1..=0;
    }
    let low = centre.saturating_sub(radius).max(0);
    let high = centre.saturating_add(radius).min(extent as i64 - 1);
    low..=high
}
