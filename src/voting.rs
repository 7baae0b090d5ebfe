//! Edge-pixel voting into the accumulator.
//!
//! Each edge pixel `(x, y)` votes, for every radius `r` in the accumulator's
//! range and every angle θ of the [`AngleTable`], for the center
//!
//! ```text
//! a = trunc(x - r·cos θ)
//! b = trunc(y - r·sin θ)
//! ```
//!
//! Truncation is toward zero, not rounding, so estimated centers are biased
//! toward the origin by up to one pixel. Projections outside the image are
//! dropped.

use rayon::prelude::*;

use crate::accumulator::Accumulator;
use crate::angle::AngleTable;
use crate::edge_map::EdgeMap;

/// Projects `(x, y)` back along `(cos, sin)` by `r` and truncates to a cell.
#[inline]
fn project_center(
    x: f64,
    y: f64,
    r: f64,
    (cos, sin): (f64, f64),
    width: i64,
    height: i64,
) -> Option<(usize, usize)> {
    let a = (x - r * cos) as i64;
    let b = (y - r * sin) as i64;
    if (0..width).contains(&a) && (0..height).contains(&b) {
        Some((a as usize, b as usize))
    } else {
        None
    }
}

/// Sequential voting over all edge pixels, radii and angles.
///
/// Returns the number of votes that landed inside the image.
pub fn cast_votes(edges: &EdgeMap, accumulator: &mut Accumulator, angles: &AngleTable) -> u64 {
    let (r_min, r_max) = accumulator.radius_range();
    let width = accumulator.width() as i64;
    let height = accumulator.height() as i64;
    let mut cast = 0u64;

    for (x, y) in edges.edge_points() {
        let (xf, yf) = (x as f64, y as f64);
        for r in r_min..=r_max {
            let rf = r as f64;
            for &trig in angles.trig() {
                if let Some((a, b)) = project_center(xf, yf, rf, trig, width, height) {
                    accumulator.increment(a, b, r as usize);
                    cast += 1;
                }
            }
        }
    }
    debug!("cast {} votes sequentially", cast);
    cast
}

/// Votes of all edge points at a single radius, as a row-major `width x height` plane.
fn vote_plane(points: &[(u32, u32)], r: u32, width: u32, height: u32, angles: &AngleTable) -> Vec<u32> {
    let mut plane = vec![0u32; width as usize * height as usize];
    let stride = width as usize;
    let rf = r as f64;
    for &(x, y) in points {
        let (xf, yf) = (x as f64, y as f64);
        for &trig in angles.trig() {
            if let Some((a, b)) = project_center(xf, yf, rf, trig, width as i64, height as i64) {
                let idx = b * stride + a;
                plane[idx] = plane[idx].saturating_add(1);
            }
        }
    }
    plane
}

/// Parallel voting that yields exactly the counts of [`cast_votes`].
///
/// Radii are independent slices of the parameter space, so each rayon worker
/// fills a private plane for one radius and the planes are summed into the
/// accumulator afterwards. Radii are processed in batches of the pool size to
/// bound the extra memory to one plane per thread.
pub fn cast_votes_parallel(
    edges: &EdgeMap,
    accumulator: &mut Accumulator,
    angles: &AngleTable,
) -> u64 {
    let points = edges.edge_points();
    let (r_min, r_max) = accumulator.radius_range();
    let (width, height) = (accumulator.width(), accumulator.height());
    let radii: Vec<u32> = (r_min..=r_max).collect();
    let batch = rayon::current_num_threads().max(1);
    let mut cast = 0u64;

    for chunk in radii.chunks(batch) {
        let planes: Vec<(u32, Vec<u32>)> = chunk
            .par_iter()
            .map(|&r| (r, vote_plane(&points, r, width, height, angles)))
            .collect();
        for (r, plane) in planes {
            cast += plane.iter().map(|&v| v as u64).sum::<u64>();
            accumulator.add_plane(r, &plane);
        }
    }
    debug!("cast {} votes over {} radii in parallel", cast, radii.len());
    cast
}
