#![allow(dead_code)]

use hough_circle::{EdgeMap, ANGLE_SAMPLES};
use image::{GrayImage, Luma};

/// Edge map whose foreground is every pixel within half a pixel of one of the
/// given `(cx, cy, r)` circles.
pub fn ring_edges(width: u32, height: u32, circles: &[(u32, u32, u32)]) -> EdgeMap {
    EdgeMap::from_fn(width, height, |x, y| {
        circles.iter().any(|&(cx, cy, r)| {
            let d = (x as f64 - cx as f64).hypot(y as f64 - cy as f64);
            (d - r as f64).abs() < 0.5
        })
    })
}

/// Gray image with a filled bright disk on a dark background.
pub fn disk_image(width: u32, height: u32, cx: f32, cy: f32, r: f32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        Luma([if dx * dx + dy * dy <= r * r { 220 } else { 30 }])
    })
}

/// Counts the `(edge pixel, angle)` pairs whose truncated projection at radius
/// `r` lands on center `(a, b)`.
pub fn oracle_votes(edges: &EdgeMap, a: u32, b: u32, r: u32) -> u32 {
    let mut votes = 0;
    for (x, y) in edges.edge_points() {
        for deg in 0..ANGLE_SAMPLES {
            let theta = (deg as f64).to_radians();
            let pa = (x as f64 - r as f64 * theta.cos()) as i64;
            let pb = (y as f64 - r as f64 * theta.sin()) as i64;
            if pa == a as i64 && pb == b as i64 {
                votes += 1;
            }
        }
    }
    votes
}
