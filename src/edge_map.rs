//! Binary edge maps consumed by the transform.

use image::GrayImage;
use rayon::prelude::*;

use crate::error::EdgeMapError;
use crate::params::CannyParams;

/// Immutable `width x height` grid of edge (foreground) and background pixels.
///
/// Pixels are stored row-major; `(x, y)` is (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl EdgeMap {
    /// Wraps a row-major buffer of `width * height` flags.
    pub fn from_raw(width: u32, height: u32, data: Vec<bool>) -> Result<Self, EdgeMapError> {
        if data.len() != width as usize * height as usize {
            return Err(EdgeMapError::DimensionMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a map by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Treats every non-zero pixel as an edge.
    ///
    /// This is the natural reading of a Canny output, where edges are 255 and
    /// everything else is 0.
    pub fn from_gray_image(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image.as_raw().par_iter().map(|&p| p > 0).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Runs `imageproc`'s Canny detector and keeps its edge pixels.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use image::open;
    /// use hough_circle::{CannyParams, EdgeMap};
    ///
    /// let gray = open("coins.png").unwrap().to_luma8();
    /// let edges = EdgeMap::from_canny(&gray, &CannyParams::default());
    /// println!("{} edge pixels", edges.edge_count());
    /// ```
    pub fn from_canny(image: &GrayImage, params: &CannyParams) -> Self {
        let edges = imageproc::edges::canny(image, params.low_threshold, params.high_threshold);
        Self::from_gray_image(&edges)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether `(x, y)` is an edge pixel. Out-of-range coordinates are background.
    #[inline]
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }

    /// Edge pixel coordinates `(x, y)` in row-major order.
    pub fn edge_points(&self) -> Vec<(u32, u32)> {
        if self.width == 0 {
            return Vec::new();
        }
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e)
            .map(|(idx, _)| ((idx % width) as u32, (idx / width) as u32))
            .collect()
    }

    /// Renders the map as a black image with white edges.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([if self.is_edge(x, y) { 255u8 } else { 0 }])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn raw_buffer_must_match_dimensions() {
        let err = EdgeMap::from_raw(3, 2, vec![false; 5]).unwrap_err();
        assert_eq!(
            err,
            EdgeMapError::DimensionMismatch {
                width: 3,
                height: 2,
                len: 5
            }
        );
        assert!(EdgeMap::from_raw(3, 2, vec![false; 6]).is_ok());
    }

    #[test]
    fn edge_points_are_row_major() {
        let points = [(1, 2), (3, 0), (0, 1)];
        let map = EdgeMap::from_fn(4, 3, |x, y| points.contains(&(x, y)));
        assert_eq!(map.edge_points(), vec![(3, 0), (0, 1), (1, 2)]);
        assert_eq!(map.edge_count(), 3);
        assert!(map.is_edge(1, 2));
        assert!(!map.is_edge(2, 2));
        assert!(!map.is_edge(10, 0));
    }

    #[test]
    fn gray_image_nonzero_pixels_are_edges() {
        let mut image = GrayImage::new(5, 5);
        image.put_pixel(2, 3, Luma([1]));
        image.put_pixel(4, 0, Luma([255]));
        let map = EdgeMap::from_gray_image(&image);
        assert_eq!(map.dimensions(), (5, 5));
        assert_eq!(map.edge_points(), vec![(4, 0), (2, 3)]);
        assert_eq!(map.to_gray_image().get_pixel(2, 3)[0], 255);
    }

    #[test]
    fn canny_on_flat_image_has_no_edges() {
        let image = GrayImage::from_pixel(16, 16, Luma([128]));
        let map = EdgeMap::from_canny(&image, &CannyParams::default());
        assert_eq!(map.edge_count(), 0);
    }

    #[test]
    fn canny_finds_disk_boundary() {
        let image = GrayImage::from_fn(40, 40, |x, y| {
            let dx = x as f32 - 20.0;
            let dy = y as f32 - 20.0;
            Luma([if dx * dx + dy * dy <= 100.0 { 255 } else { 0 }])
        });
        let map = EdgeMap::from_canny(&image, &CannyParams::default());
        assert!(map.edge_count() > 0);
        assert!(!map.is_edge(20, 20));
    }
}
