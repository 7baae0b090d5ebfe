//! Overlay of detected circles on the source image.

use image::{buffer::ConvertBuffer, GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::peaks::CircleCandidate;

/// Center dot color.
pub const CENTER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Perimeter color.
pub const PERIMETER_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Draws every candidate on a copy of `image`.
///
/// Each circle gets a filled green dot of radius 2 at its center and a blue
/// perimeter two pixels thick. Circles partly outside the image are clipped.
///
/// # Examples
///
/// ```rust,no_run
/// use image::open;
/// use hough_circle::{hough_circle_transform, visualize_circles, CannyParams, EdgeMap};
///
/// let image = open("coins.png").unwrap();
/// let edges = EdgeMap::from_canny(&image.to_luma8(), &CannyParams::default());
/// let circles = hough_circle_transform(&edges, 30, 40, 150).unwrap();
/// visualize_circles(&image.to_rgb8(), &circles).save("circles.png").unwrap();
/// ```
pub fn visualize_circles(image: &RgbImage, circles: &[CircleCandidate]) -> RgbImage {
    let mut canvas = image.clone();
    for circle in circles {
        let center = (circle.center_x as i32, circle.center_y as i32);
        let radius = circle.radius as i32;
        draw_filled_circle_mut(&mut canvas, center, 2, CENTER_COLOR);
        draw_hollow_circle_mut(&mut canvas, center, radius, PERIMETER_COLOR);
        draw_hollow_circle_mut(&mut canvas, center, radius + 1, PERIMETER_COLOR);
    }
    canvas
}

/// [`visualize_circles`] over a grayscale background.
pub fn visualize_circles_gray(image: &GrayImage, circles: &[CircleCandidate]) -> RgbImage {
    let canvas: RgbImage = image.convert();
    visualize_circles(&canvas, circles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn draws_center_and_perimeter() {
        let image = GrayImage::from_pixel(40, 40, Luma([0]));
        let out = visualize_circles_gray(&image, &[CircleCandidate::new(20, 20, 10)]);
        assert_eq!(out.dimensions(), (40, 40));
        assert_eq!(*out.get_pixel(20, 20), CENTER_COLOR);
        assert_eq!(*out.get_pixel(30, 20), PERIMETER_COLOR);
        assert_eq!(*out.get_pixel(20, 9), PERIMETER_COLOR);
        assert_eq!(*out.get_pixel(25, 25), Rgb([0, 0, 0]));
    }

    #[test]
    fn clips_circles_at_border() {
        let image = RgbImage::new(10, 10);
        let out = visualize_circles(&image, &[CircleCandidate::new(0, 0, 15)]);
        assert_eq!(*out.get_pixel(0, 0), CENTER_COLOR);
    }

    #[test]
    fn no_circles_leaves_image_untouched() {
        let image = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        assert_eq!(visualize_circles(&image, &[]), image);
    }
}
