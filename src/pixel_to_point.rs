use num::Complex;

/// Given the column and row of a pixel in the output image, return the
/// corresponding point on the complex plane.
///
/// `bounds` is a pair giving the width and height of the image in pixels.
/// `pixel` is a (column, row) pair indicating a particular pixel in that image.
/// The `upper_left` and `lower_right` parameters are points on the complex
/// plane designating the area the image covers.
///
/// The imaginary axis grows down the image here, as the row number does,
/// so `upper_left.im` is the smaller of the two imaginary parts.
pub fn pixel_to_point(bounds: (usize, usize), pixel: (usize, usize),
                      upper_left: Complex<f64>,
                      lower_right: Complex<f64>) -> Complex<f64>
{
    let width = lower_right.re - upper_left.re;
    let height = lower_right.im - upper_left.im;

    Complex {
        re: upper_left.re + (pixel.0 as f64 * width) / bounds.0 as f64,
        im: upper_left.im + (pixel.1 as f64 * height) / bounds.1 as f64,
    }
}

#[cfg(test)]
mod tests {
    use num::Complex;

    use super::pixel_to_point;

    #[test]
    fn test_pixel_to_point() {
        let upper_left = Complex { re: -1.0, im: -1.0 };
        let lower_right = Complex { re: 1.0, im: 1.0 };

        assert_eq!(pixel_to_point((100, 100), (25, 75), upper_left, lower_right),
                   Complex { re: -0.5, im: 0.5 });
    }

    #[test]
    fn corners_map_to_corners() {
        let upper_left = Complex { re: -1.5, im: -1.0 };
        let lower_right = Complex { re: 0.5, im: 1.0 };

        assert_eq!(pixel_to_point((4, 4), (0, 0), upper_left, lower_right), upper_left);
        assert_eq!(pixel_to_point((4, 4), (4, 4), upper_left, lower_right), lower_right);
    }

    #[test]
    fn matches_the_direct_formula() {
        let upper_left = Complex { re: -1.5, im: -1.0 };
        let lower_right = Complex { re: 0.5, im: 1.0 };

        // bit for bit the same as computing 2 * x / size - 1.5 and 2 * y / size - 1 directly
        let point = pixel_to_point((500, 500), (123, 457), upper_left, lower_right);
        assert_eq!(point.re, 2.0 * 123.0 / 500.0 - 1.5);
        assert_eq!(point.im, 2.0 * 457.0 / 500.0 - 1.0);
    }
}
