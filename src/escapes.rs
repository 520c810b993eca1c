use num::Complex;

/// Try to determine if 'c' is in the Mandlebrot set, using at most 'limit' iterations to decide.
///
/// Starting from z = 0, iterate z = z * z + c and test the magnitude of z after every update.
/// If z leaves the circle of radius two centered on the origin, return 'true' ('c' escapes and
/// is not a member). If 'limit' iterations pass without z ever leaving the circle, return
/// 'false' (more precisely: we could not prove that 'c' is not a member, so it is drawn as one).
///
/// The magnitude test is done on the squared magnitude, avoiding a square root per iteration.
pub fn escapes(c: Complex<f64>, limit: u64) -> bool {
    let mut z = Complex { re: 0.0, im: 0.0 };

    for _ in 0..limit {
        z = z * z + c;
        if z.norm_sqr() >= 4.0 {
            return true;
        }
    }

    false
}
