//! Element-wise Square
//!
//! Generic in-place square over a mutable slice of numeric elements.
//! No allocation; the returned slice is the one passed in.

/// Numeric element that can be squared in place.
///
/// Integers wrap on overflow (two's complement). Floats follow IEEE 754
/// multiplication, so NaN and infinities propagate unchanged in kind.
pub trait Squarable: Copy {
    fn square(self) -> Self;
}

impl Squarable for i32 {
    fn square(self) -> Self {
        self.wrapping_mul(self)
    }
}

impl Squarable for i64 {
    fn square(self) -> Self {
        self.wrapping_mul(self)
    }
}

impl Squarable for f32 {
    fn square(self) -> Self {
        self * self
    }
}

impl Squarable for f64 {
    fn square(self) -> Self {
        self * self
    }
}

/// Replace every element with its square and hand the same slice back.
pub fn square_in_place<T: Squarable>(values: &mut [T]) -> &mut [T] {
    for x in values.iter_mut() {
        *x = x.square();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_integers() {
        let mut v = [1i32, 2, 3, -4];
        assert_eq!(square_in_place(&mut v), &[1, 4, 9, 16]);
    }

    #[test]
    fn squares_floats() {
        let mut v = [1.5f64, -2.0];
        assert_eq!(square_in_place(&mut v), &[2.25, 4.0]);

        let mut w = [0.5f32];
        assert_eq!(square_in_place(&mut w), &[0.25]);
    }

    #[test]
    fn integer_overflow_wraps() {
        let mut v = [i32::MAX, 65_536];
        square_in_place(&mut v);
        assert_eq!(v, [1, 0]);

        let mut w = [i64::MIN];
        square_in_place(&mut w);
        assert_eq!(w, [0]);
    }

    #[test]
    fn nan_and_infinity_pass_through() {
        let mut v = [f64::NAN, f64::NEG_INFINITY];
        square_in_place(&mut v);
        assert!(v[0].is_nan());
        assert_eq!(v[1], f64::INFINITY);
    }

    #[test]
    fn empty_slice_is_noop() {
        let mut v: [i32; 0] = [];
        assert!(square_in_place(&mut v).is_empty());
    }
}
