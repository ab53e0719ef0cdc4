//! Implementations of `std::ops` and the comparison traits.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, Complex, Number};

impl<T, U> ApproxEq<Complex<U>> for Complex<T>
where
    T: ApproxEq<U>,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Complex<U>, abs_tolerance: Self::Tolerance) -> bool {
        self.real.abs_diff_eq(&other.real, abs_tolerance)
            && self.imag.abs_diff_eq(&other.imag, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Complex<U>, rel_tolerance: Self::Tolerance) -> bool {
        self.real.rel_diff_eq(&other.real, rel_tolerance)
            && self.imag.rel_diff_eq(&other.imag, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Complex<U>, ulps_tolerance: u32) -> bool {
        self.real.ulps_diff_eq(&other.real, ulps_tolerance)
            && self.imag.ulps_diff_eq(&other.imag, ulps_tolerance)
    }
}

/// Component-wise addition.
impl<T: Add> Add for Complex<T> {
    type Output = Complex<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

/// Component-wise addition.
impl<T: AddAssign> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imag += rhs.imag;
    }
}

/// Component-wise subtraction.
impl<T: Sub> Sub for Complex<T> {
    type Output = Complex<T::Output>;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

/// Component-wise subtraction.
impl<T: SubAssign> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.real -= rhs.real;
        self.imag -= rhs.imag;
    }
}

/// Negates both parts.
impl<T: Neg> Neg for Complex<T> {
    type Output = Complex<T::Output>;

    fn neg(self) -> Self::Output {
        Complex::new(-self.real, -self.imag)
    }
}

/// The complex product: `(a + bi)(c + di) = (ac − bd) + (ad + bc)i`.
impl<T: Number> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl<T: Number> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Complex division: multiplies `self` with the inverse of `rhs`.
///
/// Dividing by zero inverts a zero modulus, with the usual consequences for the element type
/// (NaN/Inf for floats, a division panic for integers).
impl<T: Number> Div for Complex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<T: Number> DivAssign for Complex<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Adds the scalar to the real part, leaving the imaginary part untouched.
impl<T: Add<Output = T> + Copy> Add<T> for Complex<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.real + rhs, self.imag)
    }
}

/// Adds the scalar to the real part, leaving the imaginary part untouched.
impl<T: Add<Output = T> + Copy> AddAssign<T> for Complex<T> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

/// Subtracts the scalar from the real part, leaving the imaginary part untouched.
impl<T: Sub<Output = T> + Copy> Sub<T> for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.real - rhs, self.imag)
    }
}

/// Subtracts the scalar from the real part, leaving the imaginary part untouched.
impl<T: Sub<Output = T> + Copy> SubAssign<T> for Complex<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

/// Scales both parts by the scalar.
impl<T: Mul<Output = T> + Copy> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.real * rhs, self.imag * rhs)
    }
}

/// Scales both parts by the scalar.
impl<T: MulAssign + Copy> MulAssign<T> for Complex<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.real *= rhs;
        self.imag *= rhs;
    }
}

/// Divides both parts by the scalar.
impl<T: Div<Output = T> + Copy> Div<T> for Complex<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.real / rhs, self.imag / rhs)
    }
}

/// Divides both parts by the scalar.
impl<T: DivAssign + Copy> DivAssign<T> for Complex<T> {
    fn div_assign(&mut self, rhs: T) {
        self.real /= rhs;
        self.imag /= rhs;
    }
}

// A generic `impl<T> Add<Complex<T>> for T` is not allowed (`T` is uncovered), so the
// scalar-on-the-left ops are implemented per primitive type. Only the signed primitives are
// covered; `s - z` negates the imaginary part.
macro_rules! scalar_lhs {
    ($($prim:ty),+) => {
        $(
            /// Adds the scalar to the real part, leaving the imaginary part untouched.
            impl Add<Complex<$prim>> for $prim {
                type Output = Complex<$prim>;

                fn add(self, rhs: Complex<$prim>) -> Self::Output {
                    rhs + self
                }
            }

            /// Subtracts the complex number from the scalar, negating the imaginary part.
            impl Sub<Complex<$prim>> for $prim {
                type Output = Complex<$prim>;

                fn sub(self, rhs: Complex<$prim>) -> Self::Output {
                    Complex::new(self - rhs.real, -rhs.imag)
                }
            }

            /// Scales both parts by the scalar.
            impl Mul<Complex<$prim>> for $prim {
                type Output = Complex<$prim>;

                fn mul(self, rhs: Complex<$prim>) -> Self::Output {
                    rhs * self
                }
            }

            /// Divides the scalar by the complex number.
            impl Div<Complex<$prim>> for $prim {
                type Output = Complex<$prim>;

                fn div(self, rhs: Complex<$prim>) -> Self::Output {
                    Complex::from_real(self) / rhs
                }
            }
        )+
    };
}

scalar_lhs!(i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn products() {
        assert_eq!(Complex::new(1, 2) * Complex::new(3, 4), Complex::new(-5, 10));
        assert_eq!(Complex::new(0, 1) * Complex::new(0, 1), Complex::new(-1, 0));

        let mut z = Complex::new(1, 2);
        z *= Complex::new(3, 4);
        assert_eq!(z, Complex::new(-5, 10));
    }

    #[test]
    fn division() {
        let z = Complex::new(-5.0, 10.0);
        assert_approx_eq!(z / Complex::new(3.0, 4.0), Complex::new(1.0, 2.0)).abs(1e-12);

        let mut w = z;
        w /= z;
        assert_approx_eq!(w, Complex::new(1.0, 0.0)).abs(1e-12);
    }

    #[test]
    fn elementwise() {
        let a = Complex::new(1, 2);
        let b = Complex::new(30, 40);
        assert_eq!(a + b, Complex::new(31, 42));
        assert_eq!(b - a, Complex::new(29, 38));
        assert_eq!(-a, Complex::new(-1, -2));

        let mut c = a;
        c += b;
        assert_eq!(c, Complex::new(31, 42));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar_ops() {
        let z = Complex::new(1, 2);
        assert_eq!(z + 10, Complex::new(11, 2));
        assert_eq!(10 + z, Complex::new(11, 2));
        assert_eq!(z - 1, Complex::new(0, 2));
        assert_eq!(10 - z, Complex::new(9, -2));
        assert_eq!(z * 2, Complex::new(2, 4));
        assert_eq!(2 * z, Complex::new(2, 4));
        assert_eq!(Complex::new(2.0, 4.0) / 2.0, Complex::new(1.0, 2.0));

        let z = Complex::new(3.0, 4.0);
        assert_eq!(12.0 / z, Complex::from_real(12.0) / z);

        let mut z = Complex::new(1, 2);
        z += 10;
        z -= 1;
        assert_eq!(z, Complex::new(10, 2));
        z *= 2;
        assert_eq!(z, Complex::new(20, 4));
        z /= 4;
        assert_eq!(z, Complex::new(5, 1));
    }
}
