//! Implementations of `std::ops` and the comparison traits.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, Number, Quaternion};

impl<T, U> PartialEq<Quaternion<U>> for Quaternion<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Quaternion<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quaternion<T> {}

impl<T, U> ApproxEq<Quaternion<U>> for Quaternion<T>
where
    T: ApproxEq<U>,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Quaternion<U>, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Quaternion<U>, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Quaternion<U>, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

/// The Hamilton product.
///
/// Quaternion multiplication is not commutative: `a * b` and `b * a` differ in general.
impl<T: Number> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [i1, j1, k1, r1] = self.vec.into_array();
        let [i2, j2, k2, r2] = rhs.vec.into_array();
        Self::new(
            r1 * r2 - i1 * i2 - j1 * j2 - k1 * k2,
            r1 * i2 + i1 * r2 + j1 * k2 - k1 * j2,
            r1 * j2 - i1 * k2 + j1 * r2 + k1 * i2,
            r1 * k2 + i1 * j2 - j1 * i2 + k1 * r2,
        )
    }
}

impl<T: Number> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Quaternion division: multiplies `self` with the inverse of `rhs`, expanded into a closed form
/// that divides every component by `rhs.norm()`.
///
/// Dividing by a zero quaternion divides by a zero norm, with the usual consequences for the
/// element type (NaN/Inf for floats, a division panic for integers).
impl<T: Number> Div for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let [i1, j1, k1, r1] = self.vec.into_array();
        let [i2, j2, k2, r2] = rhs.vec.into_array();
        let norm = rhs.norm();
        Self::new(
            (r1 * r2 + i1 * i2 + j1 * j2 + k1 * k2) / norm,
            (i1 * r2 - r1 * i2 + k1 * j2 - j1 * k2) / norm,
            (j1 * r2 - r1 * j2 + i1 * k2 - k1 * i2) / norm,
            (k1 * r2 - r1 * k2 + j1 * i2 - i1 * j2) / norm,
        )
    }
}

impl<T: Number> DivAssign for Quaternion<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Element-wise addition.
impl<T: Add> Add for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Quaternion {
            vec: self.vec + rhs.vec,
        }
    }
}

/// Element-wise addition.
impl<T: AddAssign> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

/// Element-wise subtraction.
impl<T: Sub> Sub for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    fn sub(self, rhs: Self) -> Self::Output {
        Quaternion {
            vec: self.vec - rhs.vec,
        }
    }
}

/// Element-wise subtraction.
impl<T: SubAssign> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Negates each component.
impl<T: Neg> Neg for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    fn neg(self) -> Self::Output {
        Quaternion { vec: -self.vec }
    }
}

/// Adds the scalar to the real component, leaving the imaginary components untouched.
impl<T: Add<Output = T> + Copy> Add<T> for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let [i, j, k, r] = self.vec.into_array();
        Self::new(r + rhs, i, j, k)
    }
}

/// Adds the scalar to the real component, leaving the imaginary components untouched.
impl<T: Add<Output = T> + Copy> AddAssign<T> for Quaternion<T> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

/// Subtracts the scalar from the real component, leaving the imaginary components untouched.
impl<T: Sub<Output = T> + Copy> Sub<T> for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let [i, j, k, r] = self.vec.into_array();
        Self::new(r - rhs, i, j, k)
    }
}

/// Subtracts the scalar from the real component, leaving the imaginary components untouched.
impl<T: Sub<Output = T> + Copy> SubAssign<T> for Quaternion<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

/// Scales every component by the scalar.
impl<T: Mul<Output = T> + Copy> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

/// Scales every component by the scalar.
impl<T: MulAssign + Copy> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.vec *= rhs;
    }
}

/// Divides every component by the scalar.
impl<T: Div<Output = T> + Copy> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            vec: self.vec / rhs,
        }
    }
}

/// Divides every component by the scalar.
impl<T: DivAssign + Copy> DivAssign<T> for Quaternion<T> {
    fn div_assign(&mut self, rhs: T) {
        self.vec /= rhs;
    }
}

// A generic `impl<T> Add<Quaternion<T>> for T` is not allowed (`T` is uncovered), so the
// scalar-on-the-left ops are implemented per primitive type. Only the signed primitives are
// covered; `s - q` negates the imaginary components.
macro_rules! scalar_lhs {
    ($($prim:ty),+) => {
        $(
            /// Adds the scalar to the real component, leaving the imaginary components untouched.
            impl Add<Quaternion<$prim>> for $prim {
                type Output = Quaternion<$prim>;

                fn add(self, rhs: Quaternion<$prim>) -> Self::Output {
                    rhs + self
                }
            }

            /// Subtracts the quaternion from the scalar, negating the imaginary components.
            impl Sub<Quaternion<$prim>> for $prim {
                type Output = Quaternion<$prim>;

                fn sub(self, rhs: Quaternion<$prim>) -> Self::Output {
                    let [i, j, k, r] = rhs.vec.into_array();
                    Quaternion::new(self - r, -i, -j, -k)
                }
            }

            /// Scales every component by the scalar.
            impl Mul<Quaternion<$prim>> for $prim {
                type Output = Quaternion<$prim>;

                fn mul(self, rhs: Quaternion<$prim>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(i8, i16, i32, i64, i128, isize, f32, f64);
