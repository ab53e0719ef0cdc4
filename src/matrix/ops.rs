//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

/// Indexing by row number, yielding a row vector.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

/// Indexing by row number, yielding a row vector.
impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.rows == other.rows
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, U, const R: usize, const C: usize> ApproxEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: ApproxEq<U>,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Matrix<U, R, C>, abs_tolerance: Self::Tolerance) -> bool {
        self.rows.abs_diff_eq(&other.rows, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Matrix<U, R, C>, rel_tolerance: Self::Tolerance) -> bool {
        self.rows.rel_diff_eq(&other.rows, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Matrix<U, R, C>, ulps_tolerance: u32) -> bool {
        self.rows.ulps_diff_eq(&other.rows, ulps_tolerance)
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// Element-wise addition of two equally sized matrices.
impl<T, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Add,
{
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix {
            rows: self.rows + rhs.rows,
        }
    }
}

/// Element-wise addition of two equally sized matrices.
impl<T, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.rows += rhs.rows;
    }
}

/// Element-wise subtraction of two equally sized matrices.
impl<T, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Sub,
{
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix {
            rows: self.rows - rhs.rows,
        }
    }
}

/// Element-wise subtraction of two equally sized matrices.
impl<T, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.rows -= rhs.rows;
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

// Scalar-on-the-left multiplication and division, per primitive type (a generic impl would leave
// the type parameter uncovered).
macro_rules! scalar_lhs {
    ($($prim:ty),+) => {
        $(
            #[doc = concat!("Broadcasts the left-hand `", stringify!($prim), "` over the matrix elements.")]
            impl<const R: usize, const C: usize> Mul<Matrix<$prim, R, C>> for $prim {
                type Output = Matrix<$prim, R, C>;

                fn mul(self, rhs: Matrix<$prim, R, C>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            #[doc = concat!("Broadcasts the left-hand `", stringify!($prim), "` over the matrix elements.")]
            impl<const R: usize, const C: usize> Div<Matrix<$prim, R, C>> for $prim {
                type Output = Matrix<$prim, R, C>;

                fn div(self, rhs: Matrix<$prim, R, C>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
