use std::{
    fmt,
    mem::{ManuallyDrop, MaybeUninit},
};

use crate::{vec2, Number, One, Vec2, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows (raw arrays or row vectors).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::ONES`] is a matrix with every element set to 1.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// Indexing by a single `usize` yields a whole row as a [`Vector`], so `mat[i][j]` also works:
///
/// ```
/// # use minalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[0][1], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices, in every build
/// profile. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead and can be used for
/// checked indexing:
///
/// ```
/// # use minalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: Vector<Vector<T, C>, R>,
}

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The shape of this matrix type, as a (rows, columns) vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// assert_eq!(Mat2x4::<u8>::SHAPE, vec2(2, 4));
    /// assert_eq!(Mat3f::SHAPE, vec2(3, 3));
    /// ```
    pub const SHAPE: Vec2<usize> = vec2(R, C);

    /// The smaller of the two dimensions (`R` or `C`).
    pub const MIN_DIMENSION: usize = if R < C { R } else { C };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// Each row may be given as an array or as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat[0], vec2(0, 1));
    /// assert_eq!(mat[1], vec2(2, 3));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self {
            rows: rows.map(Into::into).into(),
        }
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`std::array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            rows: Vector::from_fn(|row| Vector::from_fn(|col| cb(row, col))),
        }
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }

    /// Converts each element to `U`, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([[1u8, 2], [3, 4]]).cast::<i32>();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (r, row) in self.rows.into_array().into_iter().enumerate() {
            for (c, elem) in row.into_array().into_iter().enumerate() {
                out.rows[c][r] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loops above write to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the row at index `i`.
    ///
    /// Panics if `i >= R`. Equivalent to indexing with a single `usize`.
    pub fn row(&self, i: usize) -> &Vector<T, C> {
        &self.rows[i]
    }

    /// Returns a mutable reference to the row at index `i`.
    ///
    /// Panics if `i >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// *mat.row_mut(1) = vec2(9, 9);
    /// assert_eq!(mat, Matrix::from_rows([[0, 1], [9, 9]]));
    /// ```
    pub fn row_mut(&mut self, i: usize) -> &mut Vector<T, C> {
        &mut self.rows[i]
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows
            .as_slice()
            .get(row)
            .and_then(|row| row.as_slice().get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows
            .as_mut_slice()
            .get_mut(row)
            .and_then(|row| row.as_mut_slice().get_mut(col))
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        // `Matrix` is `repr(transparent)` over nested `repr(transparent)` vectors, so its layout
        // matches `[[T; C]; R]`.
        union RawMat<T, const R: usize, const C: usize> {
            raw: ManuallyDrop<[[ManuallyDrop<T>; C]; R]>,
            mat: ManuallyDrop<Matrix<T, R, C>>,
        }

        unsafe {
            let mut raw = ManuallyDrop::into_inner(
                RawMat {
                    mat: ManuallyDrop::new(self),
                }
                .raw,
            );
            // Leaks whatever was at `(row, col)` before.
            raw[row][col] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                RawMat {
                    raw: ManuallyDrop::new(raw),
                }
                .mat,
            )
        }
    }
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self { rows: Vector::ZERO };
}

impl<T: One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 1.
    ///
    /// Note that this is *not* the multiplicative identity of the matrix product; that is
    /// [`Matrix::IDENTITY`].
    pub const ONES: Self = Self { rows: Vector::ONE };
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. For non-square matrices
    /// the diagonal has [`Matrix::MIN_DIMENSION`] entries.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the *trace* of this square matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 2],
    /// ]);
    /// assert_eq!(mat.trace(), 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Element-wise product of two equally sized matrices.
    ///
    /// Not to be confused with the matrix product, which is what `*` computes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let two = Matrix::from_rows([[2, 2], [2, 2]]);
    /// assert_eq!(mat.component_mul(two), Matrix::from_rows([[2, 4], [6, 8]]));
    /// ```
    pub fn component_mul(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self[(r, c)] * rhs[(r, c)])
    }

    /// Element-wise quotient of two equally sized matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([[2, 4], [6, 8]]);
    /// let two = Matrix::from_rows([[2, 2], [2, 2]]);
    /// assert_eq!(mat.component_div(two), Matrix::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn component_div(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self[(r, c)] / rhs[(r, c)])
    }
}

// Determinants are provided for sizes up to 4x4.
impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.determinant(), -2.0);
    /// ```
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.rows.into_array().map(Vector::into_array);
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix, by cofactor expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows.into_array().map(Vector::into_array);
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix, by cofactor expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] =
            self.rows.into_array().map(Vector::into_array);

        let minor_a = f * (k * p - l * o) - g * (j * p - l * n) + h * (j * o - k * n);
        let minor_b = e * (k * p - l * o) - g * (i * p - l * m) + h * (i * o - k * m);
        let minor_c = e * (j * p - l * n) - f * (i * p - l * m) + h * (i * n - j * m);
        let minor_d = e * (j * o - k * n) - f * (i * o - k * m) + g * (i * n - j * m);

        a * minor_a - b * minor_b + c * minor_c - d * minor_d
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_fn(|r, c| r * 3 + c + 1),
        );
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]).transpose(),
            Mat3x2::from_rows([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(format!("{:?}", Mat2f::ONES), "[[1.0, 1.0], [1.0, 1.0]]");

        assert_eq!(Mat2x4::<u8>::SHAPE, vec2(2, 4));
        assert_eq!(Mat2x4::<u8>::MIN_DIMENSION, 2);
        assert_eq!(Mat4x3::<u8>::MIN_DIMENSION, 3);
    }

    #[test]
    fn indexing() {
        let mut mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[(0, 0)], 1);
        assert_eq!(mat[(1, 2)], 6);
        assert_eq!(mat[0], vec3(1, 2, 3));
        assert_eq!(mat[1][0], 4);
        assert_eq!(mat.row(1), &vec3(4, 5, 6));

        mat[(0, 1)] = 9;
        mat[1][2] = 9;
        assert_eq!(mat, Matrix::from_rows([[1, 9, 3], [4, 5, 9]]));

        assert_eq!(mat.get(1, 2), Some(&9));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2f::IDENTITY;
        let _ = mat[(0, 2)];
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        assert_eq!(Mat3f::IDENTITY * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);

        let m = Mat3::from_fn(|r, c| (r * 3 + c) as i32);
        assert_eq!(Mat3::IDENTITY * m, m);
        assert_eq!(m * Mat3::IDENTITY, m);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::ONES.determinant(), 0.0);
        assert_eq!(Mat3f::ONES.determinant(), 0.0);
        assert_eq!(Mat4f::ONES.determinant(), 0.0);

        assert_eq!(Mat2f::from_rows([[1., 2.], [3., 4.]]).determinant(), -2.);

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [1, 2, 3],
            [0, 4, 5],
            [1, 0, 6],
        ]);
        assert_eq!(m3.determinant(), 22);
        assert_eq!(m3.transpose().determinant(), 22);

        #[rustfmt::skip]
        let m4 = Matrix::from_rows([
            [1, 0,  2, -1],
            [3, 0,  0,  5],
            [2, 1,  4, -3],
            [1, 0, -1,  6],
        ]);
        assert_eq!(m4.determinant(), 18);
        assert_eq!(m4.transpose().determinant(), 18);
    }

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a.component_mul(a), Matrix::from_rows([[1, 4], [9, 16]]));
        assert_eq!(b.component_div(a), Matrix::from_rows([[10, 10], [10, 10]]));

        let mut m = a;
        m += b;
        m -= a;
        assert_eq!(m, b);
    }

    #[test]
    fn scalar_ops() {
        let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a * 2.0, Matrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(8.0 / a, Matrix::from_rows([[8.0, 4.0], [8.0 / 3.0, 2.0]]));
    }

    #[test]
    fn trace() {
        assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
        assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).trace(), 5);
    }
}
