//! Transformation matrix helpers.
//!
//! The functions in this module build affine transforms (rotation, translation, scaling) and
//! compose them onto an existing square matrix. They share one contract: the new transform is
//! pre-multiplied onto the matrix argument, so it applies *after* everything the argument already
//! does, and rotation angles are taken in degrees ([`radians`] and [`degrees`] convert between
//! the two representations).

use crate::{Angle, Matrix, Number, Sqrt, Trig, Vector};

/// Converts `angle` from degrees to radians.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// assert_approx_eq!(radians(180.0), std::f64::consts::PI);
/// ```
pub fn radians<T: Angle>(angle: T) -> T {
    angle.to_radians()
}

/// Converts `angle` from radians to degrees.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// assert_approx_eq!(degrees(std::f64::consts::FRAC_PI_2), 90.0);
/// ```
pub fn degrees<T: Angle>(angle: T) -> T {
    angle.to_degrees()
}

/// Rotates a transform matrix by `angle` degrees around `axis`.
///
/// The rotation block is built into an identity matrix and pre-multiplied onto `m`, so it rotates
/// whatever `m` produces. `axis` does not have to be normalized.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// let m = rotate(Mat3d::IDENTITY, 90.0, Vec3d::Z);
/// assert_approx_eq!(m * Vec3d::X, Vec3d::Y).abs(1e-12);
/// ```
///
/// Only 3×3 and 4×4 matrices describe a rotation around an axis; other dimensions fail to
/// compile:
///
/// ```compile_fail
/// # use minalg::*;
/// let _ = rotate(Mat2d::IDENTITY, 90.0, Vec3d::Z);
/// ```
pub fn rotate<T, const N: usize>(
    m: Matrix<T, N, N>,
    angle: T,
    axis: Vector<T, 3>,
) -> Matrix<T, N, N>
where
    T: Number + Trig + Sqrt + Angle,
{
    const {
        assert!(N == 3 || N == 4, "axis rotation requires a 3x3 or 4x4 matrix");
    }
    let angle = radians(angle);
    let s = angle.sin();
    let c = angle.cos();
    let t = T::ONE - c;
    let [x, y, z] = axis.normalize().into_array();

    let mut res = Matrix::IDENTITY;
    res[(0, 0)] = c + t * x * x;
    res[(0, 1)] = t * x * y - s * z;
    res[(0, 2)] = t * x * z + s * y;
    res[(1, 0)] = t * x * y + s * z;
    res[(1, 1)] = c + t * y * y;
    res[(1, 2)] = t * y * z - s * x;
    res[(2, 0)] = t * x * z - s * y;
    res[(2, 1)] = t * y * z + s * x;
    res[(2, 2)] = c + t * z * z;
    res * m
}

/// Rotates a transform matrix by `angle` degrees in the XY plane.
///
/// This is the 2-dimensional counterpart of [`rotate`], which has no meaningful axis to pass.
/// It accepts 2×2 matrices as well as 3×3 and 4×4 ones, where the rotation leaves all other
/// coordinates alone.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// let m = rotate2d(Mat2d::IDENTITY, 90.0);
/// assert_approx_eq!(m * Vec2d::X, Vec2d::Y).abs(1e-12);
/// ```
pub fn rotate2d<T, const N: usize>(m: Matrix<T, N, N>, angle: T) -> Matrix<T, N, N>
where
    T: Number + Trig + Angle,
{
    const {
        assert!(N >= 2 && N <= 4, "planar rotation requires a 2x2, 3x3 or 4x4 matrix");
    }
    let angle = radians(angle);
    let mut res = Matrix::IDENTITY;
    res[(0, 0)] = angle.cos();
    res[(0, 1)] = -angle.sin();
    res[(1, 0)] = angle.sin();
    res[(1, 1)] = angle.cos();
    res * m
}

/// Adds `v` to the translation column of a transform matrix.
///
/// The translation column is the last column of `m`; its bottom element is left untouched. `v`
/// can have either N−1 elements, or N elements of which the last is ignored, so homogeneous
/// vectors can be passed through unchanged.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// let m = translate(Mat3::IDENTITY, vec2(3, 4));
/// assert_eq!(m * vec3(10, 20, 1), vec3(13, 24, 1));
/// ```
pub fn translate<T, const N: usize, const M: usize>(
    m: Matrix<T, N, N>,
    v: Vector<T, M>,
) -> Matrix<T, N, N>
where
    T: Number,
{
    const {
        assert!(M == N - 1 || M == N, "translation vector does not fit the matrix");
    }
    let mut res = m;
    for i in 0..N - 1 {
        res[(i, N - 1)] = res[(i, N - 1)] + v[i];
    }
    res
}

/// Scales the axes of a transform matrix by the elements of `v`.
///
/// Builds a scaling matrix with `v` on the diagonal and pre-multiplies it onto `m`. `v` has one
/// element fewer than the matrix has rows, so the homogeneous coordinate is never scaled.
///
/// # Examples
///
/// ```
/// # use minalg::*;
/// let m = scale(Mat3::IDENTITY, vec2(2, 3));
/// assert_eq!(m * vec3(10, 20, 1), vec3(20, 60, 1));
/// ```
pub fn scale<T, const N: usize, const M: usize>(
    m: Matrix<T, N, N>,
    v: Vector<T, M>,
) -> Matrix<T, N, N>
where
    T: Number,
{
    const {
        assert!(M == N - 1, "scale vector does not fit the matrix");
    }
    let mut res = Matrix::IDENTITY;
    for i in 0..M {
        res[(i, i)] = v[i];
    }
    res * m
}

/// Scales the axes of a transform matrix uniformly by `s`.
///
/// Same as [`scale`] with a vector of N−1 copies of `s`.
pub fn scale_uniform<T, const N: usize>(m: Matrix<T, N, N>, s: T) -> Matrix<T, N, N>
where
    T: Number,
{
    const {
        assert!(N >= 1, "scaling requires a square matrix");
    }
    let mut res = Matrix::IDENTITY;
    for i in 0..N - 1 {
        res[(i, i)] = s;
    }
    res * m
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Mat2d, Mat3, Mat3d, Mat4d, Quatd, Vec2d, Vec3d};

    use super::*;

    #[test]
    fn angle_conversions() {
        assert_approx_eq!(radians(180.0), PI);
        assert_approx_eq!(radians(90.0f32), std::f32::consts::FRAC_PI_2);
        assert_approx_eq!(degrees(PI), 180.0);
        assert_approx_eq!(degrees(radians(36.5)), 36.5);
    }

    #[test]
    fn planar_rotation() {
        let m = rotate2d(Mat2d::IDENTITY, 90.0);
        assert_approx_eq!(m * Vec2d::X, Vec2d::Y).abs(1e-12);
        assert_approx_eq!(m * Vec2d::Y, -Vec2d::X).abs(1e-12);

        // The matrix argument applies first.
        let m = rotate2d(translate(Mat3d::IDENTITY, vec2(1.0, 0.0)), 90.0);
        assert_approx_eq!(m * vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 1.0)).abs(1e-12);

        let quarter = rotate2d(Mat4d::IDENTITY, 90.0);
        assert_approx_eq!(quarter * vec4(1.0, 0.0, 5.0, 1.0), vec4(0.0, 1.0, 5.0, 1.0)).abs(1e-12);
    }

    #[test]
    fn axis_rotation() {
        // Rotating around Z matches the planar rotation.
        let about_z = rotate(Mat3d::IDENTITY, 35.0, Vec3d::Z);
        assert_approx_eq!(about_z, rotate2d(Mat3d::IDENTITY, 35.0)).abs(1e-12);

        // The axis is normalized internally; the quaternion route wants a unit axis.
        let axis = vec3(1.0, 2.0, 2.0);
        let m = rotate(Mat3d::IDENTITY, 40.0, axis);
        let q = Quatd::from_axis_angle(axis / 3.0, radians(40.0));
        assert_approx_eq!(m, q.to_mat()).abs(1e-12);

        let m = rotate(Mat4d::IDENTITY, 30.0, Vec3d::X);
        let (s, c) = (radians(30.0).sin(), radians(30.0).cos());
        assert_approx_eq!(m * vec4(0.0, 1.0, 0.0, 1.0), vec4(0.0, c, s, 1.0)).abs(1e-12);
    }

    #[test]
    fn translation() {
        let m = translate(Mat3::IDENTITY, vec2(3, 4));
        assert_eq!(m * vec3(10, 20, 1), vec3(13, 24, 1));

        // A homogeneous vector's last element is ignored.
        assert_eq!(translate(Mat3::IDENTITY, vec3(3, 4, 9)), m);

        // Translations compose additively.
        assert_eq!(translate(m, vec2(1, 1)) * vec3(0, 0, 1), vec3(4, 5, 1));
    }

    #[test]
    fn scaling() {
        let m = scale(Mat3::IDENTITY, vec2(2, 3));
        assert_eq!(m * vec3(10, 20, 1), vec3(20, 60, 1));
        assert_eq!(scale_uniform(Mat3::IDENTITY, 5) * vec3(1, 2, 1), vec3(5, 10, 1));
        assert_eq!(scale_uniform(Mat3::IDENTITY, 2), scale(Mat3::IDENTITY, vec2(2, 2)));

        // The homogeneous coordinate stays untouched.
        let m = scale(Mat4d::IDENTITY, vec3(2.0, 3.0, 4.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));

        // Scaling after a translation scales the translation too.
        let m = scale(translate(Mat3d::IDENTITY, vec2(1.0, 1.0)), vec2(2.0, 3.0));
        assert_eq!(m * vec3(0.0, 0.0, 1.0), vec3(2.0, 3.0, 1.0));
    }
}
