use std::fmt;

use crate::{vec4, Matrix, Number, One, Sqrt, Trig, Vector, Zero};

mod ops;
mod view;

/// A quaternion with [`f32`] components.
pub type Quatf = Quaternion<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quaternion<f64>;

/// A quaternion consisting of 3 imaginary components and a real component.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space:
/// [`Quaternion::from_axis_angle`] creates one, while [`Quaternion::to_mat`] and
/// [`Quaternion::from_mat`] convert to and from the equivalent rotation matrix.
///
/// Quaternions are stored like a 4-dimensional vector with the imaginary components first:
/// `[i, j, k, r]`. [`Quaternion::new`] takes the real component first instead, the way
/// quaternions are usually written. The components are accessible as `i`/`j`/`k`/`r` fields
/// through [`Deref`][std::ops::Deref].
///
/// Angles are always given in radians. Degree-taking entry points convert before they construct
/// a quaternion.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quaternion<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: Zero + One> Quaternion<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };

    /// The quaternion with every component set to 0.
    pub const ZERO: Self = Self { vec: Vector::ZERO };

    /// The imaginary unit `i`.
    pub const I: Self = Self {
        vec: vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO),
    };

    /// The imaginary unit `j`.
    pub const J: Self = Self {
        vec: vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO),
    };

    /// The imaginary unit `k`.
    pub const K: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO),
    };
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from its real component and the imaginary components `i`, `j`, `k`.
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self {
            vec: vec4(i, j, k, r),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] in storage order.
    ///
    /// The vector's `x`, `y`, and `z` elements become the `i`, `j`, and `k` imaginary
    /// components, while its `w` element becomes the real component.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion with real component `r` and every imaginary component set to 0.
    pub fn from_real(r: T) -> Self
    where
        T: Zero,
    {
        Self::new(r, T::ZERO, T::ZERO, T::ZERO)
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation of `radians` around `axis`.
    ///
    /// `axis` is expected to have unit length.
    pub fn from_axis_angle(axis: Vector<T, 3>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        let sin = half.sin();
        Self::new(half.cos(), axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Creates a quaternion representing a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::new(half.cos(), half.sin(), T::ZERO, T::ZERO)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::new(half.cos(), T::ZERO, half.sin(), T::ZERO)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::new(half.cos(), T::ZERO, T::ZERO, half.sin())
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the vector part `(i, j, k)` of this quaternion.
    pub fn vector_part(self) -> Vector<T, 3> {
        self.vec.truncate()
    }

    /// Returns the squared length of this quaternion.
    ///
    /// Multiplying a vector with a non-unit quaternion scales the vector in addition to rotating
    /// it, so quaternions that model rotations should be kept at length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns the quaternion norm `r² + i² + j² + k²`.
    ///
    /// Note that this is the *squared* magnitude, not the Euclidean length. It is the value that
    /// [`Quaternion::inverse`] and quaternion division divide by.
    pub fn norm(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Returns the conjugate of this quaternion, which has the vector part negated.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [i, j, k, r] = self.vec.into_array();
        Self::new(r, -i, -j, -k)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// `q * q.inverse()` equals [`Quaternion::IDENTITY`] for every non-zero `q`. For unit
    /// quaternions the inverse equals the [`Quaternion::conjugate`].
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() / self.norm()
    }

    /// Computes the rotation matrix that rotates vectors the same way as this quaternion.
    ///
    /// `self` is expected to have unit length; for any other quaternion the matrix also scales.
    pub fn to_mat(&self) -> Matrix<T, 3, 3>
    where
        T: Number,
    {
        let [i, j, k, r] = self.vec.into_array();
        let one = T::ONE;
        let two = one + one;
        Matrix::from_rows([
            [
                one - two * (j * j + k * k),
                two * (i * j - r * k),
                two * (i * k + r * j),
            ],
            [
                two * (i * j + r * k),
                one - two * (i * i + k * k),
                two * (j * k - r * i),
            ],
            [
                two * (i * k - r * j),
                two * (j * k + r * i),
                one - two * (i * i + j * j),
            ],
        ])
    }

    /// Recovers a quaternion from a rotation matrix.
    ///
    /// Branches on the trace and the largest diagonal entry (Shepperd's method), so that the
    /// divisor stays well away from zero for every input rotation.
    ///
    /// The result has unit length but is only determined up to sign: `q` and `-q` describe the
    /// same rotation, and either may be returned.
    pub fn from_mat(mat: &Matrix<T, 3, 3>) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let one = T::ONE;
        let two = one + one;
        let four = two * two;
        let [m00, m01, m02] = mat[0].into_array();
        let [m10, m11, m12] = mat[1].into_array();
        let [m20, m21, m22] = mat[2].into_array();

        let trace = m00 + m11 + m22;
        if trace > T::ZERO {
            let s = (trace + one).sqrt() * two; // s = 4r
            Self::new(
                s / four,
                (m21 - m12) / s,
                (m02 - m20) / s,
                (m10 - m01) / s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (one + m00 - m11 - m22).sqrt() * two; // s = 4i
            Self::new(
                (m21 - m12) / s,
                s / four,
                (m01 + m10) / s,
                (m02 + m20) / s,
            )
        } else if m11 > m22 {
            let s = (one + m11 - m00 - m22).sqrt() * two; // s = 4j
            Self::new(
                (m02 - m20) / s,
                (m01 + m10) / s,
                s / four,
                (m12 + m21) / s,
            )
        } else {
            let s = (one + m22 - m00 - m11).sqrt() * two; // s = 4k
            Self::new(
                (m10 - m01) / s,
                (m02 + m20) / s,
                (m12 + m21) / s,
                s / four,
            )
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("i", &self.i)
            .field("j", &self.j)
            .field("k", &self.k)
            .field("r", &self.r)
            .finish()
    }
}

/// Formats the quaternion in polynomial form, like `1 + 2i + 3j + 4k`.
impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.r, self.i, self.j, self.k)
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec3, Mat3, Mat3d, Vec3d};

    use super::*;

    #[test]
    fn units() {
        type Q = Quaternion<i32>;

        assert_eq!(Q::I * Q::J, Q::K);
        assert_eq!(Q::J * Q::K, Q::I);
        assert_eq!(Q::K * Q::I, Q::J);
        assert_eq!(Q::I * Q::I, -Q::IDENTITY);
        assert_eq!(Q::J * Q::J, -Q::IDENTITY);
        assert_eq!(Q::K * Q::K, -Q::IDENTITY);

        assert_eq!(Q::default(), Q::IDENTITY);
        assert_eq!(Q::from_real(1), Q::IDENTITY);
        assert_eq!(Q::ZERO, Q::new(0, 0, 0, 0));
    }

    #[test]
    fn hamilton_product() {
        let identity = Quaternion::new(1, 0, 0, 0);
        let i = Quaternion::new(0, 1, 0, 0);
        assert_eq!(identity * i, i);
        assert_eq!(i * identity, i);

        let a = Quaternion::new(1, 2, 3, 4);
        let b = Quaternion::new(5, 6, 7, 8);
        assert_eq!(a * b, Quaternion::new(-60, 12, 30, 24));
        assert_eq!(b * a, Quaternion::new(-60, 20, 14, 32));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn norm_and_inverse() {
        assert_eq!(Quaternion::new(1, 1, 1, 1).norm(), 4);
        assert_eq!(Quaternion::new(1, 2, 3, 4).length2(), 30);
        assert_eq!(
            Quaternion::new(1, 2, 3, 4).conjugate(),
            Quaternion::new(1, -2, -3, -4)
        );
        assert_eq!(Quaternion::new(1.0, 2.0, 2.0, 4.0).length(), 5.0);

        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(q.norm(), 1.0);
        assert_eq!(q.inverse(), q.conjugate());
        assert_eq!(q * q.inverse(), Quaternion::IDENTITY);

        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_approx_eq!(q * q.inverse(), Quatd::IDENTITY).abs(1e-12);
        assert_approx_eq!(q.inverse() * q, Quatd::IDENTITY).abs(1e-12);
    }

    #[test]
    fn division() {
        let identity = Quaternion::new(1, 0, 0, 0);
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q / identity, q);

        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_approx_eq!((a * b) / b, a).abs(1e-12);
        assert_approx_eq!(a / a, Quatd::IDENTITY);
        assert_approx_eq!(Quatd::IDENTITY / a, a.inverse());
    }

    #[test]
    fn component_access() {
        let mut q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.r, 1);
        assert_eq!(q.i, 2);
        assert_eq!(q.j, 3);
        assert_eq!(q.k, 4);
        assert_eq!(q.vector_part(), vec3(2, 3, 4));

        q.r = 9;
        assert_eq!(q, Quaternion::new(9, 2, 3, 4));

        assert_eq!(Quaternion::from_vec(vec4(2, 3, 4, 1)), Quaternion::new(1, 2, 3, 4));
    }

    #[test]
    fn rotation_constructors() {
        let q = Quatd::from_rotation_y(FRAC_PI_2);
        assert_approx_eq!(q, Quaternion::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0)).abs(1e-12);

        assert_approx_eq!(Quatd::from_axis_angle(Vec3d::Z, PI), Quatd::K);
        assert_approx_eq!(
            Quatd::from_axis_angle(Vec3d::X, 0.7),
            Quatd::from_rotation_x(0.7)
        );
        assert_approx_eq!(
            Quatd::from_rotation_xyz(0.1, 0.2, 0.3),
            Quatd::from_rotation_x(0.1)
                * Quatd::from_rotation_y(0.2)
                * Quatd::from_rotation_z(0.3)
        );

        assert_approx_eq!(Quatd::from_rotation_z(0.4).length(), 1.0).abs(1e-12);
    }

    #[test]
    fn rotation_matrix() {
        assert_eq!(Quaternion::<i32>::IDENTITY.to_mat(), Mat3::<i32>::IDENTITY);
        assert_eq!(
            Quaternion::new(0, 0, 0, 1).to_mat(),
            Matrix::from_rows([[-1, 0, 0], [0, -1, 0], [0, 0, 1]])
        );

        // Rotating the X axis a quarter turn around the Y axis points it down the negative Z
        // axis.
        let m = Quatd::from_rotation_y(FRAC_PI_2).to_mat();
        assert_approx_eq!(m * Vec3d::X, -Vec3d::Z).abs(1e-12);
        assert_approx_eq!(m * Vec3d::Y, Vec3d::Y).abs(1e-12);
        assert_approx_eq!(m * Vec3d::Z, Vec3d::X).abs(1e-12);
    }

    #[test]
    fn matrix_branches() {
        assert_eq!(Quatd::from_mat(&Mat3d::IDENTITY), Quatd::IDENTITY);

        // Half turns around the coordinate axes exercise the three largest-diagonal branches.
        let half_turn_x = Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert_eq!(Quatd::from_mat(&half_turn_x), Quatd::I);
        let half_turn_y = Matrix::from_rows([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert_eq!(Quatd::from_mat(&half_turn_y), Quatd::J);
        let half_turn_z = Matrix::from_rows([[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(Quatd::from_mat(&half_turn_z), Quatd::K);
    }

    #[test]
    fn matrix_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x2f93_88d3);
        for _ in 0..100 {
            let q = Quaternion::new(
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
            );
            if q.length2() < 0.01 {
                continue;
            }
            let q = q.normalize();

            let p = Quatd::from_mat(&q.to_mat());
            // `q` and `-q` describe the same rotation, so align the signs before comparing.
            let p = if p.vec.dot(q.vec) < 0.0 { -p } else { p };
            assert_approx_eq!(p, q).abs(1e-12);
        }
    }

    #[test]
    fn fmt() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(format!("{q}"), "1 + 2i + 3j + 4k");
        assert_eq!(
            format!("{q:?}"),
            "Quaternion { i: 2, j: 3, k: 4, r: 1 }"
        );
    }
}
