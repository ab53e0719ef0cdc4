use std::{array, fmt, slice};

use crate::{MinMax, Number, One, Sqrt, Trig, Zero};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - Mixed tuples of scalars and shorter vectors convert into a vector via [`From`], as long as
///   their flattened element count matches exactly: `Vec3::from((vec2(1, 2), 3))`.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
///   - Aliases `r`, `g`, `b`, and `a` are also provided, as well as aliases `w` and `h` for
///     2-dimensional vectors.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Out-of-range indices
///   panic, in every build profile.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`IntoIterator`] is implemented for vectors and their references.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

/// Vectors of [`Zero`] elements have a zero value themselves, so nested vectors can be used
/// wherever a [`Number`] is expected.
impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Vector([T::ZERO; N]);
}

/// The all-ones vector, the multiplicative identity of element-wise multiplication.
impl<T: One, const N: usize> One for Vector<T, N> {
    const ONE: Self = Vector([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of elements in this vector type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// assert_eq!(Vec3f::LEN, 3);
    /// assert_eq!(Vector::<u8, 7>::LEN, 7);
    /// ```
    pub const LEN: usize = N;

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Converts each element to `U`, returning a new vector.
    ///
    /// This is the element-wise widening conversion: it is available whenever `T` losslessly
    /// converts [`Into`] `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec3(1u8, 2, 3).cast::<u32>();
    /// assert_eq!(v, vec3(1u32, 2, 3));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Copies a contiguous subrange of this vector into a new, shorter vector.
    ///
    /// The range is given as const parameters and checked at compile time:
    /// `START + LEN` must not exceed the vector's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.slice::<0, 2>(), vec2(1, 2));
    /// assert_eq!(v.slice::<1, 3>(), vec3(2, 3, 4));
    /// ```
    ///
    /// A range that overruns the vector fails to compile:
    ///
    /// ```compile_fail
    /// # use minalg::*;
    /// let v = vec3(1, 2, 3);
    /// let _ = v.slice::<2, 2>();
    /// ```
    pub fn slice<const START: usize, const LEN: usize>(&self) -> Vector<T, LEN>
    where
        T: Copy,
    {
        const {
            assert!(START + LEN <= N, "slice range out of bounds");
        }
        Vector::from_fn(|i| self.0[START + i])
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a [`Vector`] that borrows each element of `self`.
    ///
    /// *Note*: [`Vector`] also implements [`AsRef`]. This method will typically be preferred over
    /// those impls. Use fully-qualified syntax to invoke the trait methods if needed.
    #[inline]
    pub fn as_ref(&self) -> Vector<&T, N> {
        Vector::from_fn(|i| &self[i])
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it divides by zero, which for float
    /// elements yields a vector of NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::angle_to`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    ///
    /// ```
    /// # use minalg::*;
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
    /// assert_approx_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(b.angle_to(a), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Computes the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let a = vec3(1.0, 2.0, 3.0);
    /// let b = vec3(4.0, 5.0, 6.0);
    /// assert_approx_eq!(a.distance_to(b), 5.196152422706632);
    /// ```
    pub fn distance_to(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Computes the element-wise absolute value of `self`.
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Computes the element-wise absolute value of `self`.
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }
}

impl<T> Vector<T, 1> {
    /// Removes the last element of this vector, yielding a vector with zero elements.
    pub fn truncate(self) -> Vector<T, 0> {
        [].into()
    }

    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec1(-1.0).extend(5.0);
    /// assert_eq!(v, vec2(-1.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Flattening construction: a 2-vector followed by a scalar.
impl<T> From<(Vec2<T>, T)> for Vector<T, 3> {
    #[inline]
    fn from((xy, z): (Vec2<T>, T)) -> Self {
        let [x, y] = xy.into_array();
        Self([x, y, z])
    }
}

/// Flattening construction: a scalar followed by a 2-vector.
impl<T> From<(T, Vec2<T>)> for Vector<T, 3> {
    #[inline]
    fn from((x, yz): (T, Vec2<T>)) -> Self {
        let [y, z] = yz.into_array();
        Self([x, y, z])
    }
}

/// Flattening construction: a 3-vector followed by a scalar.
impl<T> From<(Vec3<T>, T)> for Vector<T, 4> {
    #[inline]
    fn from((xyz, w): (Vec3<T>, T)) -> Self {
        let [x, y, z] = xyz.into_array();
        Self([x, y, z, w])
    }
}

/// Flattening construction: a scalar followed by a 3-vector.
impl<T> From<(T, Vec3<T>)> for Vector<T, 4> {
    #[inline]
    fn from((x, yzw): (T, Vec3<T>)) -> Self {
        let [y, z, w] = yzw.into_array();
        Self([x, y, z, w])
    }
}

/// Flattening construction: two 2-vectors.
impl<T> From<(Vec2<T>, Vec2<T>)> for Vector<T, 4> {
    #[inline]
    fn from((xy, zw): (Vec2<T>, Vec2<T>)) -> Self {
        let [x, y] = xy.into_array();
        let [z, w] = zw.into_array();
        Self([x, y, z, w])
    }
}

/// Flattening construction: a 2-vector followed by two scalars.
impl<T> From<(Vec2<T>, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((xy, z, w): (Vec2<T>, T, T)) -> Self {
        let [x, y] = xy.into_array();
        Self([x, y, z, w])
    }
}

/// Flattening construction: a 2-vector between two scalars.
impl<T> From<(T, Vec2<T>, T)> for Vector<T, 4> {
    #[inline]
    fn from((x, yz, w): (T, Vec2<T>, T)) -> Self {
        let [y, z] = yz.into_array();
        Self([x, y, z, w])
    }
}

/// Flattening construction: two scalars followed by a 2-vector.
impl<T> From<(T, T, Vec2<T>)> for Vector<T, 4> {
    #[inline]
    fn from((x, y, zw): (T, T, Vec2<T>)) -> Self {
        let [z, w] = zw.into_array();
        Self([x, y, z, w])
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, Compare, Mask};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);
        assert_eq!(v.w, 0);
        assert_eq!(v.h, 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v.w, 777);
        assert_eq!(v[0], 777);
        v.h = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.g, 9);
        assert_eq!(v[1], 9);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let v = vec2(1, 2);
        let _ = v[2];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn flattening() {
        assert_eq!(Vec3::from((vec2(1, 2), 3)), vec3(1, 2, 3));
        assert_eq!(Vec3::from((1, vec2(2, 3))), vec3(1, 2, 3));
        assert_eq!(Vec4::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, vec3(2, 3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((vec2(1, 2), vec2(3, 4))), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((vec2(1, 2), 3, 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, vec2(2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((1, 2, vec2(3, 4))), vec4(1, 2, 3, 4));
    }

    #[test]
    fn slicing() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.slice::<0, 4>(), v);
        assert_eq!(v.slice::<0, 2>(), vec2(1, 2));
        assert_eq!(v.slice::<2, 2>(), vec2(3, 4));
        assert_eq!(v.slice::<1, 1>(), vec1(2));
        assert_eq!(v.slice::<3, 1>(), vec1(4));
    }

    #[test]
    fn casting() {
        assert_eq!(vec3(1u8, 2, 3).cast::<i32>(), vec3(1, 2, 3));
        assert_eq!(vec2(1u8, 2).cast::<f32>(), vec2(1.0, 2.0));
    }

    #[test]
    fn absolute_value() {
        assert_eq!(vec3(-1.0f32, 2.0, -0.5).abs(), vec3(1.0, 2.0, 0.5));
        assert_eq!(vec2(-1.5f64, 0.0).abs(), vec2(1.5, 0.0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));

        let u = vec3(1.5, -2.0, 0.5);
        let v = vec3(0.25, 3.0, -1.0);
        assert_eq!(u.cross(v), -(v.cross(u)));
        assert_approx_eq!(u.dot(u.cross(v)), 0.0);
        assert_approx_eq!(v.dot(u.cross(v)), 0.0);
    }

    #[test]
    fn lengths() {
        assert_approx_eq!(vec3(1.0, 2.0, 3.0).length(), 3.7416573867739413);
        assert_eq!(vec3(1, 2, 3).length2(), 14);
        assert_approx_eq!(
            vec3(1.0, 2.0, 3.0).distance_to(vec3(4.0, 5.0, 6.0)),
            5.196152422706632
        );
    }

    #[test]
    fn normalization() {
        let n = vec3(1.0, 2.0, 3.0).normalize();
        assert_approx_eq!(
            n,
            vec3(0.2672612419124244, 0.5345224838248488, 0.8017837257372732)
        );
        assert_approx_eq!(n.length(), 1.0);
        assert_approx_eq!(vec2(0.0, -3.0).normalize(), vec2(0.0, -1.0));

        let nan = Vec2f::ZERO.normalize();
        assert!(nan.x.is_nan());
        assert!(nan.y.is_nan());
    }

    #[test]
    fn angles() {
        assert_approx_eq!(Vec3f::Y.angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::X.angle_to(Vec3f::Y), TAU / 4.0);

        assert_approx_eq!(Vec3f::Y.angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.angle_to(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(Vec3f::Y.angle_to(-Vec3f::X), TAU / 4.0);

        assert_approx_eq!(vec2(0.0, 2.0).angle_to(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn comparison_masks() {
        let mask = vec3(1, 2, 3).cmpeq(vec3(1, 1, 3));
        assert_eq!(mask, vec3(true, false, true));
        assert!(mask.any());
        assert!(!mask.every());
        assert!(!mask.all());

        assert!(vec3(1, 2, 3).cmple(vec3(1, 2, 4)).every());
        assert!(vec3(1, 2, 3).cmplt(vec3(1, 2, 4)).any());
        assert!(!vec3(1, 2, 3).cmpgt(vec3(3, 3, 3)).any());

        // Broadcast against a scalar.
        assert_eq!(vec3(1, 2, 3).cmpge(2), vec3(false, true, true));
        assert!(vec3(5, 5, 5).cmpeq(5).every());
    }

    #[test]
    fn nested_reduction() {
        let m = Vector::from([vec2(1, 2), vec2(3, 4)]);
        let n = Vector::from([vec2(1, 0), vec2(3, 4)]);
        let mask = m.cmpeq(n);
        assert!(mask.any());
        assert!(!mask.every());
        assert!(m.cmpeq(m).every());
    }

    #[test]
    fn nested_arithmetic() {
        let m = Vector::from([vec2(1.0, 2.0), vec2(3.0, 4.0)]);
        let sum = m + m;
        assert_eq!(sum, Vector::from([vec2(2.0, 4.0), vec2(6.0, 8.0)]));
        assert_eq!(m.dot(m), vec2(10.0, 20.0));
    }

    #[test]
    fn truncation() {
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
        assert_eq!(vec2(1, 2).truncate(), vec1(1));
    }

    #[test]
    fn iteration() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.into_iter().sum::<i32>(), 6);
        assert_eq!(v.iter().copied().max(), Some(3));

        let mut v = vec3(1, 2, 3);
        for elem in &mut v {
            *elem *= 2;
        }
        assert_eq!(v, vec3(2, 4, 6));
    }
}
