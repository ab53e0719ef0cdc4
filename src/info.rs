//! Compile-time type introspection: readable type names and nesting depth.

use std::borrow::Cow;

use crate::{Complex, Matrix, Quaternion, Vector};

/// Types that know their own source-level name.
///
/// Primitives return their Rust name as a borrowed string; container types render their
/// generic arguments recursively:
///
/// ```
/// # use minalg::*;
/// use minalg::info::TypeName;
///
/// assert_eq!(f32::type_name(), "f32");
/// assert_eq!(Vec3f::type_name(), "Vector<f32, 3>");
/// assert_eq!(Mat4d::type_name(), "Matrix<f64, 4, 4>");
/// ```
pub trait TypeName {
    /// Returns the name of the type, as it would be written in source code.
    fn type_name() -> Cow<'static, str>;
}

macro_rules! primitive_type_name {
    ($($types:ty),+) => {
        $(
            impl TypeName for $types {
                fn type_name() -> Cow<'static, str> {
                    Cow::Borrowed(stringify!($types))
                }
            }
        )+
    };
}
primitive_type_name!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl<T: TypeName, const N: usize> TypeName for Vector<T, N> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Vector<{}, {N}>", T::type_name()))
    }
}

impl<T: TypeName, const R: usize, const C: usize> TypeName for Matrix<T, R, C> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Matrix<{}, {R}, {C}>", T::type_name()))
    }
}

impl<T: TypeName> TypeName for Quaternion<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Quaternion<{}>", T::type_name()))
    }
}

impl<T: TypeName> TypeName for Complex<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Complex<{}>", T::type_name()))
    }
}

/// Nesting depth and scalar leaf type of a possibly nested value type.
///
/// Scalars have depth 0 and are their own [`Scalar`][Dimension::Scalar]; every level of
/// [`Vector`] nesting adds 1, and a [`Matrix`] adds 2 (it is a vector of row vectors). This
/// is what lets generic code tell a `Vector<f32, 3>` (depth 1) from a
/// `Vector<Vector<f32, 3>, 3>` (depth 2) and recover `f32` from both.
pub trait Dimension {
    /// Nesting depth of this type. 0 for scalars.
    const DIM: usize;
    /// The innermost scalar type, reached by unwrapping every container level.
    type Scalar;
}

macro_rules! scalar_dimension {
    ($($types:ty),+) => {
        $(
            impl Dimension for $types {
                const DIM: usize = 0;
                type Scalar = Self;
            }
        )+
    };
}
scalar_dimension!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl<T: Dimension, const N: usize> Dimension for Vector<T, N> {
    const DIM: usize = T::DIM + 1;
    type Scalar = T::Scalar;
}

impl<T: Dimension, const R: usize, const C: usize> Dimension for Matrix<T, R, C> {
    const DIM: usize = T::DIM + 2;
    type Scalar = T::Scalar;
}

impl<T: Dimension> Dimension for Quaternion<T> {
    const DIM: usize = T::DIM + 1;
    type Scalar = T::Scalar;
}

/// A complex number acts as a scalar: vectors of complex numbers are depth-1 vectors, not
/// nested containers.
impl<T> Dimension for Complex<T> {
    const DIM: usize = 0;
    type Scalar = Self;
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use crate::{Complexd, Mat2x4, Quatf, Vec3f, Vec4d, Vector};

    use super::*;

    #[test]
    fn primitive_names() {
        assert_eq!(bool::type_name(), "bool");
        assert_eq!(u8::type_name(), "u8");
        assert_eq!(f64::type_name(), "f64");
    }

    #[test]
    fn container_names() {
        assert_eq!(Vec3f::type_name(), "Vector<f32, 3>");
        assert_eq!(Vec4d::type_name(), "Vector<f64, 4>");
        assert_eq!(
            <Vector<Vector<i32, 2>, 3>>::type_name(),
            "Vector<Vector<i32, 2>, 3>",
        );
        assert_eq!(<Mat2x4<f32>>::type_name(), "Matrix<f32, 2, 4>");
        assert_eq!(Quatf::type_name(), "Quaternion<f32>");
        assert_eq!(Complexd::type_name(), "Complex<f64>");
    }

    #[test]
    fn depth() {
        assert_eq!(f32::DIM, 0);
        assert_eq!(Vec3f::DIM, 1);
        assert_eq!(<Vector<Vector<f32, 3>, 3>>::DIM, 2);
        assert_eq!(<Mat2x4<f32>>::DIM, 2);
        assert_eq!(Quatf::DIM, 1);
        assert_eq!(Complexd::DIM, 0);
        assert_eq!(<Vector<Complexd, 4>>::DIM, 1);
    }

    #[test]
    fn scalar_leaf() {
        assert_eq!(
            TypeId::of::<<Vector<Vector<f32, 3>, 3> as Dimension>::Scalar>(),
            TypeId::of::<f32>(),
        );
        assert_eq!(
            TypeId::of::<<Mat2x4<f64> as Dimension>::Scalar>(),
            TypeId::of::<f64>(),
        );
        assert_eq!(
            TypeId::of::<<Vector<Complexd, 2> as Dimension>::Scalar>(),
            TypeId::of::<Complexd>(),
        );
    }
}
