//! Named-field views into short vectors.
//!
//! [`Vector`]s of up to 4 dimensions dereference to these view structs, giving access to their
//! elements as `x`/`y`/`z`/`w` fields. Each view then dereferences further to its color alias
//! (`r`/`g`/`b`/`a`), and 2-vectors additionally to a size alias (`w`/`h`).

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// View of a 1-dimensional vector.
#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

/// View of a 2-dimensional vector.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// View of a 3-dimensional vector.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// View of a 4-dimensional vector.
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

/// Color view of a 1-dimensional vector.
#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (), // prevent external construction
}

/// Color view of a 2-dimensional vector.
#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (), // prevent external construction
}

/// Color view of a 3-dimensional vector.
#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

/// Color view of a 4-dimensional vector.
#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Size view of a 2-dimensional vector.
#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (), // prevent external construction
}

// Every view is `repr(C)` with only `T` fields (`_priv` is zero-sized), so it has the same
// layout as `[T; N]` and therefore as `Vector<T, N>`.
macro_rules! view {
    ($src:ident $(<$n:literal>)? => $view:ident) => {
        impl<T> Deref for $src<T $(, $n)?> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $src<T $(, $n)?> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<1> => X);
view!(Vector<2> => XY);
view!(Vector<3> => XYZ);
view!(Vector<4> => XYZW);
view!(X => R);
view!(XY => RG);
view!(XYZ => RGB);
view!(XYZW => RGBA);
view!(RG => WH);
