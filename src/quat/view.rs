//! Named-field view into quaternions.
//!
//! [`Quaternion`]s dereference to [`IJKR`], giving access to the imaginary components and the
//! real part as `i`/`j`/`k`/`r` fields.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::Quaternion;

/// View of a quaternion's components.
#[repr(C)]
pub struct IJKR<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub r: T,
    _priv: (), // prevent external construction
}

// The view is `repr(C)` with only `T` fields (`_priv` is zero-sized), so it has the same layout
// as `[T; 4]` and therefore as `Quaternion<T>`.

impl<T> Deref for Quaternion<T> {
    type Target = IJKR<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quaternion<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
