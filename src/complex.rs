use std::fmt;

use crate::{Number, One, Sqrt, Zero};

mod ops;

/// A complex number with [`f32`] parts.
pub type Complexf = Complex<f32>;
/// A complex number with [`f64`] parts.
pub type Complexd = Complex<f64>;
/// A complex number with [`i32`] parts.
pub type Complexi = Complex<i32>;

/// A complex number `real + imag·i`.
///
/// `Complex` behaves like a scalar as far as the rest of the crate is concerned: it implements
/// [`Zero`], [`One`], and the field operators, so vectors and matrices over complex elements
/// work like those over any other numeric type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Complex<T> {
    pub real: T,
    pub imag: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> Zero for Complex<T> {
    const ZERO: Self = Self {
        real: T::ZERO,
        imag: T::ZERO,
    };
}

impl<T: Zero + One> One for Complex<T> {
    const ONE: Self = Self {
        real: T::ONE,
        imag: T::ZERO,
    };
}

impl<T: Zero + One> Complex<T> {
    /// The imaginary unit.
    pub const I: Self = Self {
        real: T::ZERO,
        imag: T::ONE,
    };
}

impl<T> Complex<T> {
    /// Creates a complex number from its real and imaginary parts.
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    /// Creates a complex number with imaginary part 0.
    pub fn from_real(real: T) -> Self
    where
        T: Zero,
    {
        Self::new(real, T::ZERO)
    }

    /// Converts both parts to `U`, returning a new complex number.
    ///
    /// This is the widening conversion: it is available whenever `T` losslessly converts
    /// [`Into`] `U`.
    pub fn cast<U>(self) -> Complex<U>
    where
        T: Into<U>,
    {
        Complex::new(self.real.into(), self.imag.into())
    }

    /// Returns the squared modulus `real² + imag²`.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.real * self.real + self.imag * self.imag
    }

    /// Returns the modulus (the distance from the origin of the complex plane).
    #[doc(alias = "modulus", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the multiplicative inverse of this complex number.
    ///
    /// `z * z.inv()` equals [`ONE`][One::ONE] for every non-zero `z`. The inverse of zero
    /// divides by zero, with the usual consequences for the element type.
    pub fn inv(self) -> Self
    where
        T: Number,
    {
        let mod2 = self.length2();
        Self::new(self.real / mod2, -self.imag / mod2)
    }
}

/// Formats the complex number like `3 + 4i`.
impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imag)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2};

    use super::*;

    #[test]
    fn construction() {
        let z = Complex::new(1, 2);
        assert_eq!(z.real, 1);
        assert_eq!(z.imag, 2);
        assert_eq!(Complex::from_real(1), Complex::new(1, 0));
        assert_eq!(Complexi::I, Complex::new(0, 1));
        assert_eq!(Complexi::ZERO, Complex::new(0, 0));
        assert_eq!(Complexi::ONE, Complex::new(1, 0));
        assert_eq!(Complexi::default(), Complexi::ZERO);

        assert_eq!(Complex::new(1i8, 2).cast::<i32>(), Complex::new(1, 2));
        assert_eq!(Complex::new(1u8, 2).cast::<f64>(), Complex::new(1.0, 2.0));
    }

    #[test]
    fn modulus() {
        assert_eq!(Complex::new(3, 4).length2(), 25);
        assert_eq!(Complex::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn inverse() {
        assert_eq!(Complex::new(0.5, 0.0).inv(), Complex::new(2.0, 0.0));
        assert_eq!(Complexd::I.inv(), -Complexd::I);

        let z = Complex::new(1.0, 2.0);
        assert_approx_eq!(z * z.inv(), Complexd::ONE).abs(1e-12);
        assert_approx_eq!(z.inv() * z, Complexd::ONE).abs(1e-12);
    }

    #[test]
    fn complex_vectors() {
        let v = vec2(Complex::new(1, 2), Complex::new(3, 4));
        assert_eq!(v + v, vec2(Complex::new(2, 4), Complex::new(6, 8)));
        assert_eq!(v.dot(v), Complex::new(-10, 28));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Complex::new(1, 2)), "1 + 2i");
        assert_eq!(format!("{}", Complex::new(-5, 10)), "-5 + 10i");
        assert_eq!(
            format!("{:?}", Complex::new(1, 2)),
            "Complex { real: 1, imag: 2 }"
        );
    }
}
