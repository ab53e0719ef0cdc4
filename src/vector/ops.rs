//! Implementations of `std::ops` and the comparison traits.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Compare, Mask, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.0 == *other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.0 == **other
    }
}

impl<T, U, const N: usize> ApproxEq<Vector<U, N>> for Vector<T, N>
where
    T: ApproxEq<U>,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Vector<U, N>, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Vector<U, N>, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Vector<U, N>, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

/// Element-wise logical negation.
impl<T: Not, const N: usize> Not for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(|elem| !elem)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l * r)
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> MulAssign<Vector<T, N>> for Vector<T, N>
where
    T: MulAssign,
{
    fn mul_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l / r)
    }
}

/// Element-wise division.
impl<T, const N: usize> DivAssign<Vector<T, N>> for Vector<T, N>
where
    T: DivAssign,
{
    fn div_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Element-wise remainder.
impl<T, const N: usize> Rem<Vector<T, N>> for Vector<T, N>
where
    T: Rem,
{
    type Output = Vector<T::Output, N>;

    fn rem(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l % r)
    }
}

/// Element-wise remainder.
impl<T, const N: usize> RemAssign<Vector<T, N>> for Vector<T, N>
where
    T: RemAssign,
{
    fn rem_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs %= rhs);
    }
}

/// Element-wise bitwise and.
impl<T, const N: usize> BitAnd<Vector<T, N>> for Vector<T, N>
where
    T: BitAnd,
{
    type Output = Vector<T::Output, N>;

    fn bitand(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l & r)
    }
}

/// Element-wise bitwise and.
impl<T, const N: usize> BitAndAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitAndAssign,
{
    fn bitand_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs &= rhs);
    }
}

/// Element-wise bitwise or.
impl<T, const N: usize> BitOr<Vector<T, N>> for Vector<T, N>
where
    T: BitOr,
{
    type Output = Vector<T::Output, N>;

    fn bitor(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l | r)
    }
}

/// Element-wise bitwise or.
impl<T, const N: usize> BitOrAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitOrAssign,
{
    fn bitor_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs |= rhs);
    }
}

/// Element-wise bitwise xor.
impl<T, const N: usize> BitXor<Vector<T, N>> for Vector<T, N>
where
    T: BitXor,
{
    type Output = Vector<T::Output, N>;

    fn bitxor(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l ^ r)
    }
}

/// Element-wise bitwise xor.
impl<T, const N: usize> BitXorAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitXorAssign,
{
    fn bitxor_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs ^= rhs);
    }
}

// NB: supporting the vector-scalar ops below next to the element-wise ops above rules out more
// generic `T: Add<U>` style impls: with both, a nested `Vector<Vector<T, N>, N>` would satisfy
// either signature and the impls would overlap. Every operand therefore shares one element type.

macro_rules! scalar_rhs {
    ($($doc:literal $op:ident, $assign_op:ident, $method:ident, $assign_method:ident;)+) => {
        $(
            #[doc = concat!("Applies the ", $doc, " to each element, with the scalar on the right.")]
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| $op::$method(elem, rhs))
                }
            }

            #[doc = concat!("Applies the ", $doc, " to each element, with the scalar on the right.")]
            impl<T, const N: usize> $assign_op<T> for Vector<T, N>
            where
                T: $assign_op + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.as_mut_slice()
                        .iter_mut()
                        .for_each(|lhs| $assign_op::$assign_method(lhs, rhs));
                }
            }
        )+
    };
}

scalar_rhs! {
    "addition" Add, AddAssign, add, add_assign;
    "subtraction" Sub, SubAssign, sub, sub_assign;
    "multiplication" Mul, MulAssign, mul, mul_assign;
    "division" Div, DivAssign, div, div_assign;
    "remainder" Rem, RemAssign, rem, rem_assign;
    "bitwise and" BitAnd, BitAndAssign, bitand, bitand_assign;
    "bitwise or" BitOr, BitOrAssign, bitor, bitor_assign;
    "bitwise xor" BitXor, BitXorAssign, bitxor, bitxor_assign;
}

// A generic `impl<T> Add<Vector<T, N>> for T` is not allowed (`T` is uncovered), so the
// scalar-on-the-left ops are implemented per primitive type. `macro_rules!` cannot expand two
// independent repetitions against each other, so the macro recurses over the primitive list.
macro_rules! scalar_lhs {
    (: $($op:ident, $method:ident;)+) => {};
    ($prim:ty $(, $rest:ty)*: $($op:ident, $method:ident;)+) => {
        $(
            #[doc = concat!("Broadcasts the left-hand `", stringify!($prim), "` over the vector's elements.")]
            impl<const N: usize> $op<Vector<$prim, N>> for $prim {
                type Output = Vector<$prim, N>;

                fn $method(self, rhs: Vector<$prim, N>) -> Self::Output {
                    rhs.map(|elem| $op::$method(self, elem))
                }
            }
        )+
        scalar_lhs! { $($rest),*: $($op, $method;)+ }
    };
}

scalar_lhs! {
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64:
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
    Rem, rem;
}

scalar_lhs! {
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize:
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
}

/// Reduces a vector of masks: `any` is true when any element is, `every` when all are, through
/// every nesting level.
impl<T: Mask, const N: usize> Mask for Vector<T, N> {
    fn any(self) -> bool {
        self.into_array().into_iter().any(Mask::any)
    }

    fn every(self) -> bool {
        self.into_array().into_iter().all(Mask::every)
    }
}

/// Element-wise comparison, producing a vector of masks.
impl<T, const N: usize> Compare for Vector<T, N>
where
    T: Compare + Copy,
{
    type Mask = Vector<T::Mask, N>;

    fn cmpeq(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpeq(other[i]))
    }

    fn cmpne(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpne(other[i]))
    }

    fn cmplt(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmplt(other[i]))
    }

    fn cmple(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmple(other[i]))
    }

    fn cmpgt(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpgt(other[i]))
    }

    fn cmpge(self, other: Self) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpge(other[i]))
    }
}

/// Compares each element against a single scalar.
impl<T, const N: usize> Compare<T> for Vector<T, N>
where
    T: Compare + Copy,
{
    type Mask = Vector<T::Mask, N>;

    fn cmpeq(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpeq(other))
    }

    fn cmpne(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpne(other))
    }

    fn cmplt(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmplt(other))
    }

    fn cmple(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmple(other))
    }

    fn cmpgt(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpgt(other))
    }

    fn cmpge(self, other: T) -> Self::Mask {
        Vector::from_fn(|i| self[i].cmpge(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec3f};

    use super::*;

    #[test]
    fn elementwise() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(vec3(10, 20, 30) - vec3(1, 2, 3), vec3(9, 18, 27));
        assert_eq!(vec3(1, 2, 3) * vec3(4, 5, 6), vec3(4, 10, 18));
        assert_eq!(vec3(10, 20, 30) / vec3(2, 4, 5), vec3(5, 5, 6));
        assert_eq!(vec3(10, 20, 30) % vec3(3, 7, 8), vec3(1, 6, 6));
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
    }

    #[test]
    fn elementwise_assign() {
        let mut v = vec3(1, 2, 3);
        v += vec3(10, 20, 30);
        assert_eq!(v, vec3(11, 22, 33));
        v -= vec3(1, 2, 3);
        assert_eq!(v, vec3(10, 20, 30));
        v *= vec3(2, 2, 2);
        assert_eq!(v, vec3(20, 40, 60));
        v /= vec3(10, 10, 10);
        assert_eq!(v, vec3(2, 4, 6));
        v %= vec3(2, 3, 4);
        assert_eq!(v, vec3(0, 1, 2));
    }

    #[test]
    fn bitwise() {
        assert_eq!(vec2(0b1100, 0b1010) & vec2(0b1010, 0b1010), vec2(0b1000, 0b1010));
        assert_eq!(vec2(0b1100, 0b1010) | vec2(0b0011, 0b0101), vec2(0b1111, 0b1111));
        assert_eq!(vec2(0b1100, 0b1010) ^ vec2(0b1010, 0b1010), vec2(0b0110, 0b0000));
        assert_eq!(!vec2(true, false), vec2(false, true));

        let mut v = vec2(0b1100u8, 0b1010);
        v &= vec2(0b1010, 0b1111);
        v |= vec2(0b0001, 0b0000);
        v ^= vec2(0b1111, 0b1111);
        assert_eq!(v, vec2(0b0110, 0b0101));
    }

    #[test]
    fn scalar_rhs() {
        assert_eq!(vec3(1, 2, 3) + 10, vec3(11, 12, 13));
        assert_eq!(vec3(1, 2, 3) - 1, vec3(0, 1, 2));
        assert_eq!(vec3(1, 2, 3) * 2, vec3(2, 4, 6));
        assert_eq!(vec3(10, 20, 30) / 10, vec3(1, 2, 3));
        assert_eq!(vec3(10, 21, 32) % 10, vec3(0, 1, 2));
        assert_eq!(vec2(0b1100, 0b1010) & 0b1010, vec2(0b1000, 0b1010));
        assert_eq!(vec2(0b1100, 0b1010) | 0b0001, vec2(0b1101, 0b1011));
        assert_eq!(vec2(0b1100, 0b1010) ^ 0b1111, vec2(0b0011, 0b0101));

        let mut v = vec3(1.0, 2.0, 3.0);
        v *= 2.0;
        assert_eq!(v, vec3(2.0, 4.0, 6.0));
        v += 1.0;
        assert_eq!(v, vec3(3.0, 5.0, 7.0));
        v -= 3.0;
        v /= 2.0;
        assert_eq!(v, vec3(0.0, 1.0, 2.0));
    }

    #[test]
    fn scalar_lhs() {
        assert_eq!(10 + vec3(1, 2, 3), vec3(11, 12, 13));
        assert_eq!(10 - vec3(1, 2, 3), vec3(9, 8, 7));
        assert_eq!(2.0 * vec3(1.0, 2.0, 3.0), vec3(2.0, 4.0, 6.0));
        assert_eq!(12 / vec3(1, 2, 3), vec3(12, 6, 4));
        assert_eq!(7 % vec3(2, 3, 4), vec3(1, 1, 3));
        assert_eq!(0b1010 & vec2(0b1100, 0b1010), vec2(0b1000, 0b1010));
        assert_eq!(true ^ vec2(true, false), vec2(false, true));
    }

    #[test]
    fn mixed_comparisons() {
        assert_eq!(Vec3f::X, [1.0, 0.0, 0.0]);
        assert_eq!([1.0, 0.0, 0.0], Vec3f::X);
        assert_eq!(Vec3f::X, [1.0, 0.0, 0.0][..]);
        assert_eq!(Vec3f::X, &[1.0, 0.0, 0.0][..]);
    }
}
