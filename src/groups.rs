use num::traits::{WrappingAdd, WrappingNeg, WrappingSub};

pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Commutativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}
pub trait Invertibility: Magma {
    fn inv(&self, x: Self::Elem) -> Self::Elem;

    #[inline]
    fn sub(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem {
        self.add(lhs, self.inv(rhs))
    }
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

pub trait CommutativeMonoid: Monoid + Commutativity {}
impl<CM: Monoid + Commutativity> CommutativeMonoid for CM {}

pub trait Group: Magma + Associativity + Identity + Invertibility {}
impl<G: Magma + Associativity + Identity + Invertibility> Group for G {}

pub trait AbelianGroup: Group + Commutativity {}
impl<AG: Group + Commutativity> AbelianGroup for AG {}

/// Plain `+` and `-`. Overflow behaves as the element type does.
#[derive(Clone, Copy, Debug)]
pub struct NumAdditiveGroups<T>(std::marker::PhantomData<T>);

impl<T> Default for NumAdditiveGroups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditiveGroups<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditiveGroups<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditiveGroups<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + num::Signed + Clone> Invertibility for NumAdditiveGroups<T> {
    #[inline]
    fn inv(&self, x: T) -> T {
        -x
    }

    #[inline]
    fn sub(&self, lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditiveGroups<T> {}
impl<T: num::Num + Clone> Commutativity for NumAdditiveGroups<T> {}

/// Addition modulo `2^bits` of a primitive integer.
///
/// Every element has an inverse (`wrapping_neg`), so unsigned types form an abelian group too.
/// This is what lets a tree of `u64` cells take negative deltas: `x + (-d as u64)` wraps back to
/// `x - d`.
#[derive(Clone, Copy, Debug)]
pub struct WrappingAdditive<T>(std::marker::PhantomData<T>);

impl<T> Default for WrappingAdditive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WrappingAdditive<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::PrimInt + WrappingAdd> Magma for WrappingAdditive<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs.wrapping_add(&rhs)
    }
}
impl<T: num::PrimInt + WrappingAdd> Identity for WrappingAdditive<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::PrimInt + WrappingAdd + WrappingSub + WrappingNeg> Invertibility
    for WrappingAdditive<T>
{
    #[inline]
    fn inv(&self, x: T) -> T {
        x.wrapping_neg()
    }

    #[inline]
    fn sub(&self, lhs: T, rhs: T) -> T {
        lhs.wrapping_sub(&rhs)
    }
}
impl<T: num::PrimInt + WrappingAdd> Associativity for WrappingAdditive<T> {}
impl<T: num::PrimInt + WrappingAdd> Commutativity for WrappingAdditive<T> {}
