// Copyright 2025 Cowboy AI, LLC.

//! Monoids, stated internally to a category
//!
//! A monoid in a category is nothing more than two morphisms sharing a
//! carrier object `T`: a `unit` morphism from a distinguished unit object
//! and a `combine` morphism from a distinguished product object. Which
//! notion of "morphism" is in play is left open - plain functions,
//! endofunctor actions, or components of natural transformations all work.
//!
//! The classical single-type monoid (`empty` + an associative binary
//! operation) falls out as the special case where the morphisms are plain
//! functions, the unit object is `()`, and the product object is `(T, T)`.
//! Instead of an inheritance chain, each narrowing is a constructor:
//!
//! - [`MonoidInCategory::new`] - any morphism kind, any objects
//! - [`MonoidInCategory::general`] - plain functions, objects still free
//! - [`MonoidInCategory::functional`] - unit object `()`, product `(T, T)`
//! - [`MonoidInCategory::from_monoid`] - both morphisms derived from a
//!   [`Monoid`] instance

use std::marker::PhantomData;

use crate::morphism::{FnMorphism, Morphism};

/// A monoid internal to a category: a `unit` and a `combine` morphism
/// with a common target, the carrier.
///
/// This layer performs no computation of its own and does not verify the
/// monoid laws; it is a structural contract. The laws (identity and
/// associativity, once the morphisms are interpreted concretely) are
/// documented invariants, checkable through [`crate::laws`].
pub struct MonoidInCategory<U, C> {
    /// Morphism from the unit object to the carrier
    pub unit: U,
    /// Morphism from the product object to the carrier
    pub combine: C,
}

impl<U, C> MonoidInCategory<U, C>
where
    U: Morphism,
    C: Morphism<Target = U::Target>,
{
    /// Create a monoid from explicit `unit` and `combine` morphisms.
    ///
    /// The morphisms may be of any kind; the only structural requirement
    /// is that they share a carrier, enforced by the `Target` bound.
    pub fn new(unit: U, combine: C) -> Self {
        Self { unit, combine }
    }
}

impl<UnitObj, ProductObj, T, F, G>
    MonoidInCategory<FnMorphism<UnitObj, T, F>, FnMorphism<ProductObj, T, G>>
where
    F: Fn(UnitObj) -> T,
    G: Fn(ProductObj) -> T,
{
    /// Create a monoid whose morphism kind is fixed to plain functions,
    /// with the unit and product objects still free.
    pub fn general(unit: F, combine: G) -> Self {
        Self::new(
            FnMorphism::new("unit", unit),
            FnMorphism::new("combine", combine),
        )
    }
}

impl<T, F, G> MonoidInCategory<FnMorphism<(), T, F>, FnMorphism<(T, T), T, G>>
where
    F: Fn(()) -> T,
    G: Fn((T, T)) -> T,
{
    /// Create a function-kind monoid with the unit object fixed to `()`
    /// and the product object fixed to the ordered pair `(T, T)`.
    pub fn functional(unit: F, combine: G) -> Self {
        Self::general(unit, combine)
    }
}

/// A monoid whose morphisms are derived from a [`Monoid`] instance
pub type DerivedMonoid<M> = MonoidInCategory<UnitMorphism<M>, CombineMorphism<M>>;

impl<M> MonoidInCategory<UnitMorphism<M>, CombineMorphism<M>>
where
    M: Monoid,
{
    /// Derive both morphisms from a [`Monoid`] instance:
    /// `unit` discards its argument and produces `M::empty()`;
    /// `combine` uncurries [`Monoid::combine`] over the pair.
    pub fn from_monoid() -> Self {
        Self::new(UnitMorphism::new(), CombineMorphism::new())
    }
}

/// A classical monoid over a single carrier type.
///
/// Implementors supply only the identity element and the binary operation;
/// the categorical `unit`/`combine` morphisms are derived via
/// [`MonoidInCategory::from_monoid`]. Instances are resolved through
/// ordinary trait bounds at the call site.
///
/// # Laws
///
/// Not enforced at runtime, but required of every instance:
///
/// 1. Left identity: `M::empty().combine(a) == a`
/// 2. Right identity: `a.combine(M::empty()) == a`
/// 3. Associativity: `a.combine(b).combine(c) == a.combine(b.combine(c))`
pub trait Monoid: Sized {
    /// The identity element
    fn empty() -> Self;

    /// The associative binary operation
    fn combine(self, other: Self) -> Self;
}

/// Integer addition: `empty = 0`, `combine = +`.
impl Monoid for i64 {
    fn empty() -> Self {
        0
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }
}

/// The derived unit morphism `() -> M` of a [`Monoid`] instance
pub struct UnitMorphism<M> {
    _phantom: PhantomData<fn() -> M>,
}

impl<M> UnitMorphism<M> {
    /// Create the unit morphism for `M`
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<M> Default for UnitMorphism<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Morphism for UnitMorphism<M>
where
    M: Monoid,
{
    type Source = ();
    type Target = M;

    fn apply(&self, _source: ()) -> M {
        M::empty()
    }

    fn description(&self) -> String {
        "unit".to_string()
    }
}

/// The derived combine morphism `(M, M) -> M` of a [`Monoid`] instance
pub struct CombineMorphism<M> {
    _phantom: PhantomData<fn() -> M>,
}

impl<M> CombineMorphism<M> {
    /// Create the combine morphism for `M`
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<M> Default for CombineMorphism<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Morphism for CombineMorphism<M>
where
    M: Monoid,
{
    type Source = (M, M);
    type Target = M;

    fn apply(&self, (a, b): (M, M)) -> M {
        a.combine(b)
    }

    fn description(&self) -> String {
        "combine".to_string()
    }
}
