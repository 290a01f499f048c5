// Copyright 2025 Cowboy AI, LLC.

//! Functors over unary container kinds
//!
//! A functor maps the contents of a container through a function while
//! preserving the container's shape. The higher-kinded part - "the same
//! container kind, at a different element type" - is encoded with a generic
//! associated type: `Wrapped<B>` names `F<B>` for the implementing `F<A>`.

use std::marker::PhantomData;

use crate::morphism::Morphism;

/// A container kind that supports mapping over its contents.
///
/// # Laws
///
/// Not enforced at runtime, but required of every instance:
///
/// 1. Identity: `fa.map(|x| x) == fa`
/// 2. Composition: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
pub trait Functor {
    /// The element type of this container
    type Unwrapped;

    /// The same container kind at a different element type
    type Wrapped<B>: Functor<Unwrapped = B>;

    /// Map a function over the contents, preserving the shape
    fn map<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        Self: Sized,
        F: FnMut(Self::Unwrapped) -> B;
}

/// The ordered-sequence functor: `map` applies the function to each element
/// in order, preserving length and order.
impl<A> Functor for Vec<A> {
    type Unwrapped = A;
    type Wrapped<B> = Vec<B>;

    fn map<B, F>(self, f: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(f).collect()
    }
}

/// The optional functor: `map` transforms the element when present.
impl<A> Functor for Option<A> {
    type Unwrapped = A;
    type Wrapped<B> = Option<B>;

    fn map<B, F>(self, mut f: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Some(a) => Some(f(a)),
            None => None,
        }
    }
}

/// The identity functor: the container *is* the value.
///
/// Rust impl coherence rules out a blanket `impl Functor for A`, so the
/// bare value is carried in a transparent newtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Unwrap the carried value
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Functor for Identity<A> {
    type Unwrapped = A;
    type Wrapped<B> = Identity<B>;

    fn map<B, F>(self, mut f: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(f(self.0))
    }
}

/// An endofunctor action viewed as a morphism `F<A> ~> F<B>`.
///
/// Fixing the element function turns a functor's `map` into a morphism
/// between container objects, one of the morphism kinds a
/// [`crate::monoid::MonoidInCategory`] can be stated against.
pub struct MapMorphism<Fa, B, F> {
    label: String,
    f: F,
    _phantom: PhantomData<fn(Fa) -> B>,
}

impl<Fa, B, F> MapMorphism<Fa, B, F>
where
    Fa: Functor,
    F: Fn(Fa::Unwrapped) -> B,
{
    /// Lift an element function to a morphism between containers
    ///
    /// # Arguments
    /// * `label` - Short name used by `description`
    /// * `f` - The element-level function to map
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
            _phantom: PhantomData,
        }
    }
}

impl<Fa, B, F> Morphism for MapMorphism<Fa, B, F>
where
    Fa: Functor,
    F: Fn(Fa::Unwrapped) -> B,
{
    type Source = Fa;
    type Target = Fa::Wrapped<B>;

    fn apply(&self, source: Fa) -> Fa::Wrapped<B> {
        source.map(&self.f)
    }

    fn description(&self) -> String {
        format!("map[{}]", self.label)
    }
}
