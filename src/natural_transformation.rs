// Copyright 2025 Cowboy AI, LLC.

//! Natural transformations between functors
//!
//! A natural transformation converts a container of one functor kind into a
//! container of another, uniformly in the element type: one `transform`
//! body serves every `A`. Its component at a concrete element type is an
//! ordinary morphism `F<A> ~> G<A>` (see [`Component`]).

use std::marker::PhantomData;

use crate::functor::Functor;
use crate::morphism::Morphism;

/// A uniform conversion from one functor kind to another.
///
/// # Law (naturality)
///
/// Not enforced at runtime, but required of every instance: for every
/// element function `f: A -> B`,
///
/// ```text
/// nt.transform(fa.map(f)) == nt.transform(fa).map(f)
/// ```
///
/// i.e. mapping then transforming commutes with transforming then mapping.
pub trait NaturalTransformation {
    /// Source functor kind
    type Source<A>: Functor<Unwrapped = A>;

    /// Target functor kind
    type Target<A>: Functor<Unwrapped = A>;

    /// Convert a source container into a target container.
    ///
    /// The implementation must be uniform in `A`: the same logic for every
    /// element type, never specialized per type.
    fn transform<A>(&self, fa: Self::Source<A>) -> Self::Target<A>;
}

/// Sequence-to-optional transformation: the first element if the sequence
/// is non-empty, `None` otherwise. Remaining elements are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Head;

impl NaturalTransformation for Head {
    type Source<A> = Vec<A>;
    type Target<A> = Option<A>;

    fn transform<A>(&self, fa: Vec<A>) -> Option<A> {
        fa.into_iter().next()
    }
}

/// The component of a natural transformation at a fixed element type.
///
/// This is the "natural transformation" morphism kind: a morphism whose
/// source and target objects are containers of the same element type under
/// different functors.
pub struct Component<N, A> {
    transformation: N,
    _phantom: PhantomData<fn() -> A>,
}

impl<N, A> Component<N, A>
where
    N: NaturalTransformation,
{
    /// Fix the transformation's component at element type `A`
    pub fn new(transformation: N) -> Self {
        Self {
            transformation,
            _phantom: PhantomData,
        }
    }
}

impl<N, A> Morphism for Component<N, A>
where
    N: NaturalTransformation,
{
    type Source = N::Source<A>;
    type Target = N::Target<A>;

    fn apply(&self, source: Self::Source) -> Self::Target {
        self.transformation.transform(source)
    }

    fn description(&self) -> String {
        format!("component at {}", std::any::type_name::<A>())
    }
}
