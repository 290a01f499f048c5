// Copyright 2025 Cowboy AI, LLC.

//! Law checking for algebraic instances
//!
//! The monoid, functor, and naturality laws are documented invariants of
//! their traits - nothing in this crate enforces them during construction.
//! The checkers here make the laws testable against concrete inputs: each
//! evaluates both sides of a law equation and reports a mismatch as a
//! [`LawError`]. They are meant to be driven from tests, typically with
//! property-based input generation.

use std::fmt::Debug;

use thiserror::Error;
use tracing::debug;

use crate::functor::Functor;
use crate::monoid::Monoid;
use crate::natural_transformation::NaturalTransformation;

/// A law equation whose two sides evaluated to different values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LawError {
    /// `empty.combine(a)` was not `a`
    #[error("monoid left identity violated: empty ⊕ {operand} = {result}")]
    LeftIdentity {
        /// The operand `a`
        operand: String,
        /// What `empty ⊕ a` evaluated to
        result: String,
    },

    /// `a.combine(empty)` was not `a`
    #[error("monoid right identity violated: {operand} ⊕ empty = {result}")]
    RightIdentity {
        /// The operand `a`
        operand: String,
        /// What `a ⊕ empty` evaluated to
        result: String,
    },

    /// `(a ⊕ b) ⊕ c` and `a ⊕ (b ⊕ c)` disagreed
    #[error("monoid associativity violated: {left} != {right}")]
    Associativity {
        /// `(a ⊕ b) ⊕ c`
        left: String,
        /// `a ⊕ (b ⊕ c)`
        right: String,
    },

    /// Mapping the identity function changed the container
    #[error("functor identity violated: map(id) produced {result}, expected {expected}")]
    FunctorIdentity {
        /// What `fa.map(|x| x)` evaluated to
        result: String,
        /// The original container
        expected: String,
    },

    /// Mapping stepwise and mapping the fused function disagreed
    #[error("functor composition violated: {stepwise} != {fused}")]
    FunctorComposition {
        /// `fa.map(f).map(g)`
        stepwise: String,
        /// `fa.map(g ∘ f)`
        fused: String,
    },

    /// The naturality square did not commute
    #[error("naturality violated: transform(map(fa)) = {left}, map(transform(fa)) = {right}")]
    Naturality {
        /// `nt.transform(fa.map(f))`
        left: String,
        /// `nt.transform(fa).map(f)`
        right: String,
    },
}

/// Result alias for law checks
pub type LawResult<T = ()> = Result<T, LawError>;

/// Check both monoid identity laws for a sample carrier value.
pub fn monoid_identity<M>(a: M) -> LawResult
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let left = M::empty().combine(a.clone());
    if left != a {
        debug!(law = "monoid_left_identity", operand = ?a, result = ?left, "law check failed");
        return Err(LawError::LeftIdentity {
            operand: format!("{a:?}"),
            result: format!("{left:?}"),
        });
    }

    let right = a.clone().combine(M::empty());
    if right != a {
        debug!(law = "monoid_right_identity", operand = ?a, result = ?right, "law check failed");
        return Err(LawError::RightIdentity {
            operand: format!("{a:?}"),
            result: format!("{right:?}"),
        });
    }

    Ok(())
}

/// Check monoid associativity for a sample triple.
pub fn monoid_associativity<M>(a: M, b: M, c: M) -> LawResult
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    if left != right {
        debug!(law = "monoid_associativity", ?left, ?right, "law check failed");
        return Err(LawError::Associativity {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        });
    }

    Ok(())
}

/// Check the functor identity law for a sample container.
pub fn functor_identity<Fa, A>(fa: Fa) -> LawResult
where
    Fa: Functor<Unwrapped = A, Wrapped<A> = Fa> + Clone + PartialEq + Debug,
{
    let mapped = fa.clone().map(|a| a);
    if mapped != fa {
        debug!(law = "functor_identity", result = ?mapped, expected = ?fa, "law check failed");
        return Err(LawError::FunctorIdentity {
            result: format!("{mapped:?}"),
            expected: format!("{fa:?}"),
        });
    }

    Ok(())
}

/// Check the functor composition law for a sample container and a pair of
/// element functions.
pub fn functor_composition<Fa, A, B, C, F, G>(fa: Fa, f: F, g: G) -> LawResult
where
    Fa: Functor<Unwrapped = A> + Clone,
    Fa::Wrapped<B>: Functor<Unwrapped = B, Wrapped<C> = Fa::Wrapped<C>>,
    Fa::Wrapped<C>: PartialEq + Debug,
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    let stepwise = fa.clone().map(&f).map(&g);
    let fused = fa.map(|a| g(f(a)));
    if stepwise != fused {
        debug!(law = "functor_composition", ?stepwise, ?fused, "law check failed");
        return Err(LawError::FunctorComposition {
            stepwise: format!("{stepwise:?}"),
            fused: format!("{fused:?}"),
        });
    }

    Ok(())
}

/// Check that the naturality square commutes for a sample container and
/// element function: transform-after-map against map-after-transform.
pub fn naturality<N, A, B, F>(nt: &N, fa: N::Source<A>, f: F) -> LawResult
where
    N: NaturalTransformation,
    N::Source<A>: Functor<Unwrapped = A, Wrapped<B> = N::Source<B>> + Clone,
    N::Target<A>: Functor<Unwrapped = A, Wrapped<B> = N::Target<B>>,
    N::Target<B>: PartialEq + Debug,
    F: Fn(A) -> B,
{
    let left = nt.transform(fa.clone().map(&f));
    let right = nt.transform(fa).map(&f);
    if left != right {
        debug!(law = "naturality", ?left, ?right, "law check failed");
        return Err(LawError::Naturality {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        });
    }

    Ok(())
}
