// Copyright 2025 Cowboy AI, LLC.

//! # CIM Algebra
//!
//! Categorical algebra building blocks for the Composable Information Machine.
//!
//! This crate provides a small hierarchy of capability traits for stating
//! algebraic structure uniformly over different notions of "mapping":
//! - **Morphism**: a mapping from a source object to a target object
//! - **MonoidInCategory**: a `unit` and a `combine` morphism over a shared
//!   carrier, against any morphism kind
//! - **Monoid**: the classical identity-plus-associative-operation special
//!   case, from which the categorical morphisms are derived
//! - **Functor**: shape-preserving mapping over a container kind, encoded
//!   with generic associated types
//! - **NaturalTransformation**: a uniform, element-type-independent
//!   conversion between functor kinds
//! - **Laws**: checkers that evaluate both sides of the monoid, functor,
//!   and naturality law equations against concrete inputs
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: capability mismatches are compile errors, never
//!    runtime failures - every operation is total on well-typed input
//! 2. **Purity**: no I/O, no shared mutable state, no suspension; every
//!    value is an immutable capability declaration
//! 3. **Explicit Instances**: instances are resolved through trait bounds
//!    at the call site, never through an implicit registry
//! 4. **Laws as Invariants**: the algebraic laws are documented and
//!    checkable, not enforced during construction

#![warn(missing_docs)]

mod functor;
pub mod laws;
mod monoid;
mod morphism;
mod natural_transformation;

// Re-export core types
pub use functor::{Functor, Identity, MapMorphism};
pub use laws::{LawError, LawResult};
pub use monoid::{
    CombineMorphism, DerivedMonoid, Monoid, MonoidInCategory, UnitMorphism,
};
pub use morphism::{FnMorphism, Morphism, MorphismComposition, MorphismIdentity};
pub use natural_transformation::{Component, Head, NaturalTransformation};
