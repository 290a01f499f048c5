// Copyright 2025 Cowboy AI, LLC.

//! Morphism abstractions
//!
//! A morphism is a structure-preserving mapping from a source object to a
//! target object. The [`Morphism`] trait is deliberately agnostic about what
//! the objects are: implementors range from plain Rust functions
//! ([`FnMorphism`]) to endofunctor actions and components of natural
//! transformations, so the same monoid machinery can be stated against any
//! of these notions of "mapping".

use std::marker::PhantomData;

/// A morphism from a source object to a target object.
///
/// Every morphism is total: given a well-typed source value it always
/// produces a target value. Mismatched compositions are rejected by the
/// type system, never at runtime.
pub trait Morphism {
    /// Source object type
    type Source;

    /// Target object type
    type Target;

    /// Apply the morphism to transform source to target
    fn apply(&self, source: Self::Source) -> Self::Target;

    /// Get a human-readable description
    fn description(&self) -> String;
}

/// A plain Rust function viewed as a morphism.
///
/// This is the "ordinary function" morphism kind: source and target are
/// concrete types and application is direct function call.
pub struct FnMorphism<S, T, F> {
    label: String,
    f: F,
    _phantom: PhantomData<fn(S) -> T>,
}

impl<S, T, F> FnMorphism<S, T, F>
where
    F: Fn(S) -> T,
{
    /// Wrap a function as a morphism
    ///
    /// # Arguments
    /// * `label` - Short name used by `description`
    /// * `f` - The underlying function
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
            _phantom: PhantomData,
        }
    }
}

impl<S, T, F> Morphism for FnMorphism<S, T, F>
where
    F: Fn(S) -> T,
{
    type Source = S;
    type Target = T;

    fn apply(&self, source: Self::Source) -> Self::Target {
        (self.f)(source)
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

/// Identity morphism
pub struct MorphismIdentity<T> {
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T> MorphismIdentity<T> {
    /// Create a new identity morphism that returns its input unchanged
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for MorphismIdentity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Morphism for MorphismIdentity<T> {
    type Source = T;
    type Target = T;

    fn apply(&self, source: Self::Source) -> Self::Target {
        source
    }

    fn description(&self) -> String {
        "identity".to_string()
    }
}

/// Composition of two morphisms
pub struct MorphismComposition<F, G> {
    first: F,
    second: G,
}

impl<F, G> MorphismComposition<F, G>
where
    F: Morphism,
    G: Morphism<Source = F::Target>,
{
    /// Create a new composition applying `first`, then `second`
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<F, G> Morphism for MorphismComposition<F, G>
where
    F: Morphism,
    G: Morphism<Source = F::Target>,
{
    type Source = F::Source;
    type Target = G::Target;

    fn apply(&self, source: Self::Source) -> Self::Target {
        self.second.apply(self.first.apply(source))
    }

    fn description(&self) -> String {
        format!("{} ∘ {}", self.second.description(), self.first.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_morphism() {
        let id = MorphismIdentity::<String>::new();
        let input = "test".to_string();
        let result = id.apply(input.clone());
        assert_eq!(result, input);
    }

    #[test]
    fn test_fn_morphism() {
        let double = FnMorphism::new("double", |x: i64| x * 2);
        assert_eq!(double.apply(21), 42);
        assert_eq!(double.description(), "double");
    }

    #[test]
    fn test_morphism_composition() {
        let add = FnMorphism::new("add_one", |x: i64| x + 1);
        let mul = FnMorphism::new("multiply_two", |x: i64| x * 2);

        let composition = MorphismComposition::new(add, mul);

        // (5 + 1) * 2 = 12
        assert_eq!(composition.apply(5), 12);
        assert_eq!(composition.description(), "multiply_two ∘ add_one");
    }

    #[test]
    fn test_composition_with_identity() {
        let double = FnMorphism::new("double", |x: i64| x * 2);
        let left = MorphismComposition::new(MorphismIdentity::new(), double);
        assert_eq!(left.apply(7), 14);

        let double = FnMorphism::new("double", |x: i64| x * 2);
        let right = MorphismComposition::new(double, MorphismIdentity::new());
        assert_eq!(right.apply(7), 14);
    }
}
