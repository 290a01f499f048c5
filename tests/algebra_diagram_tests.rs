// Copyright 2025 Cowboy AI, LLC.

mod tests {
    pub mod algebra {
        use cim_algebra::{
            Component, DerivedMonoid, FnMorphism, Functor, Head, Identity, MapMorphism, Monoid,
            MonoidInCategory, Morphism, MorphismComposition, NaturalTransformation,
        };

        #[test]
        fn addition_monoid_diagram_commutes() {
            let left = 1i64.combine(2).combine(3);
            let right = 1i64.combine(2i64.combine(3));
            assert_eq!(left, right, "diagram: addition associativity");

            let id = i64::empty();
            assert_eq!(id.combine(7), 7, "left identity");
            assert_eq!(7i64.combine(id), 7, "right identity");
        }

        #[test]
        fn derived_morphisms_agree_with_instance() {
            let monoid = DerivedMonoid::<i64>::from_monoid();

            assert_eq!(monoid.unit.apply(()), 0, "unit lands on the identity");
            assert_eq!(monoid.combine.apply((3, 4)), 7, "combine uncurries ⊕");
            assert_eq!(
                monoid.combine.apply((monoid.unit.apply(()), 9)),
                9,
                "unit then combine is the identity morphism on the carrier"
            );
        }

        #[test]
        fn functional_monoid_over_explicit_closures() {
            let concat = MonoidInCategory::functional(
                |()| String::new(),
                |(a, b): (String, String)| format!("{a}{b}"),
            );

            let empty = concat.unit.apply(());
            let ab = concat.combine.apply(("a".into(), "b".into()));
            assert_eq!(
                concat.combine.apply((empty, ab.clone())),
                ab,
                "left identity through the morphism layer"
            );
        }

        #[test]
        fn sequence_functor_laws_hold_pointwise() {
            let fa = vec![1i64, 2, 3];

            assert_eq!(fa.clone().map(|x| x), fa, "identity law");

            let stepwise = fa.clone().map(|x| x + 1).map(|x| x * 2);
            let fused = fa.map(|x| (x + 1) * 2);
            assert_eq!(stepwise, fused, "composition law");
            assert_eq!(stepwise, vec![4, 6, 8]);
        }

        #[test]
        fn identity_functor_maps_the_bare_value() {
            assert_eq!(Identity(5).map(|x| x + 1), Identity(6));
        }

        #[test]
        fn head_transformation_edge_cases() {
            assert_eq!(Head.transform(Vec::<i64>::new()), None, "empty → absent");
            assert_eq!(Head.transform(vec![1, 2, 3]), Some(1), "first element wins");
        }

        #[test]
        fn naturality_diagram_commutes_through_morphism_layer() {
            // Two paths from Vec<i64> to Option<i64>:
            //   map(double) then head-component, against
            //   head-component then map(double).
            let map_then_head = MorphismComposition::new(
                MapMorphism::new("double", |x: i64| x * 2),
                Component::<Head, i64>::new(Head),
            );
            let head_then_map = MorphismComposition::new(
                Component::<Head, i64>::new(Head),
                MapMorphism::new("double", |x: i64| x * 2),
            );

            let fa = vec![1i64, 2, 3];
            assert_eq!(
                map_then_head.apply(fa.clone()),
                head_then_map.apply(fa),
                "diagram: naturality of head"
            );
            assert_eq!(map_then_head.apply(vec![1, 2, 3]), Some(2));
        }

        #[test]
        fn monoid_stated_against_the_general_morphism_kind() {
            // GeneralMonoid: plain-function kind, unit object free (u8 here).
            let monoid = MonoidInCategory::general(
                |_tag: u8| 0i64,
                |(a, b): (i64, i64)| a + b,
            );

            assert_eq!(monoid.unit.apply(255), 0);
            assert_eq!(monoid.combine.apply((3, 4)), 7);
        }

        #[test]
        fn explicit_morphisms_compose_with_descriptions() {
            let unit = FnMorphism::new("unit", |(): ()| 0i64);
            let succ = FnMorphism::new("succ", |x: i64| x + 1);
            let composed = MorphismComposition::new(unit, succ);

            assert_eq!(composed.apply(()), 1);
            assert_eq!(composed.description(), "succ ∘ unit");
        }
    }
}
