//! Property-based tests for scenes.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use geoeq_core::SessionConfig;

    use crate::{Scene, Step};

    fn free_points() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((-20i64..20i64, -20i64..20i64), 1..8)
    }

    fn scene_of(points: &[(i64, i64)]) -> Scene {
        points
            .iter()
            .enumerate()
            .fold(Scene::new(), |scene, (i, &(x, y))| {
                scene.with_step(Step::FreePoint {
                    name: format!("P{i}"),
                    x,
                    y,
                })
            })
    }

    proptest! {
        #[test]
        fn free_points_allocate_two_unknowns(points in free_points()) {
            let scene = scene_of(&points);
            let mut session = geoeq_core::Session::new();
            scene.apply(&mut session).unwrap();

            prop_assert_eq!(session.var_count() as usize, 2 * points.len());
            prop_assert!(session.equations().is_empty());
        }

        #[test]
        fn evaluation_is_reproducible(points in free_points()) {
            let scene = scene_of(&points)
                .with_step(Step::Locus {
                    name: "path".to_string(),
                    point: "P0".to_string(),
                });

            let first = scene.evaluate(SessionConfig::default()).unwrap();
            let second = scene.evaluate(SessionConfig::default()).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
