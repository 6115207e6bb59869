//! Property-based tests for the geometric layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use geoeq_core::Session;
    use geoeq_value::{Sample, Value};

    use crate::{distance_sqr, Line, Point};

    fn coord() -> impl Strategy<Value = i64> {
        -50i64..50i64
    }

    proptest! {
        #[test]
        fn fixed_constructions_emit_nothing(
            ax in coord(), ay in coord(), bx in coord(), by in coord(),
        ) {
            let mut session = Session::new();
            let a = Point::fixed(ax, ay);
            let b = Point::fixed(bx, by);

            let line = Line::through(&mut session, &a, &b);
            let d = distance_sqr(&mut session, &a, &b).unwrap();
            line.contains(&mut session, &a).unwrap();
            line.contains(&mut session, &b).unwrap();

            prop_assert_eq!(d, Value::literal((ax - bx).pow(2) + (ay - by).pow(2)));
            prop_assert!(session.equations().is_empty());
        }

        #[test]
        fn free_distance_sample_is_exact(
            ax in coord(), ay in coord(), bx in coord(), by in coord(),
        ) {
            let mut session = Session::new();
            let a = Point::free(&mut session, ax, ay);
            let b = Point::free(&mut session, bx, by);

            let d = distance_sqr(&mut session, &a, &b).unwrap();

            let expected = (ax - bx).pow(2) + (ay - by).pow(2);
            prop_assert_eq!(d.initial(), Some(&Sample::from(expected)));
            prop_assert_eq!(session.var_count() as usize, 4 + session.equations().len());
        }

        #[test]
        fn scaled_vector_endpoints(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
            let mut session = Session::new();
            let a = Point::free(&mut session, ax, ay);
            let b = Point::free(&mut session, bx, by);

            let start = Point::scaled_vector(&mut session, &Value::literal(0), &a, &b);
            let end = Point::scaled_vector(&mut session, &Value::literal(1), &a, &b);

            prop_assert_eq!(start.x().initial(), Some(&Sample::from(ax)));
            prop_assert_eq!(end.y().initial(), Some(&Sample::from(by)));
        }

        #[test]
        fn free_points_lie_on_their_line(
            ax in coord(), ay in coord(), bx in coord(), by in coord(), t in -5i64..5i64,
        ) {
            let mut session = Session::new();
            let a = Point::free(&mut session, ax, ay);
            let b = Point::free(&mut session, bx, by);
            let line = Line::through(&mut session, &a, &b);
            let on = Point::free(&mut session, ax + t * (bx - ax), ay + t * (by - ay));

            prop_assert!(line.contains(&mut session, &on).is_ok());
        }
    }
}
