//! Property-based tests for the value engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use geoeq_core::{Session, SessionConfig};

    use crate::{Algebra, Sample, Value};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Add,
        Sub,
        Mul,
        Div,
        Neg,
        Abs,
        Square,
        Sqrt,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            Just(Op::Sub),
            Just(Op::Mul),
            Just(Op::Div),
            Just(Op::Neg),
            Just(Op::Abs),
            Just(Op::Square),
            Just(Op::Sqrt),
        ]
    }

    /// Runs a chain of operations over two free unknowns and returns the
    /// emitted equation texts.
    fn run(ops: &[(Op, i64)], witness: bool) -> (Vec<String>, Vec<Option<f64>>) {
        let mut session = Session::with_config(SessionConfig::default().with_witness(witness));
        let mut acc = session.fresh(3);
        let mut floats = Vec::new();
        for &(op, k) in ops {
            let k = session.fresh(k);
            acc = match op {
                Op::Add => session.add(&acc, &k),
                Op::Sub => session.sub(&acc, &k),
                Op::Mul => session.mul(&acc, &k),
                Op::Div => session.div(&acc, &k).unwrap_or_else(|_| acc.clone()),
                Op::Neg => session.neg(&acc),
                Op::Abs => session.abs(&acc),
                Op::Square => session.powi(&acc, 2),
                Op::Sqrt => session.sqrt(&acc),
            };
            floats.push(acc.float_initial());
        }
        let equations = session.equations().iter().map(ToString::to_string).collect();
        (equations, floats)
    }

    proptest! {
        #[test]
        fn literal_operations_fold(a in small_int(), b in small_int()) {
            let mut session = Session::new();
            let x = Value::literal(a);
            let y = Value::literal(b);

            prop_assert_eq!(session.add(&x, &y), Value::literal(a + b));
            prop_assert_eq!(session.sub(&x, &y), Value::literal(a - b));
            prop_assert_eq!(session.mul(&x, &y), Value::literal(a * b));
            prop_assert_eq!(session.neg(&x), Value::literal(-a));
            prop_assert_eq!(session.abs(&x), Value::literal(a.abs()));
            prop_assert_eq!(session.powi(&x, 2), Value::literal(a * a));
            prop_assert!(session.equations().is_empty());
            prop_assert_eq!(session.var_count(), 0);
        }

        #[test]
        fn exact_literal_division_folds(q in small_int(), d in non_zero_int()) {
            let mut session = Session::new();
            let result = session.div(&Value::literal(q * d), &Value::literal(d)).unwrap();
            prop_assert_eq!(result, Value::literal(q));
            prop_assert!(session.equations().is_empty());
        }

        #[test]
        fn samples_follow_integer_arithmetic(a in small_int(), b in small_int()) {
            let mut session = Session::new();
            let x = session.fresh(a);
            let y = session.fresh(b);

            let sum = session.add(&x, &y);
            let difference = session.sub(&x, &y);
            let product = session.mul(&x, &y);
            let negated = session.neg(&x);

            prop_assert_eq!(sum.initial(), Some(&Sample::from(a + b)));
            prop_assert_eq!(difference.initial(), Some(&Sample::from(a - b)));
            prop_assert_eq!(product.initial(), Some(&Sample::from(a * b)));
            prop_assert_eq!(negated.initial(), Some(&Sample::from(-a)));
        }

        #[test]
        fn one_equation_per_unknown(ops in prop::collection::vec((op(), non_zero_int()), 1..12)) {
            let mut session = Session::new();
            let mut acc = session.fresh(7);
            for (op, k) in ops {
                let k = session.fresh(k);
                let before_vars = session.var_count();
                let before_eqs = session.equations().len();
                acc = match op {
                    Op::Add => session.add(&acc, &k),
                    Op::Sub => session.sub(&acc, &k),
                    Op::Mul => session.mul(&acc, &k),
                    Op::Div => session.div(&acc, &k).unwrap(),
                    Op::Neg => session.neg(&acc),
                    Op::Abs => session.abs(&acc),
                    Op::Square => session.powi(&acc, 2),
                    Op::Sqrt => session.sqrt(&acc),
                };
                let new_vars = (session.var_count() - before_vars) as usize;
                prop_assert_eq!(new_vars, session.equations().len() - before_eqs);
                // The result's own equation is the last one emitted
                let last = session.equations().last().unwrap().to_string();
                prop_assert!(last.contains(&acc.to_string()));
            }
        }

        #[test]
        fn witness_toggle_keeps_equations(ops in prop::collection::vec((op(), non_zero_int()), 1..10)) {
            let (with, floats) = run(&ops, true);
            let (without, no_floats) = run(&ops, false);

            prop_assert_eq!(with, without);
            prop_assert!(no_floats.iter().all(Option::is_none));
            prop_assert!(floats.iter().all(Option::is_some));
        }
    }
}
