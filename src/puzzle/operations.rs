use num_traits::Zero;

use crate::puzzle::state::Value;

/// Every value obtainable by combining `a` and `b` with one arithmetic operation
///
/// Addition and multiplication are generated once; subtraction and division in both
/// directions. A division whose divisor is exactly zero is skipped.
pub fn combine(a: &Value, b: &Value) -> Vec<Value> {
    let (x, y) = (&a.magnitude, &b.magnitude);
    let (ea, eb) = (&a.expression, &b.expression);

    let mut candidates = vec![
        Value::new(x + y, format!("({}+{})", ea, eb)),
        Value::new(x * y, format!("({}*{})", ea, eb)),
        Value::new(x - y, format!("({}-{})", ea, eb)),
        Value::new(y - x, format!("({}-{})", eb, ea)),
    ];

    if !y.is_zero() {
        candidates.push(Value::new(x / y, format!("({}/{})", ea, eb)));
    }
    if !x.is_zero() {
        candidates.push(Value::new(y / x, format!("({}/{})", eb, ea)));
    }

    candidates
}

#[cfg(test)]
mod tests_inner {
    use super::*;

    #[test]
    fn test_combine_generates_six_candidates() {
        let out = combine(&Value::from_integer(8), &Value::from_integer(3));
        let exprs: Vec<&str> = out.iter().map(|v| v.expression.as_str()).collect();
        assert_eq!(
            exprs,
            vec!["(8+3)", "(8*3)", "(8-3)", "(3-8)", "(8/3)", "(3/8)"]
        );
    }

    #[test]
    fn test_combine_skips_zero_divisor() {
        let out = combine(&Value::from_integer(5), &Value::from_integer(0));
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|v| v.expression != "(5/0)"));
        assert!(out.iter().any(|v| v.expression == "(0/5)"));

        let out = combine(&Value::from_integer(0), &Value::from_integer(0));
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| !v.expression.contains('/')));
    }
}
