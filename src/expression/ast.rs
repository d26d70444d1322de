use num_bigint::BigInt;
use num_rational::BigRational;

/// Arithmetic expression over exact rationals
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(BigRational),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

impl Expression {
    pub fn integer(n: i64) -> Self {
        Expression::Number(BigRational::from_integer(BigInt::from(n)))
    }

    /// Numeric literals in left-to-right order
    pub fn literals(&self) -> Vec<BigRational> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(n.clone()),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
                Expression::Neg(e) => stack.push(e),
            }
        }
        out
    }
}
