use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// An exact intermediate result and the expression that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub magnitude: BigRational,
    pub expression: String,
}

impl Value {
    pub fn new(magnitude: BigRational, expression: String) -> Self {
        Self {
            magnitude,
            expression,
        }
    }

    /// A starting card: the integer itself, written in decimal
    pub fn from_integer(n: i64) -> Self {
        Self::new(BigRational::from_integer(BigInt::from(n)), n.to_string())
    }
}

/// The numbers still in play
///
/// Magnitudes and expressions live together in one `Value`, so they cannot drift
/// apart as the state shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    values: Vec<Value>,
}

impl PuzzleState {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn from_numbers(numbers: &[i64]) -> Self {
        Self::new(numbers.iter().map(|&n| Value::from_integer(n)).collect())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", value.expression, value.magnitude)?;
        }
        write!(f, "]")
    }
}
