use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Recursive-descent parser over `+ - * /`, parentheses, unary minus and integers
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := '-' integer | '-' unary | primary
/// primary := integer | '(' expr ')'
/// ```
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        while let Some(c) = self.chars.get(self.pos) {
            if c.is_whitespace() {
                self.pos += 1;
            } else {
                return Some(*c);
            }
        }
        None
    }

    fn expect(&mut self, wanted: char) -> Result<(), ExpressionError> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ExpressionError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let right = self.term()?;
            left = if op == '+' {
                Expression::Add(Box::new(left), Box::new(right))
            } else {
                Expression::Sub(Box::new(left), Box::new(right))
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.unary()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let right = self.unary()?;
            left = if op == '*' {
                Expression::Mul(Box::new(left), Box::new(right))
            } else {
                Expression::Div(Box::new(left), Box::new(right))
            };
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expression, ExpressionError> {
        if self.peek() == Some('-') {
            self.pos += 1;
            // A minus directly against digits is a negative literal
            if self.chars.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
                return Ok(Expression::Number(-self.literal()?));
            }
            return Ok(Expression::Neg(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() => Ok(Expression::Number(self.literal()?)),
            Some(found) => Err(ExpressionError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn literal(&mut self) -> Result<BigRational, ExpressionError> {
        let mut literal = String::new();
        while let Some(&c) = self.chars.get(self.pos).filter(|c| c.is_ascii_digit()) {
            literal.push(c);
            self.pos += 1;
        }
        let value = literal
            .parse::<BigInt>()
            .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
        Ok(BigRational::from_integer(value))
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression: '{}'", s);

        let mut parser = Parser::new(s);
        let expr = parser.expr()?;
        if let Some(found) = parser.peek() {
            return Err(ExpressionError::UnexpectedChar {
                found,
                position: parser.pos,
            });
        }
        Ok(expr)
    }
}
