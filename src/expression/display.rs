use std::fmt;

use num_traits::Signed;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Number(n) if !n.is_integer() => 2,
                Expression::Number(n) if n.is_negative() => 3,
                Expression::Neg(_) => 3,
                Expression::Number(_) => 4,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => {
                    fmt_expression(f, l)?;
                    write!(f, " + ")?;
                    fmt_expression(f, r)
                }
                Expression::Sub(l, r) => {
                    fmt_expression(f, l)?;
                    write!(f, " - ")?;
                    write_with_parens(f, r, precedence(r) <= 1)
                }
                Expression::Mul(l, r) => {
                    write_with_parens(f, l, precedence(l) < 2)?;
                    write!(f, " * ")?;
                    write_with_parens(f, r, precedence(r) < 2)
                }
                Expression::Div(l, r) => {
                    write_with_parens(f, l, precedence(l) < 2)?;
                    write!(f, " / ")?;
                    write_with_parens(f, r, precedence(r) <= 2)
                }
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_with_parens(f, e, precedence(e) < 4)
                }
            }
        }

        fmt_expression(f, self)
    }
}
