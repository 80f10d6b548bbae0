//! Operator table for embedded expressions.

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Operators recognised inside embedded expressions, with their rate
/// (higher binds tighter). Brackets carry the sentinel rate 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionOperator {
    Plus,
    Minus,
    Multiply,
    Or,
    Xor,
    And,
    LeftShift,
    RightShift,
    Tilde,
    OpenBracket,
    CloseBracket,
}

impl ExpressionOperator {
    pub const ALL: [ExpressionOperator; 11] = [
        ExpressionOperator::Plus,
        ExpressionOperator::Minus,
        ExpressionOperator::Multiply,
        ExpressionOperator::Or,
        ExpressionOperator::Xor,
        ExpressionOperator::And,
        ExpressionOperator::LeftShift,
        ExpressionOperator::RightShift,
        ExpressionOperator::Tilde,
        ExpressionOperator::OpenBracket,
        ExpressionOperator::CloseBracket,
    ];

    pub fn rate(self) -> u8 {
        match self {
            ExpressionOperator::Plus => 1,
            ExpressionOperator::Minus => 2,
            ExpressionOperator::Multiply => 3,
            ExpressionOperator::Or => 5,
            ExpressionOperator::Xor => 6,
            ExpressionOperator::And => 7,
            ExpressionOperator::LeftShift | ExpressionOperator::RightShift => 10,
            ExpressionOperator::Tilde => 13,
            ExpressionOperator::OpenBracket | ExpressionOperator::CloseBracket => 14,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ExpressionOperator::Plus => "+",
            ExpressionOperator::Minus => "-",
            ExpressionOperator::Multiply => "*",
            ExpressionOperator::Or => "|",
            ExpressionOperator::Xor => "^",
            ExpressionOperator::And => "&",
            ExpressionOperator::LeftShift => "<<",
            ExpressionOperator::RightShift => ">>",
            ExpressionOperator::Tilde => "~",
            ExpressionOperator::OpenBracket => "(",
            ExpressionOperator::CloseBracket => ")",
        }
    }

    /// Looks an operator up by its textual form.
    pub fn from_symbol(symbol: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| DomainError::UnknownOperator(symbol.to_string()))
    }

    pub fn is_unary(self) -> bool {
        self == ExpressionOperator::Tilde
    }

    pub fn is_bracket(self) -> bool {
        matches!(
            self,
            ExpressionOperator::OpenBracket | ExpressionOperator::CloseBracket
        )
    }

    /// Applies a binary operator with wrapping two's complement semantics.
    /// Shift amounts are masked to the operand width.
    pub fn apply_binary(self, left: i32, right: i32) -> DomainResult<i32> {
        let value = match self {
            ExpressionOperator::Plus => left.wrapping_add(right),
            ExpressionOperator::Minus => left.wrapping_sub(right),
            ExpressionOperator::Multiply => left.wrapping_mul(right),
            ExpressionOperator::Or => left | right,
            ExpressionOperator::Xor => left ^ right,
            ExpressionOperator::And => left & right,
            ExpressionOperator::LeftShift => left.wrapping_shl(right as u32),
            ExpressionOperator::RightShift => left.wrapping_shr(right as u32),
            ExpressionOperator::Tilde
            | ExpressionOperator::OpenBracket
            | ExpressionOperator::CloseBracket => {
                return Err(DomainError::syntax(format!(
                    "'{}' is not a binary operator",
                    self.symbol()
                )))
            }
        };
        Ok(value)
    }

    pub fn apply_unary(self, operand: i32) -> DomainResult<i32> {
        match self {
            ExpressionOperator::Tilde => Ok(!operand),
            other => Err(DomainError::syntax(format!(
                "'{}' is not a unary operator",
                other.symbol()
            ))),
        }
    }
}

impl fmt::Display for ExpressionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
