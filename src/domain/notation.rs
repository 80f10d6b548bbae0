//! Infix to postfix (Polish) notation conversion.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::operator::ExpressionOperator;

/// Operand or operator of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operand(i32),
    Operator(ExpressionOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{value}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in postfix order; contains no brackets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostfixExpression {
    tokens: Vec<Token>,
}

impl PostfixExpression {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PostfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Parses the whitespace separated form produced by `Display`,
/// e.g. `3 4 2 * +`.
impl FromStr for PostfixExpression {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split_whitespace()
            .map(|part| match part.parse::<i32>() {
                Ok(value) => Ok(Token::Operand(value)),
                Err(_) => {
                    let op = ExpressionOperator::from_symbol(part)?;
                    if op.is_bracket() {
                        Err(DomainError::syntax("brackets are not allowed in postfix"))
                    } else {
                        Ok(Token::Operator(op))
                    }
                }
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(tokens))
    }
}

/// Splits an infix expression into operands and operators.
/// Whitespace between tokens is ignored.
pub fn tokenize(infix: &str) -> DomainResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = infix.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(i, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                end = i + d.len_utf8();
                chars.next();
            }
            let literal = &infix[start..end];
            let value = literal
                .parse::<i32>()
                .map_err(|_| DomainError::syntax(format!("operand out of range: {literal}")))?;
            tokens.push(Token::Operand(value));
            continue;
        }
        let op = match c {
            '<' | '>' => match chars.peek() {
                Some(&(_, next)) if next == c => {
                    chars.next();
                    ExpressionOperator::from_symbol(if c == '<' { "<<" } else { ">>" })?
                }
                _ => return Err(DomainError::UnknownOperator(c.to_string())),
            },
            other => ExpressionOperator::from_symbol(other.encode_utf8(&mut [0; 4]))?,
        };
        tokens.push(Token::Operator(op));
    }

    Ok(tokens)
}

/// Converts an infix expression to postfix with the operator-precedence
/// (shunting-yard) algorithm.
///
/// A binary operator first emits every stacked operator whose rate is
/// greater than or equal to its own, stopping at an open bracket; equal
/// rates therefore associate to the left. The prefix `~` is pushed without
/// popping.
pub fn to_postfix(infix: &str) -> DomainResult<PostfixExpression> {
    let tokens = tokenize(infix)?;
    if tokens.is_empty() {
        return Err(DomainError::syntax("empty expression"));
    }

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<ExpressionOperator> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Operator(ExpressionOperator::OpenBracket) => {
                stack.push(ExpressionOperator::OpenBracket)
            }
            Token::Operator(ExpressionOperator::CloseBracket) => loop {
                match stack.pop() {
                    Some(ExpressionOperator::OpenBracket) => break,
                    Some(op) => output.push(Token::Operator(op)),
                    None => return Err(DomainError::syntax("unmatched ')'")),
                }
            },
            Token::Operator(op) if op.is_unary() => stack.push(op),
            Token::Operator(op) => {
                while let Some(top) = stack.pop() {
                    if top == ExpressionOperator::OpenBracket || top.rate() < op.rate() {
                        stack.push(top);
                        break;
                    }
                    output.push(Token::Operator(top));
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op == ExpressionOperator::OpenBracket {
            return Err(DomainError::syntax("unmatched '('"));
        }
        output.push(Token::Operator(op));
    }

    let postfix = PostfixExpression::new(output);
    trace!("to_postfix: {infix} -> {postfix}");
    Ok(postfix)
}
