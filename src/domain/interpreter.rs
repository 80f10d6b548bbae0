//! Stack machine evaluating postfix expressions.

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::notation::{to_postfix, PostfixExpression, Token};

/// Evaluation stack.
#[derive(Debug, Default)]
pub struct InterpreterContext {
    stack: Vec<i32>,
}

impl InterpreterContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i32) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> DomainResult<i32> {
        self.stack
            .pop()
            .ok_or_else(|| DomainError::syntax("stack underflow"))
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Evaluates a postfix expression.
///
/// Binary operators pop the right operand first, then the left one. Exactly
/// one value must remain on the stack at the end.
pub fn evaluate(expression: &PostfixExpression) -> DomainResult<i32> {
    let mut context = InterpreterContext::new();

    for token in expression.tokens() {
        match *token {
            Token::Operand(value) => context.push(value),
            Token::Operator(op) if op.is_unary() => {
                let operand = context.pop()?;
                context.push(op.apply_unary(operand)?);
            }
            Token::Operator(op) => {
                let right = context.pop()?;
                let left = context.pop()?;
                context.push(op.apply_binary(left, right)?);
            }
        }
    }

    let result = context.pop()?;
    if !context.is_empty() {
        return Err(DomainError::syntax(format!(
            "{} values left on the stack",
            context.len()
        )));
    }
    trace!("evaluate: {expression} = {result}");
    Ok(result)
}

/// Converts an infix expression to postfix and evaluates it.
pub fn evaluate_infix(infix: &str) -> DomainResult<i32> {
    evaluate(&to_postfix(infix)?)
}
