//! Domain layer: text tree, structural parser and expression evaluation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod component;
pub mod error;
pub mod interpreter;
pub mod notation;
pub mod operator;
pub mod parser;
pub mod view;

pub use component::{is_word_char, CompositeKind, Leaf, NodeKind, NodeRef, TextNode};
pub use error::{DomainError, DomainResult};
pub use interpreter::{evaluate, evaluate_infix, InterpreterContext};
pub use notation::{to_postfix, PostfixExpression, Token};
pub use operator::ExpressionOperator;
pub use parser::{DocumentParser, TextParser};
pub use view::{layout, TreeView};
