//! Condex condition parser
//!
//! Parses gateway condition scripts of the shape
//! `return KieFunctions.someFunction(variable[.method()], "value", ...);`
//! into a structured [`Condition`], resolving overloaded function names by
//! trial parse against a caller-supplied function registry.
//!
//! # Example
//!
//! ```
//! use condex_parser::ConditionParser;
//! use condex_registry::FunctionRegistry;
//!
//! let registry = FunctionRegistry::standard();
//! let condition =
//!     ConditionParser::parse("return KieFunctions.isEmpty(name);", &registry).unwrap();
//! assert_eq!(condition.function, "isEmpty");
//! assert_eq!(condition.params, vec!["name"]);
//! ```

pub mod ast;
pub mod parser;

pub use ast::Condition;
pub use parser::ConditionParser;

/// Syntax error raised while parsing a condition script.
///
/// Each variant carries the fixed message the caller shows to an end user.
/// When overloads are tried, only the last attempt's error survives, so the
/// surfaced variant may not be the most specific root cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Sentence \"return\" is expected at position {position}.")]
    ReturnExpected { position: usize },

    #[error("Sentence \"return\" must be followed by a blank space or a line break.")]
    BlankAfterReturnExpected,

    #[error("Function call was not found, a token like \"KieFunctions.functionName(variable, params)\" is expected.")]
    FunctionCallExpected,

    #[error("The \"KieFunctions.\" keyword must be followed by one of the following function names: \"{available}\"")]
    FunctionNameExpected { available: String },

    #[error("The function name \"{name}\" is not recognized by system.")]
    FunctionNotRecognized { name: String },

    #[error("Out of bounds error, the condition has missing parameters or is not properly configured.")]
    OutOfBounds,

    #[error("Function call \"{function}\" is not opened properly, character \"(\" is expected.")]
    FunctionNotOpened { function: String },

    #[error("Function call \"{function}\" is not closed properly, character \")\" is expected.")]
    FunctionNotClosed { function: String },

    #[error("Condition not closed properly, character \";\" is expected.")]
    SentenceNotClosed,

    #[error("A valid field name is expected.")]
    FieldNameExpected,

    #[error("A method invocation is expected at position {position}.")]
    MethodInvocationExpected { position: usize },

    #[error("Method \"{method}\" invocation is not properly opened, character \"(\" is expected.")]
    MethodNotOpened { method: String },

    #[error("Method \"{method}\" invocation is not properly closed, character \")\" is expected.")]
    MethodNotClosed { method: String },

    #[error("Parameter delimiter \",\" is expected.")]
    ParamDelimiterExpected,

    #[error("String parameter value like \"some value\" is expected.")]
    StringParameterExpected { position: usize },
}

impl ParseError {
    /// The char offset the failure was recorded at, when one was.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::ReturnExpected { position }
            | ParseError::MethodInvocationExpected { position }
            | ParseError::StringParameterExpected { position } => Some(*position),
            _ => None,
        }
    }
}
