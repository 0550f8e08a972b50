use serde::{Deserialize, Serialize};

/// The parsed form of a gateway condition script: the called function plus
/// its ordered parameters.
///
/// The first parameter is a variable reference (`variable` or
/// `variable.method()` composed into one string); the remaining parameters
/// are decoded string values. The parameter count always equals the declared
/// parameter count of the function def the parse committed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub function: String,
    pub params: Vec<String>,
}

impl Condition {
    /// Create a condition with no parameters yet.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            params: Vec::new(),
        }
    }

    /// Create a condition with the given parameters.
    pub fn with_params(function: impl Into<String>, params: &[&str]) -> Self {
        Self {
            function: function.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn push_param(&mut self, param: impl Into<String>) {
        self.params.push(param.into());
    }
}
