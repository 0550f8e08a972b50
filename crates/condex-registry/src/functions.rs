use serde::{Deserialize, Serialize};

/// A declared parameter of a condition function.
///
/// The parser only counts parameters; the name is kept for signature
/// rendering and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
}

impl ParamDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A registered condition function: a name plus its ordered parameter list.
///
/// Several defs may share a name (overloads). Overloads are distinguished
/// only by parameter count and resolved by trial parse, so registration
/// order matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    name: String,
    params: Vec<ParamDef>,
}

impl FunctionDef {
    /// Create a function def from a name and parameter names.
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            params: params.iter().map(|name| ParamDef::new(*name)).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }
}

impl std::fmt::Display for FunctionDef {
    /// Renders the signature, e.g. `between(variable, from, to)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name)?;
        }
        write!(f, ")")
    }
}
