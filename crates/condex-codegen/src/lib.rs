//! Condex script generator
//!
//! Renders a [`Condition`] back into gateway script text, the reverse of the
//! parser:
//!
//! ```text
//! Condition { function, params } → generate() → return KieFunctions.f(v, "s");
//! ```
//!
//! Generated text always re-parses to an equal `Condition` against the same
//! registry.

use condex_parser::parser::KIE_FUNCTIONS;
use condex_parser::Condition;
use condex_registry::FunctionRegistry;

/// Script generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Generate error: {message}")]
pub struct GenerateError {
    pub message: String,
}

impl GenerateError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render a condition as script text, validating it against the registry.
pub fn generate(
    condition: &Condition,
    registry: &FunctionRegistry,
) -> Result<String, GenerateError> {
    let overloads = registry.functions_named(&condition.function);
    if overloads.is_empty() {
        return Err(GenerateError::new(format!(
            "The function name \"{}\" is not recognized by system.",
            condition.function
        )));
    }
    if !overloads
        .iter()
        .any(|def| def.params().len() == condition.params.len())
    {
        return Err(GenerateError::new(format!(
            "Function \"{}\" has no overload taking {} parameters.",
            condition.function,
            condition.params.len()
        )));
    }
    if condition.params.is_empty() {
        return Err(GenerateError::new(format!(
            "Function \"{}\" requires a leading variable parameter.",
            condition.function
        )));
    }

    let mut script = String::from("return ");
    script.push_str(KIE_FUNCTIONS);
    script.push_str(&condition.function);
    script.push('(');
    for (i, param) in condition.params.iter().enumerate() {
        if i == 0 {
            // Variable reference, emitted verbatim.
            script.push_str(param);
        } else {
            script.push_str(", \"");
            script.push_str(&escape_text(param));
            script.push('"');
        }
    }
    script.push_str(");");
    Ok(script)
}

/// Insert a `\` before any `"` not already preceded by one, so the emitted
/// literal survives the parser's quote-escape rule unchanged.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut last = None;
    for c in value.chars() {
        if c == '"' && last != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        last = Some(c);
    }
    escaped
}
