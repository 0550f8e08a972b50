//! WASM bindings for the condex toolkit.
//!
//! Exposes `parse()`, `generate()` and `functions()` to JavaScript via
//! wasm-bindgen, all against the standard function registry. Parse results
//! cross the boundary as plain JS objects `{ function, params }`; errors are
//! thrown as JS errors carrying the parser's message.

use condex_parser::{Condition, ConditionParser};
use condex_registry::FunctionRegistry;
use wasm_bindgen::prelude::*;

/// Parse a condition script.
///
/// Returns a JS object `{ function: string, params: string[] }`.
/// Throws a JS error if the script does not parse.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let registry = FunctionRegistry::standard();
    let condition =
        ConditionParser::parse(source, &registry).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&condition).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate a condition script from a JS object `{ function, params }`.
///
/// Throws a JS error if the object does not decode or fails validation.
#[wasm_bindgen]
pub fn generate(value: JsValue) -> Result<String, JsError> {
    let registry = FunctionRegistry::standard();
    let condition: Condition =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;
    condex_codegen::generate(&condition, &registry).map_err(|e| JsError::new(&e.to_string()))
}

/// The signatures of the registered condition functions, one string each.
#[wasm_bindgen]
pub fn functions() -> js_sys::Array {
    FunctionRegistry::standard()
        .functions()
        .iter()
        .map(|def| JsValue::from_str(&def.to_string()))
        .collect()
}

/// Get the toolkit version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — verify the parse/generate pipeline works
    // =========================================================================

    fn native_parse(source: &str) -> Condition {
        let registry = FunctionRegistry::standard();
        ConditionParser::parse(source, &registry).unwrap()
    }

    #[test]
    fn test_parse_single_param() {
        let condition = native_parse("return KieFunctions.isEmpty(name);");
        assert_eq!(condition.function, "isEmpty");
        assert_eq!(condition.params, vec!["name"]);
    }

    #[test]
    fn test_parse_error_reports_message() {
        let registry = FunctionRegistry::standard();
        let error = ConditionParser::parse("return KieFunctions.isEmpty(x)", &registry)
            .unwrap_err();
        assert!(error.to_string().contains("\";\" is expected"));
    }

    #[test]
    fn test_parse_then_generate_round_trips() {
        let registry = FunctionRegistry::standard();
        let condition = native_parse("return KieFunctions.equalsTo(x, \"a\");");
        let script = condex_codegen::generate(&condition, &registry).unwrap();
        assert_eq!(script, "return KieFunctions.equalsTo(x, \"a\");");
    }

    #[test]
    fn test_multiple_parses_share_nothing() {
        let first = native_parse("return KieFunctions.isEmpty(x);");
        let second = native_parse("return KieFunctions.isNull(y);");
        assert_eq!(first.function, "isEmpty");
        assert_eq!(second.function, "isNull");
        assert_eq!(first.params, vec!["x"]);
        assert_eq!(second.params, vec!["y"]);
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
