use crate::functions::FunctionDef;

/// Ordered collection of the condition functions known to the system.
///
/// Registration order is significant: overload resolution tries defs in the
/// order they were registered, and name listings keep first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionRegistry {
    functions: Vec<FunctionDef>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    /// The standard catalog of gateway condition functions.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(FunctionDef::new("isNull", &["variable"]));
        registry.register(FunctionDef::new("isEmpty", &["variable"]));
        registry.register(FunctionDef::new("isTrue", &["variable"]));
        registry.register(FunctionDef::new("isFalse", &["variable"]));
        registry.register(FunctionDef::new("equalsTo", &["variable", "value"]));
        registry.register(FunctionDef::new("contains", &["variable", "value"]));
        registry.register(FunctionDef::new("startsWith", &["variable", "value"]));
        registry.register(FunctionDef::new("endsWith", &["variable", "value"]));
        registry.register(FunctionDef::new("greaterThan", &["variable", "value"]));
        registry.register(FunctionDef::new("greaterOrEqualThan", &["variable", "value"]));
        registry.register(FunctionDef::new("lessThan", &["variable", "value"]));
        registry.register(FunctionDef::new("lessOrEqualThan", &["variable", "value"]));
        registry.register(FunctionDef::new("between", &["variable", "from", "to"]));
        registry
    }

    /// Register a function def. Defs sharing a name become overloads,
    /// tried in registration order.
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.push(def);
    }

    /// All registered defs, in registration order.
    pub fn functions(&self) -> &[FunctionDef] {
        &self.functions
    }

    /// The overloads registered under `name`, in registration order.
    /// Empty if the name is unknown.
    pub fn functions_named(&self, name: &str) -> Vec<&FunctionDef> {
        self.functions.iter().filter(|def| def.name() == name).collect()
    }

    /// Distinct registered names, in first-seen order.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for def in &self.functions {
            if !names.contains(&def.name()) {
                names.push(def.name());
            }
        }
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = FunctionRegistry::new();
        assert!(registry.functions().is_empty());
        assert!(registry.functions_named("isEmpty").is_empty());
        assert!(registry.function_names().is_empty());
    }

    #[test]
    fn test_standard_catalog() {
        let registry = FunctionRegistry::standard();
        let names = registry.function_names();
        assert_eq!(
            names,
            vec![
                "isNull",
                "isEmpty",
                "isTrue",
                "isFalse",
                "equalsTo",
                "contains",
                "startsWith",
                "endsWith",
                "greaterThan",
                "greaterOrEqualThan",
                "lessThan",
                "lessOrEqualThan",
                "between",
            ]
        );
    }

    #[test]
    fn test_standard_arities() {
        let registry = FunctionRegistry::standard();
        assert_eq!(registry.functions_named("isEmpty")[0].params().len(), 1);
        assert_eq!(registry.functions_named("equalsTo")[0].params().len(), 2);
        assert_eq!(registry.functions_named("between")[0].params().len(), 3);
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let registry = FunctionRegistry::standard();
        assert!(registry.functions_named("unknownFn").is_empty());
    }

    #[test]
    fn test_overloads_keep_registration_order() {
        let mut registry = FunctionRegistry::new();
        registry.register(FunctionDef::new("check", &["variable", "value"]));
        registry.register(FunctionDef::new("check", &["variable"]));

        let overloads = registry.functions_named("check");
        assert_eq!(overloads.len(), 2);
        assert_eq!(overloads[0].params().len(), 2);
        assert_eq!(overloads[1].params().len(), 1);
    }

    #[test]
    fn test_function_names_deduplicates() {
        let mut registry = FunctionRegistry::new();
        registry.register(FunctionDef::new("check", &["variable", "value"]));
        registry.register(FunctionDef::new("check", &["variable"]));
        registry.register(FunctionDef::new("other", &["variable"]));

        assert_eq!(registry.function_names(), vec!["check", "other"]);
    }
}
