use crate::ast::Condition;
use crate::ParseError;
use condex_registry::{FunctionDef, FunctionRegistry};

/// The namespace every condition function call is qualified with.
pub const KIE_FUNCTIONS: &str = "KieFunctions.";

const RETURN_SENTENCE: &str = "return";

/// Characters ending a variable name.
const VARIABLE_STOP: &[char] = &[' ', '.', ',', ')', '\r', '\n', '\t'];

/// Characters ending a method name.
const METHOD_STOP: &[char] = &[' ', '\r', '\n', '\t', '('];

/// Condition script parser.
///
/// Single-pass recursive descent over the input:
/// - `Vec<char>` source with an index cursor, positions are char offsets
/// - blanks are skipped before every token
/// - overloaded function names are resolved by re-parsing the whole script
///   once per overload, in registration order; the first success wins and
///   only the last failure is kept
///
/// One parser instance serves one parse invocation; nothing is shared
/// between calls.
pub struct ConditionParser<'a> {
    registry: &'a FunctionRegistry,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> ConditionParser<'a> {
    /// Create a new parser for the given script.
    pub fn new(source: &str, registry: &'a FunctionRegistry) -> Self {
        Self {
            registry,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Parse a condition script against the registry's function defs.
    pub fn parse(source: &str, registry: &FunctionRegistry) -> Result<Condition, ParseError> {
        let mut parser = ConditionParser::new(source, registry);
        parser.parse_condition()
    }

    /// Parse the full script, trying each overload of the called function.
    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        self.parse_return_sentence()?;
        let function_name = self.parse_function_name()?;

        let overloads = self.registry.functions_named(&function_name);
        if overloads.is_empty() {
            // Guard against a registry whose name listing and overload
            // lookup disagree.
            return Err(ParseError::FunctionNotRecognized {
                name: function_name,
            });
        }

        let mut last_error = None;
        for def in overloads {
            self.reset();
            match self.parse_call(def) {
                Ok(condition) => return Ok(condition),
                Err(error) => last_error = Some(error),
            }
        }
        Err(last_error.expect("overload list is never empty here"))
    }

    /// One full structural parse attempt against a single overload.
    fn parse_call(&mut self, def: &FunctionDef) -> Result<Condition, ParseError> {
        self.parse_return_sentence()?;
        let function_name = self.parse_function_name()?;
        self.parse_function_open(&function_name)?;

        let mut condition = Condition::new(function_name.as_str());
        for (i, _) in def.params().iter().enumerate() {
            if i == 0 {
                condition.push_param(self.parse_variable_param(&function_name)?);
            } else {
                self.parse_param_delimiter()?;
                condition.push_param(self.parse_string_parameter()?);
            }
        }

        // Every declared parameter consumed.
        self.parse_function_close(&function_name)?;
        self.parse_sentence_close()?;

        Ok(condition)
    }

    fn reset(&mut self) {
        self.pos = 0;
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// `return` followed by at least one blank.
    fn parse_return_sentence(&mut self) -> Result<(), ParseError> {
        let index = match self.next_non_blank() {
            Some(index) if self.matches_at(index, RETURN_SENTENCE) => index,
            other => {
                return Err(ParseError::ReturnExpected {
                    position: other.unwrap_or(self.chars.len()),
                })
            }
        };
        self.set_pos(index + RETURN_SENTENCE.len())?;
        if !self.chars[self.pos].is_whitespace() {
            return Err(ParseError::BlankAfterReturnExpected);
        }
        Ok(())
    }

    /// `KieFunctions.` followed by the longest registered function name
    /// matching the input at that point.
    fn parse_function_name(&mut self) -> Result<String, ParseError> {
        let index = match self.next_non_blank() {
            Some(index) if self.matches_at(index, KIE_FUNCTIONS) => index,
            _ => return Err(ParseError::FunctionCallExpected),
        };

        let name_start = index + KIE_FUNCTIONS.len();
        let mut matched: Option<&str> = None;
        for def in self.registry.functions() {
            if self.matches_at(name_start, def.name())
                && matched.map_or(true, |name| def.name().len() > name.len())
            {
                matched = Some(def.name());
            }
        }

        let name = matched.ok_or_else(|| ParseError::FunctionNameExpected {
            available: self.registry.function_names().join(", "),
        })?;
        self.set_pos(name_start + name.chars().count())?;
        Ok(name.to_string())
    }

    fn parse_function_open(&mut self, function: &str) -> Result<(), ParseError> {
        match self.next_non_blank() {
            Some(index) if self.chars[index] == '(' => self.set_pos(index + 1),
            _ => Err(ParseError::FunctionNotOpened {
                function: function.to_string(),
            }),
        }
    }

    fn parse_function_close(&mut self, function: &str) -> Result<(), ParseError> {
        match self.next_non_blank() {
            Some(index) if self.chars[index] == ')' => {
                // The cursor may legally land at end of input here; the
                // sentence close reports the missing ";".
                self.pos = index + 1;
                Ok(())
            }
            _ => Err(ParseError::FunctionNotClosed {
                function: function.to_string(),
            }),
        }
    }

    /// `;` followed by nothing but blanks to end of input.
    fn parse_sentence_close(&mut self) -> Result<(), ParseError> {
        let index = match self.next_non_blank() {
            Some(index) if self.chars[index] == ';' => index,
            _ => return Err(ParseError::SentenceNotClosed),
        };
        self.pos = index + 1;
        while self.pos < self.chars.len() {
            if !self.chars[self.pos].is_whitespace() {
                return Err(ParseError::SentenceNotClosed);
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// First parameter: `variable` optionally followed by `.method()`,
    /// composed into one string.
    fn parse_variable_param(&mut self, function: &str) -> Result<String, ParseError> {
        let variable = self.parse_variable_name()?;
        let index = self
            .next_non_blank()
            .ok_or_else(|| ParseError::FunctionNotClosed {
                function: function.to_string(),
            })?;
        if self.chars[index] == '.' {
            self.set_pos(index + 1)?;
            let method = self.parse_method_name()?;
            return Ok(format!("{variable}.{method}"));
        }
        Ok(variable)
    }

    fn parse_variable_name(&mut self) -> Result<String, ParseError> {
        let index = self.next_non_blank().ok_or(ParseError::FieldNameExpected)?;
        let (name, end) = self.scan_name(index, VARIABLE_STOP);
        if name.is_empty() {
            return Err(ParseError::FieldNameExpected);
        }
        self.set_pos(end)?;
        Ok(name)
    }

    /// `name()` with blanks permitted around the parentheses.
    fn parse_method_name(&mut self) -> Result<String, ParseError> {
        let index = self
            .next_non_blank()
            .ok_or(ParseError::MethodInvocationExpected { position: self.pos })?;
        let (name, end) = self.scan_name(index, METHOD_STOP);
        if name.is_empty() {
            return Err(ParseError::MethodInvocationExpected { position: index });
        }
        self.set_pos(end)?;

        match self.next_non_blank() {
            Some(open) if self.chars[open] == '(' => self.set_pos(open + 1)?,
            _ => return Err(ParseError::MethodNotOpened { method: name }),
        }
        match self.next_non_blank() {
            Some(close) if self.chars[close] == ')' => self.set_pos(close + 1)?,
            _ => return Err(ParseError::MethodNotClosed { method: name }),
        }
        Ok(format!("{name}()"))
    }

    fn parse_param_delimiter(&mut self) -> Result<(), ParseError> {
        match self.next_non_blank() {
            Some(index) if self.chars[index] == ',' => self.set_pos(index + 1),
            _ => Err(ParseError::ParamDelimiterExpected),
        }
    }

    /// Double-quoted string value. A `"` whose immediately preceding char is
    /// `\` does not close the literal, and the backslash stays in the
    /// decoded value. No other escape processing happens.
    fn parse_string_parameter(&mut self) -> Result<String, ParseError> {
        let index = match self.next_non_blank() {
            Some(index) if self.chars[index] == '"' => index,
            _ => return Err(ParseError::StringParameterExpected { position: self.pos }),
        };

        let mut value = String::new();
        let mut consumed = 0;
        let mut last = None;
        let mut closed = false;
        for i in index + 1..self.chars.len() {
            let c = self.chars[i];
            if c == '"' && last != Some('\\') {
                closed = true;
                break;
            }
            value.push(c);
            consumed += 1;
            last = Some(c);
        }

        if !closed {
            return Err(ParseError::StringParameterExpected { position: self.pos });
        }
        self.set_pos(index + consumed + 2)?;
        Ok(value)
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Index of the next non-blank char at or after the cursor.
    fn next_non_blank(&self) -> Option<usize> {
        (self.pos..self.chars.len()).find(|&index| !self.chars[index].is_whitespace())
    }

    /// True if `literal` occurs in the input starting at `start`.
    fn matches_at(&self, start: usize, literal: &str) -> bool {
        let mut index = start;
        for expected in literal.chars() {
            if index >= self.chars.len() || self.chars[index] != expected {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Maximal run of chars from `start` not in the stop set.
    /// Returns the run and the index one past its last char.
    fn scan_name(&self, start: usize, stop: &[char]) -> (String, usize) {
        let mut end = start;
        while end < self.chars.len() && !stop.contains(&self.chars[end]) {
            end += 1;
        }
        (self.chars[start..end].iter().collect(), end)
    }

    /// Move the cursor, guarding against running past the end of the input.
    fn set_pos(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos >= self.chars.len() {
            return Err(ParseError::OutOfBounds);
        }
        self.pos = pos;
        Ok(())
    }
}
