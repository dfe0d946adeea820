use lightbnb_model::core::value::Value;
use serde::Serialize;
use std::fmt;

/// SQL text with positional placeholders and the values bound to them.
///
/// `parameters[i]` binds `$(i + 1)`; the text never embeds a literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    text: String,
    parameters: Vec<Value>,
}

impl CompiledQuery {
    pub(crate) fn new(text: String, parameters: Vec<Value>) -> Self {
        Self { text, parameters }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.parameters)
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} param(s)", self.text, self.parameters.len())
    }
}
