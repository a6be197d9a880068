//! Natural-language query parsing.
//!
//! Converts free text ("What is the status of ticket 83742?") into a
//! `FunctionCall` with typed arguments. Recognizers are tried in a fixed
//! priority order and the first hit wins; when nothing matches the result
//! is `FunctionCall::Unknown`.

pub mod rules;

use fc_protocol::{FunctionCall, FunctionName};

/// A single rule that recognizes one intent.
pub trait Recognizer: Send + Sync {
    /// Intent this recognizer produces.
    fn intent(&self) -> FunctionName;

    /// Try to recognize `text` (already lower-cased).
    /// Returns None when the rule does not apply.
    fn try_match(&self, text: &str) -> Option<FunctionCall>;
}

/// Ordered recognizer list. Earlier entries take precedence.
pub struct QueryParser {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl QueryParser {
    pub fn new(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    /// Build with the five built-in intents in their fixed order.
    pub fn with_defaults() -> Self {
        Self::new(rules::default_recognizers())
    }

    /// Resolve a query to a function call. Never fails.
    pub fn parse(&self, query: &str) -> FunctionCall {
        let lower = query.to_lowercase();

        for recognizer in &self.recognizers {
            if let Some(call) = recognizer.try_match(&lower) {
                tracing::debug!(intent = %call.name(), "query matched");
                return call;
            }
        }

        tracing::debug!("no recognizer matched, returning unknown");
        FunctionCall::Unknown
    }

    /// Intents in evaluation order.
    pub fn intents(&self) -> Vec<FunctionName> {
        self.recognizers.iter().map(|r| r.intent()).collect()
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::with_defaults()
    }
}
