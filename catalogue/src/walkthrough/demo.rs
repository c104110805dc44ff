use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::Topic;
use crate::error::{CatalogueError, Result};

pub type Runner = Box<dyn Fn() -> Result<Value> + Send + Sync>;

/// One worked example: a named input, the answer it should produce, and
/// the code that produces it.
pub struct Demo {
    pub name:     &'static str,
    pub topic:    Topic,
    pub input:    String,
    pub expected: Value,
    runner:       Runner,
}

impl Demo {
    pub fn new<F>(name: &'static str, topic: Topic, input: impl Into<String>, expected: Value, runner: F) -> Self
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Self { name, topic, input: input.into(), expected, runner: Box::new(runner) }
    }

    pub fn run(&self) -> Outcome {
        let (actual, error) = match (self.runner)() {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        let passed = actual.as_ref() == Some(&self.expected);
        if passed {
            debug!(demo = self.name, topic = %self.topic, "demo passed");
        } else {
            warn!(demo = self.name, topic = %self.topic, ?actual, expected = %self.expected, "demo mismatch");
        }
        Outcome {
            name: self.name,
            topic: self.topic,
            input: self.input.clone(),
            expected: self.expected.clone(),
            actual,
            error,
            passed,
        }
    }
}

impl std::fmt::Debug for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("topic", &self.topic)
            .field("input", &self.input)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// Renders any serialisable answer as JSON.
pub fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CatalogueError::Render(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub name:     &'static str,
    pub topic:    Topic,
    pub input:    String,
    pub expected: Value,
    pub actual:   Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:    Option<String>,
    pub passed:   bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize   { self.outcomes.iter().filter(|o| o.passed).count() }
    pub fn failed(&self) -> usize   { self.outcomes.len() - self.passed() }
    pub fn all_passed(&self) -> bool { self.outcomes.iter().all(|o| o.passed) }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let mut topic = None;
        for o in &self.outcomes {
            if topic != Some(o.topic) {
                let _ = writeln!(out, "=== {} ===", o.topic);
                topic = Some(o.topic);
            }
            let mark = if o.passed { "ok  " } else { "FAIL" };
            let actual = match (&o.actual, &o.error) {
                (Some(v), _) => v.to_string(),
                (None, Some(e)) => format!("error: {e}"),
                (None, None) => "-".to_owned(),
            };
            let _ = writeln!(out, "[{mark}] {:<28} | {:<40} | {actual}", o.name, o.input);
            if !o.passed {
                let _ = writeln!(out, "       expected {}", o.expected);
            }
        }
        let _ = writeln!(out, "\n{} passed, {} failed", self.passed(), self.failed());
        out
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) }
    }
}
