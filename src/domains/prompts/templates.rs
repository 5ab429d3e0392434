//! Prompt templates module.
//!
//! Templates use a small placeholder syntax:
//! - `{{variable}}` is replaced with the argument value (or removed if unset)
//! - `{{#if variable}}...{{/if}}` keeps its body only when the argument is non-empty
//! - `{{#if variable}}...{{else}}...{{/if}}` picks one of two bodies
//!
//! Conditionals do not nest.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.template, arguments)?;
        substitute(&expanded, arguments)
    }
}

/// Replace every `{{#if}}` block by the branch selected by `arguments`.
fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + IF_OPEN.len()..];

        let (var, body) = after_open
            .split_once("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let (block, tail) = body
            .split_once(END_IF)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
        let (when_set, when_unset) = block.split_once(ELSE).unwrap_or((block, ""));

        let is_set = arguments
            .get(var.trim())
            .is_some_and(|value| !value.is_empty());
        out.push_str(if is_set { when_set } else { when_unset });

        rest = tail;
    }

    out.push_str(rest);
    Ok(out)
}

/// Replace `{{name}}` placeholders; unknown names render as nothing.
fn substitute(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let (name, tail) = rest[start + 2..]
            .split_once("}}")
            .ok_or_else(|| PromptError::template("Unclosed placeholder"))?;

        if let Some(value) = arguments.get(name.trim()) {
            out.push_str(value);
        }
        rest = tail;
    }

    out.push_str(rest);
    Ok(out)
}
