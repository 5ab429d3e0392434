//! Prompt metadata and templates, one file per prompt.

mod explain_notation;
mod scramble_and_solve;

pub use explain_notation::ExplainNotationPrompt;
pub use scramble_and_solve::ScrambleAndSolvePrompt;

use rmcp::model::PromptArgument;

/// A named prompt with its argument list and template text.
pub trait PromptDefinition {
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    /// Template text; see [`crate::domains::prompts::templates`] for the syntax.
    fn template() -> String;

    fn arguments() -> Vec<PromptArgument>;
}
