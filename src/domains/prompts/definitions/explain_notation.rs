//! Move notation prompt definition.

use super::PromptDefinition;
use crate::domains::solver::parameters::MOVES;
use rmcp::model::PromptArgument;

/// Asks the model to explain the move notation understood by the solver.
pub struct ExplainNotationPrompt;

impl PromptDefinition for ExplainNotationPrompt {
    const NAME: &'static str = "explain_notation";
    const DESCRIPTION: &'static str =
        "Explain the cube move notation accepted by the solver's moves parameter";

    fn template() -> String {
        format!(
            "Explain the Rubik's cube move notation accepted by the solver application, \
             with a few short example sequences. The application documents it as follows:\n\n{}\n\n\
             Sequences are limited to {} characters.",
            MOVES.description,
            MOVES.max_length().unwrap_or_default()
        )
    }

    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}
