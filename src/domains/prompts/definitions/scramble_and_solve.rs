//! Scramble-and-solve prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Walks the model through validating, building and opening a solving URL.
pub struct ScrambleAndSolvePrompt;

impl PromptDefinition for ScrambleAndSolvePrompt {
    const NAME: &'static str = "scramble_and_solve";
    const DESCRIPTION: &'static str =
        "Scramble the cube with a move sequence and open the solver so it starts solving";

    fn template() -> String {
        "Scramble the Rubik's cube with the moves \"{{moves}}\" and watch it being solved.\n\
         \n\
         1. Call validate_parameters with moves=\"{{moves}}\"{{#if speed}} and speed={{speed}}{{/if}} and solve=1.\n\
         2. If every parameter is valid, call generate_solver_url with the same arguments.\n\
         3. Call open_browser with the URL returned in step 2.\n\
         \n\
         {{#if speed}}Use animation speed {{speed}}.{{else}}Leave the animation speed at the application default.{{/if}} \
         Report the generated URL and whether the browser opened."
            .to_string()
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "moves".to_string(),
                title: None,
                description: Some(
                    "Scramble sequence in cube notation, e.g. \"D F R' 2U\" or \"S S S S\""
                        .to_string(),
                ),
                required: Some(true),
            },
            PromptArgument {
                name: "speed".to_string(),
                title: None,
                description: Some("Animation speed from 1 (slow) to 5 (no animation)".to_string()),
                required: Some(false),
            },
        ]
    }
}
