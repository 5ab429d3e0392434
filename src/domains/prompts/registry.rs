//! The prompts this server offers.

use super::definitions::{ExplainNotationPrompt, PromptDefinition, ScrambleAndSolvePrompt};
use super::templates::PromptTemplate;

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

/// Every prompt, in listing order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<ScrambleAndSolvePrompt>(),
        build_template::<ExplainNotationPrompt>(),
    ]
}

pub fn prompt_names() -> Vec<&'static str> {
    vec![ScrambleAndSolvePrompt::NAME, ExplainNotationPrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }
}
