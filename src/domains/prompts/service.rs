//! Prompt service implementation.
//!
//! The PromptService keeps the registered prompt templates and renders them
//! with client-supplied arguments.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with all registered prompts.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: HashMap::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

/// Keep the string-valued entries of a JSON argument object.
///
/// Prompt arguments are strings on the wire; anything else is dropped.
pub fn string_arguments(
    object: &serde_json::Map<String, serde_json::Value>,
) -> HashMap<String, String> {
    object
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
        .collect()
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn message_text(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let service = PromptService::new();
        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_scramble_and_solve_with_speed() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("moves".to_string(), "D F R'".to_string());
        args.insert("speed".to_string(), "4".to_string());

        let result = service
            .get_prompt("scramble_and_solve", Some(args))
            .await
            .unwrap();
        let text = message_text(&result);
        assert!(text.contains("moves=\"D F R'\" and speed=4 and solve=1"));
        assert!(text.contains("Use animation speed 4."));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_scramble_and_solve_without_speed() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("moves".to_string(), "S S S S".to_string());

        let result = service
            .get_prompt("scramble_and_solve", Some(args))
            .await
            .unwrap();
        let text = message_text(&result);
        assert!(text.contains("moves=\"S S S S\" and solve=1"));
        assert!(text.contains("application default"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new();
        let result = service.get_prompt("scramble_and_solve", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[test]
    fn test_string_arguments_drops_non_strings() {
        let value = serde_json::json!({ "moves": "R U", "speed": 3 });
        let args = string_arguments(value.as_object().unwrap());
        assert_eq!(args.len(), 1);
        assert_eq!(args["moves"], "R U");
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(result.is_err());
    }
}
