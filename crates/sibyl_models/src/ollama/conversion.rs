//! Type conversions between Ollama and Sibyl types.

use ollama_rs::generation::completion::GenerationResponse;
use sibyl_core::{Input, Message, Output, Role};

/// Flatten Sibyl messages into a single Ollama prompt.
pub fn messages_to_prompt(messages: &[Message]) -> String {
    let mut prompt = String::new();

    for msg in messages {
        let role_prefix = match msg.role {
            Role::User => "User: ",
            Role::Assistant => "Assistant: ",
            Role::System => "System: ",
        };

        prompt.push_str(role_prefix);

        for input in &msg.content {
            match input {
                Input::Text(text) => {
                    prompt.push_str(text);
                    prompt.push('\n');
                }
            }
        }

        prompt.push('\n');
    }

    prompt
}

/// Convert an Ollama response to a Sibyl output.
pub fn response_to_output(response: GenerationResponse) -> Output {
    Output::Text(response.response)
}
