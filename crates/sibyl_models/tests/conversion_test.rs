//! Tests for message-to-prompt conversion and client metadata.

use sibyl_core::{Message, Role};
use sibyl_interface::TextDriver;
use sibyl_models::{OllamaClient, messages_to_prompt};

#[test]
fn client_reports_its_provider_and_model() {
    let client = OllamaClient::new("llama3.2:3b");
    assert_eq!(client.provider_name(), "ollama");
    assert_eq!(client.model_name(), "llama3.2:3b");
}

#[test]
fn messages_flatten_with_role_prefixes() {
    let messages = vec![
        Message::system("You answer in SQL."),
        Message::user("Users older than 30 years"),
    ];

    let prompt = messages_to_prompt(&messages);

    assert!(prompt.starts_with("System: You answer in SQL.\n"));
    assert!(prompt.contains("User: Users older than 30 years\n"));
}

#[test]
fn user_and_system_constructors_set_roles() {
    let user = Message::user("question");
    let system = Message::system("context");
    assert_eq!(user.role, Role::User);
    assert_eq!(system.role, Role::System);
}
