//! Conversation demo: the session resends the full history on every
//! exchange, so the model remembers earlier turns without any caller effort.
//!
//! Needs `OPENAI_API_KEY` in the environment or a `.env` file.
//!
//! Run with: `cargo run --example chat`

use openai_client::models::ModelId;
use openai_client::{ChatMessage, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openai_client::util::init_tracing();

    let client = Client::from_env()?;
    let mut chat = client.chat(ModelId::Gpt35Turbo);

    let response = chat.send("Hello ChatGPT! My name is Dimitri").await?;
    println!("chatgpt: {}", response.text());

    let response = chat.send("What is my name?").await?;
    println!("chatgpt: {}", response.text());

    // Several turns in one exchange.
    let response = chat
        .send_messages(vec![
            ChatMessage::system("You are a french teacher and answer in french"),
            ChatMessage::user("How are you?"),
        ])
        .await?;
    println!("chatgpt: {}", response.text());

    // Display the entire conversation.
    println!("\nConversation:\n{chat}");
    Ok(())
}
