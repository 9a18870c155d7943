//! One-shot command-line chat client.
//!
//! Sends a single non-streaming request to the Ollama API and prints the
//! assistant reply. The prompt comes from the command line, or is asked for
//! interactively when no arguments are given.

use anyhow::Result;
use std::env;
use std::io::{self, Write};
use tokio_chat_proxy::core::direct::{DEFAULT_MODEL, chat_with_model};
use tokio_chat_proxy::infrastructure::upstream::ollama_api_url;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let prompt = if args.is_empty() {
        print!("Enter your question: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        line.trim().to_owned()
    } else {
        args.join(" ")
    };

    let model = env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
    let client = reqwest::Client::new();
    let response = chat_with_model(&client, &ollama_api_url(), &prompt, &model).await;

    println!("\nResponse:\n{response}");

    Ok(())
}
