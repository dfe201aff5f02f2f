use clap::Parser;

use flashcards_backend::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcards_backend::run(Cli::parse()).await
}
