//! Menu-driven console front end

use flashcard_core::{answers_match, parse_id, NewFlashcard};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::routes::decks::NO_DECKS_MESSAGE;

const MENU: &str = "\n--- Flashcards App ---
1. Add a new deck
2. Add flashcards to a deck
3. View all decks
4. Quiz on a deck
5. View flashcards in a deck
6. Exit
";

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console session over any line-oriented input and output.
pub struct Console<'a, R, W> {
    db: &'a Database,
    input: R,
    output: W,
}

impl<'a, R, W> Console<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(db: &'a Database, input: R, output: W) -> Self {
        Self { db, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Print a prompt and read one line; `None` at end of input.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Run the main menu until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.say(MENU.trim_end()).await?;
            let Some(choice) = self.prompt("Choose an option: ").await? else {
                break;
            };

            match self.act(choice.trim()).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is_user_facing() => {
                    tracing::debug!(error = %err, "console input rejected");
                    self.say(&err.user_message()).await?;
                }
                Err(err) => return Err(err),
            }
        }

        self.say("Goodbye!").await
    }

    async fn act(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_deck().await,
            "2" => self.add_flashcard().await,
            "3" => {
                self.display_decks().await?;
                Ok(Flow::Continue)
            }
            "4" => self.start_quiz().await,
            "5" => self.view_flashcards().await,
            "6" => Ok(Flow::Exit),
            _ => {
                self.say("Invalid choice! Please try again.").await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn add_deck(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter deck name: ").await? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            self.say("Deck name cannot be empty.").await?;
            return Ok(Flow::Continue);
        }
        let Some(description) = self.prompt("Enter deck description: ").await? else {
            return Ok(Flow::Exit);
        };

        self.db.create_deck(&name, description.trim()).await?;
        self.say(&format!("Deck '{}' added successfully!", name)).await?;
        Ok(Flow::Continue)
    }

    async fn display_decks(&mut self) -> Result<()> {
        let decks = self.db.list_decks().await?;
        if decks.is_empty() {
            return self.say(NO_DECKS_MESSAGE).await;
        }

        self.say("Available Decks:").await?;
        for deck in decks {
            self.say(&format!("{}. {} - {}", deck.id, deck.name, deck.description))
                .await?;
        }
        Ok(())
    }

    /// Ask for a deck id and make sure the deck exists.
    async fn choose_deck(&mut self, prompt: &str) -> Result<Option<i64>> {
        let Some(raw) = self.prompt(prompt).await? else {
            return Ok(None);
        };
        let deck_id = parse_id(&raw)?;
        if self.db.get_deck(deck_id).await?.is_none() {
            return Err(AppError::NotFound("Deck not found.".to_string()));
        }
        Ok(Some(deck_id))
    }

    async fn add_flashcard(&mut self) -> Result<Flow> {
        self.display_decks().await?;
        let Some(deck_id) = self.choose_deck("\nEnter deck ID to add flashcards: ").await? else {
            return Ok(Flow::Exit);
        };

        let Some(question) = self.prompt("Enter question: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(answer) = self.prompt("Enter answer: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(hint) = self.prompt("Enter hint (optional): ").await? else {
            return Ok(Flow::Exit);
        };

        let card = NewFlashcard::new(&question, &answer, Some(&hint))?;
        self.db
            .create_flashcard(deck_id, &card.question, &card.answer, card.hint.as_deref())
            .await?;
        self.say("Flashcard added successfully!").await?;
        Ok(Flow::Continue)
    }

    async fn view_flashcards(&mut self) -> Result<Flow> {
        self.display_decks().await?;
        let Some(deck_id) = self.choose_deck("\nEnter deck ID to view: ").await? else {
            return Ok(Flow::Exit);
        };

        let cards = self.db.list_flashcards(deck_id).await?;
        if cards.is_empty() {
            self.say("No flashcards available in this deck.").await?;
            return Ok(Flow::Continue);
        }

        self.say("\nFlashcards:").await?;
        for card in cards {
            self.say(&format!(
                "Q: {} | A: {} | Hint: {}",
                card.question,
                card.answer,
                card.hint.as_deref().unwrap_or("")
            ))
            .await?;
        }
        Ok(Flow::Continue)
    }

    async fn start_quiz(&mut self) -> Result<Flow> {
        self.display_decks().await?;
        let Some(deck_id) = self.choose_deck("\nEnter deck ID to quiz on: ").await? else {
            return Ok(Flow::Exit);
        };

        let cards = self.db.list_flashcards(deck_id).await?;
        if cards.is_empty() {
            self.say("No flashcards available in this deck to quiz on.").await?;
            return Ok(Flow::Continue);
        }

        let total = cards.len();
        let mut score = 0;
        for card in cards {
            self.say(&format!("\nQ: {}", card.question)).await?;
            let Some(typed) = self.prompt("Your answer: ").await? else {
                return Ok(Flow::Exit);
            };

            let correct = answers_match(&typed, &card.answer);
            self.db.record_answer(card.id, correct).await?;
            if correct {
                score += 1;
            }

            self.say(&format!("Correct answer: {}", card.answer)).await?;
            let verdict = if correct { "correct" } else { "incorrect" };
            self.say(&format!("Your answer was {}!", verdict)).await?;
        }

        self.say(&format!("\nScore: {}/{}", score, total)).await?;
        Ok(Flow::Continue)
    }
}

/// Run the console front end on stdin/stdout.
pub async fn run(db: &Database) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    Console::new(db, stdin, stdout).run().await
}
