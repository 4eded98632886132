//! Confirmation prompts for destructive operations

use std::io::{stderr, Write};

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// A yes/no question with a named affirmative answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub affirmative: String,
}

impl Prompt {
    pub fn new(message: impl Into<String>, affirmative: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            affirmative: affirmative.into(),
        }
    }

    pub fn delete_color(name: &str) -> Self {
        Self::new(format!("Delete color \"{}\"?", name), "Yes, delete")
    }

    pub fn delete_recent(name: &str) -> Self {
        Self::new(format!("Delete saved color \"{}\"?", name), "Yes, delete")
    }

    pub fn clear_recent() -> Self {
        Self::new("Clear all saved colors?", "Yes, clear")
    }

    pub fn reset() -> Self {
        Self::new("Reset project color to default?", "Yes")
    }
}

/// Asks the user before an irreversible change
///
/// Only an explicit affirmative counts; dismissing the prompt is a decline.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &Prompt) -> bool;
}

/// Confirms everything without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&self, _prompt: &Prompt) -> bool {
        true
    }
}

/// Single-keypress prompt on the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

#[async_trait]
impl Confirm for TerminalPrompt {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        let prompt = prompt.clone();
        let answer = tokio::task::spawn_blocking(move || ask(&prompt)).await;

        match answer {
            Ok(Ok(confirmed)) => confirmed,
            Ok(Err(e)) => {
                tracing::warn!("confirmation prompt failed: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("confirmation prompt panicked: {}", e);
                false
            }
        }
    }
}

/// Restores cooked mode even if reading the key fails
struct RawMode;

impl RawMode {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn ask(prompt: &Prompt) -> std::io::Result<bool> {
    let mut err = stderr();
    write!(
        err,
        "{}  {}  {} ",
        prompt.message.as_str().bold(),
        format!("[y] {}", prompt.affirmative).red().bold(),
        "[n] No".green().bold(),
    )?;
    err.flush()?;

    let confirmed = {
        let _raw = RawMode::enter()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    break is_affirmative(key.code);
                }
                _ => {}
            }
        }
    };

    writeln!(err, "{}", if confirmed { "y" } else { "n" })?;
    Ok(confirmed)
}

fn is_affirmative(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('y') | KeyCode::Char('Y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_messages() {
        assert_eq!(
            Prompt::delete_color("Ocean"),
            Prompt::new("Delete color \"Ocean\"?", "Yes, delete")
        );
        assert_eq!(Prompt::clear_recent().affirmative, "Yes, clear");
        assert_eq!(Prompt::reset().message, "Reset project color to default?");
    }

    #[test]
    fn test_only_y_is_affirmative() {
        assert!(is_affirmative(KeyCode::Char('y')));
        assert!(is_affirmative(KeyCode::Char('Y')));
        assert!(!is_affirmative(KeyCode::Char('n')));
        assert!(!is_affirmative(KeyCode::Enter));
        assert!(!is_affirmative(KeyCode::Esc));
    }

    #[tokio::test]
    async fn test_assume_yes() {
        assert!(AssumeYes.confirm(&Prompt::reset()).await);
    }
}
