//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Loop: choose persona -> type question -> spinner -> reply (or error) -> again?

use crate::adapters::ui::progress;
use crate::domain::{ChatExchange, Persona, UiError};
use crate::ports::InputPort;
use crate::usecases::Responder;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{Confirm, Select, Text};
use std::io::{Write, stdout};
use std::sync::Arc;

/// Global inquire styling. Called once from `init_ui`.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("❯").with_fg(PromptColor::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(PromptColor::LightCyan));
    inquire::set_global_render_config(config);
}

/// `Ok(None)` when the user pressed Esc or Ctrl-C.
fn prompt_result<T>(res: Result<T, InquireError>) -> Result<Option<T>, UiError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(UiError(e.to_string())),
    }
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

fn render(exchange: &ChatExchange) {
    print_colored(Color::Cyan, &format!("[{}]", exchange.speaker()));
    let color = if exchange.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    print_colored(color, &exchange.display_text());
    println!();
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    responder: Arc<Responder>,
}

impl TuiInputPort {
    pub fn new(responder: Arc<Responder>) -> Self {
        Self { responder }
    }

    /// Returns `Ok(false)` when the user cancelled.
    async fn ask_once(&self) -> Result<bool, UiError> {
        let personas: Vec<Persona> = self.responder.catalog().personas();
        let Some(persona) = prompt_result(Select::new("Choose an expert:", personas).prompt())?
        else {
            return Ok(false);
        };

        let question = loop {
            let Some(text) = prompt_result(Text::new("Your question:").prompt())? else {
                return Ok(false);
            };
            if text.trim().is_empty() {
                print_colored(Color::Yellow, "Please enter a question.");
                continue;
            }
            break text;
        };

        let spinner = progress::spinner("Waiting for response...");
        let exchange = self.responder.exchange(persona.key(), &question).await;
        spinner.finish_and_clear();

        render(&exchange);
        Ok(true)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), UiError> {
        loop {
            if !self.ask_once().await? {
                return Ok(());
            }
            let again = prompt_result(
                Confirm::new("Ask another question?")
                    .with_default(true)
                    .prompt(),
            )?;
            if again != Some(true) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RespondError;

    #[test]
    fn test_cancel_is_not_an_error() {
        let res: Result<Option<()>, UiError> =
            prompt_result(Err(InquireError::OperationCanceled));
        assert!(matches!(res, Ok(None)));

        let res: Result<Option<()>, UiError> =
            prompt_result(Err(InquireError::OperationInterrupted));
        assert!(matches!(res, Ok(None)));
    }

    #[test]
    fn test_other_prompt_errors_propagate() {
        let res: Result<Option<()>, UiError> = prompt_result(Err(InquireError::NotTTY));
        assert!(res.is_err());
    }

    #[test]
    fn test_failed_exchange_displays_message() {
        let exchange = ChatExchange {
            persona_key: "doctor".into(),
            user_text: "hi".into(),
            instruction: None,
            outcome: Err(RespondError::EmptyInput),
        };
        assert_eq!(exchange.display_text(), "Please enter a question.");
    }
}
