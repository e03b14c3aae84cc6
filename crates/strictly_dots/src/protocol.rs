//! Text sent back over the serial link.
//!
//! The strings here are what a player sees in their terminal; keep them
//! byte-for-byte stable.

use super::config::BoardConfig;
use super::engine::PromptAction;
use super::rules::Outcome;
use super::types::{PlayerId, Scores};
use tracing::instrument;

/// Sent after the last character of every complete token.
pub const END_OF_TOKEN: &str = "\n\n\r";

/// Sent once the final line is drawn.
pub const GAME_OVER_NOTICE: &str = "Press BB1 to end the game";

const FORMATS: &str = "XYU | XYD | XYL | XYR | X1XY1X2Y2";

fn number_ranges(config: &BoardConfig) -> String {
    format!(
        "enter a number from 0-{} for X and 0-{} for Y with any of the following formats: {FORMATS}",
        config.width() - 1,
        config.height() - 1,
    )
}

/// Prompt at the start of a player's turn.
#[instrument]
pub fn first_question(player: PlayerId, config: &BoardConfig) -> String {
    format!("{player}, please {}", number_ranges(config))
}

/// Instructions repeated after a rejected token.
#[instrument]
pub fn instructions(config: &BoardConfig) -> String {
    format!("Please {}", number_ranges(config))
}

/// Final tally, one line per player, then the winner or `TIE`.
#[instrument]
pub fn results(scores: &Scores, outcome: &Outcome) -> String {
    let mut text = String::new();
    for player in PlayerId::ALL {
        text.push_str(&format!("{player}: {}\n\r", scores.get(player)));
    }
    text.push_str(&outcome.to_string());
    text
}

/// Everything to transmit in response to one character.
#[instrument(skip(action))]
pub fn render(action: &PromptAction, config: &BoardConfig) -> String {
    match action {
        PromptAction::None => String::new(),
        PromptAction::Echo(c) => c.to_string(),
        PromptAction::Reprompt { echo, .. } => {
            format!("{echo}{END_OF_TOKEN}{}", instructions(config))
        }
        PromptAction::MoveAccepted {
            echo, next_player, ..
        } => format!("{echo}{END_OF_TOKEN}{}", first_question(*next_player, config)),
        PromptAction::GameOver { echo, .. } => {
            format!("{echo}{END_OF_TOKEN}{GAME_OVER_NOTICE}")
        }
    }
}
