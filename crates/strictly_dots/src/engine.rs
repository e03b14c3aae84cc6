//! Per-character turn engine.
//!
//! One call to [`TurnEngine::process_char`] per polling tick. Most ticks
//! only move the parser along; the tick that completes a token also runs
//! the whole normalize → validate → claim → score → advance pipeline.

use super::action::{Move, MoveError};
use super::config::BoardConfig;
use super::parser::{Intake, MoveParser, RawToken, normalize};
use super::protocol;
use super::rules::Outcome;
use super::state::{GameState, TurnReport};
use super::types::{BoxPair, LineIndex, PlayerId, Scores};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the engine is between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnginePhase {
    /// Collecting characters for the next move.
    AwaitingMove,
    /// Every line is drawn; input is ignored.
    GameOver,
}

/// A freshly drawn line, for whoever renders the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnLine {
    /// Line number.
    pub index: LineIndex,
    /// The move that drew it.
    pub mv: Move,
    /// Who drew it (and so which color).
    pub player: PlayerId,
    /// Boxes to fill in that player's color.
    pub filled: BoxPair,
}

impl From<&TurnReport> for DrawnLine {
    fn from(report: &TurnReport) -> Self {
        Self {
            index: report.line,
            mv: report.mv,
            player: report.player,
            filled: report.completed,
        }
    }
}

/// What the caller should do after feeding one character.
///
/// Every variant except `None` and `Echo` means a token was completed;
/// its last character is in `echo` and should be echoed before anything
/// else is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptAction {
    /// Character ignored. Send nothing.
    None,
    /// Character accepted. Echo it.
    Echo(char),
    /// Token rejected. Show the instructions again.
    Reprompt {
        /// Last character of the token.
        echo: char,
        /// Why it was rejected.
        reason: MoveError,
    },
    /// Line drawn; the game goes on.
    MoveAccepted {
        /// Last character of the token.
        echo: char,
        /// Line to render.
        draw_line: DrawnLine,
        /// Boxes the line closed.
        boxes_won: usize,
        /// Who moves next.
        next_player: PlayerId,
    },
    /// Last line drawn.
    GameOver {
        /// Last character of the token.
        echo: char,
        /// Line to render.
        draw_line: DrawnLine,
        /// Boxes the line closed.
        boxes_won: usize,
        /// Final tally.
        scores: Scores,
        /// Who won.
        outcome: Outcome,
    },
}

impl PromptAction {
    /// Character to echo, if any.
    pub fn echo(&self) -> Option<char> {
        match self {
            PromptAction::None => None,
            PromptAction::Echo(echo)
            | PromptAction::Reprompt { echo, .. }
            | PromptAction::MoveAccepted { echo, .. }
            | PromptAction::GameOver { echo, .. } => Some(*echo),
        }
    }

    /// True when this character finished a token.
    pub fn completes_token(&self) -> bool {
        !matches!(self, PromptAction::None | PromptAction::Echo(_))
    }
}

/// Drives one game from serial input.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    state: GameState,
    parser: MoveParser,
    phase: EnginePhase,
}

impl TurnEngine {
    /// Starts a new game on a confirmed board.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        Self::resume(GameState::new(config))
    }

    /// Continues from an existing state with an empty input buffer.
    #[instrument(skip(state), fields(turn = state.turn_count()))]
    pub fn resume(state: GameState) -> Self {
        let phase = if state.is_over() {
            EnginePhase::GameOver
        } else {
            EnginePhase::AwaitingMove
        };
        Self {
            state,
            parser: MoveParser::new(),
            phase,
        }
    }

    /// The game so far.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// True once every line is drawn.
    pub fn is_over(&self) -> bool {
        self.phase == EnginePhase::GameOver
    }

    /// Characters accepted into the move being typed.
    pub fn pending_len(&self) -> usize {
        self.parser.len()
    }

    /// Prompt for the player whose turn it is.
    pub fn prompt(&self) -> String {
        protocol::first_question(self.state.current_player(), self.state.config())
    }

    /// Abandons a partially typed move.
    #[instrument(skip(self))]
    pub fn reset_input(&mut self) {
        self.parser.reset();
    }

    /// Feeds one received character.
    #[instrument(
        level = "trace",
        skip(self),
        fields(phase = ?self.phase, pos = self.parser.len())
    )]
    pub fn process_char(&mut self, c: char) -> PromptAction {
        if self.phase == EnginePhase::GameOver {
            return PromptAction::None;
        }

        match self.parser.feed(c, self.state.config().max_digit()) {
            Intake::Ignored => PromptAction::None,
            Intake::Accepted(echo) => PromptAction::Echo(echo),
            Intake::Complete { echo, token } => self.submit(echo, token),
        }
    }

    fn submit(&mut self, echo: char, token: RawToken) -> PromptAction {
        debug!(?token, "Validating move");

        let result = normalize(token)
            .map_err(MoveError::from)
            .and_then(|mv| self.state.apply_move(mv));

        let report = match result {
            Ok(report) => report,
            Err(reason) => {
                info!(%reason, "Move rejected");
                return PromptAction::Reprompt { echo, reason };
            }
        };

        let draw_line = DrawnLine::from(&report);
        let boxes_won = report.boxes_won();

        if report.game_over {
            self.phase = EnginePhase::GameOver;
            let scores = self.state.scores();
            let outcome = Outcome::from_scores(&scores);
            info!(%scores, %outcome, "Game over");
            return PromptAction::GameOver {
                echo,
                draw_line,
                boxes_won,
                scores,
                outcome,
            };
        }

        PromptAction::MoveAccepted {
            echo,
            draw_line,
            boxes_won,
            next_player: report.next_player,
        }
    }
}
