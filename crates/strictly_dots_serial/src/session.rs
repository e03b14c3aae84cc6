//! The polling loop: one character per tick, replies sent immediately.

use crate::link::SerialLink;
use anyhow::{Context, Result};
use strictly_dots::{BoardConfig, Outcome, PromptAction, TurnEngine, protocol};
use tracing::{debug, info, instrument, warn};

/// What happened on one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Nothing received, or the character was ignored.
    Idle,
    /// A character was taken in.
    Progress(PromptAction),
    /// The game had already ended; input is discarded.
    Finished,
    /// The link closed before the game ended.
    Disconnected,
}

/// One game played over one link.
#[derive(Debug)]
pub struct Session<L> {
    engine: TurnEngine,
    link: L,
    started: bool,
}

impl<L: SerialLink> Session<L> {
    /// Creates a session on a confirmed board.
    pub fn new(config: BoardConfig, link: L) -> Self {
        Self {
            engine: TurnEngine::new(config),
            link,
            started: false,
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Gives back the link.
    pub fn into_link(self) -> L {
        self.link
    }

    /// Sends the opening prompt to Player 1.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<()> {
        info!(board = %self.engine.state().config(), "Starting game");
        self.started = true;
        self.link
            .send_str(&self.engine.prompt())
            .context("Failed to send opening prompt")
    }

    /// Polls the link once and answers whatever arrived.
    #[instrument(skip(self), fields(turn = self.engine.state().turn_count()))]
    pub fn tick(&mut self) -> Result<Tick> {
        if !self.started {
            self.start()?;
        }

        let Some(c) = self.link.poll_char().context("Failed to read from link")? else {
            if self.link.is_closed() {
                return Ok(if self.engine.is_over() {
                    Tick::Finished
                } else {
                    Tick::Disconnected
                });
            }
            return Ok(Tick::Idle);
        };

        if self.engine.is_over() {
            debug!(?c, "Discarding input after game over");
            return Ok(Tick::Finished);
        }

        let action = self.engine.process_char(c);
        if action == PromptAction::None {
            return Ok(Tick::Idle);
        }

        let mut reply = protocol::render(&action, self.engine.state().config());
        if let PromptAction::GameOver {
            scores, outcome, ..
        } = &action
        {
            reply.push_str("\n\r");
            reply.push_str(&protocol::results(scores, outcome));
            reply.push_str("\n\r");
        }
        self.link
            .send_str(&reply)
            .context("Failed to send reply")?;

        Ok(Tick::Progress(action))
    }

    /// Runs until the game ends or the link closes.
    ///
    /// Returns the outcome, or `None` if the player hung up first.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        loop {
            match self.tick()? {
                Tick::Progress(PromptAction::GameOver { outcome, .. }) => {
                    info!(%outcome, "Game finished");
                    return Ok(Some(outcome));
                }
                Tick::Finished => return Ok(self.engine.state().outcome()),
                Tick::Disconnected => {
                    warn!(
                        turn = self.engine.state().turn_count(),
                        "Link closed mid-game"
                    );
                    return Ok(None);
                }
                Tick::Idle | Tick::Progress(_) => {}
            }
        }
    }
}
