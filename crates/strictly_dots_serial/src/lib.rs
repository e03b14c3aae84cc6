//! Host-side serial driver for the strictly_dots game core.
//!
//! Stands in for the device's polling super-loop: one character is read
//! from the link per tick, handed to the [`TurnEngine`](strictly_dots::TurnEngine),
//! and the resulting echo and prompts are written straight back.
//!
//! # Architecture
//!
//! - **Link**: byte-stream transport ([`SerialLink`], [`StreamLink`])
//! - **Session**: the polling loop ([`Session`])
//! - **Settings**: board size from TOML and command-line overrides ([`GameConfig`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod link;
mod session;
mod settings;

pub use cli::{Cli, Command};
pub use link::{SerialLink, StreamLink};
pub use session::{Session, Tick};
pub use settings::GameConfig;
