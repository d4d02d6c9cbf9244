//! A small interactive quiz for memorizing shell shortcuts.
//!
//! The crate reads a shell snippet containing `alias name='command' # comment`
//! lines and function definitions grouped under `## Section` markers, turns them
//! into [`Item`]s and drills the user by showing a description and asking for the
//! matching shortcut name.
//!
//! The core is split in two halves. [`extractor`] turns text into items and
//! [`quiz`] runs a scored session over a selection of them. Everything that
//! touches the terminal lives in [`render`], [`console`] and [`app`].

pub mod app;
pub mod category;
pub mod console;
pub mod env;
pub mod error;
pub mod extractor;
pub mod item;
mod lexer;
pub mod quiz;
pub mod render;
pub mod select;
pub mod stats;

pub use error::ExtractError;
pub use extractor::{extract, load_items};
pub use item::{Item, ItemKind};
pub use quiz::{Prompter, Reply, SessionResult, Tier, run_session};
