//! # Exile Rules
//!
//! The "World Bible" crate for Last72 - holds the player's stat model, the
//! catalog entity definitions (talents, events, choices, endings, talent
//! rules), and the content tables that ship with the game.
//! This crate is the single source of truth for game data and does not
//! contain any engine logic (selection, resolution, or session flow).

pub mod catalog;
pub mod content;
pub mod error;
pub mod stats;

pub use catalog::*;
pub use error::{CatalogError, Result};
pub use stats::*;
