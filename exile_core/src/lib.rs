//! # Exile Core
//!
//! The engine of Last72. This crate reads the catalog and stat model from
//! `exile_rules` and decides, turn by turn, what happens next.
//!
//! ## Core Components
//!
//! - **endings**: Ending Evaluator, first match in declaration order
//! - **selector**: Event Selector, filtering plus priority-tier random pick
//! - **resolver**: Choice Resolver, effects, talent modifiers, clamping, deltas
//! - **session**: Session Controller, the phase machine presentation talks to
//!
//! ## Design Philosophy
//!
//! - **Pure steps**: selection and resolution are functions of state and catalog;
//!   only the session owns and replaces the Stat Record
//! - **Data-driven talents**: the engine applies registered rules, it knows no talent by name
//! - **Injectable randomness**: every random draw takes a caller-supplied `Rng`

pub mod config;
pub mod endings;
pub mod error;
pub mod resolver;
pub mod selector;
pub mod session;

pub use config::EngineConfig;
pub use endings::evaluate;
pub use error::{EngineError, Result};
pub use resolver::{apply_acquisition, resolve, Resolution};
pub use selector::{eligible_events, select_next, Selection};
pub use session::*;
