// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Habitat: a deterministic simulation of a bounded Martian land grid.
//!
//! The grid holds robots, rovers, plants, livestock, native fauna and
//! terrain. Units are moved one step at a time; every interaction is
//! resolved synchronously and feeds a single habitability score.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session (menus, console I/O)      │
//! ├─────────────────────────────────────┤
//! │   Resolvers, combat, scoring        │
//! ├─────────────────────────────────────┤
//! │   Grid, catalog, health table       │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod persistence;
pub mod session;

pub use config::SessionConfig;
pub use error::{FormatError, GridError, GridResult, SessionError, StepError};

// Re-export key game types at crate root for convenience
pub use game::{Coord, Direction, Entity, GridMap, HabitabilityReport, Habitat};
pub use session::{Session, SessionEnd};
