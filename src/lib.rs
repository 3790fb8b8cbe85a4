//! # Heuristic Connect Four
//!
//! Connect Four between a human and a computer opponent that looks one move
//! ahead: it takes an immediate win, blocks an immediate loss, and otherwise
//! plays the column with the best positional heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, line extraction, win detection, game state
//! - [`ai`] — Positional heuristic and move selection for the computer
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
