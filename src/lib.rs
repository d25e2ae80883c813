//! Snake Arcade - a terminal snake game with weighted food spawning
//!
//! This library provides:
//! - Core simulation logic, free of any I/O (game module)
//! - Keyboard mapping for the terminal (input module)
//! - TUI rendering (render module)
//! - Session statistics across retries (metrics module)
//! - The interactive event loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
