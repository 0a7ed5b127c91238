//! Snake Arena - one player snake against AI rivals competing for apples
//!
//! This library provides:
//! - Core game rules (game module): grid state, the rival decision
//!   heuristic, and the multi-agent tick resolution pass
//! - TUI rendering (render module) and keyboard input (input module)
//! - Session metrics (metrics module)
//! - Execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
