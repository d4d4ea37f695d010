//! Reusable widgets.

pub mod code_block;
pub mod coffee_game;
pub mod config_generator;
pub mod dependency_graph;
pub mod embed;
pub mod roadmap;
pub mod scroll_spy;
pub mod typewriter;
