pub mod definitions;
pub mod engine;
pub mod game;
pub mod utils;
