pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod piece;
pub mod types;
