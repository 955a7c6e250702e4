//! Main module for mml library functionality

pub mod lexing;
pub mod style;
pub mod testing;
pub mod token;
pub mod vocabulary;
