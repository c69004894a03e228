//! Main module for symlog library functionality

pub mod alphabets;
pub mod ast;
pub mod building;
pub mod classifying;
pub mod error;
pub mod language;
pub mod lexing;
pub mod loader;
pub mod logging;
pub mod matching;
pub mod queries;
pub mod testing;
pub mod token;
pub mod transforms;
pub mod unabbreviation;
