//! Core types shared by the URM program model, combinators and interpreter.

pub mod config;
pub mod error;

pub use config::*;
pub use error::{Error, Result};
