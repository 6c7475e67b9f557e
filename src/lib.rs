#![warn(rust_2018_idioms, missing_debug_implementations)]
mod calcul;
mod config;
mod domain;
mod engine;
mod io;
pub mod program;
pub mod server;

pub use crate::calcul::*;
pub use crate::config::*;
pub use crate::domain::*;
pub use crate::engine::*;
pub use crate::io::*;
pub use crate::program::*;
