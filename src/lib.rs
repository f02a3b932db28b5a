#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod bridge;
pub mod cli;
pub mod config;
pub mod entities;
pub mod error;
pub mod mcp;
pub mod web;

mod render;
mod sources;
mod transform;
