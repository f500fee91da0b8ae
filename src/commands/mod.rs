//! Command implementations for the FPL player CLI

pub mod player;
