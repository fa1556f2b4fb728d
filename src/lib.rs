//! Lead Chat — guided lead-capture conversation engine.

pub mod config;
pub mod conversation;
pub mod error;
pub mod leads;
pub mod runtime;
