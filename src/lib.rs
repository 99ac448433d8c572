//! Server Composer Core Library
//!
//! Decision logic for the Server Composer form: validating a requested
//! memory size, tracking the in-progress configuration draft, and
//! classifying a finished configuration into the server models that can
//! host it. The presentation layer is a thin collaborator that feeds
//! field events in and renders the error messages and result list out.

pub mod classify;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod state;
pub mod validation;
