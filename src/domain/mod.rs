//! Domain - Pure Data Structures
//!
//! These types have no UI dependencies and represent the composer's
//! business domain: CPU architectures, server model categories, and the
//! in-progress configuration draft.

pub mod cpu;
pub mod draft;
pub mod server_model;

pub use cpu::Cpu;
pub use draft::ConfigDraft;
pub use server_model::ServerModel;
