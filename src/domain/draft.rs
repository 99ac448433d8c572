//! ConfigDraft - In-Progress Node Configuration

use serde::{Deserialize, Serialize};

use crate::domain::cpu::Cpu;

/// The user's in-progress compute node description.
///
/// All fields start empty/unset; the form state controller is the only
/// writer. `memory_size` holds the last parsed entry even when it failed a
/// range or granularity check, so the user's input is never silently
/// discarded (signed, because an out-of-range negative entry is still
/// stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigDraft {
    /// Selected CPU architecture; `None` until the user picks one
    pub cpu: Option<Cpu>,
    /// Memory size in megabytes; `None` until the user enters a number
    pub memory_size: Option<i64>,
    /// Whether the node is GPU accelerated
    pub is_gpu_accelerated: bool,
}
