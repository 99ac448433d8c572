//! FormState - Composer Form State and Controller
//!
//! Field-change events arrive as a closed enum (one variant per form
//! field); state transitions are pure reducer steps over the previous
//! state, so the whole session is unit-testable without a UI harness.

use snafu::Snafu;

use crate::classify::classify;
use crate::config::ComposerConfig;
use crate::domain::{ConfigDraft, Cpu, ServerModel};
use crate::validation::{MemoryError, validate_memory};

/// Field identifier the UI uses for the memory input
pub const MEMORY_FIELD_ID: &str = "memory-size-input";
/// Field identifier the UI uses for the CPU select
pub const CPU_FIELD_ID: &str = "cpu-select";
/// Field identifier the UI uses for the GPU checkbox
pub const GPU_FIELD_ID: &str = "is-gpu-accelerated-checkbox";

/// A change to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Raw text typed into the memory input
    Memory { raw: String },
    /// Raw identifier chosen in the CPU select (empty clears the choice)
    Cpu { raw: String },
    /// The GPU checkbox was toggled
    GpuToggle,
    /// A field this controller does not handle (diagnostic only)
    Unknown { field_id: String },
}

impl FieldEvent {
    /// Map a stringly UI event onto the typed variants.
    ///
    /// Unrecognized identifiers fold into [`FieldEvent::Unknown`], which
    /// the reducer logs and otherwise ignores.
    pub fn from_parts(field_id: &str, raw: &str) -> Self {
        match field_id {
            MEMORY_FIELD_ID => FieldEvent::Memory {
                raw: raw.to_string(),
            },
            CPU_FIELD_ID => FieldEvent::Cpu {
                raw: raw.to_string(),
            },
            GPU_FIELD_ID => FieldEvent::GpuToggle,
            other => FieldEvent::Unknown {
                field_id: other.to_string(),
            },
        }
    }
}

/// Submission-level errors, coarser than the per-field validation.
///
/// The display strings are the exact user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum SubmitError {
    /// No CPU architecture selected
    #[snafu(display("Please select a CPU"))]
    MissingCpu,

    /// Memory field empty or still carrying a field-level error
    #[snafu(display("Please enter a valid memory size"))]
    MissingMemory,
}

/// Per-field and submission error slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    /// Outcome of the last memory validation, if it failed
    pub memory_error: Option<MemoryError>,
    /// Outcome of the last submission attempt, if it failed
    pub submit_error: Option<SubmitError>,
}

/// Complete state of one form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    /// The in-progress configuration
    pub draft: ConfigDraft,
    /// Current error slots
    pub errors: FormErrors,
}

impl FormState {
    /// Apply one field-change event, producing the next state.
    ///
    /// The memory arm stores the parsed value into the draft even when
    /// validation failed, so the user's last input is never discarded.
    /// Unknown fields and unknown CPU identifiers leave the state
    /// untouched and are logged at WARN.
    pub fn apply(&self, event: &FieldEvent, config: &ComposerConfig) -> FormState {
        let mut next = *self;
        match event {
            FieldEvent::Memory { raw } => {
                let check = validate_memory(raw, &config.memory);
                next.draft.memory_size = check.value;
                next.errors.memory_error = check.error;
            }
            FieldEvent::Cpu { raw } => {
                if raw.trim().is_empty() {
                    next.draft.cpu = None;
                } else {
                    match raw.parse::<Cpu>() {
                        Ok(cpu) => next.draft.cpu = Some(cpu),
                        Err(err) => {
                            tracing::warn!("CPU selection ignored: {err}");
                        }
                    }
                }
            }
            FieldEvent::GpuToggle => {
                next.draft.is_gpu_accelerated = !next.draft.is_gpu_accelerated;
            }
            FieldEvent::Unknown { field_id } => {
                tracing::warn!(field_id, "Unhandled field change");
            }
        }
        next
    }
}

/// Owns one form session and applies events to it
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    config: ComposerConfig,
}

impl FormController {
    /// Create a controller with the given limits and rules
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            state: FormState::default(),
            config,
        }
    }

    /// Current draft
    pub fn draft(&self) -> &ConfigDraft {
        &self.state.draft
    }

    /// Current error slots
    pub fn errors(&self) -> &FormErrors {
        &self.state.errors
    }

    /// Full session state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Consume one UI field-change event
    pub fn on_field_change(&mut self, event: FieldEvent) {
        self.state = self.state.apply(&event, &self.config);
        tracing::debug!(?event, draft = ?self.state.draft, "Applied field change");
    }

    /// Validate the form for submission.
    ///
    /// Coarser than the per-keystroke validation: checks that a CPU is
    /// chosen and that the memory field holds a validated value. Returns
    /// `true` when the draft is ready for classification.
    pub fn on_submit_attempt(&mut self) -> bool {
        if self.state.draft.cpu.is_none() {
            self.state.errors.submit_error = Some(SubmitError::MissingCpu);
            return false;
        }

        if self.state.errors.memory_error.is_some() || self.state.draft.memory_size.is_none() {
            self.state.errors.submit_error = Some(SubmitError::MissingMemory);
            return false;
        }

        self.state.errors.submit_error = None;
        true
    }

    /// Classify the current draft against the configured rules
    pub fn classify(&self) -> Vec<ServerModel> {
        classify(&self.state.draft, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FormController {
        FormController::new(ComposerConfig::default())
    }

    #[test]
    fn test_from_parts_dispatch() {
        assert_eq!(
            FieldEvent::from_parts("memory-size-input", "2048"),
            FieldEvent::Memory {
                raw: "2048".to_string()
            }
        );
        assert_eq!(
            FieldEvent::from_parts("cpu-select", "ARM"),
            FieldEvent::Cpu {
                raw: "ARM".to_string()
            }
        );
        assert_eq!(
            FieldEvent::from_parts("is-gpu-accelerated-checkbox", ""),
            FieldEvent::GpuToggle
        );
        assert_eq!(
            FieldEvent::from_parts("favorite-color", "green"),
            FieldEvent::Unknown {
                field_id: "favorite-color".to_string()
            }
        );
    }

    #[test]
    fn test_memory_event_stores_value_and_error() {
        let mut c = controller();

        c.on_field_change(FieldEvent::Memory {
            raw: "2048".to_string(),
        });
        assert_eq!(c.draft().memory_size, Some(2048));
        assert_eq!(c.errors().memory_error, None);

        // Invalid input keeps the parsed value in the draft
        c.on_field_change(FieldEvent::Memory {
            raw: "3072".to_string(),
        });
        assert_eq!(c.draft().memory_size, Some(3072));
        assert!(matches!(
            c.errors().memory_error,
            Some(MemoryError::NotPowerOfTwo { .. })
        ));

        // Clearing the field clears both value and error
        c.on_field_change(FieldEvent::Memory {
            raw: String::new(),
        });
        assert_eq!(c.draft().memory_size, None);
        assert_eq!(c.errors().memory_error, None);
    }

    #[test]
    fn test_cpu_event() {
        let mut c = controller();

        c.on_field_change(FieldEvent::Cpu {
            raw: "Power".to_string(),
        });
        assert_eq!(c.draft().cpu, Some(Cpu::Power));

        // Unknown identifiers leave the selection untouched
        c.on_field_change(FieldEvent::Cpu {
            raw: "RISC-V".to_string(),
        });
        assert_eq!(c.draft().cpu, Some(Cpu::Power));

        // Empty clears the selection
        c.on_field_change(FieldEvent::Cpu { raw: String::new() });
        assert_eq!(c.draft().cpu, None);
    }

    #[test]
    fn test_gpu_toggle_flips() {
        let mut c = controller();
        assert!(!c.draft().is_gpu_accelerated);
        c.on_field_change(FieldEvent::GpuToggle);
        assert!(c.draft().is_gpu_accelerated);
        c.on_field_change(FieldEvent::GpuToggle);
        assert!(!c.draft().is_gpu_accelerated);
    }

    #[test]
    fn test_unknown_field_is_a_no_op() {
        let mut c = controller();
        let before = *c.state();
        c.on_field_change(FieldEvent::Unknown {
            field_id: "favorite-color".to_string(),
        });
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn test_submit_requires_cpu_first() {
        let mut c = controller();
        c.on_field_change(FieldEvent::Memory {
            raw: "2048".to_string(),
        });

        assert!(!c.on_submit_attempt());
        assert_eq!(c.errors().submit_error, Some(SubmitError::MissingCpu));
        assert_eq!(
            SubmitError::MissingCpu.to_string(),
            "Please select a CPU"
        );
    }

    #[test]
    fn test_submit_with_empty_memory() {
        let mut c = controller();
        c.on_field_change(FieldEvent::Cpu {
            raw: "ARM".to_string(),
        });

        assert!(!c.on_submit_attempt());
        assert_eq!(c.errors().submit_error, Some(SubmitError::MissingMemory));
        assert_eq!(
            SubmitError::MissingMemory.to_string(),
            "Please enter a valid memory size"
        );
    }

    #[test]
    fn test_submit_with_invalid_memory() {
        let mut c = controller();
        c.on_field_change(FieldEvent::Cpu {
            raw: "ARM".to_string(),
        });
        c.on_field_change(FieldEvent::Memory {
            raw: "3072".to_string(),
        });

        assert!(!c.on_submit_attempt());
        assert_eq!(c.errors().submit_error, Some(SubmitError::MissingMemory));
    }

    #[test]
    fn test_submit_success_clears_error() {
        let mut c = controller();
        c.on_field_change(FieldEvent::Cpu {
            raw: "ARM".to_string(),
        });

        assert!(!c.on_submit_attempt());

        c.on_field_change(FieldEvent::Memory {
            raw: "524,288".to_string(),
        });
        assert!(c.on_submit_attempt());
        assert_eq!(c.errors().submit_error, None);
    }

    #[test]
    fn test_full_session_classifies() {
        let mut c = controller();
        for (field, raw) in [
            ("cpu-select", "ARM"),
            ("memory-size-input", "524288"),
            ("is-gpu-accelerated-checkbox", ""),
        ] {
            c.on_field_change(FieldEvent::from_parts(field, raw));
        }

        assert!(c.on_submit_attempt());
        assert_eq!(c.classify(), vec![ServerModel::HighDensity]);
    }

    #[test]
    fn test_reducer_is_pure() {
        let config = ComposerConfig::default();
        let state = FormState::default();
        let event = FieldEvent::Memory {
            raw: "2048".to_string(),
        };

        let next = state.apply(&event, &config);
        assert_eq!(state, FormState::default());
        assert_eq!(next.draft.memory_size, Some(2048));
        assert_eq!(next, state.apply(&event, &config));
    }
}
