//! Server Options Classifier
//!
//! Maps a configuration draft to the ordered list of server model
//! categories it qualifies for. Pure and total: any input that fails the
//! numeric envelope, or matches no category, yields an empty list.

use crate::config::ComposerConfig;
use crate::domain::{ConfigDraft, Cpu, ServerModel};

/// Determine the server models matching a configuration.
///
/// The numeric envelope (range and granularity) is re-checked here so the
/// classifier is safe to call with any raw draft, independently of the
/// form controller. The power-of-two constraint is a field-level concern
/// and is not re-checked.
///
/// Order is fixed for display: Mainframe before Tower, Tower before Rack.
/// The GPU branch is mutually exclusive with every other category.
pub fn classify(draft: &ConfigDraft, config: &ComposerConfig) -> Vec<ServerModel> {
    let Some(memory) = draft.memory_size else {
        return Vec::new();
    };

    let limits = &config.memory;
    if memory < limits.min || memory > limits.max || memory % limits.multiple != 0 {
        return Vec::new();
    }

    let rules = &config.rules;
    if draft.is_gpu_accelerated {
        return if draft.cpu == Some(Cpu::Arm) && memory >= rules.high_density_threshold {
            vec![ServerModel::HighDensity]
        } else {
            Vec::new()
        };
    }

    let mut models = Vec::new();
    if draft.cpu == Some(Cpu::Power) && memory >= rules.basic_threshold {
        models.push(ServerModel::Mainframe);
    }

    if memory >= rules.rack_threshold {
        models.push(ServerModel::Tower);
        models.push(ServerModel::Rack);
    } else if memory >= rules.basic_threshold {
        models.push(ServerModel::Tower);
    }

    models
}
