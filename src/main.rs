//! Server Composer - Interactive Entry Point
//!
//! A minimal terminal front end standing in for the form UI: it feeds
//! field events through the controller, runs submission validation, and
//! prints the matching server models. All decisions live in the library.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use server_composer::config::ComposerConfig;
use server_composer::domain::Cpu;
use server_composer::helpers::format_with_commas;
use server_composer::state::{FieldEvent, FormController};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Server Composer...");

    let config = ComposerConfig::load_or_default();
    let mut controller = FormController::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let cpu = prompt(
            &mut lines,
            &format!(
                "CPU ({}): ",
                Cpu::ALL.map(|c| c.as_str()).join("/")
            ),
        )?;
        controller.on_field_change(FieldEvent::Cpu { raw: cpu });

        let memory = prompt(&mut lines, "Memory size (MB): ")?;
        controller.on_field_change(FieldEvent::Memory { raw: memory });
        if let Some(err) = controller.errors().memory_error {
            println!("  {err}");
        }

        let gpu = prompt(&mut lines, "GPU accelerated? (y/n): ")?;
        if gpu.eq_ignore_ascii_case("y") != controller.draft().is_gpu_accelerated {
            controller.on_field_change(FieldEvent::GpuToggle);
        }

        if controller.on_submit_attempt() {
            break;
        }
        if let Some(err) = controller.errors().submit_error {
            println!("{err}");
        }
        println!();
    }

    let draft = controller.draft();
    println!();
    println!(
        "Configuration: cpu={}, memory={} MB, gpu={}",
        draft.cpu.map(|c| c.as_str()).unwrap_or("-"),
        format_with_commas(draft.memory_size),
        draft.is_gpu_accelerated
    );

    let models = controller.classify();
    if models.is_empty() {
        println!("No server models match this configuration.");
    } else {
        println!("Matching server models:");
        for model in models {
            println!("  - {model}");
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("stdin closed"))?;
    Ok(line.trim().to_string())
}
