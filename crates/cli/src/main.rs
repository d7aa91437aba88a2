//! LS-8 emulator CLI.
//!
//! This binary provides the command-line entry point. It performs:
//! 1. **Run:** Load an `.ls8` program file and execute it until `HLT`.
//! 2. **Disassemble:** Print an address-annotated listing of a program file.
//!
//! `PRN` output goes to stdout; diagnostics, traces and statistics go to stderr.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, MalformedLinePolicy};
use ls8_core::isa::disasm;
use ls8_core::sim::{SimError, Simulator, loader};
use ls8_core::soc::StdoutConsole;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit register machine emulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --max-steps 1000 programs/call.ls8\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until HLT.
    Run {
        /// Program file to execute.
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a trace line to stderr before every instruction.
        #[arg(long)]
        trace: bool,

        /// Reject malformed program lines instead of skipping them.
        #[arg(long)]
        strict: bool,

        /// Stop with an error after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print execution statistics to stderr when the run ends.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file to disassemble.
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            strict,
            max_steps,
            stats,
        } => cmd_run(&file, config, trace, strict, max_steps, stats),
        Commands::Disasm { file } => cmd_disasm(&file),
    };
    process::exit(code);
}

/// Builds the effective configuration: file (or defaults) overridden by flags.
fn build_config(
    path: Option<PathBuf>,
    trace: bool,
    strict: bool,
    max_steps: Option<u64>,
) -> Result<Config, SimError> {
    let mut config = match path {
        Some(p) => Config::from_file(p)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    if strict {
        config.loader.malformed_lines = MalformedLinePolicy::Reject;
    }
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }
    Ok(config)
}

/// Loads and runs a program; returns the process exit code.
fn cmd_run(
    file: &Path,
    config: Option<PathBuf>,
    trace: bool,
    strict: bool,
    max_steps: Option<u64>,
    stats: bool,
) -> i32 {
    let config = match build_config(config, trace, strict, max_steps) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return 1;
        }
    };

    tracing::debug!(?config, "effective configuration");

    let mut sim = Simulator::new(&config, Box::new(StdoutConsole));
    match sim.load_file(file) {
        Ok(program) => tracing::info!(
            file = %file.display(),
            bytes = program.bytes.len(),
            skipped = program.skipped_lines,
            "program loaded"
        ),
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return 1;
        }
    }

    let result = sim.run();
    if stats {
        sim.cpu.stats.print();
    }
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            sim.cpu.dump_state();
            1
        }
    }
}

/// Prints a listing of a program; returns the process exit code.
fn cmd_disasm(file: &Path) -> i32 {
    let program = match loader::load_program_file(file, MalformedLinePolicy::Skip) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return 1;
        }
    };
    for (addr, text) in disasm::listing(&program.bytes) {
        println!("{addr:#04x}: {text}");
    }
    0
}
