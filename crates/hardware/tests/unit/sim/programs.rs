//! # Sample Program Tests
//!
//! Runs every program in the workspace `programs/` directory and checks its output.

use ls8_core::config::{Config, MalformedLinePolicy};
use ls8_core::sim::Simulator;
use ls8_core::soc::BufferConsole;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

#[rstest]
#[case("print8.ls8", &[8])]
#[case("mult.ls8", &[72])]
#[case("stack.ls8", &[2, 1])]
#[case("call.ls8", &[20, 40])]
#[case("cmp.ls8", &[1])]
fn sample_program_output(#[case] name: &str, #[case] expected: &[u8]) {
    let mut config = Config::default();
    config.loader.malformed_lines = MalformedLinePolicy::Reject;
    config.general.max_steps = Some(1_000);

    let console = BufferConsole::new();
    let mut sim = Simulator::new(&config, Box::new(console.clone()));
    let _ = sim.load_file(program_path(name)).unwrap();
    sim.run().unwrap();

    assert_eq!(console.values(), expected);
    assert!(!sim.cpu.running);
}
