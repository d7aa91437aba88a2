//! # Simulator Tests

use ls8_core::common::Fault;
use ls8_core::config::{Config, MalformedLinePolicy};
use ls8_core::sim::{Program, SimError, Simulator};
use ls8_core::soc::BufferConsole;
use pretty_assertions::assert_eq;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tempfile::NamedTempFile;

use crate::common::builder::program::ProgramBuilder;

fn simulator(config: &Config) -> (Simulator, BufferConsole) {
    let console = BufferConsole::new();
    (Simulator::new(config, Box::new(console.clone())), console)
}

fn program(bytes: Vec<u8>) -> Program {
    Program {
        bytes,
        skipped_lines: 0,
    }
}

fn print8() -> Vec<u8> {
    ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build()
}

#[test]
fn runs_to_halt_without_limit() {
    let (mut sim, out) = simulator(&Config::default());
    sim.load(&program(print8())).unwrap();
    sim.run().unwrap();
    assert_eq!(out.values(), vec![8]);
}

#[test]
fn limit_equal_to_program_length_is_enough() {
    let mut config = Config::default();
    config.general.max_steps = Some(3);
    let (mut sim, out) = simulator(&config);
    sim.load(&program(print8())).unwrap();
    sim.run().unwrap();
    assert_eq!(out.values(), vec![8]);
    assert!(!sim.cpu.running);
}

#[test]
fn limit_stops_runaway_program() {
    let mut config = Config::default();
    config.general.max_steps = Some(100);
    let (mut sim, _out) = simulator(&config);
    sim.load(&program(ProgramBuilder::new().ldi(0, 3).jmp(0).build()))
        .unwrap();
    let err = sim.run().unwrap_err();
    assert!(matches!(err, SimError::StepLimit { limit: 100 }));
    assert_eq!(sim.cpu.stats.instructions_retired, 100);
    assert_eq!(
        err.to_string(),
        "step limit of 100 instructions reached without HLT"
    );
}

#[test]
fn faults_pass_through() {
    let mut config = Config::default();
    config.general.max_steps = Some(10);
    let (mut sim, _out) = simulator(&config);
    sim.load(&program(vec![0xFF])).unwrap();
    let err = sim.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::Fault(Fault::UnknownOpcode { opcode: 0xFF, pc: 0 })
    ));
}

#[test]
fn oversized_image_is_rejected() {
    let (mut sim, _out) = simulator(&Config::default());
    let err = sim.load(&program(vec![0; 300])).unwrap_err();
    assert!(matches!(err, SimError::Fault(Fault::Addressing(_))));
}

#[test]
fn load_file_uses_configured_policy() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"10000010\nnot a byte\n00000000\n00000111\n01000111\n00000000\n00000001\n")
        .unwrap();
    file.flush().unwrap();

    let (mut lenient, out) = simulator(&Config::default());
    let loaded = lenient.load_file(file.path()).unwrap();
    assert_eq!(loaded.skipped_lines, 1);
    lenient.run().unwrap();
    assert_eq!(out.values(), vec![7]);

    let mut config = Config::default();
    config.loader.malformed_lines = MalformedLinePolicy::Reject;
    let (mut strict, _out) = simulator(&config);
    let err = strict.load_file(file.path()).unwrap_err();
    assert!(matches!(err, SimError::Load(_)));
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn budgeted_run_logs_start_and_halt() {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let mut config = Config::default();
    config.general.max_steps = Some(10);
    tracing::subscriber::with_default(subscriber, || {
        let (mut sim, out) = simulator(&config);
        sim.load(&program(print8())).unwrap();
        sim.run().unwrap();
        assert_eq!(out.values(), vec![8]);
    });

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("run started"), "{text}");
    assert!(text.contains("halted"), "{text}");
}
