//! JSON-lines frame trace.
//!
//! One line per simulated frame: the run number, the step report and a
//! snapshot of the state after the step. Written through a buffered writer
//! and flushed when a run ends.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{FrameReport, GameSnapshot};

#[derive(Serialize)]
struct TraceLine<'a> {
    run: u32,
    report: &'a FrameReport,
    snapshot: &'a GameSnapshot,
}

pub struct FrameTrace<W: Write = BufWriter<File>> {
    out: W,
    line: Vec<u8>,
}

impl FrameTrace {
    /// Append to `path`, creating it if needed.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open trace file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FrameTrace<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: Vec::with_capacity(1024),
        }
    }

    pub fn record(
        &mut self,
        run: u32,
        report: &FrameReport,
        snapshot: &GameSnapshot,
    ) -> Result<()> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, &TraceLine { run, report, snapshot })?;
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        if report.terminated {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
