use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use lugo_core::{
    runtime::{run_turn_loop, LoopStats, OrderSink, SnapshotSource, TurnRunner},
    GameSnapshot, OrderSet, TeamSide,
};
use lugo_strategy::{PlayerContext, TurnPolicy};

use super::load_settings;

/// Reads one [`GameSnapshot`] per line. Blank lines are ignored.
pub struct JsonLinesSource<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> SnapshotSource for JsonLinesSource<R> {
    fn recv(&mut self) -> Result<Option<GameSnapshot>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            let snapshot = serde_json::from_str(line)
                .with_context(|| format!("Invalid snapshot on line {}", self.line_number))?;
            return Ok(Some(snapshot));
        }
    }
}

/// Writes one [`OrderSet`] per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OrderSink for JsonLinesSink<W> {
    fn send(&mut self, orders: &OrderSet) -> Result<()> {
        serde_json::to_writer(&mut self.writer, orders)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub fn replay(
    settings_file: &Path,
    side: TeamSide,
    number: u32,
    input: &Path,
    output: Option<&Path>,
) -> Result<LoopStats> {
    let settings = load_settings(settings_file)?;
    let ctx = PlayerContext::new(number, side, settings)?;
    let runner = TurnRunner::new(TurnPolicy::new(ctx.clone()), side, ctx.number());

    let reader: Box<dyn BufRead> = if input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open snapshots {}", input.display()))?;
        Box::new(BufReader::new(file))
    };
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    log::info!("Replaying snapshots as {} player {}", side, ctx.number());
    let mut source = JsonLinesSource::new(reader);
    let mut sink = JsonLinesSink::new(writer);
    let stats = run_turn_loop(&runner, &mut source, &mut sink)?;
    sink.flush()?;
    Ok(stats)
}
