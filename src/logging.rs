// src/logging.rs
//
// JSONL step logging for rollout inspection and replay.
//
// One JSON object per environment step. Logging never interferes with the
// simulation: write errors are swallowed, not propagated.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::env::StepResult;
use crate::observation::Observation;
use crate::state::SimState;
use crate::types::Action;

/// One normalized step record (JSONL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step count after the transition.
    pub step: u64,
    /// Action taken.
    pub action: Action,
    /// Observation after the transition.
    pub observation: Observation,
    /// Wind in effect after the transition.
    pub wind: (f64, f64),
    /// Reward received.
    pub reward: f64,
    /// Whether the episode terminated at this step.
    pub terminated: bool,
}

impl StepRecord {
    /// Build a record from a step outcome and the post-step state.
    pub fn from_step(action: Action, result: &StepResult, state: &SimState) -> Self {
        Self {
            step: state.step_count,
            action,
            observation: result.observation,
            wind: state.wind,
            reward: result.reward,
            terminated: result.terminated,
        }
    }
}

/// Sink for step records.
pub trait EventSink {
    /// Log one step record.
    fn log_step(&mut self, record: &StepRecord);

    /// Flush buffered output, if any.
    fn flush(&mut self) {}
}

/// Sink that discards everything.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn log_step(&mut self, _record: &StepRecord) {
        // intentionally no-op
    }
}

/// Sink that appends one JSON line per record to a file.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (truncating) the log file at the given path.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl EventSink for FileSink {
    fn log_step(&mut self, record: &StepRecord) {
        // Errors while writing are swallowed; logging must never bring down
        // a rollout.
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Read a JSONL step log into memory. Unparseable lines are skipped.
pub fn read_step_log(path: &Path) -> std::io::Result<Vec<StepRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str::<StepRecord>(&line) {
            out.push(record);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::DroneWindEnv;

    #[test]
    fn test_file_sink_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steps.jsonl");

        let mut env = DroneWindEnv::new(None, None).unwrap();
        env.reset(Some(42));

        let mut sink = FileSink::create(&path).unwrap();
        for action in [Action::Up, Action::Right] {
            let result = env.step(action.id()).unwrap();
            sink.log_step(&StepRecord::from_step(action, &result, env.state()));
        }
        sink.flush();

        let records = read_step_log(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].step, 1);
        assert_eq!(records[0].action, Action::Up);
        assert_eq!(records[1].step, 2);
        assert_eq!(records[1].action, Action::Right);
        assert_eq!(records[0].reward, -1.0);
    }

    #[test]
    fn test_reader_skips_junk_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.jsonl");

        let mut env = DroneWindEnv::new(None, None).unwrap();
        env.reset(Some(1));
        let result = env.step(Action::Up.id()).unwrap();
        let record = StepRecord::from_step(Action::Up, &result, env.state());

        let line = serde_json::to_string(&record).unwrap();
        std::fs::write(&path, format!("not json\n\n{}\n", line)).unwrap();

        let records = read_step_log(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step, 1);
    }

    #[test]
    fn test_noop_sink_accepts_records() {
        let mut env = DroneWindEnv::new(None, None).unwrap();
        env.reset(Some(2));
        let result = env.step(Action::Down.id()).unwrap();

        let mut sink = NoopSink;
        sink.log_step(&StepRecord::from_step(Action::Down, &result, env.state()));
        sink.flush();
    }
}
