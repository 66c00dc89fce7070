use std::{
    cell::RefCell,
    fs::OpenOptions,
    io::Write,
    path::Path,
    rc::Rc,
};

use crate::trace::trace::{StepEvent, StepRecord, StepStatus};

/// Handle returned by [`StepLogger::begin`], consumed by [`StepLogger::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepId(usize);

#[derive(Default)]
struct StepLog {
    records: Vec<StepRecord>,
    open: usize,
}

/// Records step annotations in memory and, optionally, as JSONL lines in a trace file.
///
/// Cloning shares the same log, so every page object built from one `Ui` reports
/// into the same place.
#[derive(Clone, Default)]
pub struct StepLogger {
    log: Rc<RefCell<StepLog>>,
    file: Option<Rc<RefCell<std::fs::File>>>,
}

impl StepLogger {
    /// In-memory only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append every event to `path`. A file that cannot be opened only disables
    /// the file sink.
    pub fn with_trace_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                log: Rc::default(),
                file: Some(Rc::new(RefCell::new(f))),
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not open step trace file"
                );
                Self::new()
            }
        }
    }

    /// Open a step. The annotation is emitted here, before any work runs.
    pub fn begin(&self, label: &str) -> StepId {
        let (id, depth) = {
            let mut log = self.log.borrow_mut();
            let depth = log.open;
            log.open += 1;
            log.records.push(StepRecord {
                label: label.to_string(),
                depth,
                status: StepStatus::Started,
                error: None,
                duration_ms: None,
            });
            (StepId(log.records.len() - 1), depth)
        };

        tracing::info!(step = label, depth, "step started");
        self.write(&StepEvent::now(label, depth, StepStatus::Started));
        id
    }

    /// Close a step opened by `begin`.
    pub fn finish(&self, id: StepId, error: Option<&str>, duration_ms: u128) {
        let (label, depth, status) = {
            let mut log = self.log.borrow_mut();
            log.open = log.open.saturating_sub(1);
            let Some(record) = log.records.get_mut(id.0) else {
                return;
            };
            record.status = if error.is_some() {
                StepStatus::Failed
            } else {
                StepStatus::Passed
            };
            record.error = error.map(str::to_string);
            record.duration_ms = Some(duration_ms);
            (record.label.clone(), record.depth, record.status)
        };

        let mut event = StepEvent::now(&label, depth, status).with_duration(duration_ms);
        match error {
            Some(e) => {
                tracing::warn!(
                    step = %label,
                    error = e,
                    duration_ms = duration_ms as u64,
                    "step failed"
                );
                event = event.with_error(e);
            }
            None => {
                tracing::info!(step = %label, duration_ms = duration_ms as u64, "step passed")
            }
        }
        self.write(&event);
    }

    /// Snapshot of every step recorded so far, in the order they were opened.
    pub fn records(&self) -> Vec<StepRecord> {
        self.log.borrow().records.clone()
    }

    /// Number of times a step with this label was opened.
    pub fn count(&self, label: &str) -> usize {
        self.log
            .borrow()
            .records
            .iter()
            .filter(|r| r.label == label)
            .count()
    }

    /// Drain recorded steps, leaving the log empty for the next test case.
    pub fn take(&self) -> Vec<StepRecord> {
        let mut log = self.log.borrow_mut();
        log.open = 0;
        std::mem::take(&mut log.records)
    }

    fn write(&self, event: &StepEvent) {
        let Some(file) = &self.file else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize step event");
                return;
            }
        };

        if let Err(e) = writeln!(file.borrow_mut(), "{}", json) {
            tracing::warn!(error = %e, "failed to write step event");
        }
    }
}
