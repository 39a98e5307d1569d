use serde_derive::Serialize;
use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    thread::{self, ThreadId},
};
use tracing::*;

/// Thread safe json logger that writes a `NormalizationRecord` for every normalization run
/// into a given log file. Runs on different threads are recorded separately.
pub struct JsonLogger {
    log_file: Mutex<File>,
    records: Mutex<HashMap<Id, NormalizationRecord>>,
    entered: Mutex<HashMap<ThreadId, Vec<Id>>>,
    next_id: AtomicU64,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            records: Mutex::new(HashMap::new()),
            entered: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // innermost span entered on the current thread
    fn current_span(&self) -> Option<Id> {
        let entered = self.entered.lock().ok()?;
        entered.get(&thread::current().id())?.last().cloned()
    }

    fn update<U>(&self, update: U)
    where
        U: FnOnce(&mut NormalizationRecord),
    {
        if let Some(id) = self.current_span() {
            if let Ok(mut records) = self.records.lock() {
                if let Some(record) = records.get_mut(&id) {
                    update(record);
                }
            }
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, span: &span::Attributes) -> Id {
        let id = Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed));
        if span.metadata().name() == super::NORMALIZE {
            let mut recorder = Recorder::default();
            span.record(&mut recorder);
            if let Ok(mut records) = self.records.lock() {
                records.insert(
                    id.clone(),
                    NormalizationRecord {
                        input: recorder.input,
                        ..Default::default()
                    },
                );
            }
        }
        id
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        let event_type = recorder.event.take();
        match event_type.as_deref() {
            Some(super::STAGE) => {
                if let Some(stage_record) = StageRecord::from_recorder(recorder) {
                    self.update(|record| record.stages.push(stage_record));
                }
            }
            Some(super::FAIL) => {
                let error = recorder.error;
                self.update(|record| record.error = error);
            }
            _ => (),
        }
    }

    fn enter(&self, span: &Id) {
        if let Ok(mut entered) = self.entered.lock() {
            entered
                .entry(thread::current().id())
                .or_default()
                .push(span.clone());
        }
    }

    fn exit(&self, span: &Id) {
        if let Ok(mut entered) = self.entered.lock() {
            let thread = thread::current().id();
            if let Some(stack) = entered.get_mut(&thread) {
                if let Some(position) = stack.iter().rposition(|id| id == span) {
                    stack.remove(position);
                }
                if stack.is_empty() {
                    entered.remove(&thread);
                }
            }
        }

        let record = match self.records.lock() {
            Ok(mut records) => records.remove(span),
            Err(_) => return,
        };
        if let Some(record) = record {
            if let (Ok(json), Ok(mut file)) =
                (serde_json::to_string_pretty(&record), self.log_file.lock())
            {
                let _ = writeln!(file, "{}", json);
            }
        }
    }
}

/// Log information associated to a normalization run: the input formula, the result of every
/// stage in the order of the pipeline and the error that aborted the run, if any.
#[derive(Serialize, Default)]
struct NormalizationRecord {
    input: Option<String>,
    stages: Vec<StageRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// A record, containing the result of a single stage of the pipeline.
#[derive(Serialize)]
struct StageRecord {
    stage: String,
    formula: String,
}

impl StageRecord {
    fn from_recorder(value: Recorder) -> Option<Self> {
        Some(StageRecord {
            stage: value.stage?,
            formula: value.formula?,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be converted to its corresponding log record.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    input: Option<String>,
    stage: Option<String>,
    formula: Option<String>,
    error: Option<String>,
}

impl Recorder {
    fn set(&mut self, field: &field::Field, value: String) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value),
            super::INPUT_FIELD => self.input = Some(value),
            super::STAGE_FIELD => self.stage = Some(value),
            super::FORMULA_FIELD => self.formula = Some(value),
            super::ERROR_FIELD => self.error = Some(value),
            _ => (),
        }
    }
}

impl field::Visit for Recorder {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.set(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        self.set(field, format!("{:?}", value));
    }
}
