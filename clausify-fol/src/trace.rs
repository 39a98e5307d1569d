/*! Defines the names of the spans, events and fields that the normalization pipeline emits
through `tracing`, and a [`subscriber`] that logs them as JSON. */
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// normalization log record fields:
pub const EVENT_FIELD: &str = "event";
pub const INPUT_FIELD: &str = "input";
pub const STAGE_FIELD: &str = "stage";
pub const FORMULA_FIELD: &str = "formula";
pub const ERROR_FIELD: &str = "error";

// log span types:
/// Inside a normalization run.
pub const NORMALIZE: &str = "@normalize";

// log event types:
/// A stage of the pipeline produced its result.
pub const STAGE: &str = "@stage";

/// A stage of the pipeline failed. The run is aborted.
pub const FAIL: &str = "@fail";
