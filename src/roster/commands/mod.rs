use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// Data-level outcome of an operation.
///
/// `DuplicateId` and `NotFound` are not errors: the operation completed,
/// the condition is reported through messages, and the process exits
/// cleanly. Callers branch on this discriminant, never on message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CmdOutcome {
    #[default]
    Ok,
    DuplicateId,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: CmdOutcome,
    pub found: Option<Record>,
    pub listed: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: CmdOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_found(mut self, record: Record) -> Self {
        self.found = Some(record);
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }
}
