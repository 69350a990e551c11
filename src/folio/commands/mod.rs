use crate::model::Project;

pub mod add;
pub mod draft;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod update;

/// Caller-supplied answer to a destructive-operation prompt.
///
/// The core never prompts. The display layer asks the user however it
/// likes (terminal prompt, dialog, `--yes` flag) and passes the answer
/// down; a declined confirmation makes the operation a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone)]
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
    pub affected: Vec<Project>,
    pub listed: Vec<Project>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, projects: Vec<Project>) -> Self {
        self.affected = projects;
        self
    }

    pub fn with_listed(mut self, projects: Vec<Project>) -> Self {
        self.listed = projects;
        self
    }
}
