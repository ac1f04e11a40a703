//! Task model for the tracker CLI.

use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => bail!("unknown status: {other} (expected todo, in-progress, or done)"),
        }
    }
}

/// Core task type.
///
/// Note: we keep this small + serializable. Storage lives in the CLI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: TaskStatus,

    /// Set at creation. Absent in files written before timestamps existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Set on description/status changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            status: TaskStatus::Todo,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Stamp the last-modified time.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for s in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(s.to_string().parse::<TaskStatus>().unwrap(), s);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "doing".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("unknown status"));
    }

    #[test]
    fn status_serializes_kebab_case() {
        let t = Task::new(1, "buy milk").with_status(TaskStatus::InProgress);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["status"], "in-progress");
    }

    #[test]
    fn fresh_task_omits_updated_at() {
        let t = Task::new(1, "buy milk");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["status"], "todo");
        assert!(v.get("updated_at").is_none());
    }
}
