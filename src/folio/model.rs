use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a project within the showcase. Assigned by the editor on
/// creation, never supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
    pub video_demo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(id: ProjectId, draft: ProjectDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            subtitle: draft.subtitle,
            description: draft.description,
            technologies: draft.technologies,
            features: draft.features,
            demo_link: normalize_link(draft.demo_link),
            github_link: normalize_link(draft.github_link),
            video_demo: normalize_link(draft.video_demo),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every caller-suppliable field, keeping identity and
    /// creation time.
    pub fn apply(&mut self, draft: ProjectDraft) {
        self.title = draft.title;
        self.subtitle = draft.subtitle;
        self.description = draft.description;
        self.technologies = draft.technologies;
        self.features = draft.features;
        self.demo_link = normalize_link(draft.demo_link);
        self.github_link = normalize_link(draft.github_link);
        self.video_demo = normalize_link(draft.video_demo);
        self.updated_at = Utc::now();
    }
}

/// All caller-suppliable fields of a project. Edited in a scratch buffer
/// and committed atomically by `add`/`update`; partial edits never
/// reach the showcase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
    pub video_demo: Option<String>,
}

// Stored links are either non-blank or absent.
fn normalize_link(link: Option<String>) -> Option<String> {
    link.and_then(|l| {
        let trimmed = l.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
