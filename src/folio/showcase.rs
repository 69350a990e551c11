//! The owned, session-scoped project collection.
//!
//! Insertion order is preserved; an in-place update never moves a
//! record. Ids come from a counter that only ever increases, so a
//! removed id is never handed out again. Nothing here persists; every
//! session starts from [`Showcase::seeded`].

use crate::model::{Project, ProjectDraft, ProjectId};

#[derive(Debug, Clone)]
pub struct Showcase {
    projects: Vec<Project>,
    next_id: u32,
}

impl Default for Showcase {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Showcase {
    pub fn empty() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
        }
    }

    /// The fixed session-start state: one showcase record.
    pub fn seeded() -> Self {
        let mut showcase = Self::empty();
        showcase.insert(seed_project());
        showcase
    }

    /// Appends a record built from `draft` under a fresh id and returns
    /// a copy of it. Callers validate the draft first.
    pub(crate) fn insert(&mut self, draft: ProjectDraft) -> Project {
        let id = ProjectId(self.next_id);
        self.next_id += 1;
        let project = Project::new(id, draft);
        self.projects.push(project.clone());
        project
    }

    /// Removes the record with `id`, preserving the order of the rest.
    pub(crate) fn remove(&mut self, id: ProjectId) -> Option<Project> {
        let pos = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(pos))
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    /// The ordered snapshot the display layer renders.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn seed_project() -> ProjectDraft {
    ProjectDraft {
        title: "EasyChat".to_string(),
        subtitle: "Real-time Android Messenger App".to_string(),
        description: "A modern messaging application built with Kotlin and Firebase, \
            featuring OTP authentication, real-time chat functionality, and a beautiful \
            Jetpack Compose UI. The app provides seamless communication with instant \
            message delivery and user-friendly interface."
            .to_string(),
        technologies: vec![
            "Kotlin".to_string(),
            "Firebase".to_string(),
            "Jetpack Compose".to_string(),
            "Android Studio".to_string(),
            "Real-time Database".to_string(),
        ],
        features: vec![
            "OTP-based Authentication".to_string(),
            "Real-time Messaging".to_string(),
            "Modern UI with Jetpack Compose".to_string(),
            "Firebase Backend Integration".to_string(),
            "Instant Message Delivery".to_string(),
            "User-friendly Interface".to_string(),
        ],
        demo_link: Some("https://youtube.com/shorts/iQcYcdj0FSY?si=T56WzqdMuttQWwSM".to_string()),
        github_link: Some("https://github.com/ashutosh2287".to_string()),
        video_demo: Some("https://youtube.com/shorts/iQcYcdj0FSY?si=T56WzqdMuttQWwSM".to_string()),
    }
}
