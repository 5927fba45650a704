//! Edit Session
//!
//! Draft values plus the create-vs-update mode of the form.
//!
//! ```text
//!            begin_edit(task)
//!   Idle ─────────────────────▶ Editing(id)
//!    ▲  ◀───────────────────────    │
//!    │   cancel / submit succeeded  │ begin_edit(other)
//!    └── field change ──┘           └──▶ Editing(other id)
//! ```
//!
//! A submission in flight blocks further submits until it resolves.

use crate::error::FetchResult;
use crate::model::{Draft, DraftField, Task, TaskId};
use crate::store::TaskStore;

/// What the next submit does
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Next submit creates a task
    #[default]
    Idle,
    /// Next submit updates this task
    Editing(TaskId),
}

/// Draft + mode + in-flight guard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    draft: Draft,
    mode: SessionMode,
    submitting: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Task currently being edited, if any
    pub fn editing_id(&self) -> Option<&TaskId> {
        match &self.mode {
            SessionMode::Idle => None,
            SessionMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Overwrite one draft field
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Load a task into the draft and target it for update
    pub fn begin_edit(&mut self, task: &Task) {
        log::debug!("[SESSION] editing task {}", task.id);
        self.draft = Draft::from_task(task);
        self.mode = SessionMode::Editing(task.id.clone());
    }

    /// Back to Idle with an empty draft. An outstanding submission stays tracked.
    pub fn cancel(&mut self) {
        self.draft = Draft::default();
        self.mode = SessionMode::Idle;
    }

    /// Snapshot the draft for sending and mark the session as submitting.
    ///
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(Submission {
            target: self.editing_id().cloned(),
            draft: self.draft.clone(),
        })
    }

    /// Resolve the in-flight submission. Success resets to Idle; failure
    /// leaves draft and mode untouched.
    pub fn complete_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.cancel();
        }
    }
}

/// One submit's payload, detached from the session while the request runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    target: Option<TaskId>,
    draft: Draft,
}

impl Submission {
    pub fn target(&self) -> Option<&TaskId> {
        self.target.as_ref()
    }

    /// Create when there is no target, update otherwise
    pub async fn send<S: TaskStore + ?Sized>(&self, store: &S) -> FetchResult<()> {
        match &self.target {
            None => store.create_task(&self.draft).await,
            Some(id) => store.update_task(id, &self.draft).await,
        }
    }

    pub fn outcome(self) -> SubmitOutcome {
        match self.target {
            None => SubmitOutcome::Created,
            Some(id) => SubmitOutcome::Updated(id),
        }
    }
}

/// Result of a successful or skipped submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(TaskId),
    /// Another submission was still in flight; nothing was sent
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        let mut task = Task::new("42", "Existing");
        task.duration = 15.0;
        task.description = "from server".into();
        task.category = "X".into();
        task
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.mode(), &SessionMode::Idle);
        assert!(session.draft().is_empty());
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_set_field_overwrites_in_any_mode() {
        let mut session = Session::new();
        session.set_field(DraftField::Title, "first");
        session.set_field(DraftField::Title, "second");
        assert_eq!(session.draft().title, "second");

        session.begin_edit(&sample_task());
        session.set_field(DraftField::Duration, "99");
        assert_eq!(session.draft().duration, "99");
        assert!(session.is_editing());
    }

    #[test]
    fn test_cancel_when_idle_keeps_defaults() {
        let mut session = Session::new();
        session.cancel();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_begin_edit_excludes_category() {
        let mut session = Session::new();
        session.set_field(DraftField::Category, "stale");
        session.begin_edit(&sample_task());

        assert_eq!(session.mode(), &SessionMode::Editing(TaskId::from("42")));
        assert_eq!(session.draft().title, "Existing");
        assert_eq!(session.draft().duration, "15");
        assert_eq!(session.draft().description, "from server");
        assert_eq!(session.draft().category, "");
    }

    #[test]
    fn test_begin_edit_switches_between_tasks() {
        let mut session = Session::new();
        session.begin_edit(&sample_task());
        session.set_field(DraftField::Title, "unsaved");

        let mut other = Task::new("7", "Other");
        other.duration = 3.0;
        other.description = "second".into();
        session.begin_edit(&other);

        assert_eq!(session.mode(), &SessionMode::Editing(TaskId::from("7")));
        assert_eq!(session.draft().title, "Other");
        assert_eq!(session.draft().duration, "3");
        assert_eq!(session.draft().description, "second");
        assert_eq!(session.begin_submit().unwrap().target(), Some(&TaskId::from("7")));
    }

    #[test]
    fn test_cancel_from_editing_resets() {
        let mut session = Session::new();
        session.begin_edit(&sample_task());
        session.cancel();
        assert_eq!(session.mode(), &SessionMode::Idle);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_submission_target_follows_mode() {
        let mut session = Session::new();
        let create = session.begin_submit().unwrap();
        assert_eq!(create.target(), None);
        session.complete_submit(true);

        session.begin_edit(&sample_task());
        let update = session.begin_submit().unwrap();
        assert_eq!(update.target(), Some(&TaskId::from("42")));
        assert_eq!(update.outcome(), SubmitOutcome::Updated(TaskId::from("42")));
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut session = Session::new();
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());

        session.complete_submit(false);
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_mode() {
        let mut session = Session::new();
        session.begin_edit(&sample_task());
        session.set_field(DraftField::Title, "changed");
        let before = session.clone();

        session.begin_submit().unwrap();
        session.complete_submit(false);
        assert_eq!(session, before);
    }

    #[test]
    fn test_successful_submit_resets_to_idle() {
        let mut session = Session::new();
        session.begin_edit(&sample_task());
        session.begin_submit().unwrap();
        session.complete_submit(true);
        assert_eq!(session, Session::new());
    }
}
