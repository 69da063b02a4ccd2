//! Pure UI state machine for the task page.
//!
//! All page state lives in a single [`ViewState`]; user input and request
//! completions arrive as [`Event`]s, and [`ViewState::apply`] returns the
//! [`Effect`]s the caller must perform against the backend. The reducer
//! never talks to the network itself, so every transition is testable
//! without a server.
//!
//! Completion events (`TaskCreated`, `TaskDeleted`, `EditSaved`,
//! `TasksLoaded`) must only be fed after the corresponding request
//! succeeded. A failed request feeds nothing, which leaves the draft, the
//! open modal, or the last good task list untouched.

use crate::types::{NewTask, Task, TaskId};

/// Snapshot of everything the page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Unsent form input for a task to be created.
    pub draft: NewTask,
    /// Wholesale snapshot of the backend's rows, ascending by `created_at`.
    pub tasks: Vec<Task>,
    /// The task whose description is being edited; `Some` iff the modal
    /// is open.
    pub editing: Option<Task>,
    /// In-progress modal text, seeded from the edited task's description.
    pub edited_description: String,
}

/// Inputs to the state machine: user actions plus request completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DraftTitleChanged(String),
    DraftDescriptionChanged(String),
    /// Form submitted; requests an insert of the current draft.
    SubmitNewTask,
    /// Insert succeeded.
    TaskCreated,
    /// Requests a full re-fetch of the list.
    RefreshList,
    /// Fetch succeeded with these rows.
    TasksLoaded(Vec<Task>),
    DeleteTask(TaskId),
    /// Delete succeeded.
    TaskDeleted,
    /// Open the edit modal for the listed task with this id.
    BeginEdit(TaskId),
    EditedDescriptionChanged(String),
    CancelEdit,
    /// Modal save requested; no-op when no task is being edited.
    SaveEdit,
    /// Update succeeded.
    EditSaved,
}

/// Backend requests a transition asks for. The interpreter performs these
/// sequentially and feeds the matching completion event on success.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Insert(NewTask),
    FetchAll,
    Update { id: TaskId, description: String },
    Delete(TaskId),
}

impl ViewState {
    /// Apply one event, returning the effects to perform.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::DraftTitleChanged(title) => {
                self.draft.title = title;
                vec![]
            }
            Event::DraftDescriptionChanged(description) => {
                self.draft.description = description;
                vec![]
            }
            // The draft is cleared by TaskCreated, not here: a failed
            // insert must leave the form input intact for resubmission.
            Event::SubmitNewTask => vec![Effect::Insert(self.draft.clone())],
            Event::TaskCreated => {
                self.draft = NewTask::default();
                vec![Effect::FetchAll]
            }
            Event::RefreshList => vec![Effect::FetchAll],
            Event::TasksLoaded(tasks) => {
                self.tasks = tasks;
                vec![]
            }
            Event::DeleteTask(id) => vec![Effect::Delete(id)],
            Event::TaskDeleted => vec![Effect::FetchAll],
            Event::BeginEdit(id) => {
                // Only listed tasks can be edited; an unknown id is a no-op.
                if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
                    self.edited_description = task.description.clone();
                    self.editing = Some(task.clone());
                }
                vec![]
            }
            Event::EditedDescriptionChanged(text) => {
                self.edited_description = text;
                vec![]
            }
            Event::CancelEdit => {
                self.editing = None;
                self.edited_description.clear();
                vec![]
            }
            Event::SaveEdit => match &self.editing {
                Some(task) => vec![Effect::Update {
                    id: task.id,
                    description: self.edited_description.clone(),
                }],
                None => vec![],
            },
            Event::EditSaved => {
                self.editing = None;
                self.edited_description.clear();
                vec![Effect::FetchAll]
            }
        }
    }

    /// Whether the edit modal is open.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: TaskId, title: &str, description: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn draft_edits_produce_no_effects() {
        let mut state = ViewState::default();
        assert!(state.apply(Event::DraftTitleChanged("A".into())).is_empty());
        assert!(
            state
                .apply(Event::DraftDescriptionChanged("B".into()))
                .is_empty()
        );
        assert_eq!(state.draft, NewTask::new("A", "B"));
    }

    #[test]
    fn submit_requests_insert_of_current_draft() {
        let mut state = ViewState::default();
        state.apply(Event::DraftTitleChanged("A".into()));
        state.apply(Event::DraftDescriptionChanged("B".into()));

        let effects = state.apply(Event::SubmitNewTask);

        assert_eq!(effects, vec![Effect::Insert(NewTask::new("A", "B"))]);
        // Draft survives until the insert is confirmed.
        assert_eq!(state.draft, NewTask::new("A", "B"));
    }

    #[test]
    fn task_created_clears_draft_and_refreshes() {
        let mut state = ViewState {
            draft: NewTask::new("A", "B"),
            ..Default::default()
        };

        let effects = state.apply(Event::TaskCreated);

        assert!(state.draft.is_empty());
        assert_eq!(effects, vec![Effect::FetchAll]);
    }

    #[test]
    fn tasks_loaded_replaces_the_list_wholesale() {
        let mut state = ViewState {
            tasks: vec![task(1, "old", "old")],
            ..Default::default()
        };

        let effects = state.apply(Event::TasksLoaded(vec![task(2, "new", "new")]));

        assert!(effects.is_empty());
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].id, 2);
    }

    #[test]
    fn tasks_loaded_with_empty_list_clears() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", "b")],
            ..Default::default()
        };
        state.apply(Event::TasksLoaded(vec![]));
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn delete_then_confirmation_refreshes() {
        let mut state = ViewState::default();
        assert_eq!(state.apply(Event::DeleteTask(4)), vec![Effect::Delete(4)]);
        assert_eq!(state.apply(Event::TaskDeleted), vec![Effect::FetchAll]);
    }

    #[test]
    fn begin_edit_seeds_modal_from_listed_task() {
        let mut state = ViewState {
            tasks: vec![task(1, "t", "original")],
            ..Default::default()
        };

        let effects = state.apply(Event::BeginEdit(1));

        assert!(effects.is_empty());
        assert!(state.is_editing());
        assert_eq!(state.edited_description, "original");
    }

    #[test]
    fn begin_edit_for_unknown_id_is_a_noop() {
        let mut state = ViewState {
            tasks: vec![task(1, "t", "d")],
            ..Default::default()
        };
        state.apply(Event::BeginEdit(99));
        assert!(!state.is_editing());
    }

    #[test]
    fn cancel_edit_discards_the_modal_draft() {
        let mut state = ViewState {
            tasks: vec![task(1, "t", "original")],
            ..Default::default()
        };
        state.apply(Event::BeginEdit(1));
        state.apply(Event::EditedDescriptionChanged("changed".into()));

        let effects = state.apply(Event::CancelEdit);

        assert!(effects.is_empty());
        assert!(!state.is_editing());
        assert!(state.edited_description.is_empty());
        // The listed task itself is untouched.
        assert_eq!(state.tasks[0].description, "original");
    }

    #[test]
    fn save_edit_requests_update_with_modal_text() {
        let mut state = ViewState {
            tasks: vec![task(3, "t", "old")],
            ..Default::default()
        };
        state.apply(Event::BeginEdit(3));
        state.apply(Event::EditedDescriptionChanged("C".into()));

        let effects = state.apply(Event::SaveEdit);

        assert_eq!(
            effects,
            vec![Effect::Update {
                id: 3,
                description: "C".into()
            }]
        );
        // Modal stays open until the update is confirmed.
        assert!(state.is_editing());
    }

    #[test]
    fn save_edit_without_editing_task_is_a_noop() {
        let mut state = ViewState::default();
        assert!(state.apply(Event::SaveEdit).is_empty());
    }

    #[test]
    fn edit_saved_closes_modal_and_refreshes() {
        let mut state = ViewState {
            tasks: vec![task(3, "t", "old")],
            ..Default::default()
        };
        state.apply(Event::BeginEdit(3));
        state.apply(Event::EditedDescriptionChanged("C".into()));

        let effects = state.apply(Event::EditSaved);

        assert!(!state.is_editing());
        assert!(state.edited_description.is_empty());
        assert_eq!(effects, vec![Effect::FetchAll]);
    }

    #[test]
    fn every_mutation_confirmation_enqueues_a_refresh() {
        for event in [Event::TaskCreated, Event::TaskDeleted, Event::EditSaved] {
            let mut state = ViewState::default();
            assert_eq!(state.apply(event), vec![Effect::FetchAll]);
        }
    }
}
