//! Event dispatch and effect interpretation.
//!
//! [`App`] owns the page state and the store handle. Handlers feed it
//! [`Event`]s; it runs the reducer, performs the resulting effects, and
//! feeds the matching completion event back in when a request succeeds.
//! A failed request is logged and produces no further events, so state is
//! only ever advanced by confirmed backend responses.
//!
//! Requests are not serialized across dispatches: two overlapping
//! refreshes resolve in arrival order and the last response wins.

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::RequestFailed;
use crate::store::TaskStore;
use crate::view::{Effect, Event, ViewState};

pub struct App {
    state: RwLock<ViewState>,
    store: Arc<dyn TaskStore>,
}

impl App {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
            store,
        }
    }

    /// Clone of the current page state, for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Apply an event and perform the effects it produces, feeding
    /// success completions back through the reducer until the queue
    /// drains.
    pub async fn dispatch(&self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let effects = self.state.write().await.apply(event);
            for effect in effects {
                match self.perform(effect).await {
                    Ok(follow_up) => queue.push_back(follow_up),
                    Err(err) => warn!("backend request failed: {}", err),
                }
            }
        }
    }

    /// Run one effect against the store, returning the completion event
    /// the reducer expects on success.
    async fn perform(&self, effect: Effect) -> Result<Event, RequestFailed> {
        match effect {
            Effect::Insert(draft) => {
                self.store.insert(&draft).await?;
                Ok(Event::TaskCreated)
            }
            Effect::FetchAll => {
                let tasks = self.store.list().await?;
                Ok(Event::TasksLoaded(tasks))
            }
            Effect::Update { id, description } => {
                self.store.update_description(id, &description).await?;
                Ok(Event::EditSaved)
            }
            Effect::Delete(id) => {
                self.store.delete(id).await?;
                Ok(Event::TaskDeleted)
            }
        }
    }
}
