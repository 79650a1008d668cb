//! Where recomputed states go
use advisor_out::EntityState;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Receiver of every recomputed entity state
pub trait StatePublisher: Send + Sync {
    fn publish(&self, state: &EntityState);
}

impl<P: StatePublisher + ?Sized> StatePublisher for Arc<P> {
    fn publish(&self, state: &EntityState) {
        (**self).publish(state)
    }
}

/// Keeps the latest state per entity id
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    states: Arc<RwLock<HashMap<String, EntityState>>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest state of one entity
    pub fn get(&self, entity_id: &str) -> Option<EntityState> {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_id)
            .cloned()
    }

    /// Latest state of every entity, ordered by entity id
    pub fn all(&self) -> Vec<EntityState> {
        let mut states: Vec<_> = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        states.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        states
    }
}

impl StatePublisher for InMemoryPublisher {
    fn publish(&self, state: &EntityState) {
        self.states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(state.entity_id.clone(), state.clone());
    }
}
