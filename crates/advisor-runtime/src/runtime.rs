//! Reactive re-evaluation loop
//!
//! All sensor changes and option updates go through one channel with one
//! consumer, so two recomputations of the same advisor never overlap. Every
//! message already queued is drained before recomputing: a burst of sensor
//! updates costs each affected advisor a single evaluation.

use advisor_config::{AdvisorFile, ConfigError, ConfigMap};
use advisor_out::Language;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};

use crate::advisor::Advisor;
use crate::error::RuntimeError;
use crate::publish::StatePublisher;
use crate::store::StateStore;

/// Default channel capacity
pub const DEFAULT_CAPACITY: usize = 256;

/// Locales directory used when the config file does not name one
pub const DEFAULT_LOCALES_DIR: &str = "locales";

#[derive(Debug)]
pub enum RuntimeMessage {
    /// A sensor reported a new state (`None` when it disappeared)
    StateChanged {
        entity_id: String,
        state: Option<String>,
    },
    /// Replace an entry's options layer
    OptionsUpdated {
        entry_id: String,
        options: ConfigMap,
        reply: oneshot::Sender<Result<(), RuntimeError>>,
    },
    Shutdown,
}

/// Cloneable sending side of the runtime
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    tx: mpsc::Sender<RuntimeMessage>,
}

impl RuntimeHandle {
    pub async fn state_changed(
        &self,
        entity_id: impl Into<String>,
        state: Option<String>,
    ) -> Result<(), RuntimeError> {
        self.send(RuntimeMessage::StateChanged {
            entity_id: entity_id.into(),
            state,
        })
        .await
    }

    /// Replace an entry's options; resolves once the advisor was recomputed
    pub async fn update_options(
        &self,
        entry_id: impl Into<String>,
        options: ConfigMap,
    ) -> Result<(), RuntimeError> {
        let (reply, response) = oneshot::channel();
        self.send(RuntimeMessage::OptionsUpdated {
            entry_id: entry_id.into(),
            options,
            reply,
        })
        .await?;
        response.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(RuntimeMessage::Shutdown).await
    }

    async fn send(&self, message: RuntimeMessage) -> Result<(), RuntimeError> {
        self.tx
            .send(message)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// Work collected from one drained batch of messages
#[derive(Default)]
struct Batch {
    dirty: BTreeSet<String>,
    replies: Vec<(oneshot::Sender<Result<(), RuntimeError>>, Result<(), RuntimeError>)>,
    stop: bool,
}

pub struct AdvisorRuntime<P> {
    advisors: BTreeMap<String, Advisor>,
    watches: HashMap<String, BTreeSet<String>>,
    store: StateStore,
    publisher: P,
    rx: mpsc::Receiver<RuntimeMessage>,
}

impl<P: StatePublisher> AdvisorRuntime<P> {
    /// Create a runtime over the given advisors.
    ///
    /// Fails when two advisors would publish the same entity id.
    pub fn new(
        advisors: Vec<Advisor>,
        store: StateStore,
        publisher: P,
        capacity: usize,
    ) -> Result<(Self, RuntimeHandle), ConfigError> {
        let mut by_entry = BTreeMap::new();
        let mut entity_ids = HashSet::new();
        for advisor in advisors {
            let entity_id = advisor.entity_id();
            if !entity_ids.insert(entity_id.clone()) {
                return Err(ConfigError::DuplicateEntry(entity_id));
            }
            by_entry.insert(advisor.entry_id().to_string(), advisor);
        }

        let (tx, rx) = mpsc::channel(capacity.max(1));
        let mut runtime = Self {
            advisors: by_entry,
            watches: HashMap::new(),
            store,
            publisher,
            rx,
        };
        runtime.rebuild_watches();

        Ok((runtime, RuntimeHandle { tx }))
    }

    /// Create a runtime for every entry of a config file
    pub fn from_file(file: &AdvisorFile, publisher: P) -> Result<(Self, RuntimeHandle), ConfigError> {
        let language = Language::from_tag(&file.language);
        let locales_dir = file
            .locales_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALES_DIR));

        let advisors = file
            .resolve_entries()?
            .into_iter()
            .map(|(entry, config)| Advisor::from_resolved(entry, config, language, &locales_dir))
            .collect();

        Self::new(advisors, StateStore::new(), publisher, DEFAULT_CAPACITY)
    }

    /// Entry ids watching a sensor
    pub fn watchers_of(&self, entity_id: &str) -> Vec<String> {
        self.watches
            .get(entity_id)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Consume messages until shutdown or until every handle is dropped
    pub async fn run(mut self) {
        tracing::info!(advisors = self.advisors.len(), "advisor runtime started");

        let all: BTreeSet<String> = self.advisors.keys().cloned().collect();
        self.recompute(&all);

        while let Some(message) = self.rx.recv().await {
            let mut batch = Batch::default();
            self.handle(message, &mut batch);

            while !batch.stop {
                match self.rx.try_recv() {
                    Ok(message) => self.handle(message, &mut batch),
                    Err(_) => break,
                }
            }

            self.recompute(&batch.dirty);
            for (reply, result) in batch.replies {
                let _ = reply.send(result);
            }

            if batch.stop {
                break;
            }
        }

        tracing::info!("advisor runtime stopped");
    }

    fn handle(&mut self, message: RuntimeMessage, batch: &mut Batch) {
        match message {
            RuntimeMessage::StateChanged { entity_id, state } => {
                let Some(entries) = self.watches.get(&entity_id) else {
                    tracing::trace!(entity_id = %entity_id, "ignoring state of unwatched sensor");
                    return;
                };
                if self.store.set(entity_id.as_str(), state) {
                    batch.dirty.extend(entries.iter().cloned());
                }
            }
            RuntimeMessage::OptionsUpdated {
                entry_id,
                options,
                reply,
            } => {
                let result = self.apply_options(&entry_id, options);
                if result.is_ok() {
                    batch.dirty.insert(entry_id);
                }
                batch.replies.push((reply, result));
            }
            RuntimeMessage::Shutdown => batch.stop = true,
        }
    }

    fn apply_options(&mut self, entry_id: &str, options: ConfigMap) -> Result<(), RuntimeError> {
        let mut candidate = self
            .advisors
            .get(entry_id)
            .ok_or_else(|| RuntimeError::UnknownEntry(entry_id.to_string()))?
            .clone();

        let checked = candidate
            .apply_options(options)
            .and_then(|()| self.check_unique(entry_id, &candidate));
        if let Err(err) = checked {
            tracing::warn!(entry_id = %entry_id, error = %err, "rejected options update");
            return Err(err.into());
        }

        self.advisors.insert(entry_id.to_string(), candidate);
        tracing::info!(entry_id = %entry_id, "options updated");
        self.rebuild_watches();
        Ok(())
    }

    /// A renamed advisor must not take another advisor's entity id
    fn check_unique(&self, entry_id: &str, candidate: &Advisor) -> Result<(), ConfigError> {
        let entity_id = candidate.entity_id();
        let taken = self
            .advisors
            .iter()
            .any(|(id, other)| id != entry_id && other.entity_id() == entity_id);

        if taken {
            return Err(ConfigError::DuplicateEntry(entity_id));
        }
        Ok(())
    }

    fn rebuild_watches(&mut self) {
        self.watches.clear();
        for (entry_id, advisor) in &self.advisors {
            for entity_id in advisor.watched_entities() {
                self.watches
                    .entry(entity_id)
                    .or_default()
                    .insert(entry_id.clone());
            }
        }

        // states of sensors nobody watches anymore are dropped
        let watches = &self.watches;
        self.store.retain(|entity_id| watches.contains_key(entity_id));
    }

    fn recompute(&self, entry_ids: &BTreeSet<String>) {
        for entry_id in entry_ids {
            if let Some(advisor) = self.advisors.get(entry_id) {
                let state = advisor.recompute(&self.store);
                self.publisher.publish(&state);
            }
        }
    }
}
