//! The upload state store.
//!
//! One in-memory, insertion-ordered list of [`UploadFile`] records behind a
//! lock. Every user action is a single atomic critical section; the UI only
//! ever sees cloned snapshots, so a half-applied transition is unobservable.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::upload::admission::{self, AdmissionOutcome, MAX_ACTIVE_FILES};
use crate::upload::notify::{Notification, Notifier};
use crate::upload::simulator::{self, SimulatorConfig, SimulatorHandle};
use crate::upload::types::{FileId, SelectedFile, UploadFile, UploadStatus};
use crate::upload::validation;

/// Store-wide tunables; tests tighten the simulator, the app keeps defaults
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    pub max_active: usize,
    pub simulator: SimulatorConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_active: MAX_ACTIVE_FILES,
            simulator: SimulatorConfig::default(),
        }
    }
}

pub(crate) struct StoreState {
    pub(crate) files: Vec<UploadFile>,
    pub(crate) simulators: HashMap<FileId, SimulatorHandle>,
}

/// Handle to the upload list. Clones share the same state; actions emit
/// their user feedback through the injected [`Notifier`].
#[derive(Clone)]
pub struct UploadStore {
    state: Arc<RwLock<StoreState>>,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
    config: StoreConfig,
}

impl UploadStore {
    pub fn new(runtime: Handle, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(runtime, notifier, StoreConfig::default())
    }

    pub fn with_config(runtime: Handle, notifier: Arc<dyn Notifier>, config: StoreConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                files: Vec::new(),
                simulators: HashMap::new(),
            })),
            notifier,
            runtime,
            config,
        }
    }

    /// Snapshot of the whole list in selection order
    pub fn files(&self) -> Vec<UploadFile> {
        self.state.read().files.clone()
    }

    /// Records currently counting against the admission cap
    pub fn active_count(&self) -> usize {
        self.state.read().files.iter().filter(|f| f.is_active()).count()
    }

    /// Records waiting for the upload button
    pub fn pending_count(&self) -> usize {
        self.state
            .read()
            .files
            .iter()
            .filter(|f| matches!(f.status, UploadStatus::Pending))
            .count()
    }

    /// Admits a freshly selected batch. Over-quota files are dropped with a
    /// toast only; admitted files become records immediately, as `Pending`
    /// or as `Error` when validation rejects them.
    pub fn select_files(&self, batch: Vec<SelectedFile>) {
        let mut notifications = Vec::new();
        {
            let mut state = self.state.write();
            let active = state.files.iter().filter(|f| f.is_active()).count();
            let plan = admission::plan(batch.len(), active, self.config.max_active);
            match plan.outcome {
                AdmissionOutcome::LimitReached => {
                    warn!(batch = batch.len(), active, "selection rejected, upload list is full");
                    notifications.push(Notification::error(format!(
                        "you can upload at most {} files at a time",
                        self.config.max_active
                    )));
                }
                AdmissionOutcome::Truncated => {
                    notifications.push(Notification::error(format!(
                        "limit reached, only the first {} files were selected",
                        plan.admitted
                    )));
                }
                AdmissionOutcome::Accepted => {}
            }

            for file in batch.into_iter().take(plan.admitted) {
                let category = validation::classify(&file.name);
                let status = match validation::validate(&file) {
                    Ok(()) => UploadStatus::Pending,
                    Err(err) => {
                        notifications.push(Notification::error(format!("{}: {}", file.name, err)));
                        UploadStatus::Error {
                            message: err.to_string(),
                        }
                    }
                };
                let record = UploadFile {
                    id: FileId::new(),
                    name: file.name,
                    size: file.size,
                    mime_type: file.mime_type,
                    category,
                    status,
                    selected_at: Instant::now(),
                };
                debug!(
                    file = %record.id,
                    name = %record.name,
                    status = record.status.label(),
                    "file admitted"
                );
                state.files.push(record);
            }
        }
        for notification in notifications {
            self.notifier.notify(notification);
        }
    }

    /// Flips every pending record to uploading in one atomic update and
    /// spawns a progress simulator per flipped record. No pending records,
    /// no effect.
    pub fn start_upload(&self) {
        let started = {
            let mut state = self.state.write();
            let mut started = Vec::new();
            for file in state.files.iter_mut() {
                if matches!(file.status, UploadStatus::Pending) {
                    file.status = UploadStatus::Uploading { progress: 0 };
                    started.push(file.id);
                }
            }
            for id in &started {
                let handle = simulator::spawn(
                    &self.runtime,
                    Arc::downgrade(&self.state),
                    Arc::clone(&self.notifier),
                    self.config.simulator,
                    *id,
                );
                state.simulators.insert(*id, handle);
            }
            started
        };

        if started.is_empty() {
            return;
        }
        info!(count = started.len(), "upload started");
        let noun = if started.len() == 1 { "file" } else { "files" };
        self.notifier
            .notify(Notification::info(format!("uploading {} {noun}", started.len())));
    }

    /// Removes a record in any state and cancels its simulator if one is
    /// running. Unknown ids are a no-op.
    pub fn delete_file(&self, id: FileId) -> bool {
        let removed = {
            let mut state = self.state.write();
            let Some(pos) = state.files.iter().position(|f| f.id == id) else {
                debug!(file = %id, "delete ignored, no such file");
                return false;
            };
            if let Some(handle) = state.simulators.remove(&id) {
                handle.cancel();
            }
            state.files.remove(pos)
        };
        info!(file = %id, name = %removed.name, "file removed");
        self.notifier
            .notify(Notification::info(format!("removed {}", removed.name)));
        true
    }

    /// Shareable link for a file, only once its upload has succeeded
    pub fn share_url(&self, id: FileId) -> Option<String> {
        self.state
            .read()
            .files
            .iter()
            .find(|f| f.id == id)
            .and_then(|f| f.url())
            .map(str::to_string)
    }
}
