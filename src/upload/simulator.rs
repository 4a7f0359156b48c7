//! Simulated per-file transfer progress.
//!
//! There is no real I/O behind an upload: each uploading file gets its own
//! timer task that bumps the record's progress by a fixed step until it
//! hits 100, then swaps the record to `Success` with a synthetic url.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::upload::notify::{Notification, Notifier};
use crate::upload::store::StoreState;
use crate::upload::types::{FileId, UploadStatus};

/// Tick interval and progress step of the simulated transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub tick: Duration,
    pub step: u8,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(300),
            step: 10,
        }
    }
}

/// Synthetic location attached to a completed upload; never dereferenced
pub fn share_url(id: FileId, name: &str) -> String {
    format!("https://example.com/files/{id}/{name}")
}

/// Owner side of one running progress task
#[derive(Debug)]
pub(crate) struct SimulatorHandle {
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    pub(crate) fn cancel(&self) {
        self.task.abort();
    }
}

/// Spawns the progress task for one file. The task holds only a weak
/// reference to the store state, so a deleted record or a dropped store
/// stops it on its next tick; deletion also aborts it outright through the
/// returned handle.
pub(crate) fn spawn(
    runtime: &Handle,
    state: Weak<RwLock<StoreState>>,
    notifier: Arc<dyn Notifier>,
    config: SimulatorConfig,
    id: FileId,
) -> SimulatorHandle {
    let task = runtime.spawn(async move {
        loop {
            tokio::time::sleep(config.tick).await;
            let Some(state) = state.upgrade() else {
                break;
            };
            if let Tick::Finished = advance(&state, notifier.as_ref(), config.step, id) {
                break;
            }
        }
    });
    SimulatorHandle { task }
}

enum Tick {
    Continue,
    Finished,
}

/// One timer tick: bump progress or complete the record. Records that are
/// missing or no longer uploading end the task.
fn advance(state: &RwLock<StoreState>, notifier: &dyn Notifier, step: u8, id: FileId) -> Tick {
    let mut state = state.write();
    let Some(file) = state.files.iter_mut().find(|f| f.id == id) else {
        debug!(file = %id, "progress tick for a removed file, stopping");
        return Tick::Finished;
    };
    let progress = match file.status {
        UploadStatus::Uploading { progress } => progress,
        _ => return Tick::Finished,
    };

    let next = progress.saturating_add(step);
    if next >= 100 {
        let name = file.name.clone();
        file.status = UploadStatus::Success {
            url: share_url(id, &name),
        };
        state.simulators.remove(&id);
        drop(state);
        debug!(file = %id, name = %name, "upload complete");
        notifier.notify(Notification::success(format!("{name} uploaded")));
        return Tick::Finished;
    }

    file.status = UploadStatus::Uploading { progress: next };
    Tick::Continue
}
