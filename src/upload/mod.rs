//! The upload feature: types, validation, admission, the state store, the
//! progress simulator, and the notification seam between them and the UI.

pub mod admission;
pub mod notify;
pub mod simulator;
pub mod store;
pub mod types;
pub mod validation;

pub use admission::{AdmissionOutcome, AdmissionPlan, MAX_ACTIVE_FILES};
pub use notify::{Notification, NotificationKind, Notifier};
pub use simulator::SimulatorConfig;
pub use store::{StoreConfig, UploadStore};
pub use types::{FileCategory, FileId, SelectedFile, UploadFile, UploadStatus};
