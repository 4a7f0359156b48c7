//! Cloud Quick - a desktop demo of a drag-and-drop upload service
//!
//! Files are validated and admitted into an in-memory list, their "uploads"
//! are driven by per-file timer tasks, and every action surfaces a toast.
//! Nothing ever leaves the machine: the transfer is simulated and the
//! resulting share link is synthetic.
//!
//! # Architecture
//!
//! - [`upload`]: the headless core - types, validation, admission policy,
//!   the state store, the progress simulator, and the notification seam
//! - [`app`]: the egui shell rendering store snapshots and feeding user
//!   input back into the store
//! - [`utils`]: small shared helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use cloud_quick::upload::{notify, SelectedFile, UploadStore};
//!
//! let (notifier, _toasts) = notify::channel();
//! let store = UploadStore::new(runtime.handle().clone(), Arc::new(notifier));
//!
//! store.select_files(vec![SelectedFile::new("photo.jpg", 1_000_000, "image/jpeg")]);
//! store.start_upload();
//! ```

pub mod app;
pub mod upload;
pub mod utils;

pub use app::CloudQuickApp;
pub use upload::UploadStore;
