//! The egui application shell: screen switching, input intake, and the
//! bridge between the upload store and the widgets.

mod pages;
mod toasts;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Color32};
use eframe::App;
use rfd::FileDialog;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::upload::{FileId, Notification, Notifier, SelectedFile, UploadStatus, UploadStore};
use toasts::Toasts;

/// Brand accent used across the widgets
pub(crate) const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Guide,
    Upload,
}

pub struct CloudQuickApp {
    page: Page,
    store: UploadStore,
    notifier: Arc<dyn Notifier>,
    notifications: UnboundedReceiver<Notification>,
    toasts: Toasts,
    drag_hover: bool,
    // owning the runtime keeps simulator tasks alive for the window's lifetime
    _runtime: Runtime,
}

impl CloudQuickApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        store: UploadStore,
        notifier: Arc<dyn Notifier>,
        notifications: UnboundedReceiver<Notification>,
    ) -> Self {
        info!("window ready");
        Self {
            page: Page::Home,
            store,
            notifier,
            notifications,
            toasts: Toasts::default(),
            drag_hover: false,
            _runtime: runtime,
        }
    }

    /// Moves queued notifications into the toast overlay.
    fn drain_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.toasts.push(notification);
        }
    }

    /// Window-level drag and drop: hovering shows the overlay, dropping
    /// switches to the upload screen and admits the batch.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.drag_hover = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if dropped.is_empty() {
            return;
        }
        self.page = Page::Upload;
        self.store.select_files(Self::selected_from_paths(&dropped));
    }

    fn browse_files(&mut self) {
        if let Some(paths) = FileDialog::new().pick_files() {
            self.store.select_files(Self::selected_from_paths(&paths));
        }
    }

    fn selected_from_paths(paths: &[PathBuf]) -> Vec<SelectedFile> {
        let mut batch = Vec::new();
        for path in paths {
            if !path.is_file() {
                warn!(path = %path.display(), "ignoring a dropped non-file");
                continue;
            }
            match SelectedFile::from_path(path) {
                Ok(file) => batch.push(file),
                Err(err) => warn!(path = %path.display(), %err, "could not read file metadata"),
            }
        }
        batch
    }

    fn copy_share_link(&self, ctx: &egui::Context, id: FileId) {
        match self.store.share_url(id) {
            Some(url) => {
                ctx.output_mut(|o| o.copied_text = url);
                self.notifier
                    .notify(Notification::success("link copied to clipboard"));
            }
            None => {
                warn!(file = %id, "asked to copy a link that does not exist");
                self.notifier.notify(Notification::error("no link to copy yet"));
            }
        }
    }

    /// Progress changes come from background tasks, so ask for frames while
    /// anything is still uploading.
    fn keep_repainting(&self, ctx: &egui::Context) {
        let uploading = self
            .store
            .files()
            .iter()
            .any(|f| matches!(f.status, UploadStatus::Uploading { .. }));
        if uploading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl App for CloudQuickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_notifications();
        self.handle_dropped_files(ctx);
        self.render(ctx);
        self.toasts.render(ctx);
        self.keep_repainting(ctx);
    }
}
