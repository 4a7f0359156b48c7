use std::sync::Arc;

use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cloud_quick::app::CloudQuickApp;
use cloud_quick::upload::{notify, Notifier, UploadStore};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cloud_quick=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), eframe::Error> {
    init_logging();
    info!("starting cloud quick");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start the async runtime");

    let (notifier, notifications) = notify::channel();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);
    let store = UploadStore::new(runtime.handle().clone(), Arc::clone(&notifier));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([440.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cloud Quick",
        options,
        Box::new(move |cc| {
            Box::new(CloudQuickApp::new(
                cc,
                runtime,
                store,
                notifier,
                notifications,
            ))
        }),
    )
}
