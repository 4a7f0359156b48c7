//! Panel chrome and the upload screen.

use eframe::egui::{self, Align, Align2, Color32, CursorIcon, FontId, Layout, RichText, Stroke};

use super::{CloudQuickApp, Page, ACCENT};
use crate::upload::{UploadFile, UploadStatus, MAX_ACTIVE_FILES};
use crate::utils::format_size;

const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 150, 70);

fn status_icon(status: &UploadStatus) -> &'static str {
    match status {
        UploadStatus::Pending => "⏳",
        UploadStatus::Uploading { .. } => "📤",
        UploadStatus::Success { .. } => "✅",
        UploadStatus::Error { .. } => "❌",
    }
}

impl CloudQuickApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        self.render_footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.page {
                    Page::Home => self.render_home(ui),
                    Page::Guide => self.render_guide(ui),
                    Page::Upload => self.render_upload(ui),
                }
                ui.add_space(16.0);
            });
        });

        self.render_drag_overlay(ctx);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("☁ Cloud Quick")
                        .size(17.0)
                        .strong()
                        .color(ACCENT),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .selectable_label(self.page == Page::Upload, "Upload")
                        .clicked()
                    {
                        self.page = Page::Upload;
                    }
                    if ui
                        .selectable_label(self.page == Page::Guide, "Guide")
                        .clicked()
                    {
                        self.page = Page::Guide;
                    }
                    if ui
                        .selectable_label(self.page == Page::Home, "Home")
                        .clicked()
                    {
                        self.page = Page::Home;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("© 2026 Cloud Quick. Uploads are simulated; nothing leaves your machine.")
                        .small()
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                );
            });
            ui.add_space(4.0);
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Upload files");
            ui.add_space(4.0);
            ui.label(
                RichText::new("Pick up to five files and watch them go.")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });

        ui.add_space(16.0);
        self.render_drop_zone(ui);
        ui.add_space(16.0);

        let files = self.store.files();
        for file in &files {
            self.render_file_row(ui, file);
            ui.add_space(6.0);
        }
        if !files.is_empty() {
            ui.add_space(10.0);
        }

        self.render_actions(ui);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let zone = egui::Frame::none()
            .stroke(Stroke::new(1.5, ACCENT.gamma_multiply(0.6)))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(16.0, 28.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📁").size(34.0));
                    ui.add_space(6.0);
                    ui.label(RichText::new("Drag files here or click to browse").size(15.0));
                    ui.add_space(4.0);
                    let hint = ui.visuals().text_color().gamma_multiply(0.6);
                    ui.label(
                        RichText::new("images, video, audio, documents and archives")
                            .small()
                            .color(hint),
                    );
                    ui.label(
                        RichText::new(format!("up to {MAX_ACTIVE_FILES} files at a time"))
                            .small()
                            .color(hint),
                    );
                });
            });

        let response = zone
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            self.browse_files();
        }
    }

    fn render_file_row(&mut self, ui: &mut egui::Ui, file: &UploadFile) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(status_icon(&file.status));

                ui.vertical(|ui| {
                    ui.set_max_width(ui.available_width() - 76.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&file.name).strong());
                        ui.label(RichText::new(file.category.label()).small().color(ACCENT));
                        ui.label(
                            RichText::new(format_size(file.size))
                                .small()
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                    });

                    match &file.status {
                        UploadStatus::Pending => {
                            ui.colored_label(Color32::from_rgb(150, 150, 150), "waiting to upload");
                        }
                        UploadStatus::Uploading { progress } => {
                            let bar = egui::ProgressBar::new(f32::from(*progress) / 100.0)
                                .show_percentage()
                                .animate(false)
                                .fill(ACCENT);
                            ui.add(bar);
                        }
                        UploadStatus::Success { url } => {
                            ui.label(RichText::new(url).small().color(SUCCESS_GREEN));
                        }
                        UploadStatus::Error { message } => {
                            ui.colored_label(ERROR_RED, message);
                        }
                    }
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("🗑").on_hover_text("remove").clicked() {
                        self.store.delete_file(file.id);
                    }
                    if file.url().is_some() && ui.button("📋").on_hover_text("copy link").clicked()
                    {
                        self.copy_share_link(ui.ctx(), file.id);
                    }
                });
            });
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        let pending = self.store.pending_count();
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(pending > 0, |ui| {
                let label = if pending > 0 {
                    format!("📤 Upload ({pending})")
                } else {
                    "📤 Upload".to_string()
                };
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.store.start_upload();
                }
            });
            ui.add_space(6.0);
            if ui.button("📁 Choose files").clicked() {
                self.browse_files();
            }
        });
    }

    fn render_drag_overlay(&self, ctx: &egui::Context) {
        if !self.drag_hover {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("drag-overlay"),
        ));
        let rect = ctx.screen_rect();
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(150));
        painter.rect_stroke(rect.shrink(14.0), 10.0, Stroke::new(2.0, ACCENT));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "drop to add files",
            FontId::proportional(22.0),
            Color32::WHITE,
        );
    }
}
