//! Home and guide screens.

use eframe::egui::{self, RichText};

use super::{CloudQuickApp, Page, ACCENT};
use crate::upload::validation::CATEGORY_RULES;
use crate::upload::MAX_ACTIVE_FILES;
use crate::utils::format_size;

impl CloudQuickApp {
    pub(super) fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("☁").size(48.0).color(ACCENT));
            ui.add_space(8.0);
            ui.label(RichText::new("Cloud Quick").size(30.0).strong());
            ui.add_space(6.0);
            ui.label(
                RichText::new("Drop files in, watch them upload, grab a link to share.")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );

            ui.add_space(24.0);
            let start = egui::Button::new(RichText::new("Start uploading").size(16.0))
                .min_size(egui::vec2(200.0, 40.0));
            if ui.add(start).clicked() {
                self.page = Page::Upload;
            }
            ui.add_space(8.0);
            if ui.button("How it works").clicked() {
                self.page = Page::Guide;
            }
        });
    }

    pub(super) fn render_guide(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.heading("Upload guide");
        ui.add_space(4.0);
        ui.label(
            RichText::new("What you can upload and what happens to it.")
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
        );
        ui.add_space(16.0);

        ui.group(|ui| {
            egui::Grid::new("category-limits")
                .num_columns(3)
                .spacing([24.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("category").strong());
                    ui.label(RichText::new("extensions").strong());
                    ui.label(RichText::new("size limit").strong());
                    ui.end_row();

                    for rule in &CATEGORY_RULES {
                        ui.label(rule.category.label());
                        ui.label(rule.extensions.join(", "));
                        ui.label(format_size(rule.limit));
                        ui.end_row();
                    }
                });
        });

        ui.add_space(12.0);
        ui.label(format!(
            "• Up to {MAX_ACTIVE_FILES} files can be waiting or uploading at once; \
             larger selections are trimmed to the free slots."
        ));
        ui.label("• Unsupported or oversized files stay in the list with the reason they were rejected.");
        ui.label("• Finished uploads get a shareable link you can copy.");
        ui.label("• This is a demo: nothing leaves your machine and the list resets on restart.");

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            if ui.button("← Home").clicked() {
                self.page = Page::Home;
            }
            if ui.button("Go to upload").clicked() {
                self.page = Page::Upload;
            }
        });
    }
}
