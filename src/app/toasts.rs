//! Transient toast overlay fed by the notification channel.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, RichText, Stroke};

use crate::upload::{Notification, NotificationKind};

struct ToastStyle {
    fill: Color32,
    border: Color32,
    text: Color32,
}

fn style_for(kind: NotificationKind) -> ToastStyle {
    match kind {
        NotificationKind::Info => ToastStyle {
            fill: Color32::from_rgb(240, 249, 255),
            border: Color32::from_rgb(186, 230, 253),
            text: Color32::from_rgb(3, 105, 161),
        },
        NotificationKind::Success => ToastStyle {
            fill: Color32::from_rgb(240, 253, 244),
            border: Color32::from_rgb(187, 247, 208),
            text: Color32::from_rgb(22, 101, 52),
        },
        NotificationKind::Error => ToastStyle {
            fill: Color32::from_rgb(254, 226, 226),
            border: Color32::from_rgb(252, 165, 165),
            text: Color32::from_rgb(220, 38, 38),
        },
    }
}

struct ActiveToast {
    notification: Notification,
    shown_at: Instant,
}

/// Queue of toasts currently on screen, newest at the bottom of the stack
#[derive(Default)]
pub struct Toasts {
    active: Vec<ActiveToast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) {
        self.active.push(ActiveToast {
            notification,
            shown_at: Instant::now(),
        });
    }

    /// Draws the stack top-centered and drops entries past their duration.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.active
            .retain(|toast| toast.shown_at.elapsed() < toast.notification.duration);
        if self.active.is_empty() {
            return;
        }

        let mut offset = 16.0;
        for (index, toast) in self.active.iter().enumerate() {
            let remaining = toast.notification.duration.as_secs_f32()
                - toast.shown_at.elapsed().as_secs_f32();
            // fade over the final second on screen
            let alpha = remaining.clamp(0.0, 1.0);
            let style = style_for(toast.notification.kind);

            let response = egui::Area::new(egui::Id::new("toast").with(index))
                .order(egui::Order::Foreground)
                .anchor(Align2::CENTER_TOP, egui::vec2(0.0, offset))
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(style.fill.gamma_multiply(alpha))
                        .stroke(Stroke::new(1.0, style.border.gamma_multiply(alpha)))
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(14.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.notification.message)
                                    .color(style.text.gamma_multiply(alpha)),
                            );
                        });
                });
            offset += response.response.rect.height() + 8.0;
        }

        // keep repainting so expiry and fade do not wait for input
        ctx.request_repaint();
    }
}
