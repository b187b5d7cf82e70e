// SPDX-License-Identifier: MIT

//! Top-level egui application shell for collecting and exporting word lists.
//! Handles layout, the input area, and wiring to export file creation.

use eframe::egui;
use time::OffsetDateTime;

use crate::mvu::{self, AppModel, Msg};

/// Stateful egui application for building and exporting word lists.
#[derive(Default)]
pub struct WordPackApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for WordPackApp {
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages until exhausted. Commands run inline:
        // the only side effect is a local file write, so there is no worker
        // pool and each action completes before the next frame renders.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                msgs.push(mvu::run_command(cmd));
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Word List Entry");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_export_button(ui);
                    ui.separator();
                    self.render_word_count(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_word_input(ui);
                ui.add_space(8.0);

                self.render_add_button(ui);
                ui.add_space(12.0);

                self.render_preview_section(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl WordPackApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the "Export list" button in the top bar.
    ///
    /// The button stays enabled even with an empty list; exporting then
    /// surfaces an informational "No words entered." status instead of
    /// writing a file.
    fn render_export_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Export list",
            egui_phosphor::regular::FLOPPY_DISK
        ));

        if ui
            .add(button)
            .on_hover_text("Write the sorted list to a timestamped file in the working directory")
            .clicked()
        {
            self.inbox.push(Msg::ExportRequested(local_now()));
        }
    }

    /// Render the running count of unique words collected this session.
    fn render_word_count(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(format!("{} words", self.model.word_list.len()))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }

    /// Render the multi-line word input area.
    fn render_word_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Words");
        ui.label(
            egui::RichText::new("One word per line. Numbering like \"1. \" is stripped.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
        let mut text = self.model.input_text.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut text)
                    .hint_text("e.g.\n1. apple\n2. banana")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::InputChanged(text));
        }
    }

    fn render_add_button(&mut self, ui: &mut egui::Ui) {
        let button =
            egui::Button::new(format!("{} Add words", egui_phosphor::regular::PLUS));
        if ui.add(button).clicked() {
            self.inbox.push(Msg::AddWords);
        }
    }

    /// Render the read-only preview of the most recent export.
    fn render_preview_section(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Formatted export")
            .default_open(true)
            .show(ui, |ui| {
                match self.model.export_preview.as_deref() {
                    Some(preview) => {
                        // `&mut &str` keeps the text area selectable but immutable.
                        let mut text = preview;
                        ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .font(egui::TextStyle::Monospace)
                                .desired_rows(10)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("No export yet.")
                                .italics()
                                .color(egui::Color32::from_gray(110)),
                        );
                    }
                }
            });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Export error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}

/// Wall-clock time for export filenames, falling back to UTC when the local
/// offset cannot be determined.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
