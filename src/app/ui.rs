use super::{SummarizerApp, UploadWidget};
use crate::upload::SelectedFile;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

impl SummarizerApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Document Summarization App");
                });
                ui.add_space(20.0);

                self.widget.render(ui);
            });
        });
    }
}

impl UploadWidget {
    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Upload a Document for Summarization").strong());
            });
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("📄 Choose File").clicked() {
                    let picked = FileDialog::new()
                        .add_filter("Documents", &DOCUMENT_EXTENSIONS)
                        .add_filter("All files", &["*"])
                        .pick_file();
                    self.select_file(picked.map(SelectedFile::new));
                }

                match self.state.selected_file() {
                    Some(file) => {
                        let size = file.size.map(format_size).unwrap_or_default();
                        ui.label(format!("{} {}", file.name, size).trim_end());
                    }
                    None => {
                        ui.label(
                            RichText::new("No file chosen")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    }
                }
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                let button =
                    egui::Button::new("Upload and Summarize").min_size(egui::vec2(200.0, 36.0));
                if ui.add(button).clicked() {
                    self.start_upload(Some(ui.ctx().clone()));
                }
            });

            ui.add_space(10.0);

            if !self.state.status_message().is_empty() {
                ui.label(self.state.status_message());
            }
            if !self.state.error_message().is_empty() {
                ui.colored_label(Color32::from_rgb(220, 50, 50), self.state.error_message());
            }
        });

        if !self.state.summary().is_empty() {
            ui.add_space(10.0);
            ui.group(|ui| {
                ui.label(RichText::new("Summary:").strong());
                ui.add_space(4.0);
                egui::ScrollArea::vertical()
                    .id_source("summary")
                    .max_height(300.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(self.state.summary()).wrap(true));
                    });
            });
        }
    }
}
