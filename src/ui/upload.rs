// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload form view.
//!
//! This module renders the submission form: student name, the dependent
//! selects for track, year and course, a description box, and the media
//! picker. Validation itself lives in the submission model; the form only
//! reports the requested action.

use crate::models::catalog::courses_for;
use crate::models::project::{Major, Year};
use crate::models::submission::SubmissionDraft;

/// Result of upload form interaction.
pub enum UploadAction {
    None,
    PickMedia,
    Submit,
}

/// Display the upload form and report the requested action.
pub fn show(
    ui: &mut egui::Ui,
    draft: &mut SubmissionDraft,
    error: Option<&str>,
    success: Option<&str>,
    loading: Option<&str>,
) -> UploadAction {
    let mut action = UploadAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(480.0);
            ui.add_space(16.0);
            ui.heading("Subir Nuevo Proyecto");
            ui.add_space(16.0);

            if let Some(message) = success {
                ui.colored_label(
                    egui::Color32::from_rgb(22, 163, 74),
                    format!("✔ {message}"),
                );
                ui.add_space(8.0);
            }

            ui.label("Nombre y Apellido");
            ui.add(
                egui::TextEdit::singleline(&mut draft.student_name)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Carrera");
            egui::ComboBox::from_id_source("upload_major")
                .width(ui.available_width())
                .selected_text(
                    draft
                        .major
                        .map(|m| m.as_str())
                        .unwrap_or("Seleccionar carrera"),
                )
                .show_ui(ui, |ui| {
                    for major in Major::ALL {
                        if ui
                            .selectable_label(draft.major == Some(major), major.as_str())
                            .clicked()
                        {
                            // Changing the track resets the chosen course
                            draft.select_major(major);
                        }
                    }
                });
            ui.add_space(8.0);

            ui.label("Año de la Carrera");
            ui.add_enabled_ui(draft.major.is_some(), |ui| {
                egui::ComboBox::from_id_source("upload_year")
                    .width(ui.available_width())
                    .selected_text(
                        draft.year.map(|y| y.as_str()).unwrap_or("Seleccionar año"),
                    )
                    .show_ui(ui, |ui| {
                        for year in Year::ALL {
                            ui.selectable_value(&mut draft.year, Some(year), year.as_str());
                        }
                    });
            });
            ui.add_space(8.0);

            ui.label("Curso");
            ui.add_enabled_ui(draft.year.is_some(), |ui| {
                let selected = if draft.course.is_empty() {
                    "Seleccionar curso"
                } else {
                    draft.course.as_str()
                };
                egui::ComboBox::from_id_source("upload_course")
                    .width(ui.available_width())
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for course in courses_for(draft.major) {
                            ui.selectable_value(
                                &mut draft.course,
                                (*course).to_string(),
                                *course,
                            );
                        }
                    });
            });
            ui.add_space(8.0);

            ui.label("Descripción del Proyecto");
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Archivo (Foto o Video)");
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    if let Some(message) = loading {
                        ui.spinner();
                        ui.label(message);
                    } else if ui.button("Sube un archivo").clicked() {
                        action = UploadAction::PickMedia;
                    }
                    let hint = draft
                        .media
                        .as_ref()
                        .map(|m| m.original_name.clone())
                        .unwrap_or_else(|| "PNG, JPG, GIF, MP4 hasta 10MB".to_string());
                    ui.label(egui::RichText::new(hint).weak());
                    ui.add_space(12.0);
                });
            });
            ui.add_space(8.0);

            if let Some(message) = error {
                ui.colored_label(egui::Color32::from_rgb(220, 38, 38), message);
                ui.add_space(8.0);
            }

            // Submission stays disabled while the confirmation is shown
            let submit = egui::Button::new("Subir Proyecto")
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(success.is_none(), submit).clicked() {
                action = UploadAction::Submit;
            }
            ui.add_space(16.0);
        });
    });

    action
}
