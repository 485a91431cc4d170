// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.
//!
//! This module provides the header bar for switching between the upload
//! form and the project feed.

use crate::app::View;

/// Display the navigation bar with view selection buttons.
pub fn show(ui: &mut egui::Ui, active_view: &mut View) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.heading("Project Hub");

        ui.separator();

        if ui
            .selectable_label(*active_view == View::Upload, "⬆ Subir Proyecto")
            .clicked()
        {
            *active_view = View::Upload;
        }

        if ui
            .selectable_label(*active_view == View::Feed, "🖼 Ver Proyectos")
            .clicked()
        {
            *active_view = View::Feed;
        }

        ui.separator();

        // View description
        let view_text = match active_view {
            View::Upload => "Comparte tu proyecto con una foto o un video",
            View::Feed => "Explora los proyectos y filtra por carrera, año y curso",
        };

        ui.label(egui::RichText::new(view_text).italics().weak());
    });
}
