// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project feed view.
//!
//! This module renders the filter bar and the scrollable list of submitted
//! projects, newest first.

use crate::models::catalog::{courses_for, Catalog, Filters};
use crate::models::project::{Major, MediaKind, Project, ProjectId, Year};
use crate::util::text;
use std::collections::{HashMap, HashSet};

/// Characters of a description shown before the "ver más" toggle.
const DESCRIPTION_CHAR_LIMIT: usize = 150;

/// Display the feed with its filter bar.
pub fn show(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    filters: &mut Filters,
    textures: &HashMap<ProjectId, egui::TextureHandle>,
    expanded: &mut HashSet<ProjectId>,
) {
    filter_bar(ui, filters);
    ui.separator();

    let projects = catalog.filtered(filters);
    if projects.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(
                    egui::RichText::new("No hay proyectos para mostrar")
                        .color(egui::Color32::from_gray(180)),
                );
                ui.label(
                    egui::RichText::new(
                        "Intenta cambiar los filtros o sube un nuevo proyecto.",
                    )
                    .weak(),
                );
            });
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(512.0);
                for project in projects {
                    ui.add_space(12.0);
                    post_card(ui, project, textures.get(&project.id), expanded);
                }
                ui.add_space(12.0);
            });
        });
}

/// Display the three filter selects. The course options depend on the
/// selected track; a chosen course is kept even when the track changes,
/// which at worst filters the feed down to nothing.
fn filter_bar(ui: &mut egui::Ui, filters: &mut Filters) {
    ui.horizontal(|ui| {
        ui.label("Carrera");
        egui::ComboBox::from_id_source("filter_major")
            .selected_text(filters.major.map(|m| m.as_str()).unwrap_or("Todos"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.major, None, "Todos");
                for major in Major::ALL {
                    ui.selectable_value(&mut filters.major, Some(major), major.as_str());
                }
            });

        ui.separator();

        ui.label("Año");
        egui::ComboBox::from_id_source("filter_year")
            .selected_text(filters.year.map(|y| y.as_str()).unwrap_or("Todos"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.year, None, "Todos");
                for year in Year::ALL {
                    ui.selectable_value(&mut filters.year, Some(year), year.as_str());
                }
            });

        ui.separator();

        ui.label("Curso");
        let course_options = courses_for(filters.major);
        ui.add_enabled_ui(!course_options.is_empty(), |ui| {
            let selected = filters.course.as_deref().unwrap_or("Todos").to_string();
            egui::ComboBox::from_id_source("filter_course")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filters.course, None, "Todos");
                    for course in course_options {
                        ui.selectable_value(
                            &mut filters.course,
                            Some((*course).to_string()),
                            *course,
                        );
                    }
                });
        });
    });
}

/// Display a single project card.
fn post_card(
    ui: &mut egui::Ui,
    project: &Project,
    texture: Option<&egui::TextureHandle>,
    expanded: &mut HashSet<ProjectId>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.vertical(|ui| {
            ui.strong(project.student_name.as_str());
            ui.label(
                egui::RichText::new(format!(
                    "{} • {} • {}",
                    project.major, project.year, project.course
                ))
                .small()
                .weak(),
            );
            ui.add_space(6.0);

            match (project.media_kind, texture) {
                (MediaKind::Image, Some(texture)) => {
                    let size = texture.size_vec2();
                    let scale = (ui.available_width() / size.x).min(1.0);
                    ui.image((texture.id(), size * scale));
                }
                (MediaKind::Image, None) => {
                    media_placeholder(ui, "🖼", &project.media.original_name);
                }
                (MediaKind::Video, _) => {
                    media_placeholder(ui, "🎬", &project.media.original_name);
                }
            }

            ui.add_space(6.0);
            description(ui, project, expanded);
        });
    });
}

/// Display a tile for media without a decoded preview.
fn media_placeholder(ui: &mut egui::Ui, icon: &str, name: &str) {
    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, width * 0.5625), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(40));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{icon} {name}"),
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(180),
    );
}

/// Display the description, truncated with a "ver más"/"ver menos" toggle.
/// Only the presentation is truncated; the stored text is untouched.
fn description(ui: &mut egui::Ui, project: &Project, expanded: &mut HashSet<ProjectId>) {
    match text::truncated(&project.description, DESCRIPTION_CHAR_LIMIT) {
        Some(short) => {
            if expanded.contains(&project.id) {
                ui.label(project.description.as_str());
                if ui.link("ver menos").clicked() {
                    expanded.remove(&project.id);
                }
            } else {
                ui.label(short);
                if ui.link("ver más").clicked() {
                    expanded.insert(project.id.clone());
                }
            }
        }
        None => {
            ui.label(project.description.as_str());
        }
    }
}
