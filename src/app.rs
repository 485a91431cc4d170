// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the catalog, the active view, the form
//! draft, and the transient feed state.

use crate::io::media::{self, DecodedImage};
use crate::models::{
    catalog::{Catalog, Filters},
    project::{MediaAsset, ProjectId},
    submission::SubmissionDraft,
};
use crate::ui::{feed, nav, upload};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

/// Time the confirmation banner stays up before the feed is shown.
const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Active top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Upload,
    Feed,
}

/// Result of background media loading operation.
struct LoadedMediaData {
    asset: MediaAsset,
    preview: Option<DecodedImage>,
}

/// Main application state.
pub struct HubApp {
    /// Currently active view
    active_view: View,

    /// Submitted projects, newest first
    catalog: Catalog,

    /// Active feed filters
    filters: Filters,

    /// In-progress submission form state
    draft: SubmissionDraft,

    /// Decoded preview for the draft's media, if it is an image
    draft_preview: Option<DecodedImage>,

    /// Blocking form message (validation or media loading failure)
    form_error: Option<String>,

    /// Transient confirmation shown after a successful submission
    success_message: Option<String>,

    /// When to switch to the feed after a successful submission
    redirect_deadline: Option<Instant>,

    /// Counter feeding the project id generator
    submission_counter: u64,

    /// Receiver for background media loading
    media_loader: Option<Receiver<Result<LoadedMediaData, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Feed preview textures, one per submitted image project
    textures: HashMap<ProjectId, egui::TextureHandle>,

    /// Cards currently showing their full description
    expanded_cards: HashSet<ProjectId>,
}

impl Default for HubApp {
    fn default() -> Self {
        Self::new()
    }
}

impl HubApp {
    /// Create a new Project Hub application instance.
    pub fn new() -> Self {
        Self {
            active_view: View::Upload,
            catalog: Catalog::new(),
            filters: Filters::default(),
            draft: SubmissionDraft::default(),
            draft_preview: None,
            form_error: None,
            success_message: None,
            redirect_deadline: None,
            submission_counter: 0,
            media_loader: None,
            loading_message: None,
            textures: HashMap::new(),
            expanded_cards: HashSet::new(),
        }
    }

    /// Open the native file picker and load the chosen file (asynchronously).
    fn pick_media_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Imágenes",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
            )
            .add_filter("Videos", &["mp4", "webm", "mov", "avi", "mkv"])
            .pick_file()
        else {
            return;
        };

        let (sender, receiver) = channel();
        self.media_loader = Some(receiver);
        self.loading_message = Some("Cargando archivo...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::load_media(&path)
                .map(|(asset, preview)| LoadedMediaData { asset, preview })
                .map_err(|e| format!("No se pudo leer el archivo: {e}"));
            let _ = sender.send(result);
        });
    }

    /// Validate the draft and append the resulting project to the catalog.
    fn submit(&mut self, ctx: &egui::Context) {
        self.form_error = None;

        let validated = match self.draft.validate() {
            Ok(validated) => validated,
            Err(e) => {
                log::warn!("Submission rejected: {}", e);
                self.form_error = Some(e.to_string());
                return;
            }
        };

        self.submission_counter += 1;
        let project = validated.into_project(self.submission_counter);

        // Turn the decoded preview into a feed texture
        if let Some(preview) = self.draft_preview.take() {
            let size = [preview.width as usize, preview.height as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &preview.pixels);
            let texture = ctx.load_texture(
                format!("preview_{}", project.id),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            self.textures.insert(project.id.clone(), texture);
        }

        log::info!(
            "Submitted project {} to {}, total: {}",
            project.id,
            project.file_path,
            self.catalog.len() + 1
        );
        self.catalog.append(project);

        // Reset form
        self.draft = SubmissionDraft::default();
        self.success_message = Some("¡Tu proyecto se subió correctamente!".to_string());
        self.redirect_deadline = Some(Instant::now() + SUCCESS_REDIRECT_DELAY);
    }

    /// Discard a scheduled post-submit redirect and its banner.
    fn cancel_redirect(&mut self) {
        self.redirect_deadline = None;
        self.success_message = None;
    }
}

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed media loading
        if let Some(ref receiver) = self.media_loader {
            if let Ok(result) = receiver.try_recv() {
                self.media_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => {
                        log::info!(
                            "Loaded media file {} ({})",
                            loaded.asset.original_name,
                            loaded.asset.mime_type
                        );
                        self.draft.media = Some(loaded.asset);
                        self.draft_preview = loaded.preview;
                        self.form_error = None;
                    }
                    Err(e) => {
                        log::error!("Failed to load media: {}", e);
                        self.form_error = Some(e);
                    }
                }
            }
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Fire the scheduled redirect once its deadline passes
        if let Some(deadline) = self.redirect_deadline {
            let now = Instant::now();
            if now >= deadline {
                self.cancel_redirect();
                self.active_view = View::Feed;
                log::info!("Switched to feed after submission");
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }

        // Top navigation bar
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            let previous_view = self.active_view;
            nav::show(ui, &mut self.active_view);
            if self.active_view != previous_view {
                // Manual navigation discards the scheduled redirect
                self.cancel_redirect();
            }
        });

        // Active view (center)
        let upload_action = egui::CentralPanel::default()
            .show(ctx, |ui| match self.active_view {
                View::Upload => upload::show(
                    ui,
                    &mut self.draft,
                    self.form_error.as_deref(),
                    self.success_message.as_deref(),
                    self.loading_message.as_deref(),
                ),
                View::Feed => {
                    feed::show(
                        ui,
                        &self.catalog,
                        &mut self.filters,
                        &self.textures,
                        &mut self.expanded_cards,
                    );
                    upload::UploadAction::None
                }
            })
            .inner;

        // Handle upload form actions
        match upload_action {
            upload::UploadAction::PickMedia => self.pick_media_file(),
            upload::UploadAction::Submit => self.submit(ctx),
            upload::UploadAction::None => {}
        }
    }
}
