// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog entry data structures.
//!
//! This module defines the immutable project record stored in the catalog,
//! along with the closed enumerations for academic tracks, years, and
//! media kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Academic track a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Diseño Gráfico")]
    GraphicDesign,
    #[serde(rename = "Diseño de Interiores")]
    InteriorDesign,
}

impl Major {
    /// All selectable tracks, in display order.
    pub const ALL: [Major; 2] = [Major::GraphicDesign, Major::InteriorDesign];

    /// Display name, also used in storage paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Major::GraphicDesign => "Diseño Gráfico",
            Major::InteriorDesign => "Diseño de Interiores",
        }
    }

    /// Fixed course list for this track.
    pub fn courses(&self) -> &'static [&'static str] {
        match self {
            Major::GraphicDesign => &[
                "Tipografía I",
                "Diseño Editorial",
                "Branding",
                "Diseño Web",
                "Animación Digital",
            ],
            Major::InteriorDesign => &[
                "Dibujo Técnico",
                "Historia del Arte",
                "Diseño de Mobiliario",
                "Iluminación",
                "Proyectos Finales",
            ],
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic year within a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "1er Año")]
    First,
    #[serde(rename = "2do Año")]
    Second,
    #[serde(rename = "3er Año")]
    Third,
    #[serde(rename = "4to Año")]
    Fourth,
    #[serde(rename = "5to Año")]
    Fifth,
}

impl Year {
    /// All academic years, in order.
    pub const ALL: [Year; 5] = [
        Year::First,
        Year::Second,
        Year::Third,
        Year::Fourth,
        Year::Fifth,
    ];

    /// Display name, also used in storage paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Year::First => "1er Año",
            Year::Second => "2do Año",
            Year::Third => "3er Año",
            Year::Fourth => "4to Año",
            Year::Fifth => "5to Año",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a media asset is displayed in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type. Anything without an `image/` prefix is treated
    /// as video, including non-media types such as documents.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else {
            MediaKind::Video
        }
    }
}

/// User-supplied media file, held in memory for the session.
#[derive(Debug, Clone, Default)]
pub struct MediaAsset {
    /// File name as picked, e.g. "photo.PNG".
    pub original_name: String,
    /// MIME type sniffed from the file extension.
    pub mime_type: String,
    /// Raw file bytes, shared so clones stay cheap.
    pub bytes: Arc<Vec<u8>>,
}

/// Unique, time-ordered project identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Build an id from the current wall clock and a per-session sequence
    /// number. The sequence keeps ids unique within a single millisecond.
    pub fn generate(seq: u64) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        ProjectId(format!("{millis}-{seq:04}"))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submitted project. Constructed exactly once by the submission
/// normalizer and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub student_name: String,
    pub major: Major,
    pub year: Year,
    pub course: String,
    pub description: String,
    /// In-memory blob; would be stored out of band if persistence is added.
    #[serde(skip)]
    pub media: MediaAsset,
    pub media_kind: MediaKind,
    /// Storage-safe file name derived from the student name.
    pub file_name: String,
    /// Logical storage key `{major}/{year}/{course}/`.
    pub file_path: String,
}
