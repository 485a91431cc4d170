// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Submission validation and normalization.
//!
//! This module turns the raw upload-form draft into a canonical catalog
//! entry: required-field checks, storage-safe naming, and media
//! classification.

use super::project::{Major, MediaAsset, MediaKind, Project, ProjectId, Year};
use crate::util::text;
use thiserror::Error;

/// Validation failure, surfaced to the user as a single blocking message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// One or more required fields are empty or absent.
    #[error("Todos los campos son obligatorios.")]
    MissingField,
}

/// Raw, in-progress form state. Left untouched when validation fails so the
/// user can correct and resubmit.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub student_name: String,
    pub major: Option<Major>,
    pub year: Option<Year>,
    /// Empty until a course is chosen.
    pub course: String,
    pub description: String,
    pub media: Option<MediaAsset>,
}

impl SubmissionDraft {
    /// Select a track, clearing the chosen course when the track changes.
    /// The course select only ever offers courses of the current track.
    pub fn select_major(&mut self, major: Major) {
        if self.major != Some(major) {
            self.major = Some(major);
            self.course.clear();
        }
    }

    /// Check that every required input is present. Semantic validity is not
    /// checked here: course membership is constrained by the form's select,
    /// and the media size/format hint is advisory only.
    pub fn validate(&self) -> Result<ValidatedSubmission, SubmissionError> {
        let student_name = self.student_name.trim();
        let (Some(major), Some(year), Some(media)) = (self.major, self.year, self.media.as_ref())
        else {
            return Err(SubmissionError::MissingField);
        };
        if student_name.is_empty() || self.course.is_empty() || self.description.is_empty() {
            return Err(SubmissionError::MissingField);
        }

        Ok(ValidatedSubmission {
            student_name: student_name.to_string(),
            major,
            year,
            course: self.course.clone(),
            description: self.description.clone(),
            media: media.clone(),
        })
    }
}

/// A submission with every required field present. Produced only by
/// [`SubmissionDraft::validate`], so a project can never be built from
/// partial input.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub student_name: String,
    pub major: Major,
    pub year: Year,
    pub course: String,
    pub description: String,
    pub media: MediaAsset,
}

impl ValidatedSubmission {
    /// Build the immutable catalog entry. `seq` feeds the id generator and
    /// must increase with every submission in the session.
    pub fn into_project(self, seq: u64) -> Project {
        let media_kind = MediaKind::from_mime(&self.media.mime_type);

        let stem = text::sanitize_file_stem(&self.student_name);
        let extension = text::file_extension(&self.media.original_name);
        let file_name = if extension.is_empty() {
            stem
        } else {
            format!("{stem}.{extension}")
        };
        let file_path = format!("{}/{}/{}/", self.major, self.year, self.course);

        Project {
            id: ProjectId::generate(seq),
            student_name: self.student_name,
            major: self.major,
            year: self.year,
            course: self.course,
            description: self.description,
            media: self.media,
            media_kind,
            file_name,
            file_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn media(name: &str, mime: &str) -> MediaAsset {
        MediaAsset {
            original_name: name.to_string(),
            mime_type: mime.to_string(),
            bytes: Arc::new(vec![0u8; 4]),
        }
    }

    fn full_draft() -> SubmissionDraft {
        SubmissionDraft {
            student_name: "Ana María".to_string(),
            major: Some(Major::GraphicDesign),
            year: Some(Year::Second),
            course: "Branding".to_string(),
            description: "Identidad visual para una librería.".to_string(),
            media: Some(media("photo.PNG", "image/png")),
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let mut draft = full_draft();
        draft.student_name.clear();
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);

        let mut draft = full_draft();
        draft.major = None;
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);

        let mut draft = full_draft();
        draft.year = None;
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);

        let mut draft = full_draft();
        draft.course.clear();
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);

        let mut draft = full_draft();
        draft.description.clear();
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);

        let mut draft = full_draft();
        draft.media = None;
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);
    }

    #[test]
    fn test_validate_rejects_whitespace_only_name() {
        let mut draft = full_draft();
        draft.student_name = "   ".to_string();
        assert_eq!(draft.validate().unwrap_err(), SubmissionError::MissingField);
    }

    #[test]
    fn test_validate_does_not_check_course_membership() {
        // "Iluminación" belongs to the interior design track, but presence
        // is all that is required; the form prevents this combination.
        let mut draft = full_draft();
        draft.course = "Iluminación".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_error_message_is_the_blocking_form_message() {
        assert_eq!(
            SubmissionError::MissingField.to_string(),
            "Todos los campos son obligatorios."
        );
    }

    #[test]
    fn test_project_stores_trimmed_name() {
        let mut draft = full_draft();
        draft.student_name = "  Ana María  ".to_string();
        let project = draft.validate().unwrap().into_project(1);
        assert_eq!(project.student_name, "Ana María");
    }

    #[test]
    fn test_storage_name_derivation() {
        let project = full_draft().validate().unwrap().into_project(1);
        assert_eq!(project.file_name, "ana_maría.png");
    }

    #[test]
    fn test_storage_name_without_extension() {
        let mut draft = full_draft();
        draft.media = Some(media("portfolio", "application/octet-stream"));
        let project = draft.validate().unwrap().into_project(1);
        assert_eq!(project.file_name, "ana_maría");
    }

    #[test]
    fn test_storage_path_derivation() {
        let project = full_draft().validate().unwrap().into_project(1);
        assert_eq!(project.file_path, "Diseño Gráfico/2do Año/Branding/");
    }

    #[test]
    fn test_media_kind_derivation() {
        let project = full_draft().validate().unwrap().into_project(1);
        assert_eq!(project.media_kind, MediaKind::Image);

        let mut draft = full_draft();
        draft.media = Some(media("reel.mp4", "video/mp4"));
        let project = draft.validate().unwrap().into_project(2);
        assert_eq!(project.media_kind, MediaKind::Video);

        // Documents keep the permissive video fallback.
        let mut draft = full_draft();
        draft.media = Some(media("informe.pdf", "application/pdf"));
        let project = draft.validate().unwrap().into_project(3);
        assert_eq!(project.media_kind, MediaKind::Video);
    }

    #[test]
    fn test_sequential_submissions_get_distinct_ids() {
        let first = full_draft().validate().unwrap().into_project(1);
        let second = full_draft().validate().unwrap().into_project(2);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_select_major_clears_course_on_change() {
        let mut draft = full_draft();
        draft.select_major(Major::InteriorDesign);
        assert_eq!(draft.major, Some(Major::InteriorDesign));
        assert!(draft.course.is_empty());
    }

    #[test]
    fn test_select_major_keeps_course_when_unchanged() {
        let mut draft = full_draft();
        draft.select_major(Major::GraphicDesign);
        assert_eq!(draft.course, "Branding");
    }
}
