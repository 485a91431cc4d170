// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog store and filter engine.
//!
//! This module holds the session's submitted projects, newest first, and
//! provides the pure filter matching used by the feed.

use super::project::{Major, Project, Year};

/// Course options for the given track selection. The wildcard selection has
/// no course list of its own.
pub fn courses_for(major: Option<Major>) -> &'static [&'static str] {
    match major {
        Some(major) => major.courses(),
        None => &[],
    }
}

/// Feed filter state. `None` selects every value on that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub major: Option<Major>,
    pub year: Option<Year>,
    pub course: Option<String>,
}

impl Filters {
    /// True iff every concrete dimension equals the project's value. The
    /// dimensions are checked independently, so a course that exists only
    /// under another track simply never matches.
    pub fn matches(&self, project: &Project) -> bool {
        let major_match = self.major.map_or(true, |m| project.major == m);
        let year_match = self.year.map_or(true, |y| project.year == y);
        let course_match = self
            .course
            .as_deref()
            .map_or(true, |c| project.course == c);
        major_match && year_match && course_match
    }
}

/// In-memory collection of submitted projects for the session.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Projects in feed order, newest first
    projects: Vec<Project>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
        }
    }

    /// Insert a project at the head of the feed. Validation already happened
    /// upstream; a well-formed project is never rejected.
    pub fn append(&mut self, project: Project) {
        self.projects.insert(0, project);
    }

    /// All projects, newest first.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Number of submitted projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no project has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects matching the given filters, in feed order. A pure view over
    /// the catalog; repeated calls with unchanged input return the same set.
    pub fn filtered(&self, filters: &Filters) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filters.matches(p))
            .collect()
    }
}
