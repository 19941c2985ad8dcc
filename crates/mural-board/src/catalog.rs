//! Course and skill catalogs.
//!
//! Loaded once per page lifetime and read-only afterwards. A failed load
//! leaves that facet empty: its checkboxes disappear and any stale selection
//! translates to nothing, but the listing keeps working.

use std::cmp::Ordering;
use std::collections::HashMap;

use mural_core::{Course, Skill};

use crate::source::ListingSource;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    code_by_name: HashMap<String, String>,
    name_by_code: HashMap<String, String>,
    course_names: Vec<String>,
    skill_names: Vec<String>,
}

impl Catalog {
    /// Build a catalog from already-fetched lists. Course order is kept as
    /// the backend sent it; skills are sorted with [`collate`].
    #[must_use]
    pub fn new(courses: Vec<Course>, skills: Vec<Skill>) -> Self {
        let mut catalog = Self::default();
        for course in courses {
            if catalog.code_by_name.contains_key(&course.full_name) {
                continue;
            }
            catalog
                .name_by_code
                .entry(course.code.clone())
                .or_insert_with(|| course.full_name.clone());
            catalog
                .code_by_name
                .insert(course.full_name.clone(), course.code);
            catalog.course_names.push(course.full_name);
        }

        let mut skill_names: Vec<String> = skills.into_iter().map(|s| s.name).collect();
        skill_names.sort_by(|a, b| collate(a, b));
        skill_names.dedup();
        catalog.skill_names = skill_names;
        catalog
    }

    /// Fetch both catalogs concurrently. Each failure is logged and leaves
    /// only its own facet empty.
    pub async fn load(source: &dyn ListingSource) -> Self {
        let (courses, skills) = tokio::join!(source.courses(), source.skills());

        let courses = courses.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load course catalog; course filter disabled");
            Vec::new()
        });
        let skills = skills.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load skill catalog; skill filter disabled");
            Vec::new()
        });

        Self::new(courses, skills)
    }

    /// Backend code for a course full name, e.g. "Logística" → "LOGISTICA".
    #[must_use]
    pub fn code_for(&self, full_name: &str) -> Option<&str> {
        self.code_by_name.get(full_name).map(String::as_str)
    }

    /// Full name for a backend course code.
    #[must_use]
    pub fn course_name_for(&self, code: &str) -> Option<&str> {
        self.name_by_code.get(code).map(String::as_str)
    }

    /// Course full names in backend order, for the course checklist.
    #[must_use]
    pub fn course_names(&self) -> &[String] {
        &self.course_names
    }

    /// Skill names in alphabetical order, for the skill checklist.
    #[must_use]
    pub fn skill_names(&self) -> &[String] {
        &self.skill_names
    }

    /// Skill names containing `text`, ignoring case and accents. Blank text
    /// returns every skill.
    #[must_use]
    pub fn skills_matching(&self, text: &str) -> Vec<&str> {
        let needle = fold(text.trim());
        self.skill_names
            .iter()
            .filter(|name| needle.is_empty() || fold(name).contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

/// Alphabetical order as a Portuguese reader expects it: accents and case
/// only break ties ("Análise" sorts with "Analise", before "Banco").
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
