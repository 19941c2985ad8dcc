//! Canonical filter selection for the listing page.
//!
//! Every mutation except [`FilterState::set_page`] resets the page index to 0,
//! so a narrower filter never leaves the user stranded on a page that no
//! longer exists.

use std::collections::BTreeSet;

use mural_core::{Shift, WorkModel};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterState {
    term: String,
    shifts: BTreeSet<Shift>,
    models: BTreeSet<WorkModel>,
    courses: BTreeSet<String>,
    skills: BTreeSet<String>,
    page: u32,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a page visit: a search term handed off by the header
    /// search box and/or a course picked from the navigation menu.
    #[must_use]
    pub fn seeded(term: Option<&str>, course: Option<&str>) -> Self {
        let mut state = Self::default();
        if let Some(term) = term {
            state.term = term.to_string();
        }
        if let Some(course) = course.map(str::trim).filter(|c| !c.is_empty()) {
            state.courses.insert(course.to_string());
        }
        state
    }

    /// Seed from a navigation query string such as
    /// `?curso=Log%C3%ADstica&termo=dev`. Unknown keys are ignored; `busca`
    /// is accepted as an alias of `termo`.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut term = None;
        let mut course = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match key {
                "curso" => course = Some(value),
                "termo" | "busca" => term = Some(value),
                _ => {}
            }
        }
        Self::seeded(term.as_deref(), course.as_deref())
    }

    pub fn set_text_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 0;
    }

    pub fn toggle_shift(&mut self, shift: Shift, on: bool) {
        toggle(&mut self.shifts, shift, on);
        self.page = 0;
    }

    pub fn toggle_model(&mut self, model: WorkModel, on: bool) {
        toggle(&mut self.models, model, on);
        self.page = 0;
    }

    pub fn toggle_course(&mut self, name: &str, on: bool) {
        toggle(&mut self.courses, name.to_string(), on);
        self.page = 0;
    }

    pub fn toggle_skill(&mut self, name: &str, on: bool) {
        toggle(&mut self.skills, name.to_string(), on);
        self.page = 0;
    }

    /// Move to page `n` without touching any facet. The caller clamps `n`
    /// to the available pages (see [`crate::Pagination::select`]).
    pub const fn set_page(&mut self, n: u32) {
        self.page = n;
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub const fn shifts(&self) -> &BTreeSet<Shift> {
        &self.shifts
    }

    #[must_use]
    pub const fn models(&self) -> &BTreeSet<WorkModel> {
        &self.models
    }

    #[must_use]
    pub const fn courses(&self) -> &BTreeSet<String> {
        &self.courses
    }

    #[must_use]
    pub const fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T, on: bool) {
    if on {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| spaced.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn on_page_three() -> FilterState {
        let mut state = FilterState::new();
        state.toggle_course("Logística", true);
        state.set_page(3);
        state
    }

    #[test]
    fn defaults_are_empty() {
        let state = FilterState::new();
        assert_eq!(state.term(), "");
        assert!(state.shifts().is_empty());
        assert!(state.models().is_empty());
        assert!(state.courses().is_empty());
        assert!(state.skills().is_empty());
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn every_facet_mutation_resets_page() {
        let mutations: Vec<Box<dyn Fn(&mut FilterState)>> = vec![
            Box::new(|s| s.set_text_term("dev")),
            Box::new(|s| s.toggle_shift(Shift::Night, true)),
            Box::new(|s| s.toggle_shift(Shift::Night, false)),
            Box::new(|s| s.toggle_model(WorkModel::Remote, true)),
            Box::new(|s| s.toggle_course("Polímeros", true)),
            Box::new(|s| s.toggle_course("Logística", false)),
            Box::new(|s| s.toggle_skill("SQL", true)),
            Box::new(|s| s.toggle_skill("SQL", false)),
        ];
        for mutate in mutations {
            let mut state = on_page_three();
            mutate(&mut state);
            assert_eq!(state.page(), 0);
        }
    }

    #[test]
    fn set_page_keeps_facets() {
        let mut state = FilterState::new();
        state.set_text_term("java");
        state.toggle_model(WorkModel::Hybrid, true);
        let before = state.clone();

        state.set_page(2);

        assert_eq!(state.page(), 2);
        assert_eq!(state.term(), before.term());
        assert_eq!(state.models(), before.models());
    }

    #[test]
    fn toggling_twice_is_idempotent() {
        let mut state = FilterState::new();
        state.toggle_skill("Excel", true);
        state.toggle_skill("Excel", true);
        assert_eq!(state.skills().len(), 1);
        state.toggle_skill("Excel", false);
        state.toggle_skill("Excel", false);
        assert!(state.skills().is_empty());
    }

    #[test]
    fn seeded_from_navigation() {
        let state = FilterState::seeded(Some("estágio"), Some("Comércio Exterior"));
        assert_eq!(state.term(), "estágio");
        assert!(state.courses().contains("Comércio Exterior"));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn query_string_is_decoded() {
        let state = FilterState::from_query_string("?curso=Log%C3%ADstica&termo=dev+java&utm=x");
        assert!(state.courses().contains("Logística"));
        assert_eq!(state.term(), "dev java");
    }

    #[test]
    fn empty_query_string_is_default() {
        assert_eq!(FilterState::from_query_string(""), FilterState::new());
    }
}
