//! Numbered pagination controls.
//!
//! Pages are 0-indexed internally and labelled from 1. With zero pages
//! (empty result or failed fetch) the controls are hidden.

use serde::Serialize;

use crate::filter::FilterState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub index: u32,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
    pub buttons: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    #[must_use]
    pub fn new(current: u32, total_pages: u32) -> Self {
        let buttons = (0..total_pages)
            .map(|index| PageButton {
                index,
                label: (index + 1).to_string(),
                active: index == current,
            })
            .collect();
        Self {
            current,
            total_pages,
            buttons,
            previous_enabled: total_pages > 0 && current > 0,
            next_enabled: current.saturating_add(1) < total_pages,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages > 0
    }

    /// Clamp `n` into `[0, total_pages - 1]` (0 when there are no pages).
    #[must_use]
    pub fn clamp(&self, n: u32) -> u32 {
        n.min(self.total_pages.saturating_sub(1))
    }

    /// Click on page button `index`. Only the page index changes.
    pub fn select(&self, filters: &mut FilterState, index: u32) {
        filters.set_page(self.clamp(index));
    }

    /// Click on "Anterior". No-op when disabled.
    pub fn previous(&self, filters: &mut FilterState) {
        if self.previous_enabled {
            filters.set_page(self.clamp(self.current - 1));
        }
    }

    /// Click on "Próxima". No-op when disabled.
    pub fn next(&self, filters: &mut FilterState) {
        if self.next_enabled {
            filters.set_page(self.clamp(self.current + 1));
        }
    }

    /// One-line rendering: `< Anterior  [1]  2  3  Próxima >`, with disabled
    /// arrows shown in parentheses.
    #[must_use]
    pub fn render_line(&self) -> String {
        if !self.is_visible() {
            return String::new();
        }
        let arrow = |label: &str, enabled: bool| {
            if enabled {
                label.to_string()
            } else {
                format!("({label})")
            }
        };
        let mut parts = vec![arrow("< Anterior", self.previous_enabled)];
        parts.extend(self.buttons.iter().map(|button| {
            if button.active {
                format!("[{}]", button.label)
            } else {
                button.label.clone()
            }
        }));
        parts.push(arrow("Próxima >", self.next_enabled));
        parts.join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mural_core::WorkModel;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn five_pages_on_first_page() {
        let pagination = Pagination::new(0, 5);
        assert!(!pagination.previous_enabled);
        assert!(pagination.next_enabled);
        let labels: Vec<&str> = pagination.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
        assert!(pagination.buttons[0].active);
    }

    #[test]
    fn clicking_three_selects_index_two_and_keeps_filters() {
        let mut filters = FilterState::new();
        filters.set_text_term("dev");
        filters.toggle_model(WorkModel::Remote, true);
        let pagination = Pagination::new(filters.page(), 5);

        let button = pagination
            .buttons
            .iter()
            .find(|b| b.label == "3")
            .unwrap();
        pagination.select(&mut filters, button.index);

        assert_eq!(filters.page(), 2);
        assert_eq!(filters.term(), "dev");
        assert!(filters.models().contains(&WorkModel::Remote));
    }

    #[test]
    fn last_page_disables_next() {
        let pagination = Pagination::new(4, 5);
        assert!(pagination.previous_enabled);
        assert!(!pagination.next_enabled);
    }

    #[rstest]
    #[case(0, 0, false)]
    #[case(0, 1, true)]
    #[case(0, 2, true)]
    fn visibility_follows_page_count(
        #[case] current: u32,
        #[case] total: u32,
        #[case] visible: bool,
    ) {
        assert_eq!(Pagination::new(current, total).is_visible(), visible);
    }

    #[test]
    fn zero_pages_disable_everything() {
        let pagination = Pagination::new(0, 0);
        assert!(!pagination.previous_enabled);
        assert!(!pagination.next_enabled);
        assert!(pagination.buttons.is_empty());
        assert_eq!(pagination.render_line(), "");
    }

    #[test]
    fn select_clamps_past_the_end() {
        let mut filters = FilterState::new();
        Pagination::new(0, 3).select(&mut filters, 10);
        assert_eq!(filters.page(), 2);
    }

    #[test]
    fn previous_and_next_move_one_page() {
        let mut filters = FilterState::new();
        filters.set_page(1);
        Pagination::new(1, 3).next(&mut filters);
        assert_eq!(filters.page(), 2);
        Pagination::new(2, 3).next(&mut filters);
        assert_eq!(filters.page(), 2);
        Pagination::new(2, 3).previous(&mut filters);
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn render_line_marks_active_and_disabled() {
        assert_eq!(
            Pagination::new(0, 3).render_line(),
            "(< Anterior)  [1]  2  3  Próxima >"
        );
    }
}
