//! View models for the results grid and the posting detail page.

use mural_core::JobPosting;
use serde::Serialize;

use crate::catalog::Catalog;

const NEGOTIABLE: &str = "A combinar";

/// One card in the results grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub compensation: String,
    pub responsibilities: String,
    pub published_on: Option<String>,
    /// In-app route of the detail page.
    pub route: String,
    /// Absolute link copied by the card's share button.
    pub share_link: String,
}

impl PostingCard {
    #[must_use]
    pub fn new(posting: &JobPosting, site_origin: &str) -> Self {
        let route = detail_route(&posting.id);
        Self {
            id: posting.id.clone(),
            title: posting.title.clone(),
            company: posting.company.clone(),
            compensation: compensation_label(posting.compensation.as_deref()),
            responsibilities: posting.responsibilities.join(", "),
            published_on: posting.published_on.map(|d| d.format("%d/%m/%Y").to_string()),
            share_link: format!("{}{route}", site_origin.trim_end_matches('/')),
            route,
        }
    }
}

/// Everything the detail page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingDetail {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: Option<String>,
    pub work_model: Option<String>,
    pub status: Option<String>,
    pub published_on: Option<String>,
    pub compensation: String,
    pub benefits: Vec<String>,
    pub requirements: Vec<String>,
    pub differentials: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Target courses by full name; codes missing from the catalog are shown as-is.
    pub courses: Vec<String>,
    pub apply_link: Option<String>,
    pub channel: Option<String>,
    pub attachment_url: Option<String>,
    pub share_link: String,
}

impl PostingDetail {
    #[must_use]
    pub fn new(posting: &JobPosting, catalog: &Catalog, site_origin: &str) -> Self {
        Self {
            id: posting.id.clone(),
            title: posting.title.clone(),
            company: posting.company.clone(),
            period: posting.period.clone(),
            work_model: posting.work_model.map(|m| m.label().to_string()),
            status: posting.status.map(|s| s.label().to_string()),
            published_on: posting.published_on.map(|d| d.format("%d/%m/%Y").to_string()),
            compensation: compensation_label(posting.compensation.as_deref()),
            benefits: posting.benefits.clone(),
            requirements: posting.requirements.clone(),
            differentials: posting.differentials.clone(),
            responsibilities: posting.responsibilities.clone(),
            courses: posting
                .target_courses
                .iter()
                .map(|code| catalog.course_name_for(code).unwrap_or(code).to_string())
                .collect(),
            apply_link: posting.link.clone().filter(|l| !l.trim().is_empty()),
            channel: posting.channel.clone().filter(|c| !c.trim().is_empty()),
            attachment_url: posting.attachment_url.clone().filter(|u| !u.trim().is_empty()),
            share_link: format!(
                "{}{}",
                site_origin.trim_end_matches('/'),
                detail_route(&posting.id)
            ),
        }
    }
}

#[must_use]
pub fn detail_route(id: &str) -> String {
    format!("/vagas/{}", urlencoding::encode(id))
}

fn compensation_label(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(NEGOTIABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mural_core::{Course, PostingStatus, WorkModel};
    use pretty_assertions::assert_eq;

    fn posting() -> JobPosting {
        JobPosting {
            id: "42".into(),
            title: "Estágio em Desenvolvimento".into(),
            company: "TechSolutions".into(),
            compensation: None,
            period: Some("Tarde".into()),
            work_model: Some(WorkModel::Hybrid),
            status: Some(PostingStatus::Open),
            published_on: NaiveDate::from_ymd_opt(2025, 9, 5),
            target_courses: vec!["ADS".into(), "XYZ".into()],
            requirements: vec!["React".into()],
            differentials: Vec::new(),
            benefits: vec!["Vale Transporte".into()],
            responsibilities: vec!["Codar".into(), "Testar".into()],
            link: Some("https://jobs.example/42".into()),
            channel: Some(String::new()),
            attachment_url: None,
        }
    }

    #[test]
    fn card_defaults_compensation_and_formats_date() {
        let card = PostingCard::new(&posting(), "https://mural.example/");
        assert_eq!(card.compensation, "A combinar");
        assert_eq!(card.published_on.as_deref(), Some("05/09/2025"));
        assert_eq!(card.responsibilities, "Codar, Testar");
        assert_eq!(card.route, "/vagas/42");
        assert_eq!(card.share_link, "https://mural.example/vagas/42");
    }

    #[test]
    fn blank_compensation_is_negotiable() {
        let mut posting = posting();
        posting.compensation = Some("   ".into());
        assert_eq!(PostingCard::new(&posting, "").compensation, "A combinar");
        posting.compensation = Some("R$ 1.500,00".into());
        assert_eq!(PostingCard::new(&posting, "").compensation, "R$ 1.500,00");
    }

    #[test]
    fn detail_resolves_course_names_and_labels() {
        let catalog = Catalog::new(
            vec![Course {
                id: "1".into(),
                full_name: "Análise e Desenvolvimento de Sistemas".into(),
                code: "ADS".into(),
            }],
            Vec::new(),
        );
        let detail = PostingDetail::new(&posting(), &catalog, "http://localhost:5173");
        assert_eq!(
            detail.courses,
            vec!["Análise e Desenvolvimento de Sistemas", "XYZ"]
        );
        assert_eq!(detail.work_model.as_deref(), Some("Híbrido"));
        assert_eq!(detail.status.as_deref(), Some("Aberta"));
        assert!(detail.channel.is_none());
        assert_eq!(detail.share_link, "http://localhost:5173/vagas/42");
    }

    #[test]
    fn route_encodes_opaque_ids() {
        assert_eq!(detail_route("a b/c"), "/vagas/a%20b%2Fc");
    }
}
