use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{PostingStatus, WorkModel};
use crate::wire;

/// One internship job listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPosting {
    #[serde(deserialize_with = "wire::opaque_id")]
    pub id: String,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "empresa", default)]
    pub company: String,
    /// Free text such as "R$ 1.500,00 (Bolsa-auxílio)" or "A combinar".
    #[serde(rename = "remuneracao", default, deserialize_with = "wire::optional_text")]
    pub compensation: Option<String>,
    /// Free text such as "Segunda a Sexta, 10h às 16h".
    #[serde(rename = "periodo", default, deserialize_with = "wire::optional_text")]
    pub period: Option<String>,
    #[serde(rename = "modelo", default, deserialize_with = "wire::lenient_enum")]
    pub work_model: Option<WorkModel>,
    #[serde(rename = "statusVaga", default, deserialize_with = "wire::lenient_enum")]
    pub status: Option<PostingStatus>,
    #[serde(rename = "dataPublicacao", default, deserialize_with = "wire::optional_date")]
    pub published_on: Option<NaiveDate>,
    #[serde(rename = "cursosAlvo", default, deserialize_with = "wire::nullable_list")]
    pub target_courses: Vec<String>,
    #[serde(rename = "requisitos", default, deserialize_with = "wire::nullable_list")]
    pub requirements: Vec<String>,
    #[serde(rename = "diferenciais", default, deserialize_with = "wire::nullable_list")]
    pub differentials: Vec<String>,
    #[serde(rename = "beneficios", default, deserialize_with = "wire::nullable_list")]
    pub benefits: Vec<String>,
    #[serde(rename = "responsabilidades", default, deserialize_with = "wire::nullable_list")]
    pub responsibilities: Vec<String>,
    /// External application link.
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub link: Option<String>,
    /// Application channel, e.g. "E-mail" or "LinkedIn".
    #[serde(rename = "canal", default, deserialize_with = "wire::optional_text")]
    pub channel: Option<String>,
    /// Attached folder (PDF/DOCX) uploaded with the posting.
    #[serde(rename = "folderUrl", default, deserialize_with = "wire::optional_text")]
    pub attachment_url: Option<String>,
}

impl JobPosting {
    /// Whether `needle` appears, ignoring case, in any requirement or
    /// differential. An empty needle matches everything.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.requirements
            .iter()
            .chain(self.differentials.iter())
            .any(|entry| entry.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": 17,
        "titulo": "Estágio em Desenvolvimento Front-End",
        "empresa": "TechSolutions LTDA",
        "remuneracao": "R$ 1.500,00 (Bolsa-auxílio)",
        "periodo": "Segunda a Sexta, 10h às 16h",
        "modelo": "HIBRIDO",
        "statusVaga": "ABERTO",
        "dataPublicacao": "2025-09-05",
        "cursosAlvo": ["ADS", "DSM"],
        "requisitos": ["Conhecimentos em HTML, CSS e JavaScript", "Noções básicas de React"],
        "diferenciais": ["Experiência com Git/GitHub"],
        "beneficios": ["Vale Transporte"],
        "responsabilidades": ["Auxiliar no desenvolvimento de aplicações web"],
        "link": "https://www.linkedin.com/jobs/",
        "folderUrl": null
    }"#;

    #[test]
    fn parses_full_posting() {
        let posting: JobPosting = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(posting.id, "17");
        assert_eq!(posting.work_model, Some(WorkModel::Hybrid));
        assert_eq!(posting.status, Some(PostingStatus::Open));
        assert_eq!(posting.published_on, NaiveDate::from_ymd_opt(2025, 9, 5));
        assert_eq!(posting.target_courses, vec!["ADS", "DSM"]);
        assert!(posting.attachment_url.is_none());
        assert!(posting.channel.is_none());
    }

    #[test]
    fn tolerates_sparse_and_loose_fields() {
        let posting: JobPosting = serde_json::from_str(
            r#"{
                "id": "abc",
                "titulo": "Estágio",
                "empresa": "ACME",
                "remuneracao": 1800,
                "modelo": "SEMIPRESENCIAL",
                "dataPublicacao": "2025-10-01T12:30:00",
                "requisitos": null
            }"#,
        )
        .unwrap();
        assert_eq!(posting.compensation.as_deref(), Some("1800"));
        assert_eq!(posting.work_model, None);
        assert_eq!(posting.published_on, NaiveDate::from_ymd_opt(2025, 10, 1));
        assert!(posting.requirements.is_empty());
        assert!(posting.benefits.is_empty());
    }

    #[test]
    fn mentions_searches_requirements_and_differentials() {
        let posting: JobPosting = serde_json::from_str(FIXTURE).unwrap();
        assert!(posting.mentions("react"));
        assert!(posting.mentions("GIT"));
        assert!(!posting.mentions("Vale Transporte"));
        assert!(!posting.mentions("SQL"));
    }
}
