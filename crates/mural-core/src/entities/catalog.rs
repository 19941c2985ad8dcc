use serde::{Deserialize, Serialize};

use crate::wire;

/// A course offered by the college, used to target postings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    #[serde(deserialize_with = "wire::opaque_id")]
    pub id: String,
    /// e.g. "Análise e Desenvolvimento de Sistemas".
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    /// Backend course code, e.g. "ADS".
    #[serde(rename = "sigla")]
    pub code: String,
}

/// A skill name students can filter postings by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    #[serde(deserialize_with = "wire::opaque_id")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}
