//! Reference-data endpoints: courses and skills.

use mural_core::{Course, Skill};

use crate::{BoardClient, error::ClientError};

impl BoardClient {
    /// Fetch every course (`GET /cursos`), in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a course array.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        let url = self.ctx.url("/cursos")?;
        let courses: Vec<Course> = self.send(url).await?.json().await?;
        tracing::debug!(count = courses.len(), "loaded course catalog");
        Ok(courses)
    }

    /// Fetch every skill (`GET /habilidades`), unsorted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a skill array.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let url = self.ctx.url("/habilidades")?;
        let skills: Vec<Skill> = self.send(url).await?.json().await?;
        tracing::debug!(count = skills.len(), "loaded skill catalog");
        Ok(skills)
    }
}
