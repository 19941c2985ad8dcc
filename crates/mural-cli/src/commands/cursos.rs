use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `mural cursos`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Carregando cursos...");
    let courses = ctx
        .client
        .list_courses()
        .await
        .context("failed to load course catalog")?;
    spinner.finish_clear();
    output(&courses, flags.format)
}
