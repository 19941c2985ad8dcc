use anyhow::Context;
use mural_board::Catalog;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HabilidadesArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SkillRow<'a> {
    nome: &'a str,
}

/// Handle `mural habilidades`: the skill checklist, alphabetical, narrowed
/// by `--filtro` the way the page's search box narrows it.
pub async fn handle(
    args: &HabilidadesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Carregando habilidades...");
    let skills = ctx
        .client
        .list_skills()
        .await
        .context("failed to load skill catalog")?;
    spinner.finish_clear();

    let catalog = Catalog::new(Vec::new(), skills);
    let rows = catalog
        .skills_matching(args.filtro.as_deref().unwrap_or_default())
        .into_iter()
        .map(|nome| SkillRow { nome })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
