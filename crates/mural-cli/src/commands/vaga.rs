use anyhow::Context;
use mural_board::{Catalog, PostingDetail};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::VagaArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `mural vaga <id>`.
pub async fn handle(args: &VagaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Carregando vaga...");
    let (catalog, posting) = tokio::join!(
        Catalog::load(&ctx.client),
        ctx.client.get_posting(&args.id)
    );
    let posting = match posting {
        Ok(posting) => posting,
        Err(error) => {
            spinner.finish_err("Erro ao carregar vaga");
            return Err(error).with_context(|| format!("failed to load posting {}", args.id));
        }
    };
    spinner.finish_clear();

    let detail = PostingDetail::new(&posting, &catalog, &ctx.config.board.site_origin);
    output(&detail, flags.format)
}
