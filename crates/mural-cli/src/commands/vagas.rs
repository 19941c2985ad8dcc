use mural_board::listing::LOADING_MESSAGE;
use mural_board::{Catalog, FetchPhase, FilterState, ListingController, ListingView};

use crate::cli::root_commands::VagasArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table, table_options};
use crate::progress::Progress;

/// Handle `mural vagas`: one pass of the listing pipeline.
pub async fn handle(args: &VagasArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner(LOADING_MESSAGE);
    let catalog = Catalog::load(&ctx.client).await;
    let filters = build_filters(args);

    let mut controller = ListingController::new();
    controller.refresh(&ctx.client, &filters, &catalog).await;

    let view = controller.view(&ctx.config.board.site_origin);
    if let FetchPhase::Failed(message) = &view.phase {
        spinner.finish_err(message);
        anyhow::bail!("{message}");
    }
    spinner.finish_clear();

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_listing(&view));
            Ok(())
        }
        format => output(&view, format),
    }
}

/// Apply the arguments in the order the page does: seed from the query
/// string, then facets, then the page (facet changes reset it to 0).
fn build_filters(args: &VagasArgs) -> FilterState {
    let mut filters = args
        .from_query
        .as_deref()
        .map_or_else(FilterState::new, FilterState::from_query_string);

    if let Some(termo) = &args.termo {
        filters.set_text_term(termo.as_str());
    }
    for shift in &args.turno {
        filters.toggle_shift(*shift, true);
    }
    for model in &args.modelo {
        filters.toggle_model(*model, true);
    }
    for course in &args.curso {
        filters.toggle_course(course, true);
    }
    for skill in &args.habilidade {
        filters.toggle_skill(skill, true);
    }
    if let Some(pagina) = args.pagina {
        filters.set_page(pagina.saturating_sub(1));
    }
    filters
}

fn render_listing(view: &ListingView) -> String {
    let mut sections = Vec::new();

    if !view.cards.is_empty() {
        let rows = view
            .cards
            .iter()
            .map(|card| {
                vec![
                    card.id.clone(),
                    card.title.clone(),
                    card.company.clone(),
                    card.compensation.clone(),
                    card.published_on.clone().unwrap_or_else(|| "-".into()),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(table::render_entity_table(
            &["id", "vaga", "empresa", "remuneração", "publicada"],
            &rows,
            table_options(),
        ));
    }

    if let Some(message) = &view.message {
        sections.push(message.clone());
    }

    if view.hidden_by_skill_filter > 0 {
        sections.push(format!(
            "{} vaga(s) desta página ocultada(s) pelo filtro de habilidades.",
            view.hidden_by_skill_filter
        ));
    }

    if let Some(pagination) = &view.pagination {
        sections.push(format!(
            "Página {} de {}    {}",
            view.page + 1,
            view.total_pages,
            pagination.render_line()
        ));
    }

    sections.join("\n\n")
}
