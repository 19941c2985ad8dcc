use clap::{Args, Subcommand};
use mural_core::{Shift, WorkModel};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List postings matching the given filters.
    Vagas(VagasArgs),
    /// Show one posting in full.
    Vaga(VagaArgs),
    /// List the course catalog.
    Cursos,
    /// List the skill catalog.
    Habilidades(HabilidadesArgs),
    /// Admin token management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct VagasArgs {
    /// Free-text search term, sent to the backend as `termo`.
    #[arg(long)]
    pub termo: Option<String>,

    /// Shift: manha, tarde or noite. Repeatable.
    #[arg(long)]
    pub turno: Vec<Shift>,

    /// Work model: presencial, hibrido or home-office. Repeatable.
    #[arg(long)]
    pub modelo: Vec<WorkModel>,

    /// Course full name, e.g. "Logística". Repeatable.
    #[arg(long)]
    pub curso: Vec<String>,

    /// Skill that must appear in the requirements or differentials. Repeatable.
    #[arg(long)]
    pub habilidade: Vec<String>,

    /// Page number, starting at 1.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pagina: Option<u32>,

    /// Seed filters from a site query string, e.g. "curso=Logística&termo=dev".
    #[arg(long)]
    pub from_query: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct VagaArgs {
    /// Posting id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HabilidadesArgs {
    /// Only skills containing this text (case and accents ignored).
    #[arg(long)]
    pub filtro: Option<String>,
}
