use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mural` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mural",
    version,
    about = "Mural de Estágios - browse internship postings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides MURAL_API__BASE_URL and config files)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use mural_core::{Shift, WorkModel};
    use pretty_assertions::assert_eq;

    use super::subcommands::AuthCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "mural",
            "--format",
            "json",
            "--verbose",
            "--base-url",
            "http://api.local:9000",
            "cursos",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.local:9000"));
        assert!(matches!(cli.command, Commands::Cursos));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mural", "cursos", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["mural", "--format", "xml", "cursos"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn vagas_collects_repeated_facets() {
        let cli = Cli::try_parse_from([
            "mural",
            "vagas",
            "--termo",
            "dev",
            "--turno",
            "manha",
            "--turno",
            "noite",
            "--modelo",
            "home-office",
            "--curso",
            "Logística",
            "--habilidade",
            "SQL",
            "--pagina",
            "2",
        ])
        .expect("cli should parse");

        let Commands::Vagas(args) = cli.command else {
            panic!("expected vagas");
        };
        assert_eq!(args.termo.as_deref(), Some("dev"));
        assert_eq!(args.turno, vec![Shift::Morning, Shift::Night]);
        assert_eq!(args.modelo, vec![WorkModel::Remote]);
        assert_eq!(args.curso, vec!["Logística"]);
        assert_eq!(args.habilidade, vec!["SQL"]);
        assert_eq!(args.pagina, Some(2));
    }

    #[test]
    fn vagas_rejects_unknown_work_model() {
        assert!(Cli::try_parse_from(["mural", "vagas", "--modelo", "lua"]).is_err());
    }

    #[test]
    fn pagina_is_one_based() {
        assert!(Cli::try_parse_from(["mural", "vagas", "--pagina", "0"]).is_err());
    }

    #[test]
    fn vaga_requires_id() {
        assert!(Cli::try_parse_from(["mural", "vaga"]).is_err());
        let cli = Cli::try_parse_from(["mural", "vaga", "17"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Vaga(ref args) if args.id == "17"));
    }

    #[test]
    fn auth_set_token_takes_positional_token() {
        let cli = Cli::try_parse_from(["mural", "auth", "set-token", "abc"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::SetToken(ref args)
            } if args.token == "abc"
        ));
    }

    #[test]
    fn termo_help_names_the_backend_parameter() {
        let command = Cli::command();
        let vagas = command
            .find_subcommand("vagas")
            .expect("vagas subcommand");
        let termo = vagas
            .get_arguments()
            .find(|arg| arg.get_id() == "termo")
            .expect("termo flag");
        let help = termo.get_help().expect("termo help").to_string();
        assert!(help.contains("termo"));
        assert!(!help.contains("description"));
    }
}
