use clap::{Parser, Subcommand};
use colored::Colorize;
use orst_algos::SortArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort values with a chosen algorithm or benchmark every sorter
    Sorts(SortArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.commands {
        Commands::Sorts(sort_args) => sort_args.run(),
    };

    if let Err(error) = result {
        eprintln!("{} {error:#}", "error:".bold().red());
        std::process::exit(1);
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_runs() {
    let cli = Cli::try_parse_from(["orst", "sorts", "run", "-a", "heap", "--", "3", "-1", "2"]);
    assert!(cli.is_ok());

    let cli = Cli::try_parse_from(["orst", "sorts", "run", "-a", "bogo", "1"]);
    assert!(cli.is_err());
}
