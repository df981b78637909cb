use clap::Parser;
use miette::Result;
use shapeview::cli::{Cli, Commands};
use shapeview::output::Printer;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => shapeview::cli::render::run(args, &printer)?,
        Commands::Watch(args) => shapeview::cli::watch::run(args, &printer)?,
        Commands::Layout(args) => shapeview::cli::layout::run(args)?,
        Commands::Init(args) => shapeview::cli::init::run(args, &printer)?,
        Commands::Completions(args) => shapeview::cli::completions::run(args)?,
    }

    Ok(())
}
