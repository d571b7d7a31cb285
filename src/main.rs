use clap::Parser;
use miette::Result;
use ogimg::cli::{Cli, Commands};
use ogimg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => ogimg::cli::generate::run(args, &printer)?,
        Commands::List(args) => ogimg::cli::list::run(args, &printer)?,
        Commands::Validate(args) => ogimg::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => ogimg::cli::completions::run(args)?,
    }

    Ok(())
}
