mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    AddArgs, CatalogArgs, ClearArgs, DragArgs, ExportArgs, IdArgs, ImportArgs, InitArgs, ListArgs,
    MoveArgs, Session, ThemeArgs, UpdateArgs,
};
use tracing::Level;

/// Pagewright CLI - compose a page from ready-made sections
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log builder activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagewright project
    Init(InitArgs),

    /// List the section library
    Catalog(CatalogArgs),

    /// Add a section from the library
    Add(AddArgs),

    /// List sections in order
    List(ListArgs),

    /// Print one section as JSON
    Show(IdArgs),

    /// Edit a section's props or visibility
    Update(UpdateArgs),

    /// Delete a section
    Delete(IdArgs),

    /// Move a section by position
    Move(MoveArgs),

    /// Drop one section onto another
    Drag(DragArgs),

    /// Show or hide a section
    Toggle(IdArgs),

    /// Select a section and print its props
    Select(IdArgs),

    /// List what a preview would draw
    Preview,

    /// Show or set the theme
    Theme(ThemeArgs),

    /// Export the website as JSON
    Export(ExportArgs),

    /// Import a website from JSON
    Import(ImportArgs),

    /// Remove all sections
    Clear(ClearArgs),
}

async fn run(command: Command, cwd: &str) -> anyhow::Result<()> {
    let command = match command {
        Command::Init(args) => return commands::init(args, cwd),
        Command::Catalog(args) => return commands::catalog(args),
        other => other,
    };

    let mut session = Session::open(cwd)?;

    match command {
        Command::Init(_) | Command::Catalog(_) => {}
        Command::Add(args) => commands::add(args, &mut session)?,
        Command::List(args) => commands::list(args, &session)?,
        Command::Show(args) => commands::show(args, &session)?,
        Command::Update(args) => commands::update(args, &mut session)?,
        Command::Delete(args) => commands::delete(args, &mut session)?,
        Command::Move(args) => commands::move_section(args, &mut session)?,
        Command::Drag(args) => commands::drag(args, &mut session)?,
        Command::Toggle(args) => commands::toggle(args, &mut session)?,
        Command::Select(args) => commands::select(args, &mut session)?,
        Command::Preview => commands::preview(&mut session)?,
        Command::Theme(args) => commands::theme(args, &mut session)?,
        Command::Export(args) => commands::export(args, &session)?,
        Command::Import(args) => commands::import(args, &mut session).await?,
        Command::Clear(args) => commands::clear(args, &mut session)?,
    }

    session.finish();
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    if let Err(err) = run(cli.command, &cwd).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
