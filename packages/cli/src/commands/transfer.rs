use super::Session;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagewright_builder::transfer::{export_website, to_json_pretty, write_export};
use pagewright_builder::BuilderError;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Website name
    pub name: String,

    /// Short description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Exported website JSON file
    #[arg(conflicts_with = "data")]
    pub file: Option<PathBuf>,

    /// Pasted website JSON data
    #[arg(long)]
    pub data: Option<String>,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Confirm removing every section
    #[arg(short, long)]
    pub yes: bool,
}

pub fn export(args: ExportArgs, session: &Session) -> Result<()> {
    if session.store.sections().is_empty() {
        return Err(anyhow!("No sections to export"));
    }

    let document =
        export_website(&session.store, &args.name, &args.description).map_err(BuilderError::from)?;

    if args.stdout {
        println!("{}", to_json_pretty(&document).map_err(BuilderError::from)?);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(&session.cwd).join(dir),
        None => session.config.get_export_dir(&session.cwd),
    };
    let path = write_export(&document, &out_dir).map_err(BuilderError::from)?;

    println!(
        "{} Website exported successfully! {}",
        "✅".green(),
        path.display().to_string().bright_white()
    );
    Ok(())
}

pub async fn import(args: ImportArgs, session: &mut Session) -> Result<()> {
    match (&args.file, &args.data) {
        (Some(path), _) => {
            session.store.import_file(path).await.map_err(BuilderError::from)?;
        }
        (None, Some(data)) => {
            session.store.import_json(data).map_err(BuilderError::from)?;
        }
        (None, None) => {
            return Err(anyhow!("Please select a JSON file or paste the website data"));
        }
    }

    println!(
        "{} Website imported successfully! ({} sections)",
        "✅".green(),
        session.store.sections().len()
    );
    Ok(())
}

pub fn clear(args: ClearArgs, session: &mut Session) -> Result<()> {
    if session.store.sections().is_empty() {
        println!("{}", "No sections to clear".yellow());
        return Ok(());
    }

    if !args.yes {
        println!(
            "{} This removes all {} sections and cannot be undone.",
            "⚠️".yellow(),
            session.store.sections().len()
        );
        println!("Use --yes to confirm");
        return Ok(());
    }

    session.store.clear_website();
    println!("  {} All sections cleared", "✓".green());
    Ok(())
}
