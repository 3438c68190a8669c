use super::{section_title, Session};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagewright_builder::Theme;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// New theme (light, dark); prints the current theme when omitted
    pub theme: Option<Theme>,
}

/// Enter preview mode and list what a preview would draw
pub fn preview(session: &mut Session) -> Result<()> {
    if !session.store.is_preview_mode() {
        session.store.toggle_preview_mode();
    }

    let state = session.store.state();
    let visible: Vec<_> = state.visible_sections().collect();

    println!("{}", "👁  Preview".bright_blue().bold());
    if visible.is_empty() {
        println!("{}", "Nothing to preview".yellow());
        return Ok(());
    }

    for section in visible {
        println!(
            "  {:<9} {}",
            section.section_type().to_string().bright_white(),
            section_title(section)
        );
    }

    let hidden = state.sections().len() - state.visible_sections().count();
    if hidden > 0 {
        println!("  {}", format!("({} hidden)", hidden).dimmed());
    }
    Ok(())
}

pub fn theme(args: ThemeArgs, session: &mut Session) -> Result<()> {
    match args.theme {
        Some(theme) => {
            session.store.set_theme(theme);
            println!("  {} Theme set to {}", "✓".green(), theme.to_string().bright_white());
        }
        None => println!("{}", session.store.theme()),
    }
    Ok(())
}
