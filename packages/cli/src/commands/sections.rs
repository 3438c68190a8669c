use super::{print_section_row, section_title, Session};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagewright_builder::catalog::default_section;
use pagewright_builder::{BuilderError, ReorderCoordinator, SectionType, SectionUpdate};
use serde_json::{Map, Value};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Section type (header, hero, features, about, footer)
    pub section_type: SectionType,

    /// Add the section hidden
    #[arg(long)]
    pub hidden: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list visible sections
    #[arg(long)]
    pub visible: bool,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Section id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Section id
    pub id: String,

    /// Prop assignment, e.g. --set title="Hello" (JSON values allowed)
    #[arg(long = "set", value_parser = parse_assignment)]
    pub assignments: Vec<(String, Value)>,

    /// Show or hide the section
    #[arg(long)]
    pub visible: Option<bool>,

    /// Full props object for the section's type
    #[arg(long)]
    pub props_json: Option<String>,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Current position
    pub from: usize,

    /// New position
    pub to: usize,
}

#[derive(Debug, Args)]
pub struct DragArgs {
    /// Id of the dragged section
    pub active: String,

    /// Id of the section it was dropped on
    pub over: Option<String>,
}

/// `key=value`, value parsed as JSON when it is JSON, otherwise a string
fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected key=value, got: {}", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing prop name in: {}", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn add(args: AddArgs, session: &mut Session) -> Result<()> {
    let mut section = default_section(args.section_type);
    if args.hidden {
        section = section.hidden();
    }

    let id = session.store.add_section(section);
    println!(
        "  {} Added {} section {}",
        "✓".green(),
        args.section_type.to_string().bright_white(),
        id.dimmed()
    );
    Ok(())
}

pub fn list(args: ListArgs, session: &Session) -> Result<()> {
    let state = session.store.state();

    if state.sections().is_empty() {
        println!("{}", "No sections added yet".yellow());
        println!("Add sections from the library: pagewright add <type>");
        return Ok(());
    }

    println!(
        "{} ({} sections)",
        "📄 Sections".bright_blue().bold(),
        state.sections().len()
    );
    for section in state.sections() {
        if args.visible && !section.is_visible {
            continue;
        }
        let selected = state.selected_section().map(|s| s.id == section.id).unwrap_or(false);
        print_section_row(section, selected);
    }
    Ok(())
}

pub fn show(args: IdArgs, session: &Session) -> Result<()> {
    let section = session
        .store
        .get_section_by_id(&args.id)
        .ok_or_else(|| BuilderError::SectionNotFound(args.id.clone()))?;

    println!("{}", serde_json::to_string_pretty(section)?);
    Ok(())
}

pub fn update(args: UpdateArgs, session: &mut Session) -> Result<()> {
    let section_type = session
        .store
        .get_section_by_id(&args.id)
        .map(|s| s.section_type())
        .ok_or_else(|| BuilderError::SectionNotFound(args.id.clone()))?;

    let mut update = SectionUpdate {
        is_visible: args.visible,
        ..SectionUpdate::default()
    };

    if let Some(raw) = &args.props_json {
        // Tag with the section's own type; a foreign shape fails to parse
        let tagged = serde_json::json!({
            "type": section_type,
            "props": serde_json::from_str::<Value>(raw)?,
        });
        update.props = Some(serde_json::from_value(tagged)?);
    }

    if !args.assignments.is_empty() {
        let patch: Map<String, Value> = args.assignments.into_iter().collect();
        update.props_patch = Some(patch);
    }

    if update.is_empty() {
        return Err(anyhow!("Nothing to update. Use --set, --visible or --props-json"));
    }

    session
        .store
        .update_section(&args.id, update)
        .map_err(BuilderError::from)?;

    println!("  {} Updated {}", "✓".green(), args.id.dimmed());
    Ok(())
}

pub fn delete(args: IdArgs, session: &mut Session) -> Result<()> {
    if session.store.delete_section(&args.id) {
        println!("  {} Deleted {}", "✓".green(), args.id.dimmed());
    } else {
        println!("{} No section {}", "⚠️".yellow(), args.id);
    }
    Ok(())
}

pub fn move_section(args: MoveArgs, session: &mut Session) -> Result<()> {
    session
        .store
        .reorder_sections(args.from, args.to)
        .map_err(BuilderError::from)?;

    println!("  {} Moved {} → {}", "✓".green(), args.from, args.to);
    Ok(())
}

pub fn drag(args: DragArgs, session: &mut Session) -> Result<()> {
    let moved = ReorderCoordinator::drag_end(&mut session.store, &args.active, args.over.as_deref())
        .map_err(BuilderError::from)?;

    match moved {
        Some(request) => println!(
            "  {} Moved {} → {}",
            "✓".green(),
            request.from,
            request.to
        ),
        None => println!("{}", "Nothing to move".yellow()),
    }
    Ok(())
}

pub fn toggle(args: IdArgs, session: &mut Session) -> Result<()> {
    if !session.store.toggle_section_visibility(&args.id) {
        println!("{} No section {}", "⚠️".yellow(), args.id);
        return Ok(());
    }

    let visible = session
        .store
        .get_section_by_id(&args.id)
        .map(|s| s.is_visible)
        .unwrap_or(false);
    println!(
        "  {} {} is now {}",
        "✓".green(),
        args.id.dimmed(),
        if visible { "visible".green() } else { "hidden".dimmed() }
    );
    Ok(())
}

/// Selection is session-only, so this shows what selecting would pick up
pub fn select(args: IdArgs, session: &mut Session) -> Result<()> {
    session.store.select_section(Some(&args.id));

    match session.store.selected_section() {
        Some(section) => {
            println!(
                "{} {} {}",
                "▶".cyan(),
                section.section_type().to_string().bright_white(),
                section_title(section)
            );
            println!("{}", serde_json::to_string_pretty(&section.props)?);
        }
        None => println!("{}", "No section selected".yellow()),
    }
    Ok(())
}
