pub mod catalog;
pub mod init;
pub mod sections;
pub mod transfer;
pub mod view;

pub use catalog::{catalog, CatalogArgs};
pub use init::{init, InitArgs};
pub use sections::{
    add, delete, drag, list, move_section, select, show, toggle, update, AddArgs, DragArgs,
    IdArgs, ListArgs, MoveArgs, UpdateArgs,
};
pub use transfer::{clear, export, import, ClearArgs, ExportArgs, ImportArgs};
pub use view::{preview, theme, ThemeArgs};

use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use pagewright_builder::{BuilderStore, FileStorage, Section, SectionProps};

/// One CLI invocation's view of the persisted builder
pub struct Session {
    pub store: BuilderStore,
    pub config: Config,
    pub cwd: String,
    storage: FileStorage,
}

impl Session {
    pub fn open(cwd: &str) -> Result<Self> {
        let config = Config::load(cwd)?;
        let storage = FileStorage::new(config.get_storage_dir(cwd));
        let fresh = !storage.path().exists();

        let mut store = BuilderStore::restore(&storage);
        if fresh {
            if let Some(theme) = config.theme {
                store.set_theme(theme);
            }
        }

        Ok(Self {
            store,
            config,
            cwd: cwd.to_string(),
            storage,
        })
    }

    /// Save step, run after the command's mutations
    pub fn finish(mut self) {
        if self.store.is_dirty() {
            self.store.persist(&self.storage);
        }
    }
}

/// Short human label for a section
pub fn section_title(section: &Section) -> &str {
    match &section.props {
        SectionProps::Header(header) => &header.logo_text,
        SectionProps::Hero(hero) => &hero.title,
        SectionProps::Features(features) => &features.title,
        SectionProps::About(about) => &about.title,
        SectionProps::Footer(footer) => &footer.company_name,
    }
}

pub fn print_section_row(section: &Section, selected: bool) {
    let marker = if selected { "▶".cyan() } else { " ".normal() };
    let visibility = if section.is_visible {
        "visible".green()
    } else {
        "hidden".dimmed()
    };

    println!(
        "{} {:>3}  {:<9} {:<8} {}  {}",
        marker,
        section.order,
        section.section_type().to_string().bright_white(),
        visibility,
        section_title(section),
        section.id.dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_builder::{catalog::default_section, SectionType, Theme};

    #[test]
    fn test_section_title_per_type() {
        let mut store = BuilderStore::new();
        let id = store.add_section(default_section(SectionType::Footer));
        let section = store.get_section_by_id(&id).unwrap();
        assert_eq!(section_title(section), "Your Company");
    }

    #[test]
    fn test_session_persists_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let mut session = Session::open(&cwd).unwrap();
        session.store.add_section(default_section(SectionType::Hero));
        session.finish();

        let session = Session::open(&cwd).unwrap();
        assert_eq!(session.store.sections().len(), 1);
        assert_eq!(session.store.theme(), Theme::Light);
    }

    #[test]
    fn test_config_theme_seeds_fresh_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        std::fs::write(
            dir.path().join(crate::config::DEFAULT_CONFIG_NAME),
            r#"{ "theme": "dark" }"#,
        )
        .unwrap();

        let session = Session::open(&cwd).unwrap();
        assert_eq!(session.store.theme(), Theme::Dark);
    }
}
