//! # Builder Store
//!
//! Single source of truth for the page being built.
//!
//! The store owns the [`BuilderState`] and is its only writer. Every change
//! goes through [`BuilderStore::apply`], which bumps the version, marks the
//! persisted part dirty when needed and notifies subscribers.
//!
//! Persistence is an explicit step: the host calls
//! [`BuilderStore::persist`] after mutations. The store never does I/O on
//! its own.
//!
//! ```text
//! host action → BuilderStore::apply(Mutation) → BuilderState
//!                         ↓                         ↓
//!                  subscribers(&state)       persist(&storage)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::mutations::{Mutation, MutationError, MutationResult};
use crate::section::{NewSection, Section, SectionId, SectionUpdate};
use crate::storage::{PersistedState, StateStorage};
use crate::transfer::{self, ImportError, WebsiteExport};

/// Display preference, persisted but never exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Full session state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderState {
    /// Kept sorted by `order`
    pub(crate) sections: Vec<Section>,

    pub(crate) selected_section_id: Option<SectionId>,

    /// Session only
    pub(crate) is_preview_mode: bool,

    pub(crate) theme: Theme,
}

impl BuilderState {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Raw selection, may dangle
    pub fn selected_section_id(&self) -> Option<&str> {
        self.selected_section_id.as_deref()
    }

    pub fn is_preview_mode(&self) -> bool {
        self.is_preview_mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn get_section_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Selected section, a dangling selection reads as none
    pub fn selected_section(&self) -> Option<&Section> {
        self.selected_section_id
            .as_deref()
            .and_then(|id| self.get_section_by_id(id))
    }

    /// Order the next added section receives.
    ///
    /// Saturates at `u32::MAX`; adding renumbers the list before that point.
    pub fn next_order(&self) -> u32 {
        self.sections
            .iter()
            .map(|s| s.order)
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(0)
    }

    /// Sections a preview draws, in order
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_visible)
    }

    /// Position of a section in the order-sorted list
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Handle returned by [`BuilderStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&BuilderState)>;

/// Owner of the builder state
pub struct BuilderStore {
    state: BuilderState,

    /// Increments on each successful mutation
    version: u64,

    /// Persisted fields changed since the last successful persist
    dirty: bool,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for BuilderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderStore")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for BuilderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderStore {
    /// Empty store with the default theme
    pub fn new() -> Self {
        Self::from_persisted(PersistedState::default())
    }

    pub fn from_persisted(persisted: PersistedState) -> Self {
        let mut sections = persisted.sections;
        sections.sort_by_key(|s| s.order);

        Self {
            state: BuilderState {
                sections,
                selected_section_id: None,
                is_preview_mode: false,
                theme: persisted.theme,
            },
            version: 0,
            dirty: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Seed the store from storage.
    ///
    /// A missing or unreadable entry starts an empty store.
    pub fn restore(storage: &dyn StateStorage) -> Self {
        match storage.load() {
            Ok(Some(persisted)) => {
                info!(
                    sections = persisted.sections.len(),
                    theme = %persisted.theme,
                    "Restored builder state"
                );
                Self::from_persisted(persisted)
            }
            Ok(None) => {
                debug!("No persisted builder state, starting empty");
                Self::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read persisted builder state, starting empty");
                Self::new()
            }
        }
    }

    /// Persisted subset of the state
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            sections: self.state.sections.clone(),
            theme: self.state.theme,
        }
    }

    /// Write the persisted subset to storage. Failures are logged only.
    pub fn persist(&mut self, storage: &dyn StateStorage) {
        match storage.save(&self.snapshot()) {
            Ok(()) => {
                debug!(version = self.version, "Persisted builder state");
                self.dirty = false;
            }
            Err(e) => {
                warn!(error = %e, version = self.version, "Failed to persist builder state");
            }
        }
    }

    /// Apply a mutation and notify subscribers
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        let outcome = mutation.apply(&mut self.state).map_err(|e| {
            debug!(mutation = mutation.name(), error = %e, "Mutation rejected");
            e
        })?;

        if outcome.changed {
            self.version += 1;
            if mutation.affects_persisted() {
                self.dirty = true;
            }
            debug!(mutation = mutation.name(), version = self.version, "Applied mutation");
            self.notify();
        } else {
            debug!(mutation = mutation.name(), "Mutation was a no-op");
        }

        Ok(MutationResult {
            version: self.version,
            changed: outcome.changed,
            section_id: outcome.section_id,
        })
    }

    pub fn add_section(&mut self, section: NewSection) -> SectionId {
        let result = self.apply(Mutation::AddSection { section });
        // Adding cannot fail
        result.ok().and_then(|r| r.section_id).unwrap_or_default()
    }

    /// Returns whether a section with this id existed
    pub fn update_section(
        &mut self,
        id: &str,
        update: SectionUpdate,
    ) -> Result<bool, MutationError> {
        let result = self.apply(Mutation::UpdateSection {
            id: id.to_string(),
            update,
        })?;
        Ok(result.changed)
    }

    pub fn delete_section(&mut self, id: &str) -> bool {
        self.apply_infallible(Mutation::DeleteSection { id: id.to_string() })
    }

    pub fn reorder_sections(&mut self, from: usize, to: usize) -> Result<(), MutationError> {
        self.apply(Mutation::ReorderSections { from, to })?;
        Ok(())
    }

    pub fn toggle_section_visibility(&mut self, id: &str) -> bool {
        self.apply_infallible(Mutation::ToggleSectionVisibility { id: id.to_string() })
    }

    pub fn select_section(&mut self, id: Option<&str>) {
        self.apply_infallible(Mutation::SelectSection {
            id: id.map(str::to_string),
        });
    }

    /// Returns the new preview flag
    pub fn toggle_preview_mode(&mut self) -> bool {
        self.apply_infallible(Mutation::TogglePreviewMode);
        self.state.is_preview_mode
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.apply_infallible(Mutation::SetTheme { theme });
    }

    /// Snapshot the page as an export document
    pub fn export_website(&self, name: &str, description: &str) -> WebsiteExport {
        let document = WebsiteExport::new(name, description, self.state.sections.clone());
        info!(name = %document.name, sections = document.sections.len(), "Exported website");
        document
    }

    /// Replace all sections with the document's sections
    pub fn import_website(&mut self, document: WebsiteExport) {
        let count = document.sections.len();
        self.apply_infallible(Mutation::ImportWebsite { document });
        info!(sections = count, "Imported website");
    }

    /// Parse raw JSON text and import it; state is untouched on error
    pub fn import_json(&mut self, text: &str) -> Result<(), ImportError> {
        self.import_parsed(transfer::parse_import(text))
    }

    /// Load an import file and import it; state is untouched on error
    pub async fn import_file(&mut self, path: &Path) -> Result<(), ImportError> {
        self.import_parsed(transfer::read_import_file(path).await)
    }

    fn import_parsed(
        &mut self,
        parsed: Result<WebsiteExport, ImportError>,
    ) -> Result<(), ImportError> {
        let document = parsed.map_err(|e| {
            warn!(error = %e, "Rejected website import");
            e
        })?;
        self.import_website(document);
        Ok(())
    }

    pub fn clear_website(&mut self) {
        self.apply_infallible(Mutation::ClearWebsite);
        info!("Cleared website");
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn sections(&self) -> &[Section] {
        self.state.sections()
    }

    pub fn get_section_by_id(&self, id: &str) -> Option<&Section> {
        self.state.get_section_by_id(id)
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.state.selected_section()
    }

    pub fn selected_section_id(&self) -> Option<&str> {
        self.state.selected_section_id()
    }

    pub fn is_preview_mode(&self) -> bool {
        self.state.is_preview_mode()
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn next_order(&self) -> u32 {
        self.state.next_order()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if persisted fields changed since the last persist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register a callback run after every state change
    pub fn subscribe(&mut self, listener: impl Fn(&BuilderState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// For mutations that only ever no-op on bad input
    fn apply_infallible(&mut self, mutation: Mutation) -> bool {
        self.apply(mutation).map(|r| r.changed).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_section;
    use crate::section::SectionType;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_store_starts_empty() {
        let store = BuilderStore::new();

        assert!(store.sections().is_empty());
        assert_eq!(store.selected_section_id(), None);
        assert!(!store.is_preview_mode());
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.version(), 0);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_version_increments_only_on_change() {
        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::Header));
        assert_eq!(store.version(), 1);

        assert!(!store.delete_section("missing"));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_dangling_selection_reads_as_none() {
        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::Hero));
        store.select_section(Some("not-a-section"));

        assert_eq!(store.selected_section_id(), Some("not-a-section"));
        assert!(store.selected_section().is_none());
    }

    #[test]
    fn test_selection_does_not_dirty() {
        let mut store = BuilderStore::new();
        store.select_section(Some("x"));
        store.toggle_preview_mode();
        assert!(!store.is_dirty());

        store.set_theme(Theme::Dark);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_subscribers_notified() {
        let mut store = BuilderStore::new();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let id = store.subscribe(move |state| {
            counter.set(counter.get() + 1);
            assert!(state.sections().len() <= 1);
        });

        store.add_section(default_section(SectionType::About));
        store.toggle_section_visibility("missing");
        assert_eq!(calls.get(), 1);

        assert!(store.unsubscribe(id));
        store.clear_website();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_persist_and_restore() {
        let storage = MemoryStorage::new();
        let mut store = BuilderStore::new();
        let id = store.add_section(default_section(SectionType::Footer));
        store.set_theme(Theme::Dark);
        store.toggle_preview_mode();
        store.persist(&storage);
        assert!(!store.is_dirty());

        let restored = BuilderStore::restore(&storage);
        assert_eq!(restored.sections().len(), 1);
        assert_eq!(restored.sections()[0].id, id);
        assert_eq!(restored.theme(), Theme::Dark);
        assert!(!restored.is_preview_mode());
        assert_eq!(restored.selected_section_id(), None);
    }

    #[test]
    fn test_add_after_import_with_maximal_order() {
        let mut store = BuilderStore::new();
        store
            .import_json(
                r#"{"sections":[{"id":"a","type":"about","order":4294967295,"isVisible":true,
                "props":{"title":"About","content":"c","backgroundColor":"b","textColor":"t"}}]}"#,
            )
            .unwrap();

        let id = store.add_section(default_section(SectionType::Hero));

        let orders: Vec<u32> = store.sections().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(store.sections()[1].id, id);
        assert_eq!(store.next_order(), 2);
    }

    #[tokio::test]
    async fn test_import_file_rejection_keeps_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"sections":"nope"}"#).unwrap();

        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::Header));
        let version = store.version();

        assert!(matches!(
            store.import_file(&path).await,
            Err(ImportError::SectionsNotArray)
        ));
        assert_eq!(store.sections().len(), 1);
        assert_eq!(store.version(), version);

        std::fs::write(&path, r#"{"sections":[]}"#).unwrap();
        store.import_file(&path).await.unwrap();
        assert!(store.sections().is_empty());
    }

    #[test]
    fn test_visible_sections_skip_hidden() {
        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::Header));
        store.add_section(default_section(SectionType::Hero).hidden());
        store.add_section(default_section(SectionType::Footer));

        let visible: Vec<SectionType> = store
            .state()
            .visible_sections()
            .map(|s| s.section_type())
            .collect();
        assert_eq!(visible, vec![SectionType::Header, SectionType::Footer]);
    }
}
