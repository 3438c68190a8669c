//! # Builder Mutations
//!
//! Every change to the builder state is one of these operations.
//!
//! ## Mutation Semantics
//!
//! ### AddSection
//! - Fresh id, `order = max + 1` (0 when empty)
//! - A list already holding `u32::MAX` is renumbered `0..N-1` first
//! - New section becomes the selection
//!
//! ### UpdateSection / ToggleVisibility
//! - Unknown id is a no-op, not an error
//! - Props replacement must keep the section's type
//!
//! ### DeleteSection
//! - Remaining sections are renumbered `0..N-1`
//! - Clears the selection if it pointed at the deleted section
//!
//! ### ReorderSections
//! - Splice-move on the order-sorted list, then renumber `0..N-1`
//! - Out-of-range indices are rejected, state untouched
//!
//! ### ImportWebsite / ClearWebsite
//! - Wholesale replacement of the section list, selection cleared

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::section::{NewSection, Section, SectionId, SectionType, SectionUpdate};
use crate::store::{BuilderState, Theme};
use crate::transfer::WebsiteExport;

/// State-changing operations on the builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mutation {
    AddSection {
        section: NewSection,
    },

    UpdateSection {
        id: SectionId,
        update: SectionUpdate,
    },

    DeleteSection {
        id: SectionId,
    },

    /// Move the section at `from` to `to` in the order-sorted list
    ReorderSections {
        from: usize,
        to: usize,
    },

    ToggleSectionVisibility {
        id: SectionId,
    },

    SelectSection {
        id: Option<SectionId>,
    },

    TogglePreviewMode,

    SetTheme {
        theme: Theme,
    },

    ImportWebsite {
        document: WebsiteExport,
    },

    ClearWebsite,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Reorder index out of range: {from} -> {to} with {len} sections")]
    IndexOutOfRange { from: usize, to: usize, len: usize },

    #[error("Props of type {found} cannot be applied to a {expected} section")]
    TypeMismatch {
        expected: SectionType,
        found: SectionType,
    },

    #[error("Invalid props: {0}")]
    InvalidProps(String),
}

/// What a mutation did to the state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    /// False for no-ops such as updates of unknown ids
    pub changed: bool,

    /// Id assigned by AddSection
    pub section_id: Option<SectionId>,
}

impl MutationOutcome {
    fn changed() -> Self {
        Self {
            changed: true,
            section_id: None,
        }
    }

    fn unchanged() -> Self {
        Self::default()
    }
}

/// Result of applying a mutation through the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Store version after the mutation
    pub version: u64,

    pub changed: bool,

    pub section_id: Option<SectionId>,
}

impl Mutation {
    /// Apply mutation to the state. On error the state is unchanged.
    pub fn apply(&self, state: &mut BuilderState) -> Result<MutationOutcome, MutationError> {
        match self {
            Mutation::AddSection { section } => Ok(Self::apply_add(state, section)),

            Mutation::UpdateSection { id, update } => Self::apply_update(state, id, update),

            Mutation::DeleteSection { id } => Ok(Self::apply_delete(state, id)),

            Mutation::ReorderSections { from, to } => Self::apply_reorder(state, *from, *to),

            Mutation::ToggleSectionVisibility { id } => {
                Ok(Self::apply_toggle_visibility(state, id))
            }

            Mutation::SelectSection { id } => {
                state.selected_section_id = id.clone();
                Ok(MutationOutcome::changed())
            }

            Mutation::TogglePreviewMode => {
                state.is_preview_mode = !state.is_preview_mode;
                state.selected_section_id = None;
                Ok(MutationOutcome::changed())
            }

            Mutation::SetTheme { theme } => {
                state.theme = *theme;
                Ok(MutationOutcome::changed())
            }

            Mutation::ImportWebsite { document } => {
                state.sections = document.sections.clone();
                sort_by_order(&mut state.sections);
                state.selected_section_id = None;
                Ok(MutationOutcome::changed())
            }

            Mutation::ClearWebsite => {
                state.sections.clear();
                state.selected_section_id = None;
                Ok(MutationOutcome::changed())
            }
        }
    }

    /// Whether this mutation touches the persisted part of the state
    pub fn affects_persisted(&self) -> bool {
        !matches!(
            self,
            Mutation::SelectSection { .. } | Mutation::TogglePreviewMode
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddSection { .. } => "add_section",
            Mutation::UpdateSection { .. } => "update_section",
            Mutation::DeleteSection { .. } => "delete_section",
            Mutation::ReorderSections { .. } => "reorder_sections",
            Mutation::ToggleSectionVisibility { .. } => "toggle_section_visibility",
            Mutation::SelectSection { .. } => "select_section",
            Mutation::TogglePreviewMode => "toggle_preview_mode",
            Mutation::SetTheme { .. } => "set_theme",
            Mutation::ImportWebsite { .. } => "import_website",
            Mutation::ClearWebsite => "clear_website",
        }
    }

    fn apply_add(state: &mut BuilderState, new_section: &NewSection) -> MutationOutcome {
        // No order is left above the maximum, so compact first
        if state.sections.iter().any(|s| s.order == u32::MAX) {
            renumber(&mut state.sections);
        }

        let id = Uuid::new_v4().to_string();
        let section = Section {
            id: id.clone(),
            order: state.next_order(),
            is_visible: new_section.is_visible,
            props: new_section.props.clone(),
        };

        state.sections.push(section);
        sort_by_order(&mut state.sections);
        state.selected_section_id = Some(id.clone());

        MutationOutcome {
            changed: true,
            section_id: Some(id),
        }
    }

    fn apply_update(
        state: &mut BuilderState,
        id: &str,
        update: &SectionUpdate,
    ) -> Result<MutationOutcome, MutationError> {
        match state.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.apply_update(update)?;
                Ok(MutationOutcome::changed())
            }
            None => Ok(MutationOutcome::unchanged()),
        }
    }

    fn apply_delete(state: &mut BuilderState, id: &str) -> MutationOutcome {
        let Some(pos) = state.sections.iter().position(|s| s.id == id) else {
            return MutationOutcome::unchanged();
        };

        state.sections.remove(pos);
        renumber(&mut state.sections);

        if state.selected_section_id.as_deref() == Some(id) {
            state.selected_section_id = None;
        }

        MutationOutcome::changed()
    }

    fn apply_reorder(
        state: &mut BuilderState,
        from: usize,
        to: usize,
    ) -> Result<MutationOutcome, MutationError> {
        let len = state.sections.len();
        if from >= len || to >= len {
            return Err(MutationError::IndexOutOfRange { from, to, len });
        }

        let moved = state.sections.remove(from);
        state.sections.insert(to, moved);
        renumber(&mut state.sections);

        Ok(MutationOutcome::changed())
    }

    fn apply_toggle_visibility(state: &mut BuilderState, id: &str) -> MutationOutcome {
        match state.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.is_visible = !section.is_visible;
                MutationOutcome::changed()
            }
            None => MutationOutcome::unchanged(),
        }
    }
}

fn sort_by_order(sections: &mut [Section]) {
    sections.sort_by_key(|s| s.order);
}

/// Assign every section its positional index as order
fn renumber(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index as u32;
    }
}
