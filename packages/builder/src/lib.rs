//! # Pagewright Builder
//!
//! Core state engine for the Pagewright page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: section templates + default props  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: BuilderState lifecycle + mutations   │
//! │  - Add/update/delete/reorder sections       │
//! │  - Selection and preview mode               │
//! │  - Subscribers notified after each change   │
//! └─────────────────────────────────────────────┘
//!          ↓                         ↓
//! ┌──────────────────────┐  ┌──────────────────────┐
//! │ transfer: JSON       │  │ storage: persisted   │
//! │ export / import      │  │ { sections, theme }  │
//! └──────────────────────┘  └──────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Store is the only writer**: hosts read snapshots and issue mutations
//! 2. **Type fixes shape**: a section's props variant is its type
//! 3. **Orders are positions**: add, delete and reorder leave `0..N-1`
//! 4. **Explicit persistence**: the host decides when to save
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagewright_builder::{catalog, BuilderStore, FileStorage, SectionType};
//!
//! let storage = FileStorage::new(".pagewright");
//! let mut store = BuilderStore::restore(&storage);
//!
//! let hero = store.add_section(catalog::default_section(SectionType::Hero));
//! store.reorder_sections(0, store.sections().len() - 1)?;
//! store.persist(&storage);
//!
//! let document = store.export_website("My Site", "Landing page");
//! ```

pub mod catalog;
mod errors;
mod mutations;
mod reorder;
mod section;
mod storage;
mod store;
pub mod transfer;

pub use catalog::{Category, SectionLibraryItem, SECTION_LIBRARY};
pub use errors::BuilderError;
pub use mutations::{Mutation, MutationError, MutationOutcome, MutationResult};
pub use reorder::{ReorderCoordinator, ReorderRequest};
pub use section::{
    AboutProps, Alignment, FeatureItem, FeaturesProps, FooterProps, HeaderProps, HeroProps,
    NavigationLink, NewSection, Section, SectionId, SectionProps, SectionType, SectionUpdate,
    SocialLink,
};
pub use storage::{
    FileStorage, MemoryStorage, PersistedState, StateStorage, StorageError, STORAGE_KEY,
};
pub use store::{BuilderState, BuilderStore, SubscriptionId, Theme};
pub use transfer::{ExportError, ImportError, WebsiteExport, EXPORT_VERSION};
