//! Drag-and-drop reorder translation.
//!
//! A drag gesture reports the id of the dragged section and the id of the
//! section it was dropped on. Positions are looked up in the current
//! order-sorted list at drop time and turned into a store reorder.

use tracing::debug;

use crate::mutations::MutationError;
use crate::store::BuilderStore;

/// Index pair handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

pub struct ReorderCoordinator;

impl ReorderCoordinator {
    /// Resolve a drop into an index move, if it is one
    pub fn resolve(
        store: &BuilderStore,
        active_id: &str,
        over_id: Option<&str>,
    ) -> Option<ReorderRequest> {
        let over_id = over_id?;
        if active_id == over_id {
            return None;
        }

        let state = store.state();
        let from = state.index_of(active_id)?;
        let to = state.index_of(over_id)?;

        Some(ReorderRequest { from, to })
    }

    /// Handle the end of a drag gesture.
    ///
    /// Dropping a section on itself, outside any target, or on an id that
    /// is no longer in the list does nothing.
    pub fn drag_end(
        store: &mut BuilderStore,
        active_id: &str,
        over_id: Option<&str>,
    ) -> Result<Option<ReorderRequest>, MutationError> {
        let Some(request) = Self::resolve(store, active_id, over_id) else {
            debug!(active_id, ?over_id, "Drop did not resolve to a move");
            return Ok(None);
        };

        store.reorder_sections(request.from, request.to)?;
        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_section;
    use crate::section::SectionType;

    fn store_with_three() -> (BuilderStore, Vec<String>) {
        let mut store = BuilderStore::new();
        let ids = [SectionType::Header, SectionType::Hero, SectionType::Footer]
            .into_iter()
            .map(|t| store.add_section(default_section(t)))
            .collect();
        (store, ids)
    }

    #[test]
    fn test_drag_last_onto_first() {
        let (mut store, ids) = store_with_three();

        let request = ReorderCoordinator::drag_end(&mut store, &ids[2], Some(&ids[0])).unwrap();

        assert_eq!(request, Some(ReorderRequest { from: 2, to: 0 }));
        let order: Vec<&str> = store.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec![ids[2].as_str(), ids[0].as_str(), ids[1].as_str()]);
    }

    #[test]
    fn test_drop_on_self_or_nothing_is_ignored() {
        let (mut store, ids) = store_with_three();
        let version = store.version();

        for over_id in [Some(ids[1].as_str()), None, Some("gone")] {
            let request = ReorderCoordinator::drag_end(&mut store, &ids[1], over_id).unwrap();
            assert_eq!(request, None);
        }
        assert_eq!(store.version(), version);
    }
}
