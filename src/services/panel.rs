//! Settings panel projection
//!
//! The panel is rebuilt from the store after every mutation. Its events are
//! applied back to the store here, with raw input text parsed and clamped
//! before the store ever sees it.

use crate::domain::{ClockId, ClockPatch, ClockPeriod, TimeUnit};
use crate::error::DomainError;
use crate::services::store::ClockStore;

/// One editable row of the settings list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub id: ClockId,
    /// "clock N"
    pub title: String,
    pub length: ClockPeriod,
    pub unit: TimeUnit,
    /// Bounds advertised by the period input
    pub min: u8,
    pub max: u8,
}

/// User edits coming out of the settings list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Period input committed with raw text
    PeriodEdited { id: ClockId, raw: String },
    /// Unit picker changed
    UnitChanged { id: ClockId, unit: TimeUnit },
    /// Remove button pressed
    Removed { id: ClockId },
}

/// What an applied event did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    /// Clock updated; `resorted` tells whether the order was refreshed
    Updated { id: ClockId, resorted: bool },
    /// Clock removed; its ring, label and row should go
    Removed { id: ClockId },
    /// Event referred to a clock that no longer exists
    Ignored,
}

/// Stateless view over the clock store
pub struct SettingsPanel;

impl SettingsPanel {
    /// Build one row per clock, in store order
    pub fn project(store: &ClockStore) -> Vec<PanelRow> {
        store
            .iter()
            .map(|clock| PanelRow {
                id: clock.id,
                title: clock.title(),
                length: clock.length,
                unit: clock.unit,
                min: ClockPeriod::MIN,
                max: ClockPeriod::MAX,
            })
            .collect()
    }

    /// Apply an event to the store
    ///
    /// A period edit resorts the store so the rebuilt list reflects the new
    /// order. A unit change does not resort; the order catches up on the
    /// next apply.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPeriod` if period text is not a number;
    /// the store is left untouched in that case.
    pub fn apply(store: &mut ClockStore, event: PanelEvent) -> Result<PanelOutcome, DomainError> {
        match event {
            PanelEvent::PeriodEdited { id, raw } => {
                let length = ClockPeriod::parse_clamped(&raw)?;
                if !store.update(id, ClockPatch::length(length)) {
                    return Ok(PanelOutcome::Ignored);
                }
                store.sort_by_effective_duration();
                Ok(PanelOutcome::Updated { id, resorted: true })
            }
            PanelEvent::UnitChanged { id, unit } => {
                if !store.update(id, ClockPatch::unit(unit)) {
                    return Ok(PanelOutcome::Ignored);
                }
                Ok(PanelOutcome::Updated {
                    id,
                    resorted: false,
                })
            }
            PanelEvent::Removed { id } => Ok(match store.remove(id) {
                Some(_) => PanelOutcome::Removed { id },
                None => PanelOutcome::Ignored,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ClockStore, ClockId, ClockId) {
        let mut store = ClockStore::new();
        let a = store.add(ClockPeriod::clamped(5), TimeUnit::Seconds).unwrap();
        let b = store.add(ClockPeriod::clamped(10), TimeUnit::Seconds).unwrap();
        (store, a, b)
    }

    #[test]
    fn test_projection_mirrors_store_order() {
        let (store, a, b) = setup();
        let rows = SettingsPanel::project(&store);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, a);
        assert_eq!(rows[0].title, "clock 0");
        assert_eq!((rows[1].id, rows[1].min, rows[1].max), (b, 1, 60));
    }

    #[test]
    fn test_period_edit_clamps_and_resorts() {
        let (mut store, a, b) = setup();
        let outcome = SettingsPanel::apply(
            &mut store,
            PanelEvent::PeriodEdited {
                id: a,
                raw: "600".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            outcome,
            PanelOutcome::Updated {
                id: a,
                resorted: true
            }
        );
        assert_eq!(store.get(a).unwrap().length.get(), 60);
        assert_eq!(store.ids(), vec![a, b]);

        SettingsPanel::apply(
            &mut store,
            PanelEvent::PeriodEdited {
                id: a,
                raw: "1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(store.ids(), vec![b, a]);
    }

    #[test]
    fn test_bad_period_text_leaves_store_alone() {
        let (mut store, a, _) = setup();
        let result = SettingsPanel::apply(
            &mut store,
            PanelEvent::PeriodEdited {
                id: a,
                raw: "five".to_string(),
            },
        );
        assert!(matches!(result, Err(DomainError::InvalidPeriod(_))));
        assert_eq!(store.get(a).unwrap().length.get(), 5);
    }

    #[test]
    fn test_unit_change_does_not_resort() {
        let (mut store, a, b) = setup();
        store.sort_by_effective_duration();
        assert_eq!(store.ids(), vec![b, a]);

        let outcome = SettingsPanel::apply(
            &mut store,
            PanelEvent::UnitChanged {
                id: a,
                unit: TimeUnit::Minutes,
            },
        )
        .unwrap();
        assert_eq!(
            outcome,
            PanelOutcome::Updated {
                id: a,
                resorted: false
            }
        );
        // 5 min now outlasts 10 s, but the order waits for the next apply
        assert_eq!(store.ids(), vec![b, a]);
        assert!(!store.is_sorted());

        store.sort_by_effective_duration();
        assert_eq!(store.ids(), vec![a, b]);
    }

    #[test]
    fn test_remove_and_stale_events() {
        let (mut store, a, b) = setup();
        assert_eq!(
            SettingsPanel::apply(&mut store, PanelEvent::Removed { id: a }).unwrap(),
            PanelOutcome::Removed { id: a }
        );
        assert_eq!(
            SettingsPanel::apply(&mut store, PanelEvent::Removed { id: a }).unwrap(),
            PanelOutcome::Ignored
        );
        assert_eq!(
            SettingsPanel::apply(
                &mut store,
                PanelEvent::UnitChanged {
                    id: a,
                    unit: TimeUnit::Minutes
                }
            )
            .unwrap(),
            PanelOutcome::Ignored
        );
        assert_eq!(store.ids(), vec![b]);
    }
}
