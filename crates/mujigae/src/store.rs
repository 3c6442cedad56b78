//! The palette store.
//!
//! A [`PaletteStore`] owns a palette and the current selection. Every
//! operation either fully applies or leaves the state untouched. After a
//! successful mutation, the store saves a snapshot to its storage. Saving is
//! best effort: failures are logged and the in-memory state stays as is.

use crate::model::{Palette, Row, RowId, ScaleLabels, Swatch, SwatchId, DESCRIPTION, NEW_ROW_NAME};
use crate::persist::{PaletteSnapshot, Storage};
use mujigae_color::{canonicalize, Notation};

/// Move the element at `old` to `new`, shifting the elements in between.
///
/// This function returns `false` without touching the vector if either index
/// is out of bounds or if both indices are the same.
fn splice<T>(items: &mut Vec<T>, old: usize, new: usize) -> bool {
    if items.len() <= old || items.len() <= new || old == new {
        return false;
    }

    let item = items.remove(old);
    items.insert(new, item);
    true
}

/// A palette store.
///
/// Rows and colors are addressed by identifier. Reordering is by index, with
/// indices referring to positions before the move.
#[derive(Debug)]
pub struct PaletteStore<S: Storage> {
    storage: S,
    key: String,
    state: PaletteSnapshot,
}

impl<S: Storage> PaletteStore<S> {
    /// Create a new palette store hydrated from the record with the given key.
    ///
    /// If the record is missing, the store starts out with the default
    /// palette. If the record cannot be read or does not parse, the store logs
    /// a warning and also starts out with the default palette. The broken
    /// record is left in place until the next mutation overwrites it.
    ///
    /// Colors whose data does not match their notation are re-rendered in
    /// that notation. Colors whose data does not parse at all are dropped with
    /// a warning. Rows and the remaining colors keep their identifiers.
    pub fn new(storage: S, key: &str) -> Self {
        let state = Self::hydrate(&storage, key);
        Self {
            storage,
            key: key.to_owned(),
            state,
        }
    }

    fn hydrate(storage: &S, key: &str) -> PaletteSnapshot {
        let text = match storage.load(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::debug!("No palette stored under \"{key}\", using defaults");
                return PaletteSnapshot::default();
            }
            Err(err) => {
                log::warn!("Failed to load palette, using defaults: {err}");
                return PaletteSnapshot::default();
            }
        };

        let mut snapshot = match PaletteSnapshot::from_json(&text) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("Failed to parse palette, using defaults: {err}");
                return PaletteSnapshot::default();
            }
        };

        for row in &mut snapshot.palette.rows {
            row.colors.retain_mut(Self::repair_swatch);
        }

        snapshot
    }

    /// Repair a hydrated swatch, returning whether to keep it.
    fn repair_swatch(swatch: &mut Swatch) -> bool {
        let data = swatch.data().to_owned();
        match swatch.repair() {
            Ok(false) => true,
            Ok(true) => {
                log::debug!(
                    "Stored color {} \"{data}\" rewritten as {} \"{}\"",
                    swatch.id(),
                    swatch.format(),
                    swatch.data()
                );
                true
            }
            Err(err) => {
                log::warn!("Dropping stored color {} \"{data}\": {err}", swatch.id());
                false
            }
        }
    }

    fn persist(&self) {
        let result = self
            .state
            .to_json()
            .and_then(|json| self.storage.save(&self.key, &json));
        if let Err(err) = result {
            log::warn!("Failed to save palette under \"{}\": {err}", self.key);
        }
    }

    /// Save the current state again.
    pub fn flush(&self) {
        self.persist();
    }

    /// Get the storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the palette.
    pub fn palette(&self) -> &Palette {
        &self.state.palette
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Row] {
        self.state.palette.rows()
    }

    /// Get the scale labels.
    pub fn values(&self) -> &[String] {
        self.state.palette.values()
    }

    /// Find the row with the given identifier.
    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.state.palette.row(id)
    }

    /// Find the color with the given identifier and the row containing it.
    pub fn find_color(&self, id: &SwatchId) -> Option<(&Row, &Swatch)> {
        self.state.palette.find_color(id)
    }

    /// Get the identifier of the selected color. It may be stale.
    pub fn selected_color(&self) -> Option<&SwatchId> {
        self.state.selected_color.as_ref()
    }

    /// Resolve the selected color. A stale selection resolves to `None`.
    pub fn selection(&self) -> Option<(&Row, &Swatch)> {
        self.state
            .selected_color
            .as_ref()
            .and_then(|id| self.state.palette.find_color(id))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Append a new row with the default colors and return its identifier.
    pub fn add_row(&mut self) -> RowId {
        let row = Row::new(NEW_ROW_NAME, DESCRIPTION);
        let id = row.id.clone();
        self.state.palette.rows.push(row);
        self.persist();
        id
    }

    /// Delete the row with the given identifier.
    ///
    /// The selection is left alone, even if it refers to one of the row's
    /// colors.
    pub fn delete_row(&mut self, id: &RowId) -> bool {
        let rows = &mut self.state.palette.rows;
        let Some(index) = rows.iter().position(|row| row.id == *id) else {
            log::debug!("Ignoring deletion of unknown row {id}");
            return false;
        };

        rows.remove(index);
        self.persist();
        true
    }

    /// Move the row at index `old` to index `new`.
    pub fn reorder_rows(&mut self, old: usize, new: usize) -> bool {
        if !splice(&mut self.state.palette.rows, old, new) {
            log::debug!("Ignoring move of row from {old} to {new}");
            return false;
        }

        self.persist();
        true
    }

    /// Move the color at index `old` to index `new` within the given row.
    pub fn reorder_colors(&mut self, id: &RowId, old: usize, new: usize) -> bool {
        let moved = self
            .state
            .palette
            .row_mut(id)
            .is_some_and(|row| splice(&mut row.colors, old, new));
        if !moved {
            log::debug!("Ignoring move of color from {old} to {new} in row {id}");
            return false;
        }

        self.persist();
        true
    }

    /// Replace the name of the given row.
    pub fn update_row_name(&mut self, id: &RowId, value: &str) -> bool {
        self.update_row(id, |row| &mut row.name, value)
    }

    /// Replace the description of the given row.
    pub fn update_row_description(&mut self, id: &RowId, value: &str) -> bool {
        self.update_row(id, |row| &mut row.description, value)
    }

    fn update_row<F>(&mut self, id: &RowId, field: F, value: &str) -> bool
    where
        F: FnOnce(&mut Row) -> &mut String,
    {
        let Some(row) = self.state.palette.row_mut(id) else {
            log::debug!("Ignoring update of unknown row {id}");
            return false;
        };

        let field = field(row);
        if field == value {
            return false;
        }

        value.clone_into(field);
        self.persist();
        true
    }

    /// Update the color with the given identifier from user input.
    ///
    /// The input may be any color string with an editable notation. It is
    /// stored in canonical form. Input that does not parse leaves the palette
    /// unchanged.
    pub fn update_color(&mut self, id: &SwatchId, raw: &str) -> bool {
        let Some(swatch) = self.state.palette.color_mut(id) else {
            log::debug!("Ignoring update of unknown color {id}");
            return false;
        };

        let color = match canonicalize(raw) {
            Ok(color) => color,
            Err(err) => {
                log::debug!("Rejecting \"{raw}\" for color {id}: {err}");
                return false;
            }
        };

        if !swatch.replace(color) {
            return false;
        }

        self.persist();
        true
    }

    /// Render the color with the given identifier in another notation.
    pub fn convert_color(&mut self, id: &SwatchId, notation: Notation) -> bool {
        let Some(swatch) = self.state.palette.color_mut(id) else {
            log::debug!("Ignoring conversion of unknown color {id}");
            return false;
        };

        match swatch.convert(notation) {
            Ok(true) => {
                self.persist();
                true
            }
            Ok(false) => false,
            Err(err) => {
                log::debug!("Unable to convert color {id} to {notation}: {err}");
                false
            }
        }
    }

    /// Replace the scale labels.
    pub fn update_values(&mut self, values: Vec<String>) -> bool {
        if self.state.palette.values.values == values {
            return false;
        }

        self.state.palette.values = ScaleLabels { values };
        self.persist();
        true
    }

    /// Replace the scale label at the given index.
    pub fn update_value(&mut self, index: usize, label: &str) -> bool {
        let Some(value) = self.state.palette.values.values.get_mut(index) else {
            log::debug!("Ignoring update of scale label {index}");
            return false;
        };

        if value == label {
            return false;
        }

        label.clone_into(value);
        self.persist();
        true
    }

    /// Toggle the selection of the given color.
    ///
    /// Selecting the already selected color clears the selection. The
    /// identifier is not checked against the palette.
    pub fn select_color(&mut self, id: &SwatchId) {
        let selected = &mut self.state.selected_color;
        if selected.as_ref() == Some(id) {
            *selected = None;
        } else {
            *selected = Some(id.clone());
        }
        self.persist();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.state.selected_color.take().is_some() {
            self.persist();
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::PaletteStore;
    use crate::model::{RowId, SwatchId, DEFAULT_GRAYSCALE};
    use crate::error::StorageError;
    use crate::persist::{MemoryStorage, PaletteSnapshot, Storage};
    use mujigae_color::Notation;
    use std::collections::HashSet;

    const KEY: &str = "palette-storage";

    fn store() -> PaletteStore<MemoryStorage> {
        PaletteStore::new(MemoryStorage::new(), KEY)
    }

    fn row_ids(store: &PaletteStore<MemoryStorage>) -> Vec<RowId> {
        store.rows().iter().map(|row| row.id().clone()).collect()
    }

    fn stored(store: &PaletteStore<MemoryStorage>) -> PaletteSnapshot {
        let json = store.storage().get(KEY).expect("palette should be stored");
        PaletteSnapshot::from_json(&json).expect("palette should parse")
    }

    #[test]
    fn test_defaults() {
        let store = store();
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.values().len(), 11);
        assert_eq!(store.selected_color(), None);

        let row = &store.rows()[0];
        assert_eq!(row.name(), "Primary");
        assert_eq!(row.description(), "Main brand colors");
        let data: Vec<_> = row.colors().iter().map(|s| s.data()).collect();
        assert_eq!(data, DEFAULT_GRAYSCALE);

        // Hydration does not write.
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_add_and_delete_rows() {
        let mut store = store();
        let id1 = store.add_row();
        let id2 = store.add_row();
        assert_eq!(store.rows().len(), 3);

        let row = store.row(&id1).expect("row should exist");
        assert_eq!(row.name(), "Untitled Row");
        assert_eq!(row.description(), "Description");
        assert_eq!(row.colors().len(), 11);

        let ids1: HashSet<_> = row.colors().iter().map(|s| s.id().clone()).collect();
        let ids2: HashSet<_> = store
            .row(&id2)
            .expect("row should exist")
            .colors()
            .iter()
            .map(|s| s.id().clone())
            .collect();
        assert!(ids1.is_disjoint(&ids2));

        assert!(store.delete_row(&id1));
        assert!(!store.delete_row(&id1));
        assert_eq!(row_ids(&store)[1], id2);
        assert_eq!(stored(&store).palette, *store.palette());
    }

    #[test]
    fn test_reorder_rows() {
        let mut store = store();
        store.add_row();
        store.add_row();
        let before = row_ids(&store);

        assert!(store.reorder_rows(0, 2));
        let after = row_ids(&store);
        assert_eq!(after, vec![before[1].clone(), before[2].clone(), before[0].clone()]);

        assert!(!store.reorder_rows(1, 1));
        assert!(!store.reorder_rows(3, 0));
        assert!(!store.reorder_rows(0, 3));
        assert_eq!(row_ids(&store), after);
    }

    #[test]
    fn test_reorder_colors() {
        let mut store = store();
        let row = store.rows()[0].id().clone();
        let first = store.rows()[0].colors()[0].id().clone();

        assert!(store.reorder_colors(&row, 0, 10));
        let colors = store.rows()[0].colors();
        assert_eq!(colors[10].id(), &first);
        assert_eq!(colors[0].data(), "#f5f5f5");

        assert!(!store.reorder_colors(&row, 0, 11));
        assert!(!store.reorder_colors(&RowId::from("nope"), 0, 1));
    }

    #[test]
    fn test_update_row_fields() {
        let mut store = store();
        let row = store.rows()[0].id().clone();

        assert!(store.update_row_name(&row, "Brand"));
        assert!(store.update_row_description(&row, "  verbatim  "));
        assert!(!store.update_row_name(&row, "Brand"));
        assert!(!store.update_row_name(&RowId::from("nope"), "Brand"));

        let stored = stored(&store);
        let stored_row = &stored.palette.rows()[0];
        assert_eq!(stored_row.name(), "Brand");
        assert_eq!(stored_row.description(), "  verbatim  ");
    }

    #[test]
    fn test_update_color() {
        let mut store = store();
        let id = store.rows()[0].colors()[3].id().clone();

        assert!(store.update_color(&id, "  OKLCH(62.31% 0.188 259.8145) "));
        let (_, swatch) = store.find_color(&id).expect("color should exist");
        assert_eq!(swatch.format(), Notation::Oklch);
        assert_eq!(swatch.data(), "oklch(0.6231 0.1880 259.8145)");
        assert_eq!(store.rows()[0].colors()[3].id(), &id);

        assert!(store.update_color(&id, "rgb(59 130 246)"));
        assert_eq!(store.rows()[0].colors()[3].data(), "rgb(59, 130, 246)");
        assert!(!store.update_color(&id, "rgb(59, 130, 246)"));
        assert!(!store.update_color(&SwatchId::from("nope"), "#fff"));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let mut store = store();
        let id = store.rows()[0].colors()[0].id().clone();
        let before = store.palette().clone();

        for garbage in ["", "not a color", "#12345", "rgb(1, 2)", "lab(50 10 10)", "color(display-p3 1 0 0)"] {
            assert!(!store.update_color(&id, garbage), "{garbage}");
            assert_eq!(store.palette(), &before);
        }
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_convert_color() {
        let mut store = store();
        let id = store.rows()[0].colors()[5].id().clone();

        assert!(store.convert_color(&id, Notation::Hsl));
        assert_eq!(store.rows()[0].colors()[5].data(), "hsl(0, 0%, 45.1%)");
        assert!(store.convert_color(&id, Notation::Hex));
        assert_eq!(store.rows()[0].colors()[5].data(), "#737373");
        assert!(!store.convert_color(&id, Notation::Hex));
        assert_eq!(store.rows()[0].colors()[5].id(), &id);
    }

    #[test]
    fn test_update_values() {
        let mut store = store();
        assert!(store.update_value(5, "450"));
        assert_eq!(store.values()[5], "450");
        assert!(!store.update_value(11, "1000"));
        assert!(!store.update_value(5, "450"));

        let labels = vec!["light".to_owned(), "dark".to_owned()];
        assert!(store.update_values(labels.clone()));
        assert_eq!(store.values(), labels.as_slice());
        // Rows keep their colors.
        assert_eq!(store.rows()[0].colors().len(), 11);
        assert_eq!(stored(&store).palette.values(), labels.as_slice());
    }

    #[test]
    fn test_selection() {
        let mut store = store();
        let id = store.rows()[0].colors()[2].id().clone();

        store.select_color(&id);
        assert_eq!(store.selected_color(), Some(&id));
        assert_eq!(store.selection().map(|(_, s)| s.data()), Some("#e5e5e5"));
        store.select_color(&id);
        assert_eq!(store.selected_color(), None);

        store.select_color(&id);
        store.clear_selection();
        assert_eq!(store.selected_color(), None);
        assert_eq!(stored(&store).selected_color, None);

        let unknown = SwatchId::from("unknown");
        store.select_color(&unknown);
        assert_eq!(store.selected_color(), Some(&unknown));
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_stale_selection() {
        let mut store = store();
        let row = store.rows()[0].id().clone();
        let id = store.rows()[0].colors()[0].id().clone();

        store.select_color(&id);
        assert!(store.delete_row(&row));
        assert_eq!(store.selected_color(), Some(&id));
        assert!(store.selection().is_none());
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_hydration() {
        let storage = MemoryStorage::new();
        let mut store = PaletteStore::new(storage.clone(), KEY);
        let row = store.rows()[0].id().clone();
        let id = store.rows()[0].colors()[1].id().clone();
        store.update_row_name(&row, "Neutral");
        store.select_color(&id);

        let same = PaletteStore::new(storage, KEY);
        assert_eq!(same.palette(), store.palette());
        assert_eq!(same.selected_color(), Some(&id));
    }

    #[test]
    fn test_corrupt_records() -> Result<(), StorageError> {
        let storage = MemoryStorage::new();
        storage.save(KEY, "{ not json")?;
        let store = PaletteStore::new(storage.clone(), KEY);
        assert_eq!(store.rows()[0].name(), "Primary");
        assert_eq!(storage.get(KEY).as_deref(), Some("{ not json"));

        storage.save(KEY, r#"{"rows":[{"id":"1","name":"Bad"}]}"#)?;
        let store = PaletteStore::new(storage, KEY);
        assert_eq!(store.rows()[0].name(), "Primary");
        assert_eq!(store.selected_color(), None);
        Ok(())
    }

    #[test]
    fn test_mismatched_colors_are_repaired() -> Result<(), StorageError> {
        let storage = MemoryStorage::new();
        storage.save(
            KEY,
            r##"{
                "values": { "values": ["50", "100", "200"] },
                "rows": [
                    { "id": "brand", "name": "Brand", "description": "", "colors": [
                        { "id": "a", "format": "oklch", "data": "oklch(0.5 0.1 120)" },
                        { "id": "b", "format": "rgb", "data": "#3b82f6" },
                        { "id": "c", "format": "hsl", "data": "#ffffff" },
                        { "id": "d", "format": "hex", "data": "no color at all" }
                    ]},
                    { "id": "accent", "name": "Accent", "description": "Pop", "colors": [
                        { "id": "e", "format": "hex", "data": "red" }
                    ]}
                ],
                "selectedColor": "b"
            }"##,
        )?;

        let mut store = PaletteStore::new(storage.clone(), KEY);
        let names: Vec<_> = store.rows().iter().map(|row| row.name()).collect();
        assert_eq!(names, ["Brand", "Accent"]);
        assert_eq!(store.values(), ["50", "100", "200"]);

        let brand = store.row(&RowId::from("brand")).expect("row should survive");
        let colors: Vec<_> = brand
            .colors()
            .iter()
            .map(|s| (s.id().as_str(), s.format(), s.data()))
            .collect();
        assert_eq!(
            colors,
            [
                ("a", Notation::Oklch, "oklch(0.5 0.1 120)"),
                ("b", Notation::Rgb, "rgb(59, 130, 246)"),
                ("c", Notation::Hsl, "hsl(0, 0%, 100%)"),
            ]
        );
        let accent = store.row(&RowId::from("accent")).expect("row should survive");
        assert_eq!(accent.colors()[0].data(), "#ff0000");
        assert_eq!(store.selection().map(|(row, _)| row.name()), Some("Brand"));

        // Hydration does not write, but the next mutation saves the repairs.
        assert!(storage.get(KEY).is_some_and(|json| json.contains("#3b82f6")));
        store.select_color(&SwatchId::from("e"));
        let stored = stored(&store);
        assert_eq!(stored.palette, *store.palette());
        assert_eq!(stored.palette.rows()[0].name(), "Brand");
        Ok(())
    }

    #[test]
    fn test_quota_does_not_roll_back() {
        let storage = MemoryStorage::with_quota(64);
        let mut store = PaletteStore::new(storage.clone(), KEY);
        let id = store.add_row();
        assert_eq!(store.rows().len(), 2);
        assert!(store.row(&id).is_some());
        assert!(storage.is_empty());
    }

    mod proptests {
        use super::store;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reordering_rows_is_reversible(rows in 1_usize..6, i in 0_usize..6, j in 0_usize..6) {
                let mut store = store();
                for _ in 0..rows {
                    store.add_row();
                }
                let before = super::row_ids(&store);

                let moved = store.reorder_rows(i, j);
                prop_assert_eq!(moved, i != j && i <= rows && j <= rows);
                store.reorder_rows(j, i);
                prop_assert_eq!(super::row_ids(&store), before);
            }

            #[test]
            fn reordering_colors_preserves_ids(moves in prop::collection::vec((0_usize..12, 0_usize..12), 0..8)) {
                let mut store = store();
                let row = store.rows()[0].id().clone();
                let mut before: Vec<_> = store.rows()[0].colors().to_vec();

                for (old, new) in moves {
                    store.reorder_colors(&row, old, new);
                }

                let mut after: Vec<_> = store.rows()[0].colors().to_vec();
                before.sort_by(|a, b| a.id().cmp(b.id()));
                after.sort_by(|a, b| a.id().cmp(b.id()));
                prop_assert_eq!(before, after);
            }

            #[test]
            fn selecting_toggles(first in 0_usize..11, second in 0_usize..11) {
                let mut store = store();
                let ids: Vec<_> = store.rows()[0].colors().iter().map(|s| s.id().clone()).collect();
                store.select_color(&ids[first]);
                let before = store.selected_color().cloned();

                store.select_color(&ids[second]);
                store.select_color(&ids[second]);
                if first == second {
                    prop_assert_eq!(store.selected_color(), Some(&ids[first]));
                } else {
                    prop_assert_eq!(store.selected_color().cloned(), None);
                }
                prop_assert_eq!(before, Some(ids[first].clone()));
            }
        }
    }
}
