use std::collections::BTreeMap;

/// A process parameter available for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub initial_value_placeholder: &'static str,
}

/// Static catalog of parameters a run can track.
pub const PARAMETER_CATALOG: &[ParameterDefinition] = &[
    ParameterDefinition {
        id: "glucose",
        name: "Glucose",
        initial_value_placeholder: "Initial value (g/L)",
    },
    ParameterDefinition {
        id: "ph",
        name: "pH",
        initial_value_placeholder: "Set point",
    },
    ParameterDefinition {
        id: "lactate",
        name: "Lactate",
        initial_value_placeholder: "Initial value (g/L)",
    },
];

/// Row count used when the culture duration is empty or unparsable.
pub const DEFAULT_DURATION_DAYS: usize = 3;

/// Display name for a parameter id, falling back to the raw id when the
/// catalog has no entry for it.
pub fn display_name(id: &str) -> String {
    PARAMETER_CATALOG
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Input placeholder for a parameter id, empty for unknown ids.
pub fn placeholder_for(id: &str) -> &'static str {
    PARAMETER_CATALOG
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.initial_value_placeholder)
        .unwrap_or("")
}

/// Column headers derived from the current selection: Day and Cell Density
/// always come first, then each selected parameter's display name in
/// selection order.
pub fn column_headers(selected: &[String]) -> Vec<String> {
    let mut columns = vec!["Day".to_string(), "Cell Density".to_string()];
    columns.extend(selected.iter().map(|id| display_name(id)));
    columns
}

fn row_count(culture_duration: &str) -> usize {
    match culture_duration.trim().parse::<i64>() {
        Ok(n) if n > 0 => n as usize,
        Ok(_) => 1,
        Err(_) => DEFAULT_DURATION_DAYS,
    }
}

/// Row-major table of cell text. Column 0 holds the day number.
pub type Grid = Vec<Vec<String>>;

fn blank_grid(rows: usize, cols: usize) -> Grid {
    (0..rows)
        .map(|day| {
            let mut row = vec![String::new(); cols];
            row[0] = day.to_string();
            row
        })
        .collect()
}

/// Increment semantics for the predicted table's "+" control: empty counts
/// as 0, an unparsable value is replaced with the literal "1", anything
/// numeric goes up by one.
pub fn increment_cell(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "1".to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(v) => (v + 1.0).to_string(),
        Err(_) => "1".to_string(),
    }
}

/// Scalar run parameters. Free text, parsed only where used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunParams {
    pub seeding_density: String,
    pub volume: String,
    pub culture_duration: String,
}

/// Which of the two scalar-free run fields an input edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunField {
    SeedingDensity,
    Volume,
    CultureDuration,
}

/// Which data table the tab bar highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataView {
    Observed,
    Predicted,
}

/// The whole application state. All UI events funnel through the transition
/// methods below, so the behavior is testable without a DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub selected: Vec<String>,
    pub params: RunParams,
    pub parameter_values: BTreeMap<String, String>,
    pub columns: Vec<String>,
    pub observed: Grid,
    pub predicted: Grid,
    pub active_view: DataView,
}

impl RunState {
    pub fn new() -> Self {
        let selected = Vec::new();
        let params = RunParams::default();
        let columns = column_headers(&selected);
        let grid = blank_grid(row_count(&params.culture_duration), columns.len());
        RunState {
            selected,
            params,
            parameter_values: PARAMETER_CATALOG
                .iter()
                .map(|p| (p.id.to_string(), String::new()))
                .collect(),
            columns,
            observed: grid.clone(),
            predicted: grid,
            active_view: DataView::Observed,
        }
    }

    /// Rebuild both tables to a fresh blank grid matching the current
    /// selection and duration. Prior cell edits are discarded on purpose:
    /// any structural change resets the data.
    fn rebuild_tables(&mut self) {
        self.columns = column_headers(&self.selected);
        let fresh = blank_grid(row_count(&self.params.culture_duration), self.columns.len());
        self.observed = fresh.clone();
        self.predicted = fresh;
    }

    /// Replace the selection with the ids currently highlighted in the
    /// multi-select, in the control's reported order.
    pub fn select_parameters(&mut self, ids: Vec<String>) {
        self.selected = ids;
        self.rebuild_tables();
    }

    /// Write a scalar run field. Editing the culture duration reshapes the
    /// tables, but only when the new value is non-empty; clearing the field
    /// leaves the current shape until the next structural trigger.
    pub fn set_field(&mut self, field: RunField, value: String) {
        match field {
            RunField::SeedingDensity => self.params.seeding_density = value,
            RunField::Volume => self.params.volume = value,
            RunField::CultureDuration => {
                self.params.culture_duration = value;
                if !self.params.culture_duration.is_empty() {
                    self.rebuild_tables();
                }
            }
        }
    }

    pub fn set_initial_value(&mut self, id: &str, value: String) {
        self.parameter_values.insert(id.to_string(), value);
    }

    /// Overwrite one observed cell. The Day column and out-of-range
    /// coordinates are ignored.
    pub fn set_observed_cell(&mut self, row: usize, col: usize, value: String) {
        if col == 0 {
            return;
        }
        if let Some(cell) = self.observed.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Apply the "+" control to one predicted cell. The Day column and
    /// out-of-range coordinates are ignored.
    pub fn increment_predicted_cell(&mut self, row: usize, col: usize) {
        if col == 0 {
            return;
        }
        if let Some(cell) = self.predicted.get_mut(row).and_then(|r| r.get_mut(col)) {
            let next = increment_cell(cell);
            *cell = next;
        }
    }

    pub fn set_active_view(&mut self, view: DataView) {
        self.active_view = view;
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_columns_follow_selection_order() {
        assert_eq!(column_headers(&[]), ["Day", "Cell Density"]);
        assert_eq!(
            column_headers(&ids(&["lactate", "glucose"])),
            ["Day", "Cell Density", "Lactate", "Glucose"]
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_raw() {
        assert_eq!(display_name("osmolality"), "osmolality");
        assert_eq!(
            column_headers(&ids(&["glucose", "osmolality"])),
            ["Day", "Cell Density", "Glucose", "osmolality"]
        );
        assert_eq!(placeholder_for("osmolality"), "");
    }

    #[test]
    fn test_row_count_from_duration() {
        assert_eq!(row_count("5"), 5);
        assert_eq!(row_count(" 7 "), 7);
        assert_eq!(row_count("0"), 1);
        assert_eq!(row_count("-2"), 1);
        assert_eq!(row_count(""), DEFAULT_DURATION_DAYS);
        assert_eq!(row_count("abc"), DEFAULT_DURATION_DAYS);
        assert_eq!(row_count("2.5"), DEFAULT_DURATION_DAYS);
    }

    #[test]
    fn test_initial_state_shape() {
        let state = RunState::new();
        assert_eq!(state.columns, ["Day", "Cell Density"]);
        assert_eq!(state.observed.len(), DEFAULT_DURATION_DAYS);
        assert_eq!(state.observed, state.predicted);
        for (day, row) in state.observed.iter().enumerate() {
            assert_eq!(row.len(), 2);
            assert_eq!(row[0], day.to_string());
            assert_eq!(row[1], "");
        }
        assert_eq!(state.active_view, DataView::Observed);
    }

    #[test]
    fn test_selection_change_resets_both_tables() {
        let mut state = RunState::new();
        state.set_observed_cell(1, 1, "4.2".to_string());
        state.increment_predicted_cell(2, 1);
        assert_eq!(state.observed[1][1], "4.2");
        assert_eq!(state.predicted[2][1], "1");

        state.select_parameters(ids(&["glucose"]));

        assert_eq!(state.columns, ["Day", "Cell Density", "Glucose"]);
        for (day, row) in state.observed.iter().enumerate() {
            assert_eq!(row[0], day.to_string());
            assert!(row[1..].iter().all(String::is_empty), "observed not blank");
        }
        assert_eq!(state.observed, state.predicted);
    }

    #[test]
    fn test_duration_change_resets_both_tables() {
        let mut state = RunState::new();
        state.set_observed_cell(0, 1, "1.1".to_string());

        state.set_field(RunField::CultureDuration, "6".to_string());

        assert_eq!(state.observed.len(), 6);
        assert_eq!(state.predicted.len(), 6);
        assert!(state.observed.iter().all(|r| r[1].is_empty()));
    }

    #[test]
    fn test_empty_duration_edit_keeps_current_shape() {
        let mut state = RunState::new();
        state.set_field(RunField::CultureDuration, "5".to_string());
        assert_eq!(state.observed.len(), 5);

        // Clearing the field is not a structural trigger.
        state.set_field(RunField::CultureDuration, String::new());
        assert_eq!(state.observed.len(), 5);

        // The next trigger rebuilds with the default of 3 rows.
        state.select_parameters(Vec::new());
        assert_eq!(state.observed.len(), DEFAULT_DURATION_DAYS);
    }

    #[test]
    fn test_other_scalar_fields_do_not_reshape() {
        let mut state = RunState::new();
        state.set_observed_cell(0, 1, "2.0".to_string());
        state.set_field(RunField::SeedingDensity, "0.5".to_string());
        state.set_field(RunField::Volume, "250".to_string());
        assert_eq!(state.observed[0][1], "2.0");
        assert_eq!(state.params.seeding_density, "0.5");
        assert_eq!(state.params.volume, "250");
    }

    #[test]
    fn test_day_column_is_immutable() {
        let mut state = RunState::new();
        state.set_observed_cell(1, 0, "99".to_string());
        state.increment_predicted_cell(1, 0);
        assert_eq!(state.observed[1][0], "1");
        assert_eq!(state.predicted[1][0], "1");
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut state = RunState::new();
        let before = state.clone();
        state.set_observed_cell(10, 1, "x".to_string());
        state.set_observed_cell(0, 10, "x".to_string());
        state.increment_predicted_cell(10, 1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_increment_semantics() {
        assert_eq!(increment_cell(""), "1");
        assert_eq!(increment_cell("abc"), "1");
        assert_eq!(increment_cell("2"), "3");
        assert_eq!(increment_cell("2.5"), "3.5");
        assert_eq!(increment_cell("-1"), "0");
    }

    #[test]
    fn test_increment_applies_in_place() {
        let mut state = RunState::new();
        state.increment_predicted_cell(0, 1);
        state.increment_predicted_cell(0, 1);
        assert_eq!(state.predicted[0][1], "2");
        // Observed table is untouched by predicted increments.
        assert_eq!(state.observed[0][1], "");
    }

    #[test]
    fn test_observed_edit_touches_single_cell() {
        let mut state = RunState::new();
        state.select_parameters(ids(&["glucose", "ph"]));
        state.set_field(RunField::CultureDuration, "4".to_string());
        state.set_observed_cell(2, 3, "7.1".to_string());

        for (r, row) in state.observed.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let expected = if c == 0 {
                    r.to_string()
                } else if (r, c) == (2, 3) {
                    "7.1".to_string()
                } else {
                    String::new()
                };
                assert_eq!(*cell, expected, "cell ({r}, {c}) changed unexpectedly");
            }
        }
        assert!(state.predicted.iter().all(|row| row[1..]
            .iter()
            .all(String::is_empty)));
    }

    #[test]
    fn test_initial_values_tracked_per_parameter() {
        let mut state = RunState::new();
        assert_eq!(state.parameter_values["glucose"], "");
        state.set_initial_value("glucose", "4.5".to_string());
        state.set_initial_value("ph", "7.0".to_string());
        assert_eq!(state.parameter_values["glucose"], "4.5");
        assert_eq!(state.parameter_values["ph"], "7.0");
        assert_eq!(state.parameter_values["lactate"], "");
        // Initial values survive table reshapes; only grids reset.
        state.select_parameters(ids(&["glucose"]));
        assert_eq!(state.parameter_values["glucose"], "4.5");
    }

    #[test]
    fn test_scenario_glucose_ph_five_days() {
        let mut state = RunState::new();
        state.select_parameters(ids(&["glucose", "ph"]));
        state.set_field(RunField::CultureDuration, "5".to_string());

        assert_eq!(state.columns, ["Day", "Cell Density", "Glucose", "pH"]);
        assert_eq!(state.observed.len(), 5);
        assert_eq!(state.predicted.len(), 5);
        let days: Vec<_> = state.observed.iter().map(|r| r[0].clone()).collect();
        assert_eq!(days, ["0", "1", "2", "3", "4"]);
        assert!(state.observed.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_view_switch_only_changes_active_view() {
        let mut state = RunState::new();
        let before = state.clone();
        state.set_active_view(DataView::Predicted);
        assert_eq!(state.active_view, DataView::Predicted);
        assert_eq!(state.observed, before.observed);
        assert_eq!(state.predicted, before.predicted);
        assert_eq!(state.columns, before.columns);
    }
}
