use leptos::prelude::*;

use crate::components::observed_table::ObservedTable;
use crate::components::parameter_select::ParameterSelect;
use crate::components::predicted_table::PredictedTable;
use crate::components::run_inputs::RunParameterInputs;
use crate::components::selections_panel::SelectionsPanel;
use crate::components::view_tabs::ViewTabs;
use crate::state::{DataView, RunField, RunState};

/// Top-level page. Owns the whole run state in one signal; child components
/// receive derived read slices and report edits back through callbacks, so
/// every transition goes through the `RunState` methods.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(RunState::new());

    let params = Signal::derive(move || state.with(|s| s.params.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let values = Signal::derive(move || state.with(|s| s.parameter_values.clone()));
    let columns = Signal::derive(move || state.with(|s| s.columns.clone()));
    let observed = Signal::derive(move || state.with(|s| s.observed.clone()));
    let predicted = Signal::derive(move || state.with(|s| s.predicted.clone()));
    let active_view = Signal::derive(move || state.with(|s| s.active_view));

    let on_select_parameters =
        move |ids: Vec<String>| state.update(|s| s.select_parameters(ids));
    let on_field_change =
        move |(field, value): (RunField, String)| state.update(|s| s.set_field(field, value));
    let on_initial_value = move |(id, value): (String, String)| {
        state.update(|s| s.set_initial_value(&id, value))
    };
    let on_observed_edit = move |(row, col, value): (usize, usize, String)| {
        state.update(|s| s.set_observed_cell(row, col, value))
    };
    let on_increment =
        move |(row, col): (usize, usize)| state.update(|s| s.increment_predicted_cell(row, col));
    let on_view_select = move |view: DataView| state.update(|s| s.set_active_view(view));

    view! {
        <div class="app-container">
            <header class="header">
                <h1>
                    <span class="welcome-text">"Welcome,"</span>
                    " Mellisa"
                </h1>
                <p class="subheader">"Click on any card to get started!"</p>
                <div class="profile-icon"></div>
            </header>

            <div class="parameters-section">
                <div class="parameter-card">
                    <h2 class="parameter-card-title">"Choose your parameters"</h2>
                </div>

                <ParameterSelect on_select=on_select_parameters />
                <RunParameterInputs params=params on_change=on_field_change />
            </div>

            <SelectionsPanel
                selected=selected
                values=values
                on_value_change=on_initial_value
            />

            <div class="data-section">
                <ViewTabs active=active_view on_select=on_view_select />

                <div class="tables-container">
                    <ObservedTable
                        columns=columns
                        rows=observed
                        on_cell_change=on_observed_edit
                    />
                    <PredictedTable
                        columns=columns
                        rows=predicted
                        on_increment=on_increment
                    />
                </div>
            </div>
        </div>
    }
}
