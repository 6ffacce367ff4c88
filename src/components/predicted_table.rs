use leptos::prelude::*;

use crate::state::Grid;

/// Grid of predicted values. The Day column is read-only; every other cell
/// shows its text next to a "+" control that bumps the value by one.
#[component]
pub fn PredictedTable(
    columns: Signal<Vec<String>>,
    rows: Signal<Grid>,
    /// Called with (row, col) when a cell's "+" control is pressed.
    #[prop(into)]
    on_increment: Callback<(usize, usize)>,
) -> impl IntoView {
    view! {
        <div class="data-table">
            <style>{include_str!("data_table.css")}</style>

            <div class="table-header">
                {move || {
                    columns
                        .get()
                        .into_iter()
                        .map(|column| view! { <div class="header-cell">{column}</div> })
                        .collect::<Vec<_>>()
                }}
            </div>

            {move || {
                rows.get()
                    .into_iter()
                    .enumerate()
                    .map(|(row_index, row)| {
                        let cells = row
                            .into_iter()
                            .enumerate()
                            .map(|(cell_index, cell)| {
                                if cell_index == 0 {
                                    view! {
                                        <div class="table-cell">
                                            <input
                                                class="cell-input day-cell"
                                                type="text"
                                                prop:value=cell
                                                readonly=true
                                            />
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="table-cell">
                                            <div class="predicted-cell-content">
                                                <span>{cell}</span>
                                                <button
                                                    class="plus-button"
                                                    on:click=move |_| {
                                                        on_increment.run((row_index, cell_index))
                                                    }
                                                >
                                                    "+"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                }
                            })
                            .collect::<Vec<_>>();
                        view! { <div class="table-row">{cells}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
