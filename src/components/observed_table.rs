use leptos::prelude::*;

use crate::state::Grid;

/// Editable grid of manually entered measurements. Every cell except the
/// Day column accepts any string; the Day column is read-only.
#[component]
pub fn ObservedTable(
    columns: Signal<Vec<String>>,
    rows: Signal<Grid>,
    /// Called with (row, col, new text) for a single-cell overwrite.
    #[prop(into)]
    on_cell_change: Callback<(usize, usize, String)>,
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
                                            <input
                                                class="cell-input"
                                                type="text"
                                                prop:value=cell
                                                on:input=move |ev| {
                                                    on_cell_change
                                                        .run((
                                                            row_index,
                                                            cell_index,
                                                            event_target_value(&ev),
                                                        ))
                                                }
                                            />
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
