use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::state::{display_name, placeholder_for};

/// One row per selected parameter: a name label and an initial-value input
/// with the parameter's catalog placeholder.
#[component]
pub fn SelectionsPanel(
    selected: Signal<Vec<String>>,
    values: Signal<BTreeMap<String, String>>,
    #[prop(into)] on_value_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="selections-panel">
            <div class="selections-header">
                <h3 class="selections-title">"Selections:"</h3>
            </div>

            <div class="parameter-selections">
                {move || {
                    selected
                        .get()
                        .into_iter()
                        .map(|id| {
                            let name = display_name(&id);
                            let placeholder = placeholder_for(&id);
                            let value_id = id.clone();
                            let input_id = id.clone();
                            view! {
                                <div class="parameter-row">
                                    <button class="parameter-button">{name}</button>
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder=placeholder
                                        prop:value=move || {
                                            values.get().get(&value_id).cloned().unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            on_value_change
                                                .run((input_id.clone(), event_target_value(&ev)))
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                <div class="parameter-row">
                    // "Add +" has no wired action yet.
                    <button class="add-button">"Add +"</button>
                </div>
            </div>
        </div>
    }
}
