use leptos::prelude::*;

use crate::state::{RunField, RunParams};

/// The three scalar run inputs. Free text, no validation; parsing happens
/// only when the tables are rebuilt.
#[component]
pub fn RunParameterInputs(
    params: Signal<RunParams>,
    #[prop(into)] on_change: Callback<(RunField, String)>,
) -> impl IntoView {
    view! {
        <div class="parameter-inputs">
            <input
                class="input"
                type="text"
                placeholder="Seeding Density (E6/ml)"
                prop:value=move || params.get().seeding_density
                on:input=move |ev| on_change.run((RunField::SeedingDensity, event_target_value(&ev)))
            />
            <input
                class="input"
                type="text"
                placeholder="Volume (ml)"
                prop:value=move || params.get().volume
                on:input=move |ev| on_change.run((RunField::Volume, event_target_value(&ev)))
            />
            <input
                class="input"
                type="text"
                placeholder="Culture Duration (Days)"
                prop:value=move || params.get().culture_duration
                on:input=move |ev| on_change.run((RunField::CultureDuration, event_target_value(&ev)))
            />
        </div>
    }
}
