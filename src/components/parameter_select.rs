use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::PARAMETER_CATALOG;

/// Multi-select over the parameter catalog, plus the vessel-type dropdown.
///
/// On change the selection is replaced wholesale with the ids currently
/// highlighted in the control, in the order the browser reports them.
#[component]
pub fn ParameterSelect(
    /// Called with the full list of highlighted parameter ids.
    #[prop(into)]
    on_select: Callback<Vec<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        let highlighted = select.selected_options();
        let mut ids = Vec::with_capacity(highlighted.length() as usize);
        for i in 0..highlighted.length() {
            if let Some(opt) = highlighted
                .item(i)
                .and_then(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
            {
                ids.push(opt.value());
            }
        }
        on_select.run(ids);
    };

    view! {
        <div class="parameter-dropdowns">
            <select class="select" multiple=true size="3" on:change=on_change>
                {PARAMETER_CATALOG
                    .iter()
                    .map(|p| view! { <option value={p.id}>{p.name}</option> })
                    .collect::<Vec<_>>()}
            </select>

            // Vessel type is not implemented yet; the dropdown is a placeholder.
            <select class="select">
                <option value="" disabled=true selected=true>"Vessel Type"</option>
            </select>
        </div>
    }
}
