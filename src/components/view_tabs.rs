use leptos::prelude::*;

use crate::state::DataView;

/// Two-tab switch between the observed and predicted panels. Both tables
/// stay rendered; the active tab only carries the highlight.
#[component]
pub fn ViewTabs(
    active: Signal<DataView>,
    #[prop(into)] on_select: Callback<DataView>,
) -> impl IntoView {
    let tab_class = move |tab: DataView| {
        if active.get() == tab {
            "tab active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="tabs">
            <button
                class=move || tab_class(DataView::Observed)
                on:click=move |_| on_select.run(DataView::Observed)
            >
                "Real time data"
            </button>
            <button
                class=move || tab_class(DataView::Predicted)
                on:click=move |_| on_select.run(DataView::Predicted)
            >
                "Predicted data"
            </button>
        </div>
    }
}
