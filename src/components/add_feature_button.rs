//! Add Feature Button
//!
//! Appends a placeholder card to one collection.

use leptos::prelude::*;

use feature_sync::FeatureKind;

use crate::context::AppContext;

#[component]
pub fn AddFeatureButton(kind: FeatureKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button
            type="button"
            class="add-feature"
            title=format!("Add {} feature", kind)
            on:click=move |_| ctx.append(kind)
        >
            "+"
        </button>
    }
}
