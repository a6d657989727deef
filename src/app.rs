//! Feature Showcase App
//!
//! Basic and link feature lists backed by the remote feature store.

use leptos::prelude::*;

use feature_sync::{FeatureListSync, HttpFeatureStore};

use crate::components::{BasicFeatureList, LinkFeatureList};
use crate::config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let store = match HttpFeatureStore::new(&config::store_config()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("[APP] {}", e);
            return view! { <p class="store-error">"Feature store is not configured."</p> }.into_any();
        }
    };

    let sync = RwSignal::new_local(FeatureListSync::new(store));
    let ctx = AppContext::new(sync);
    provide_context(ctx);

    // Load once on mount; nothing tracked, so the effect never re-runs
    Effect::new(move |_| ctx.load());

    view! {
        <main class="feature-showcase">
            {move || (!ctx.is_loaded()).then(|| view! { <p class="loading-hint">"불러오는 중..."</p> })}

            <h2>"Features"</h2>
            <BasicFeatureList />

            <h2>"Links"</h2>
            <LinkFeatureList />

            <p class="feature-count">
                {move || format!("{} features, {} links", ctx.basic_items().len(), ctx.link_items().len())}
            </p>
        </main>
    }
    .into_any()
}
