//! Feature List Components
//!
//! Render each collection in insertion order, followed by its add button.

use leptos::prelude::*;

use feature_sync::{FeatureKind, LinkFeatureItem, LinkTarget};

use crate::components::{AddFeatureButton, FeatureCard};
use crate::context::AppContext;

/// Descriptive cards
#[component]
pub fn BasicFeatureList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="feature-section feature-section-basic">
            <div class="feature-grid">
                {move || {
                    ctx.basic_items()
                        .into_iter()
                        .map(|item| {
                            let description = item.description.unwrap_or_default();
                            view! {
                                <FeatureCard title=item.title image=item.image>
                                    <p class="feature-description">{description}</p>
                                </FeatureCard>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <AddFeatureButton kind=FeatureKind::Basic />
        </section>
    }
}

/// Navigable cards
#[component]
pub fn LinkFeatureList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="feature-section feature-section-link">
            <div class="feature-grid">
                {move || ctx.link_items().into_iter().map(link_card).collect_view()}
            </div>
            <AddFeatureButton kind=FeatureKind::Link />
        </section>
    }
}

fn link_card(item: LinkFeatureItem) -> impl IntoView {
    // External links open in a new tab
    let (href, external) = match item.target() {
        Some(LinkTarget::External(url)) => (Some(url.to_string()), true),
        Some(LinkTarget::Internal(path)) => (Some(path.to_string()), false),
        None => (None, false),
    };
    let index = format!("#{}", item.index);

    view! {
        <a
            class="feature-link"
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            <FeatureCard title=item.title image=item.image>
                <span class="feature-index">{index}</span>
            </FeatureCard>
        </a>
    }
}
