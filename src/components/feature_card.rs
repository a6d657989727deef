use leptos::prelude::*;

/// Image + title card; children render below the title
#[component]
pub fn FeatureCard(title: String, image: String, children: Children) -> impl IntoView {
    let alt = title.clone();

    view! {
        <div class="feature-card">
            <img class="feature-image" src=image alt=alt />
            <h3 class="feature-title">{title}</h3>
            {children()}
        </div>
    }
}
