use leptos::prelude::*;

/// Shown instead of the site when the embedded content or the route table
/// cannot be loaded.
#[component]
pub fn SiteUnavailable(reason: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 unavailable">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"Site momentanément indisponible"</h1>
                <p class="mb-8 max-w-md">"Merci de réessayer dans quelques instants."</p>
                <p class="text-xs unavailable-reason">{reason}</p>
            </div>
        </div>
    }
}
