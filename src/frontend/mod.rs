//! Browser front end, mounted client-side.

pub mod browser;
mod components;
mod layout;
mod pages;
mod routes;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Router, Routes};

use crate::common::AppError;
use crate::content::SiteContent;
use crate::state::MainLayoutState;
use pages::SiteUnavailable;
pub use routes::SiteRoutes;

/// Content shared with every component.
#[derive(Clone)]
pub struct SiteContext {
    pub content: Arc<SiteContent>,
}

/// Loads the embedded content.
pub fn bootstrap() -> Result<SiteContext, AppError> {
    let content = SiteContent::embedded()?;

    Ok(SiteContext {
        content: Arc::new(content),
    })
}

pub(crate) fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

/// Overlay state provided by the main layout.
pub(crate) fn use_layout() -> RwSignal<MainLayoutState> {
    expect_context::<RwSignal<MainLayoutState>>()
}

/// Content image paths are relative to the site root.
pub fn asset_url(path: &str) -> String {
    if path.starts_with('/') || path.contains("://") {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let body = match bootstrap() {
        Ok(site) => {
            provide_context(site);
            view! {
                <Router>
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <SiteRoutes/>
                    </Routes>
                </Router>
            }
            .into_any()
        }
        Err(err) => {
            tracing::error!(error = %err, "site failed to start");
            view! { <SiteUnavailable reason=err.to_string()/> }.into_any()
        }
    };

    view! {
        <Stylesheet id="aras" href="/pkg/aras-web.css"/>
        <Title text="Association Retour Aux Sources"/>
        <Meta name="description" content="Association culturelle dédiée à la transmission des savoirs ancestraux africains"/>

        {body}
    }
}
