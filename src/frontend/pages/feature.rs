//! Member feature views. Each one is its own code unit, fetched the first
//! time its route is entered.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use leptos_router::{LazyRoute, lazy_route};

use crate::router::ViewId;

/// Placeholder surface shared by the feature views.
#[component]
pub fn FeaturePanel(view: ViewId, reference: Option<String>) -> impl IntoView {
    let reference = reference.filter(|_| view.takes_id());

    view! {
        <section class="section feature-view" data-view=view.as_str()>
            <h1 class="section-title">{view.title()}</h1>
            {reference.map(|id| view! { <p class="feature-ref">"Référence : " {id}</p> })}
            <p>"Cet espace est en cours de préparation."</p>
            <a href="/" class="back-link">"← Retour à l'accueil"</a>
        </section>
    }
}

fn id_param() -> Option<String> {
    use_params_map().with_untracked(|params| params.get("id"))
}

fn panel(view: ViewId, reference: Option<String>) -> AnyView {
    tracing::debug!(%view, "loading view module");
    view! { <FeaturePanel view=view reference=reference/> }.into_any()
}

pub struct CalendarRoute;

#[lazy_route]
impl LazyRoute for CalendarRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::CalendarView, None)
    }
}

pub struct DocListRoute;

#[lazy_route]
impl LazyRoute for DocListRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::DocList, None)
    }
}

pub struct DocDetailRoute {
    id: Option<String>,
}

#[lazy_route]
impl LazyRoute for DocDetailRoute {
    fn data() -> Self {
        Self { id: id_param() }
    }

    fn view(this: Self) -> AnyView {
        panel(ViewId::DocDetail, this.id)
    }
}

pub struct DocUploadRoute;

#[lazy_route]
impl LazyRoute for DocUploadRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::DocUpload, None)
    }
}

pub struct ForumListRoute;

#[lazy_route]
impl LazyRoute for ForumListRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::ForumList, None)
    }
}

pub struct ForumPostRoute;

#[lazy_route]
impl LazyRoute for ForumPostRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::ForumPost, None)
    }
}

pub struct ForumDetailRoute {
    id: Option<String>,
}

#[lazy_route]
impl LazyRoute for ForumDetailRoute {
    fn data() -> Self {
        Self { id: id_param() }
    }

    fn view(this: Self) -> AnyView {
        panel(ViewId::ForumDetail, this.id)
    }
}

pub struct MarketListRoute;

#[lazy_route]
impl LazyRoute for MarketListRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::MarketList, None)
    }
}

pub struct ProductDetailRoute {
    id: Option<String>,
}

#[lazy_route]
impl LazyRoute for ProductDetailRoute {
    fn data() -> Self {
        Self { id: id_param() }
    }

    fn view(this: Self) -> AnyView {
        panel(ViewId::ProductDetail, this.id)
    }
}

pub struct ProverbListRoute;

#[lazy_route]
impl LazyRoute for ProverbListRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        panel(ViewId::ProverbList, None)
    }
}

pub struct ProverbDetailRoute {
    id: Option<String>,
}

#[lazy_route]
impl LazyRoute for ProverbDetailRoute {
    fn data() -> Self {
        Self { id: id_param() }
    }

    fn view(this: Self) -> AnyView {
        panel(ViewId::ProverbDetail, this.id)
    }
}
