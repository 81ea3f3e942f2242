use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, ProtectedParentRoute, Route};
use leptos_router::{Lazy, MatchNestedRoutes, path};

use crate::frontend::browser;
use crate::frontend::layout::MainLayout;
use crate::frontend::pages::*;
use crate::router::Guard;
use crate::services::AuthGuard;

/// The site's navigation surface.
///
/// Everything renders inside the main layout. The calendar, documentation,
/// forum, market and proverbs branches are gated by [`AuthGuard`]; paths
/// matching none of these fall through to the `<Routes>` fallback, which
/// sends the visitor back to `/`.
#[component(transparent)]
pub fn SiteRoutes() -> impl MatchNestedRoutes + Clone {
    let guard: Arc<dyn Guard> = Arc::new(AuthGuard::default());
    let allowed = {
        let guard = guard.clone();
        move || guard.condition(&browser::read_session())
    };
    let fallback = move || guard.redirect_path().to_string();

    view! {
        <ParentRoute path=path!("") view=MainLayout>
            <Route path=path!("") view=HomePage/>
            <ProtectedParentRoute
                path=path!("calendar")
                view=Outlet
                condition=allowed.clone()
                redirect_path=fallback.clone()
            >
                <Route path=path!("") view={Lazy::<CalendarRoute>::new()}/>
            </ProtectedParentRoute>
            <ProtectedParentRoute
                path=path!("documentation")
                view=Outlet
                condition=allowed.clone()
                redirect_path=fallback.clone()
            >
                <Route path=path!("") view={Lazy::<DocListRoute>::new()}/>
                <Route path=path!("detail/:id") view={Lazy::<DocDetailRoute>::new()}/>
                <Route path=path!("upload") view={Lazy::<DocUploadRoute>::new()}/>
            </ProtectedParentRoute>
            <ProtectedParentRoute
                path=path!("forum")
                view=Outlet
                condition=allowed.clone()
                redirect_path=fallback.clone()
            >
                <Route path=path!("") view={Lazy::<ForumListRoute>::new()}/>
                // Ahead of ":id", otherwise "post" is captured as an id.
                <Route path=path!("post") view={Lazy::<ForumPostRoute>::new()}/>
                <Route path=path!(":id") view={Lazy::<ForumDetailRoute>::new()}/>
            </ProtectedParentRoute>
            <ProtectedParentRoute
                path=path!("market")
                view=Outlet
                condition=allowed.clone()
                redirect_path=fallback.clone()
            >
                <Route path=path!("") view={Lazy::<MarketListRoute>::new()}/>
                <Route path=path!(":id") view={Lazy::<ProductDetailRoute>::new()}/>
            </ProtectedParentRoute>
            <ProtectedParentRoute
                path=path!("proverbs")
                view=Outlet
                condition=allowed
                redirect_path=fallback
            >
                <Route path=path!("") view={Lazy::<ProverbListRoute>::new()}/>
                <Route path=path!(":id") view={Lazy::<ProverbDetailRoute>::new()}/>
            </ProtectedParentRoute>
        </ParentRoute>
    }
    .into_inner()
}
