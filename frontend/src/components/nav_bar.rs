use crate::context::use_portal;
use crate::web::router::{Link, use_router};
use grievance_client::AppRoute;
use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_portal();
    let router = use_router();
    let session = ctx.session();

    let on_logout = move |_| {
        let next = ctx.logout();
        router.navigate(next);
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link route=AppRoute::Home class="btn btn-ghost text-xl">"Grievance Net"</Link>
                {move || {
                    session
                        .get()
                        .map(|s| {
                            view! {
                                <span class="badge badge-neutral hidden md:inline-flex">
                                    {s.name} " (" {s.role.as_str()} ")"
                                </span>
                            }
                        })
                }}
            </div>
            <div class="flex-none gap-2">
                {move || match session.get() {
                    Some(s) => {
                        let links = if s.role.is_admin() {
                            view! {
                                <Link route=AppRoute::Dashboard class="btn btn-ghost">"Dashboard"</Link>
                            }
                                .into_any()
                        } else {
                            view! {
                                <Link route=AppRoute::Complaint class="btn btn-primary">"New Complaint"</Link>
                            }
                                .into_any()
                        };
                        view! {
                            {links}
                            <button on:click=on_logout class="btn btn-outline btn-error">
                                "Logout"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <Link route=AppRoute::Auth class="btn btn-primary">"Login"</Link> }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
