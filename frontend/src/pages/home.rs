use crate::components::complaint_table::ComplaintTable;
use crate::components::feedback::Notice;
use crate::context::use_portal;
use crate::web::router::{Link, current_page, set_page_query};
use grievance_client::{AppRoute, ComplaintBoard};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The citizen's own complaint history.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_portal();
    let board = RwSignal::new(ComplaintBoard::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(Option::<String>::None);

    let load = move |page: u32| {
        set_loading.set(true);
        set_notice.set(None);
        let portal = ctx.portal();
        spawn_local(async move {
            match portal.load_user_complaints(page).await {
                Ok(list) => board.update(|b| b.load(page, list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Home] {}", e).into());
                    set_notice.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };
    load(current_page());
    let on_page = Callback::new(move |page: u32| {
        set_page_query(AppRoute::Home, page);
        load(page);
    });

    let name = move || ctx.session().get().map(|s| s.name).unwrap_or_default();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">"My Complaints"</h3>
                        <p class="text-base-content/70 text-sm">"Hello " {name} ", here is what you have reported."</p>
                    </div>
                    <Link route=AppRoute::Complaint class="btn btn-primary">"New Complaint"</Link>
                </div>
                <div class="px-6">
                    <Notice message=notice />
                </div>
                <ComplaintTable board=board loading=loading on_page=on_page />
            </div>
        </div>
    }
}
