//! 管理面板
//!
//! Every complaint, with the one forward status transition per row.

use crate::components::complaint_table::ComplaintTable;
use crate::components::feedback::Notice;
use crate::context::use_portal;
use crate::web::router::{current_page, set_page_query};
use grievance_client::{AppRoute, ComplaintBoard};
use grievance_shared::{Complaint, ComplaintStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_portal();
    let board = RwSignal::new(ComplaintBoard::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(Option::<String>::None);

    let load = move |page: u32| {
        set_loading.set(true);
        set_notice.set(None);
        let portal = ctx.portal();
        spawn_local(async move {
            match portal.load_all_complaints(page).await {
                Ok(list) => board.update(|b| b.load(page, list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Dashboard] {}", e).into());
                    set_notice.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };
    load(current_page());
    let on_page = Callback::new(move |page: u32| {
        set_page_query(AppRoute::Dashboard, page);
        load(page);
    });

    let advance = move |complaint: Complaint| {
        // One update per row at a time
        if !board.try_update(|b| b.begin_action(&complaint.id)).unwrap_or(false) {
            return;
        }
        let portal = ctx.portal();
        spawn_local(async move {
            let result = portal.advance_status(&complaint).await;
            board.update(|b| {
                b.finish_action(&complaint.id);
                if let Ok(status) = &result {
                    b.apply_status(&complaint.id, status.clone());
                }
            });
            if let Err(e) = result {
                web_sys::console::error_1(&format!("[Dashboard] {}", e).into());
                set_notice.set(Some(e.user_message()));
            }
        });
    };

    let count = move |status: ComplaintStatus| {
        move || {
            board.with(|b| b.complaints().iter().filter(|c| c.status == status).count())
        }
    };

    view! {
        <div class="space-y-8">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Open"</div>
                    <div class="stat-value text-info">{count(ComplaintStatus::Open)}</div>
                    <div class="stat-desc">"on this page"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"In Progress"</div>
                    <div class="stat-value text-warning">{count(ComplaintStatus::InProgress)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Closed"</div>
                    <div class="stat-value text-success">{count(ComplaintStatus::Closed)}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"All Complaints"</h3>
                        <p class="text-base-content/70 text-sm">"Move issues forward as they are handled."</p>
                    </div>
                    <div class="px-6">
                        <Notice message=notice />
                    </div>
                    <ComplaintTable
                        board=board
                        loading=loading
                        on_page=on_page
                        show_owner=true
                        on_advance=Callback::new(advance)
                    />
                </div>
            </div>
        </div>
    }
}
