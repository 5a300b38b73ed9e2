//! 投诉列表组件
//!
//! Shared by the home page (own complaints) and the dashboard (all complaints,
//! with status actions).

use grievance_client::ComplaintBoard;
use grievance_shared::{Complaint, ComplaintStatus, UrgencyLevel};
use leptos::prelude::*;

fn status_badge(status: &ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Open => "badge badge-info",
        ComplaintStatus::InProgress => "badge badge-warning",
        ComplaintStatus::Closed => "badge badge-success",
        ComplaintStatus::Other(_) => "badge badge-ghost",
    }
}

fn urgency_badge(level: UrgencyLevel) -> &'static str {
    match level {
        UrgencyLevel::High => "badge badge-error",
        UrgencyLevel::Medium => "badge badge-warning",
        UrgencyLevel::Low => "badge badge-success",
        UrgencyLevel::Unknown => "badge badge-ghost",
    }
}

fn row(
    board: RwSignal<ComplaintBoard>,
    complaint: Complaint,
    show_owner: bool,
    on_advance: Option<Callback<Complaint>>,
) -> impl IntoView {
    let action = ComplaintBoard::action_for(&complaint);
    let owner = show_owner.then(|| {
        let owner = complaint
            .name
            .clone()
            .or_else(|| complaint.email.clone())
            .unwrap_or_default();
        view! { <td>{owner}</td> }
    });
    let actions = on_advance.map(|cb| {
        let id = complaint.id.clone();
        let busy = move || board.with(|b| b.is_pending(&id));
        let target = complaint.clone();
        view! {
            <td>
                {action.map(|a| {
                    view! {
                        <button
                            class="btn btn-sm btn-outline"
                            disabled=busy
                            on:click=move |_| cb.run(target.clone())
                        >
                            {a.label}
                        </button>
                    }
                })}
            </td>
        }
    });

    view! {
        <tr>
            <td class="whitespace-nowrap">{complaint.created_label()}</td>
            {owner}
            <td>{complaint.location.clone()}</td>
            <td class="max-w-md">{complaint.description.clone()}</td>
            <td>{complaint.predicted_category.clone().unwrap_or_default()}</td>
            <td>
                <span class=urgency_badge(complaint.urgency_level())>
                    {complaint.urgency.clone().unwrap_or_else(|| "-".to_string())}
                </span>
            </td>
            <td>
                <span class=status_badge(&complaint.status)>{complaint.status.label().to_string()}</span>
            </td>
            {actions}
        </tr>
    }
}

/// Table over a [`ComplaintBoard`] with previous/next paging.
#[component]
pub fn ComplaintTable(
    board: RwSignal<ComplaintBoard>,
    #[prop(into)] loading: Signal<bool>,
    on_page: Callback<u32>,
    #[prop(optional)] show_owner: bool,
    #[prop(optional)] on_advance: Option<Callback<Complaint>>,
) -> impl IntoView {
    let columns = (6 + usize::from(show_owner) + usize::from(on_advance.is_some())).to_string();
    let page = move || board.with(|b| b.page());

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        {show_owner.then(|| view! { <th>"Citizen"</th> })}
                        <th>"Location"</th>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"Urgency"</th>
                        <th>"Status"</th>
                        {on_advance.is_some().then(|| view! { <th></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            view! {
                                <tr>
                                    <td colspan=columns.clone() class="text-center py-8">
                                        <span class="loading loading-dots loading-md"></span>
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else if board.with(|b| b.is_empty()) {
                            // A failed first load has nothing to report on
                            let text = if board.with(|b| b.is_loaded()) { "No complaints found." } else { "" };
                            view! {
                                <tr>
                                    <td colspan=columns.clone() class="text-center py-8 text-base-content/50">
                                        {text}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            board
                                .with(|b| b.complaints().to_vec())
                                .into_iter()
                                .map(|c| row(board, c, show_owner, on_advance))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
        <div class="join flex justify-center p-4">
            <button
                class="join-item btn"
                disabled=move || loading.get() || !board.with(|b| b.has_prev())
                on:click=move |_| on_page.run(page().saturating_sub(1).max(1))
            >
                "«"
            </button>
            <button class="join-item btn btn-disabled">"Page " {page}</button>
            <button
                class="join-item btn"
                disabled=move || loading.get() || !board.with(|b| b.has_next())
                on:click=move |_| on_page.run(page() + 1)
            >
                "»"
            </button>
        </div>
    }
}
