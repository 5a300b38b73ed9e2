//! 投诉提交页面

use crate::components::feedback::Notice;
use crate::components::fields::{SelectInput, TextArea, TextInput};
use crate::context::use_portal;
use crate::web::router::use_router;
use grievance_client::AppRoute;
use grievance_client::form::{ComplaintField, FormController, complaint_schema};
use grievance_shared::URGENCY_CHOICES;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ComplaintPage() -> impl IntoView {
    let ctx = use_portal();
    let router = use_router();
    let form = RwSignal::new(FormController::new(complaint_schema()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(values) = form.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        let portal = ctx.portal();
        spawn_local(async move {
            let result = portal.submit_complaint(&values).await;
            form.update(|c| c.finish_submit(&result));
            if let Ok(receipt) = result {
                web_sys::console::log_1(
                    &format!(
                        "[Complaint] Filed as {:?} with urgency {:?}",
                        receipt.predicted_category, receipt.assigned_urgency
                    )
                    .into(),
                );
                form.update(|c| c.reset());
                router.navigate(AppRoute::Home);
            }
        });
    };

    let loading = move || form.with(|c| c.is_loading());

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <form class="card-body" on:submit=on_submit novalidate>
                <h3 class="card-title">"Report an Issue"</h3>
                <p class="text-base-content/70 text-sm">
                    "Describe the problem. It will be categorised and routed automatically."
                </p>
                <Notice message=Signal::derive(move || form.with(|c| c.notice().map(str::to_string))) />
                <TextInput
                    form=form
                    field=ComplaintField::Location
                    label="Location"
                    placeholder="Street, ward or landmark"
                />
                <TextArea
                    form=form
                    field=ComplaintField::Description
                    label="Description"
                    placeholder="What happened?"
                />
                <SelectInput
                    form=form
                    field=ComplaintField::Urgency
                    label="Urgency"
                    choices=&URGENCY_CHOICES
                    empty_label="Let the system decide"
                />
                <div class="form-control mt-6">
                    <button type="submit" class="btn btn-primary" disabled=loading>
                        {move || {
                            if loading() {
                                view! { <span class="loading loading-spinner"></span> "Submitting..." }
                                    .into_any()
                            } else {
                                "Submit Complaint".into_any()
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
