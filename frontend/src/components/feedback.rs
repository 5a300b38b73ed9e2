use leptos::prelude::*;

/// Full-screen spinner shown while a page is gated or loading.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// Error banner; renders nothing without a message.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                    <span>{text}</span>
                </div>
            }
        })
    }
}
