//! 表单输入组件
//!
//! Each input is bound to one field of a [`FormController`] held in a signal:
//! input events feed `on_field_change`, blur feeds `on_field_blur`, and the
//! field's message shows once it was touched.

use grievance_client::form::{FormController, FormField};
use leptos::prelude::*;

fn input_class(base: &'static str, has_error: bool) -> String {
    if has_error {
        format!("{} {}-error w-full", base, base)
    } else {
        format!("{} w-full", base)
    }
}

#[component]
fn FieldError<F: FormField>(form: RwSignal<FormController<F>>, field: F) -> impl IntoView {
    move || {
        form.with(|c| c.visible_error(field))
            .map(|msg| view! { <p class="text-error text-sm mt-1">{msg}</p> })
    }
}

/// Text, email or password input. Password inputs get a show/hide toggle.
#[component]
pub fn TextInput<F: FormField>(
    form: RwSignal<FormController<F>>,
    field: F,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let name = field.name();
    let is_password = input_type == "password";
    let (revealed, set_revealed) = signal(false);
    let has_error = move || form.with(|c| c.visible_error(field).is_some());

    let toggle = is_password.then(|| {
        view! {
            <button
                type="button"
                class="btn btn-ghost join-item"
                on:click=move |_| set_revealed.update(|r| *r = !*r)
            >
                {move || if revealed.get() { "Hide" } else { "Show" }}
            </button>
        }
    });

    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{label}</span>
            </label>
            <div class="join w-full">
                <input
                    id=name
                    name=name
                    type=move || if is_password && revealed.get() { "text" } else { input_type }
                    placeholder=placeholder
                    class=move || input_class("input input-bordered join-item", has_error())
                    prop:value=move || form.with(|c| c.value(field).to_string())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|c| c.on_field_change(field, raw));
                    }
                    on:blur=move |_| form.update(|c| c.on_field_blur(field))
                />
                {toggle}
            </div>
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
pub fn TextArea<F: FormField>(
    form: RwSignal<FormController<F>>,
    field: F,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let name = field.name();
    let has_error = move || form.with(|c| c.visible_error(field).is_some());

    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{label}</span>
            </label>
            <textarea
                id=name
                name=name
                rows="5"
                placeholder=placeholder
                class=move || input_class("textarea textarea-bordered", has_error())
                prop:value=move || form.with(|c| c.value(field).to_string())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|c| c.on_field_change(field, raw));
                }
                on:blur=move |_| form.update(|c| c.on_field_blur(field))
            ></textarea>
            <FieldError form=form field=field />
        </div>
    }
}

/// Drop-down over fixed choices; an empty choice is shown as `empty_label`.
#[component]
pub fn SelectInput<F: FormField>(
    form: RwSignal<FormController<F>>,
    field: F,
    label: &'static str,
    choices: &'static [&'static str],
    empty_label: &'static str,
) -> impl IntoView {
    let name = field.name();
    let has_error = move || form.with(|c| c.visible_error(field).is_some());

    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{label}</span>
            </label>
            <select
                id=name
                name=name
                class=move || input_class("select select-bordered", has_error())
                prop:value=move || form.with(|c| c.value(field).to_string())
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|c| c.on_field_change(field, raw));
                }
                on:blur=move |_| form.update(|c| c.on_field_blur(field))
            >
                {choices
                    .iter()
                    .map(|choice| {
                        let text = if choice.is_empty() { empty_label } else { *choice };
                        view! { <option value=*choice>{text}</option> }
                    })
                    .collect_view()}
            </select>
            <FieldError form=form field=field />
        </div>
    }
}
