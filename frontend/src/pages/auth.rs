//! 登录 / 注册页面
//!
//! One page, two stages. A successful registration switches to the login
//! stage with the email already filled in.

use crate::components::feedback::Notice;
use crate::components::fields::TextInput;
use crate::context::use_portal;
use crate::web::router::use_router;
use grievance_client::form::{
    FormController, LoginField, RegisterField, login_schema, register_schema,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Login,
    Register,
}

#[component]
fn SubmitButton(#[prop(into)] loading: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <div class="form-control mt-6">
            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                {move || {
                    if loading.get() {
                        view! { <span class="loading loading-spinner"></span> "Please wait..." }
                            .into_any()
                    } else {
                        label.into_any()
                    }
                }}
            </button>
        </div>
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_portal();
    let router = use_router();

    let stage = RwSignal::new(Stage::Login);
    let registered = RwSignal::new(false);
    let login = RwSignal::new(FormController::new(login_schema()));
    let register = RwSignal::new(FormController::new(register_schema()));

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(values) = login.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        let portal = ctx.portal();
        spawn_local(async move {
            let result = portal.login(&values).await;
            login.update(|c| c.finish_submit(&result));
            if let Ok(landing) = result {
                ctx.sync_session();
                router.navigate(landing);
            }
        });
    };

    let on_register = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(values) = register.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        let portal = ctx.portal();
        spawn_local(async move {
            let result = portal.register(&values).await;
            register.update(|c| c.finish_submit(&result));
            if let Ok(email) = result {
                register.update(|c| c.reset());
                login.update(|c| {
                    c.reset();
                    c.set_value(LoginField::Email, email);
                });
                registered.set(true);
                stage.set(Stage::Login);
            }
        });
    };

    let switch_to = move |next: Stage| {
        registered.set(false);
        stage.set(next);
    };

    let login_view = move || {
        view! {
            <form class="card-body" on:submit=on_login novalidate>
                <Show when=move || registered.get()>
                    <div role="status" class="alert alert-success text-sm py-2">
                        <span>"Registration successful. Please log in."</span>
                    </div>
                </Show>
                <Notice message=Signal::derive(move || login.with(|c| c.notice().map(str::to_string))) />
                <TextInput form=login field=LoginField::Email label="Email" input_type="email" />
                <TextInput form=login field=LoginField::Password label="Password" input_type="password" />
                <SubmitButton loading=Signal::derive(move || login.with(|c| c.is_loading())) label="Login" />
                <p class="text-sm text-center mt-2">
                    "Don't have an account? "
                    <a class="link link-primary" on:click=move |_| switch_to(Stage::Register)>
                        "Register"
                    </a>
                </p>
            </form>
        }
    };

    let register_view = move || {
        view! {
            <form class="card-body" on:submit=on_register novalidate>
                <Notice message=Signal::derive(move || register.with(|c| c.notice().map(str::to_string))) />
                <TextInput form=register field=RegisterField::Name label="Name" />
                <TextInput form=register field=RegisterField::Email label="Email" input_type="email" />
                <TextInput form=register field=RegisterField::Password label="Password" input_type="password" />
                <TextInput
                    form=register
                    field=RegisterField::ConfirmPassword
                    label="Confirm Password"
                    input_type="password"
                />
                <SubmitButton loading=Signal::derive(move || register.with(|c| c.is_loading())) label="Register" />
                <p class="text-sm text-center mt-2">
                    "Already have an account? "
                    <a class="link link-primary" on:click=move |_| switch_to(Stage::Login)>
                        "Login"
                    </a>
                </p>
            </form>
        }
    };

    view! {
        <div class="hero min-h-[80vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">
                        {move || match stage.get() {
                            Stage::Login => "Welcome back",
                            Stage::Register => "Create an account",
                        }}
                    </h1>
                    <p class="text-base-content/70">"Report civic issues and follow their progress"</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    {move || match stage.get() {
                        Stage::Login => login_view().into_any(),
                        Stage::Register => register_view().into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
