//! Grievance Net 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `context`: the portal (session, services, gate) shared by all pages
//! - `web::router`: History API router that gates every page entry
//! - `components`: reusable inputs, feedback and tables
//! - `pages`: one component per route

mod context;
mod components {
    pub mod complaint_table;
    pub mod feedback;
    pub mod fields;
    pub mod nav_bar;
}
mod pages {
    pub mod auth;
    pub mod complaint;
    pub mod dashboard;
    pub mod home;
}

use crate::components::nav_bar::NavBar;
use crate::context::PortalContext;
use crate::pages::auth::AuthPage;
use crate::pages::complaint::ComplaintPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use grievance_client::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Auth => view! { <AuthPage /> }.into_any(),
        AppRoute::Complaint => view! { <ComplaintPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(PortalContext::new());

    view! {
        <Router>
            <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
                <div class="max-w-7xl mx-auto space-y-8">
                    <NavBar />
                    <RouterOutlet matcher=route_matcher />
                </div>
            </div>
        </Router>
    }
}
