//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API。每次进入页面（导航、后退/前进、首次加载）
//! 都会先运行会话守卫，守卫放行后才渲染页面。

use crate::components::feedback::Loading;
use crate::context::{PortalContext, use_portal};
use grievance_client::service::page_from_query;
use grievance_client::{AppRoute, GateDecision};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Page requested by the `?page=` query, the first one if absent.
pub fn current_page() -> u32 {
    page_from_query(&current_search())
}

/// Records the page being viewed so reload and back keep it.
pub fn set_page_query(route: AppRoute, page: u32) {
    replace_history_state(&format!("{}?page={}", route.to_path(), page));
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Used for redirects so the guarded page never lands in history.
fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Whether the current route passed its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Checking,
    Ready,
}

/// 路由器服务
#[derive(Clone, Copy)]
pub struct RouterService {
    portal: PortalContext,
    current_route: RwSignal<AppRoute>,
    gate_state: RwSignal<GateState>,
    // Bumped on every entry; a gate answer for an older entry is dropped.
    generation: StoredValue<u64>,
}

impl RouterService {
    fn new(portal: PortalContext) -> Self {
        Self {
            portal,
            current_route: RwSignal::new(AppRoute::from_path(&current_path())),
            gate_state: RwSignal::new(GateState::Checking),
            generation: StoredValue::new(0),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    pub fn navigate(&self, route: AppRoute) {
        push_history_state(route.to_path());
        self.enter(route);
    }

    /// Shows `route` once its gate lets the visitor through.
    fn enter(&self, route: AppRoute) {
        let generation = self.generation.with_value(|g| g + 1);
        self.generation.set_value(generation);
        self.gate_state.set(GateState::Checking);
        self.current_route.set(route);

        let router = *self;
        let portal = self.portal.portal();
        spawn_local(async move {
            let decision = portal.guard(route).await;
            if router.generation.get_value() != generation {
                return;
            }
            match decision {
                GateDecision::Proceed => router.gate_state.set(GateState::Ready),
                GateDecision::Redirect(target) => {
                    web_sys::console::log_1(
                        &format!("[Router] {} denied, redirecting to {}", route, target).into(),
                    );
                    replace_history_state(target.to_path());
                    router.enter(target);
                }
            }
        });
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.enter(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new(use_portal());
    router.init_popstate_listener();
    provide_context(router);

    // "/" is shown as "/home"; the query survives
    let initial = router.current_route.get_untracked();
    replace_history_state(&format!("{}{}", initial.to_path(), current_search()));
    router.enter(initial);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 路由出口组件
///
/// Renders the matched page after its gate passed, a spinner before.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || match router.gate_state.get() {
        GateState::Checking => view! { <Loading /> }.into_any(),
        GateState::Ready => matcher(router.current_route.get()),
    }
}

/// In-app link that goes through the router.
#[component]
pub fn Link(route: AppRoute, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(route);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
