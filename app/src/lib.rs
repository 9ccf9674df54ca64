use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod components;
pub mod config;
pub mod hooks;
pub mod store;

pub use components::*;
pub use config::AppConfig;
pub use store::{CounterStore, Subscription};

#[component]
pub fn App(
    cx: Scope,
    #[prop(optional)] config: AppConfig,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context(cx);

    let store = CounterStore::new();
    let title = config.title;
    let home = move |cx: Scope| view! { cx, <HomePage title=title store=store.clone()/> };

    view! { cx,
        <Title text=title/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=home.clone()/>
                    <Route path="/*any" view=home/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage(cx: Scope, title: &'static str, store: CounterStore) -> impl IntoView {
    view! { cx,
        <h1>{title}</h1>
        <Counter store=store/>
    }
}
