#![cfg(feature = "ssr")]

use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};
use porcana_app::{App, Counter, CounterStore};
use pretty_assertions::assert_eq;

/// Visible text of rendered markup, with tags and hydration comments removed.
fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// Text inside the `<span class="count">` element.
fn displayed_count(html: &str) -> String {
    let start = html.find("class=\"count\"").expect("count span rendered");
    let rest = &html[start..];
    let open = rest.find('>').expect("count span closes its start tag") + 1;
    let close = rest.find("</span>").expect("count span closed");
    text_content(&rest[open..close])
}

fn render_app_at(path: &str) -> String {
    let url = format!("http://localhost{path}");
    leptos::ssr::render_to_string(move |cx| {
        provide_context(cx, RouterIntegrationContext::new(ServerIntegration { path: url }));
        view! { cx, <App/> }
    })
}

#[test]
fn root_renders_counter_at_zero() {
    let html = render_app_at("/");
    let text = text_content(&html);

    assert!(text.contains("Porcana Frontend"), "{text}");
    assert!(text.contains("Count: 0"), "{text}");
    assert_eq!(displayed_count(&html), "0");
    assert!(html.contains("<button"), "{html}");
    assert!(text.contains("Increment"), "{text}");
}

#[test]
fn every_path_renders_the_counter() {
    for path in ["/decks", "/cards/7", "/users/me/settings"] {
        let text = text_content(&render_app_at(path));
        assert!(text.contains("Porcana Frontend"), "{path}: {text}");
        assert!(text.contains("Count: 0"), "{path}: {text}");
        assert!(text.contains("Increment"), "{path}: {text}");
    }
}

#[test]
fn counter_renders_current_store_value() {
    for n in [0, 1, 4, 12] {
        let store = CounterStore::new();
        for _ in 0..n {
            store.increment();
        }

        let html = leptos::ssr::render_to_string(move |cx| view! { cx, <Counter store=store/> });
        assert_eq!(displayed_count(&html), n.to_string());
        assert!(text_content(&html).contains("Increment"), "{html}");
    }
}
