use leptos::*;

use crate::hooks::use_counter;
use crate::store::CounterStore;

/// Shows the store's count and a button that increments it.
#[component]
pub fn Counter(
    cx: Scope,
    /// Store the counter reads from and forwards clicks to.
    store: CounterStore,
) -> impl IntoView {
    let (count, increment) = use_counter(cx, store);

    view! { cx,
        <div class="counter">
            <p>"Count: "<span class="count">{move || display_count(count.get())}</span></p>
            <button on:click=move |_| increment()>"Increment"</button>
        </div>
    }
}

/// Text rendered for a given count.
pub fn display_count(count: i64) -> String {
    count.to_string()
}
