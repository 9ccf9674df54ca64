use leptos::*;

use crate::store::CounterStore;

/// Binds a component scope to `store`.
///
/// Subscribes for as long as `cx` lives and mirrors every notification into
/// the returned signal. The callback is the only way the view changes the
/// count.
pub fn use_counter(
    cx: Scope,
    store: CounterStore,
) -> (ReadSignal<i64>, impl Fn() + Clone + 'static) {
    let (count, set_count) = create_signal(cx, store.get_count());

    let subscription = store.subscribe(move |value| set_count.set(value));
    on_cleanup(cx, move || subscription.unsubscribe());

    (count, move || store.increment())
}
