use leptos::*;

/// Free-text filter box bound to the active term; reports every keystroke.
#[component]
pub fn SearchBox(
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            placeholder=placeholder
            class="w-full rounded-md border border-border px-3 py-2 text-sm"
            value=value.get_untracked()
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}
