use leptos::*;

use super::view_model::use_login_view_model;
use crate::components::layout::ErrorMessage;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Sign in to the Campus Portal"</h2>
                {move || vm.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        id="email"
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || vm.password.get()
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="w-full rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
