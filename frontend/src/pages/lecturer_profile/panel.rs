use leptos::*;

use super::{
    utils::{ProfileField, ProfileForm},
    view_model::{use_profile_view_model, ProfileViewModel},
};
use crate::{
    components::{
        image::FallbackImage,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
        table::display_or_na,
    },
    pages::shared::Message,
    reconcile::{Editable, LoadState},
    utils::file::on_file_selected,
};

#[component]
pub fn LecturerProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();

    view! {
        <Layout>
            {move || match vm.profile.get() {
                LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
                LoadState::Failed(error) => view! {
                    <ErrorMessage message=format!("Could not load your profile: {}", error) />
                }
                .into_view(),
                LoadState::Ready(_) => view! { <ProfileEditor vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn ProfileEditor(vm: ProfileViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.save_action.pending();
    let image_src = Signal::derive(move || {
        form.with(|form| {
            form.current()
                .image
                .as_ref()
                .map(|image| image.src())
                .unwrap_or_default()
        })
    });
    let on_pick = move |ev: ev::Event| {
        on_file_selected(&ev, move |file| {
            form.update(|form| form.edit(|current| current.pick_image(file)))
        })
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-6 max-w-2xl" on:submit=on_submit>
            <StatusMessage vm=vm />
            <div class="flex items-center gap-4">
                <FallbackImage src=image_src alt="Profile picture" class="h-24 w-24 rounded-full object-cover" />
                <input type="file" accept="image/*" on:change=on_pick />
            </div>
            <ReadOnlyDetails form=form />
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {ProfileField::EDITABLE
                    .into_iter()
                    .map(|field| view! { <ProfileInput field=field form=form /> })
                    .collect_view()}
            </div>
            <div class="flex gap-3">
                <button
                    type="submit"
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    "Save changes"
                </button>
                <button
                    type="button"
                    class="rounded-md border border-border px-4 py-2 text-sm"
                    disabled=move || !form.with(Editable::is_dirty)
                    on:click=move |_| vm.discard()
                >
                    "Discard"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ProfileInput(field: ProfileField, form: RwSignal<Editable<ProfileForm>>) -> impl IntoView {
    view! {
        <label class="block text-sm">
            <span class="text-fg-muted">{field.label()}</span>
            <input
                type=field.input_type()
                class="mt-1 w-full rounded-md border border-border px-3 py-2"
                prop:value=move || form.with(|form| field.get(form.current()).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|form| form.edit(|current| field.set(current, value)));
                }
            />
        </label>
    }
}

#[component]
fn ReadOnlyDetails(form: RwSignal<Editable<ProfileForm>>) -> impl IntoView {
    let baseline = move || form.with(|form| form.baseline().clone());
    view! {
        <dl class="grid grid-cols-2 gap-2 text-sm">
            <dt class="text-fg-muted">"Email"</dt>
            <dd>{move || display_or_na(Some(baseline().email.as_str()))}</dd>
            <dt class="text-fg-muted">"Department"</dt>
            <dd>{move || display_or_na(Some(baseline().department.as_str()))}</dd>
        </dl>
    }
}

#[component]
fn StatusMessage(vm: ProfileViewModel) -> impl IntoView {
    move || match vm.message.get() {
        Some(Message::Success(text)) => view! { <SuccessMessage message=text /> }.into_view(),
        Some(Message::Error(text)) => view! { <ErrorMessage message=text /> }.into_view(),
        None => ().into_view(),
    }
}
