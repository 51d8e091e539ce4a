use leptos::*;

use super::{repository, utils::ProfileForm};
use crate::{
    api::{ApiClient, ApiError, Profile, ProfileUpdate},
    pages::shared::{Message, MessageState},
    reconcile::{Editable, LoadState},
    tasks::ViewLifetime,
};

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub profile: RwSignal<LoadState<Profile>>,
    pub form: RwSignal<Editable<ProfileForm>>,
    pub message: RwSignal<MessageState>,
    pub save_action: Action<ProfileUpdate, Result<Profile, ApiError>>,
}

impl ProfileViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let form = self.form.with_untracked(|form| form.current().clone());
        if let Err(msg) = form.validate() {
            self.message.set(Some(Message::Error(msg)));
            return;
        }
        self.message.set(None);
        self.save_action.dispatch(form.to_update());
    }

    pub fn discard(&self) {
        self.form.update(Editable::discard);
        self.message.set(None);
    }
}

/// Fold a submit result into the form. Returns the status line to show.
pub fn apply_save_result(
    form: &mut Editable<ProfileForm>,
    result: Result<Profile, ApiError>,
) -> Option<Message> {
    match result {
        Ok(saved) => {
            form.commit_merged(saved, |current: &ProfileForm, saved: Profile| {
                current.merged_with(saved)
            });
            Some(Message::Success("Profile updated.".into()))
        }
        Err(ApiError::Cancelled) => None,
        Err(err) => Some(Message::Error(format!("Could not update profile: {}", err))),
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_context::<ApiClient>();
    let lifetime = ViewLifetime::attach();
    let profile = create_rw_signal(LoadState::Loading);
    let form = create_rw_signal(Editable::<ProfileForm>::default());
    let message = create_rw_signal(None);

    let save_action = create_action({
        let (api, lifetime) = (api.clone(), lifetime.clone());
        move |update: &ProfileUpdate| {
            let (api, lifetime, update) = (api.clone(), lifetime.clone(), update.clone());
            async move {
                let Some(api) = api else {
                    return Err(ApiError::MissingCredential);
                };
                lifetime.run(repository::save_profile(&api, update)).await
            }
        }
    });

    match api {
        Some(api) => {
            let resource = create_local_resource(|| (), move |_| {
                let (api, lifetime) = (api.clone(), lifetime.clone());
                async move { lifetime.run(repository::load_lecturer_profile(&api)).await }
            });
            create_effect(move |_| {
                if let Some(result) = resource.get() {
                    if let Ok(loaded) = &result {
                        form.set(Editable::new(ProfileForm::from_profile(loaded)));
                    }
                    profile.set(LoadState::from_result(result));
                }
            });
        }
        None => log::error!("ApiClient missing from context"),
    }

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            let status = form
                .try_update(|form| apply_save_result(form, result))
                .flatten();
            if status.is_some() {
                message.set(status);
            }
        }
    });

    ProfileViewModel {
        profile,
        form,
        message,
        save_action,
    }
}
