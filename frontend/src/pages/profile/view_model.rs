use super::{repository, utils::ProfileFormState};
use crate::{
    api::ApiError,
    components::error::MessageState,
    state::auth::{use_session, SessionContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub session: SessionContext,
    pub form: RwSignal<ProfileFormState>,
    pub editing: RwSignal<bool>,
    pub messages: RwSignal<MessageState>,
    pub save_action: Action<ProfileFormState, Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn start_editing(&self) {
        if let Some(user) = self.session.user_untracked() {
            self.form.set(ProfileFormState::from_session(&user));
        }
        self.messages.update(MessageState::clear);
        self.editing.set(true);
    }

    pub fn cancel(&self) {
        self.editing.set(false);
    }

    pub fn submit(&self) {
        self.messages.update(MessageState::clear);
        self.save_action.dispatch(self.form.get_untracked());
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let session = use_session();
    let initial = session
        .user_untracked()
        .map(|user| ProfileFormState::from_session(&user))
        .unwrap_or_default();
    let form = create_rw_signal(initial);
    let editing = create_rw_signal(false);
    let messages = create_rw_signal(MessageState::default());

    let save_action = create_action(move |state: &ProfileFormState| {
        let state = state.clone();
        let client = session.api();
        let user_id = session
            .user_untracked()
            .map(|user| user.user_id)
            .unwrap_or_default();
        async move { repository::update_profile(client, user_id, state).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            messages.update(|state| state.set_result(&result, "Profile updated successfully!"));
            if result.is_ok() {
                editing.set(false);
                form.update(|state| {
                    state.current_password.clear();
                    state.new_password.clear();
                    state.confirm_password.clear();
                });
            }
        }
    });

    ProfileViewModel {
        session,
        form,
        editing,
        messages,
        save_action,
    }
}
