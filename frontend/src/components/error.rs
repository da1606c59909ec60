use crate::{
    api::ApiError,
    components::layout::{ErrorMessage, SuccessMessage},
};
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let errors = e
                        .details
                        .as_ref()
                        .and_then(|details| details.get("errors"))
                        .and_then(|v| v.as_array())
                        .cloned();
                    match errors {
                        Some(errors) if e.code == "VALIDATION_ERROR" => view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|err| {
                                    view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        _ => ().into_view(),
                    }
                })}
            </div>
        </Show>
    }
}

/// Outcome banner state shared by the form screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn set_result<T>(&mut self, result: &Result<T, ApiError>, success: &str) {
        match result {
            Ok(_) => self.set_success(success),
            Err(err) => self.set_error(err.error.clone()),
        }
    }
}

#[component]
pub fn FormMessages(messages: RwSignal<MessageState>) -> impl IntoView {
    view! {
        {move || messages.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
        {move || messages.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
    }
}
