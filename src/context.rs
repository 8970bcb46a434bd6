//! Registration state shared between the landing page and the modal.
//!
//! The page's call-to-action buttons only open the modal; the modal owns
//! the rest of the workflow. Both reach the same `RegistrationForm`
//! through context instead of threading callbacks down every section.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::registration::form::{RegistrationAction, RegistrationForm, Submission};
use crate::registration::transport::post_registration;

pub type RegistrationContext = UseReducerHandle<RegistrationForm>;

#[derive(Properties, PartialEq)]
pub struct RegistrationProviderProps {
    pub children: Children,
}

#[function_component(RegistrationProvider)]
pub fn registration_provider(props: &RegistrationProviderProps) -> Html {
    let form = use_reducer(RegistrationForm::default);

    // A refused Submit leaves `pending` untouched, so nothing posts twice
    {
        let pending = form.pending().cloned();
        let form = form.clone();
        use_effect_with_deps(
            move |pending: &Option<Submission>| {
                if let Some(submission) = pending.clone() {
                    spawn_local(async move {
                        let outcome = post_registration(&submission.payload).await;
                        form.dispatch(RegistrationAction::Finished {
                            attempt: submission.attempt,
                            outcome,
                        });
                    });
                }
                || ()
            },
            pending,
        );
    }

    {
        let hold = form.success_hold();
        let form = form.clone();
        use_effect_with_deps(
            move |hold: &Option<u32>| {
                let timeout = (*hold).map(|attempt| {
                    Timeout::new(config::SUCCESS_DISPLAY_MS, move || {
                        form.dispatch(RegistrationAction::SuccessElapsed(attempt));
                    })
                });
                move || drop(timeout)
            },
            hold,
        );
    }

    html! {
        <ContextProvider<RegistrationContext> context={form}>
            { for props.children.iter() }
        </ContextProvider<RegistrationContext>>
    }
}

/// Handle to the registration state. Must be used below a
/// `RegistrationProvider`.
#[hook]
pub fn use_registration() -> RegistrationContext {
    use_context::<RegistrationContext>().expect("RegistrationProvider missing from the component tree")
}
