use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::context::use_registration;
use crate::registration::draft::{FieldUpdate, PitchDeck};
use crate::registration::form::{RegistrationAction, SubmissionPhase};

#[function_component(RegistrationModal)]
pub fn registration_modal() -> Html {
    let form = use_registration();

    if !form.is_open {
        return html! {};
    }

    let phase = form.phase;

    let on_backdrop = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            // Backdrop stays inert while the success message is up
            if form.phase != SubmissionPhase::Succeeded {
                form.dispatch(RegistrationAction::Dismiss);
            }
        })
    };

    let on_close = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(RegistrationAction::Dismiss))
    };

    let stop_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = if phase == SubmissionPhase::Succeeded {
        html! {
            <div class="register-success">
                <div class="register-success__icon">{"✔"}</div>
                <h2>{"SUCCESS!"}</h2>
                <p class="register-success__lead">{"Your registration has been submitted."}</p>
                <p>{"Check your email for confirmation and next steps."}</p>
            </div>
        }
    } else {
        html! { <RegistrationFields /> }
    };

    html! {
        <div class="register-backdrop" onclick={on_backdrop}>
            <div class="register-modal" onclick={stop_click}>
                if phase != SubmissionPhase::Submitting {
                    <button class="register-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                }
                { body }
            </div>
            <style>{REGISTRATION_CSS}</style>
        </div>
    }
}

#[function_component(RegistrationFields)]
fn registration_fields() -> Html {
    let form = use_registration();
    let submitting = form.phase == SubmissionPhase::Submitting;

    let on_text = |update: fn(String) -> FieldUpdate| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(RegistrationAction::Update(update(input.value())));
        })
    };

    let on_members = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(RegistrationAction::Update(FieldUpdate::Members(input.value())));
        })
    };

    let on_agree = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(RegistrationAction::Update(FieldUpdate::Agree(input.checked())));
        })
    };

    let on_file = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                form.dispatch(RegistrationAction::Attach(PitchDeck::from(&file)));
            }
            // Lets the same file be picked again after a rejection
            input.set_value("");
        })
    };

    let on_remove_file = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(RegistrationAction::ClearFile))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            form.dispatch(RegistrationAction::Submit);
        })
    };

    let draft = &form.draft;
    let retrying = form.error.as_ref().map_or(false, |e| e.is_retryable());

    html! {
        <>
            <div class="register-header">
                <span class="register-header__icon">{"🚀"}</span>
                <h2>{"REGISTER NOW"}</h2>
            </div>

            <div class="register-inputs">
                <input
                    type="text"
                    name="teamName"
                    placeholder="Team Name *"
                    value={draft.team_name.clone()}
                    oninput={on_text(FieldUpdate::TeamName)}
                />
                <input
                    type="text"
                    name="leaderName"
                    placeholder="Team Leader Name *"
                    value={draft.leader_name.clone()}
                    oninput={on_text(FieldUpdate::LeaderName)}
                />
                <input
                    type="tel"
                    name="phone"
                    placeholder="Phone Number (WhatsApp) *"
                    value={draft.phone.clone()}
                    oninput={on_text(FieldUpdate::Phone)}
                />
                <textarea
                    name="members"
                    rows="3"
                    placeholder="Team Members (Optional) e.g., John Doe, Priya Sharma (Leave blank if solo)"
                    value={draft.members.clone()}
                    oninput={on_members}
                />
            </div>

            <div class="register-upload">
                <label class="register-upload__title">
                    {"Upload Your Pitch Deck (PDF or PPT, Max 100MB) *"}
                </label>
                {
                    if let Some(deck) = &draft.pitch_deck {
                        html! {
                            <div class="register-upload__file">
                                <span class="register-upload__name">{"📄 "}{&deck.name}</span>
                                <button type="button" class="register-upload__remove" aria-label="Remove file" onclick={on_remove_file}>
                                    {"✕"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <input
                                    type="file"
                                    id="pitchDeckUpload"
                                    class="register-upload__input"
                                    accept=".pdf,.ppt,.pptx"
                                    onchange={on_file}
                                />
                                <label for="pitchDeckUpload" class="register-upload__drop">
                                    <span class="register-upload__arrow">{"⬆"}</span>
                                    <span>{"Click to upload your pitch deck"}</span>
                                </label>
                            </>
                        }
                    }
                }
                <p class="register-upload__hint">
                    {"Must include: Problem, Solution, Market Gap, Revenue Strategy, Target Customers"}
                </p>
            </div>

            <div class="register-agree">
                <input
                    type="checkbox"
                    name="agree"
                    id="agree"
                    checked={draft.agree}
                    onchange={on_agree}
                />
                <label for="agree">
                    {"I agree to share my data for event communication & participation certificate delivery. *"}
                </label>
            </div>

            <button
                class="register-submit"
                disabled={!form.can_submit()}
                onclick={on_submit}
            >
                {
                    if submitting {
                        html! { <><span class="loading-spinner"></span>{" SUBMITTING..."}</> }
                    } else if retrying {
                        html! { <>{"RETRY REGISTRATION"}</> }
                    } else {
                        html! { <>{"SUBMIT REGISTRATION"}</> }
                    }
                }
            </button>

            if let Some(error) = &form.error {
                <p class="register-error">{error.to_string()}</p>
            }
        </>
    }
}

const REGISTRATION_CSS: &str = r#"
.register-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(6px);
    animation: fadeIn 0.3s ease-out;
}
.register-modal {
    position: relative;
    width: 100%;
    max-width: 36rem;
    max-height: 90vh;
    overflow-y: auto;
    padding: 2.5rem 2rem;
    background: linear-gradient(135deg, rgba(17, 24, 39, 0.95), rgba(49, 46, 129, 0.9));
    border: 2px solid rgba(250, 204, 21, 0.3);
    border-radius: 1.5rem;
    box-shadow: 0 0 60px rgba(250, 204, 21, 0.2);
    animation: popIn 0.4s ease-out;
}
.register-close {
    position: absolute;
    top: 1rem;
    right: 1.25rem;
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    font-size: 2rem;
    cursor: pointer;
}
.register-close:hover { color: #fff; }
.register-header {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    margin-bottom: 2rem;
}
.register-header h2,
.register-success h2 {
    font-size: 2.25rem;
    font-weight: 900;
    background: linear-gradient(90deg, #facc15, #f97316);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.register-inputs {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.register-inputs input,
.register-inputs textarea {
    width: 100%;
    padding: 0.9rem 1.1rem;
    background: rgba(0, 0, 0, 0.4);
    border: 2px solid rgba(34, 211, 238, 0.3);
    border-radius: 0.75rem;
    color: #fff;
    font-size: 1rem;
    resize: vertical;
}
.register-inputs input:focus,
.register-inputs textarea:focus {
    outline: none;
    border-color: #facc15;
}
.register-upload {
    margin-top: 1.5rem;
}
.register-upload__title {
    display: block;
    margin-bottom: 0.75rem;
    color: #22d3ee;
    font-weight: 700;
}
.register-upload__input {
    display: none;
}
.register-upload__drop {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    padding: 1.5rem;
    border: 2px dashed rgba(34, 211, 238, 0.5);
    border-radius: 0.75rem;
    color: rgba(255, 255, 255, 0.8);
    cursor: pointer;
}
.register-upload__drop:hover { border-color: #facc15; }
.register-upload__arrow { font-size: 2rem; color: #22d3ee; }
.register-upload__file {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem;
    background: rgba(34, 197, 94, 0.15);
    border: 2px solid rgba(74, 222, 128, 0.5);
    border-radius: 0.75rem;
}
.register-upload__name {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
    color: #bbf7d0;
}
.register-upload__remove {
    background: rgba(239, 68, 68, 0.2);
    border: none;
    border-radius: 0.5rem;
    color: #f87171;
    padding: 0.25rem 0.6rem;
    cursor: pointer;
}
.register-upload__hint {
    margin-top: 0.5rem;
    font-size: 0.85rem;
    color: rgba(255, 255, 255, 0.6);
}
.register-agree {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    margin: 1.5rem 0;
    color: rgba(255, 255, 255, 0.85);
    font-size: 0.9rem;
}
.register-agree input { margin-top: 0.2rem; width: 1.1rem; height: 1.1rem; }
.register-submit {
    width: 100%;
    padding: 1rem;
    border: none;
    border-radius: 0.75rem;
    background: linear-gradient(90deg, #facc15, #f97316);
    color: #000;
    font-size: 1.1rem;
    font-weight: 900;
    cursor: pointer;
    transition: transform 0.2s;
}
.register-submit:hover:not(:disabled) { transform: scale(1.02); }
.register-submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.register-error {
    margin-top: 1rem;
    text-align: center;
    color: #f87171;
    font-weight: 600;
}
.register-success {
    text-align: center;
    padding: 2rem 0;
}
.register-success__icon {
    font-size: 4rem;
    color: #4ade80;
    animation: bounce 1s infinite;
}
.register-success__lead {
    font-size: 1.25rem;
    color: #fff;
    margin-bottom: 0.5rem;
}
.register-success p { color: rgba(255, 255, 255, 0.75); }
.loading-spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(0, 0, 0, 0.3);
    border-radius: 50%;
    border-top-color: #000;
    animation: spin 1s ease-in-out infinite;
    vertical-align: middle;
}
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes popIn {
    from { opacity: 0; transform: scale(0.8) translateY(50px); }
    to { opacity: 1; transform: scale(1) translateY(0); }
}
@media (max-width: 768px) {
    .register-modal { padding: 2rem 1.25rem; }
    .register-header h2, .register-success h2 { font-size: 1.75rem; }
}
"#;
