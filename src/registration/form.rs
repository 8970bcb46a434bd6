use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::registration::draft::{FieldUpdate, PitchDeck, RegistrationDraft};
use crate::registration::error::RegistrationError;
use crate::registration::payload::FormPayload;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// A validated draft ready to go over the wire, tagged with the attempt it
/// belongs to so late completions can be matched against current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u32,
    pub payload: FormPayload,
}

/// Everything the registration modal owns. All mutation goes through the
/// methods below; the UI only ever sees it through `RegistrationAction`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub draft: RegistrationDraft,
    pub phase: SubmissionPhase,
    pub error: Option<RegistrationError>,
    pub is_open: bool,
    attempt: u32,
    pending: Option<Submission>,
}

impl RegistrationForm {
    pub fn open(&mut self) {
        if !self.is_open {
            info!("Registration modal opened");
            self.is_open = true;
        }
    }

    /// Closes the modal and throws the draft away. A request in flight
    /// pins the modal open.
    pub fn dismiss(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            return;
        }
        if self.is_open {
            info!("Registration modal dismissed");
        }
        self.reset();
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// A rejected file leaves the previous attachment where it was.
    pub fn attach_file(&mut self, deck: PitchDeck) -> Result<(), RegistrationError> {
        if let Err(e) = deck.validate() {
            warn!("Rejected pitch deck ({} bytes, type {:?}): {}", deck.size, deck.mime_type, e);
            self.error = Some(e.clone());
            return Err(e);
        }
        self.draft.pitch_deck = Some(deck);
        self.error = None;
        Ok(())
    }

    /// Drops the attachment along with any rejection notice left over from
    /// an earlier pick.
    pub fn clear_file(&mut self) {
        self.draft.pitch_deck = None;
        if self.error.as_ref().map_or(false, |e| e.is_file_rejection()) {
            self.error = None;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Idle && self.draft.is_complete()
    }

    /// The accepted submission still waiting on the network. Set only by an
    /// `Idle -> Submitting` transition, so each value is posted exactly once.
    pub fn pending(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    /// Attempt whose success message is on screen, if any.
    pub fn success_hold(&self) -> Option<u32> {
        (self.phase == SubmissionPhase::Succeeded).then_some(self.attempt)
    }

    /// Runs the submit guards against the current draft without touching
    /// state. The deck check comes first, whatever else is filled in.
    fn prepare_submission(&self) -> Result<Submission, RegistrationError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(RegistrationError::AlreadySubmitting);
        }
        if self.draft.pitch_deck.is_none() {
            return Err(RegistrationError::MissingPitchDeck);
        }
        if let Some(label) = self.draft.first_missing_field() {
            return Err(RegistrationError::MissingField(label));
        }
        if !self.draft.agree {
            return Err(RegistrationError::AgreementRequired);
        }
        Ok(Submission {
            attempt: self.attempt + 1,
            payload: FormPayload::from_draft(&self.draft),
        })
    }

    /// Idle -> Submitting. On a failed guard the error is shown and the
    /// phase stays where it was.
    pub fn begin_submission(&mut self) -> Result<Submission, RegistrationError> {
        match self.prepare_submission() {
            Ok(submission) => {
                self.attempt = submission.attempt;
                self.phase = SubmissionPhase::Submitting;
                self.error = None;
                self.pending = Some(submission.clone());
                info!("Submitting registration, attempt {}", submission.attempt);
                Ok(submission)
            }
            Err(RegistrationError::AlreadySubmitting) => Err(RegistrationError::AlreadySubmitting),
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Submitting -> Succeeded | Idle. The draft survives a failure so the
    /// user can retry as is.
    pub fn finish_submission(&mut self, attempt: u32, outcome: Result<(), RegistrationError>) {
        if self.phase != SubmissionPhase::Submitting || attempt != self.attempt {
            return;
        }
        self.pending = None;
        match outcome {
            Ok(()) => {
                info!("Registration attempt {} accepted", attempt);
                self.phase = SubmissionPhase::Succeeded;
                self.error = None;
            }
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                self.error = Some(e);
            }
        }
    }

    /// End of the success hold. Stale timers from an earlier attempt are
    /// ignored.
    pub fn success_elapsed(&mut self, attempt: u32) {
        if self.phase == SubmissionPhase::Succeeded && attempt == self.attempt {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.draft = RegistrationDraft::default();
        self.phase = SubmissionPhase::Idle;
        self.error = None;
        self.is_open = false;
        self.pending = None;
    }
}

pub enum RegistrationAction {
    Open,
    Dismiss,
    Update(FieldUpdate),
    Attach(PitchDeck),
    ClearFile,
    Submit,
    Finished {
        attempt: u32,
        outcome: Result<(), RegistrationError>,
    },
    SuccessElapsed(u32),
}

impl Reducible for RegistrationForm {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegistrationAction::Open => next.open(),
            RegistrationAction::Dismiss => next.dismiss(),
            RegistrationAction::Update(update) => next.update_field(update),
            RegistrationAction::Attach(deck) => {
                let _ = next.attach_file(deck);
            }
            RegistrationAction::ClearFile => next.clear_file(),
            RegistrationAction::Submit => {
                let _ = next.begin_submission();
            }
            RegistrationAction::Finished { attempt, outcome } => {
                next.finish_submission(attempt, outcome)
            }
            RegistrationAction::SuccessElapsed(attempt) => next.success_elapsed(attempt),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_PITCH_DECK_BYTES;

    fn pdf(name: &str, size: u64) -> PitchDeck {
        PitchDeck::new(name, size, "application/pdf")
    }

    fn ready_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.open();
        form.update_field(FieldUpdate::TeamName("Null Pointers".into()));
        form.update_field(FieldUpdate::LeaderName("Sahana M".into()));
        form.update_field(FieldUpdate::Phone("+91 90000 00000".into()));
        form.update_field(FieldUpdate::Agree(true));
        form.attach_file(pdf("deck.pdf", 4_096)).unwrap();
        form
    }

    #[test]
    fn test_oversized_deck_keeps_previous_attachment() {
        let mut form = RegistrationForm::default();
        form.attach_file(pdf("first.pdf", 1_024)).unwrap();

        // 150 MB
        let result = form.attach_file(pdf("huge.pdf", 157_286_400));

        assert!(matches!(result, Err(RegistrationError::FileTooLarge { .. })));
        assert_eq!(form.error, Some(RegistrationError::FileTooLarge { size: 157_286_400 }));
        assert_eq!(form.draft.pitch_deck.as_ref().map(|d| d.name.as_str()), Some("first.pdf"));
    }

    #[test]
    fn test_attach_accepts_exactly_at_ceiling_and_clears_error() {
        let mut form = RegistrationForm::default();
        let _ = form.attach_file(pdf("huge.pdf", MAX_PITCH_DECK_BYTES + 1));
        assert!(form.error.is_some());
        assert!(form.draft.pitch_deck.is_none());

        form.attach_file(pdf("deck.pdf", MAX_PITCH_DECK_BYTES)).unwrap();
        assert!(form.error.is_none());
        assert!(form.draft.pitch_deck.is_some());
    }

    #[test]
    fn test_docx_rejected_with_type_error() {
        let mut form = RegistrationForm::default();
        let docx = PitchDeck::new(
            "deck.docx",
            2_048,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        let _ = form.attach_file(docx);
        assert_eq!(
            form.error.as_ref().map(|e| e.to_string()),
            Some("Only PDF and PPT files are allowed".to_string())
        );
        assert!(form.draft.pitch_deck.is_none());
    }

    #[test]
    fn test_clear_file_sets_no_error() {
        let mut form = ready_form();
        form.clear_file();
        assert!(form.draft.pitch_deck.is_none());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_clear_file_drops_stale_rejection() {
        let mut form = ready_form();
        let _ = form.attach_file(pdf("huge.pdf", MAX_PITCH_DECK_BYTES + 1));
        assert!(form.error.is_some());

        form.clear_file();
        assert!(form.draft.pitch_deck.is_none());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_clear_file_keeps_transport_error() {
        let mut form = ready_form();
        let submission = form.begin_submission().unwrap();
        form.finish_submission(submission.attempt, Err(RegistrationError::Transport("offline".into())));

        form.clear_file();
        assert_eq!(form.error, Some(RegistrationError::Transport("offline".into())));
    }

    #[test]
    fn test_submit_without_deck_never_starts() {
        let mut form = ready_form();
        form.clear_file();

        let result = form.begin_submission();

        assert_eq!(result, Err(RegistrationError::MissingPitchDeck));
        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert_eq!(form.error, Some(RegistrationError::MissingPitchDeck));
    }

    #[test]
    fn test_deck_guard_wins_over_empty_fields() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.begin_submission(), Err(RegistrationError::MissingPitchDeck));
    }

    #[test]
    fn test_submit_requires_fields_and_agreement() {
        let mut form = ready_form();
        form.update_field(FieldUpdate::Phone(String::new()));
        assert_eq!(
            form.begin_submission(),
            Err(RegistrationError::MissingField("Phone number"))
        );

        form.update_field(FieldUpdate::Phone("+91 90000 00000".into()));
        form.update_field(FieldUpdate::Agree(false));
        assert!(!form.can_submit());
        assert_eq!(form.begin_submission(), Err(RegistrationError::AgreementRequired));
        assert_eq!(form.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = ready_form();
        assert!(form.can_submit());
        let first = form.begin_submission().unwrap();
        assert_eq!(first.attempt, 1);
        assert_eq!(form.phase, SubmissionPhase::Submitting);
        assert!(!form.can_submit());

        assert_eq!(form.begin_submission(), Err(RegistrationError::AlreadySubmitting));
        assert!(form.error.is_none());
        assert_eq!(form.pending(), Some(&first));
    }

    #[test]
    fn test_double_submit_queues_a_single_request() {
        let form = Rc::new(ready_form());
        assert!(form.pending().is_none());

        let after_first = form.clone().reduce(RegistrationAction::Submit);
        // Second click lands before the re-render
        let after_second = after_first.clone().reduce(RegistrationAction::Submit);

        assert_eq!(after_first.pending().map(|s| s.attempt), Some(1));
        assert_eq!(after_second.pending(), after_first.pending());
        assert_eq!(after_second.phase, SubmissionPhase::Submitting);
        assert_eq!(*after_second, *after_first);
    }

    #[test]
    fn test_pending_cleared_when_request_settles() {
        let mut form = ready_form();
        let submission = form.begin_submission().unwrap();
        form.finish_submission(submission.attempt, Err(RegistrationError::Transport("timeout".into())));
        assert!(form.pending().is_none());

        let retry = form.begin_submission().unwrap();
        assert_eq!(form.pending(), Some(&retry));
        form.finish_submission(retry.attempt, Ok(()));
        assert!(form.pending().is_none());
    }

    #[test]
    fn test_success_hold_only_after_accepted_request() {
        let mut form = ready_form();
        assert_eq!(form.success_hold(), None);

        let first = form.begin_submission().unwrap();
        assert_eq!(form.success_hold(), None);
        form.finish_submission(first.attempt, Err(RegistrationError::Transport("offline".into())));
        assert_eq!(form.success_hold(), None);

        let second = form.begin_submission().unwrap();
        form.finish_submission(second.attempt, Ok(()));
        assert_eq!(form.success_hold(), Some(second.attempt));

        form.success_elapsed(second.attempt);
        assert_eq!(form.success_hold(), None);
    }

    #[test]
    fn test_dismiss_during_success_hold_ends_it() {
        let mut form = ready_form();
        let submission = form.begin_submission().unwrap();
        form.finish_submission(submission.attempt, Ok(()));

        form.dismiss();
        assert_eq!(form.success_hold(), None);
        assert!(!form.is_open);
    }

    #[test]
    fn test_success_holds_then_resets_to_empty() {
        let mut form = ready_form();
        let submission = form.begin_submission().unwrap();

        form.finish_submission(submission.attempt, Ok(()));
        assert_eq!(form.phase, SubmissionPhase::Succeeded);
        assert!(form.is_open);

        form.success_elapsed(submission.attempt);
        assert_eq!(form.draft, RegistrationDraft::default());
        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert!(!form.is_open);
        assert!(form.error.is_none());
    }

    #[test]
    fn test_transport_failure_returns_to_editable_with_draft() {
        let mut form = ready_form();
        let before = form.draft.clone();
        let submission = form.begin_submission().unwrap();

        form.finish_submission(
            submission.attempt,
            Err(RegistrationError::Transport("NetworkError".into())),
        );

        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert_eq!(
            form.error.as_ref().map(|e| e.to_string()),
            Some("An error occurred. Please try again.".to_string())
        );
        assert_eq!(form.draft, before);
        assert!(form.can_submit());

        let retry = form.begin_submission().unwrap();
        assert_eq!(retry.attempt, 2);
        assert_eq!(retry.payload, submission.payload);
    }

    #[test]
    fn test_dismiss_ignored_while_submitting() {
        let mut form = ready_form();
        form.begin_submission().unwrap();
        form.dismiss();
        assert!(form.is_open);
        assert_eq!(form.phase, SubmissionPhase::Submitting);
    }

    #[test]
    fn test_dismiss_discards_draft() {
        let mut form = ready_form();
        let _ = form.attach_file(pdf("huge.pdf", MAX_PITCH_DECK_BYTES * 2));
        form.dismiss();
        assert_eq!(form.draft, RegistrationDraft::default());
        assert!(form.error.is_none());
        assert!(!form.is_open);
    }

    #[test]
    fn test_stale_success_timer_does_not_close_reopened_modal() {
        let mut form = ready_form();
        let submission = form.begin_submission().unwrap();
        form.finish_submission(submission.attempt, Ok(()));

        // Closed by hand during the hold, then reopened for a new team
        form.dismiss();
        form.open();
        form.update_field(FieldUpdate::TeamName("Second Team".into()));

        form.success_elapsed(submission.attempt);
        assert!(form.is_open);
        assert_eq!(form.draft.team_name, "Second Team");
    }

    #[test]
    fn test_late_completion_for_old_attempt_is_ignored() {
        let mut form = ready_form();
        let first = form.begin_submission().unwrap();
        form.finish_submission(first.attempt, Err(RegistrationError::Transport("timeout".into())));
        let second = form.begin_submission().unwrap();

        form.finish_submission(first.attempt, Ok(()));
        assert_eq!(form.phase, SubmissionPhase::Submitting);

        form.finish_submission(second.attempt, Ok(()));
        assert_eq!(form.phase, SubmissionPhase::Succeeded);
    }

    #[test]
    fn test_reducer_routes_actions() {
        let form = Rc::new(RegistrationForm::default());
        let form = form.reduce(RegistrationAction::Open);
        let form = form.reduce(RegistrationAction::Update(FieldUpdate::Members("Rohit S".into())));
        let form = form.reduce(RegistrationAction::Submit);

        assert!(form.is_open);
        assert_eq!(form.draft.members, "Rohit S");
        assert_eq!(form.error, Some(RegistrationError::MissingPitchDeck));

        let form = form.reduce(RegistrationAction::Dismiss);
        assert_eq!(*form, RegistrationForm::default());
    }
}
