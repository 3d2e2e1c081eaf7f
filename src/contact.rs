//! Contact form draft and its simulated submission.
//!
//! Nothing here talks to a server. Submitting waits [`SUBMIT_DELAY`],
//! clears the draft and shows a success label for [`SENT_DISPLAY`]. The
//! component owning a [`ContactForm`] runs the timers; each step is a
//! [`PendingTimer`] token that goes stale when the form unmounts or a
//! newer submission starts.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SENT_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        match self.missing_fields().first() {
            Some(field) => Err(SubmitError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == Field::ALL.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a message is already being sent")]
    Busy,
    #[error("form is no longer mounted")]
    Unmounted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// End of the simulated send.
    Delivered,
    /// Success label expires.
    ResetLabel,
}

/// A step the owner must schedule `delay` from now and hand back to
/// [`ContactForm::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub kind: TimerKind,
    pub delay: Duration,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Send,
    Sending,
    Sent,
}

impl ButtonLabel {
    pub fn text(&self) -> &'static str {
        match self {
            ButtonLabel::Send => "Send Message",
            ButtonLabel::Sending => "Sending...",
            ButtonLabel::Sent => "Message Sent Successfully!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: SubmitPhase,
    submitted: bool,
    generation: u64,
    mounted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            draft: ContactDraft::default(),
            phase: SubmitPhase::Idle,
            submitted: false,
            generation: 0,
            mounted: true,
        }
    }
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn button_label(&self) -> ButtonLabel {
        match (self.phase, self.submitted) {
            (SubmitPhase::Submitting, _) => ButtonLabel::Sending,
            (SubmitPhase::Idle, true) => ButtonLabel::Sent,
            (SubmitPhase::Idle, false) => ButtonLabel::Send,
        }
    }

    /// Input edits are accepted in any phase, as the form controls stay
    /// editable while sending.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.mounted {
            self.draft.set(field, value);
        }
    }

    pub fn submit(&mut self) -> Result<PendingTimer, SubmitError> {
        if !self.mounted {
            return Err(SubmitError::Unmounted);
        }
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        self.draft.validate()?;
        // any pending label reset belongs to the previous submission
        self.generation += 1;
        self.phase = SubmitPhase::Submitting;
        log::debug!("simulating contact form submission");
        Ok(self.timer(TimerKind::Delivered, SUBMIT_DELAY))
    }

    /// Applies a fired timer. Stale timers change nothing. Returns the next
    /// step to schedule, if any.
    pub fn fire(&mut self, timer: PendingTimer) -> Option<PendingTimer> {
        if !self.mounted || timer.generation != self.generation {
            log::debug!("stale contact form timer {:?} ignored", timer.kind);
            return None;
        }
        match timer.kind {
            TimerKind::Delivered if self.is_submitting() => {
                self.phase = SubmitPhase::Idle;
                self.submitted = true;
                self.draft.clear();
                Some(self.timer(TimerKind::ResetLabel, SENT_DISPLAY))
            }
            TimerKind::ResetLabel if self.submitted => {
                self.submitted = false;
                None
            }
            _ => None,
        }
    }

    /// Invalidates every outstanding timer.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    fn timer(&self, kind: TimerKind, delay: Duration) -> PendingTimer {
        PendingTimer {
            kind,
            delay,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Subject, "x");
        form.set_field(Field::Message, "y");
        form
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut form = filled();
        assert_eq!(form.button_label(), ButtonLabel::Send);

        let delivered = form.submit().unwrap();
        assert_eq!(delivered.kind, TimerKind::Delivered);
        assert_eq!(delivered.delay, SUBMIT_DELAY);
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert_eq!(form.button_label(), ButtonLabel::Sending);

        let reset = form.fire(delivered).unwrap();
        assert_eq!(reset.kind, TimerKind::ResetLabel);
        assert_eq!(reset.delay, SENT_DISPLAY);
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.is_submitted());
        assert_eq!(form.button_label(), ButtonLabel::Sent);
        assert!(form.draft().is_empty());
        assert_eq!(form.draft(), &ContactDraft::default());

        assert_eq!(form.fire(reset), None);
        assert!(!form.is_submitted());
        assert_eq!(form.button_label(), ButtonLabel::Send);

        // firing the same token twice is harmless
        assert_eq!(form.fire(reset), None);
        assert_eq!(form.fire(delivered), None);
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        let mut form = filled();
        form.set_field(Field::Name, "");
        assert_eq!(
            form.submit(),
            Err(SubmitError::MissingField(Field::Name))
        );
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.draft().email, "a@b.com");

        let mut form = ContactForm::default();
        assert_eq!(form.draft().missing_fields(), Field::ALL.to_vec());
        assert!(form.submit().is_err());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_busy_while_submitting() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::Busy));
    }

    #[test]
    fn test_unmount_invalidates_pending_timers() {
        let mut form = filled();
        let delivered = form.submit().unwrap();
        form.unmount();
        let before = form.clone();
        assert_eq!(form.fire(delivered), None);
        assert_eq!(form, before);
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.submit(), Err(SubmitError::Unmounted));
        form.set_field(Field::Name, "Grace");
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_resubmit_supersedes_label_reset() {
        let mut form = filled();
        let delivered = form.submit().unwrap();
        let stale_reset = form.fire(delivered).unwrap();

        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Subject, "again");
        form.set_field(Field::Message, "y");
        let second = form.submit().unwrap();

        // old reset fires mid-send and must not touch the new cycle
        assert_eq!(form.fire(stale_reset), None);
        assert!(form.is_submitting());
        assert!(form.is_submitted());

        let reset = form.fire(second).unwrap();
        assert_eq!(form.button_label(), ButtonLabel::Sent);
        form.fire(reset);
        assert_eq!(form.button_label(), ButtonLabel::Send);
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            SubmitError::MissingField(Field::Email).to_string(),
            "email is required"
        );
    }
}
