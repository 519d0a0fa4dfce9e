//! Contact form rules: required-field validation, the submission gate and
//! the processing countdown.
//!
//! Submission is simulated on the client; nothing is sent anywhere.

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const SUBMIT_IDLE_TEXT: &str = "Send Message";
pub const SUBMIT_BUSY_TEXT: &str = "Sending...";
pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const OVERLAY_FADE_MS: u32 = 300;
/// Pause between the overlay closing and the success notification.
pub const NOTIFY_DELAY_MS: u32 = 500;

/// Id of the inline message element for a field.
pub fn error_element_id(field_name: &str) -> String {
    format!("{field_name}-error")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCheck {
    pub name: String,
    pub valid: bool,
}

impl FieldCheck {
    pub fn message(&self) -> &'static str {
        if self.valid { "" } else { REQUIRED_MESSAGE }
    }
}

/// Every field is required: valid iff the trimmed value is non-empty.
pub fn check_field(name: &str, raw: &str) -> FieldCheck {
    FieldCheck {
        name: name.to_string(),
        valid: !raw.trim().is_empty(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormReport {
    pub checks: Vec<FieldCheck>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.valid)
    }

    pub fn invalid_fields(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.valid)
            .map(|c| c.name.as_str())
            .collect()
    }
}

pub fn validate_all<'a, I>(fields: I) -> FormReport
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    FormReport {
        checks: fields
            .into_iter()
            .map(|(name, value)| check_field(name, value))
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; these fields stay marked.
    Blocked(Vec<String>),
    /// A sequence is already running; the submit is ignored.
    Busy,
    /// Start exactly one countdown-to-notification sequence.
    Started,
}

/// Guards against overlapping submission sequences.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: bool,
}

impl SubmissionGate {
    pub fn submit(&mut self, report: &FormReport) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::Busy;
        }
        if !report.is_valid() {
            return SubmitOutcome::Blocked(
                report.invalid_fields().into_iter().map(str::to_string).collect(),
            );
        }
        self.in_flight = true;
        SubmitOutcome::Started
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    Show(u32),
    Done,
}

/// Seconds shown on the processing overlay, one tick per `COUNTDOWN_TICK_MS`.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Done
        } else {
            CountdownStep::Show(self.remaining)
        }
    }
}

pub fn processing_overlay_markup(seconds: u32) -> String {
    format!(
        concat!(
            "<div class=\"processing-content\">",
            "<div class=\"processing-spinner\"></div>",
            "<h3>Processing...</h3>",
            "<div class=\"countdown\">{}</div>",
            "</div>"
        ),
        seconds
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

    fn report(values: [&'static str; 4]) -> FormReport {
        validate_all(FIELDS.iter().copied().zip(values))
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(!check_field("name", "   \t").valid);
        assert!(check_field("name", " Kai ").valid);
        assert_eq!(check_field("email", "").message(), REQUIRED_MESSAGE);
        assert_eq!(check_field("email", "a@b").message(), "");
    }

    #[test]
    fn error_ids_follow_field_names() {
        assert_eq!(error_element_id("email"), "email-error");
    }

    #[test]
    fn blank_subsets_mark_exactly_those_fields() {
        // Every subset of the four fields left blank.
        for mask in 0u8..16 {
            let values: [&'static str; 4] =
                std::array::from_fn(|i| if mask & (1 << i) != 0 { "" } else { "filled" });
            let expected: Vec<&str> = (0..4)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| FIELDS[i])
                .collect();
            let r = report(values);
            assert_eq!(r.invalid_fields(), expected, "mask {mask:04b}");

            let mut gate = SubmissionGate::default();
            let outcome = gate.submit(&r);
            if mask == 0 {
                assert_eq!(outcome, SubmitOutcome::Started);
            } else {
                assert_eq!(
                    outcome,
                    SubmitOutcome::Blocked(expected.iter().map(|s| s.to_string()).collect())
                );
                assert!(!gate.in_flight());
            }
        }
    }

    #[test]
    fn one_valid_submit_starts_one_sequence() {
        let r = report(["Kai", "kai@example.com", "Hi", "Love the game"]);
        let mut gate = SubmissionGate::default();
        assert_eq!(gate.submit(&r), SubmitOutcome::Started);
        assert_eq!(gate.submit(&r), SubmitOutcome::Busy);
        gate.finish();
        assert_eq!(gate.submit(&r), SubmitOutcome::Started);
    }

    #[test]
    fn countdown_runs_three_two_one() {
        let mut c = Countdown::new(3);
        assert_eq!(c.remaining(), 3);
        assert_eq!(c.tick(), CountdownStep::Show(2));
        assert_eq!(c.tick(), CountdownStep::Show(1));
        assert_eq!(c.tick(), CountdownStep::Done);
    }

    #[test]
    fn zero_second_countdown_finishes_on_first_tick() {
        assert_eq!(Countdown::new(0).tick(), CountdownStep::Done);
    }

    #[test]
    fn overlay_shows_starting_seconds() {
        assert!(processing_overlay_markup(3).contains("<div class=\"countdown\">3</div>"));
    }
}
