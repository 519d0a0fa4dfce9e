//! "Play Now" button: a short fake launch sequence.

pub const IDLE_TEXT: &str = "Play Now";

pub const PULSE_TRANSFORM: &str = "scale(1.1)";
pub const PULSE_SHADOW: &str = "0 0 30px rgba(220, 38, 38, 0.8)";
pub const REST_TRANSFORM: &str = "scale(1)";
pub const REST_SHADOW: &str = "0 8px 25px rgba(220, 38, 38, 0.4)";
pub const PULSE_MS: u32 = 300;

/// One button state change, `at_ms` after the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchStep {
    pub at_ms: u32,
    pub text: &'static str,
    pub disabled: bool,
}

pub const LAUNCH_SEQUENCE: [LaunchStep; 3] = [
    LaunchStep { at_ms: 0, text: "Launching...", disabled: true },
    LaunchStep { at_ms: 1000, text: "Game Launched!", disabled: true },
    LaunchStep { at_ms: 3000, text: IDLE_TEXT, disabled: false },
];
