
#[cfg(debug_assertions)]
pub fn get_form_url() -> &'static str {
    "http://localhost:3001/formResponse"  // Local echo endpoint while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_url() -> &'static str {
    "https://docs.google.com/forms/d/e/1FAIpQLSeOu_vIvA7JRlQKbChqPPwLAMpUOUSfv7c9Hkx82aqVqrT5Fw/formResponse"
}

// Field identifiers of the external intake form
pub const FIELD_TEAM_NAME: &str = "entry.2092238618";
pub const FIELD_LEADER_NAME: &str = "entry.1556369182";
pub const FIELD_PHONE: &str = "entry.1457601567";
pub const FIELD_MEMBERS: &str = "entry.479301265";
pub const FIELD_AGREEMENT: &str = "entry.2109138769";

pub const EVENT_START: &str = "2025-11-08T18:00:00";

pub const SUCCESS_DISPLAY_MS: u32 = 4_000;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

pub const MAX_PITCH_DECK_BYTES: u64 = 104_857_600; // 100 MiB
pub const ALLOWED_PITCH_DECK_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];
