use crate::schema::BrainConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &BrainConfig) {
    let display = &config.display;
    validate_range(errors, "display.width", u64::from(display.width), 40, 240);
    validate_not_blank(errors, "display.user_label", &display.user_label);
    validate_not_blank(errors, "display.assistant_label", &display.assistant_label);
}
