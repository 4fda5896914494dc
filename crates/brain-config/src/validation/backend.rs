use crate::schema::BrainConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &BrainConfig) {
    let backend = &config.backend;

    validate_not_blank(errors, "backend.url", &backend.url);
    if !backend.url.trim().is_empty()
        && !(backend.url.starts_with("http://") || backend.url.starts_with("https://"))
    {
        errors.push(format!(
            "backend.url = {:?} must start with http:// or https://",
            backend.url
        ));
    }

    validate_range(
        errors,
        "backend.connect_timeout_secs",
        backend.connect_timeout_secs,
        1,
        300,
    );
    // 0 disables the request timeout.
    if backend.request_timeout_secs != 0 {
        validate_range(
            errors,
            "backend.request_timeout_secs",
            backend.request_timeout_secs,
            1,
            3600,
        );
    }
}
