//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Project Brain client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
url = "http://localhost:8000"   # BRAIN_BACKEND_URL overrides this
# connect_timeout_secs = 10     # 1-300
# request_timeout_secs = 120    # 0 = wait forever, otherwise 1-3600

[display]
# width = 80                    # 40-240
# user_label = "You"
# assistant_label = "AI"
# thinking_text = "AI is thinking…"

[logging]
# level = "INFO"                # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
