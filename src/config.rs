/// Submissions go to the page's own origin in every build profile.
pub fn get_submit_url() -> &'static str {
    "/"
}

/// Value of the hidden `form-name` field.
pub const FORM_NAME: &str = "diagnostico";

/// How long the step banner and radio label flash stay visible.
pub const FEEDBACK_DURATION_MS: u32 = 3_000;

pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Scroll offset (px) after which the navbar gets its shadow.
pub const SCROLL_SHADOW_OFFSET: f64 = 50.0;

/// Added to the scroll offset when picking the section whose nav link is active.
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_url_is_relative_to_the_page() {
        let url = get_submit_url();
        assert!(url.starts_with('/') && !url.starts_with("//"));
    }
}
