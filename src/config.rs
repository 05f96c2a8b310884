//! Build-Time Configuration
//!
//! The only knob a CSR bundle carries: where the backend lives.

/// API base URL, baked in at compile time.
///
/// Set `FUNDDESK_API_BASE` when bundling against a backend on another
/// origin; the default assumes the app is served behind the same host with
/// the API mounted under `/api`.
pub fn api_base() -> &'static str {
    option_env!("FUNDDESK_API_BASE").unwrap_or("/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}
