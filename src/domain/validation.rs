use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// These patterns are wire contracts: the email pattern in particular requires
// a 2-3 letter TLD segment and is deliberately stricter than a full RFC 5322
// parser.
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("invalid email regex")
});

pub static GITHUB_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?github\.com/.+").expect("invalid GitHub URL regex")
});

pub static LINKEDIN_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?linkedin\.com/.+").expect("invalid LinkedIn URL regex")
});

pub static LEETCODE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?leetcode\.com/.+").expect("invalid LeetCode URL regex")
});

pub static GENERIC_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("invalid URL regex")
});

fn new_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_email", "Please provide a valid email"))
    }
}

pub fn validate_github_url(url: &str) -> Result<(), ValidationError> {
    if GITHUB_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_github_url", "Please provide a valid GitHub URL"))
    }
}

pub fn validate_linkedin_url(url: &str) -> Result<(), ValidationError> {
    if LINKEDIN_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_linkedin_url", "Please provide a valid LinkedIn URL"))
    }
}

pub fn validate_leetcode_url(url: &str) -> Result<(), ValidationError> {
    if LEETCODE_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_leetcode_url", "Please provide a valid LeetCode URL"))
    }
}

pub fn validate_generic_url(url: &str) -> Result<(), ValidationError> {
    if GENERIC_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_url", "Please provide a valid URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_local_part_emails() {
        assert!(validate_email_address("a.b@example.com").is_ok());
        assert!(validate_email_address("raj-kumar@mail.example.co").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email_address("not-an-email").is_err());
        assert!(validate_email_address("missing@tld").is_err());
        assert!(validate_email_address("@example.com").is_err());
        // TLD segments are limited to 2-3 word characters.
        assert!(validate_email_address("user@example.museum").is_err());
    }

    #[test]
    fn github_pattern_requires_a_path() {
        assert!(validate_github_url("https://github.com/rust-lang/rust").is_ok());
        assert!(validate_github_url("www.github.com/someone").is_ok());
        assert!(validate_github_url("https://github.com/").is_err());
        assert!(validate_github_url("https://gitlab.com/someone").is_err());
    }

    #[test]
    fn platform_patterns_are_distinct() {
        assert!(validate_linkedin_url("https://linkedin.com/in/someone").is_ok());
        assert!(validate_linkedin_url("https://github.com/someone").is_err());
        assert!(validate_leetcode_url("https://leetcode.com/u/someone").is_ok());
        assert!(validate_leetcode_url("https://linkedin.com/in/someone").is_err());
    }

    #[test]
    fn generic_url_pattern_accepts_live_links() {
        assert!(validate_generic_url("https://my-app.example.com/demo").is_ok());
        assert!(validate_generic_url("example.io").is_ok());
        assert!(validate_generic_url("not a url at all!").is_err());
    }
}
