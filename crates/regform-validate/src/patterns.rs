use regex::Regex;
use regform_core::Result;

/// Compiled field patterns. Character classes are spelled out in ASCII
/// because `\w` and `\d` are Unicode-aware in `regex`.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Full name, faculty and university.
    pub english_words: Regex,
    pub email: Regex,
    /// Egyptian mobile: operator prefix plus eight digits.
    pub mobile: Regex,
    pub city: Regex,
    pub course: Regex,
    /// Job title and company name; empty is allowed.
    pub employment_text: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            english_words: Regex::new(r"^[A-Za-z\s]+$")?,
            email: Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")?,
            mobile: Regex::new(r"^(010|011|012|015)[0-9]{8}$")?,
            city: Regex::new(r"^[A-Za-z][A-Za-z\s]*$")?,
            course: Regex::new(r"^[A-Za-z0-9_ \-]*$")?,
            employment_text: Regex::new(r"^[A-Za-z\s_\-]*$")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_requires_known_prefix_and_eleven_digits() {
        let patterns = Patterns::compile().expect("patterns compile");
        for valid in ["01012345678", "01112345678", "01212345678", "01512345678"] {
            assert!(patterns.mobile.is_match(valid), "{valid} should match");
        }
        for invalid in ["02012345678", "01312345678", "0101234567", "010123456789", "٠١٠١٢٣٤٥٦٧٨"] {
            assert!(!patterns.mobile.is_match(invalid), "{invalid} should not match");
        }
    }

    #[test]
    fn email_is_ascii_only() {
        let patterns = Patterns::compile().expect("patterns compile");
        assert!(patterns.email.is_match("mona.ali-1@iti.gov.eg"));
        assert!(!patterns.email.is_match("mona@iti"));
        assert!(!patterns.email.is_match("möna@iti.gov.eg"));
        assert!(!patterns.email.is_match("mona@iti.e"));
    }

    #[test]
    fn city_must_start_with_a_letter() {
        let patterns = Patterns::compile().expect("patterns compile");
        assert!(patterns.city.is_match("New Cairo"));
        assert!(!patterns.city.is_match(" Cairo"));
        assert!(!patterns.city.is_match("6th of October"));
    }
}
