use regform_core::{IdentityStep, Input, Step, fields};
use url::{Host, Url};

use crate::patterns::Patterns;
use crate::result::ErrorKind;
use crate::rule::{StepSchema, field};

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

pub fn identity_schema(patterns: &Patterns) -> StepSchema<IdentityStep> {
    StepSchema::new(
        Step::Identity,
        vec![
            field(fields::FULL_NAME, |step: &IdentityStep| &step.full_name)
                .required("Full Name is required.")
                .matches(
                    &patterns.english_words,
                    "Name must be in English and cannot contain special characters.",
                )
                .build(),
            field(fields::PERSONAL_PHOTO, |step: &IdentityStep| &step.personal_photo)
                .check(ErrorKind::Required, "personal Photo is required", |photo, _| {
                    photo.is_present()
                })
                .build(),
            field(fields::EMAIL, |step: &IdentityStep| &step.email)
                .required("Email is required.")
                .matches(&patterns.email, "Please enter a valid email address.")
                .build(),
            field(fields::MOBILE, |step: &IdentityStep| &step.mobile)
                .required("Mobile number is required.")
                .matches(
                    &patterns.mobile,
                    "Please enter a valid Egyptian phone number (e.g., 01012345678).",
                )
                .build(),
            field(fields::LINKEDIN, |step: &IdentityStep| &step.linkedin)
                .check(
                    ErrorKind::PatternMismatch,
                    "linkedin must be a valid URL",
                    |value, _| match value {
                        Input::Missing => true,
                        Input::Present(text) => text.is_empty() || is_web_url(text),
                        Input::Malformed(_) => false,
                    },
                )
                .build(),
            field(fields::CITY_OF_BIRTH, |step: &IdentityStep| &step.city_of_birth)
                .required("City of birth is required.")
                .matches(
                    &patterns.city,
                    "City of birth must be in English,cannot contain special characters.",
                )
                .build(),
        ],
    )
}

/// Absolute http(s) or ftp URL, or a protocol-relative `//host` one. The
/// host must be dotted or an IP address.
fn is_web_url(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }

    let normalized = if text.starts_with("//") {
        format!("http:{text}")
    } else {
        text.to_string()
    };
    let Some(authority) = URL_SCHEMES.iter().find_map(|scheme| {
        let prefix = normalized.get(..scheme.len() + 3)?;
        let expected = format!("{scheme}://");
        prefix
            .eq_ignore_ascii_case(&expected)
            .then(|| &normalized[expected.len()..])
    }) else {
        return false;
    };
    if authority.is_empty() || authority.starts_with('/') {
        return false;
    }

    match Url::parse(&normalized) {
        Ok(url) => {
            URL_SCHEMES.contains(&url.scheme())
                && match url.host() {
                    Some(Host::Domain(domain)) => is_dotted_domain(domain),
                    Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
                    None => false,
                }
        }
        Err(_) => false,
    }
}

fn is_dotted_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
