//! Shape checks for contact fields.
//!
//! Both checks are deliberately loose: they reject obvious typos, not
//! everything an RFC would reject.

use thiserror::Error;

/// Why a submitted record was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor ingresa un correo electrónico válido")]
    InvalidEmail,

    #[error("El teléfono debe tener 10 dígitos")]
    InvalidPhone,
}

impl ValidationError {
    /// Name of the form field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidPhone => "telefono",
        }
    }
}

/// True iff `s` looks like `local@domain.tld`, with no whitespace and no
/// extra `@` in any part.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || !is_plain(local) || !is_plain(domain) {
        return false;
    }

    // Some dot must split the domain into two non-empty halves.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// True iff exactly ten digits remain once every non-digit is stripped.
pub fn is_valid_phone(s: &str) -> bool {
    s.chars().filter(char::is_ascii_digit).count() == 10
}

fn is_plain(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| is_form_space(c) || c == '@')
}

/// Whitespace as browsers treat it in form patterns: the Unicode space
/// separators, line terminators and the byte order mark. U+0085 is not one.
fn is_form_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ana@ute.edu.ec"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@example.org"));
        assert!(is_valid_email("x@sub.domain.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("ana maria@example.com"));
        assert!(!is_valid_email("ana@exa mple.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana@ex@ample.com"));
        assert!(!is_valid_email(" ana@example.com"));
    }

    #[test]
    fn test_email_whitespace_matches_form_patterns() {
        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
        assert!(!is_valid_email("a@c\u{3000}c.d"));
        assert!(!is_valid_email("a\u{A0}b@c.d"));
        assert!(!is_valid_email("a@c.d\u{0B}"));
        assert!(is_valid_email("a\u{85}b@c.d"));
        assert!(is_valid_email("a\u{200B}b@c.d"));
    }

    #[test]
    fn test_valid_phones_ignore_separators() {
        assert!(is_valid_phone("0991234567"));
        assert!(is_valid_phone("099-123-4567"));
        assert!(is_valid_phone("(099) 123 4567"));
        assert!(is_valid_phone(" 099.123.4567 "));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("099123456"));
        assert!(!is_valid_phone("09912345678"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("+593 99 123 4567"));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Por favor ingresa un correo electrónico válido"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "El teléfono debe tener 10 dígitos"
        );
    }
}
