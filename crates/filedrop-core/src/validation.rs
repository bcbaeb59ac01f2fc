//! Input validation shared by the form gateway and the upload coordinator.

use validator::ValidateEmail;

use crate::constants::MAX_RECIPIENTS;
use crate::error::AppError;

/// Check a single address for valid email syntax.
pub fn is_valid_email(address: &str) -> bool {
    address.validate_email()
}

/// Parse a raw comma-separated recipient list into trimmed addresses.
///
/// Rejects an empty list, more than [`MAX_RECIPIENTS`] addresses, and any
/// syntactically invalid address. The first invalid address aborts validation
/// and is named in the error.
pub fn parse_recipients(raw: &str) -> Result<Vec<String>, AppError> {
    let emails: Vec<String> = raw.split(',').map(|e| e.trim().to_string()).collect();

    if raw.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "At least one recipient email is required".to_string(),
        ));
    }
    if emails.len() > MAX_RECIPIENTS {
        return Err(AppError::InvalidInput(format!(
            "You can only share with a maximum of {} people.",
            MAX_RECIPIENTS
        )));
    }
    for email in &emails {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput(format!(
                "Invalid email: {}. Try Again",
                email
            )));
        }
    }

    Ok(emails)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_up_to_five_trimmed_addresses() {
        let parsed = parse_recipients("a@x.com, b@x.com ,c@x.com,d@x.com, e@x.com").unwrap();
        assert_eq!(
            parsed,
            vec!["a@x.com", "b@x.com", "c@x.com", "d@x.com", "e@x.com"]
        );
    }

    #[test]
    fn rejects_six_addresses() {
        let err =
            parse_recipients("a@x.com,b@x.com,c@x.com,d@x.com,e@x.com,f@x.com").unwrap_err();
        assert!(err.to_string().contains("maximum of 5"));
    }

    #[test]
    fn names_the_first_invalid_address() {
        let err = parse_recipients("a@x.com, not-an-address, also-bad").unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
        assert!(!err.to_string().contains("also-bad"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_recipients("").is_err());
        assert!(parse_recipients("   ").is_err());
    }

    #[test]
    fn trims_whitespace_around_addresses() {
        let parsed = parse_recipients("bob@x.com, carol@y.com").unwrap();
        assert_eq!(parsed, vec!["bob@x.com", "carol@y.com"]);
    }
}
