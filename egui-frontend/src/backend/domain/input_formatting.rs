//! Input masks and normalization for registration fields.
//!
//! The masks are purely syntactic: a birth date is grouped as DD/MM/YYYY and a
//! phone number as (DD) NNNNN-NNNN while the user types, but neither is checked
//! against a calendar or a numbering plan.

use shared::{RegistrationField, RegistrationRecord};

const BIRTH_DATE_MAX_DIGITS: usize = 8;
const PHONE_MAX_DIGITS: usize = 11;

/// Keep only ASCII digits, at most `limit` of them
fn digits_only(value: &str, limit: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(limit).collect()
}

/// Format birth date input as DD/MM/YYYY, progressively
pub fn format_birth_date(value: &str) -> String {
    let digits = digits_only(value, BIRTH_DATE_MAX_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Format phone input as (DD) NNNNN-NNNN, progressively
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value, PHONE_MAX_DIGITS);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Apply the mask that belongs to `field`; other fields pass through untouched
pub fn apply_formatting(field: RegistrationField, value: &str) -> String {
    match field {
        RegistrationField::BirthDate => format_birth_date(value),
        RegistrationField::Phone => format_phone(value),
        _ => value.to_string(),
    }
}

/// Normalized e-mail used as the account key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Final shape of a record before it is handed to account creation.
///
/// Text fields are trimmed, the e-mail is lower-cased, the password is kept
/// exactly as typed.
pub fn normalize_record(record: &RegistrationRecord) -> RegistrationRecord {
    RegistrationRecord {
        first_name: record.first_name.trim().to_string(),
        last_name: record.last_name.trim().to_string(),
        birth_date: record.birth_date.trim().to_string(),
        phone: record.phone.trim().to_string(),
        email: normalize_email(&record.email),
        password: record.password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_birth_date_progressive_grouping() {
        assert_eq!(format_birth_date(""), "");
        assert_eq!(format_birth_date("1"), "1");
        assert_eq!(format_birth_date("12"), "12");
        assert_eq!(format_birth_date("123"), "12/3");
        assert_eq!(format_birth_date("1203"), "12/03");
        assert_eq!(format_birth_date("12032"), "12/03/2");
        assert_eq!(format_birth_date("12032024"), "12/03/2024");
        assert_eq!(format_birth_date("01022024"), "01/02/2024");
    }

    #[test]
    fn test_format_birth_date_strips_and_truncates() {
        assert_eq!(format_birth_date("01/02/2024"), "01/02/2024");
        assert_eq!(format_birth_date("ab01-02"), "01/02");
        assert_eq!(format_birth_date("120320249999"), "12/03/2024");
    }

    #[test]
    fn test_format_phone_stage_table() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119999"), "(11) 9999");
        assert_eq!(format_phone("1199999"), "(11) 9999-9");
        assert_eq!(format_phone("1199990000"), "(11) 9999-0000");
        assert_eq!(format_phone("11999990000"), "(11) 99999-0000");
    }

    #[test]
    fn test_format_phone_strips_and_truncates() {
        assert_eq!(format_phone("(11) 98888-0000"), "(11) 98888-0000");
        assert_eq!(format_phone("+55 11 9"), "(55) 119");
        assert_eq!(format_phone("1199999000012345"), "(11) 99999-0000");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_apply_formatting_passes_other_fields_through() {
        assert_eq!(apply_formatting(RegistrationField::FirstName, "  Ana "), "  Ana ");
        assert_eq!(apply_formatting(RegistrationField::Email, " Ana@Mail.com "), " Ana@Mail.com ");
        assert_eq!(apply_formatting(RegistrationField::BirthDate, "14081989"), "14/08/1989");
        assert_eq!(apply_formatting(RegistrationField::Phone, "11988880000"), "(11) 98888-0000");
    }

    #[test]
    fn test_normalize_record() {
        let record = RegistrationRecord {
            first_name: "  Ana ".to_string(),
            last_name: " Lima".to_string(),
            birth_date: "01/02/1990 ".to_string(),
            phone: " (11) 99999-0000".to_string(),
            email: "  Ana.Lima@Example.COM ".to_string(),
            password: " s3cret ".to_string(),
        };

        let normalized = normalize_record(&record);

        assert_eq!(normalized.first_name, "Ana");
        assert_eq!(normalized.last_name, "Lima");
        assert_eq!(normalized.birth_date, "01/02/1990");
        assert_eq!(normalized.phone, "(11) 99999-0000");
        assert_eq!(normalized.email, "ana.lima@example.com");
        assert_eq!(normalized.password, " s3cret ");
    }
}
