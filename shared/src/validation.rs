use crate::models::Voter;

pub const ID_NUMBER_LENGTH: usize = 13;
pub const MIN_VOTING_AGE: i32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid ID number. It must be 13 digits.")]
    MalformedIdNumber,
    #[error("You must be at least {MIN_VOTING_AGE} years old to register.")]
    Underage,
    #[error("ID number already exists.")]
    DuplicateIdNumber,
    #[error("Please select a party to vote for.")]
    NoPartySelected,
}

/// Two-digit birth year encoded in the first two characters of an id number.
pub fn birth_year_digits(id_number: &str) -> Option<u8> {
    let prefix: String = id_number.chars().take(2).collect();
    if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Resolves a two-digit birth year against the current year.
///
/// Years up to the current two-digit year belong to the current century,
/// later ones to the previous century.
pub fn age_in(birth_yy: u8, current_year: i32) -> i32 {
    let current_yy = current_year.rem_euclid(100);
    let century = current_year - current_yy;
    let birth_yy = i32::from(birth_yy);
    let birth_year = if birth_yy <= current_yy {
        century + birth_yy
    } else {
        century - 100 + birth_yy
    };
    current_year - birth_year
}

pub fn validate_id_number(id_number: &str, current_year: i32) -> Result<(), ValidationError> {
    if id_number.chars().count() != ID_NUMBER_LENGTH {
        return Err(ValidationError::MalformedIdNumber);
    }
    let birth_yy = birth_year_digits(id_number).ok_or(ValidationError::MalformedIdNumber)?;
    if age_in(birth_yy, current_year) < MIN_VOTING_AGE {
        return Err(ValidationError::Underage);
    }
    Ok(())
}

/// Format, age and uniqueness checks in that order; the first failure wins.
pub fn validate_registration(id_number: &str, current_year: i32, voters: &[Voter]) -> Result<(), ValidationError> {
    validate_id_number(id_number, current_year)?;
    if voters.iter().any(|v| v.id_number == id_number) {
        return Err(ValidationError::DuplicateIdNumber);
    }
    Ok(())
}

pub fn validate_selection(selection: &str) -> Result<&str, ValidationError> {
    if selection.is_empty() {
        Err(ValidationError::NoPartySelected)
    } else {
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter(id: &str) -> Voter {
        Voter {
            name: "Thandi".into(),
            surname: "Mokoena".into(),
            gender: "female".into(),
            id_number: id.into(),
        }
    }

    #[test]
    fn birth_year_needs_two_leading_digits() {
        assert_eq!(birth_year_digits("9001015009087"), Some(90));
        assert_eq!(birth_year_digits("0501015009087"), Some(5));
        assert_eq!(birth_year_digits("A001015009087"), None);
        assert_eq!(birth_year_digits("1A01015009087"), None);
        assert_eq!(birth_year_digits("+101015009087"), None);
        assert_eq!(birth_year_digits("9"), None);
    }

    #[test]
    fn age_uses_century_pivot() {
        assert_eq!(age_in(8, 2026), 18);
        assert_eq!(age_in(9, 2026), 17);
        assert_eq!(age_in(26, 2026), 0);
        assert_eq!(age_in(27, 2026), 99);
        assert_eq!(age_in(50, 2026), 76);
        assert_eq!(age_in(0, 2000), 0);
        assert_eq!(age_in(99, 2000), 1);
    }

    #[test]
    fn id_number_rules_in_order() {
        assert_eq!(validate_id_number("900101500908", 2026), Err(ValidationError::MalformedIdNumber));
        assert_eq!(validate_id_number("90010150090871", 2026), Err(ValidationError::MalformedIdNumber));
        assert_eq!(validate_id_number("XX01015009087", 2026), Err(ValidationError::MalformedIdNumber));
        // malformed wins over underage
        assert_eq!(validate_id_number("2001015009", 2026), Err(ValidationError::MalformedIdNumber));
        assert_eq!(validate_id_number("2001015009087", 2026), Err(ValidationError::Underage));
        assert!(validate_id_number("0801015009087", 2026).is_ok());
        assert!(validate_id_number("5501015009087", 2026).is_ok());
    }

    #[test]
    fn underage_wins_over_duplicate() {
        let voters = [voter("2001015009087")];
        assert_eq!(
            validate_registration("2001015009087", 2026, &voters),
            Err(ValidationError::Underage)
        );
        let voters = [voter("9001015009087")];
        assert_eq!(
            validate_registration("9001015009087", 2026, &voters),
            Err(ValidationError::DuplicateIdNumber)
        );
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(validate_selection(""), Err(ValidationError::NoPartySelected));
        assert_eq!(validate_selection("DA"), Ok("DA"));
    }

    #[test]
    fn messages_match_the_form_text() {
        assert_eq!(ValidationError::MalformedIdNumber.to_string(), "Invalid ID number. It must be 13 digits.");
        assert_eq!(ValidationError::Underage.to_string(), "You must be at least 18 years old to register.");
        assert_eq!(ValidationError::DuplicateIdNumber.to_string(), "ID number already exists.");
    }
}
