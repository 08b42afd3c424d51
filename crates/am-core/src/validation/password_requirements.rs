const MIN_LENGTH: usize = 8;
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Per-rule outcome of the password strength check. `true` means the rule
/// is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub upper_case: bool,
    pub lower_case: bool,
    pub number: bool,
    pub special_char: bool,
}

impl PasswordRequirements {
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_LENGTH,
            upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
            lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.min_length && self.upper_case && self.lower_case && self.number && self.special_char
    }

    /// Labels of the rules the password fails, for the checklist under the field.
    pub fn unmet(&self) -> Vec<&'static str> {
        [
            (self.min_length, "At least 8 characters"),
            (self.upper_case, "At least one uppercase letter"),
            (self.lower_case, "At least one lowercase letter"),
            (self.number, "At least one number"),
            (self.special_char, "At least one special character"),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, label)| label)
        .collect()
    }
}
