//! Birth-year age calculator.

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgeOutcome {
    /// Nothing typed yet.
    Empty,
    Age(i32),
    Invalid { current_year: i32 },
}

impl AgeOutcome {
    /// Evaluate raw input against the current year.
    ///
    /// The leading run of digits is the year, so `"1990abc"` reads as 1990.
    pub fn evaluate(input: &str, current_year: i32) -> Self {
        if input.is_empty() {
            return AgeOutcome::Empty;
        }
        match leading_int(input) {
            Some(year) if year != 0 && (MIN_BIRTH_YEAR..=current_year).contains(&year) => {
                AgeOutcome::Age(current_year - year)
            }
            _ => AgeOutcome::Invalid { current_year },
        }
    }

    pub fn message(&self) -> String {
        match self {
            AgeOutcome::Empty => String::new(),
            AgeOutcome::Age(age) => format!("You are {age} years old (or will be this year)."),
            AgeOutcome::Invalid { current_year } => {
                format!("Please enter a valid birth year ({MIN_BIRTH_YEAR}-{current_year}).")
            }
        }
    }
}

/// Optional sign then digits, after leading whitespace.
fn leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
