use crate::Error;
use std::str::FromStr;

/// What pressing equals again, with no new input in between, does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatEquals {
    /// Apply the last operator and right hand operand to the running value
    /// once more: `2 + 3 = =` shows 5, then 8
    #[default]
    Reapply,
    /// Keep showing the result
    Ignore,
}

impl FromStr for RepeatEquals {
    type Err = Error;

    fn from_str(s: &str) -> Result<RepeatEquals, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reapply" => Ok(RepeatEquals::Reapply),
            "ignore" => Ok(RepeatEquals::Ignore),
            _ => Err(Error::BadParam("repeat_equals".to_string(), s.to_string())),
        }
    }
}

/// The policies of a [`Calculator`](crate::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repeat_equals: RepeatEquals,
    /// Shown when a reduction fails (division by zero, unreadable display)
    pub error_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            repeat_equals: RepeatEquals::default(),
            error_text: "NaN".to_string(),
        }
    }
}

impl Settings {
    pub fn with_repeat_equals(mut self, repeat_equals: RepeatEquals) -> Self {
        self.repeat_equals = repeat_equals;
        self
    }

    pub fn with_error_text(mut self, error_text: &str) -> Self {
        self.error_text = error_text.to_string();
        self
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings() -> Result<(), Error> {
        let settings = Settings::default();
        assert_eq!(settings.repeat_equals, RepeatEquals::Reapply);
        assert_eq!(settings.error_text, "NaN");

        let settings = settings
            .with_repeat_equals("Ignore".parse()?)
            .with_error_text("Error");
        assert_eq!(settings.repeat_equals, RepeatEquals::Ignore);
        assert_eq!(settings.error_text, "Error");

        assert_eq!(
            "twice".parse::<RepeatEquals>(),
            Err(Error::BadParam("repeat_equals".into(), "twice".into()))
        );
        Ok(())
    }
}
