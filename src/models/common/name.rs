use std::fmt;
use std::str::FromStr;

use crate::errors::EduError;
use crate::utils::validate::validate_name_part;

// 姓名（"名 姓"），学生和教师都通过全名查找
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl FromStr for FullName {
    type Err = EduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [first_name, last_name] = parts.as_slice() else {
            return Err(EduError::validation(format!(
                "Invalid name '{s}': expected \"First Last\""
            )));
        };

        for part in [first_name, last_name] {
            validate_name_part(part)
                .map_err(|msg| EduError::validation(format!("Invalid name '{s}': {msg}")))?;
        }

        Ok(Self::new(*first_name, *last_name))
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_name() {
        let name: FullName = "  Taras   Shevchenko ".parse().unwrap();
        assert_eq!(name, FullName::new("Taras", "Shevchenko"));
        assert_eq!(name.to_string(), "Taras Shevchenko");
    }

    #[test]
    fn test_reject_single_or_triple_names() {
        assert!("Taras".parse::<FullName>().is_err());
        assert!("Taras H. Shevchenko".parse::<FullName>().is_err());
        assert!("".parse::<FullName>().is_err());
    }

    #[test]
    fn test_reject_invalid_characters() {
        let err = "Taras Shev4enko".parse::<FullName>().unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}
