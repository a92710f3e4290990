use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PART_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}'.-]*$").expect("Invalid name regex"));

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}0-9_-]+$").expect("Invalid code regex"));

/// 与 students/teachers/subjects/groups 表的字符串列长度保持一致
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 250;

pub fn validate_name_part(part: &str) -> Result<(), &'static str> {
    if part.is_empty() || part.chars().count() > MAX_NAME_LEN {
        return Err("Name parts must be between 1 and 50 characters");
    }
    if !NAME_PART_RE.is_match(part) {
        return Err("Name parts must start with a letter and contain only letters, apostrophes, dots or hyphens");
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() || code.chars().count() > MAX_NAME_LEN {
        return Err("Code length must be between 1 and 50 characters");
    }
    if !CODE_RE.is_match(code) {
        return Err("Code must contain only letters, digits, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err("Name must be between 1 and 50 characters");
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err("Description must be at most 250 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_parts() {
        assert!(validate_name_part("John").is_ok());
        assert!(validate_name_part("O'Neil").is_ok());
        assert!(validate_name_part("Jean-Luc").is_ok());
        assert!(validate_name_part("Олена").is_ok());
    }

    #[test]
    fn test_invalid_name_parts() {
        assert!(validate_name_part("").is_err());
        assert!(validate_name_part("-John").is_err());
        assert!(validate_name_part("J0hn").is_err());
        assert!(validate_name_part(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_codes() {
        assert!(validate_code("Johnson").is_ok());
        assert!(validate_code("KN-21").is_ok());
        assert!(validate_code("with space").is_err());
        assert!(validate_code("").is_err());
    }

    #[test]
    fn test_title_and_description() {
        assert!(validate_title("PHYSICAL_TRAINING").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_description(&"d".repeat(250)).is_ok());
        assert!(validate_description(&"d".repeat(251)).is_err());
    }
}
