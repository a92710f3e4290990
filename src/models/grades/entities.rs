use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::common::Tabular;

// 等级字母
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum GradeLetter {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
    #[sea_orm(string_value = "C")]
    C,
    #[sea_orm(string_value = "D")]
    D,
    #[sea_orm(string_value = "E")]
    E,
    #[sea_orm(string_value = "F")]
    F,
}

impl GradeLetter {
    pub const ALL: [GradeLetter; 6] = [
        GradeLetter::A,
        GradeLetter::B,
        GradeLetter::C,
        GradeLetter::D,
        GradeLetter::E,
        GradeLetter::F,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            GradeLetter::A => "A",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::D => "D",
            GradeLetter::E => "E",
            GradeLetter::F => "F",
        }
    }

    /// 默认分数换算（B 和 C 同为 4 分，E 和 F 同为 2 分）
    pub fn default_value(&self) -> i32 {
        match self {
            GradeLetter::A => 5,
            GradeLetter::B | GradeLetter::C => 4,
            GradeLetter::D => 3,
            GradeLetter::E | GradeLetter::F => 2,
        }
    }
}

impl std::str::FromStr for GradeLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeLetter::ALL
            .into_iter()
            .find(|letter| letter.as_code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid grade code: '{s}'. Supported: A, B, C, D, E, F"))
    }
}

// 分数等级实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub value: i32,
    pub code: GradeLetter,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tabular for Grade {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "value", "code", "created_at", "updated_at"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.value.to_string(),
            self.code.as_code().to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let values: Vec<i32> = GradeLetter::ALL.iter().map(|g| g.default_value()).collect();
        assert_eq!(values, vec![5, 4, 4, 3, 2, 2]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b".parse::<GradeLetter>().unwrap(), GradeLetter::B);
        assert_eq!(" F ".parse::<GradeLetter>().unwrap(), GradeLetter::F);
        assert!("Z".parse::<GradeLetter>().is_err());
        assert!("AB".parse::<GradeLetter>().is_err());
    }
}
