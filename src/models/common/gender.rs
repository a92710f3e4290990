use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// 性别，数据库中以单字符存储
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Gender {
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const MALE: &'static str = "M";
    pub const FEMALE: &'static str = "F";

    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE,
            Gender::Female => Self::FEMALE,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: '{s}'. Supported: M, F")),
        }
    }
}
