use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{FullName, Gender, Tabular, optional_cell};

const PERSON_COLUMNS: &[&str] = &["id", "first_name", "last_name", "birthdate", "gender", "created_at"];

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

// 教师实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> FullName {
        FullName::new(&self.first_name, &self.last_name)
    }
}

impl Teacher {
    pub fn full_name(&self) -> FullName {
        FullName::new(&self.first_name, &self.last_name)
    }
}

fn person_cells(
    id: i64,
    first_name: &str,
    last_name: &str,
    birthdate: Option<NaiveDate>,
    gender: Gender,
    created_at: DateTime<Utc>,
) -> Vec<String> {
    vec![
        id.to_string(),
        first_name.to_string(),
        last_name.to_string(),
        optional_cell(birthdate),
        gender.as_code().to_string(),
        created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

impl Tabular for Student {
    fn columns(&self) -> &'static [&'static str] {
        PERSON_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        person_cells(
            self.id,
            &self.first_name,
            &self.last_name,
            self.birthdate,
            self.gender,
            self.created_at,
        )
    }
}

impl Tabular for Teacher {
    fn columns(&self) -> &'static [&'static str] {
        PERSON_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        person_cells(
            self.id,
            &self.first_name,
            &self.last_name,
            self.birthdate,
            self.gender,
            self.created_at,
        )
    }
}
