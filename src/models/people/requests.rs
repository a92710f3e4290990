use chrono::NaiveDate;

use crate::models::common::{FullName, Gender};

// 创建学生/教师请求
#[derive(Debug, Clone)]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthdate: Option<NaiveDate>,
}

impl CreatePersonRequest {
    pub fn new(name: FullName, gender: Gender, birthdate: Option<NaiveDate>) -> Self {
        Self {
            first_name: name.first_name,
            last_name: name.last_name,
            gender,
            birthdate,
        }
    }
}

// 更新学生/教师请求，只覆盖提供的字段
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
}

impl UpdatePersonRequest {
    pub fn with_name(mut self, name: FullName) -> Self {
        self.first_name = Some(name.first_name);
        self.last_name = Some(name.last_name);
        self
    }
}
