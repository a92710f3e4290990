use serde::{Deserialize, Serialize};

use crate::models::common::Tabular;

// 学生分组实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub code: String,
}

impl Tabular for Group {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "name", "code"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.code.clone()]
    }
}
