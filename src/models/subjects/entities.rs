use serde::{Deserialize, Serialize};

use crate::models::common::{Tabular, optional_cell};

// 科目实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Tabular for Subject {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "name", "description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            optional_cell(self.description.as_deref()),
        ]
    }
}

// 生成测试数据时使用的科目目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownSubject {
    Math,
    Literature,
    History,
    Geography,
    Music,
    Biology,
    PhysicalTraining,
    Painting,
}

impl KnownSubject {
    pub const ALL: [KnownSubject; 8] = [
        KnownSubject::Math,
        KnownSubject::Literature,
        KnownSubject::History,
        KnownSubject::Geography,
        KnownSubject::Music,
        KnownSubject::Biology,
        KnownSubject::PhysicalTraining,
        KnownSubject::Painting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KnownSubject::Math => "MATH",
            KnownSubject::Literature => "LITERATURE",
            KnownSubject::History => "HISTORY",
            KnownSubject::Geography => "GEOGRAPHY",
            KnownSubject::Music => "MUSIC",
            KnownSubject::Biology => "BIOLOGY",
            KnownSubject::PhysicalTraining => "PHYSICAL_TRAINING",
            KnownSubject::Painting => "PAINTING",
        }
    }
}
