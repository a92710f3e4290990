//! 教师实体

use sea_orm::entity::prelude::*;

use crate::models::common::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<Date>,
    pub gender: Gender,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachers_subjects::Entity")]
    TeachersSubjects,
}

impl Related<super::teachers_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachersSubjects.def()
    }
}

// 教师 <-> 科目（经由 teachers_subjects）
impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        super::teachers_subjects::Relation::Subject.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teachers_subjects::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::people::entities::Teacher {
        use crate::models::people::entities::Teacher;
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            gender: self.gender,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
