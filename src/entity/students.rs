//! 学生实体

use sea_orm::entity::prelude::*;

use crate::models::common::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
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
    #[sea_orm(has_many = "super::students_grades::Entity")]
    StudentsGrades,
    #[sea_orm(has_many = "super::students_groups::Entity")]
    StudentsGroups,
}

impl Related<super::students_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentsGrades.def()
    }
}

impl Related<super::students_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentsGroups.def()
    }
}

// 学生 <-> 分组（经由 students_groups）
impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        super::students_groups::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::students_groups::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::people::entities::Student {
        use crate::models::people::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            gender: self.gender,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
