//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachers_subjects::Entity")]
    TeachersSubjects,
    #[sea_orm(has_many = "super::students_grades::Entity")]
    StudentsGrades,
}

impl Related<super::teachers_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachersSubjects.def()
    }
}

impl Related<super::students_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentsGrades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        crate::models::subjects::entities::Subject {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}
