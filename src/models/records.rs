//! 通用记录，按模型类型统一处理列表、查询、删除的结果

use serde::Serialize;

use super::associations::entities::{StudentGrade, StudentGroup, TeacherSubject};
use super::common::{ModelKind, Tabular};
use super::grades::entities::Grade;
use super::groups::entities::Group;
use super::people::entities::{Student, Teacher};
use super::subjects::entities::Subject;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Student(Student),
    Teacher(Teacher),
    Subject(Subject),
    Grade(Grade),
    Group(Group),
    StudentGroup(StudentGroup),
    TeacherSubject(TeacherSubject),
    StudentGrade(StudentGrade),
}

impl Record {
    pub fn id(&self) -> i64 {
        match self {
            Record::Student(r) => r.id,
            Record::Teacher(r) => r.id,
            Record::Subject(r) => r.id,
            Record::Grade(r) => r.id,
            Record::Group(r) => r.id,
            Record::StudentGroup(r) => r.id,
            Record::TeacherSubject(r) => r.id,
            Record::StudentGrade(r) => r.id,
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Record::Student(_) => ModelKind::Student,
            Record::Teacher(_) => ModelKind::Teacher,
            Record::Subject(_) => ModelKind::Subject,
            Record::Grade(_) => ModelKind::Grade,
            Record::Group(_) => ModelKind::Group,
            Record::StudentGroup(_) => ModelKind::StudentGroup,
            Record::TeacherSubject(_) => ModelKind::TeacherSubject,
            Record::StudentGrade(_) => ModelKind::StudentGrade,
        }
    }

    fn as_tabular(&self) -> &dyn Tabular {
        match self {
            Record::Student(r) => r,
            Record::Teacher(r) => r,
            Record::Subject(r) => r,
            Record::Grade(r) => r,
            Record::Group(r) => r,
            Record::StudentGroup(r) => r,
            Record::TeacherSubject(r) => r,
            Record::StudentGrade(r) => r,
        }
    }
}

impl Tabular for Record {
    fn columns(&self) -> &'static [&'static str] {
        self.as_tabular().columns()
    }

    fn cells(&self) -> Vec<String> {
        self.as_tabular().cells()
    }
}

macro_rules! impl_record_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Record {
                fn from(value: $variant) -> Self {
                    Record::$variant(value)
                }
            }
        )*
    };
}

impl_record_from!(
    Student,
    Teacher,
    Subject,
    Grade,
    Group,
    StudentGroup,
    TeacherSubject,
    StudentGrade,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_delegates_to_inner() {
        let record: Record = Group {
            id: 7,
            name: "First".into(),
            code: "G-1".into(),
        }
        .into();

        assert_eq!(record.id(), 7);
        assert_eq!(record.kind(), ModelKind::Group);
        assert_eq!(record.columns(), &["id", "name", "code"]);
        assert_eq!(record.cells(), vec!["7", "First", "G-1"]);
    }

    #[test]
    fn test_record_serializes_untagged() {
        let record: Record = TeacherSubject {
            id: 1,
            teacher_id: 2,
            subject_id: 3,
        }
        .into();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "teacher_id": 2, "subject_id": 3})
        );
    }
}
