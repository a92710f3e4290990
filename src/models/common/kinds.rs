use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// 可通过命令行操作的模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKind {
    Student,
    Teacher,
    Subject,
    Grade,
    Group,
    StudentGroup,
    TeacherSubject,
    StudentGrade,
}

impl ModelKind {
    pub const ALL: [ModelKind; 8] = [
        ModelKind::Student,
        ModelKind::Teacher,
        ModelKind::Subject,
        ModelKind::Grade,
        ModelKind::Group,
        ModelKind::StudentGroup,
        ModelKind::TeacherSubject,
        ModelKind::StudentGrade,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Student => "Student",
            ModelKind::Teacher => "Teacher",
            ModelKind::Subject => "Subject",
            ModelKind::Grade => "Grade",
            ModelKind::Group => "Group",
            ModelKind::StudentGroup => "StudentGroup",
            ModelKind::TeacherSubject => "TeacherSubject",
            ModelKind::StudentGrade => "StudentGrade",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            ModelKind::Student => "students",
            ModelKind::Teacher => "teachers",
            ModelKind::Subject => "subjects",
            ModelKind::Grade => "grades",
            ModelKind::Group => "groups",
            ModelKind::StudentGroup => "students_groups",
            ModelKind::TeacherSubject => "teachers_subjects",
            ModelKind::StudentGrade => "students_grades",
        }
    }

    /// 关联记录只能创建和删除
    pub fn is_association(&self) -> bool {
        matches!(
            self,
            ModelKind::StudentGroup | ModelKind::TeacherSubject | ModelKind::StudentGrade
        )
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    /// 忽略大小写以及 `_` / `-` 分隔符，`student-group`、`StudentGroup` 均可
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                let supported: Vec<&str> = ModelKind::ALL.iter().map(|k| k.name()).collect();
                format!(
                    "Unknown model '{s}'. Supported: {}",
                    supported.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Student", ModelKind::Student)]
    #[test_case("teacher", ModelKind::Teacher)]
    #[test_case("StudentGroup", ModelKind::StudentGroup)]
    #[test_case("teacher-subject", ModelKind::TeacherSubject)]
    #[test_case("student_grade", ModelKind::StudentGrade)]
    fn test_parse_model_kind(input: &str, expected: ModelKind) {
        assert_eq!(input.parse::<ModelKind>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_model_lists_supported() {
        let err = "Homework".parse::<ModelKind>().unwrap_err();
        assert!(err.contains("StudentGrade"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_associations() {
        assert!(ModelKind::StudentGrade.is_association());
        assert!(!ModelKind::Grade.is_association());
    }
}
