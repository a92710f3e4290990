use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::common::{Tabular, average_cell, optional_cell};

// 学生平均分（排行榜、单科最佳）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub average: f64,
}

// 单科平均分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAverage {
    pub subject: String,
    pub average: f64,
}

// 全部成绩平均分，无成绩时为空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAverage {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherSubjectRow {
    pub subject: String,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStudentRow {
    pub group_name: String,
    pub group_code: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSubjectGradeRow {
    pub first_name: String,
    pub last_name: String,
    pub value: i32,
    pub group_code: String,
    pub subject: String,
}

// 教师所授科目内全部成绩的平均分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherAverage {
    pub teacher_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentCourseRow {
    pub subject: String,
    pub first_name: String,
    pub last_name: String,
    pub records: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherStudentCourseRow {
    pub subject: String,
    pub student_first_name: String,
    pub student_last_name: String,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
    pub records: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherStudentAverage {
    pub average: f64,
    pub student_first_name: String,
    pub student_last_name: String,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
}

/// 分组内某科目每位学生的最新成绩记录
///
/// `student_grade_id` 与 `created_at` 分别取该学生该科目记录中的最大值，
/// `grade_value` 为最大 id 那条记录对应的分数。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestGradeRow {
    pub student_grade_id: i64,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub group_code: String,
    pub subject: String,
    pub grade_value: Option<i32>,
}

impl Tabular for StudentAverage {
    fn columns(&self) -> &'static [&'static str] {
        &["student_id", "first_name", "last_name", "average"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            average_cell(self.average),
        ]
    }
}

impl Tabular for SubjectAverage {
    fn columns(&self) -> &'static [&'static str] {
        &["subject", "average"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.subject.clone(), average_cell(self.average)]
    }
}

impl Tabular for OverallAverage {
    fn columns(&self) -> &'static [&'static str] {
        &["average"]
    }

    fn cells(&self) -> Vec<String> {
        vec![optional_cell(self.average.map(average_cell))]
    }
}

impl Tabular for TeacherSubjectRow {
    fn columns(&self) -> &'static [&'static str] {
        &["subject", "teacher_first_name", "teacher_last_name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.teacher_first_name.clone(),
            self.teacher_last_name.clone(),
        ]
    }
}

impl Tabular for GroupStudentRow {
    fn columns(&self) -> &'static [&'static str] {
        &["group_name", "group_code", "first_name", "last_name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.group_name.clone(),
            self.group_code.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
        ]
    }
}

impl Tabular for GroupSubjectGradeRow {
    fn columns(&self) -> &'static [&'static str] {
        &["first_name", "last_name", "value", "group_code", "subject"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.value.to_string(),
            self.group_code.clone(),
            self.subject.clone(),
        ]
    }
}

impl Tabular for TeacherAverage {
    fn columns(&self) -> &'static [&'static str] {
        &["teacher_id", "first_name", "last_name", "average"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.teacher_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            average_cell(self.average),
        ]
    }
}

impl Tabular for StudentCourseRow {
    fn columns(&self) -> &'static [&'static str] {
        &["subject", "first_name", "last_name", "records"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.records.to_string(),
        ]
    }
}

impl Tabular for TeacherStudentCourseRow {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "subject",
            "student_first_name",
            "student_last_name",
            "teacher_first_name",
            "teacher_last_name",
            "records",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.student_first_name.clone(),
            self.student_last_name.clone(),
            self.teacher_first_name.clone(),
            self.teacher_last_name.clone(),
            self.records.to_string(),
        ]
    }
}

impl Tabular for TeacherStudentAverage {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "average",
            "student_first_name",
            "student_last_name",
            "teacher_first_name",
            "teacher_last_name",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            average_cell(self.average),
            self.student_first_name.clone(),
            self.student_last_name.clone(),
            self.teacher_first_name.clone(),
            self.teacher_last_name.clone(),
        ]
    }
}

impl Tabular for LatestGradeRow {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "student_grade_id",
            "created_at",
            "first_name",
            "last_name",
            "group_code",
            "subject",
            "grade_value",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_grade_id.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.group_code.clone(),
            self.subject.clone(),
            optional_cell(self.grade_value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_average_cells() {
        let empty = OverallAverage { average: None };
        assert_eq!(empty.cells(), vec!["-".to_string()]);

        let filled = OverallAverage {
            average: Some(4.333),
        };
        assert_eq!(filled.cells(), vec!["4.33".to_string()]);
    }

    #[test]
    fn test_columns_match_cells() {
        let row = TeacherStudentCourseRow {
            subject: "MATH".into(),
            student_first_name: "Anna".into(),
            student_last_name: "Ivanova".into(),
            teacher_first_name: "Oleg".into(),
            teacher_last_name: "Petrov".into(),
            records: 3,
        };
        assert_eq!(row.columns().len(), row.cells().len());
    }
}
