use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Tabular;

// 学生成绩记录；同一学生同一科目可有多条，按时间保留历史
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGrade {
    pub id: i64,
    pub student_id: i64,
    pub grade_id: i64,
    pub subject_id: i64,
    pub created_at: DateTime<Utc>,
}

// 学生所属分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: i64,
    pub student_id: i64,
    pub group_id: i64,
}

// 教师所授科目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherSubject {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
}

impl Tabular for StudentGrade {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "student_id", "grade_id", "subject_id", "created_at"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.student_id.to_string(),
            self.grade_id.to_string(),
            self.subject_id.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}

impl Tabular for StudentGroup {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "student_id", "group_id"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.student_id.to_string(),
            self.group_id.to_string(),
        ]
    }
}

impl Tabular for TeacherSubject {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "teacher_id", "subject_id"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.teacher_id.to_string(),
            self.subject_id.to_string(),
        ]
    }
}
