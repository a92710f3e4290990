//! 统计报表
//!
//! 固定的 12 个聚合/关联查询，每次调用实时计算。

pub mod responses;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::{EduError, Result};

/// 排行榜最多返回的学生数
pub const TOP_STUDENTS_LIMIT: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// 平均分最高的 5 名学生
    #[value(alias = "1")]
    TopStudents,
    /// 指定科目平均分最高的学生
    #[value(alias = "2")]
    BestStudentInSubject,
    /// 指定科目的平均分
    #[value(alias = "3")]
    SubjectAverage,
    /// 全部成绩的平均分
    #[value(alias = "4")]
    OverallAverage,
    /// 教师所授科目
    #[value(alias = "5")]
    TeacherSubjects,
    /// 分组内的学生
    #[value(alias = "6")]
    GroupStudents,
    /// 分组内学生在指定科目的全部成绩
    #[value(alias = "7")]
    GroupSubjectGrades,
    /// 每位教师所授科目的平均分
    #[value(alias = "8")]
    TeacherAverages,
    /// 学生有成绩记录的科目
    #[value(alias = "9")]
    StudentCourses,
    /// 教师给学生授课的科目
    #[value(alias = "10")]
    TeacherStudentCourses,
    /// 教师给学生打出的平均分
    #[value(alias = "11")]
    TeacherStudentAverage,
    /// 分组内学生在指定科目的最新成绩
    #[value(alias = "12")]
    LatestGroupSubjectGrades,
}

impl ReportKind {
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::TopStudents => "top-students",
            ReportKind::BestStudentInSubject => "best-student-in-subject",
            ReportKind::SubjectAverage => "subject-average",
            ReportKind::OverallAverage => "overall-average",
            ReportKind::TeacherSubjects => "teacher-subjects",
            ReportKind::GroupStudents => "group-students",
            ReportKind::GroupSubjectGrades => "group-subject-grades",
            ReportKind::TeacherAverages => "teacher-averages",
            ReportKind::StudentCourses => "student-courses",
            ReportKind::TeacherStudentCourses => "teacher-student-courses",
            ReportKind::TeacherStudentAverage => "teacher-student-average",
            ReportKind::LatestGroupSubjectGrades => "latest-group-subject-grades",
        }
    }
}

/// 报表参数，各报表只使用其中一部分
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    pub subject: Option<String>,
    pub group: Option<String>,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
}

impl ReportParams {
    pub fn subject(&self) -> Result<&str> {
        self.subject
            .as_deref()
            .ok_or_else(|| EduError::missing_field("subject"))
    }

    pub fn group(&self) -> Result<&str> {
        self.group
            .as_deref()
            .ok_or_else(|| EduError::missing_field("group"))
    }

    pub fn teacher_id(&self) -> Result<i64> {
        self.teacher_id
            .ok_or_else(|| EduError::missing_field("teacher-id"))
    }

    pub fn student_id(&self) -> Result<i64> {
        self.student_id
            .ok_or_else(|| EduError::missing_field("student-id"))
    }
}

/// 由总分和记录数计算平均分，保留两位小数（四舍五入，与 SQL ROUND 一致）
///
/// 先在整数上求出以 0.01 为单位的结果，再转换为浮点数。
pub fn rounded_mean(total: i64, count: i64) -> Option<f64> {
    if count <= 0 {
        return None;
    }
    let (total, count) = (i128::from(total), i128::from(count));
    let half_up = |numerator: i128| (numerator * 200 + count).div_euclid(2 * count);
    let hundredths = if total >= 0 {
        half_up(total)
    } else {
        -half_up(-total)
    };
    Some(hundredths as f64 / 100.0)
}
