//! 统计报表查询
//!
//! 数据库负责关联、分组和 SUM/COUNT，平均分与排序在内存中完成，
//! 避免不同数据库对 AVG/ROUND 返回类型的差异。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::{
    grades, groups, students, students_grades, students_groups, subjects, teachers,
    teachers_subjects,
};
use crate::errors::{EduError, Result};
use crate::models::reports::{
    TOP_STUDENTS_LIMIT, rounded_mean,
    responses::{
        GroupStudentRow, GroupSubjectGradeRow, LatestGradeRow, StudentAverage, StudentCourseRow,
        SubjectAverage, TeacherAverage, TeacherStudentAverage, TeacherStudentCourseRow,
        TeacherSubjectRow,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};
use tracing::debug;

#[derive(Debug, FromQueryResult)]
struct StudentTotals {
    student_id: i64,
    first_name: String,
    last_name: String,
    total: Option<i64>,
    records: i64,
}

impl StudentTotals {
    fn into_average(self) -> Option<StudentAverage> {
        let average = rounded_mean(self.total.unwrap_or(0), self.records)?;
        Some(StudentAverage {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            average,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct TeacherTotals {
    teacher_id: i64,
    first_name: String,
    last_name: String,
    total: Option<i64>,
    records: i64,
}

#[derive(Debug, FromQueryResult)]
struct GroupStudentQueryRow {
    group_name: String,
    group_code: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, FromQueryResult)]
struct GroupSubjectGradeQueryRow {
    first_name: String,
    last_name: String,
    value: i32,
    group_code: String,
    subject: String,
}

#[derive(Debug, FromQueryResult)]
struct StudentCourseQueryRow {
    subject: String,
    first_name: String,
    last_name: String,
    records: i64,
}

#[derive(Debug, FromQueryResult)]
struct TeacherStudentCourseQueryRow {
    subject: String,
    student_first_name: String,
    student_last_name: String,
    teacher_first_name: String,
    teacher_last_name: String,
    records: i64,
}

#[derive(Debug, FromQueryResult)]
struct TeacherStudentTotals {
    student_first_name: String,
    student_last_name: String,
    teacher_first_name: String,
    teacher_last_name: String,
    total: Option<i64>,
    records: i64,
}

#[derive(Debug, FromQueryResult)]
struct LatestGradeQueryRow {
    student_grade_id: i64,
    created_at: i64,
    first_name: String,
    last_name: String,
    group_code: String,
    subject: String,
}

/// 按平均分降序排列，平均分相同时按学生 id 升序
fn rank_students(rows: Vec<StudentTotals>) -> Vec<StudentAverage> {
    let mut ranked: Vec<StudentAverage> =
        rows.into_iter().filter_map(StudentTotals::into_average).collect();
    ranked.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });
    ranked
}

/// 学生成绩 JOIN 分数等级 JOIN 学生，按学生分组统计总分和记录数
fn student_totals_query() -> Select<students_grades::Entity> {
    students_grades::Entity::find()
        .select_only()
        .column_as(students::Column::Id, "student_id")
        .column_as(students::Column::FirstName, "first_name")
        .column_as(students::Column::LastName, "last_name")
        .column_as(grades::Column::Value.sum(), "total")
        .column_as(students_grades::Column::Id.count(), "records")
        .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
        .join(JoinType::InnerJoin, students_grades::Relation::Student.def())
        .group_by(students::Column::Id)
        .group_by(students::Column::FirstName)
        .group_by(students::Column::LastName)
}

fn query_error(report: &str, e: sea_orm::DbErr) -> EduError {
    EduError::database_operation(format!("查询报表 {report} 失败: {e}"))
}

impl SeaOrmStorage {
    /// 平均分最高的学生（最多 5 名）
    pub async fn top_students_impl(&self) -> Result<Vec<StudentAverage>> {
        let rows = student_totals_query()
            .into_model::<StudentTotals>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("top-students", e))?;

        let mut ranked = rank_students(rows);
        ranked.truncate(TOP_STUDENTS_LIMIT as usize);
        Ok(ranked)
    }

    /// 指定科目平均分最高的学生
    pub async fn best_student_in_subject_impl(
        &self,
        subject: &str,
    ) -> Result<Option<StudentAverage>> {
        let rows = student_totals_query()
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .filter(subjects::Column::Name.eq(subject))
            .into_model::<StudentTotals>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("best-student-in-subject", e))?;

        Ok(rank_students(rows).into_iter().next())
    }

    /// 指定科目的平均分，科目不存在或没有成绩时返回 None
    pub async fn subject_average_impl(&self, subject: &str) -> Result<Option<SubjectAverage>> {
        let row = students_grades::Entity::find()
            .select_only()
            .column_as(subjects::Column::Name, "subject")
            .column_as(grades::Column::Value.sum(), "total")
            .column_as(students_grades::Column::Id.count(), "records")
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .filter(subjects::Column::Name.eq(subject))
            .group_by(subjects::Column::Name)
            .into_tuple::<(String, Option<i64>, i64)>()
            .one(&self.db)
            .await
            .map_err(|e| query_error("subject-average", e))?;

        Ok(row.and_then(|(subject, total, records)| {
            rounded_mean(total.unwrap_or(0), records).map(|average| SubjectAverage {
                subject,
                average,
            })
        }))
    }

    /// 全部成绩记录的平均分
    pub async fn overall_average_impl(&self) -> Result<Option<f64>> {
        let row = students_grades::Entity::find()
            .select_only()
            .column_as(grades::Column::Value.sum(), "total")
            .column_as(students_grades::Column::Id.count(), "records")
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .into_tuple::<(Option<i64>, i64)>()
            .one(&self.db)
            .await
            .map_err(|e| query_error("overall-average", e))?;

        Ok(row.and_then(|(total, records)| rounded_mean(total.unwrap_or(0), records)))
    }

    /// 教师所授科目
    pub async fn teacher_subjects_impl(&self, teacher_id: i64) -> Result<Vec<TeacherSubjectRow>> {
        let rows = teachers_subjects::Entity::find()
            .select_only()
            .column_as(subjects::Column::Name, "subject")
            .column_as(teachers::Column::FirstName, "teacher_first_name")
            .column_as(teachers::Column::LastName, "teacher_last_name")
            .join(JoinType::InnerJoin, teachers_subjects::Relation::Subject.def())
            .join(JoinType::InnerJoin, teachers_subjects::Relation::Teacher.def())
            .filter(teachers::Column::Id.eq(teacher_id))
            .order_by_asc(teachers_subjects::Column::Id)
            .into_tuple::<(String, String, String)>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("teacher-subjects", e))?;

        Ok(rows
            .into_iter()
            .map(
                |(subject, teacher_first_name, teacher_last_name)| TeacherSubjectRow {
                    subject,
                    teacher_first_name,
                    teacher_last_name,
                },
            )
            .collect())
    }

    /// 分组内的学生
    pub async fn group_students_impl(&self, group_code: &str) -> Result<Vec<GroupStudentRow>> {
        let rows = students_groups::Entity::find()
            .select_only()
            .column_as(groups::Column::Name, "group_name")
            .column_as(groups::Column::Code, "group_code")
            .column_as(students::Column::FirstName, "first_name")
            .column_as(students::Column::LastName, "last_name")
            .join(JoinType::InnerJoin, students_groups::Relation::Group.def())
            .join(JoinType::InnerJoin, students_groups::Relation::Student.def())
            .filter(groups::Column::Code.eq(group_code))
            .order_by_asc(students_groups::Column::Id)
            .into_model::<GroupStudentQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("group-students", e))?;

        Ok(rows
            .into_iter()
            .map(|r| GroupStudentRow {
                group_name: r.group_name,
                group_code: r.group_code,
                first_name: r.first_name,
                last_name: r.last_name,
            })
            .collect())
    }

    /// 分组内学生在指定科目的全部成绩
    pub async fn group_subject_grades_impl(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<GroupSubjectGradeRow>> {
        let rows = students_grades::Entity::find()
            .select_only()
            .column_as(students::Column::FirstName, "first_name")
            .column_as(students::Column::LastName, "last_name")
            .column_as(grades::Column::Value, "value")
            .column_as(groups::Column::Code, "group_code")
            .column_as(subjects::Column::Name, "subject")
            .join(JoinType::InnerJoin, students_grades::Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::StudentsGroups.def())
            .join(JoinType::InnerJoin, students_groups::Relation::Group.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .filter(groups::Column::Code.eq(group_code))
            .filter(subjects::Column::Name.eq(subject))
            .order_by_asc(students_grades::Column::Id)
            .into_model::<GroupSubjectGradeQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("group-subject-grades", e))?;

        Ok(rows
            .into_iter()
            .map(|r| GroupSubjectGradeRow {
                first_name: r.first_name,
                last_name: r.last_name,
                value: r.value,
                group_code: r.group_code,
                subject: r.subject,
            })
            .collect())
    }

    /// 每位教师所授科目内全部成绩的平均分
    pub async fn teacher_averages_impl(&self) -> Result<Vec<TeacherAverage>> {
        let rows = students_grades::Entity::find()
            .select_only()
            .column_as(teachers::Column::Id, "teacher_id")
            .column_as(teachers::Column::FirstName, "first_name")
            .column_as(teachers::Column::LastName, "last_name")
            .column_as(grades::Column::Value.sum(), "total")
            .column_as(students_grades::Column::Id.count(), "records")
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .join(JoinType::InnerJoin, subjects::Relation::TeachersSubjects.def())
            .join(JoinType::InnerJoin, teachers_subjects::Relation::Teacher.def())
            .group_by(teachers::Column::Id)
            .group_by(teachers::Column::FirstName)
            .group_by(teachers::Column::LastName)
            .order_by_asc(teachers::Column::Id)
            .into_model::<TeacherTotals>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("teacher-averages", e))?;

        Ok(rows
            .into_iter()
            .filter_map(|r| {
                let average = rounded_mean(r.total.unwrap_or(0), r.records)?;
                Some(TeacherAverage {
                    teacher_id: r.teacher_id,
                    first_name: r.first_name,
                    last_name: r.last_name,
                    average,
                })
            })
            .collect())
    }

    /// 学生有成绩记录的科目及记录数
    pub async fn student_courses_impl(&self, student_id: i64) -> Result<Vec<StudentCourseRow>> {
        let rows = students_grades::Entity::find()
            .select_only()
            .column_as(subjects::Column::Name, "subject")
            .column_as(students::Column::FirstName, "first_name")
            .column_as(students::Column::LastName, "last_name")
            .column_as(students_grades::Column::Id.count(), "records")
            .join(JoinType::InnerJoin, students_grades::Relation::Student.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .filter(students::Column::Id.eq(student_id))
            .group_by(subjects::Column::Name)
            .group_by(students::Column::FirstName)
            .group_by(students::Column::LastName)
            .order_by_asc(subjects::Column::Name)
            .into_model::<StudentCourseQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("student-courses", e))?;

        Ok(rows
            .into_iter()
            .map(|r| StudentCourseRow {
                subject: r.subject,
                first_name: r.first_name,
                last_name: r.last_name,
                records: r.records,
            })
            .collect())
    }

    /// 学生成绩 JOIN 学生/科目/授课教师，限定教师和学生
    fn teacher_student_query(teacher_id: i64, student_id: i64) -> Select<students_grades::Entity> {
        students_grades::Entity::find()
            .select_only()
            .column_as(students::Column::FirstName, "student_first_name")
            .column_as(students::Column::LastName, "student_last_name")
            .column_as(teachers::Column::FirstName, "teacher_first_name")
            .column_as(teachers::Column::LastName, "teacher_last_name")
            .column_as(grades::Column::Value.sum(), "total")
            .column_as(students_grades::Column::Id.count(), "records")
            .join(JoinType::InnerJoin, students_grades::Relation::Student.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .join(JoinType::InnerJoin, subjects::Relation::TeachersSubjects.def())
            .join(JoinType::InnerJoin, teachers_subjects::Relation::Teacher.def())
            .filter(teachers::Column::Id.eq(teacher_id))
            .filter(students::Column::Id.eq(student_id))
            .group_by(students::Column::FirstName)
            .group_by(students::Column::LastName)
            .group_by(teachers::Column::FirstName)
            .group_by(teachers::Column::LastName)
    }

    /// 教师给学生授课的科目及成绩记录数
    pub async fn teacher_student_courses_impl(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Vec<TeacherStudentCourseRow>> {
        let rows = Self::teacher_student_query(teacher_id, student_id)
            .column_as(subjects::Column::Name, "subject")
            .group_by(subjects::Column::Name)
            .order_by_asc(subjects::Column::Name)
            .into_model::<TeacherStudentCourseQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("teacher-student-courses", e))?;

        Ok(rows
            .into_iter()
            .map(|r| TeacherStudentCourseRow {
                subject: r.subject,
                student_first_name: r.student_first_name,
                student_last_name: r.student_last_name,
                teacher_first_name: r.teacher_first_name,
                teacher_last_name: r.teacher_last_name,
                records: r.records,
            })
            .collect())
    }

    /// 教师所授科目中学生的平均分
    pub async fn teacher_student_average_impl(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Option<TeacherStudentAverage>> {
        let row = Self::teacher_student_query(teacher_id, student_id)
            .into_model::<TeacherStudentTotals>()
            .one(&self.db)
            .await
            .map_err(|e| query_error("teacher-student-average", e))?;

        Ok(row.and_then(|r| {
            let average = rounded_mean(r.total.unwrap_or(0), r.records)?;
            Some(TeacherStudentAverage {
                average,
                student_first_name: r.student_first_name,
                student_last_name: r.student_last_name,
                teacher_first_name: r.teacher_first_name,
                teacher_last_name: r.teacher_last_name,
            })
        }))
    }

    /// 分组内每位学生在指定科目的最新成绩
    pub async fn latest_group_subject_grades_impl(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<LatestGradeRow>> {
        let rows = students_grades::Entity::find()
            .select_only()
            .column_as(students_grades::Column::Id.max(), "student_grade_id")
            .column_as(students_grades::Column::CreatedAt.max(), "created_at")
            .column_as(students::Column::FirstName, "first_name")
            .column_as(students::Column::LastName, "last_name")
            .column_as(groups::Column::Code, "group_code")
            .column_as(subjects::Column::Name, "subject")
            .join(JoinType::InnerJoin, students_grades::Relation::Student.def())
            .join(JoinType::InnerJoin, students::Relation::StudentsGroups.def())
            .join(JoinType::InnerJoin, students_groups::Relation::Group.def())
            .join(JoinType::InnerJoin, students_grades::Relation::Subject.def())
            .filter(groups::Column::Code.eq(group_code))
            .filter(subjects::Column::Name.eq(subject))
            .group_by(students::Column::Id)
            .group_by(students::Column::FirstName)
            .group_by(students::Column::LastName)
            .group_by(groups::Column::Code)
            .group_by(subjects::Column::Name)
            .order_by_asc(students::Column::Id)
            .into_model::<LatestGradeQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("latest-group-subject-grades", e))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 最新记录对应的分数
        let latest_ids: Vec<i64> = rows.iter().map(|r| r.student_grade_id).collect();
        let values: HashMap<i64, i32> = students_grades::Entity::find()
            .select_only()
            .column(students_grades::Column::Id)
            .column(grades::Column::Value)
            .join(JoinType::InnerJoin, students_grades::Relation::Grade.def())
            .filter(students_grades::Column::Id.is_in(latest_ids))
            .into_tuple::<(i64, i32)>()
            .all(&self.db)
            .await
            .map_err(|e| query_error("latest-group-subject-grades", e))?
            .into_iter()
            .collect();

        debug!(
            "最新成绩: 分组 {} 科目 {}，共 {} 名学生",
            group_code,
            subject,
            rows.len()
        );

        Ok(rows
            .into_iter()
            .map(|r| LatestGradeRow {
                student_grade_id: r.student_grade_id,
                created_at: DateTime::<Utc>::from_timestamp(r.created_at, 0).unwrap_or_default(),
                first_name: r.first_name,
                last_name: r.last_name,
                group_code: r.group_code,
                subject: r.subject,
                grade_value: values.get(&r.student_grade_id).copied(),
            })
            .collect())
    }
}
