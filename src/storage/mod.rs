use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    FullName, ModelKind, Record,
    associations::{
        entities::{StudentGrade, StudentGroup, TeacherSubject},
        requests::{LinkBatch, LinkSummary},
    },
    batch::{BaseBatch, BaseIds},
    grades::{
        entities::{Grade, GradeLetter},
        requests::{CreateGradeRequest, UpdateGradeRequest},
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, UpdateGroupRequest},
    },
    people::{
        entities::{Student, Teacher},
        requests::{CreatePersonRequest, UpdatePersonRequest},
    },
    reports::responses::{
        GroupStudentRow, GroupSubjectGradeRow, LatestGradeRow, StudentAverage, StudentCourseRow,
        SubjectAverage, TeacherAverage, TeacherStudentAverage, TeacherStudentCourseRow,
        TeacherSubjectRow,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 通用记录方法
    // 按 id 升序列出全部记录
    async fn find_all(&self, kind: ModelKind) -> Result<Vec<Record>>;
    // 通过ID获取记录
    async fn find_by_id(&self, kind: ModelKind, id: i64) -> Result<Option<Record>>;
    // 通过ID删除记录，关联记录由外键级联删除
    async fn delete_by_id(&self, kind: ModelKind, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, req: CreatePersonRequest) -> Result<Student>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdatePersonRequest,
    ) -> Result<Option<Student>>;
    async fn find_student_by_name(&self, name: &FullName) -> Result<Option<Student>>;

    /// 教师管理方法
    async fn create_teacher(&self, req: CreatePersonRequest) -> Result<Teacher>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdatePersonRequest,
    ) -> Result<Option<Teacher>>;
    async fn find_teacher_by_name(&self, name: &FullName) -> Result<Option<Teacher>>;

    /// 科目管理方法
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn find_subject_by_name(&self, name: &str) -> Result<Option<Subject>>;

    /// 分数等级管理方法
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    // 同一字母有多条记录时取 id 最小的一条
    async fn find_grade_by_code(&self, code: GradeLetter) -> Result<Option<Grade>>;

    /// 分组管理方法
    async fn create_group(&self, req: CreateGroupRequest) -> Result<Group>;
    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>>;
    async fn find_group_by_code(&self, code: &str) -> Result<Option<Group>>;

    /// 关联记录方法（按名称/代码查找被引用的记录）
    async fn create_student_group(
        &self,
        student: &FullName,
        group_code: &str,
    ) -> Result<StudentGroup>;
    async fn create_teacher_subject(
        &self,
        teacher: &FullName,
        subject_name: &str,
    ) -> Result<TeacherSubject>;
    async fn create_student_grade(
        &self,
        student: &FullName,
        subject_name: &str,
        grade: GradeLetter,
    ) -> Result<StudentGrade>;

    /// 批量写入（单个事务）
    async fn insert_base_batch(&self, batch: BaseBatch) -> Result<BaseIds>;
    async fn insert_links(&self, batch: LinkBatch) -> Result<LinkSummary>;

    /// 统计报表
    async fn top_students(&self) -> Result<Vec<StudentAverage>>;
    async fn best_student_in_subject(&self, subject: &str) -> Result<Option<StudentAverage>>;
    async fn subject_average(&self, subject: &str) -> Result<Option<SubjectAverage>>;
    async fn overall_average(&self) -> Result<Option<f64>>;
    async fn teacher_subjects(&self, teacher_id: i64) -> Result<Vec<TeacherSubjectRow>>;
    async fn group_students(&self, group_code: &str) -> Result<Vec<GroupStudentRow>>;
    async fn group_subject_grades(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<GroupSubjectGradeRow>>;
    async fn teacher_averages(&self) -> Result<Vec<TeacherAverage>>;
    async fn student_courses(&self, student_id: i64) -> Result<Vec<StudentCourseRow>>;
    async fn teacher_student_courses(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Vec<TeacherStudentCourseRow>>;
    async fn teacher_student_average(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Option<TeacherStudentAverage>>;
    async fn latest_group_subject_grades(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<LatestGradeRow>>;

    /// 数据库结构
    // 删除全部表并重新建表
    async fn reset_schema(&self) -> Result<()>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
