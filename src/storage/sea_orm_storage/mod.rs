//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite 和 PostgreSQL。

mod associations;
mod grades;
mod groups;
mod people;
mod records;
mod reports;
mod subjects;

use crate::config::DatabaseConfig;
use crate::errors::{EduError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, warn};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例并执行待应用的迁移
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    ///
    /// 内存数据库每个连接都是独立的库，因此只保留一个常驻连接。
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::ConnectOptions as _;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_in_memory(url);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt.journal_mode(SqliteJournalMode::Wal);
        }

        opt = if config.sql_logging {
            opt.log_statements(tracing::log::LevelFilter::Debug)
        } else {
            opt.disable_statement_logging()
        };

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| EduError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(config.sql_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(url.to_string())
        } else {
            Err(EduError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 删除全部表并重新执行迁移
    pub async fn reset_schema_impl(&self) -> Result<()> {
        warn!("重建数据库结构，所有数据将被删除");
        Migrator::fresh(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("重建数据库结构失败: {e}")))
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 通用记录
    async fn find_all(&self, kind: ModelKind) -> Result<Vec<Record>> {
        self.find_all_impl(kind).await
    }

    async fn find_by_id(&self, kind: ModelKind, id: i64) -> Result<Option<Record>> {
        self.find_by_id_impl(kind, id).await
    }

    async fn delete_by_id(&self, kind: ModelKind, id: i64) -> Result<bool> {
        self.delete_by_id_impl(kind, id).await
    }

    // 学生
    async fn create_student(&self, req: CreatePersonRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdatePersonRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn find_student_by_name(&self, name: &FullName) -> Result<Option<Student>> {
        self.find_student_by_name_impl(name).await
    }

    // 教师
    async fn create_teacher(&self, req: CreatePersonRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdatePersonRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn find_teacher_by_name(&self, name: &FullName) -> Result<Option<Teacher>> {
        self.find_teacher_by_name_impl(name).await
    }

    // 科目
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn find_subject_by_name(&self, name: &str) -> Result<Option<Subject>> {
        self.find_subject_by_name_impl(name).await
    }

    // 分数等级
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(req).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn find_grade_by_code(&self, code: GradeLetter) -> Result<Option<Grade>> {
        self.find_grade_by_code_impl(code).await
    }

    // 分组
    async fn create_group(&self, req: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(req).await
    }

    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>> {
        self.update_group_impl(id, update).await
    }

    async fn find_group_by_code(&self, code: &str) -> Result<Option<Group>> {
        self.find_group_by_code_impl(code).await
    }

    // 关联记录
    async fn create_student_group(
        &self,
        student: &FullName,
        group_code: &str,
    ) -> Result<StudentGroup> {
        self.create_student_group_impl(student, group_code).await
    }

    async fn create_teacher_subject(
        &self,
        teacher: &FullName,
        subject_name: &str,
    ) -> Result<TeacherSubject> {
        self.create_teacher_subject_impl(teacher, subject_name)
            .await
    }

    async fn create_student_grade(
        &self,
        student: &FullName,
        subject_name: &str,
        grade: GradeLetter,
    ) -> Result<StudentGrade> {
        self.create_student_grade_impl(student, subject_name, grade)
            .await
    }

    // 批量写入
    async fn insert_base_batch(&self, batch: BaseBatch) -> Result<BaseIds> {
        self.insert_base_batch_impl(batch).await
    }

    async fn insert_links(&self, batch: LinkBatch) -> Result<LinkSummary> {
        self.insert_links_impl(batch).await
    }

    // 统计报表
    async fn top_students(&self) -> Result<Vec<StudentAverage>> {
        self.top_students_impl().await
    }

    async fn best_student_in_subject(&self, subject: &str) -> Result<Option<StudentAverage>> {
        self.best_student_in_subject_impl(subject).await
    }

    async fn subject_average(&self, subject: &str) -> Result<Option<SubjectAverage>> {
        self.subject_average_impl(subject).await
    }

    async fn overall_average(&self) -> Result<Option<f64>> {
        self.overall_average_impl().await
    }

    async fn teacher_subjects(&self, teacher_id: i64) -> Result<Vec<TeacherSubjectRow>> {
        self.teacher_subjects_impl(teacher_id).await
    }

    async fn group_students(&self, group_code: &str) -> Result<Vec<GroupStudentRow>> {
        self.group_students_impl(group_code).await
    }

    async fn group_subject_grades(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<GroupSubjectGradeRow>> {
        self.group_subject_grades_impl(group_code, subject).await
    }

    async fn teacher_averages(&self) -> Result<Vec<TeacherAverage>> {
        self.teacher_averages_impl().await
    }

    async fn student_courses(&self, student_id: i64) -> Result<Vec<StudentCourseRow>> {
        self.student_courses_impl(student_id).await
    }

    async fn teacher_student_courses(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Vec<TeacherStudentCourseRow>> {
        self.teacher_student_courses_impl(teacher_id, student_id)
            .await
    }

    async fn teacher_student_average(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Option<TeacherStudentAverage>> {
        self.teacher_student_average_impl(teacher_id, student_id)
            .await
    }

    async fn latest_group_subject_grades(
        &self,
        group_code: &str,
        subject: &str,
    ) -> Result<Vec<LatestGradeRow>> {
        self.latest_group_subject_grades_impl(group_code, subject)
            .await
    }

    // 数据库结构
    async fn reset_schema(&self) -> Result<()> {
        self.reset_schema_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("edu-records.db" => "sqlite://edu-records.db?mode=rwc" ; "db file")]
    #[test_case("data/school.sqlite" => "sqlite://data/school.sqlite?mode=rwc" ; "sqlite file")]
    #[test_case(":memory:" => "sqlite::memory:" ; "memory")]
    #[test_case("sqlite::memory:" => "sqlite::memory:" ; "sqlite memory url")]
    #[test_case("postgres://u:p@localhost/school" => "postgres://u:p@localhost/school" ; "postgres")]
    #[test_case("postgresql://localhost/school" => "postgresql://localhost/school" ; "postgresql")]
    fn test_build_database_url(input: &str) -> String {
        SeaOrmStorage::build_database_url(input).unwrap()
    }

    #[test]
    fn test_unknown_scheme_is_config_error() {
        let err = SeaOrmStorage::build_database_url("mysql://localhost/school").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(SeaOrmStorage::is_in_memory("sqlite::memory:"));
        assert!(SeaOrmStorage::is_in_memory("sqlite://file?mode=memory"));
        assert!(!SeaOrmStorage::is_in_memory("sqlite://edu-records.db?mode=rwc"));
    }
}
