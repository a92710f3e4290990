//! 关联记录存储操作

use super::SeaOrmStorage;
use crate::entity::{students_grades, students_groups, teachers_subjects};
use crate::errors::{EduError, Result};
use crate::models::{
    FullName,
    associations::{
        entities::{StudentGrade, StudentGroup, TeacherSubject},
        requests::{LinkBatch, LinkSummary},
    },
    batch::{BaseBatch, BaseIds},
    grades::entities::GradeLetter,
};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, Set, TransactionTrait};
use tracing::debug;

// 单条 INSERT 的最大行数，避免超出 SQLite 绑定参数上限
const INSERT_CHUNK_SIZE: usize = 500;

impl SeaOrmStorage {
    /// 将学生加入分组（按学生全名和分组代码查找）
    pub async fn create_student_group_impl(
        &self,
        student: &FullName,
        group_code: &str,
    ) -> Result<StudentGroup> {
        let student = self
            .find_student_by_name_impl(student)
            .await?
            .ok_or_else(|| EduError::not_found(format!("学生不存在: {student}")))?;
        let group = self
            .find_group_by_code_impl(group_code)
            .await?
            .ok_or_else(|| EduError::not_found(format!("分组不存在: {group_code}")))?;

        let model = students_groups::ActiveModel {
            student_id: Set(student.id),
            group_id: Set(group.id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建学生分组失败: {e}")))?;

        Ok(result.into_student_group())
    }

    /// 为教师添加授课科目
    pub async fn create_teacher_subject_impl(
        &self,
        teacher: &FullName,
        subject_name: &str,
    ) -> Result<TeacherSubject> {
        let teacher = self
            .find_teacher_by_name_impl(teacher)
            .await?
            .ok_or_else(|| EduError::not_found(format!("教师不存在: {teacher}")))?;
        let subject = self
            .find_subject_by_name_impl(subject_name)
            .await?
            .ok_or_else(|| EduError::not_found(format!("科目不存在: {subject_name}")))?;

        let model = teachers_subjects::ActiveModel {
            teacher_id: Set(teacher.id),
            subject_id: Set(subject.id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建教师授课记录失败: {e}")))?;

        Ok(result.into_teacher_subject())
    }

    /// 记录学生某科目的成绩，历史记录全部保留
    pub async fn create_student_grade_impl(
        &self,
        student: &FullName,
        subject_name: &str,
        grade: GradeLetter,
    ) -> Result<StudentGrade> {
        let student = self
            .find_student_by_name_impl(student)
            .await?
            .ok_or_else(|| EduError::not_found(format!("学生不存在: {student}")))?;
        let subject = self
            .find_subject_by_name_impl(subject_name)
            .await?
            .ok_or_else(|| EduError::not_found(format!("科目不存在: {subject_name}")))?;
        let grade = self
            .find_grade_by_code_impl(grade)
            .await?
            .ok_or_else(|| {
                EduError::not_found(format!("分数等级不存在: {}", grade.as_code()))
            })?;

        let model = students_grades::ActiveModel {
            student_id: Set(student.id),
            grade_id: Set(grade.id),
            subject_id: Set(subject.id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建学生成绩失败: {e}")))?;

        Ok(result.into_student_grade())
    }

    /// 在一个事务内写入基础数据，返回各表新记录的 id
    pub async fn insert_base_batch_impl(&self, batch: BaseBatch) -> Result<BaseIds> {
        use crate::entity::{grades, groups, students, subjects, teachers};

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduError::database_operation(format!("开启事务失败: {e}")))?;
        let now = chrono::Utc::now().timestamp();
        let mut ids = BaseIds::default();

        for req in batch.students {
            let model = students::ActiveModel {
                first_name: Set(req.first_name),
                last_name: Set(req.last_name),
                birthdate: Set(req.birthdate),
                gender: Set(req.gender),
                created_at: Set(now),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("创建学生失败: {e}")))?;
            ids.students.push(inserted.id);
        }

        for req in batch.teachers {
            let model = teachers::ActiveModel {
                first_name: Set(req.first_name),
                last_name: Set(req.last_name),
                birthdate: Set(req.birthdate),
                gender: Set(req.gender),
                created_at: Set(now),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("创建教师失败: {e}")))?;
            ids.teachers.push(inserted.id);
        }

        for req in batch.subjects {
            let model = subjects::ActiveModel {
                name: Set(req.name),
                description: Set(req.description),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("创建科目失败: {e}")))?;
            ids.subjects.push(inserted.id);
        }

        for req in batch.grades {
            let model = grades::ActiveModel {
                value: Set(req.value),
                code: Set(req.code),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("创建分数等级失败: {e}")))?;
            ids.grades.push(inserted.id);
        }

        for req in batch.groups {
            let model = groups::ActiveModel {
                name: Set(req.name),
                code: Set(req.code),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("创建分组失败: {e}")))?;
            ids.groups.push(inserted.id);
        }

        txn.commit()
            .await
            .map_err(|e| EduError::database_operation(format!("提交事务失败: {e}")))?;

        debug!(
            "基础数据写入完成: 学生 {}, 教师 {}, 科目 {}, 分数等级 {}, 分组 {}",
            ids.students.len(),
            ids.teachers.len(),
            ids.subjects.len(),
            ids.grades.len(),
            ids.groups.len()
        );

        Ok(ids)
    }

    /// 在一个事务内批量写入关联记录
    pub async fn insert_links_impl(&self, batch: LinkBatch) -> Result<LinkSummary> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduError::database_operation(format!("开启事务失败: {e}")))?;
        let now = chrono::Utc::now().timestamp();

        let student_groups = batch
            .student_groups
            .into_iter()
            .map(|link| students_groups::ActiveModel {
                student_id: Set(link.student_id),
                group_id: Set(link.group_id),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let teacher_subjects = batch
            .teacher_subjects
            .into_iter()
            .map(|link| teachers_subjects::ActiveModel {
                teacher_id: Set(link.teacher_id),
                subject_id: Set(link.subject_id),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let student_grades = batch
            .student_grades
            .into_iter()
            .map(|link| students_grades::ActiveModel {
                student_id: Set(link.student_id),
                grade_id: Set(link.grade_id),
                subject_id: Set(link.subject_id),
                created_at: Set(now),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        let summary = LinkSummary {
            student_groups: insert_chunked::<students_groups::Entity>(
                student_groups,
                &txn,
                "学生分组",
            )
            .await?,
            teacher_subjects: insert_chunked::<teachers_subjects::Entity>(
                teacher_subjects,
                &txn,
                "教师授课记录",
            )
            .await?,
            student_grades: insert_chunked::<students_grades::Entity>(
                student_grades,
                &txn,
                "学生成绩",
            )
            .await?,
        };

        txn.commit()
            .await
            .map_err(|e| EduError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(summary)
    }
}

/// 分批执行 INSERT，返回写入行数
async fn insert_chunked<E>(
    models: Vec<E::ActiveModel>,
    txn: &DatabaseTransaction,
    label: &str,
) -> Result<u64>
where
    E: EntityTrait,
    E::ActiveModel: Send,
{
    let mut total = 0;
    let mut models = models.into_iter().peekable();

    while models.peek().is_some() {
        let chunk: Vec<E::ActiveModel> = models.by_ref().take(INSERT_CHUNK_SIZE).collect();
        total += E::insert_many(chunk)
            .exec_without_returning(txn)
            .await
            .map_err(|e| EduError::database_operation(format!("批量写入{label}失败: {e}")))?;
    }

    Ok(total)
}
