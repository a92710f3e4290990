//! 按模型类型的通用记录操作（列表、按 id 查询、删除）

use super::SeaOrmStorage;
use crate::entity::prelude::{
    Grades, Groups, Students, StudentsGrades, StudentsGroups, Subjects, Teachers,
    TeachersSubjects,
};
use crate::errors::{EduError, Result};
use crate::models::{ModelKind, Record};
use sea_orm::{EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder};
use tracing::info;

impl SeaOrmStorage {
    /// 按主键升序读取整张表
    async fn list_ordered<E>(&self, kind: ModelKind) -> Result<Vec<E::Model>>
    where
        E: EntityTrait,
    {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }

        select.all(&self.db).await.map_err(|e| {
            EduError::database_operation(format!("查询 {} 列表失败: {e}", kind.table_name()))
        })
    }

    async fn fetch_by_id<E>(&self, kind: ModelKind, id: i64) -> Result<Option<E::Model>>
    where
        E: EntityTrait,
        i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await.map_err(|e| {
            EduError::database_operation(format!("查询 {} 失败: {e}", kind.table_name()))
        })
    }

    async fn remove_by_id<E>(&self, kind: ModelKind, id: i64) -> Result<bool>
    where
        E: EntityTrait,
        i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            EduError::database_operation(format!("删除 {} 失败: {e}", kind.table_name()))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// 列出某类模型的全部记录
    pub async fn find_all_impl(&self, kind: ModelKind) -> Result<Vec<Record>> {
        let records = match kind {
            ModelKind::Student => self
                .list_ordered::<Students>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_student().into())
                .collect(),
            ModelKind::Teacher => self
                .list_ordered::<Teachers>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_teacher().into())
                .collect(),
            ModelKind::Subject => self
                .list_ordered::<Subjects>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_subject().into())
                .collect(),
            ModelKind::Grade => self
                .list_ordered::<Grades>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_grade().into())
                .collect(),
            ModelKind::Group => self
                .list_ordered::<Groups>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_group().into())
                .collect(),
            ModelKind::StudentGroup => self
                .list_ordered::<StudentsGroups>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_student_group().into())
                .collect(),
            ModelKind::TeacherSubject => self
                .list_ordered::<TeachersSubjects>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_teacher_subject().into())
                .collect(),
            ModelKind::StudentGrade => self
                .list_ordered::<StudentsGrades>(kind)
                .await?
                .into_iter()
                .map(|m| m.into_student_grade().into())
                .collect(),
        };

        Ok(records)
    }

    /// 通过 ID 获取记录
    pub async fn find_by_id_impl(&self, kind: ModelKind, id: i64) -> Result<Option<Record>> {
        let record = match kind {
            ModelKind::Student => self
                .fetch_by_id::<Students>(kind, id)
                .await?
                .map(|m| m.into_student().into()),
            ModelKind::Teacher => self
                .fetch_by_id::<Teachers>(kind, id)
                .await?
                .map(|m| m.into_teacher().into()),
            ModelKind::Subject => self
                .fetch_by_id::<Subjects>(kind, id)
                .await?
                .map(|m| m.into_subject().into()),
            ModelKind::Grade => self
                .fetch_by_id::<Grades>(kind, id)
                .await?
                .map(|m| m.into_grade().into()),
            ModelKind::Group => self
                .fetch_by_id::<Groups>(kind, id)
                .await?
                .map(|m| m.into_group().into()),
            ModelKind::StudentGroup => self
                .fetch_by_id::<StudentsGroups>(kind, id)
                .await?
                .map(|m| m.into_student_group().into()),
            ModelKind::TeacherSubject => self
                .fetch_by_id::<TeachersSubjects>(kind, id)
                .await?
                .map(|m| m.into_teacher_subject().into()),
            ModelKind::StudentGrade => self
                .fetch_by_id::<StudentsGrades>(kind, id)
                .await?
                .map(|m| m.into_student_grade().into()),
        };

        Ok(record)
    }

    /// 删除记录，不存在时返回 false
    pub async fn delete_by_id_impl(&self, kind: ModelKind, id: i64) -> Result<bool> {
        let deleted = match kind {
            ModelKind::Student => self.remove_by_id::<Students>(kind, id).await?,
            ModelKind::Teacher => self.remove_by_id::<Teachers>(kind, id).await?,
            ModelKind::Subject => self.remove_by_id::<Subjects>(kind, id).await?,
            ModelKind::Grade => self.remove_by_id::<Grades>(kind, id).await?,
            ModelKind::Group => self.remove_by_id::<Groups>(kind, id).await?,
            ModelKind::StudentGroup => {
                self.remove_by_id::<StudentsGroups>(kind, id)
                    .await?
            }
            ModelKind::TeacherSubject => {
                self.remove_by_id::<TeachersSubjects>(kind, id)
                    .await?
            }
            ModelKind::StudentGrade => {
                self.remove_by_id::<StudentsGrades>(kind, id)
                    .await?
            }
        };

        if !deleted {
            info!("{} id={} 不存在，未删除任何记录", kind, id);
        }

        Ok(deleted)
    }
}
