//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{EduError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Subjects::find_by_id(subject_id)
            .one(&txn)
            .await
            .map_err(|e| EduError::database_operation(format!("查询科目失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let updated = if model.is_changed() {
            model
                .update(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("更新科目失败: {e}")))?
        } else {
            existing
        };

        txn.commit()
            .await
            .map_err(|e| EduError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_subject()))
    }

    /// 通过名称获取科目
    pub async fn find_subject_by_name_impl(&self, name: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }
}
