//! 学生分组存储操作

use super::SeaOrmStorage;
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::errors::{EduError, Result};
use crate::models::groups::{
    entities::Group,
    requests::{CreateGroupRequest, UpdateGroupRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建分组失败: {e}")))?;

        Ok(result.into_group())
    }

    /// 更新分组
    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Groups::find_by_id(group_id)
            .one(&txn)
            .await
            .map_err(|e| EduError::database_operation(format!("查询分组失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        let updated = if model.is_changed() {
            model
                .update(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("更新分组失败: {e}")))?
        } else {
            existing
        };

        txn.commit()
            .await
            .map_err(|e| EduError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_group()))
    }

    /// 通过分组代码获取分组
    pub async fn find_group_by_code_impl(&self, code: &str) -> Result<Option<Group>> {
        let result = Groups::find()
            .filter(Column::Code.eq(code))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }
}
