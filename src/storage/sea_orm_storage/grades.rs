//! 分数等级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{EduError, Result};
use crate::models::grades::{
    entities::{Grade, GradeLetter},
    requests::{CreateGradeRequest, UpdateGradeRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建分数等级
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            value: Set(req.value),
            code: Set(req.code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("创建分数等级失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 更新分数等级，有字段变更时刷新 updated_at
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Grades::find_by_id(grade_id)
            .one(&txn)
            .await
            .map_err(|e| EduError::database_operation(format!("查询分数等级失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();

        if let Some(value) = update.value {
            model.value = Set(value);
        }

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        let updated = if model.is_changed() {
            model.updated_at = Set(chrono::Utc::now().timestamp());
            model
                .update(&txn)
                .await
                .map_err(|e| EduError::database_operation(format!("更新分数等级失败: {e}")))?
        } else {
            existing
        };

        txn.commit()
            .await
            .map_err(|e| EduError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_grade()))
    }

    /// 通过等级字母获取分数等级
    pub async fn find_grade_by_code_impl(&self, code: GradeLetter) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::Code.eq(code))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EduError::database_operation(format!("查询分数等级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }
}
