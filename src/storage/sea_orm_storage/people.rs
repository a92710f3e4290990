//! 学生和教师存储操作
//!
//! 两张表结构相同，由宏为各自生成创建、更新、按姓名查询方法。

use super::SeaOrmStorage;
use crate::errors::{EduError, Result};
use crate::models::{
    FullName,
    people::{
        entities::{Student, Teacher},
        requests::{CreatePersonRequest, UpdatePersonRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

macro_rules! impl_person_storage {
    ($person:ident, $module:ident, $model:ty, $label:literal) => {
        paste::paste! {
            impl SeaOrmStorage {
                #[doc = "创建" $label]
                pub async fn [<create_ $person _impl>](&self, req: CreatePersonRequest) -> Result<$model> {
                    use crate::entity::$module::ActiveModel;

                    let model = ActiveModel {
                        first_name: Set(req.first_name),
                        last_name: Set(req.last_name),
                        birthdate: Set(req.birthdate),
                        gender: Set(req.gender),
                        created_at: Set(chrono::Utc::now().timestamp()),
                        ..Default::default()
                    };

                    let result = model.insert(&self.db).await.map_err(|e| {
                        EduError::database_operation(format!(concat!("创建", $label, "失败: {}"), e))
                    })?;

                    Ok(result.[<into_ $person>]())
                }

                #[doc = "更新" $label "，只覆盖提供的字段；读取、修改、提交在同一事务内完成"]
                pub async fn [<update_ $person _impl>](
                    &self,
                    id: i64,
                    update: UpdatePersonRequest,
                ) -> Result<Option<$model>> {
                    use crate::entity::$module::{ActiveModel, Entity};

                    let txn = self.db.begin().await.map_err(|e| {
                        EduError::database_operation(format!("开启事务失败: {e}"))
                    })?;

                    let Some(existing) = Entity::find_by_id(id).one(&txn).await.map_err(|e| {
                        EduError::database_operation(format!(concat!("查询", $label, "失败: {}"), e))
                    })?
                    else {
                        return Ok(None);
                    };

                    let mut model: ActiveModel = existing.clone().into();

                    if let Some(first_name) = update.first_name {
                        model.first_name = Set(first_name);
                    }
                    if let Some(last_name) = update.last_name {
                        model.last_name = Set(last_name);
                    }
                    if let Some(gender) = update.gender {
                        model.gender = Set(gender);
                    }
                    if let Some(birthdate) = update.birthdate {
                        model.birthdate = Set(Some(birthdate));
                    }

                    let updated = if model.is_changed() {
                        model.update(&txn).await.map_err(|e| {
                            EduError::database_operation(format!(concat!("更新", $label, "失败: {}"), e))
                        })?
                    } else {
                        existing
                    };

                    txn.commit().await.map_err(|e| {
                        EduError::database_operation(format!("提交事务失败: {e}"))
                    })?;

                    Ok(Some(updated.[<into_ $person>]()))
                }

                #[doc = "通过全名查询" $label "，重名时取 id 最小的一条"]
                pub async fn [<find_ $person _by_name_impl>](
                    &self,
                    name: &FullName,
                ) -> Result<Option<$model>> {
                    use crate::entity::$module::{Column, Entity};

                    let result = Entity::find()
                        .filter(Column::FirstName.eq(name.first_name.as_str()))
                        .filter(Column::LastName.eq(name.last_name.as_str()))
                        .order_by_asc(Column::Id)
                        .one(&self.db)
                        .await
                        .map_err(|e| {
                            EduError::database_operation(format!(concat!("查询", $label, "失败: {}"), e))
                        })?;

                    Ok(result.map(|m| m.[<into_ $person>]()))
                }
            }
        }
    };
}

impl_person_storage!(student, students, Student, "学生");
impl_person_storage!(teacher, teachers, Teacher, "教师");
