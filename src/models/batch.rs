//! 生成测试数据时的批量写入

use serde::Serialize;

use super::grades::requests::CreateGradeRequest;
use super::groups::requests::CreateGroupRequest;
use super::people::requests::CreatePersonRequest;
use super::subjects::requests::CreateSubjectRequest;

#[derive(Debug, Clone, Default)]
pub struct BaseBatch {
    pub students: Vec<CreatePersonRequest>,
    pub teachers: Vec<CreatePersonRequest>,
    pub subjects: Vec<CreateSubjectRequest>,
    pub grades: Vec<CreateGradeRequest>,
    pub groups: Vec<CreateGroupRequest>,
}

/// 批量写入后各表新记录的 id，顺序与写入顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseIds {
    pub students: Vec<i64>,
    pub teachers: Vec<i64>,
    pub subjects: Vec<i64>,
    pub grades: Vec<i64>,
    pub groups: Vec<i64>,
}
