use super::entities::GradeLetter;

// 创建分数等级请求
#[derive(Debug, Clone)]
pub struct CreateGradeRequest {
    pub value: i32,
    pub code: GradeLetter,
}

impl From<GradeLetter> for CreateGradeRequest {
    fn from(code: GradeLetter) -> Self {
        Self {
            value: code.default_value(),
            code,
        }
    }
}

// 更新分数等级请求
#[derive(Debug, Clone, Default)]
pub struct UpdateGradeRequest {
    pub value: Option<i32>,
    pub code: Option<GradeLetter>,
}
