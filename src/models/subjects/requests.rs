// 创建科目请求
#[derive(Debug, Clone)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub description: Option<String>,
}

// 更新科目请求
#[derive(Debug, Clone, Default)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
