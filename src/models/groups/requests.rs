// 创建分组请求
#[derive(Debug, Clone)]
pub struct CreateGroupRequest {
    pub name: String,
    pub code: String,
}

// 更新分组请求
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}
