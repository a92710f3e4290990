use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub environment: String,
    pub log_level: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,       // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32,    // 连接池大小
    pub timeout: u64,      // 连接超时 (秒)
    pub sql_logging: bool, // 是否以 debug 级别输出 SQL 语句
}

/// 测试数据生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub students: usize,
    pub groups: usize,
    pub students_per_group: usize,
    pub teachers: usize,
    pub grades_per_student_subject: usize,
}
