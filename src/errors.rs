//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edu_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum EduError {
            $($variant(String),)*
        }

        impl EduError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edu_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    DateParse("E006", "Date Parse Error"),
    Configuration("E007", "Configuration Error"),
    Serialization("E008", "Serialization Error"),
}

impl EduError {
    /// 缺少必填的命令行参数
    pub fn missing_field(name: &str) -> Self {
        EduError::Validation(format!("'{name}' is required, but the value wasn't passed"))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EduError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduError {
    fn from(err: serde_json::Error) -> Self {
        EduError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduError {
    fn from(err: chrono::ParseError) -> Self {
        EduError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for EduError {
    fn from(err: config::ConfigError) -> Self {
        EduError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduError>;
