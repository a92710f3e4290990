use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};

use super::AppConfig;

impl AppConfig {
    /// 带默认值的配置构建器
    pub fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("database.url", "edu-records.db")?
            .set_default("database.pool_size", 5)?
            .set_default("database.timeout", 30)?
            .set_default("database.sql_logging", false)?
            .set_default("seed.students", 50)?
            .set_default("seed.groups", 3)?
            .set_default("seed.students_per_group", 20)?
            .set_default("seed.teachers", 5)?
            .set_default("seed.grades_per_student_subject", 20)
    }

    /// 加载配置
    ///
    /// 顺序：默认值 -> edu-records.toml -> edu-records.{APP_ENV}.toml -> EDU__* 环境变量 -> 单独的环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::default_builder()?
            .add_source(File::with_name("edu-records").required(false))
            .add_source(
                File::with_name(&format!(
                    "edu-records.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            .add_source(
                Environment::with_prefix("EDU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        builder.build()?.try_deserialize()
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::default_builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.database.url, "edu-records.db");
        assert_eq!(config.database.pool_size, 5);
        assert_eq!(config.seed.students, 50);
        assert_eq!(config.seed.grades_per_student_subject, 20);
    }

    #[test]
    fn test_override_wins_over_default() {
        let config: AppConfig = AppConfig::default_builder()
            .unwrap()
            .set_override("database.url", "postgres://localhost/school")
            .unwrap()
            .set_override("app.environment", "production")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.url, "postgres://localhost/school");
        assert!(config.is_production());
    }
}
