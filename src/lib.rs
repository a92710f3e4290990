//! edu-records - 学校档案命令行工具
//!
//! 管理学生、教师、科目、分数等级、分组及其关联记录，并提供统计报表。
//!
//! # 架构
//! - `cli`: 命令行参数与结果输出
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `seed`: 测试数据生成
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cli;
pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod seed;
pub mod storage;
pub mod utils;
