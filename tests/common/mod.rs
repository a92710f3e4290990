#![allow(dead_code)]

use std::sync::Arc;

use edu_records::config::{AppConfig, DatabaseConfig, SeedConfig};
use edu_records::models::{
    FullName, Gender,
    grades::{entities::GradeLetter, requests::CreateGradeRequest},
    groups::requests::CreateGroupRequest,
    people::requests::CreatePersonRequest,
    subjects::requests::CreateSubjectRequest,
};
use edu_records::storage::{Storage, create_storage};

/// 每次调用都得到一个独立的内存数据库
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
        sql_logging: false,
    };
    create_storage(&config)
        .await
        .expect("in-memory storage should start")
}

pub fn app_config() -> AppConfig {
    AppConfig::default_builder()
        .and_then(|b| b.build())
        .and_then(|c| c.try_deserialize())
        .expect("default config should deserialize")
}

pub fn small_seed_config() -> SeedConfig {
    SeedConfig {
        students: 12,
        groups: 2,
        students_per_group: 5,
        teachers: 3,
        grades_per_student_subject: 2,
    }
}

pub fn person(first: &str, last: &str, gender: Gender) -> CreatePersonRequest {
    CreatePersonRequest::new(FullName::new(first, last), gender, None)
}

/// 两名学生、两门科目、一位教师、一个分组
///
/// - John Doe: MATH A, B, B
/// - Jane Roe: MATH D, HISTORY A
/// - Ada Lovelace 教 MATH
pub async fn school(storage: &dyn Storage) {
    storage
        .create_student(person("John", "Doe", Gender::Male))
        .await
        .unwrap();
    storage
        .create_student(person("Jane", "Roe", Gender::Female))
        .await
        .unwrap();
    storage
        .create_teacher(person("Ada", "Lovelace", Gender::Female))
        .await
        .unwrap();

    for name in ["MATH", "HISTORY"] {
        storage
            .create_subject(CreateSubjectRequest {
                name: name.to_string(),
                description: Some(format!("'{name}' description")),
            })
            .await
            .unwrap();
    }

    for letter in [GradeLetter::A, GradeLetter::B, GradeLetter::D] {
        storage
            .create_grade(CreateGradeRequest::from(letter))
            .await
            .unwrap();
    }

    storage
        .create_group(CreateGroupRequest {
            name: "Alpha".to_string(),
            code: "AL-01".to_string(),
        })
        .await
        .unwrap();

    let john = FullName::new("John", "Doe");
    let jane = FullName::new("Jane", "Roe");

    storage.create_student_group(&john, "AL-01").await.unwrap();
    storage.create_student_group(&jane, "AL-01").await.unwrap();
    storage
        .create_teacher_subject(&FullName::new("Ada", "Lovelace"), "MATH")
        .await
        .unwrap();

    for letter in [GradeLetter::A, GradeLetter::B, GradeLetter::B] {
        storage
            .create_student_grade(&john, "MATH", letter)
            .await
            .unwrap();
    }
    storage
        .create_student_grade(&jane, "MATH", GradeLetter::D)
        .await
        .unwrap();
    storage
        .create_student_grade(&jane, "HISTORY", GradeLetter::A)
        .await
        .unwrap();
}
