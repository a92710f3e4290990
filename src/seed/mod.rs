//! 测试数据生成
//!
//! 指定随机种子时，两次生成的数据完全相同。

mod names;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::config::SeedConfig;
use crate::errors::Result;
use crate::models::{
    Gender,
    associations::requests::{
        LinkBatch, LinkSummary, NewStudentGrade, NewStudentGroup, NewTeacherSubject,
    },
    batch::{BaseBatch, BaseIds},
    grades::{entities::GradeLetter, requests::CreateGradeRequest},
    groups::requests::CreateGroupRequest,
    people::requests::CreatePersonRequest,
    subjects::{entities::KnownSubject, requests::CreateSubjectRequest},
};
use crate::storage::Storage;

/// 写入结果统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub seed: Option<u64>,
    pub students: usize,
    pub teachers: usize,
    pub subjects: usize,
    pub grades: usize,
    pub groups: usize,
    pub links: LinkSummary,
}

pub struct Seeder {
    config: SeedConfig,
    rng: StdRng,
}

impl Seeder {
    pub fn new(config: SeedConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// 生成基础数据：学生、教师、科目、分数等级、分组
    pub fn base_batch(&mut self) -> BaseBatch {
        let students = (0..self.config.students)
            .map(|_| self.person(1995, 2010))
            .collect();
        let teachers = (0..self.config.teachers)
            .map(|_| self.person(1960, 1995))
            .collect();

        let subjects = KnownSubject::ALL
            .iter()
            .map(|subject| CreateSubjectRequest {
                name: subject.name().to_string(),
                description: Some(format!("'{}' description", subject.name())),
            })
            .collect();

        let grades = GradeLetter::ALL
            .into_iter()
            .map(CreateGradeRequest::from)
            .collect();

        let groups = (0..self.config.groups).map(group_request).collect();

        BaseBatch {
            students,
            teachers,
            subjects,
            grades,
            groups,
        }
    }

    /// 按已写入记录的 id 随机生成关联记录
    pub fn link_batch(&mut self, ids: &BaseIds) -> LinkBatch {
        let mut batch = LinkBatch::default();

        // 学生分组：允许重复
        for _ in 0..self.config.students_per_group * ids.groups.len() {
            if let (Some(student_id), Some(group_id)) =
                (self.pick(&ids.students), self.pick(&ids.groups))
            {
                batch.student_groups.push(NewStudentGroup {
                    student_id,
                    group_id,
                });
            }
        }

        // 教师授课：去重
        let mut teacher_subjects = BTreeSet::new();
        for _ in 0..ids.subjects.len() * ids.teachers.len() {
            if let (Some(teacher_id), Some(subject_id)) =
                (self.pick(&ids.teachers), self.pick(&ids.subjects))
            {
                teacher_subjects.insert(NewTeacherSubject {
                    teacher_id,
                    subject_id,
                });
            }
        }
        batch.teacher_subjects = teacher_subjects.into_iter().collect();

        // 学生成绩：同一学生同一科目可有多条
        let total = self.config.grades_per_student_subject * ids.students.len() * ids.subjects.len();
        for _ in 0..total {
            if let (Some(student_id), Some(grade_id), Some(subject_id)) = (
                self.pick(&ids.students),
                self.pick(&ids.grades),
                self.pick(&ids.subjects),
            ) {
                batch.student_grades.push(NewStudentGrade {
                    student_id,
                    grade_id,
                    subject_id,
                });
            }
        }

        batch
    }

    fn pick(&mut self, ids: &[i64]) -> Option<i64> {
        ids.choose(&mut self.rng).copied()
    }

    fn person(&mut self, from_year: i32, to_year: i32) -> CreatePersonRequest {
        let gender = if self.rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let first_names = match gender {
            Gender::Male => names::MALE_FIRST_NAMES,
            Gender::Female => names::FEMALE_FIRST_NAMES,
        };

        let first_name = first_names.choose(&mut self.rng).copied().unwrap_or("Alex");
        let last_name = names::LAST_NAMES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Smith");

        let birthdate = NaiveDate::from_ymd_opt(
            self.rng.random_range(from_year..=to_year),
            self.rng.random_range(1..=12),
            self.rng.random_range(1..=28),
        );

        CreatePersonRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            gender,
            birthdate,
        }
    }
}

fn group_request(index: usize) -> CreateGroupRequest {
    let base = names::GROUP_NAMES[index % names::GROUP_NAMES.len()];
    let round = index / names::GROUP_NAMES.len();
    let name = if round == 0 {
        base.to_string()
    } else {
        format!("{base} {}", round + 1)
    };
    let prefix: String = base.chars().take(2).collect::<String>().to_uppercase();

    CreateGroupRequest {
        name,
        code: format!("{prefix}-{:02}", index + 1),
    }
}

/// 生成并写入全部测试数据
pub async fn run(storage: &dyn Storage, config: &SeedConfig, seed: Option<u64>) -> Result<SeedSummary> {
    let mut seeder = Seeder::new(config.clone(), seed);

    let base = seeder.base_batch();
    let ids = storage.insert_base_batch(base).await?;

    let links = seeder.link_batch(&ids);
    let links = storage.insert_links(links).await?;

    let summary = SeedSummary {
        seed,
        students: ids.students.len(),
        teachers: ids.teachers.len(),
        subjects: ids.subjects.len(),
        grades: ids.grades.len(),
        groups: ids.groups.len(),
        links,
    };

    info!(
        "测试数据写入完成: 学生 {}, 教师 {}, 科目 {}, 分组 {}, 成绩记录 {}",
        summary.students,
        summary.teachers,
        summary.subjects,
        summary.groups,
        summary.links.student_grades
    );

    Ok(summary)
}
