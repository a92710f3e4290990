mod common;

use pretty_assertions::assert_eq;

use edu_records::models::{ModelKind, Record};
use edu_records::seed;
use edu_records::storage::Storage;

use common::{memory_storage, small_seed_config};

/// 去掉创建时间后的记录内容
async fn snapshot(storage: &dyn Storage) -> Vec<String> {
    let mut rows = Vec::new();
    for kind in [
        ModelKind::Student,
        ModelKind::Teacher,
        ModelKind::Group,
        ModelKind::StudentGroup,
        ModelKind::TeacherSubject,
        ModelKind::StudentGrade,
    ] {
        for record in storage.find_all(kind).await.unwrap() {
            let row = match record {
                Record::Student(s) => {
                    format!("{} {} {} {:?} {:?}", s.id, s.first_name, s.last_name, s.birthdate, s.gender)
                }
                Record::Teacher(t) => {
                    format!("{} {} {} {:?} {:?}", t.id, t.first_name, t.last_name, t.birthdate, t.gender)
                }
                Record::Group(g) => format!("{} {} {}", g.id, g.name, g.code),
                Record::StudentGroup(l) => format!("{} {} {}", l.id, l.student_id, l.group_id),
                Record::TeacherSubject(l) => format!("{} {} {}", l.id, l.teacher_id, l.subject_id),
                Record::StudentGrade(l) => {
                    format!("{} {} {} {}", l.id, l.student_id, l.grade_id, l.subject_id)
                }
                other => format!("{other:?}"),
            };
            rows.push(format!("{kind}: {row}"));
        }
    }
    rows
}

#[tokio::test]
async fn test_seed_counts() {
    let storage = memory_storage().await;
    let config = small_seed_config();
    let summary = seed::run(storage.as_ref(), &config, Some(1)).await.unwrap();

    assert_eq!(summary.students, 12);
    assert_eq!(summary.teachers, 3);
    assert_eq!(summary.subjects, 8);
    assert_eq!(summary.grades, 6);
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.links.student_groups, 10);
    assert_eq!(summary.links.student_grades, 2 * 12 * 8);

    let stored = storage.find_all(ModelKind::StudentGrade).await.unwrap();
    assert_eq!(stored.len() as u64, summary.links.student_grades);
}

#[tokio::test]
async fn test_same_seed_same_rows() {
    let first = memory_storage().await;
    let second = memory_storage().await;
    let config = small_seed_config();

    seed::run(first.as_ref(), &config, Some(2024)).await.unwrap();
    seed::run(second.as_ref(), &config, Some(2024)).await.unwrap();

    assert_eq!(
        snapshot(first.as_ref()).await,
        snapshot(second.as_ref()).await
    );
}

#[tokio::test]
async fn test_seed_twice_appends() {
    let storage = memory_storage().await;
    let config = small_seed_config();

    seed::run(storage.as_ref(), &config, Some(9)).await.unwrap();
    seed::run(storage.as_ref(), &config, Some(9)).await.unwrap();

    assert_eq!(storage.find_all(ModelKind::Student).await.unwrap().len(), 24);
    assert_eq!(storage.find_all(ModelKind::Grade).await.unwrap().len(), 12);
}
