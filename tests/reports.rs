mod common;

use pretty_assertions::assert_eq;

use edu_records::models::{
    FullName, Gender,
    grades::{entities::GradeLetter, requests::CreateGradeRequest},
    reports::{
        TOP_STUDENTS_LIMIT,
        responses::{GroupStudentRow, StudentCourseRow, TeacherSubjectRow},
    },
    subjects::requests::CreateSubjectRequest,
};
use edu_records::seed;

use common::{memory_storage, person, school, small_seed_config};

#[tokio::test]
async fn test_top_students() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let top = storage.top_students().await.unwrap();
    let summary: Vec<(i64, f64)> = top.iter().map(|s| (s.student_id, s.average)).collect();
    assert_eq!(summary, vec![(1, 4.33), (2, 4.0)]);
}

#[tokio::test]
async fn test_top_students_on_seeded_data() {
    let storage = memory_storage().await;
    seed::run(storage.as_ref(), &small_seed_config(), Some(5))
        .await
        .unwrap();

    let top = storage.top_students().await.unwrap();
    assert_eq!(top.len(), TOP_STUDENTS_LIMIT as usize);
    assert!(top.windows(2).all(|w| w[0].average >= w[1].average));
}

#[tokio::test]
async fn test_best_student_in_subject() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let best = storage
        .best_student_in_subject("MATH")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(best.first_name, "John");
    assert_eq!(best.average, 4.33);

    let best = storage
        .best_student_in_subject("HISTORY")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(best.first_name, "Jane");

    assert!(
        storage
            .best_student_in_subject("ALCHEMY")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_subject_and_overall_average() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let math = storage.subject_average("MATH").await.unwrap().unwrap();
    assert_eq!(math.subject, "MATH");
    assert_eq!(math.average, 4.0);

    assert!(storage.subject_average("ALCHEMY").await.unwrap().is_none());

    assert_eq!(storage.overall_average().await.unwrap(), Some(4.2));
}

#[tokio::test]
async fn test_single_subject_overall_average() {
    let storage = memory_storage().await;
    storage
        .create_student(person("Taras", "Shevchenko", Gender::Male))
        .await
        .unwrap();
    storage
        .create_subject(CreateSubjectRequest {
            name: "MATH".to_string(),
            description: None,
        })
        .await
        .unwrap();
    for letter in [GradeLetter::A, GradeLetter::B] {
        storage
            .create_grade(CreateGradeRequest::from(letter))
            .await
            .unwrap();
    }

    let taras = FullName::new("Taras", "Shevchenko");
    for letter in [GradeLetter::A, GradeLetter::B, GradeLetter::B] {
        storage
            .create_student_grade(&taras, "MATH", letter)
            .await
            .unwrap();
    }

    assert_eq!(storage.overall_average().await.unwrap(), Some(4.33));
    assert_eq!(
        storage.subject_average("MATH").await.unwrap().map(|s| s.average),
        Some(4.33)
    );
}

#[tokio::test]
async fn test_averages_on_empty_database() {
    let storage = memory_storage().await;

    assert!(storage.top_students().await.unwrap().is_empty());
    assert_eq!(storage.overall_average().await.unwrap(), None);
    assert!(storage.teacher_averages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_teacher_subjects() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage.teacher_subjects(1).await.unwrap();
    assert_eq!(
        rows,
        vec![TeacherSubjectRow {
            subject: "MATH".to_string(),
            teacher_first_name: "Ada".to_string(),
            teacher_last_name: "Lovelace".to_string(),
        }]
    );
    assert!(storage.teacher_subjects(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_students() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage.group_students("AL-01").await.unwrap();
    assert_eq!(
        rows,
        vec![
            GroupStudentRow {
                group_name: "Alpha".to_string(),
                group_code: "AL-01".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
            },
            GroupStudentRow {
                group_name: "Alpha".to_string(),
                group_code: "AL-01".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Roe".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_group_subject_grades() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage
        .group_subject_grades("AL-01", "MATH")
        .await
        .unwrap();
    let values: Vec<(&str, i32)> = rows
        .iter()
        .map(|r| (r.first_name.as_str(), r.value))
        .collect();
    assert_eq!(
        values,
        vec![("John", 5), ("John", 4), ("John", 4), ("Jane", 3)]
    );
    assert!(rows.iter().all(|r| r.subject == "MATH" && r.group_code == "AL-01"));
}

#[tokio::test]
async fn test_teacher_averages() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage.teacher_averages().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].teacher_id, 1);
    assert_eq!(rows[0].average, 4.0);
}

#[tokio::test]
async fn test_student_courses() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage.student_courses(2).await.unwrap();
    assert_eq!(
        rows,
        vec![
            StudentCourseRow {
                subject: "HISTORY".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Roe".to_string(),
                records: 1,
            },
            StudentCourseRow {
                subject: "MATH".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Roe".to_string(),
                records: 1,
            },
        ]
    );
}

#[tokio::test]
async fn test_teacher_student_reports() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let courses = storage.teacher_student_courses(1, 1).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].subject, "MATH");
    assert_eq!(courses[0].records, 3);

    let average = storage
        .teacher_student_average(1, 2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(average.average, 3.0);
    assert_eq!(average.student_first_name, "Jane");
    assert_eq!(average.teacher_last_name, "Lovelace");

    assert!(
        storage
            .teacher_student_average(1, 99)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_latest_group_subject_grades() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let rows = storage
        .latest_group_subject_grades("AL-01", "MATH")
        .await
        .unwrap();
    let latest: Vec<(&str, i64, Option<i32>)> = rows
        .iter()
        .map(|r| (r.first_name.as_str(), r.student_grade_id, r.grade_value))
        .collect();
    assert_eq!(latest, vec![("John", 3, Some(4)), ("Jane", 4, Some(3))]);

    assert!(
        storage
            .latest_group_subject_grades("AL-01", "ALCHEMY")
            .await
            .unwrap()
            .is_empty()
    );
}
