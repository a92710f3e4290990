mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use edu_records::models::{
    FullName, Gender, ModelKind, Record,
    grades::{
        entities::GradeLetter,
        requests::{CreateGradeRequest, UpdateGradeRequest},
    },
    groups::requests::{CreateGroupRequest, UpdateGroupRequest},
    people::requests::{CreatePersonRequest, UpdatePersonRequest},
    subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use edu_records::storage::Storage;

use common::{memory_storage, person, school};

#[tokio::test]
async fn test_create_and_find_student() {
    let storage = memory_storage().await;
    let birthdate = NaiveDate::from_ymd_opt(2004, 5, 17);
    let created = storage
        .create_student(CreatePersonRequest::new(
            FullName::new("Taras", "Shevchenko"),
            Gender::Male,
            birthdate,
        ))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.birthdate, birthdate);

    let found = storage
        .find_student_by_name(&FullName::new("Taras", "Shevchenko"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);

    let by_id = storage
        .find_by_id(ModelKind::Student, created.id)
        .await
        .unwrap();
    assert_eq!(by_id, Some(Record::Student(created)));
}

#[tokio::test]
async fn test_students_and_teachers_are_separate() {
    let storage = memory_storage().await;
    storage
        .create_teacher(person("Ada", "Lovelace", Gender::Female))
        .await
        .unwrap();

    let student = storage
        .find_student_by_name(&FullName::new("Ada", "Lovelace"))
        .await
        .unwrap();
    assert!(student.is_none());
    assert!(
        storage
            .find_all(ModelKind::Student)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let ids: Vec<i64> = storage
        .find_all(ModelKind::StudentGrade)
        .await
        .unwrap()
        .iter()
        .map(Record::id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_update_person_changes_only_given_fields() {
    let storage = memory_storage().await;
    let created = storage
        .create_student(person("John", "Doe", Gender::Male))
        .await
        .unwrap();

    let updated = storage
        .update_student(
            created.id,
            UpdatePersonRequest::default().with_name(FullName::new("Johnny", "Doe")),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name, "Johnny");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.gender, Gender::Male);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_empty_update_leaves_row_unchanged() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let before = storage.find_by_id(ModelKind::Grade, 2).await.unwrap();
    let after = storage
        .update_grade(2, UpdateGradeRequest::default())
        .await
        .unwrap()
        .map(Record::from);
    assert_eq!(after, before);

    let group = storage
        .update_group(1, UpdateGroupRequest::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(group.code, "AL-01");
}

#[tokio::test]
async fn test_update_missing_id_returns_none() {
    let storage = memory_storage().await;

    let teacher = storage
        .update_teacher(
            42,
            UpdatePersonRequest {
                gender: Some(Gender::Female),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(teacher.is_none());

    let subject = storage
        .update_subject(
            42,
            UpdateSubjectRequest {
                name: Some("ART".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
    assert!(subject.is_none());
}

#[tokio::test]
async fn test_update_grade_value() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let updated = storage
        .update_grade(
            3,
            UpdateGradeRequest {
                value: Some(2),
                code: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.value, 2);
    assert_eq!(updated.code, GradeLetter::D);

    // 报表读取的是当前分数
    let average = storage.subject_average("MATH").await.unwrap().unwrap();
    assert_eq!(average.average, 3.75);
}

/// 在 school() 的基础上再新建一条指定类型的记录
async fn create_one(storage: &dyn Storage, kind: ModelKind) -> Record {
    let john = FullName::new("John", "Doe");
    let jane = FullName::new("Jane", "Roe");
    let ada = FullName::new("Ada", "Lovelace");

    match kind {
        ModelKind::Student => storage
            .create_student(CreatePersonRequest::new(
                FullName::new("Lesya", "Ukrainka"),
                Gender::Female,
                NaiveDate::from_ymd_opt(1871, 2, 25),
            ))
            .await
            .unwrap()
            .into(),
        ModelKind::Teacher => storage
            .create_teacher(CreatePersonRequest::new(
                FullName::new("Ivan", "Franko"),
                Gender::Male,
                None,
            ))
            .await
            .unwrap()
            .into(),
        ModelKind::Subject => storage
            .create_subject(CreateSubjectRequest {
                name: "MUSIC".to_string(),
                description: None,
            })
            .await
            .unwrap()
            .into(),
        ModelKind::Grade => storage
            .create_grade(CreateGradeRequest {
                value: 4,
                code: GradeLetter::C,
            })
            .await
            .unwrap()
            .into(),
        ModelKind::Group => storage
            .create_group(CreateGroupRequest {
                name: "Bravo".to_string(),
                code: "BR-02".to_string(),
            })
            .await
            .unwrap()
            .into(),
        ModelKind::StudentGroup => storage
            .create_student_group(&jane, "AL-01")
            .await
            .unwrap()
            .into(),
        ModelKind::TeacherSubject => storage
            .create_teacher_subject(&ada, "HISTORY")
            .await
            .unwrap()
            .into(),
        ModelKind::StudentGrade => storage
            .create_student_grade(&john, "HISTORY", GradeLetter::D)
            .await
            .unwrap()
            .into(),
    }
}

#[test_case(ModelKind::Student ; "student")]
#[test_case(ModelKind::Teacher ; "teacher")]
#[test_case(ModelKind::Subject ; "subject")]
#[test_case(ModelKind::Grade ; "grade")]
#[test_case(ModelKind::Group ; "group")]
#[test_case(ModelKind::StudentGroup ; "student group")]
#[test_case(ModelKind::TeacherSubject ; "teacher subject")]
#[test_case(ModelKind::StudentGrade ; "student grade")]
#[tokio::test]
async fn test_created_record_is_found_by_id(kind: ModelKind) {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let created = create_one(storage.as_ref(), kind).await;
    pretty_assertions::assert_eq!(created.kind(), kind);

    let found = storage.find_by_id(kind, created.id()).await.unwrap();
    pretty_assertions::assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_delete_missing_id_leaves_tables_unchanged() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    for kind in ModelKind::ALL {
        let before = storage.find_all(kind).await.unwrap();
        assert!(!storage.delete_by_id(kind, 99).await.unwrap());
        let after = storage.find_all(kind).await.unwrap();
        assert_eq!(after, before, "{kind} changed after deleting a missing id");
    }
}

#[tokio::test]
async fn test_delete_student_cascades_to_links() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    assert!(storage.delete_by_id(ModelKind::Student, 1).await.unwrap());

    let grades = storage.find_all(ModelKind::StudentGrade).await.unwrap();
    assert_eq!(grades.len(), 2);
    assert!(grades.iter().all(|r| match r {
        Record::StudentGrade(g) => g.student_id == 2,
        _ => false,
    }));

    let groups = storage.find_all(ModelKind::StudentGroup).await.unwrap();
    assert_eq!(groups.len(), 1);
}

#[tokio::test]
async fn test_delete_subject_cascades_to_teacher_links() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    assert!(storage.delete_by_id(ModelKind::Subject, 1).await.unwrap());

    assert!(
        storage
            .find_all(ModelKind::TeacherSubject)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        storage
            .find_all(ModelKind::StudentGrade)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_association_with_unknown_names_is_not_found() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let err = storage
        .create_student_group(&FullName::new("Nobody", "Here"), "AL-01")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");

    let err = storage
        .create_teacher_subject(&FullName::new("Ada", "Lovelace"), "ALCHEMY")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");

    let err = storage
        .create_student_group(&FullName::new("John", "Doe"), "ZZ-99")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");
}

#[tokio::test]
async fn test_student_grade_needs_existing_grade_letter() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let err = storage
        .create_student_grade(&FullName::new("John", "Doe"), "MATH", GradeLetter::F)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E005");
}

#[tokio::test]
async fn test_reset_schema_drops_all_rows() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    storage.reset_schema().await.unwrap();

    for kind in [ModelKind::Student, ModelKind::Grade, ModelKind::StudentGrade] {
        assert!(storage.find_all(kind).await.unwrap().is_empty());
    }
}
