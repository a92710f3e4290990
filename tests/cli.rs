mod common;

use clap::Parser;
use pretty_assertions::assert_eq;

use edu_records::cli::{CliArgs, Outcome, OutputFormat, dispatch, render};
use edu_records::errors::Result;
use edu_records::storage::Storage;

use common::{app_config, memory_storage, school};

async fn run(storage: &dyn Storage, argv: &[&str]) -> Result<Outcome> {
    let args = CliArgs::try_parse_from(std::iter::once("edu-records").chain(argv.iter().copied()))
        .expect("arguments should parse");
    dispatch(&args, storage, &app_config()).await
}

fn rows(outcome: Outcome) -> Vec<Vec<String>> {
    match outcome {
        Outcome::Rows(set) => set.rows,
        Outcome::Message(message) => panic!("expected rows, got message: {message}"),
    }
}

#[tokio::test]
async fn test_create_then_list_student() {
    let storage = memory_storage().await;

    let created = run(
        storage.as_ref(),
        &["-m", "Student", "-n", "Taras Shevchenko", "-g", "M", "-b", "1814-03-09"],
    )
    .await
    .unwrap();
    assert_eq!(rows(created).len(), 1);

    let listed = rows(run(storage.as_ref(), &["-a", "list", "-m", "Student"]).await.unwrap());
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0][0], "1");
    assert_eq!(listed[0][1], "Taras");
}

#[tokio::test]
async fn test_create_requires_fields() {
    let storage = memory_storage().await;

    let err = run(storage.as_ref(), &["-m", "Student", "-n", "John Doe"])
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
    assert!(err.message().contains("'gender'"));

    let err = run(storage.as_ref(), &["-n", "John Doe"]).await.unwrap_err();
    assert!(err.message().contains("'model'"));
}

#[tokio::test]
async fn test_bad_birthdate_is_rejected() {
    let storage = memory_storage().await;

    let err = run(
        storage.as_ref(),
        &["-m", "Teacher", "-n", "Ada Lovelace", "-g", "F", "-b", "10/12/1815"],
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "E006");
}

#[tokio::test]
async fn test_update_and_remove_missing_id() {
    let storage = memory_storage().await;

    let outcome = run(storage.as_ref(), &["-a", "update", "-m", "Group", "-i", "5", "-n", "Bravo"])
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Group with id 5 not found".to_string())
    );

    let outcome = run(storage.as_ref(), &["-a", "remove", "-m", "Group", "-i", "5"])
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Message("Group with id 5 not found".to_string())
    );
}

#[tokio::test]
async fn test_update_association_is_rejected() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let err = run(storage.as_ref(), &["-a", "update", "-m", "StudentGroup", "-i", "1"])
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    // 不需要 id 就能拒绝
    let err = run(storage.as_ref(), &["-a", "update", "-m", "StudentGrade"])
        .await
        .unwrap_err();
    assert!(err.message().contains("Update is not supported for StudentGrade"));
}

#[tokio::test]
async fn test_create_student_grade_by_names() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let created = rows(
        run(
            storage.as_ref(),
            &["-m", "StudentGrade", "-n", "Jane Roe", "-s", "HISTORY", "--grade", "b"],
        )
        .await
        .unwrap(),
    );
    assert_eq!(created[0][0], "6");

    let err = run(
        storage.as_ref(),
        &["-m", "StudentGrade", "-n", "Jane Roe", "-s", "HISTORY", "--grade", "Z"],
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), "E004");
}

#[tokio::test]
async fn test_report_json_output() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let outcome = run(
        storage.as_ref(),
        &["-a", "report", "-r", "3", "-s", "MATH", "--format", "json"],
    )
    .await
    .unwrap();
    let text = render(&outcome, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["subject"], "MATH");
    assert_eq!(value[0]["average"], 4.0);
}

#[tokio::test]
async fn test_report_missing_parameter() {
    let storage = memory_storage().await;

    let err = run(storage.as_ref(), &["-a", "report", "-r", "group-students"])
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
    assert!(err.message().contains("'group'"));
}

#[tokio::test]
async fn test_empty_report_renders_placeholder() {
    let storage = memory_storage().await;

    let outcome = run(storage.as_ref(), &["-a", "report", "-r", "top-students"])
        .await
        .unwrap();
    assert_eq!(
        render(&outcome, OutputFormat::Table).unwrap(),
        "No records found"
    );
}

#[tokio::test]
async fn test_seed_with_reset() {
    let storage = memory_storage().await;
    school(storage.as_ref()).await;

    let outcome = run(storage.as_ref(), &["-a", "seed", "--reset", "--seed", "3"])
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::Message(ref m) if m.starts_with("Seeded 50 students")));

    let students = rows(run(storage.as_ref(), &["-a", "list", "-m", "Student"]).await.unwrap());
    assert_eq!(students.len(), 50);
}
