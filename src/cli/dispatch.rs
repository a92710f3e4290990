//! 按 action + model 分派到存储层操作

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::{CliAction, CliArgs};
use crate::config::AppConfig;
use crate::errors::{EduError, Result};
use crate::models::{
    FullName, Gender, ModelKind, Record, Tabular,
    grades::{
        entities::GradeLetter,
        requests::{CreateGradeRequest, UpdateGradeRequest},
    },
    groups::requests::{CreateGroupRequest, UpdateGroupRequest},
    people::requests::{CreatePersonRequest, UpdatePersonRequest},
    reports::{ReportKind, ReportParams, responses::OverallAverage},
    subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use crate::seed;
use crate::storage::Storage;
use crate::utils::validate::{validate_code, validate_description, validate_title};

/// 表格/JSON 输出用的结果集
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub json: serde_json::Value,
}

impl RowSet {
    pub fn from_rows<T: Tabular + Serialize>(rows: &[T]) -> Result<Self> {
        Ok(Self {
            columns: rows.first().map(|r| r.columns().to_vec()).unwrap_or_default(),
            rows: rows.iter().map(|r| r.cells()).collect(),
            json: serde_json::to_value(rows)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 一次调用的执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rows(RowSet),
    Message(String),
}

impl Outcome {
    fn single<T: Tabular + Serialize>(row: T) -> Result<Self> {
        Ok(Outcome::Rows(RowSet::from_rows(&[row])?))
    }

    fn optional<T: Tabular + Serialize>(row: Option<T>) -> Result<Self> {
        let rows: Vec<T> = row.into_iter().collect();
        Ok(Outcome::Rows(RowSet::from_rows(&rows)?))
    }

    fn many<T: Tabular + Serialize>(rows: Vec<T>) -> Result<Self> {
        Ok(Outcome::Rows(RowSet::from_rows(&rows)?))
    }
}

fn require<'a, T: ?Sized>(value: Option<&'a T>, field: &str) -> Result<&'a T> {
    value.ok_or_else(|| EduError::missing_field(field))
}

fn require_model(args: &CliArgs) -> Result<ModelKind> {
    args.model.ok_or_else(|| EduError::missing_field("model"))
}

fn parse_gender(value: &str) -> Result<Gender> {
    value.parse::<Gender>().map_err(EduError::validation)
}

fn parse_grade_letter(value: &str) -> Result<GradeLetter> {
    value.parse::<GradeLetter>().map_err(EduError::validation)
}

fn parse_birthdate(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|e| {
                EduError::date_parse(format!("Invalid birthdate '{v}': {e}, expected YYYY-MM-DD"))
            })
        })
        .transpose()
}

fn checked_title(value: &str, field: &str) -> Result<String> {
    validate_title(value).map_err(|msg| EduError::validation(format!("Invalid {field}: {msg}")))?;
    Ok(value.trim().to_string())
}

fn checked_code(value: &str) -> Result<String> {
    validate_code(value).map_err(|msg| EduError::validation(format!("Invalid code: {msg}")))?;
    Ok(value.trim().to_string())
}

fn checked_description(value: &str) -> Result<String> {
    validate_description(value)
        .map_err(|msg| EduError::validation(format!("Invalid description: {msg}")))?;
    Ok(value.trim().to_string())
}

/// 执行一次命令行调用
pub async fn dispatch(args: &CliArgs, storage: &dyn Storage, config: &AppConfig) -> Result<Outcome> {
    match args.action {
        CliAction::Create => create(args, storage).await,
        CliAction::Update => update(args, storage).await,
        CliAction::Remove => remove(args, storage).await,
        CliAction::List => {
            let model = require_model(args)?;
            let records = storage.find_all(model).await?;
            Outcome::many(records)
        }
        CliAction::Report => report(args, storage).await,
        CliAction::Seed => {
            if args.reset {
                storage.reset_schema().await?;
            }
            let summary = seed::run(storage, &config.seed, args.seed).await?;
            Ok(Outcome::Message(format!(
                "Seeded {} students, {} teachers, {} subjects, {} grades, {} groups, \
                 {} student-group links, {} teacher-subject links, {} student grades",
                summary.students,
                summary.teachers,
                summary.subjects,
                summary.grades,
                summary.groups,
                summary.links.student_groups,
                summary.links.teacher_subjects,
                summary.links.student_grades
            )))
        }
        CliAction::Reset => {
            storage.reset_schema().await?;
            Ok(Outcome::Message("Schema recreated".to_string()))
        }
    }
}

async fn create(args: &CliArgs, storage: &dyn Storage) -> Result<Outcome> {
    let model = require_model(args)?;

    let record: Record = match model {
        ModelKind::Student | ModelKind::Teacher => {
            let name: FullName = require(args.name.as_deref(), "name")?.parse()?;
            let gender = parse_gender(require(args.gender.as_deref(), "gender")?)?;
            let birthdate = parse_birthdate(args.birthdate.as_deref())?;
            let req = CreatePersonRequest::new(name, gender, birthdate);

            if model == ModelKind::Student {
                storage.create_student(req).await?.into()
            } else {
                storage.create_teacher(req).await?.into()
            }
        }
        ModelKind::Subject => {
            let name = checked_title(require(args.name.as_deref(), "name")?, "name")?;
            let description =
                checked_description(require(args.description.as_deref(), "description")?)?;
            storage
                .create_subject(CreateSubjectRequest {
                    name,
                    description: Some(description),
                })
                .await?
                .into()
        }
        ModelKind::Grade => {
            let value = *require(args.value.as_ref(), "value")?;
            let code = parse_grade_letter(require(args.code.as_deref(), "code")?)?;
            storage
                .create_grade(CreateGradeRequest { value, code })
                .await?
                .into()
        }
        ModelKind::Group => {
            let name = checked_title(require(args.name.as_deref(), "name")?, "name")?;
            let code = checked_code(require(args.code.as_deref(), "code")?)?;
            storage
                .create_group(CreateGroupRequest { name, code })
                .await?
                .into()
        }
        ModelKind::StudentGroup => {
            let student: FullName = require(args.name.as_deref(), "name")?.parse()?;
            let group = require(args.group.as_deref(), "group")?;
            storage.create_student_group(&student, group).await?.into()
        }
        ModelKind::TeacherSubject => {
            let teacher: FullName = require(args.name.as_deref(), "name")?.parse()?;
            let subject = require(args.subject.as_deref(), "subject")?;
            storage.create_teacher_subject(&teacher, subject).await?.into()
        }
        ModelKind::StudentGrade => {
            let student: FullName = require(args.name.as_deref(), "name")?.parse()?;
            let subject = require(args.subject.as_deref(), "subject")?;
            let grade = parse_grade_letter(require(args.grade.as_deref(), "grade")?)?;
            storage
                .create_student_grade(&student, subject, grade)
                .await?
                .into()
        }
    };

    info!("已创建 {} id={}", record.kind(), record.id());
    Outcome::single(record)
}

async fn update(args: &CliArgs, storage: &dyn Storage) -> Result<Outcome> {
    let model = require_model(args)?;
    if model.is_association() {
        return Err(EduError::validation(format!(
            "Update is not supported for {model}; remove and create it instead"
        )));
    }
    let id = *require(args.id.as_ref(), "id")?;

    let record: Option<Record> = match model {
        ModelKind::Student | ModelKind::Teacher => {
            let mut req = UpdatePersonRequest {
                gender: args.gender.as_deref().map(parse_gender).transpose()?,
                birthdate: parse_birthdate(args.birthdate.as_deref())?,
                ..Default::default()
            };
            if let Some(name) = args.name.as_deref() {
                req = req.with_name(name.parse()?);
            }

            if model == ModelKind::Student {
                storage.update_student(id, req).await?.map(Record::from)
            } else {
                storage.update_teacher(id, req).await?.map(Record::from)
            }
        }
        ModelKind::Subject => {
            let req = UpdateSubjectRequest {
                name: args
                    .name
                    .as_deref()
                    .map(|n| checked_title(n, "name"))
                    .transpose()?,
                description: args
                    .description
                    .as_deref()
                    .map(checked_description)
                    .transpose()?,
            };
            storage.update_subject(id, req).await?.map(Record::from)
        }
        ModelKind::Grade => {
            let req = UpdateGradeRequest {
                value: args.value,
                code: args.code.as_deref().map(parse_grade_letter).transpose()?,
            };
            storage.update_grade(id, req).await?.map(Record::from)
        }
        ModelKind::Group => {
            let req = UpdateGroupRequest {
                name: args
                    .name
                    .as_deref()
                    .map(|n| checked_title(n, "name"))
                    .transpose()?,
                code: args.code.as_deref().map(checked_code).transpose()?,
            };
            storage.update_group(id, req).await?.map(Record::from)
        }
        // 关联记录已在上面拒绝
        _ => None,
    };

    match record {
        Some(record) => Outcome::single(record),
        None => {
            info!("{} id={} 不存在，未更新", model, id);
            Ok(Outcome::Message(format!("{model} with id {id} not found")))
        }
    }
}

async fn remove(args: &CliArgs, storage: &dyn Storage) -> Result<Outcome> {
    let model = require_model(args)?;
    let id = *require(args.id.as_ref(), "id")?;

    if storage.delete_by_id(model, id).await? {
        info!("已删除 {} id={}", model, id);
        Ok(Outcome::Message(format!("{model} with id {id} removed")))
    } else {
        Ok(Outcome::Message(format!("{model} with id {id} not found")))
    }
}

async fn report(args: &CliArgs, storage: &dyn Storage) -> Result<Outcome> {
    let kind = *require(args.report.as_ref(), "report")?;
    let params = ReportParams {
        subject: args.subject.clone(),
        group: args.group.clone(),
        teacher_id: args.teacher_id,
        student_id: args.student_id,
    };

    run_report(kind, &params, storage).await
}

/// 执行指定报表
pub async fn run_report(
    kind: ReportKind,
    params: &ReportParams,
    storage: &dyn Storage,
) -> Result<Outcome> {
    match kind {
        ReportKind::TopStudents => Outcome::many(storage.top_students().await?),
        ReportKind::BestStudentInSubject => {
            Outcome::optional(storage.best_student_in_subject(params.subject()?).await?)
        }
        ReportKind::SubjectAverage => {
            Outcome::optional(storage.subject_average(params.subject()?).await?)
        }
        ReportKind::OverallAverage => Outcome::single(OverallAverage {
            average: storage.overall_average().await?,
        }),
        ReportKind::TeacherSubjects => {
            Outcome::many(storage.teacher_subjects(params.teacher_id()?).await?)
        }
        ReportKind::GroupStudents => Outcome::many(storage.group_students(params.group()?).await?),
        ReportKind::GroupSubjectGrades => Outcome::many(
            storage
                .group_subject_grades(params.group()?, params.subject()?)
                .await?,
        ),
        ReportKind::TeacherAverages => Outcome::many(storage.teacher_averages().await?),
        ReportKind::StudentCourses => {
            Outcome::many(storage.student_courses(params.student_id()?).await?)
        }
        ReportKind::TeacherStudentCourses => Outcome::many(
            storage
                .teacher_student_courses(params.teacher_id()?, params.student_id()?)
                .await?,
        ),
        ReportKind::TeacherStudentAverage => Outcome::optional(
            storage
                .teacher_student_average(params.teacher_id()?, params.student_id()?)
                .await?,
        ),
        ReportKind::LatestGroupSubjectGrades => {
            let rows = storage
                .latest_group_subject_grades(params.group()?, params.subject()?)
                .await?;
            if rows.is_empty() {
                warn!(
                    "报表 {} 没有结果: 分组 {:?} 科目 {:?}",
                    kind.name(),
                    params.group,
                    params.subject
                );
            }
            Outcome::many(rows)
        }
    }
}
