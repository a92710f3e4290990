//! 命令行接口
//!
//! `edu-records -a <action> -m <Model> [字段]`，每次调用只执行一个操作。

mod dispatch;
mod render;

pub use dispatch::{Outcome, RowSet, dispatch};
pub use render::render;

use clap::{Parser, ValueEnum};

use crate::models::ModelKind;
use crate::models::reports::ReportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliAction {
    Create,
    Update,
    Remove,
    List,
    Report,
    Seed,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// School records CRUD and reporting tool.
#[derive(Debug, Parser)]
#[command(name = "edu-records", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Action to perform
    #[arg(short = 'a', long, value_enum, default_value_t = CliAction::Create)]
    pub action: CliAction,

    /// Model to operate on (Student, Teacher, Subject, Grade, Group, StudentGroup, TeacherSubject, StudentGrade)
    #[arg(short = 'm', long)]
    pub model: Option<ModelKind>,

    /// Full name "First Last" (student or teacher), or the group/subject name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Record id for update/remove
    #[arg(short = 'i', long)]
    pub id: Option<i64>,

    /// Gender: M or F
    #[arg(short = 'g', long)]
    pub gender: Option<String>,

    /// Group code
    #[arg(long)]
    pub group: Option<String>,

    /// Birthdate (YYYY-MM-DD)
    #[arg(short = 'b', long)]
    pub birthdate: Option<String>,

    /// Group code or grade letter
    #[arg(short = 'c', long)]
    pub code: Option<String>,

    /// Grade value
    #[arg(short = 'v', long)]
    pub value: Option<i32>,

    /// Subject description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Subject name
    #[arg(short = 's', long)]
    pub subject: Option<String>,

    /// Grade letter for a student grade record
    #[arg(long)]
    pub grade: Option<String>,

    /// Report to run (name or number 1-12)
    #[arg(short = 'r', long, value_enum)]
    pub report: Option<ReportKind>,

    /// Teacher id for reports
    #[arg(long)]
    pub teacher_id: Option<i64>,

    /// Student id for reports
    #[arg(long)]
    pub student_id: Option<i64>,

    /// RNG seed for reproducible test data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rebuild the schema before seeding
    #[arg(long)]
    pub reset: bool,

    /// Output format for list/report results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_create_student() {
        let args = CliArgs::try_parse_from([
            "edu-records",
            "-m",
            "Student",
            "-n",
            "Taras Shevchenko",
            "-g",
            "M",
            "-b",
            "1814-03-09",
        ])
        .unwrap();

        assert_eq!(args.action, CliAction::Create);
        assert_eq!(args.model, Some(ModelKind::Student));
        assert_eq!(args.name.as_deref(), Some("Taras Shevchenko"));
        assert_eq!(args.birthdate.as_deref(), Some("1814-03-09"));
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_report_by_number() {
        let args = CliArgs::try_parse_from([
            "edu-records",
            "-a",
            "report",
            "-r",
            "7",
            "--group",
            "AL-01",
            "-s",
            "MATH",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.action, CliAction::Report);
        assert_eq!(args.report, Some(ReportKind::GroupSubjectGrades));
        assert_eq!(args.group.as_deref(), Some("AL-01"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!(CliArgs::try_parse_from(["edu-records", "-m", "Homework"]).is_err());
    }
}
