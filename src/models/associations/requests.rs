use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NewStudentGroup {
    pub student_id: i64,
    pub group_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NewTeacherSubject {
    pub teacher_id: i64,
    pub subject_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewStudentGrade {
    pub student_id: i64,
    pub grade_id: i64,
    pub subject_id: i64,
}

// 批量写入的关联记录（按 id 直接引用，用于生成测试数据）
#[derive(Debug, Clone, Default)]
pub struct LinkBatch {
    pub student_groups: Vec<NewStudentGroup>,
    pub teacher_subjects: Vec<NewTeacherSubject>,
    pub student_grades: Vec<NewStudentGrade>,
}

// 批量写入结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    pub student_groups: u64,
    pub teacher_subjects: u64,
    pub student_grades: u64,
}
