//! 预导入模块，方便使用

pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::groups::{ActiveModel as GroupActiveModel, Entity as Groups, Model as GroupModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::students_grades::{
    ActiveModel as StudentGradeActiveModel, Entity as StudentsGrades, Model as StudentGradeModel,
};
pub use super::students_groups::{
    ActiveModel as StudentGroupActiveModel, Entity as StudentsGroups, Model as StudentGroupModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::teachers_subjects::{
    ActiveModel as TeacherSubjectActiveModel, Entity as TeachersSubjects,
    Model as TeacherSubjectModel,
};
