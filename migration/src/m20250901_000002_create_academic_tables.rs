use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_people_tables::{StudentInfos, TeacherInfos};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 班级表
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classrooms::SchoolYear).integer().not_null())
                    .col(ColumnDef::new(Classrooms::Grade).integer().not_null())
                    .col(ColumnDef::new(Classrooms::ClassNum).integer().not_null())
                    .col(
                        ColumnDef::new(Classrooms::HomeroomTeacherId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Classrooms::Status).string().not_null())
                    .col(ColumnDef::new(Classrooms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classrooms::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classrooms::Table, Classrooms::HomeroomTeacherId)
                            .to(TeacherInfos::Table, TeacherInfos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级变更历史表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomHistories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomHistories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomHistories::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomHistories::ActionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomHistories::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomHistories::CreatedBy)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomHistories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomHistories::Table, ClassroomHistories::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学年分班表
        manager
            .create_table(
                Table::create()
                    .table(StudentAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignments::StudentInfoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignments::SchoolYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignments::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAssignments::AttendanceNum)
                            .integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAssignments::Table, StudentAssignments::StudentInfoId)
                            .to(StudentInfos::Table, StudentInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAssignments::Table, StudentAssignments::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Grade).integer().not_null())
                    .col(ColumnDef::new(Subjects::Credits).integer().null())
                    .col(ColumnDef::new(Subjects::TeacherInfoId).big_integer().null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::TeacherInfoId)
                            .to(TeacherInfos::Table, TeacherInfos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentInfoId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::SubjectCode).string().not_null())
                    .col(ColumnDef::new(Grades::TestType).string().not_null())
                    .col(ColumnDef::new(Grades::Semester).integer().not_null())
                    .col(ColumnDef::new(Grades::GradeYear).integer().not_null())
                    .col(ColumnDef::new(Grades::Score).double().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentInfoId)
                            .to(StudentInfos::Table, StudentInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::SubjectCode)
                            .to(Subjects::Table, Subjects::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 出勤表
        manager
            .create_table(
                Table::create()
                    .table(StudentAttendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAttendances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAttendances::StudentInfoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAttendances::AttendanceDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentAttendances::Status).string().not_null())
                    .col(ColumnDef::new(StudentAttendances::CheckInTime).time().null())
                    .col(ColumnDef::new(StudentAttendances::Reason).string().null())
                    .col(
                        ColumnDef::new(StudentAttendances::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAttendances::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAttendances::Table, StudentAttendances::StudentInfoId)
                            .to(StudentInfos::Table, StudentInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教师课表
        manager
            .create_table(
                Table::create()
                    .table(TeacherSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherSchedules::TeacherInfoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherSchedules::DayOfWeek).string().not_null())
                    .col(ColumnDef::new(TeacherSchedules::Period).integer().not_null())
                    .col(ColumnDef::new(TeacherSchedules::StartTime).time().not_null())
                    .col(ColumnDef::new(TeacherSchedules::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(TeacherSchedules::SubjectName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherSchedules::ClassName).string().null())
                    .col(ColumnDef::new(TeacherSchedules::Location).string().null())
                    .col(
                        ColumnDef::new(TeacherSchedules::RepeatType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherSchedules::SpecificDate).date().null())
                    .col(ColumnDef::new(TeacherSchedules::Memo).text().null())
                    .col(
                        ColumnDef::new(TeacherSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherSchedules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherSchedules::Table, TeacherSchedules::TeacherInfoId)
                            .to(TeacherInfos::Table, TeacherInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classrooms_year_grade_class")
                    .table(Classrooms::Table)
                    .col(Classrooms::SchoolYear)
                    .col(Classrooms::Grade)
                    .col(Classrooms::ClassNum)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_assignments_student_year")
                    .table(StudentAssignments::Table)
                    .col(StudentAssignments::StudentInfoId)
                    .col(StudentAssignments::SchoolYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_assignments_classroom")
                    .table(StudentAssignments::Table)
                    .col(StudentAssignments::ClassroomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_unique_entry")
                    .table(Grades::Table)
                    .col(Grades::StudentInfoId)
                    .col(Grades::SubjectCode)
                    .col(Grades::TestType)
                    .col(Grades::Semester)
                    .col(Grades::GradeYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendances_student_date")
                    .table(StudentAttendances::Table)
                    .col(StudentAttendances::StudentInfoId)
                    .col(StudentAttendances::AttendanceDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teacher_schedules_teacher_day")
                    .table(TeacherSchedules::Table)
                    .col(TeacherSchedules::TeacherInfoId)
                    .col(TeacherSchedules::DayOfWeek)
                    .col(TeacherSchedules::Period)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAttendances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomHistories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Classrooms {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
    SchoolYear,
    Grade,
    ClassNum,
    HomeroomTeacherId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassroomHistories {
    #[sea_orm(iden = "classroom_histories")]
    Table,
    Id,
    ClassroomId,
    ActionType,
    Description,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentAssignments {
    #[sea_orm(iden = "student_assignments")]
    Table,
    Id,
    StudentInfoId,
    SchoolYear,
    ClassroomId,
    AttendanceNum,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Code,
    Name,
    Grade,
    Credits,
    TeacherInfoId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentInfoId,
    SubjectCode,
    TestType,
    Semester,
    GradeYear,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentAttendances {
    #[sea_orm(iden = "student_attendances")]
    Table,
    Id,
    StudentInfoId,
    AttendanceDate,
    Status,
    CheckInTime,
    Reason,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherSchedules {
    #[sea_orm(iden = "teacher_schedules")]
    Table,
    Id,
    TeacherInfoId,
    DayOfWeek,
    Period,
    StartTime,
    EndTime,
    SubjectName,
    ClassName,
    Location,
    RepeatType,
    SpecificDate,
    Memo,
    CreatedAt,
    UpdatedAt,
}
