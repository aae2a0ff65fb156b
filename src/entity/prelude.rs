//! 预导入模块，方便使用

pub use super::boards::{ActiveModel as BoardActiveModel, Entity as Boards, Model as BoardModel};
pub use super::classroom_histories::{
    ActiveModel as ClassroomHistoryActiveModel, Entity as ClassroomHistories,
    Model as ClassroomHistoryModel,
};
pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::family_relations::{
    ActiveModel as FamilyRelationActiveModel, Entity as FamilyRelations,
    Model as FamilyRelationModel,
};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::parent_infos::{
    ActiveModel as ParentInfoActiveModel, Entity as ParentInfos, Model as ParentInfoModel,
};
pub use super::school_assets::{
    ActiveModel as AssetActiveModel, Entity as SchoolAssets, Model as AssetModel,
};
pub use super::school_calendars::{
    ActiveModel as CalendarActiveModel, Entity as SchoolCalendars, Model as CalendarModel,
};
pub use super::school_facilities::{
    ActiveModel as FacilityActiveModel, Entity as SchoolFacilities, Model as FacilityModel,
};
pub use super::school_meals::{
    ActiveModel as MealActiveModel, Entity as SchoolMeals, Model as MealModel,
};
pub use super::staff_infos::{
    ActiveModel as StaffInfoActiveModel, Entity as StaffInfos, Model as StaffInfoModel,
};
pub use super::student_assignments::{
    ActiveModel as AssignmentActiveModel, Entity as StudentAssignments, Model as AssignmentModel,
};
pub use super::student_attendances::{
    ActiveModel as AttendanceActiveModel, Entity as StudentAttendances, Model as AttendanceModel,
};
pub use super::student_infos::{
    ActiveModel as StudentInfoActiveModel, Entity as StudentInfos, Model as StudentInfoModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::system_settings::{
    ActiveModel as SystemSettingActiveModel, Entity as SystemSettings, Model as SystemSettingModel,
};
pub use super::teacher_infos::{
    ActiveModel as TeacherInfoActiveModel, Entity as TeacherInfos, Model as TeacherInfoModel,
};
pub use super::teacher_schedules::{
    ActiveModel as ScheduleActiveModel, Entity as TeacherSchedules, Model as ScheduleModel,
};
pub use super::user_roles::{
    ActiveModel as UserRoleActiveModel, Entity as UserRoles, Model as UserRoleModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
