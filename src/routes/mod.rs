pub mod assets;
pub mod attendance;
pub mod auth;
pub mod boards;
pub mod calendar;
pub mod classrooms;
pub mod facilities;
pub mod files;
pub mod grades;
pub mod meals;
pub mod notifications;
pub mod parents;
pub mod schedules;
pub mod staff;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use assets::configure_asset_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use boards::configure_board_routes;
pub use calendar::configure_calendar_routes;
pub use classrooms::configure_classroom_routes;
pub use facilities::configure_facility_routes;
pub use files::configure_file_routes;
pub use grades::configure_grade_routes;
pub use meals::configure_meal_routes;
pub use notifications::configure_notification_routes;
pub use parents::configure_parent_routes;
pub use schedules::configure_schedule_routes;
pub use staff::configure_staff_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
