//! 存储层集成测试（内存 SQLite）

use chrono::{NaiveDate, NaiveTime};

use schoolmate::errors::SchoolMateError;
use schoolmate::models::attendance::entities::AttendanceStatus;
use schoolmate::models::attendance::requests::{
    BulkAttendanceEntry, BulkAttendanceRequest, RecordAttendanceRequest,
};
use schoolmate::models::boards::entities::BoardType;
use schoolmate::models::boards::requests::CreateBoardRequest;
use schoolmate::models::calendar::entities::EventType;
use schoolmate::models::calendar::requests::{CreateEventRequest, UpdateEventRequest};
use schoolmate::models::classrooms::entities::{Classroom, ClassroomActionType};
use schoolmate::models::classrooms::requests::{ClassroomImportRow, NewClassroom};
use schoolmate::models::grades::entities::TestType;
use schoolmate::models::grades::requests::{GradeListParams, InputGradeRequest};
use schoolmate::models::parents::entities::{FamilyRelationship, Parent};
use schoolmate::models::parents::requests::{CreateParentRequest, LinkChildRequest};
use schoolmate::models::schedules::entities::{DayOfWeek, RepeatType};
use schoolmate::models::schedules::requests::{CreateScheduleRequest, UpdateScheduleRequest};
use schoolmate::models::students::entities::StudentStatus;
use schoolmate::models::students::requests::CreateStudentRequest;
use schoolmate::models::subjects::requests::CreateSubjectRequest;
use schoolmate::models::teachers::entities::Teacher;
use schoolmate::models::teachers::requests::CreateTeacherRequest;
use schoolmate::models::users::entities::UserRole;
use schoolmate::models::users::requests::CreateUserRequest;
use schoolmate::storage::Storage;
use schoolmate::storage::sea_orm_storage::SeaOrmStorage;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:")
        .await
        .expect("in-memory database")
}

fn student(code: &str, email: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        email: email.to_string(),
        password: "hashed".to_string(),
        name: format!("학생{code}"),
        phone: None,
        code: code.to_string(),
        birth_date: None,
        gender: None,
        address: None,
        basic_habits: None,
        special_notes: None,
        school_year: None,
        classroom_id: None,
        attendance_num: None,
    }
}

async fn new_teacher(storage: &SeaOrmStorage, code: &str) -> Teacher {
    storage
        .create_teacher(CreateTeacherRequest {
            email: format!("{}@school.kr", code.to_lowercase()),
            password: "hashed".to_string(),
            name: "김선생".to_string(),
            phone: None,
            code: code.to_string(),
            subject: Some("국어".to_string()),
            department: None,
            position: None,
            employment_type: None,
        })
        .await
        .expect("create teacher")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

async fn classroom(storage: &SeaOrmStorage, year: i32, grade: i32, class_num: i32) -> Classroom {
    storage
        .create_classroom(
            NewClassroom {
                school_year: year,
                grade,
                class_num,
                homeroom_teacher_id: None,
            },
            "admin@localhost",
        )
        .await
        .expect("create classroom")
}

async fn parent(storage: &SeaOrmStorage, email: &str) -> Parent {
    storage
        .create_parent(CreateParentRequest {
            email: email.to_string(),
            password: "hashed".to_string(),
            name: "학부모".to_string(),
            phone: None,
            code: None,
            emergency_contact: None,
            status: None,
        })
        .await
        .expect("create parent")
}

fn event(
    title: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    target_grade: Option<i32>,
) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        start_date,
        end_date,
        event_type: EventType::Academic,
        target_grade,
        description: None,
    }
}

fn titles(events: &[schoolmate::models::calendar::entities::CalendarEvent]) -> Vec<&str> {
    let mut titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    titles.sort_unstable();
    titles
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn schedule(day: DayOfWeek, period: i32, repeat_type: Option<RepeatType>) -> CreateScheduleRequest {
    CreateScheduleRequest {
        day_of_week: day,
        period,
        start_time: time(8 + period as u32, 0),
        end_time: time(8 + period as u32, 45),
        subject_name: "국어".to_string(),
        class_name: Some("1-1".to_string()),
        location: None,
        repeat_type,
        specific_date: None,
        memo: None,
    }
}

#[tokio::test]
async fn duplicate_student_code_is_rejected() {
    let storage = storage().await;
    storage
        .create_student(student("S2025001", "a@school.kr"))
        .await
        .expect("first student");

    let err = storage
        .create_student(student("S2025001", "b@school.kr"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)), "{err:?}");

    // 失败的插入不能留下账号
    assert!(
        storage
            .get_user_by_email("b@school.kr")
            .await
            .expect("query")
            .is_none()
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let storage = storage().await;
    storage
        .create_student(student("S1", "same@school.kr"))
        .await
        .expect("first student");
    let err = storage
        .create_student(student("S2", "same@school.kr"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));
}

#[tokio::test]
async fn soft_delete_keeps_record_as_dropout() {
    let storage = storage().await;
    let created = storage
        .create_student(student("S2025002", "c@school.kr"))
        .await
        .expect("student");
    assert_eq!(created.status, StudentStatus::Enrolled);

    assert!(
        storage
            .set_student_status(created.id, StudentStatus::Dropout)
            .await
            .expect("status")
    );

    let reloaded = storage
        .get_student_by_id(created.id)
        .await
        .expect("query")
        .expect("still present");
    assert_eq!(reloaded.status, StudentStatus::Dropout);
    assert!(!storage.set_student_status(9999, StudentStatus::Dropout).await.expect("query"));
}

#[tokio::test]
async fn classroom_triple_is_unique_per_year() {
    let storage = storage().await;
    let new = |year| NewClassroom {
        school_year: year,
        grade: 1,
        class_num: 3,
        homeroom_teacher_id: None,
    };

    let first = storage.create_classroom(new(2025), "admin@localhost").await.expect("first");
    assert_eq!(first.student_count, 0);

    let err = storage
        .create_classroom(new(2025), "admin@localhost")
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));

    // 不同学年可以重复
    storage.create_classroom(new(2026), "admin@localhost").await.expect("next year");
}

#[tokio::test]
async fn classroom_with_unknown_teacher_is_not_found() {
    let storage = storage().await;
    let err = storage
        .create_classroom(
            NewClassroom {
                school_year: 2025,
                grade: 2,
                class_num: 1,
                homeroom_teacher_id: Some(404),
            },
            "admin@localhost",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::NotFound(_)));
}

#[tokio::test]
async fn classroom_with_students_cannot_be_deleted() {
    let storage = storage().await;
    let classroom = storage
        .create_classroom(
            NewClassroom {
                school_year: 2025,
                grade: 3,
                class_num: 2,
                homeroom_teacher_id: None,
            },
            "admin@localhost",
        )
        .await
        .expect("classroom");

    let kim = storage.create_student(student("S10", "kim@school.kr")).await.expect("kim");
    let lee = storage.create_student(student("S11", "lee@school.kr")).await.expect("lee");

    let result = storage
        .assign_students(classroom.id, vec![kim.id, lee.id], "admin@localhost")
        .await
        .expect("assign");
    assert_eq!(result.assigned, 2);

    // 学号按分配顺序递增
    let roster = storage.list_classroom_students(classroom.id).await.expect("roster");
    let mut numbers: Vec<_> = roster.iter().filter_map(|s| s.attendance_num).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, vec![1, 2]);

    let err = storage.delete_classroom(classroom.id).await.unwrap_err();
    assert!(matches!(err, SchoolMateError::InvalidState(_)));

    let removed = storage
        .remove_students(classroom.id, vec![kim.id, lee.id], "admin@localhost")
        .await
        .expect("remove");
    assert_eq!(removed, 2);
    assert!(storage.delete_classroom(classroom.id).await.expect("delete"));
    assert!(storage.get_classroom_by_id(classroom.id).await.expect("query").is_none());
}

#[tokio::test]
async fn recurring_schedules_cannot_share_a_period() {
    let storage = storage().await;
    let teacher = new_teacher(&storage, "T100").await;

    let first = storage
        .create_schedule(teacher.id, schedule(DayOfWeek::Monday, 1, None))
        .await
        .expect("first");
    assert_eq!(first.repeat_type, RepeatType::Weekly);

    let err = storage
        .create_schedule(
            teacher.id,
            schedule(DayOfWeek::Monday, 1, Some(RepeatType::Biweekly)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));

    // 单次课表不做冲突检查
    let mut once = schedule(DayOfWeek::Monday, 1, Some(RepeatType::Once));
    once.specific_date = NaiveDate::from_ymd_opt(2025, 3, 10);
    storage.create_schedule(teacher.id, once).await.expect("one-off");

    // 另一位教师同一节次不冲突
    let other = new_teacher(&storage, "T200").await;
    storage
        .create_schedule(other.id, schedule(DayOfWeek::Monday, 1, None))
        .await
        .expect("other teacher");
}

#[tokio::test]
async fn schedule_update_ignores_its_own_slot() {
    let storage = storage().await;
    let teacher = new_teacher(&storage, "T300").await;
    let first = storage
        .create_schedule(teacher.id, schedule(DayOfWeek::Tuesday, 2, None))
        .await
        .expect("first");
    storage
        .create_schedule(teacher.id, schedule(DayOfWeek::Tuesday, 3, None))
        .await
        .expect("second");

    // 只改备注，仍在原节次
    let updated = storage
        .update_schedule(
            first.id,
            UpdateScheduleRequest {
                memo: Some("교과서 지참".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(updated.memo.as_deref(), Some("교과서 지참"));

    // 挪到已占用的节次
    let err = storage
        .update_schedule(
            first.id,
            UpdateScheduleRequest {
                period: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));
}

#[tokio::test]
async fn weekend_has_no_schedules() {
    let storage = storage().await;
    let teacher = new_teacher(&storage, "T400").await;
    storage
        .create_schedule(teacher.id, schedule(DayOfWeek::Friday, 1, None))
        .await
        .expect("friday");

    let friday = NaiveDate::from_ymd_opt(2025, 3, 14).expect("date");
    let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).expect("date");
    assert_eq!(
        storage
            .list_schedules_on_date(teacher.id, friday)
            .await
            .expect("friday")
            .len(),
        1
    );
    assert!(
        storage
            .list_schedules_on_date(teacher.id, saturday)
            .await
            .expect("saturday")
            .is_empty()
    );
}

#[tokio::test]
async fn last_role_cannot_be_removed() {
    let storage = storage().await;
    let user = storage
        .create_user(CreateUserRequest {
            email: "nurse@school.kr".to_string(),
            password: "hashed".to_string(),
            name: "보건교사".to_string(),
            phone: None,
            roles: vec![UserRole::Nurse],
            profile_image: None,
        })
        .await
        .expect("user");

    let with_staff = storage
        .add_user_role(user.id, UserRole::Staff)
        .await
        .expect("add")
        .expect("exists");
    assert!(with_staff.roles.contains(&UserRole::Staff));

    // 重复添加不报错
    let again = storage
        .add_user_role(user.id, UserRole::Staff)
        .await
        .expect("add again")
        .expect("exists");
    assert_eq!(again.roles.len(), 2);

    let only_nurse = storage
        .remove_user_role(user.id, UserRole::Staff)
        .await
        .expect("remove")
        .expect("exists");
    assert_eq!(only_nurse.roles, vec![UserRole::Nurse]);

    let err = storage
        .remove_user_role(user.id, UserRole::Nurse)
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::InvalidState(_)));
}

#[tokio::test]
async fn once_schedule_appears_only_on_its_date() {
    let storage = storage().await;
    let teacher = new_teacher(&storage, "T410").await;

    // 星期字段与具体日期不一致时以具体日期为准
    let mut once = schedule(DayOfWeek::Monday, 5, Some(RepeatType::Once));
    once.specific_date = Some(date(2025, 3, 12));
    storage.create_schedule(teacher.id, once).await.expect("one-off");

    let on_wednesday = storage
        .list_schedules_on_date(teacher.id, date(2025, 3, 12))
        .await
        .expect("wednesday");
    assert_eq!(on_wednesday.len(), 1);
    assert_eq!(on_wednesday[0].period, 5);

    let on_monday = storage
        .list_schedules_on_date(teacher.id, date(2025, 3, 10))
        .await
        .expect("monday");
    assert!(on_monday.is_empty());
}

#[tokio::test]
async fn recurring_schedule_drops_specific_date() {
    let storage = storage().await;
    let teacher = new_teacher(&storage, "T420").await;
    let mut once = schedule(DayOfWeek::Thursday, 2, Some(RepeatType::Once));
    once.specific_date = Some(date(2025, 3, 13));
    let created = storage.create_schedule(teacher.id, once).await.expect("one-off");
    assert_eq!(created.specific_date, Some(date(2025, 3, 13)));

    let weekly = storage
        .update_schedule(
            created.id,
            UpdateScheduleRequest {
                repeat_type: Some(RepeatType::Weekly),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(weekly.repeat_type, RepeatType::Weekly);
    assert_eq!(weekly.specific_date, None);

    // 之后的每个星期四都出现
    let next_thursday = storage
        .list_schedules_on_date(teacher.id, date(2025, 3, 20))
        .await
        .expect("thursday");
    assert_eq!(next_thursday.len(), 1);
}

#[tokio::test]
async fn calendar_range_includes_overlapping_and_school_wide_events() {
    let storage = storage().await;
    for req in [
        event("봄방학", date(2025, 3, 28), Some(date(2025, 4, 2)), None),
        event("과학의 날", date(2025, 4, 21), None, None),
        event("입학식", date(2025, 3, 3), None, None),
        event("2학년 현장체험", date(2025, 4, 15), None, Some(2)),
        event("1학년 진단평가", date(2025, 4, 16), None, Some(1)),
        event("중간고사", date(2025, 4, 28), Some(date(2025, 5, 2)), None),
    ] {
        storage.create_event(req).await.expect("event");
    }

    let april = storage
        .list_events_in_range(date(2025, 4, 1), date(2025, 4, 30), None, None)
        .await
        .expect("april");
    assert_eq!(
        titles(&april),
        vec!["1학년 진단평가", "2학년 현장체험", "과학의 날", "봄방학", "중간고사"]
    );

    // 年级过滤时全校日程仍然可见
    let second_grade = storage
        .list_events_in_range(date(2025, 4, 1), date(2025, 4, 30), Some(2), None)
        .await
        .expect("grade 2");
    assert_eq!(
        titles(&second_grade),
        vec!["2학년 현장체험", "과학의 날", "봄방학", "중간고사"]
    );

    let holidays = storage
        .list_events_in_range(
            date(2025, 4, 1),
            date(2025, 4, 30),
            None,
            Some(EventType::Holiday),
        )
        .await
        .expect("holidays");
    assert!(holidays.is_empty());
}

#[tokio::test]
async fn calendar_feed_is_half_open() {
    let storage = storage().await;
    for req in [
        event("봄방학", date(2025, 3, 28), Some(date(2025, 4, 2)), None),
        event("식목일 행사", date(2025, 4, 5), None, None),
        event("과학의 날", date(2025, 4, 10), None, None),
        event("입학식", date(2025, 3, 3), None, None),
    ] {
        storage.create_event(req).await.expect("event");
    }

    let feed = storage
        .list_event_feed(date(2025, 4, 1), date(2025, 4, 10))
        .await
        .expect("feed");
    assert_eq!(titles(&feed), vec!["봄방학", "식목일 행사"]);
}

#[tokio::test]
async fn event_update_can_clear_optional_fields() {
    let storage = storage().await;
    let created = storage
        .create_event(event(
            "2학년 수학여행",
            date(2025, 5, 20),
            Some(date(2025, 5, 22)),
            Some(2),
        ))
        .await
        .expect("event");

    // 未设置清除标记时保持原值
    let renamed = storage
        .update_event(
            created.id,
            UpdateEventRequest {
                title: Some("수학여행".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(renamed.end_date, Some(date(2025, 5, 22)));
    assert_eq!(renamed.target_grade, Some(2));

    let cleared = storage
        .update_event(
            created.id,
            UpdateEventRequest {
                clear_end_date: true,
                clear_target_grade: true,
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(cleared.end_date, None);
    assert_eq!(cleared.target_grade, None);
    assert_eq!(cleared.title, "수학여행");
}

#[tokio::test]
async fn assign_moves_students_between_classes_of_the_same_year() {
    let storage = storage().await;
    let first = classroom(&storage, 2025, 1, 1).await;
    let second = classroom(&storage, 2025, 1, 2).await;
    let kim = storage.create_student(student("S20", "kim20@school.kr")).await.expect("kim");
    let lee = storage.create_student(student("S21", "lee21@school.kr")).await.expect("lee");
    let park = storage.create_student(student("S22", "park22@school.kr")).await.expect("park");

    storage
        .assign_students(first.id, vec![kim.id, lee.id], "admin@localhost")
        .await
        .expect("first class");
    storage
        .assign_students(second.id, vec![park.id], "admin@localhost")
        .await
        .expect("second class");

    let result = storage
        .assign_students(second.id, vec![kim.id, park.id], "admin@localhost")
        .await
        .expect("move");
    assert_eq!((result.assigned, result.moved, result.skipped), (0, 1, 1));

    let roster = storage.list_classroom_students(second.id).await.expect("roster");
    let kim_num = roster
        .iter()
        .find(|s| s.student_id == kim.id)
        .and_then(|s| s.attendance_num);
    assert_eq!(kim_num, Some(2));
    let remaining = storage.list_classroom_students(first.id).await.expect("roster");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].student_id, lee.id);

    let out = storage.list_classroom_histories(first.id).await.expect("history");
    assert!(out.iter().any(|h| h.action_type == ClassroomActionType::TransferOut));
    let incoming = storage.list_classroom_histories(second.id).await.expect("history");
    assert_eq!(
        incoming
            .iter()
            .filter(|h| h.action_type == ClassroomActionType::AssignStudent)
            .count(),
        2
    );
}

#[tokio::test]
async fn transfer_appends_to_target_and_records_both_sides() {
    let storage = storage().await;
    let source = classroom(&storage, 2025, 2, 1).await;
    let target = classroom(&storage, 2025, 2, 2).await;
    let kim = storage.create_student(student("S30", "kim30@school.kr")).await.expect("kim");
    let lee = storage.create_student(student("S31", "lee31@school.kr")).await.expect("lee");
    let park = storage.create_student(student("S32", "park32@school.kr")).await.expect("park");
    storage
        .assign_students(source.id, vec![kim.id, lee.id], "admin@localhost")
        .await
        .expect("source");
    storage
        .assign_students(target.id, vec![park.id], "admin@localhost")
        .await
        .expect("target");

    storage
        .transfer_student(source.id, kim.id, target.id, "admin@localhost")
        .await
        .expect("transfer");

    let roster = storage.list_classroom_students(target.id).await.expect("roster");
    let kim_num = roster
        .iter()
        .find(|s| s.student_id == kim.id)
        .and_then(|s| s.attendance_num);
    assert_eq!(kim_num, Some(2));

    let source_history = storage.list_classroom_histories(source.id).await.expect("history");
    assert!(
        source_history
            .iter()
            .any(|h| h.action_type == ClassroomActionType::TransferOut)
    );
    let target_history = storage.list_classroom_histories(target.id).await.expect("history");
    assert!(
        target_history
            .iter()
            .any(|h| h.action_type == ClassroomActionType::TransferIn)
    );

    // 不在原班的学生不能转出
    let err = storage
        .transfer_student(source.id, park.id, target.id, "admin@localhost")
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::NotFound(_)));
}

#[tokio::test]
async fn new_representative_guardian_replaces_the_old_one() {
    let storage = storage().await;
    let child = storage.create_student(student("S40", "child@school.kr")).await.expect("child");
    let dad = parent(&storage, "dad@home.kr").await;
    let mom = parent(&storage, "mom@home.kr").await;

    storage
        .link_child(
            dad.id,
            LinkChildRequest {
                student_id: child.id,
                relationship: FamilyRelationship::Father,
                is_representative: true,
            },
        )
        .await
        .expect("dad");
    storage
        .link_child(
            mom.id,
            LinkChildRequest {
                student_id: child.id,
                relationship: FamilyRelationship::Mother,
                is_representative: true,
            },
        )
        .await
        .expect("mom");

    let dad_children = storage.list_children(dad.id).await.expect("dad children");
    assert_eq!(dad_children.len(), 1);
    assert!(!dad_children[0].is_representative);
    let mom_children = storage.list_children(mom.id).await.expect("mom children");
    assert!(mom_children[0].is_representative);

    let err = storage
        .link_child(
            mom.id,
            LinkChildRequest {
                student_id: child.id,
                relationship: FamilyRelationship::Mother,
                is_representative: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));
}

#[tokio::test]
async fn grade_input_overwrites_the_same_exam() {
    let storage = storage().await;
    let kim = storage.create_student(student("S50", "kim50@school.kr")).await.expect("kim");
    storage
        .create_subject(CreateSubjectRequest {
            code: "MATH1".to_string(),
            name: "수학".to_string(),
            grade: 1,
            credits: Some(4),
            teacher_id: None,
        })
        .await
        .expect("subject");

    let input = |score| InputGradeRequest {
        student_id: kim.id,
        subject_code: "MATH1".to_string(),
        test_type: TestType::MidtermTest,
        semester: 1,
        grade_year: 2025,
        score,
    };
    let first = storage.input_grade(input(80.0)).await.expect("first");
    let second = storage.input_grade(input(95.5)).await.expect("second");
    assert_eq!(first.id, second.id);
    assert_eq!(second.score, 95.5);

    let grades = storage
        .list_grades(GradeListParams {
            student_id: Some(kim.id),
            ..Default::default()
        })
        .await
        .expect("grades");
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].score, 95.5);

    // 期末考试是另一条记录
    storage
        .input_grade(InputGradeRequest {
            test_type: TestType::FinalTest,
            ..input(70.0)
        })
        .await
        .expect("final");
    let grades = storage
        .list_grades(GradeListParams {
            student_id: Some(kim.id),
            ..Default::default()
        })
        .await
        .expect("grades");
    assert_eq!(grades.len(), 2);
}

#[tokio::test]
async fn attendance_is_one_record_per_student_and_day() {
    let storage = storage().await;
    let room = classroom(&storage, 2025, 3, 1).await;
    let kim = storage.create_student(student("S60", "kim60@school.kr")).await.expect("kim");
    let outsider = storage.create_student(student("S61", "out61@school.kr")).await.expect("outsider");
    storage
        .assign_students(room.id, vec![kim.id], "admin@localhost")
        .await
        .expect("assign");

    let day = date(2025, 3, 17);
    let record = |status| RecordAttendanceRequest {
        student_id: kim.id,
        attendance_date: day,
        status,
        check_in_time: None,
        reason: None,
    };
    let first = storage.record_attendance(record(AttendanceStatus::Present)).await.expect("present");
    let again = storage.record_attendance(record(AttendanceStatus::Late)).await.expect("late");
    assert_eq!(first.id, again.id);

    let history = storage
        .list_student_attendance(kim.id, day, day)
        .await
        .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, AttendanceStatus::Late);

    // 非本班学生使整批失败
    let next_day = date(2025, 3, 18);
    let err = storage
        .bulk_record_attendance(BulkAttendanceRequest {
            classroom_id: room.id,
            attendance_date: next_day,
            records: vec![
                BulkAttendanceEntry {
                    student_id: kim.id,
                    status: AttendanceStatus::Present,
                    check_in_time: None,
                    reason: None,
                },
                BulkAttendanceEntry {
                    student_id: outsider.id,
                    status: AttendanceStatus::Present,
                    check_in_time: None,
                    reason: None,
                },
            ],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Validation(_)), "{err:?}");
    assert!(
        storage
            .list_classroom_attendance(room.id, next_day)
            .await
            .expect("classroom attendance")
            .is_empty()
    );
}

#[tokio::test]
async fn deleted_board_is_not_found() {
    let storage = storage().await;
    let writer = new_teacher(&storage, "T700").await;
    let board = storage
        .create_board(
            writer.user_id,
            CreateBoardRequest {
                board_type: BoardType::SchoolNotice,
                title: "개학 안내".to_string(),
                content: "3월 4일 개학합니다.".to_string(),
                target_grade: None,
                target_classroom_id: None,
                is_pinned: false,
            },
        )
        .await
        .expect("board");
    assert!(storage.get_board_by_id(board.id).await.expect("query").is_some());

    assert!(storage.soft_delete_board(board.id).await.expect("delete"));
    assert!(storage.get_board_by_id(board.id).await.expect("query").is_none());
    // 再次删除视为不存在
    assert!(!storage.soft_delete_board(board.id).await.expect("delete again"));
    assert!(!storage.set_board_pinned(board.id, true).await.expect("pin"));
}

#[tokio::test]
async fn classroom_import_creates_and_assigns() {
    let storage = storage().await;
    let homeroom = new_teacher(&storage, "T800").await;
    let kim = storage.create_student(student("S80", "kim80@school.kr")).await.expect("kim");
    let lee = storage.create_student(student("S81", "lee81@school.kr")).await.expect("lee");
    let existing = classroom(&storage, 2025, 1, 2).await;

    let result = storage
        .import_classrooms(
            vec![
                ClassroomImportRow {
                    school_year: 2025,
                    grade: 1,
                    class_num: 1,
                    teacher_code: Some("T800".to_string()),
                    student_codes: vec!["S80".to_string(), "S81".to_string(), "S404".to_string()],
                },
                ClassroomImportRow {
                    school_year: 2025,
                    grade: 1,
                    class_num: 2,
                    teacher_code: None,
                    student_codes: vec!["S81".to_string()],
                },
            ],
            "admin@localhost",
        )
        .await
        .expect("import");
    assert_eq!(result.classrooms, 2);
    assert_eq!(result.created, 1);
    assert_eq!((result.assigned, result.moved), (2, 1));
    assert_eq!(result.unknown_student_codes, vec!["S404".to_string()]);

    let existing_roster = storage.list_classroom_students(existing.id).await.expect("roster");
    assert_eq!(existing_roster.len(), 1);
    assert_eq!(existing_roster[0].student_id, lee.id);

    let found = storage
        .find_homeroom_classroom(homeroom.id, 2025)
        .await
        .expect("homeroom")
        .expect("assigned");
    let roster = storage.list_classroom_students(found.id).await.expect("roster");
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].student_id, kim.id);
}

#[tokio::test]
async fn classroom_import_with_unknown_teacher_rolls_back() {
    let storage = storage().await;
    let err = storage
        .import_classrooms(
            vec![
                ClassroomImportRow {
                    school_year: 2025,
                    grade: 2,
                    class_num: 1,
                    teacher_code: None,
                    student_codes: Vec::new(),
                },
                ClassroomImportRow {
                    school_year: 2025,
                    grade: 2,
                    class_num: 2,
                    teacher_code: Some("T404".to_string()),
                    student_codes: Vec::new(),
                },
            ],
            "admin@localhost",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::NotFound(_)));

    // 第一行创建的班级也被回滚
    classroom(&storage, 2025, 2, 1).await;
}

#[tokio::test]
async fn teacher_import_is_all_or_nothing() {
    let storage = storage().await;
    let row = |code: &str, email: &str| CreateTeacherRequest {
        email: email.to_string(),
        password: "hashed".to_string(),
        name: "이선생".to_string(),
        phone: None,
        code: code.to_string(),
        subject: None,
        department: None,
        position: None,
        employment_type: None,
    };

    let err = storage
        .import_teachers(vec![
            row("T900", "t900@school.kr"),
            row("T900", "t901@school.kr"),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolMateError::Conflict(_)));
    assert!(storage.get_teacher_by_code("T900").await.expect("query").is_none());
    assert!(
        storage
            .get_user_by_email("t900@school.kr")
            .await
            .expect("query")
            .is_none()
    );

    let imported = storage
        .import_teachers(vec![
            row("T900", "t900@school.kr"),
            row("T901", "t901@school.kr"),
        ])
        .await
        .expect("import");
    assert_eq!(imported, 2);
    let found = storage.get_teacher_by_code("T901").await.expect("query").expect("exists");
    assert_eq!(found.email, "t901@school.kr");
}
