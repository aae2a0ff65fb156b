pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::SchoolMateError;
use crate::models::ErrorCode;
use crate::models::schedules::entities::{DayOfWeek, TeacherSchedule};
use crate::models::schedules::requests::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn today_schedules(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::today_schedules(self, request).await
    }

    pub async fn all_schedules(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::all_schedules(self, request).await
    }

    pub async fn schedules_by_day(
        &self,
        day: DayOfWeek,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::schedules_by_day(self, day, request).await
    }

    pub async fn get_schedule(
        &self,
        schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_schedule(self, schedule_id, request).await
    }

    pub async fn create_schedule(
        &self,
        schedule_data: CreateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_schedule(self, schedule_data, request).await
    }

    pub async fn update_schedule(
        &self,
        schedule_id: i64,
        update_data: UpdateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_schedule(self, schedule_id, update_data, request).await
    }

    pub async fn delete_schedule(
        &self,
        schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_schedule(self, schedule_id, request).await
    }
}

/// 当前登录用户对应的教师信息
async fn current_teacher(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<Teacher, HttpResponse> {
    let user = super::current_user(request)?;
    match storage.get_teacher_by_user_id(user.id).await {
        Ok(Some(teacher)) => Ok(teacher),
        Ok(None) => Err(super::not_found(
            ErrorCode::TeacherNotFound,
            "Teacher information not found for current user",
        )),
        Err(e) => Err(super::error_response(&e, None)),
    }
}

/// 课表只能由本人查看和修改
fn ensure_owner(schedule: &TeacherSchedule, teacher: &Teacher) -> Result<(), SchoolMateError> {
    if schedule.teacher_id != teacher.id {
        return Err(SchoolMateError::authorization(
            "This schedule belongs to another teacher",
        ));
    }
    Ok(())
}
