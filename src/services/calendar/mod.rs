pub mod import;
pub mod manage;
pub mod query;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::models::calendar::requests::{
    CreateEventRequest, EventFeedParams, EventRangeParams, MonthlyEventParams,
    UpdateEventRequest,
};
use crate::storage::Storage;

pub struct CalendarService {
    storage: Option<Arc<dyn Storage>>,
}

impl CalendarService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn monthly_events(
        &self,
        query: MonthlyEventParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::monthly_events(self, query, request).await
    }

    pub async fn range_events(
        &self,
        query: EventRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::range_events(self, query, request).await
    }

    pub async fn event_feed(
        &self,
        query: EventFeedParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::event_feed(self, query, request).await
    }

    pub async fn upcoming_events(
        &self,
        limit: Option<u64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::upcoming_events(self, limit, request).await
    }

    pub async fn get_event(&self, event_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        query::get_event(self, event_id, request).await
    }

    pub async fn create_event(
        &self,
        event_data: CreateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_event(self, event_data, request).await
    }

    pub async fn update_event(
        &self,
        event_id: i64,
        update_data: UpdateEventRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_event(self, event_id, update_data, request).await
    }

    pub async fn delete_event(
        &self,
        event_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_event(self, event_id, request).await
    }

    pub async fn import_events(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_events(self, payload, request).await
    }
}

/// 本地日期，用于 D-day 计算
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
