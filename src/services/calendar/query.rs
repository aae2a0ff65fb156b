use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CalendarService, today};
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    calendar::{
        entities::CalendarEvent,
        requests::{EventFeedParams, EventRangeParams, MonthlyEventParams},
        responses::{CalendarEventListResponse, CalendarEventResponse},
    },
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::date::month_bounds;

const DEFAULT_UPCOMING_LIMIT: u64 = 5;
const MAX_UPCOMING_LIMIT: u64 = 50;

fn list_response(result: Result<Vec<CalendarEvent>>) -> HttpResponse {
    match result {
        Ok(events) => {
            let today = today();
            let items = events.into_iter().map(|e| e.into_view(today)).collect();
            HttpResponse::Ok().json(ApiResponse::success(
                CalendarEventListResponse { items },
                "Events retrieved successfully",
            ))
        }
        Err(e) => error_response(&e, None),
    }
}

/// 某月的日程，指定年级时同时包含全校日程
pub async fn monthly_events(
    service: &CalendarService,
    query: MonthlyEventParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some((first, last)) = month_bounds(query.year, query.month) else {
        return Ok(bad_request(ErrorCode::BadRequest, "Invalid year or month"));
    };

    Ok(list_response(
        storage
            .list_events_in_range(first, last, query.grade, None)
            .await,
    ))
}

pub async fn range_events(
    service: &CalendarService,
    query: EventRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if query.end_date < query.start_date {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "End date must not be before start date",
        ));
    }

    Ok(list_response(
        storage
            .list_events_in_range(
                query.start_date,
                query.end_date,
                query.grade,
                query.event_type,
            )
            .await,
    ))
}

/// 日历组件拉取的区间 [start, end)
pub async fn event_feed(
    service: &CalendarService,
    query: EventFeedParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if query.end <= query.start {
        return Ok(bad_request(ErrorCode::BadRequest, "End must be after start"));
    }

    Ok(list_response(
        storage.list_event_feed(query.start, query.end).await,
    ))
}

pub async fn upcoming_events(
    service: &CalendarService,
    limit: Option<u64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let limit = limit
        .unwrap_or(DEFAULT_UPCOMING_LIMIT)
        .clamp(1, MAX_UPCOMING_LIMIT);
    Ok(list_response(
        storage.list_upcoming_events(today(), limit).await,
    ))
}

pub async fn get_event(
    service: &CalendarService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CalendarEventResponse {
                event: event.into_view(today()),
            },
            "Event retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CalendarEventNotFound, "Event not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
