//! 学校日程 CSV 导入
//!
//! 必需列 title、start_date，可选列 end_date、event_type、target_grade、description。
//! 类型可以写取值或显示名，留空时为 ETC。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CalendarService;
use super::manage::validate_event;
use crate::models::ErrorCode;
use crate::models::calendar::{entities::EventType, requests::CreateEventRequest};
use crate::models::common::ImportRowError;
use crate::services::csv_import::{
    CsvSheet, ImportParseError, imported_response, load_sheet, reject_rows, row_error,
};
use crate::services::error_response;

const TITLE: &[&str] = &["title", "일정명"];
const START_DATE: &[&str] = &["start_date", "시작일"];
const END_DATE: &[&str] = &["end_date", "종료일"];
const EVENT_TYPE: &[&str] = &["event_type", "유형"];
const TARGET_GRADE: &[&str] = &["target_grade", "대상학년"];
const DESCRIPTION: &[&str] = &["description", "설명"];

pub async fn import_events(
    service: &CalendarService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let sheet = match load_sheet(&mut payload).await {
        Ok(sheet) => sheet,
        Err(resp) => return Ok(resp),
    };
    let (events, errors) = match parse_rows(&sheet) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(e.into_response()),
    };
    if !errors.is_empty() {
        return Ok(reject_rows(errors));
    }

    match storage.import_events(events).await {
        Ok(imported) => {
            tracing::info!("Imported {} calendar events", imported);
            Ok(imported_response(imported))
        }
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

type ParsedRows = (Vec<CreateEventRequest>, Vec<ImportRowError>);

fn parse_rows(sheet: &CsvSheet) -> Result<ParsedRows, ImportParseError> {
    for column in [TITLE, START_DATE] {
        sheet.require(column)?;
    }

    let mut events = Vec::new();
    let mut errors = Vec::new();

    for mut row in sheet.rows() {
        let start_date = row.date(START_DATE);
        if start_date.is_none() && row.optional(START_DATE).is_none() {
            row.error(START_DATE, "Start date is required");
        }
        let end_date = row.date(END_DATE);
        let event_type = row.choice(EVENT_TYPE, "Unknown event type", EventType::from_label);
        let target_grade = row.parse::<i32>(TARGET_GRADE, "Must be a number");
        if target_grade.is_some_and(|grade| !(1..=6).contains(&grade)) {
            row.error(TARGET_GRADE, "Grade must be between 1 and 6");
        }
        let title = row.text(TITLE);
        let description = row.optional(DESCRIPTION);

        let row_num = match row.finish() {
            Ok(row_num) => row_num,
            Err(mut row_errors) => {
                errors.append(&mut row_errors);
                continue;
            }
        };
        let Some(start_date) = start_date else {
            continue;
        };
        if let Err(e) = validate_event(&title, start_date, end_date) {
            let field = if end_date.is_some_and(|end| end < start_date) {
                "end_date"
            } else {
                "title"
            };
            errors.push(row_error(row_num, field, e.message()));
            continue;
        }

        events.push(CreateEventRequest {
            title,
            start_date,
            end_date,
            event_type: event_type.unwrap_or(EventType::Etc),
            target_grade,
            description,
        });
    }

    Ok((events, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse_csv(data: &str) -> Result<ParsedRows, ImportParseError> {
        parse_rows(&CsvSheet::parse(data.as_bytes())?)
    }

    #[test]
    fn test_parse_calendar_rows() {
        let data = "일정명,시작일,종료일,유형,대상학년,설명\n\
                    중간고사,2025-04-21,2025-04-25,시험,3,\n\
                    개교기념일,2025-05-13,,HOLIDAY,,휴업\n\
                    체육대회,2025-05-30,,,,\n";
        let (events, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_type, EventType::Exam);
        assert_eq!(events[0].target_grade, Some(3));
        assert_eq!(
            events[0].end_date,
            Some(NaiveDate::from_ymd_opt(2025, 4, 25).expect("date"))
        );
        assert_eq!(events[1].event_type, EventType::Holiday);
        assert_eq!(events[1].end_date, None);
        assert_eq!(events[2].event_type, EventType::Etc);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let data = "title,start_date,end_date\n수학여행,2025-06-10,2025-06-08\n";
        let (events, errors) = parse_csv(data).expect("parse");
        assert!(events.is_empty());
        assert_eq!(errors[0].row, 2);
        assert_eq!(errors[0].field, "end_date");
    }

    #[test]
    fn test_missing_start_date_and_bad_grade() {
        let data = "title,start_date,target_grade\n방학식,,9\n";
        let (events, errors) = parse_csv(data).expect("parse");
        assert!(events.is_empty());
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["start_date", "target_grade"]);
    }
}
