//! 查询参数反序列化辅助
//!
//! `web::Query` 配合 `#[serde(flatten)]` 时所有值都以字符串形式到达，
//! 数字与布尔字段需要从字符串解析。

use serde::Deserializer;
use serde::de::{Error, Visitor};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// 可选字段：接受原生值或字符串，空字符串视为未提供
pub fn deserialize_optional_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    struct OptionalVisitor<T>(PhantomData<T>);

    impl<T> OptionalVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        fn parse<E: Error>(value: &str) -> Result<Option<T>, E> {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value.parse::<T>().map(Some).map_err(E::custom)
        }
    }

    impl<'de, T> Visitor<'de> for OptionalVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = Option<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a value or a string containing a value")
        }

        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::parse(value)
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }

        fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }

        fn visit_bool<E: Error>(self, value: bool) -> Result<Self::Value, E> {
            Self::parse(if value { "true" } else { "false" })
        }
    }

    deserializer.deserialize_any(OptionalVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "deserialize_optional_from_str")]
        grade: Option<i32>,
        #[serde(default, deserialize_with = "deserialize_optional_from_str")]
        unread_only: Option<bool>,
    }

    #[test]
    fn test_strings_and_native_values() {
        let f: Filter =
            serde_json::from_str(r#"{"grade": "2", "unread_only": "true"}"#).expect("valid");
        assert_eq!(f.grade, Some(2));
        assert_eq!(f.unread_only, Some(true));

        let f: Filter = serde_json::from_str(r#"{"grade": 3, "unread_only": false}"#).expect("valid");
        assert_eq!(f.grade, Some(3));
        assert_eq!(f.unread_only, Some(false));
    }

    #[test]
    fn test_missing_or_empty() {
        let f: Filter = serde_json::from_str(r#"{"grade": ""}"#).expect("valid");
        assert_eq!(f.grade, None);
        assert_eq!(f.unread_only, None);
        assert!(serde_json::from_str::<Filter>(r#"{"grade": "abc"}"#).is_err());
    }
}
