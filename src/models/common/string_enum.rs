//! 字符串枚举宏
//!
//! 数据库中的枚举列一律以字符串存储，HTTP 层使用 SCREAMING_SNAKE_CASE，
//! 同时为每个取值附带一个中文（韩文界面）显示名称。

/// 定义一个以字符串形式存储和序列化的枚举
///
/// 自动生成：
/// - `as_str()` / `label()` / `ALL`
/// - `Display`、`FromStr`（大小写不敏感）
/// - `Serialize`、`Deserialize`（无效值时给出可选值列表）
/// - `TS` 导出
///
/// ```rust,ignore
/// define_string_enum! {
///     /// 出勤状态
///     pub enum AttendanceStatus => "../frontend/src/types/generated/attendance.ts" {
///         Present = ("PRESENT", "출석"),
///         Absent = ("ABSENT", "결석"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $ts_path:literal {
            $( $variant:ident = ($value:literal, $label:literal) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::ts_rs::TS,
        )]
        #[ts(export, export_to = $ts_path)]
        $vis enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            /// 全部取值（按声明顺序）
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                }
            }

            /// 显示名称
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            /// 按显示名查找
            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                $(
                    if label == $label {
                        return Some($name::$variant);
                    }
                )*
                None
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim();
                $(
                    if value.eq_ignore_ascii_case($value) {
                        return Ok($name::$variant);
                    }
                )*
                Err(format!(
                    "无效的 {}: '{}'. 支持: {}",
                    stringify!($name),
                    s,
                    [$($value),*].join(", ")
                ))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<$name>().map_err(::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::define_string_enum! {
        /// 测试用枚举
        pub enum Sample => "../frontend/src/types/generated/test_sample.ts" {
            First = ("FIRST", "첫째"),
            SecondValue = ("SECOND_VALUE", "둘째"),
        }
    }

    #[test]
    fn test_round_trip_strings() {
        assert_eq!(Sample::SecondValue.as_str(), "SECOND_VALUE");
        assert_eq!(Sample::First.label(), "첫째");
        assert_eq!("second_value".parse::<Sample>(), Ok(Sample::SecondValue));
        assert_eq!(Sample::from_label("둘째"), Some(Sample::SecondValue));
        assert_eq!(Sample::from_label("셋째"), None);
        assert_eq!(Sample::ALL.len(), 2);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Sample::SecondValue).expect("serialize");
        assert_eq!(json, "\"SECOND_VALUE\"");
        let parsed: Sample = serde_json::from_str("\"FIRST\"").expect("deserialize");
        assert_eq!(parsed, Sample::First);
    }

    #[test]
    fn test_invalid_value_lists_options() {
        let err = "THIRD".parse::<Sample>().unwrap_err();
        assert!(err.contains("FIRST"));
        assert!(err.contains("SECOND_VALUE"));
        assert!(serde_json::from_str::<Sample>("\"THIRD\"").is_err());
    }

    #[test]
    fn test_declaration_order() {
        assert!(Sample::First < Sample::SecondValue);
    }
}
