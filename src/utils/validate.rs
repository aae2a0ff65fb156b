use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\d{1,2}-?\d{3,4}-?\d{4}$").expect("Invalid phone regex"));

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").expect("Invalid code regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 姓名长度校验：1 <= x <= 50（按字符计）
    let len = name.trim().chars().count();
    if len == 0 || len > 50 {
        return Err("Name length must be between 1 and 50 characters");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    // 电话号码：010-1234-5678 或 01012345678
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 学号、工号、科目代码、资产编号
pub fn validate_code(code: &str) -> Result<(), &'static str> {
    if !CODE_RE.is_match(code) {
        return Err("Code must be 1-32 letters, digits, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_semester(semester: i32) -> Result<(), &'static str> {
    if !(1..=2).contains(&semester) {
        return Err("Semester must be 1 or 2");
    }
    Ok(())
}

pub fn validate_grade_year(grade_year: i32) -> Result<(), &'static str> {
    if !(1..=3).contains(&grade_year) {
        return Err("Grade year must be between 1 and 3");
    }
    Ok(())
}

pub fn validate_score(score: f64) -> Result<(), &'static str> {
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err("Score must be between 0 and 100");
    }
    Ok(())
}

/// 学年内的年级与班号
pub fn validate_grade_and_class(grade: i32, class_num: i32) -> Result<(), &'static str> {
    if !(1..=6).contains(&grade) {
        return Err("Grade must be between 1 and 6");
    }
    if !(1..=30).contains(&class_num) {
        return Err("Class number must be between 1 and 30");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_email() {
        assert!(validate_name("김민수").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"가".repeat(51)).is_err());
        assert!(validate_email("teacher@school.kr").is_ok());
        assert!(validate_email("teacher@school").is_err());
    }

    #[test]
    fn test_phone_and_code() {
        assert!(validate_phone("010-1234-5678").is_ok());
        assert!(validate_phone("01012345678").is_ok());
        assert!(validate_phone("12-34").is_err());
        assert!(validate_code("S2025-001").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("a b").is_err());
    }

    #[test]
    fn test_academic_ranges() {
        assert!(validate_semester(1).is_ok());
        assert!(validate_semester(3).is_err());
        assert!(validate_grade_year(3).is_ok());
        assert!(validate_grade_year(0).is_err());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(-0.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_grade_and_class(2, 3).is_ok());
        assert!(validate_grade_and_class(7, 3).is_err());
        assert!(validate_grade_and_class(1, 0).is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
