use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s]+$").expect("Invalid url regex"));

/// 校验文件链接
///
/// 提交与作业资料都只存外部对象存储返回的 URL，
/// 这里只做形态校验，可达性不在本服务职责内。
pub fn validate_file_url(url: &str) -> Result<(), &'static str> {
    if url.trim().is_empty() {
        return Err("File URL must not be empty");
    }
    if url.len() > 2048 {
        return Err("File URL must not exceed 2048 characters");
    }
    if !URL_RE.is_match(url) {
        return Err("File URL must be an http(s) URL without whitespace");
    }
    Ok(())
}

/// 校验作业标题：非空且不超过 200 字符
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    if title.chars().count() > 200 {
        return Err("Title must not exceed 200 characters");
    }
    Ok(())
}

/// 校验科目：非空且不超过 100 字符
pub fn validate_subject(subject: &str) -> Result<(), &'static str> {
    if subject.trim().is_empty() {
        return Err("Subject must not be empty");
    }
    if subject.chars().count() > 100 {
        return Err("Subject must not exceed 100 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_file_url() {
        assert!(validate_file_url("https://cdn.example.com/files/a.pdf").is_ok());
        assert!(validate_file_url("http://storage.local/essay.docx").is_ok());
    }

    #[test]
    fn test_invalid_file_url() {
        assert!(validate_file_url("").is_err());
        assert!(validate_file_url("   ").is_err());
        assert!(validate_file_url("ftp://example.com/a.pdf").is_err());
        assert!(validate_file_url("not a url").is_err());
        assert!(validate_file_url("https://example.com/a b.pdf").is_err());
    }

    #[test]
    fn test_overlong_file_url() {
        let url = format!("https://example.com/{}", "a".repeat(2048));
        assert!(validate_file_url(&url).is_err());
    }

    #[test]
    fn test_title() {
        assert!(validate_title("Essay on Rust").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_subject() {
        assert!(validate_subject("Mathematics").is_ok());
        assert!(validate_subject("").is_err());
        assert!(validate_subject(&"x".repeat(101)).is_err());
    }
}
