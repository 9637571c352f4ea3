/// 转义 LIKE 模式中的通配符，防止用户输入参与模糊匹配
///
/// 反斜杠自身也要先转义，调用方需配合 `ESCAPE '\'` 使用。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\%b"), "a\\\\\\%b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("vendor"), "vendor");
    }
}
