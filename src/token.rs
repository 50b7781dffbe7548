/// Glitch 認証トークン
///
/// `Display` / `Debug` のどちらでも値を出力しない。
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// 新しいAuthTokenを作成
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// トークン文字列への参照を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new() {
        let token = AuthToken::new("test_token");
        assert_eq!(token.as_str(), "test_token");
    }

    #[test]
    fn test_token_display_hides_value() {
        let token = AuthToken::new("secret");
        assert_eq!(format!("{}", token), "AuthToken(***)");
    }

    #[test]
    fn test_token_debug_hides_value() {
        let token = AuthToken::new("secret");
        let debug = format!("{:?}", Some(token));
        assert!(!debug.contains("secret"));
    }
}
