/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// アクション入力名を環境変数名に変換
    ///
    /// `project-id` → `INPUT_PROJECT-ID`（スペースは `_` に置換、ハイフンはそのまま）
    pub fn input_key(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
