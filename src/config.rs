use crate::error::{Result, SpectraError};
use spectra_common::config::mask_key;
use spectra_common::DashboardConfig;
use std::path::{Path, PathBuf};

/// CLIで使うデモデータの既定パス（リポジトリ同梱）
pub const CLI_DEMO_DATA: &str = "assets/demo-data.json";

/// 設定ファイルを読み込む
///
/// 明示パスがあればそれを必須とし、なければ `~/.config/spectra/config.json` を探す。
/// どちらもなければ組み込みのデフォルト（デモデータのみCLI用パスに差し替え）。
pub fn load(explicit: Option<&Path>) -> Result<DashboardConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SpectraError::ConfigNotFound(path.display().to_string()));
        }
        return read(path);
    }

    match default_path() {
        Some(path) if path.exists() => read(&path),
        _ => Ok(DashboardConfig {
            demo_data: CLI_DEMO_DATA.to_string(),
            ..DashboardConfig::default()
        }),
    }
}

fn read(path: &Path) -> Result<DashboardConfig> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let has_demo_data = value.get("demo_data").is_some();

    let mut config: DashboardConfig = serde_json::from_value(value)?;
    if !has_demo_data {
        config.demo_data = CLI_DEMO_DATA.to_string();
    }

    if config.credentials.is_empty() {
        return Err(SpectraError::Config(format!(
            "APIキーが1つも設定されていません: {}",
            path.display()
        )));
    }
    // キーはクエリ文字列にそのまま埋め込まれる
    if let Some(key) = config.credentials.iter().find(|key| !is_query_safe(key)) {
        return Err(SpectraError::Config(format!(
            "APIキーに使用できない文字が含まれています: {}",
            mask_key(key)
        )));
    }
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// URLの非予約文字のみで構成されているか
fn is_query_safe(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("spectra").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"credentials": ["K1"], "auto_load_delay_ms": 0}"#).unwrap();

        let config = load(Some(&path)).expect("設定読込失敗");
        assert_eq!(config.credentials.len(), 1);
        assert_eq!(config.auto_load_delay_ms, 0);
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load(Some(Path::new("/nonexistent/spectra/config.json")));
        assert!(matches!(result, Err(SpectraError::ConfigNotFound(_))));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"credentials": []}"#).unwrap();
        assert!(matches!(load(Some(&path)), Err(SpectraError::Config(_))));
    }

    #[test]
    fn test_query_safe_keys() {
        assert!(is_query_safe("DEMO_KEY"));
        assert!(is_query_safe("abc-123.x~y"));
        assert!(!is_query_safe("a&b"));
        assert!(!is_query_safe("key#frag"));
        assert!(!is_query_safe("with space"));
        assert!(!is_query_safe(""));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(load(Some(&path)), Err(SpectraError::JsonParse(_))));
    }
}
