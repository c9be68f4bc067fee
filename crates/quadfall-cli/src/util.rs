use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use quadfall_engine::{GameConfig, RankingEntry};
use serde::{Serialize, de::DeserializeOwned};

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_pretty(BufWriter::new(file), value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))
        }
        None => write_pretty(io::stdout().lock(), value).context("Failed to write JSON to stdout"),
    }
}

fn write_pretty<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {file_kind} file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Reads a game config JSON file. Missing fields keep their defaults.
pub fn read_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    read_json_file("config", path)
}

/// Reads saved ranking entries, or an empty ranking if the file does not exist yet.
pub fn read_ranking_file(path: &Path) -> anyhow::Result<Vec<RankingEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json_file("ranking", path)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("quadfall-{}-{name}", process::id()))
    }

    #[test]
    fn test_missing_ranking_file_is_empty() {
        let path = temp_path("missing-ranking.json");
        assert!(read_ranking_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_ranking_file_written_and_read_back() {
        let path = temp_path("ranking.json");
        let entries: Vec<RankingEntry> =
            serde_json::from_str(r#"[{"score":24,"recorded_at":"1970-01-01T00:00:00Z"}]"#)
                .unwrap();
        write_json(&entries, Some(path.as_path())).unwrap();
        let loaded = read_ranking_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_config_file_keeps_defaults() {
        let path = temp_path("config.json");
        fs::write(&path, r#"{"fast_fall_speed": 2}"#).unwrap();
        let config = read_config_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.fast_fall_speed.get(), 2);
        assert_eq!(config.normal_fall_speed.get(), 30);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let path = temp_path("bad-config.json");
        fs::write(&path, "not json").unwrap();
        let err = read_config_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("Failed to parse config JSON file"));
    }
}
