use crate::shared::export::ExportOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config.toml location
pub const CONFIG_ENV: &str = "BACKOFFICE_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub table: TableConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableConfig {
    pub default_page_size: usize,
    #[serde(default)]
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub output_dir: String,
    #[serde(default = "default_delimiter")]
    pub csv_delimiter: char,
    #[serde(default = "default_true")]
    pub csv_bom: bool,
    #[serde(default = "default_pdf_rows")]
    pub pdf_rows_per_page: usize,
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

fn default_pdf_rows() -> usize {
    40
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[table]
default_page_size = 10
page_size_options = [5, 10, 25, 50]

[export]
output_dir = "exports"
csv_delimiter = ","
csv_bom = true
pdf_rows_per_page = 40
"#;

impl Config {
    fn check(self) -> anyhow::Result<Self> {
        if self.table.default_page_size == 0 {
            anyhow::bail!("table.default_page_size must be at least 1");
        }
        if self.table.page_size_options.contains(&0) {
            anyhow::bail!("table.page_size_options must not contain 0");
        }
        if !self.export.csv_delimiter.is_ascii() {
            anyhow::bail!(
                "export.csv_delimiter must be a single ASCII character, got {:?}",
                self.export.csv_delimiter
            );
        }
        Ok(self)
    }

    /// Page size options offered by the screens, always including the default
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = self.table.page_size_options.clone();
        sizes.push(self.table.default_page_size);
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    pub fn export_options(&self, title: &str) -> ExportOptions {
        ExportOptions {
            title: title.to_string(),
            // ASCII checked on load
            csv_delimiter: self.export.csv_delimiter as u8,
            csv_bom: self.export.csv_bom,
            pdf_rows_per_page: self.export.pdf_rows_per_page,
        }
    }

    /// Export directory; relative paths resolve against the executable directory
    pub fn export_dir(&self) -> PathBuf {
        let dir = Path::new(&self.export.output_dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        match std::env::current_exe() {
            Ok(exe) => exe.parent().map_or_else(|| dir.to_path_buf(), |p| p.join(dir)),
            Err(_) => dir.to_path_buf(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig {
                default_page_size: 10,
                page_size_options: vec![5, 10, 25, 50],
            },
            export: ExportConfig {
                output_dir: "exports".to_string(),
                csv_delimiter: default_delimiter(),
                csv_bom: true,
                pdf_rows_per_page: default_pdf_rows(),
            },
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.check()
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Path in `BACKOFFICE_CONFIG`
/// 2. Next to the executable
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_config_from(Path::new(&path));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                return load_config_from(&config_path);
            }
            tracing::debug!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.table.default_page_size, 10);
        assert_eq!(config.export.output_dir, "exports");
        assert_eq!(config.export.csv_delimiter, ',');
        assert_eq!(config.page_sizes(), vec![5, 10, 25, 50]);
    }

    #[test]
    fn test_embedded_default_matches_struct_default() {
        let parsed = parse_config(DEFAULT_CONFIG).unwrap();
        let built = Config::default();
        assert_eq!(parsed.table.page_size_options, built.table.page_size_options);
        assert_eq!(parsed.export.pdf_rows_per_page, built.export.pdf_rows_per_page);
    }

    #[test]
    fn test_load_from_file_with_optional_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[table]\ndefault_page_size = 7\n\n[export]\noutput_dir = \"/tmp/out\"\ncsv_delimiter = \";\""
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.page_sizes(), vec![7]);
        assert!(config.export.csv_bom);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
        assert_eq!(config.export_options("x").csv_delimiter, b';');
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = parse_config("[table]\ndefault_page_size = 0\n[export]\noutput_dir = \"e\"").unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let toml = "[table]\ndefault_page_size = 5\n[export]\noutput_dir = \"e\"\ncsv_delimiter = \"§\"";
        assert!(parse_config(toml).is_err());
    }
}
