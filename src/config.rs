use crate::grid::RowWidth;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

#[derive(Debug, Default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub row_width: RowWidth,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("projects.csv"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Final Projects Showcase".to_owned(),
            subtitle: "Explore the work of our students.".to_owned(),
            button_label: "View Project".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GridSection {
    row_width: i64,
}

#[allow(clippy::cast_possible_wrap)]
impl Default for GridSection {
    fn default() -> Self {
        Self {
            row_width: RowWidth::DEFAULT.get() as i64,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalog: CatalogConfig,
    grid: GridSection,
    page: PageConfig,
}

impl Config {
    /// Load the configuration from `file_name`, or from the default file if
    /// present. Without any file, defaults apply.
    pub fn load(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(file_name) => Self::load_from_file(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                debug!("no configuration file, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_file(file_name: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("invalid configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Config {
            catalog: file.catalog,
            row_width: RowWidth::try_from(file.grid.row_width)
                .wrap_err("cannot use grid.row_width configuration parameter")?,
            page: file.page,
        })
    }
}
