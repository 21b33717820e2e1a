//! Command line arguments

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::model::{SortKey, SortPolicy};
use clap::Parser;

/// Browse, search and sort a list of colleges in the terminal
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON data file (defaults to the bundled data set)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Records added per page
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Sort scope: "page" sorts loaded rows only, "global" sorts every match
    #[arg(long)]
    pub sort_policy: Option<SortPolicy>,

    /// Initial sort field, e.g. qsRank or placement.average
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Initial search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// CSV export destination
    #[arg(long)]
    pub export: Option<String>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Store the effective settings in the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Effective startup settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config: Config,
    pub initial_sort: Option<SortKey>,
    pub initial_query: Option<String>,
}

impl Args {
    /// Overlay flags on `config`; flags win
    pub fn merge(self, mut config: Config) -> Result<Settings> {
        if let Some(data) = self.data {
            config.data_path = Some(data);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(policy) = self.sort_policy {
            config.sort_policy = policy;
        }
        if let Some(export) = self.export {
            config.export_path = export;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if config.page_size == 0 {
            return Err(AppError::ZeroPageSize);
        }

        Ok(Settings {
            config,
            initial_sort: self.sort,
            initial_query: self.query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "college-tui",
            "--page-size",
            "5",
            "--sort-policy",
            "global",
            "--sort",
            "placement.average",
            "-q",
            "iit",
        ])
        .unwrap();

        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.sort_policy, Some(SortPolicy::Global));
        assert_eq!(args.sort, Some(SortKey::PlacementAverage));
        assert_eq!(args.query.as_deref(), Some("iit"));
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        assert!(Args::try_parse_from(["college-tui", "--sort", "placement.median"]).is_err());
        assert!(Args::try_parse_from(["college-tui", "--sort-policy", "random"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            page_size: 20,
            export_path: "from-config.csv".to_string(),
            ..Config::default()
        };
        let args = Args {
            page_size: Some(3),
            ..Args::default()
        };

        let settings = args.merge(config).unwrap();
        assert_eq!(settings.config.page_size, 3);
        assert_eq!(settings.config.export_path, "from-config.csv");
        assert_eq!(settings.initial_sort, None);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let args = Args {
            page_size: Some(0),
            ..Args::default()
        };
        assert!(matches!(
            args.merge(Config::default()),
            Err(AppError::ZeroPageSize)
        ));
    }
}
