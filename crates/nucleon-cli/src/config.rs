use crate::cli::{Cli, OutputFormat, RangeArgs};
use crate::error::{CliError, Result};
use nucleon::engine::config::{MassRange, SurveyConfig, SurveyConfigBuilder};
use nucleon::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Values used when neither the config file, `-S` nor a flag provides one.
pub struct DefaultsConfig {
    pub format: OutputFormat,
    pub precision: usize,
    pub survey_from: u32,
    pub survey_to: u32,
    pub survey_drip_lines: bool,
    pub curve_from: u32,
    pub curve_to: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 4,
            survey_from: 1,
            survey_to: 250,
            survey_drip_lines: false,
            curve_from: 1,
            curve_to: 250,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSurveyConfig {
    from: Option<u32>,
    to: Option<u32>,
    drip_lines: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialCurveConfig {
    from: Option<u32>,
    to: Option<u32>,
}

/// The config file as written, every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    output: Option<PartialOutputConfig>,
    survey: Option<PartialSurveyConfig>,
    curve: Option<PartialCurveConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub precision: usize,
}

/// Fully resolved settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub output: OutputSettings,
    survey_from: u32,
    survey_to: u32,
    survey_drip_lines: bool,
    curve_from: u32,
    curve_to: u32,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "output.format" => {
                    let format = match value {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        _ => {
                            return Err(CliError::Config(format!(
                                "Invalid format for {}: '{}'. Expected 'text' or 'json'.",
                                key, value
                            )));
                        }
                    };
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(parse_value(key, value, "integer")?);
                }
                "survey.from" => {
                    self.survey.get_or_insert_with(Default::default).from =
                        Some(parse_value(key, value, "integer")?);
                }
                "survey.to" => {
                    self.survey.get_or_insert_with(Default::default).to =
                        Some(parse_value(key, value, "integer")?);
                }
                "survey.drip-lines" => {
                    self.survey.get_or_insert_with(Default::default).drip_lines =
                        Some(parse_value(key, value, "boolean")?);
                }
                "curve.from" => {
                    self.curve.get_or_insert_with(Default::default).from =
                        Some(parse_value(key, value, "integer")?);
                }
                "curve.to" => {
                    self.curve.get_or_insert_with(Default::default).to =
                        Some(parse_value(key, value, "integer")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    /// Layers `-S` overrides and the global `--format` flag over the file values and
    /// [`DefaultsConfig`].
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<AppConfig> {
        self.apply_set_values(&cli.set_values)?;
        let defaults = DefaultsConfig::default();

        let output = self.output.unwrap_or_default();
        let survey = self.survey.unwrap_or_default();
        let curve = self.curve.unwrap_or_default();

        let config = AppConfig {
            output: OutputSettings {
                format: cli.format.or(output.format).unwrap_or(defaults.format),
                precision: output.precision.unwrap_or(defaults.precision),
            },
            survey_from: survey.from.unwrap_or(defaults.survey_from),
            survey_to: survey.to.unwrap_or(defaults.survey_to),
            survey_drip_lines: survey.drip_lines.unwrap_or(defaults.survey_drip_lines),
            curve_from: curve.from.unwrap_or(defaults.curve_from),
            curve_to: curve.to.unwrap_or(defaults.curve_to),
        };
        debug!(?config, "Configuration resolved.");
        Ok(config)
    }
}

impl AppConfig {
    pub fn load(cli: &Cli) -> Result<Self> {
        let partial = match &cli.config {
            Some(path) => PartialAppConfig::from_file(path)?,
            None => PartialAppConfig::default(),
        };
        partial.merge_with_cli(cli)
    }

    pub fn survey_config(&self, range: &RangeArgs, drip_lines: bool) -> Result<SurveyConfig> {
        SurveyConfigBuilder::new()
            .a_min(range.from.unwrap_or(self.survey_from))
            .a_max(range.to.unwrap_or(self.survey_to))
            .include_drip_lines(drip_lines || self.survey_drip_lines)
            .build()
            .map_err(|e| CliError::Core(EngineError::from(e)))
    }

    pub fn curve_range(&self, range: &RangeArgs) -> Result<MassRange> {
        MassRange::new(
            "curve",
            range.from.unwrap_or(self.curve_from),
            range.to.unwrap_or(self.curve_to),
        )
        .map_err(|e| CliError::Core(EngineError::from(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let config = AppConfig::load(&parse(&["nucleon", "valley"])).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 4);

        let survey = config.survey_config(&RangeArgs::default(), false).unwrap();
        assert_eq!(survey.mass_range, MassRange::new("survey", 1, 250).unwrap());
        assert!(!survey.include_drip_lines);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config_file(
            r#"
            [output]
            format = "json"
            precision = 6

            [survey]
            from = 20
            to = 40
            drip-lines = true
            "#,
        );
        let path = file.path().to_str().unwrap();
        let config = AppConfig::load(&parse(&["nucleon", "-c", path, "valley"])).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 6);
        let survey = config.survey_config(&RangeArgs::default(), false).unwrap();
        assert_eq!(survey.mass_range.min, 20);
        assert_eq!(survey.mass_range.max, 40);
        assert!(survey.include_drip_lines);
    }

    #[test]
    fn set_values_and_flags_take_precedence_over_file() {
        let file = write_config_file("[output]\nformat = \"json\"\nprecision = 6\n");
        let path = file.path().to_str().unwrap();
        let cli = parse(&[
            "nucleon",
            "-c",
            path,
            "-S",
            "output.precision=2",
            "-S",
            "curve.to=80",
            "--format",
            "text",
            "curve",
            "--from",
            "10",
        ]);
        let config = AppConfig::load(&cli).unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        let range = config
            .curve_range(&RangeArgs {
                from: Some(10),
                to: None,
            })
            .unwrap();
        assert_eq!((range.min, range.max), (10, 80));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config_file("[output]\ncolour = true\n");
        let path = file.path().to_str().unwrap();
        let result = AppConfig::load(&parse(&["nucleon", "-c", path, "curve"]));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));

        let result = AppConfig::load(&parse(&["nucleon", "-S", "survey.step=2", "curve"]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = AppConfig::load(&parse(&["nucleon", "-S", "survey.from", "curve"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn inverted_range_is_a_core_error() {
        let config = AppConfig::load(&parse(&["nucleon", "curve"])).unwrap();
        let result = config.curve_range(&RangeArgs {
            from: Some(90),
            to: Some(10),
        });
        assert!(matches!(result, Err(CliError::Core(EngineError::Config(_)))));
    }
}
