use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid mass-number range for {name}: {min}..={max}")]
    InvalidRange {
        name: &'static str,
        min: u32,
        max: u32,
    },
}

/// Inclusive range of mass numbers scanned by a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MassRange {
    pub min: u32,
    pub max: u32,
}

impl MassRange {
    pub fn new(name: &'static str, min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidRange { name, min, max });
        }
        Ok(Self { min, max })
    }

    /// Number of mass numbers in the range (never zero).
    pub fn count(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    pub mass_range: MassRange,
    pub include_drip_lines: bool,
}

#[derive(Default)]
pub struct SurveyConfigBuilder {
    a_min: Option<u32>,
    a_max: Option<u32>,
    include_drip_lines: Option<bool>,
}

impl SurveyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a_min(mut self, a: u32) -> Self {
        self.a_min = Some(a);
        self
    }
    pub fn a_max(mut self, a: u32) -> Self {
        self.a_max = Some(a);
        self
    }
    pub fn include_drip_lines(mut self, include: bool) -> Self {
        self.include_drip_lines = Some(include);
        self
    }

    pub fn build(self) -> Result<SurveyConfig, ConfigError> {
        let a_min = self.a_min.ok_or(ConfigError::MissingParameter("a_min"))?;
        let a_max = self.a_max.ok_or(ConfigError::MissingParameter("a_max"))?;
        Ok(SurveyConfig {
            mass_range: MassRange::new("survey", a_min, a_max)?,
            include_drip_lines: self.include_drip_lines.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeds_with_all_required_parameters() {
        let config = SurveyConfigBuilder::new()
            .a_min(10)
            .a_max(20)
            .include_drip_lines(true)
            .build()
            .unwrap();
        assert_eq!(config.mass_range, MassRange { min: 10, max: 20 });
        assert_eq!(config.mass_range.count(), 11);
        assert!(config.include_drip_lines);
    }

    #[test]
    fn build_defaults_drip_lines_to_off() {
        let config = SurveyConfigBuilder::new().a_min(1).a_max(1).build().unwrap();
        assert!(!config.include_drip_lines);
        assert_eq!(config.mass_range.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn build_fails_on_missing_bounds() {
        assert_eq!(
            SurveyConfigBuilder::new().a_max(5).build(),
            Err(ConfigError::MissingParameter("a_min"))
        );
        assert_eq!(
            SurveyConfigBuilder::new().a_min(5).build(),
            Err(ConfigError::MissingParameter("a_max"))
        );
    }

    #[test]
    fn build_fails_on_empty_or_zero_based_ranges() {
        assert!(matches!(
            SurveyConfigBuilder::new().a_min(0).a_max(5).build(),
            Err(ConfigError::InvalidRange { min: 0, .. })
        ));
        assert!(matches!(
            SurveyConfigBuilder::new().a_min(9).a_max(5).build(),
            Err(ConfigError::InvalidRange { min: 9, max: 5, .. })
        ));
    }
}
