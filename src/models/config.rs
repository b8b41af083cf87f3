use crate::{BodyStyle, CarKind, FactoryVia, PatternError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Ordered list of demonstrations to run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default)]
    pub steps: Vec<DemoStep>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "pattern")]
pub enum DemoStep {
    #[serde(rename = "factory-method")]
    FactoryMethod {
        car: CarKind,
        #[serde(default)]
        via: FactoryVia,
    },

    /// A step without a style exercises the absent-factory path.
    #[serde(rename = "abstract-factory")]
    AbstractFactory {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<BodyStyle>,
    },
}

impl DemoStep {
    pub fn factory_method(car: CarKind) -> Self {
        Self::FactoryMethod {
            car,
            via: FactoryVia::Selector,
        }
    }

    pub fn factory_method_direct(car: CarKind) -> Self {
        Self::FactoryMethod {
            car,
            via: FactoryVia::Direct,
        }
    }

    pub fn abstract_factory(style: BodyStyle) -> Self {
        Self::AbstractFactory { style: Some(style) }
    }

    pub fn abstract_factory_absent() -> Self {
        Self::AbstractFactory { style: None }
    }
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactoryMethod { car, via } => write!(f, "factory-method {} ({})", car, via),
            Self::AbstractFactory { style: Some(style) } => {
                write!(f, "abstract-factory {}", style)
            }
            Self::AbstractFactory { style: None } => write!(f, "abstract-factory (none)"),
        }
    }
}

impl DemoConfig {
    pub fn new(steps: Vec<DemoStep>) -> Self {
        Self { steps }
    }

    pub fn single(step: DemoStep) -> Self {
        Self { steps: vec![step] }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, PatternError> {
        let config: DemoConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PatternError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.steps.is_empty() {
            return Err(PatternError::invalid_config(
                "at least one demo step is required",
            ));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    /// The full walkthrough: both Factory Method call styles, then the
    /// Abstract Factory families.
    fn default() -> Self {
        Self {
            steps: vec![
                DemoStep::factory_method_direct(CarKind::Mastodon),
                DemoStep::factory_method_direct(CarKind::Rhino),
                DemoStep::factory_method(CarKind::Mastodon),
                DemoStep::factory_method(CarKind::Rhino),
                DemoStep::abstract_factory(BodyStyle::Hatchback),
                DemoStep::abstract_factory(BodyStyle::Sedan),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_steps() {
        let config = DemoConfig::from_toml_str(
            r#"
            [[steps]]
            pattern = "factory-method"
            car = "rhino"
            via = "direct"

            [[steps]]
            pattern = "abstract-factory"
            style = "sedan"

            [[steps]]
            pattern = "abstract-factory"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.steps,
            vec![
                DemoStep::factory_method_direct(CarKind::Rhino),
                DemoStep::abstract_factory(BodyStyle::Sedan),
                DemoStep::abstract_factory_absent(),
            ]
        );
    }

    #[test]
    fn test_via_defaults_to_selector() {
        let config = DemoConfig::from_toml_str(
            r#"
            [[steps]]
            pattern = "factory-method"
            car = "mastodon"
            "#,
        )
        .unwrap();

        assert_eq!(config.steps, vec![DemoStep::factory_method(CarKind::Mastodon)]);
    }

    #[test]
    fn test_unknown_key_reports_the_selector_error() {
        let result = DemoConfig::from_toml_str(
            r#"
            [[steps]]
            pattern = "abstract-factory"
            style = "coupe"
            "#,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, PatternError::TomlError(_)));
        assert!(
            err.to_string()
                .contains(&PatternError::unknown("body style", "coupe").to_string())
        );
    }

    #[test]
    fn test_config_keys_accept_the_same_aliases_as_the_cli() {
        let config = DemoConfig::from_toml_str(
            r#"
            [[steps]]
            pattern = "abstract-factory"
            style = "hatch"

            [[steps]]
            pattern = "factory-method"
            car = "Rhino"
            via = "new"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.steps,
            vec![
                DemoStep::abstract_factory(BodyStyle::Hatchback),
                DemoStep::factory_method_direct(CarKind::Rhino),
            ]
        );
    }

    #[test]
    fn test_empty_config_is_invalid() {
        let result = DemoConfig::from_toml_str("");
        assert!(matches!(result, Err(PatternError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steps.len(), 6);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[steps]]\npattern = \"abstract-factory\"\nstyle = \"hatchback\"").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config, DemoConfig::single(DemoStep::abstract_factory(BodyStyle::Hatchback)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DemoConfig::load("/nonexistent/demo.toml");
        assert!(matches!(result, Err(PatternError::ConfigError(_))));
    }
}
