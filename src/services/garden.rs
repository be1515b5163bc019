//! Garden service: a bed of flowers tended together.

use crate::config::GardenConfig;
use crate::domain::Flower;
use crate::error::Result;
use serde::Serialize;

/// An ordered collection of flowers, tended in planting order
#[derive(Debug, Clone, Default)]
pub struct Garden {
    flowers: Vec<Flower>,
}

impl Garden {
    /// Create an empty garden
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant every flower described by the configuration
    pub fn from_config(config: &GardenConfig) -> Result<Self> {
        let flowers = config
            .flowers
            .iter()
            .map(|entry| entry.to_flower())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::info!("Planted {} flowers from configuration", flowers.len());

        Ok(Self { flowers })
    }

    /// Add a flower at the end of the bed
    pub fn plant(&mut self, flower: Flower) {
        tracing::debug!("Planting {}", flower.name());
        self.flowers.push(flower);
    }

    /// Run each flower's care plan once
    pub fn tend(&mut self) {
        for flower in &mut self.flowers {
            flower.care();
        }
    }

    /// Tend once, capturing the flowers before and after
    pub fn tend_with_report(&mut self) -> CareReport {
        let before = self.flowers.clone();
        self.tend();

        CareReport {
            before,
            after: self.flowers.clone(),
        }
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }
}

/// State of a garden around one round of care
#[derive(Debug, Clone, Serialize)]
pub struct CareReport {
    pub before: Vec<Flower>,
    pub after: Vec<Flower>,
}

impl CareReport {
    /// Status lines under "Before care:" and "After care:" headings
    pub fn to_text(&self) -> String {
        let lines = |flowers: &[Flower]| {
            flowers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "Before care:\n{}\n\nAfter care:\n{}",
            lines(&self.before),
            lines(&self.after)
        )
    }

    /// One pretty JSON object with `before` and `after` arrays
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowerConfig;
    use crate::domain::{CareAction, Species};
    use crate::error::{AppError, ConfigError};

    #[test]
    fn test_default_garden() {
        let garden = Garden::from_config(&GardenConfig::default()).unwrap();
        assert_eq!(garden.flowers().len(), 6);
        assert_eq!(garden.flowers()[0].name(), "Tulip");
        assert_eq!(garden.flowers()[5].name(), "Daisy");
    }

    #[test]
    fn test_tend_applies_each_plan() {
        let mut garden = Garden::from_config(&GardenConfig::default()).unwrap();
        garden.tend();

        let tulip = &garden.flowers()[0];
        assert_eq!(tulip.height(), 18.5);
        assert_eq!(tulip.health(), 100.0);
        assert_eq!(tulip.color(), "Aromatic Refreshed Brighter Yellow");

        let orchid = &garden.flowers()[1];
        assert_eq!(orchid.height(), 12.5);
        assert_eq!(orchid.health(), 75.5);
    }

    #[test]
    fn test_invalid_entry_fails() {
        let config = GardenConfig {
            flowers: vec![FlowerConfig {
                name: Some("Nameless".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(matches!(
            Garden::from_config(&config),
            Err(AppError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_report_text() {
        let mut garden = Garden::new();
        assert!(garden.is_empty());

        garden.plant(
            Flower::from_species(Species::Daffodil).with_care_plan([CareAction::Watering]),
        );
        garden.plant(Flower::from_species(Species::Lily));

        let report = garden.tend_with_report();
        insta::assert_snapshot!(report.to_text(), @r###"
        Before care:
        Flower: Daffodil, Color: Golden, Height: 16 cm, Health: 68%
        Flower: Lily, Color: White, Height: 18 cm, Health: 70%

        After care:
        Flower: Daffodil, Color: Golden, Height: 18 cm, Health: 78%
        Flower: Lily, Color: White, Height: 18 cm, Health: 70%
        "###);
    }

    #[test]
    fn test_report_json_is_single_document() {
        let mut garden = Garden::new();
        garden.plant(
            Flower::new("Rose", "Red", 15.0, 70.0)
                .with_care_plan([CareAction::Sunlight { hours: 2 }]),
        );

        let json = garden.tend_with_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["before"][0]["health"], 70.0);
        assert_eq!(value["after"][0]["health"], 73.0);

        insta::assert_snapshot!(json, @r###"
        {
          "before": [
            {
              "name": "Rose",
              "color": "Red",
              "height": 15.0,
              "health": 70.0,
              "care_plan": [
                "sunlight(2)"
              ]
            }
          ],
          "after": [
            {
              "name": "Rose",
              "color": "Red",
              "height": 15.0,
              "health": 73.0,
              "care_plan": [
                "sunlight(2)"
              ]
            }
          ]
        }
        "###);
    }
}
