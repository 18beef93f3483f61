//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use sciclaim_domain::{Claim, EntityMap};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Claim:` / `Entities:` / `Strength:` blocks
    #[default]
    Text,
    /// Table format
    Table,
    /// JSON array
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether a run summary should accompany the output.
    pub fn shows_summary(&self) -> bool {
        self.format != OutputFormat::Json
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_claims_text(claims)),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Json => self.format_claims_json(claims),
        }
    }

    fn format_claims_text(&self, claims: &[Claim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        claims
            .iter()
            .map(|claim| {
                format!(
                    "{} {}\n{} {}\n{} {}",
                    self.colorize("Claim:", "cyan"),
                    claim.text,
                    self.colorize("Entities:", "cyan"),
                    format_entities(&claim.entities),
                    self.colorize("Strength:", "cyan"),
                    claim.strength
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_claims_table(&self, claims: &[Claim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Claim", "Entities", "Strength", "Confidence"]);

        for (idx, claim) in claims.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                claim.text.clone(),
                format_entities(&claim.entities),
                claim.strength.to_string(),
                format!("{:.2}", claim.confidence),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_claims_json(&self, claims: &[Claim]) -> Result<String> {
        let json_claims: Vec<serde_json::Value> = claims
            .iter()
            .map(|c| {
                let entities: serde_json::Map<String, serde_json::Value> = c
                    .entities
                    .iter()
                    .map(|(category, value)| {
                        (category.to_string(), serde_json::Value::String(value.clone()))
                    })
                    .collect();
                serde_json::json!({
                    "text": c.text,
                    "entities": entities,
                    "strength": c.strength.as_str(),
                    "confidence": c.confidence
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_claims)?)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render an entity map as `{PERCENT=40%, ORG=Acme Corp}`.
pub fn format_entities(entities: &EntityMap) -> String {
    let pairs: Vec<String> = entities
        .iter()
        .map(|(category, value)| format!("{}={}", category, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sciclaim_domain::{EntityCategory, Strength};

    fn create_test_claim() -> Claim {
        let mut entities = EntityMap::new();
        entities.insert(EntityCategory::Percent, "40%".to_string());
        Claim::new(
            "The experiment demonstrates that the new algorithm reduces processing time by 40%.",
            entities,
            Strength::Assertive,
        )
    }

    fn tentative_claim() -> Claim {
        Claim::new(
            "We propose a model where quantum effects may influence the outcome.",
            EntityMap::new(),
            Strength::Tentative,
        )
    }

    #[test]
    fn test_text_format() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter
            .format_claims(&[create_test_claim(), tentative_claim()])
            .unwrap();

        assert_eq!(
            output,
            "Claim: The experiment demonstrates that the new algorithm reduces processing time by 40%.\n\
             Entities: {PERCENT=40%}\n\
             Strength: assertive\n\
             \n\
             Claim: We propose a model where quantum effects may influence the outcome.\n\
             Entities: {}\n\
             Strength: tentative"
        );
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["entities"]["PERCENT"], "40%");
        assert_eq!(value[0]["strength"], "assertive");
        assert_eq!(value[0]["confidence"], 0.8);
        assert!(!formatter.shows_summary());
    }

    #[test]
    fn test_json_empty_is_array() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_claims(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        assert!(output.contains("Strength"));
        assert!(output.contains("Confidence"));
        assert!(output.contains("{PERCENT=40%}"));
        assert!(output.contains("0.80"));
    }

    #[test]
    fn test_empty_claims() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_claims(&[]).unwrap();
        assert_eq!(output, "No claims found.");
        assert!(formatter.shows_summary());
    }

    #[test]
    fn test_format_entities_order() {
        let mut entities = EntityMap::new();
        entities.insert(EntityCategory::Org, "Acme Corp".to_string());
        entities.insert(EntityCategory::Percent, "12%".to_string());
        assert_eq!(format_entities(&entities), "{PERCENT=12%, ORG=Acme Corp}");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.error("bad"), "✗ bad");
        assert_eq!(formatter.info("done"), "ℹ done");
    }
}
