//! Ordered rule catalogue for the structured-pattern stage
//!
//! Rules are defined in TOML and compiled with `fancy-regex` so that
//! fixed-length numeric patterns can use digit lookarounds. Rule order is
//! load-bearing: each rule runs as a full-string pass over the output of the
//! previous one, and prefix-specific rules must precede their generic-length
//! counterparts to stay reachable.

use crate::redaction::models::RedactionCategory;
use anyhow::{Context, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Rule definition as it appears in the TOML library
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Rule name, used in diagnostics
    pub name: String,
    /// Category label (must be a structured category)
    pub category: String,
    /// Regex pattern
    pub pattern: String,
}

/// Rule library container
#[derive(Debug, Deserialize)]
struct RuleLibrary {
    rules: Vec<RuleDefinition>,
}

/// Compiled rule with metadata
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Rule name from the library
    pub name: String,
    /// Category whose placeholder replaces each match
    pub category: RedactionCategory,
    /// Compiled regex
    pub regex: Regex,
}

/// Ordered set of compiled redaction rules
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Load a rule set from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read rule library: {}", path.as_ref().display())
        })?;

        Self::from_toml(&content)
    }

    /// Parse and compile a rule set from TOML content, preserving rule order
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: RuleLibrary =
            toml::from_str(content).context("Failed to parse rule library TOML")?;

        if library.rules.is_empty() {
            anyhow::bail!("Rule library contains no rules");
        }

        let mut rules = Vec::with_capacity(library.rules.len());
        for def in &library.rules {
            let category = Self::parse_category(&def.category)
                .with_context(|| format!("Invalid category in rule '{}'", def.name))?;

            let regex = Regex::new(&def.pattern)
                .with_context(|| format!("Invalid regex in rule '{}': {}", def.name, def.pattern))?;

            rules.push(CompiledRule {
                name: def.name.clone(),
                category,
                regex,
            });
        }

        Ok(Self { rules })
    }

    /// The built-in rule catalogue, embedded at compile time
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/redaction_rules.toml");
        Self::from_toml(default_toml)
    }

    /// All rules in application order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse a category label into a structured [`RedactionCategory`]
    fn parse_category(s: &str) -> Result<RedactionCategory> {
        let category = match s.to_uppercase().as_str() {
            "TAX_ID" => RedactionCategory::TaxId,
            "REG_NUMBER" => RedactionCategory::RegNumber,
            "REG_NUMBER_SOLE_PROPRIETOR" => RedactionCategory::RegNumberSoleProprietor,
            "TAX_REG_CODE" => RedactionCategory::TaxRegCode,
            "BANK_ROUTING" => RedactionCategory::BankRouting,
            "ACCOUNT" => RedactionCategory::Account,
            "CORR_ACCOUNT" => RedactionCategory::CorrAccount,
            "PHONE" => RedactionCategory::Phone,
            "EMAIL" => RedactionCategory::Email,
            "PASSPORT" => RedactionCategory::Passport,
            "INSURANCE_NUMBER" => RedactionCategory::InsuranceNumber,
            "PERSON" | "ORGANIZATION" | "LOCATION" => {
                anyhow::bail!(
                    "Category {s} is produced by the entity stage and cannot be a pattern rule"
                )
            }
            _ => anyhow::bail!("Unknown redaction category: {s}"),
        };
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_load() {
        let rules = RuleSet::builtin().unwrap();
        assert!(!rules.is_empty());
        assert_eq!(rules.len(), 11);
    }

    #[test]
    fn test_builtin_order_preserved() {
        let rules = RuleSet::builtin().unwrap();
        let categories: Vec<_> = rules.rules().iter().map(|r| r.category).collect();

        // Prefix-specific rules must come before their generic counterparts.
        let bank = categories
            .iter()
            .position(|c| *c == RedactionCategory::BankRouting)
            .unwrap();
        let tax_reg = categories
            .iter()
            .position(|c| *c == RedactionCategory::TaxRegCode)
            .unwrap();
        assert!(bank < tax_reg);

        let corr = categories
            .iter()
            .position(|c| *c == RedactionCategory::CorrAccount)
            .unwrap();
        let account = categories
            .iter()
            .position(|c| *c == RedactionCategory::Account)
            .unwrap();
        assert!(corr < account);

        assert_eq!(categories[0], RedactionCategory::TaxId);
    }

    #[test]
    fn test_entity_category_rejected() {
        let toml = r#"
            [[rules]]
            name = "bad"
            category = "PERSON"
            pattern = '\w+'
        "#;
        assert!(RuleSet::from_toml(toml).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml = r#"
            [[rules]]
            name = "bad"
            category = "SOMETHING_ELSE"
            pattern = '\w+'
        "#;
        assert!(RuleSet::from_toml(toml).is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
            [[rules]]
            name = "bad"
            category = "EMAIL"
            pattern = '(unclosed'
        "#;
        assert!(RuleSet::from_toml(toml).is_err());
    }

    #[test]
    fn test_empty_library_rejected() {
        assert!(RuleSet::from_toml("rules = []").is_err());
    }
}
