use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

use failure::Fail;
use log::debug;
use serde::Deserialize;

use crate::model::Role;

/// Thesauri that need special handling: (title, url, rule).
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "BODC Parameter Usage Vocabulary",
        "http://vocab.nerc.ac.uk/collection/P01/current/",
        "variableMeasured",
    ),
    (
        "International Standards Organisation ISO19115 Topic Categories",
        "http://vocab.nerc.ac.uk/collection/P05/current/",
        "theme",
    ),
    (
        "GEMET - INSPIRE themes, version 1.0",
        "http://vocab.nerc.ac.uk/collection/P22/current/",
        "theme",
    ),
    ("GemetInspireTheme", "", "theme"),
    (
        "Marine Institute Calendar Concept Scheme",
        "http://linked.marine.ie/calendar",
        "ignore",
    ),
];

/// This struct reflects an entry of a classification rules file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClassificationRule {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    pub rule: String,
}

/// Maps thesaurus titles to the `Role` their keyword groups play.
///
/// Titles are matched exactly. Titles without an entry are `Role::Plain`.
#[derive(Debug, Default)]
pub struct ClassificationRules {
    rules: HashMap<String, (Role, Option<String>)>,
}

impl ClassificationRules {
    /// Build a table from rule entries, failing on the first unknown rule name.
    /// A later entry for the same title replaces an earlier one.
    pub fn from_rules<I>(rules: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = ClassificationRule>,
    {
        let mut table = Self::default();
        table.extend(rules)?;
        Ok(table)
    }

    /// Load rule entries from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        Self::from_rules(Self::read_rules(path)?)
    }

    /// The table of thesauri known to need special handling.
    ///
    /// Panics on first use if the table contains an unknown rule name.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<ClassificationRules> = OnceLock::new();

        BUILTIN.get_or_init(|| {
            Self::from_rules(Self::builtin_rules())
                .unwrap_or_else(|e| panic!("Invalid built-in classification table: {}", e))
        })
    }

    /// The built-in table extended by the entries of a JSON rules file.
    pub fn builtin_with_path(path: &Path) -> Result<Self, RulesError> {
        let mut table = Self::from_rules(Self::builtin_rules())?;
        table.extend(Self::read_rules(path)?)?;
        Ok(table)
    }

    fn builtin_rules() -> impl Iterator<Item = ClassificationRule> {
        BUILTIN_RULES
            .iter()
            .map(|&(title, url, rule)| ClassificationRule {
                title: title.into(),
                url: Some(url).filter(|url| !url.is_empty()).map(Into::into),
                rule: rule.into(),
            })
    }

    fn read_rules(path: &Path) -> Result<Vec<ClassificationRule>, RulesError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn extend<I>(&mut self, rules: I) -> Result<(), RulesError>
    where
        I: IntoIterator<Item = ClassificationRule>,
    {
        for rule in rules {
            let role = rule
                .rule
                .parse::<Role>()
                .map_err(|_| RulesError::InvalidRole {
                    title: rule.title.clone(),
                    rule: rule.rule.clone(),
                })?;

            debug!("Classification rule: `{}` -> {}", rule.title, role);

            let url = rule.url.filter(|url| !url.is_empty());
            self.rules.insert(rule.title, (role, url));
        }

        Ok(())
    }

    /// The role of a keyword group with the given thesaurus title.
    pub fn classify(&self, title: &str) -> Role {
        self.rules.get(title).map_or(Role::Plain, |(role, _)| *role)
    }

    /// The URL a rule gives for the thesaurus with the given title.
    pub fn thesaurus_url(&self, title: &str) -> Option<&str> {
        self.rules.get(title).and_then(|(_, url)| url.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Errors while building a classification table.
#[derive(Debug, Fail)]
pub enum RulesError {
    #[fail(display = "Rule for `{}` has an invalid handling rule `{}`.", title, rule)]
    InvalidRole { title: String, rule: String },
    #[fail(display = "Unable to read rules file: {}", _0)]
    Io(#[cause] std::io::Error),
    #[fail(display = "Unable to parse rules file: {}", _0)]
    Json(#[cause] serde_json::Error),
}

impl From<std::io::Error> for RulesError {
    fn from(error: std::io::Error) -> Self {
        RulesError::Io(error)
    }
}

impl From<serde_json::Error> for RulesError {
    fn from(error: serde_json::Error) -> Self {
        RulesError::Json(error)
    }
}
