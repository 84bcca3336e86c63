use std::fmt;
use std::str::FromStr;

use failure::Fail;
use uuid::Uuid;

/// How a keyword group is treated when it is projected into a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Plain,
    Theme,
    VariableMeasured,
    Ignored,
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parse a rule name as it appears in a rules table, ignoring case.
    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        match rule.to_lowercase().as_str() {
            "plain" | "keyword" => Ok(Role::Plain),
            "theme" => Ok(Role::Theme),
            "variablemeasured" => Ok(Role::VariableMeasured),
            "ignore" | "ignored" => Ok(Role::Ignored),
            _ => Err(UnknownRole {
                rule: rule.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Plain => "plain",
            Role::Theme => "theme",
            Role::VariableMeasured => "variableMeasured",
            Role::Ignored => "ignore",
        };
        write!(f, "{}", name)
    }
}

/// This error occurs when a rule name is none of the known roles.
#[derive(Debug, Fail, PartialEq)]
#[fail(display = "Unknown keyword handling rule `{}`.", rule)]
pub struct UnknownRole {
    pub rule: String,
}

/// A single keyword of a keyword group.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordTerm {
    id: String,
    label: Option<String>,
    url: Option<String>,
}

impl KeywordTerm {
    /// Create a new term with a fresh identifier.
    pub fn new(label: Option<String>, url: Option<String>) -> Self {
        Self {
            id: fresh_id(),
            label,
            url,
        }
    }

    /// An opaque identifier that is only used to name graph nodes.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// A collection of keywords drawn from one thesaurus, tagged with its `Role`.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordGroup {
    id: String,
    title: Option<String>,
    url: Option<String>,
    role: Role,
    terms: Vec<KeywordTerm>,
}

impl KeywordGroup {
    pub fn new(
        title: Option<String>,
        url: Option<String>,
        role: Role,
        terms: Vec<KeywordTerm>,
    ) -> Self {
        Self {
            id: fresh_id(),
            title,
            url,
            role,
            terms,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The thesaurus title, if the group names one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The terms in document order.
    pub fn terms(&self) -> &[KeywordTerm] {
        &self.terms
    }

    /// Labels of all terms that have one.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().filter_map(KeywordTerm::label)
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}
