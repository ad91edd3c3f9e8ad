//! Domain model names and relation kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A persisted domain model known to the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelName {
    User,
    Folder,
    File,
    Authorization,
    SignIn,
    Case,
    Proceeding,
    UserProceeding,
    LoginLink,
}

impl ModelName {
    /// Every model, in the order resources are listed in the panel.
    pub const ALL: [ModelName; 9] = [
        ModelName::User,
        ModelName::Folder,
        ModelName::File,
        ModelName::Authorization,
        ModelName::SignIn,
        ModelName::Case,
        ModelName::Proceeding,
        ModelName::UserProceeding,
        ModelName::LoginLink,
    ];

    /// The name the persistence layer uses for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::User => "User",
            ModelName::Folder => "Folder",
            ModelName::File => "File",
            ModelName::Authorization => "Authorization",
            ModelName::SignIn => "SignIn",
            ModelName::Case => "Case",
            ModelName::Proceeding => "Proceeding",
            ModelName::UserProceeding => "UserProceeding",
            ModelName::LoginLink => "LoginLink",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| Error::UnknownModelName(s.to_string()))
    }
}

/// Cardinality between a parent model and one of its child collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    /// Child records hold a key pointing at the parent.
    OneToMany,
    /// Parent and child are linked through a join entity.
    ManyToMany,
}

impl RelationshipType {
    /// Wire name of the relationship type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::OneToMany => "one-to-many",
            RelationshipType::ManyToMany => "many-to-many",
        }
    }
}

/// One child collection owned by a parent model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationTarget {
    /// The child model.
    pub model_name: ModelName,
    /// Cardinality from the parent to the child.
    pub relationship_type: RelationshipType,
}

impl RelationTarget {
    /// Create a one-to-many target.
    pub fn one_to_many(model_name: ModelName) -> Self {
        Self {
            model_name,
            relationship_type: RelationshipType::OneToMany,
        }
    }

    /// Create a many-to-many target.
    pub fn many_to_many(model_name: ModelName) -> Self {
        Self {
            model_name,
            relationship_type: RelationshipType::ManyToMany,
        }
    }
}
