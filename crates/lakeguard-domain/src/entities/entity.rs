//! Entities (tables) and fields (columns)

use crate::entities::PropertyBag;
use crate::error::Error;
use crate::value_objects::EntityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-part qualified name: `catalog.namespace.name`
///
/// # Example
///
/// ```
/// use lakeguard_domain::QualifiedName;
///
/// let name: QualifiedName = "main.sales.orders".parse().unwrap();
/// assert_eq!(name.namespace, "sales");
/// assert_eq!(name.to_string(), "main.sales.orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Catalog the entity lives in
    pub catalog: String,
    /// Namespace (schema) inside the catalog
    pub namespace: String,
    /// Local entity name
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name from its parts
    pub fn new(
        catalog: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Names of the parts that are blank
    pub fn missing_parts(&self) -> Vec<&'static str> {
        [
            ("catalog", &self.catalog),
            ("namespace", &self.namespace),
            ("name", &self.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(part, _)| part)
        .collect()
    }

    /// Whether all three parts are present
    pub fn is_complete(&self) -> bool {
        self.missing_parts().is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.catalog, self.namespace, self.name)
    }
}

impl FromStr for QualifiedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [catalog, namespace, name]
                if !catalog.is_empty() && !namespace.is_empty() && !name.is_empty() =>
            {
                Ok(Self::new(*catalog, *namespace, *name))
            }
            _ => Err(Error::InvalidQualifiedName {
                value: s.to_string(),
            }),
        }
    }
}

/// A column-like sub-entity, owned by its [`Entity`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name
    pub name: String,
    /// Opaque type descriptor (e.g. `"bigint"`)
    #[serde(default)]
    pub type_text: String,
    /// Optional free-text annotation
    #[serde(default)]
    pub comment: Option<String>,
}

impl Field {
    /// Create an undocumented field
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            comment: None,
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// A field is documented when its comment is non-blank
    pub fn is_documented(&self) -> bool {
        self.comment.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

/// A discovered table-like metadata record
///
/// # Example
///
/// ```
/// use lakeguard_domain::{Entity, Field, QualifiedName};
///
/// let entity = Entity::new(QualifiedName::new("main", "sales", "orders"))
///     .with_comment("Customer orders placed through the web shop")
///     .with_field(Field::new("order_id", "bigint").with_comment("Order key"))
///     .with_property("clusterByAuto", "true")
///     .with_size_bytes(4096);
///
/// assert!(entity.has_comment());
/// assert_eq!(entity.fields.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Qualified name, unique within a discovery batch
    pub name: QualifiedName,
    /// Optional free-text annotation
    #[serde(default)]
    pub comment: Option<String>,
    /// Ordered column list
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Arbitrary table properties
    #[serde(default)]
    pub properties: PropertyBag,
    /// Size in bytes, when discovery could resolve it
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

impl Entity {
    /// Create an entity with no comment, fields, properties or size
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            comment: None,
            fields: Vec::new(),
            properties: PropertyBag::new(),
            size_bytes: None,
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Append a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Record a known size
    pub fn with_size_bytes(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    /// Trimmed comment, or `None` when absent or blank
    pub fn trimmed_comment(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Whether the entity carries a non-blank comment
    pub fn has_comment(&self) -> bool {
        self.trimmed_comment().is_some()
    }

    /// Whether the entity lives in the namespace reserved for test fixtures
    pub fn is_test_fixture(&self, test_namespace: &str) -> bool {
        self.name.namespace == test_namespace
    }

    /// Structural checks on identity fields
    ///
    /// An entity that fails here is reported with this error attached to each
    /// of its outcomes; the rest of the batch is still evaluated.
    pub fn validate_identity(&self) -> Result<(), EntityError> {
        let missing = self.name.missing_parts();
        if !missing.is_empty() {
            return Err(EntityError::MissingIdentity {
                parts: missing.into_iter().map(String::from).collect(),
            });
        }
        if let Some(index) = self.fields.iter().position(|f| f.name.trim().is_empty()) {
            return Err(EntityError::UnnamedField { index });
        }
        Ok(())
    }
}
