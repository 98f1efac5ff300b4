//! Template catalog
//!
//! Normalizes loosely-typed JSON records into [`Template`]s at load time.
//! A record must be a JSON object; recognized keys are optional but, when
//! present and not `null`, must have the expected type.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Display name used when a record has neither `title` nor `name`
pub const UNTITLED: &str = "Untitled";

/// Keys checked, in order, for a template's reference URL
const URL_KEYS: [&str; 3] = ["zapier_url", "reference_url", "url"];

/// One automation template from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub apps_involved: Vec<String>,
    pub reference_url: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            apps_involved: Vec::new(),
            reference_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_apps<I, S>(mut self, apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apps_involved = apps.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = url.into();
        self
    }

    /// Normalize a raw catalog record.
    ///
    /// Name falls back `title` -> `name` -> [`UNTITLED`]; apps fall back
    /// `apps` -> `apps_involved`. Empty values count as absent.
    pub fn from_record(index: usize, record: &Value) -> Result<Self> {
        let obj = record.as_object().ok_or_else(|| {
            Error::CatalogLoad(format!("record {index}: expected an object"))
        })?;

        let name = non_empty(optional_str(obj, "title", index)?)
            .or(non_empty(optional_str(obj, "name", index)?))
            .unwrap_or(UNTITLED)
            .to_string();

        let description = optional_str(obj, "description", index)?
            .unwrap_or_default()
            .to_string();

        let apps = optional_str_list(obj, "apps", index)?.filter(|a| !a.is_empty());
        let apps_involved = match apps {
            Some(apps) => apps,
            None => optional_str_list(obj, "apps_involved", index)?.unwrap_or_default(),
        };

        let mut reference_url = String::new();
        for key in URL_KEYS {
            if let Some(url) = non_empty(optional_str(obj, key, index)?) {
                reference_url = url.to_string();
                break;
            }
        }

        Ok(Self {
            name,
            description,
            apps_involved,
            reference_url,
        })
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn optional_str<'a>(obj: &'a Map<String, Value>, key: &str, index: usize) -> Result<Option<&'a str>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(Error::CatalogLoad(format!(
            "record {index}: field '{key}' must be a string, got {other}"
        ))),
    }
}

fn optional_str_list(obj: &Map<String, Value>, key: &str, index: usize) -> Result<Option<Vec<String>>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::CatalogLoad(format!(
                        "record {index}: field '{key}' must contain only strings"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(Error::CatalogLoad(format!(
            "record {index}: field '{key}' must be an array of strings"
        ))),
    }
}

/// Ordered, immutable sequence of templates. Position is identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    #[must_use]
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Normalize already-parsed records
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let templates = records
            .iter()
            .enumerate()
            .map(|(i, record)| Template::from_record(i, record))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { templates })
    }

    /// Normalize a parsed JSON document, which must be an array of records
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(records) => Self::from_records(records),
            _ => Err(Error::CatalogLoad(
                "catalog must be a JSON array of records".to_string(),
            )),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::CatalogLoad(format!("invalid JSON: {e}")))?;
        Self::from_value(&value)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::CatalogLoad(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Display names in catalog order
    pub fn display_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Template>> for Catalog {
    fn from(templates: Vec<Template>) -> Self {
        Self::new(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_title_preferred_over_name() {
        let t = Template::from_record(0, &json!({"title": "A", "name": "B"})).unwrap();
        assert_eq!(t.name, "A");

        let t = Template::from_record(0, &json!({"name": "B"})).unwrap();
        assert_eq!(t.name, "B");

        let t = Template::from_record(0, &json!({"title": "", "name": "B"})).unwrap();
        assert_eq!(t.name, "B");
    }

    #[test]
    fn test_untitled_fallback() {
        let t = Template::from_record(0, &json!({"description": "x"})).unwrap();
        assert_eq!(t.name, UNTITLED);
        assert_eq!(t.description, "x");
    }

    #[test]
    fn test_optional_fields_default() {
        let t = Template::from_record(0, &json!({"title": "A", "description": null})).unwrap();
        assert_eq!(t.description, "");
        assert!(t.apps_involved.is_empty());
        assert_eq!(t.reference_url, "");
    }

    #[test]
    fn test_apps_fallback() {
        let t = Template::from_record(0, &json!({"apps": ["Slack"], "apps_involved": ["Jira"]})).unwrap();
        assert_eq!(t.apps_involved, vec!["Slack"]);

        let t = Template::from_record(0, &json!({"apps": [], "apps_involved": ["Jira"]})).unwrap();
        assert_eq!(t.apps_involved, vec!["Jira"]);
    }

    #[test]
    fn test_reference_url_keys() {
        let t = Template::from_record(0, &json!({"zapier_url": "https://zapier.com/a"})).unwrap();
        assert_eq!(t.reference_url, "https://zapier.com/a");

        let t = Template::from_record(0, &json!({"url": "https://example.com"})).unwrap();
        assert_eq!(t.reference_url, "https://example.com");
    }

    #[test]
    fn test_invalid_records() {
        assert!(matches!(Template::from_record(0, &json!("just a string")), Err(Error::CatalogLoad(_))));
        assert!(matches!(Template::from_record(0, &json!({"title": 42})), Err(Error::CatalogLoad(_))));
        assert!(matches!(Template::from_record(0, &json!({"apps": "Slack"})), Err(Error::CatalogLoad(_))));
        assert!(matches!(Template::from_record(0, &json!({"apps": [1, 2]})), Err(Error::CatalogLoad(_))));
    }

    #[test]
    fn test_catalog_from_json_str() {
        let catalog = Catalog::from_json_str(r#"[{"title": "A"}, {"name": "B"}, {}]"#).unwrap();
        assert_eq!(catalog.display_names(), vec!["A", "B", UNTITLED]);

        assert!(matches!(Catalog::from_json_str("{not json"), Err(Error::CatalogLoad(_))));
        assert!(matches!(Catalog::from_json_str(r#"{"title": "A"}"#), Err(Error::CatalogLoad(_))));
        assert!(Catalog::from_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_catalog_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Slack Alert", "apps": ["Slack"]}}]"#).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().apps_involved, vec!["Slack"]);

        let missing = Catalog::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(Error::CatalogLoad(_))));
    }
}
