//! Browsing state for the script library: search filter, expanded categories,
//! and the drag payload format used to hand a script to the preview surface.

use tracing::debug;

use crate::error::{AppError, Result};
use crate::templates::{catalog, BoilerplateScript, ScriptCategory};

/// Category that starts expanded when the library is first shown.
const INITIAL_EXPANDED: &str = "system-admin";

pub struct LibraryBrowser {
    search_query: String,
    expanded: Vec<String>,
}

impl Default for LibraryBrowser {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            expanded: vec![INITIAL_EXPANDED.to_string()],
        }
    }
}

impl LibraryBrowser {
    /// Updates the active filter string. Empty means "show all".
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// The catalog as filtered by the current query.
    ///
    /// An empty query returns the catalog unfiltered — this keeps the
    /// placeholder categories that the substring rule would drop. A non-empty
    /// query keeps only scripts whose name or description contains it
    /// (case-insensitive) and omits categories left with no matches.
    pub fn filtered_categories(&self) -> Vec<ScriptCategory> {
        if self.search_query.trim().is_empty() {
            return catalog().to_vec();
        }

        let query = self.search_query.to_lowercase();
        catalog()
            .iter()
            .filter_map(|category| {
                let scripts: Vec<BoilerplateScript> = category
                    .scripts
                    .iter()
                    .filter(|script| {
                        script.name.to_lowercase().contains(&query)
                            || script.description.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect();

                if scripts.is_empty() {
                    None
                } else {
                    Some(ScriptCategory {
                        id: category.id.clone(),
                        name: category.name.clone(),
                        scripts,
                    })
                }
            })
            .collect()
    }

    /// Flips a category in the expanded set. Expansion is independent of the
    /// active filter.
    pub fn toggle_category(&mut self, category_id: &str) {
        if let Some(pos) = self.expanded.iter().position(|id| id == category_id) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(category_id.to_string());
        }
    }

    pub fn expanded_categories(&self) -> &[String] {
        &self.expanded
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.iter().any(|id| id == category_id)
    }
}

/// Serializes a script record for attachment to a drag operation.
pub fn serialize_drag_payload(script: &BoilerplateScript) -> Result<String> {
    Ok(serde_json::to_string(script)?)
}

/// Parses a drag payload back into a script record.
///
/// Schema-validated: the payload must deserialize to the full record shape and
/// carry a non-empty id and template. Failures come back as an error value so
/// the caller can show them instead of swallowing the drop.
pub fn parse_drag_payload(raw: &str) -> Result<BoilerplateScript> {
    let script: BoilerplateScript = serde_json::from_str(raw).map_err(|e| {
        debug!(error = %e, "rejected malformed drag payload");
        AppError::Payload(e)
    })?;

    if script.id.is_empty() || script.template.is_empty() {
        debug!(id = %script.id, "rejected drag payload with empty fields");
        return Err(AppError::Custom(
            "Invalid script payload: missing id or template".into(),
        ));
    }

    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::find_script;

    #[test]
    fn empty_query_returns_full_catalog_with_empty_categories() {
        let browser = LibraryBrowser::default();
        let categories = browser.filtered_categories();
        assert_eq!(categories.len(), catalog().len());
        assert!(categories.iter().any(|c| c.scripts.is_empty()));
    }

    #[test]
    fn whitespace_query_uses_the_unfiltered_fast_path() {
        let mut browser = LibraryBrowser::default();
        browser.set_search_query("   ");
        assert_eq!(browser.filtered_categories().len(), catalog().len());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let mut browser = LibraryBrowser::default();
        browser.set_search_query("SUDO");
        let categories = browser.filtered_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "user-management");
        assert!(categories[0].scripts.iter().any(|s| s.id == "create-sudo-user"));
    }

    #[test]
    fn query_matches_description_too() {
        let mut browser = LibraryBrowser::default();
        browser.set_search_query("swap space");
        let categories = browser.filtered_categories();
        assert!(categories
            .iter()
            .flat_map(|c| c.scripts.iter())
            .any(|s| s.id == "create-swap"));
    }

    #[test]
    fn filtered_view_never_contains_empty_categories() {
        let mut browser = LibraryBrowser::default();
        browser.set_search_query("backup");
        for category in browser.filtered_categories() {
            assert!(!category.scripts.is_empty(), "category {}", category.id);
        }
    }

    #[test]
    fn no_match_yields_no_categories() {
        let mut browser = LibraryBrowser::default();
        browser.set_search_query("zzz-no-such-script");
        assert!(browser.filtered_categories().is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut browser = LibraryBrowser::default();
        assert!(browser.is_expanded("system-admin"));
        browser.toggle_category("system-admin");
        assert!(!browser.is_expanded("system-admin"));
        browser.toggle_category("docker");
        assert!(browser.is_expanded("docker"));
    }

    #[test]
    fn drag_payload_round_trips() {
        let script = find_script("create-sudo-user").unwrap();
        let raw = serialize_drag_payload(script).unwrap();
        let parsed = parse_drag_payload(&raw).unwrap();
        assert_eq!(&parsed, script);
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        assert!(parse_drag_payload("not json at all").is_err());
        assert!(parse_drag_payload("{\"id\":\"x\"}").is_err());
    }

    #[test]
    fn payload_with_empty_id_is_rejected() {
        let raw = r#"{"id":"","name":"n","description":"d","category":"c","template":"t"}"#;
        assert!(parse_drag_payload(raw).is_err());
    }
}
