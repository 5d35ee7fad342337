pub mod backup_restore;
pub mod general;
pub mod monitoring;
pub mod system_admin;
pub mod user_management;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Id of the pass-through template the composer starts on.
pub const BLANK_TEMPLATE_ID: &str = "blank";

/// A single boilerplate script in the library.
/// Authored at build time, never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoilerplateScript {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub template: String,
}

impl BoilerplateScript {
    pub(crate) fn new(
        id: &str,
        name: &str,
        description: &str,
        category: &str,
        template: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            template: template.to_string(),
        }
    }
}

/// A named group of scripts. Insertion order defines display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptCategory {
    pub id: String,
    pub name: String,
    pub scripts: Vec<BoilerplateScript>,
}

fn category(id: &str, name: &str, scripts: Vec<BoilerplateScript>) -> ScriptCategory {
    ScriptCategory {
        id: id.to_string(),
        name: name.to_string(),
        scripts,
    }
}

/// The full script library, built once and read-only afterwards.
pub fn catalog() -> &'static [ScriptCategory] {
    static CATALOG: OnceLock<Vec<ScriptCategory>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            category("general", "Starter Templates", general::scripts()),
            category(
                "system-admin",
                "System & Network Administration",
                system_admin::scripts(),
            ),
            category("user-management", "User Management", user_management::scripts()),
            category("backup-restore", "Backup & Restore", backup_restore::scripts()),
            category("monitoring", "Monitoring & Alerts", monitoring::scripts()),
            // Placeholder categories — no scripts authored yet, but they still
            // appear when browsing the unfiltered library.
            category("cron-jobs", "Cron Jobs & Scheduling", Vec::new()),
            category("networking", "Networking & Firewall", Vec::new()),
            category("security", "Security & Updates", Vec::new()),
            category("docker", "Docker & Container Management", Vec::new()),
            category("cloud", "Cloud Infrastructure", Vec::new()),
            category("miscellaneous", "Miscellaneous", Vec::new()),
        ]
    })
}

/// Linear lookup of a script by id across all categories.
pub fn find_script(id: &str) -> Option<&'static BoilerplateScript> {
    catalog()
        .iter()
        .flat_map(|c| c.scripts.iter())
        .find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn script_ids_are_unique() {
        let mut seen = HashSet::new();
        for category in catalog() {
            for script in &category.scripts {
                assert!(seen.insert(script.id.as_str()), "duplicate id {}", script.id);
            }
        }
    }

    #[test]
    fn scripts_reference_their_own_category() {
        for category in catalog() {
            for script in &category.scripts {
                assert_eq!(script.category, category.id, "script {}", script.id);
            }
        }
    }

    #[test]
    fn blank_template_exists() {
        let blank = find_script(BLANK_TEMPLATE_ID).expect("blank template");
        assert_eq!(blank.category, "general");
        assert!(blank.template.starts_with("#!/bin/bash"));
    }

    #[test]
    fn sudo_user_script_is_in_user_management() {
        let script = find_script("create-sudo-user").expect("create-sudo-user");
        assert_eq!(script.name, "Create User with Sudo Rights");
        assert_eq!(script.category, "user-management");
        assert!(script.template.contains("useradd"));
    }

    #[test]
    fn find_script_misses_unknown_ids() {
        assert!(find_script("not-a-template").is_none());
    }

    #[test]
    fn placeholder_categories_are_kept_empty() {
        let docker = catalog().iter().find(|c| c.id == "docker").expect("docker");
        assert!(docker.scripts.is_empty());
    }
}
