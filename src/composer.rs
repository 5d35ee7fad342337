//! Turns a chosen template plus an optional free-text description into the
//! final script string.

/// Leading prefix every authored template starts with.
pub const SHEBANG_PREFIX: &str = "#!/bin/bash\n\n";

/// Combines a template with an optional description.
///
/// With an empty (after trimming) description the template passes through
/// byte-for-byte. Otherwise the template's leading shebang-plus-blank-line is
/// stripped and the output is rebuilt as shebang, description comment, body.
pub fn compose(template: &str, description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        return template.to_string();
    }

    let body = template.strip_prefix(SHEBANG_PREFIX).unwrap_or(template);
    format!("{SHEBANG_PREFIX}# {description}\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::find_script;

    #[test]
    fn empty_description_passes_template_through_unchanged() {
        let script = find_script("create-sudo-user").unwrap();
        assert_eq!(compose(&script.template, ""), script.template);
        assert_eq!(compose(&script.template, "   \n"), script.template);
    }

    #[test]
    fn description_is_spliced_after_the_shebang() {
        let script = find_script("create-sudo-user").unwrap();
        let out = compose(&script.template, "Provision admin");

        assert!(out.starts_with("#!/bin/bash\n\n# Provision admin\n\n"));
        let body = script.template.strip_prefix(SHEBANG_PREFIX).unwrap();
        assert_eq!(out, format!("#!/bin/bash\n\n# Provision admin\n\n{body}"));
    }

    #[test]
    fn description_is_trimmed_before_splicing() {
        let out = compose("#!/bin/bash\n\necho hi\n", "  do things  ");
        assert_eq!(out, "#!/bin/bash\n\n# do things\n\necho hi\n");
    }

    #[test]
    fn template_without_shebang_prefix_is_kept_whole() {
        let out = compose("echo hi\n", "note");
        assert_eq!(out, "#!/bin/bash\n\n# note\n\necho hi\n");
    }
}
