//! Identifier scanner - organization discovery from platform build files.
//!
//! An existing project carries its organization (the reverse-DNS prefix of
//! its identifiers) in the files the platforms actually build from: gradle
//! files on Android, the Xcode project on iOS. Scanning those lets tooling
//! default the organization for new artifacts to whatever the project
//! already uses instead of asking.
//!
//! Missing files contribute nothing; disagreement between sources is not
//! an error, every organization found is returned and the caller decides
//! what ambiguity means.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::project::Project;

/// Organizations declared by the project's platform files, in scan order,
/// deduplicated.
///
/// Scan order is fixed: root Android build files, root iOS project file,
/// then the same pair for the `example/` sub-project. Empty when no
/// platform file yields an identifier.
pub fn organization_names(project: &Project) -> Vec<String> {
    let mut identifiers = Vec::new();
    collect_identifiers(project, &mut identifiers);
    collect_identifiers(&project.example(), &mut identifiers);

    let mut organizations = Vec::new();
    for identifier in &identifiers {
        if let Some(organization) = organization_from_identifier(identifier) {
            if !organizations.contains(&organization) {
                organizations.push(organization);
            }
        }
    }
    organizations
}

/// One project's identifiers: Android first (`applicationId`, falling back
/// to `group`), then the iOS bundle identifier.
fn collect_identifiers(project: &Project, identifiers: &mut Vec<String>) {
    let android = project.android();
    if let Some(identifier) = android.application_id().or_else(|| android.group()) {
        identifiers.push(identifier);
    }
    if let Some(identifier) = project.ios().product_bundle_identifier() {
        identifiers.push(identifier);
    }
}

/// Strip the final dot-separated component: `io.flutter.someProject`
/// becomes `io.flutter`. Identifiers without a usable prefix carry no
/// organization.
fn organization_from_identifier(identifier: &str) -> Option<String> {
    match identifier.rfind('.') {
        Some(0) | None => None,
        Some(index) => Some(identifier[..index].to_string()),
    }
}

// =============================================================================
// File Extraction
// =============================================================================

/// `applicationId` from a gradle build file.
pub(crate) fn gradle_application_id(file: &Path) -> Option<String> {
    extract(file, application_id_regex())
}

/// `group` from a gradle build file.
pub(crate) fn gradle_group(file: &Path) -> Option<String> {
    extract(file, group_regex())
}

/// `PRODUCT_BUNDLE_IDENTIFIER` from an Xcode `project.pbxproj`.
pub(crate) fn product_bundle_identifier(file: &Path) -> Option<String> {
    extract(file, bundle_identifier_regex())
}

/// First capture of `regex` in `file`. Unreadable files yield nothing.
fn extract(file: &Path, regex: &Regex) -> Option<String> {
    let contents = fs::read_to_string(file).ok()?;
    regex
        .captures(&contents)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str().trim().to_string())
}

/// Matches `applicationId "com.example.app"`, with groovy or kotlin-dsl
/// assignment and either quote style.
fn application_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\s*applicationId\s*=?\s*['"]([^'"]+)['"]"#)
            .expect("Invalid applicationId regex")
    })
}

/// Matches `group 'com.example'` in the same dialects.
fn group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\s*group\s*=?\s*['"]([^'"]+)['"]"#).expect("Invalid group regex")
    })
}

/// Matches `PRODUCT_BUNDLE_IDENTIFIER = com.example.app;`, quoted or not.
fn bundle_identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"PRODUCT_BUNDLE_IDENTIFIER\s*=\s*"?([^"';\n]+)"?\s*;"#)
            .expect("Invalid bundle identifier regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_id_groovy() {
        let gradle = r#"
android {
    defaultConfig {
        applicationId "io.flutter.someProject"
        minSdkVersion 16
    }
}
"#;
        let captures = application_id_regex().captures(gradle).unwrap();
        assert_eq!(&captures[1], "io.flutter.someProject");
    }

    #[test]
    fn test_application_id_kotlin_dsl() {
        let gradle = "    applicationId = \"com.example.counter\"\n";
        let captures = application_id_regex().captures(gradle).unwrap();
        assert_eq!(&captures[1], "com.example.counter");
    }

    #[test]
    fn test_application_id_single_quotes() {
        let gradle = "        applicationId 'com.example.counter'\n";
        let captures = application_id_regex().captures(gradle).unwrap();
        assert_eq!(&captures[1], "com.example.counter");
    }

    #[test]
    fn application_id_suffix_is_not_an_application_id() {
        assert!(application_id_regex()
            .captures("        applicationIdSuffix \".debug\"\n")
            .is_none());
    }

    #[test]
    fn test_group_regex() {
        let gradle = "group 'io.flutter.lib'\nversion '1.0-SNAPSHOT'\n";
        let captures = group_regex().captures(gradle).unwrap();
        assert_eq!(&captures[1], "io.flutter.lib");
    }

    #[test]
    fn test_bundle_identifier_unquoted() {
        let pbxproj = "\t\t\t\tPRODUCT_BUNDLE_IDENTIFIER = io.flutter.someProject;\n";
        let captures = bundle_identifier_regex().captures(pbxproj).unwrap();
        assert_eq!(captures[1].trim(), "io.flutter.someProject");
    }

    #[test]
    fn test_bundle_identifier_quoted() {
        let pbxproj = "PRODUCT_BUNDLE_IDENTIFIER = \"com.example.counter\";";
        let captures = bundle_identifier_regex().captures(pbxproj).unwrap();
        assert_eq!(&captures[1], "com.example.counter");
    }

    #[test]
    fn test_organization_from_identifier() {
        assert_eq!(
            organization_from_identifier("io.flutter.someProject").as_deref(),
            Some("io.flutter")
        );
        assert_eq!(
            organization_from_identifier("io.flutter").as_deref(),
            Some("io")
        );
        assert!(organization_from_identifier("nodesoup").is_none());
        assert!(organization_from_identifier(".hidden").is_none());
    }
}
