// crates/domain/src/version/substitutions.rs
//! Per-file-format rewriting of embedded version strings.
//!
//! Each supported extension has its own substitution set. Named capture
//! groups keep the replacements unambiguous: "$1" directly followed by
//! "1.0.0.0" would parse as "$11".

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::info::VersionInfo;

/// Rewrite the version strings `path`'s format carries, keyed by its
/// extension. Returns `None` when the extension has no substitution set.
pub fn update_for_path(
    path: &Path,
    contents: &str,
    version: &VersionInfo,
    project_name: &str,
) -> Option<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

    match ext.as_str() {
        "cs" => Some(update_cs(contents, version)),
        "rc" => Some(update_rc(contents, version)),
        "wxi" => Some(update_wxi(contents, version)),
        "wixproj" | "proj" => Some(update_proj(contents, version, project_name)),
        "vsixmanifest" => Some(update_vsix_manifest(contents, version)),
        "config" => Some(update_config(contents, version)),
        "svg" => Some(update_svg(contents, version)),
        "xml" if stem == "WMAppManifest" => Some(update_wm_app_manifest(contents, version)),
        _ => None,
    }
}

fn update_cs(contents: &str, version: &VersionInfo) -> String {
    static ASSEMBLY_VERSION: OnceLock<Regex> = OnceLock::new();
    static ASSEMBLY_FILE_VERSION: OnceLock<Regex> = OnceLock::new();

    let re = ASSEMBLY_VERSION.get_or_init(|| {
        Regex::new(r#"(?P<before>AssemblyVersion\(")[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after>"\))"#)
            .unwrap()
    });
    let contents = re.replace_all(
        contents,
        format!("${{before}}{}.0.0${{after}}", version.major_minor()),
    );

    let re = ASSEMBLY_FILE_VERSION.get_or_init(|| {
        Regex::new(
            r#"(?P<before>AssemblyFileVersion\(")[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after>"\))"#,
        )
        .unwrap()
    });
    re.replace_all(&contents, format!("${{before}}{}${{after}}", version.full()))
        .into_owned()
}

fn update_rc(contents: &str, version: &VersionInfo) -> String {
    static FILEVERSION: OnceLock<Regex> = OnceLock::new();
    static PRODUCTVERSION: OnceLock<Regex> = OnceLock::new();
    static FILE_VERSION_STR: OnceLock<Regex> = OnceLock::new();
    static PRODUCT_VERSION_STR: OnceLock<Regex> = OnceLock::new();

    let re = FILEVERSION.get_or_init(|| {
        Regex::new(r"(?P<before>FILEVERSION )[0-9]+,[0-9]+,[0-9]+,[0-9]+").unwrap()
    });
    let contents = re.replace_all(contents, format!("${{before}}{}", version.full_csv()));

    let re = PRODUCTVERSION.get_or_init(|| {
        Regex::new(r"(?P<before>PRODUCTVERSION )[0-9]+,[0-9]+,[0-9]+,[0-9]+").unwrap()
    });
    let contents = re.replace_all(&contents, format!("${{before}}{}", version.full_csv()));

    let re = FILE_VERSION_STR.get_or_init(|| {
        Regex::new(r#"(?P<before>"FileVersion",[ \t]*")[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after>")"#)
            .unwrap()
    });
    let contents = re.replace_all(&contents, format!("${{before}}{}${{after}}", version.full()));

    let re = PRODUCT_VERSION_STR.get_or_init(|| {
        Regex::new(
            r#"(?P<before>"ProductVersion",[ \t]*")[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after>")"#,
        )
        .unwrap()
    });
    re.replace_all(&contents, format!("${{before}}{}${{after}}", version.full()))
        .into_owned()
}

fn update_wxi(contents: &str, version: &VersionInfo) -> String {
    static PRODUCT_VERSION: OnceLock<Regex> = OnceLock::new();
    static PRODUCT_BUILD: OnceLock<Regex> = OnceLock::new();

    let re = PRODUCT_VERSION.get_or_init(|| {
        Regex::new(r#"(?P<before>ProductVersion = ")[0-9]+\.[0-9]+(?P<after>")"#).unwrap()
    });
    let contents = re.replace_all(
        contents,
        format!("${{before}}{}${{after}}", version.major_minor()),
    );

    let re = PRODUCT_BUILD.get_or_init(|| {
        Regex::new(r#"(?P<before>ProductBuild = ")[0-9]+\.[0-9]+(?P<after>")"#).unwrap()
    });
    re.replace_all(&contents, format!("${{before}}{}${{after}}", version.build_revision()))
        .into_owned()
}

fn update_proj(contents: &str, version: &VersionInfo, project_name: &str) -> String {
    // The project name is part of the pattern, so this one cannot be cached.
    let re = Regex::new(&format!(
        r"(?P<before><OutputName>{}_)[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after></OutputName>)",
        regex::escape(project_name)
    ))
    .unwrap();
    re.replace_all(contents, format!("${{before}}{}${{after}}", version.full()))
        .into_owned()
}

fn update_vsix_manifest(contents: &str, version: &VersionInfo) -> String {
    static VERSION_ELEMENT: OnceLock<Regex> = OnceLock::new();

    let re = VERSION_ELEMENT.get_or_init(|| {
        Regex::new(r"(?P<before><Version>)[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+(?P<after></Version>)")
            .unwrap()
    });
    re.replace_all(contents, format!("${{before}}{}${{after}}", version.full()))
        .into_owned()
}

fn update_config(contents: &str, version: &VersionInfo) -> String {
    // Targets the assembly reference of the section handler.
    static VERSION_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();

    let re = VERSION_ATTRIBUTE.get_or_init(|| {
        Regex::new(r"(?P<before>, +Version=)\d+\.\d+(?P<after>\.0\.0 *,)").unwrap()
    });
    re.replace_all(contents, format!("${{before}}{}${{after}}", version.major_minor()))
        .into_owned()
}

fn update_svg(contents: &str, version: &VersionInfo) -> String {
    static VERSION_TEXT: OnceLock<Regex> = OnceLock::new();

    let re = VERSION_TEXT
        .get_or_init(|| Regex::new(r"(?P<before>VERSION )[0-9]+\.[0-9]+\.[0-9]+").unwrap());
    re.replace_all(contents, format!("${{before}}{}", version.major_minor_build()))
        .into_owned()
}

fn update_wm_app_manifest(contents: &str, version: &VersionInfo) -> String {
    static VERSION_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();

    let re = VERSION_ATTRIBUTE.get_or_init(|| {
        Regex::new(r#"(?P<before>Version=")[0-9]+\.[0-9]+(?P<after>\.[0-9]+\.[0-9]+")"#).unwrap()
    });
    re.replace_all(contents, format!("${{before}}{}${{after}}", version.major_minor()))
        .into_owned()
}
