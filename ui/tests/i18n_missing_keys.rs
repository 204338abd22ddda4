use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

fn keys_in(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path:?}: {e}"));
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '#', '\t']) && !line.trim().is_empty())
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .collect()
}

fn collect_t_keys(dir: &Path, found: &mut HashSet<String>) {
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_t_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).unwrap();
        for (at, marker) in source.match_indices("t!(\"") {
            // skip format!(, assert!( and friends
            let preceded_by_ident = source[..at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_ident {
                continue;
            }
            let rest = &source[at + marker.len()..];
            if let Some(end) = rest.find('"') {
                found.insert(rest[..end].to_string());
            }
        }
    }
}

#[test]
fn locales_share_the_fallback_keys() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    let fallback: HashSet<String> = keys_in(&root.join("en-US/learnlens-ui.ftl"))
        .into_iter()
        .collect();

    let mut missing = HashMap::new();
    for locale in ["es-ES"] {
        let keys: HashSet<String> = keys_in(&root.join(locale).join("learnlens-ui.ftl"))
            .into_iter()
            .collect();
        let mut absent: Vec<_> = fallback.difference(&keys).cloned().collect();
        absent.sort();
        if !absent.is_empty() {
            missing.insert(locale, absent);
        }
    }
    assert!(missing.is_empty(), "missing translations: {missing:?}");
}

#[test]
fn no_duplicate_keys() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    for locale in ["en-US", "es-ES"] {
        let keys = keys_in(&root.join(locale).join("learnlens-ui.ftl"));
        let mut seen = HashSet::new();
        let dupes: Vec<_> = keys.iter().filter(|k| !seen.insert(*k)).collect();
        assert!(dupes.is_empty(), "{locale} duplicates: {dupes:?}");
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fallback: HashSet<String> = keys_in(&manifest.join("i18n/en-US/learnlens-ui.ftl"))
        .into_iter()
        .collect();

    let mut referenced = HashSet::new();
    collect_t_keys(&manifest.join("src"), &mut referenced);
    assert!(!referenced.is_empty());

    let mut unknown: Vec<_> = referenced.difference(&fallback).cloned().collect();
    unknown.sort();
    assert!(unknown.is_empty(), "keys without a translation: {unknown:?}");
}

#[test]
fn configured_domain_matches_ftl_file_names() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = fs::read_to_string(manifest.join("i18n.toml")).unwrap();
    let domain = config
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .expect("i18n.toml names the fluent domain");

    for locale in ["en-US", "es-ES"] {
        let file = manifest.join("i18n").join(locale).join(format!("{domain}.ftl"));
        assert!(file.is_file(), "{locale} has no {domain}.ftl");
    }
}
