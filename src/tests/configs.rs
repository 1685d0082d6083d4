use crate::configs::env_validate::resolve_storage_key;
use crate::configs::DEFAULT_THEME_STORAGE_KEY;

#[test]
fn test_storage_key_defaults() {
    assert_eq!(resolve_storage_key(None, None), DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn test_storage_key_runtime_beats_build_time() {
    assert_eq!(resolve_storage_key(Some("runtime"), Some("build")), "runtime");
    assert_eq!(resolve_storage_key(None, Some("build")), "build");
}

#[test]
fn test_blank_storage_key_is_ignored() {
    assert_eq!(resolve_storage_key(Some("   "), None), DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(resolve_storage_key(Some(""), Some(" build ")), "build");
}
