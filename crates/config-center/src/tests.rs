use std::env;
use std::sync::{Mutex, OnceLock};

use crate::api::{ConfigStore, InMemoryConfigStore};
use crate::defaults::default_config;
use crate::loader::load_config;
use crate::model::{RedirectConfig, ServiceRule};

#[test]
fn default_config_seeds_every_builtin_service() {
    let config = default_config();
    assert!(!config.onboarding_complete);
    for key in ["youtube", "twitter", "reddit", "instagram", "medium", "imgur"] {
        let rule = config.rule(key).expect(key);
        assert!(rule.enabled);
        assert!(!rule.instance.is_empty(), "{key} has no suggested instance");
    }
}

#[test]
fn load_config_applies_file_overlay_per_field() {
    let _guard = env_guard().lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reroute.yaml");
    std::fs::write(
        &path,
        r#"onboarding_complete: true
rules:
  YouTube:
    instance: "https://invidious.example"
  reddit:
    enabled: false
"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert!(config.onboarding_complete);
    // File keys are lower-cased onto the seeded rule; untouched fields survive.
    let youtube = config.rule("youtube").unwrap();
    assert!(youtube.enabled);
    assert_eq!(youtube.instance, "https://invidious.example");
    assert!(!config.rule("reddit").unwrap().enabled);
    assert!(!config.rule("reddit").unwrap().instance.is_empty());
}

#[test]
fn load_config_env_overrides_win() {
    let _guard = env_guard().lock().unwrap();
    env::set_var("REROUTE_ONBOARDING_COMPLETE", "true");
    env::set_var("REROUTE_RULE__TWITTER__INSTANCE", "https://nitter.example");
    env::set_var("REROUTE_RULE__TWITTER__ENABLED", "false");
    let config = load_config(None).unwrap();
    env::remove_var("REROUTE_ONBOARDING_COMPLETE");
    env::remove_var("REROUTE_RULE__TWITTER__INSTANCE");
    env::remove_var("REROUTE_RULE__TWITTER__ENABLED");

    assert!(config.onboarding_complete);
    let twitter = config.rule("twitter").unwrap();
    assert!(!twitter.enabled);
    assert_eq!(twitter.instance, "https://nitter.example");
}

#[test]
fn load_config_ignores_bad_boolean_env() {
    let _guard = env_guard().lock().unwrap();
    env::set_var("REROUTE_ONBOARDING_COMPLETE", "maybe");
    let config = load_config(None).unwrap();
    env::remove_var("REROUTE_ONBOARDING_COMPLETE");
    assert!(!config.onboarding_complete);
}

#[tokio::test]
async fn empty_store_has_no_snapshot() {
    let store = InMemoryConfigStore::empty();
    assert!(store.snapshot().await.is_none());
}

#[tokio::test]
async fn set_replaces_snapshot_whole() {
    let store = InMemoryConfigStore::new(RedirectConfig::default());
    let mut next = RedirectConfig::default();
    next.onboarding_complete = true;
    next.rules
        .insert("youtube".into(), ServiceRule::enabled("https://yewtu.be"));
    store.set(next);

    let snapshot = store.snapshot().await.unwrap();
    assert!(snapshot.onboarding_complete);
    assert!(snapshot.rule("youtube").is_some());

    store.clear();
    assert!(store.snapshot().await.is_none());
}

#[tokio::test]
async fn subscribe_observes_replacements() {
    let store = InMemoryConfigStore::new(RedirectConfig::default());
    let mut rx = store.subscribe();
    let mut next = RedirectConfig::default();
    next.onboarding_complete = true;
    store.set(next);
    rx.changed().await.unwrap();
    let seen = rx.borrow().clone().unwrap();
    assert!(seen.onboarding_complete);
}

fn env_guard() -> &'static Mutex<()> {
    static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_GUARD.get_or_init(|| Mutex::new(()))
}
