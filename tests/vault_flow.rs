//! End-to-end flow: register a user, stock a vault, report on it.

use secrecy::SecretString;
use tempfile::tempdir;
use vault_score::{
    Category, CredentialStore, Dashboard, JsonStore, Recommendation, SecurityBand, Theme,
    UserDirectory, generate_default_secret, is_acceptable_for_registration, security_score,
};

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

#[test]
fn register_store_report_flow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vault.json");

    // Registration: the gate runs before the directory is touched
    let master = secret("Correct!Horse9Battery");
    assert!(is_acceptable_for_registration(&master));

    let mut directory = UserDirectory::new();
    let user = directory.register("alice", &master, Some("xkcd")).unwrap();
    assert_eq!(directory.authenticate("alice", &master).unwrap(), user);

    // Stock the vault, one generated entry included
    let mut store = JsonStore::open(&path).unwrap();
    store
        .create(user, "mail.example", "alice", secret("Aa1!aaaaaaaaaaaa"), Category::Trabajo)
        .unwrap();
    store
        .create(user, "bank.example", "alice", secret("Bb2@bbbbbbbbbbbb"), Category::Bancario)
        .unwrap();
    store
        .create(user, "forum.example", "alice", secret("weakpass"), Category::Social)
        .unwrap();
    let generated = generate_default_secret();
    store
        .create(user, "spare.example", "alice", secret(&generated), Category::Otros)
        .unwrap();

    // Report over a fresh load, as the application would after a restart
    let store = JsonStore::open(&path).unwrap();
    let vault = store.list(user).unwrap();
    assert_eq!(vault.len(), 4);

    let score = security_score(&vault);
    assert!((1..=10).contains(&score));

    let dashboard = Dashboard::new(Theme::Light, "alice");
    let overview = dashboard.overview(&vault);
    assert_eq!(overview.security_score, score);
    assert_eq!(overview.band, SecurityBand::from_score(score));

    // "weakpass" scores 3, so the weak-entry advisory leads, and a
    // four-entry vault always gets the add-more advisory
    assert_eq!(
        overview.recommendations.first(),
        Some(&Recommendation::ChangeWeakSecrets { count: 1 })
    );
    assert!(overview
        .recommendations
        .contains(&Recommendation::AddMoreCredentials));
    assert!(!overview.recommendations.contains(&Recommendation::WellManaged));
}

#[test]
fn delete_updates_the_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vault.json");

    let mut store = JsonStore::open(&path).unwrap();
    let keep = store
        .create(1, "a.example", "alice", secret("Aa1!aaaaaaaaaaaa"), Category::Social)
        .unwrap();
    let reused = store
        .create(1, "b.example", "alice", secret("Aa1!aaaaaaaaaaaa"), Category::Social)
        .unwrap();

    // Two identical secrets: the duplicate penalty applies
    let vault = store.list(1).unwrap();
    assert_eq!(security_score(&vault), 7);

    store.delete(reused.id).unwrap();
    let vault = store.list(1).unwrap();
    assert_eq!(vault.len(), 1);
    assert_eq!(vault[0].id, keep.id);
    assert_eq!(security_score(&vault), 9);
}
