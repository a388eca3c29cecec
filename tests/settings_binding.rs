use plugkit::settings::{use_setting, JsonSettingsStore, SettingsStore, UseSettingOptions};
use plugkit::{Config, Plugkit};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn json_store_binding_persists_nested_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    {
        let mut store = JsonSettingsStore::open(&path).unwrap();
        store
            .set("appearance", json!({ "colors": { "accent": "red" }, "compact": false }))
            .unwrap();

        let mut accent = use_setting(
            &mut store,
            "appearance.colors.accent",
            Some(json!("black")),
            UseSettingOptions { clearable: true },
        )
        .unwrap();
        assert_eq!(accent.value(), &json!("red"));

        accent
            .on_change(json!({ "label": "Teal", "value": "teal" }))
            .unwrap();
        assert_eq!(accent.value(), &json!("teal"));
    }

    let store = JsonSettingsStore::open(&path).unwrap();
    assert_eq!(
        store.get("appearance").unwrap(),
        Some(json!({ "colors": { "accent": "teal" }, "compact": false }))
    );
}

#[test]
fn clear_resets_to_empty_string_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    {
        let store = Rc::new(RefCell::new(JsonSettingsStore::open(&path).unwrap()));
        let mut token = use_setting(
            Rc::clone(&store),
            "account.token",
            None,
            UseSettingOptions { clearable: true },
        )
        .unwrap();
        token.on_change("secret").unwrap();
        token.on_clear().unwrap();
    }

    let store = JsonSettingsStore::open(&path).unwrap();
    assert_eq!(store.get("account").unwrap(), Some(json!({ "token": "" })));
}

#[test]
fn context_bindings_see_each_others_writes() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::open(dir.path().join("settings.json")).unwrap();
    let kit = Plugkit::new(Config::default(), store);

    let mut first = kit
        .use_setting("general.prefix", None, UseSettingOptions::default())
        .unwrap();
    first.on_change("$").unwrap();

    let second = kit
        .use_setting("general.prefix", Some(json!("!")), UseSettingOptions::default())
        .unwrap();
    assert_eq!(second.value(), &json!("$"));
}
