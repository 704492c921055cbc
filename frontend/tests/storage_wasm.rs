#![cfg(target_arch = "wasm32")]

use frontend::storage::{browser_store, LocalStorageBackend};
use gloo_storage::{LocalStorage, Storage};
use shared::{FilterSpec, Game, GameFilter, PreferenceBackend, SortBy, StorageKey};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    LocalStorage::delete(StorageKey::Filters.as_str());
    LocalStorage::delete(StorageKey::Theme.as_str());
}

#[wasm_bindgen_test]
fn local_storage_is_available_in_browser() {
    assert!(LocalStorageBackend::is_available());
}

#[wasm_bindgen_test]
fn filters_persist_across_store_instances() {
    clear();
    let spec = FilterSpec::default()
        .with_game(GameFilter::Only(Game::Overwatch2))
        .with_sort_by(SortBy::Wins);

    browser_store().save_filter_spec(&spec);
    assert_eq!(browser_store().get_filter_spec(), spec);
    clear();
}

#[wasm_bindgen_test]
fn theme_is_stored_as_plain_string() {
    clear();
    browser_store().save_theme_flag(true);
    assert_eq!(
        LocalStorageBackend.get_item(StorageKey::Theme.as_str()).ok().flatten().as_deref(),
        Some("dark")
    );
    assert!(browser_store().get_theme_flag(|| false));
    clear();
}

#[wasm_bindgen_test]
fn corrupt_filters_fall_back_to_defaults() {
    clear();
    LocalStorageBackend
        .set_item(StorageKey::Filters.as_str(), "{broken")
        .ok();
    assert_eq!(browser_store().get_filter_spec(), FilterSpec::default());
    clear();
}
