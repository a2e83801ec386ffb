//! Day/night apply flow against the in-memory platform doubles.

use std::sync::Arc;

use umbra_core::{ApiLevel, Appearance, DisplayConfig, NightMode, UiModeType};
use umbra_delegate::{AppearanceDelegate, PlatformServices, SavedAppearanceState};
use umbra_platform::{
    CapabilityTable, DeclaredCapabilities, NightModeSetting, TwilightOracle, WindowHost,
    WindowIdentity, WindowKind,
};
use umbra_test_suite::{
    FakeTwilightOracle, FakeUiModeService, FakeWindowHost, RecordingCompatActionHost,
};

const MANUAL_API_LEVEL: ApiLevel = ApiLevel::new(24);

fn top_level_window(config: DisplayConfig) -> Arc<FakeWindowHost> {
    Arc::new(FakeWindowHost::new(
        WindowIdentity::new("app/main"),
        WindowKind::TopLevel,
        config,
    ))
}

fn handles_changes_table() -> CapabilityTable {
    CapabilityTable::new().declare(
        WindowIdentity::new("app/main"),
        DeclaredCapabilities {
            handles_appearance_change: true,
        },
    )
}

fn services(
    capabilities: CapabilityTable,
    twilight: Option<Arc<FakeTwilightOracle>>,
    api_level: ApiLevel,
) -> PlatformServices {
    services_with_ui_mode(
        capabilities,
        twilight,
        api_level,
        Arc::new(FakeUiModeService::new(
            UiModeType::Normal,
            NightModeSetting::Off,
        )),
    )
}

fn services_with_ui_mode(
    capabilities: CapabilityTable,
    twilight: Option<Arc<FakeTwilightOracle>>,
    api_level: ApiLevel,
    ui_mode: Arc<FakeUiModeService>,
) -> PlatformServices {
    PlatformServices {
        ui_mode,
        capabilities: Arc::new(capabilities),
        action_host: Arc::new(RecordingCompatActionHost::new(true)),
        twilight: twilight.map(|oracle| oracle as Arc<dyn TwilightOracle>),
        api_level,
    }
}

#[test]
fn explicit_mode_applies_in_place_on_first_apply() {
    let window = top_level_window(DisplayConfig::default());
    // No declaration registered: before the first apply that must not matter.
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(CapabilityTable::new(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);
    assert_eq!(delegate.night_mode(), NightMode::Yes);

    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Night);
    assert_eq!(window.update_count(), 2);
    assert_eq!(window.recreation_count(), 0);
}

#[test]
fn apply_is_idempotent_in_the_appearance_bit() {
    let window = top_level_window(DisplayConfig::default());
    // Empty capability table: if the second apply consulted the recreation
    // policy it would recreate, so a zero count also proves the policy is
    // only consulted when a change is needed.
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(CapabilityTable::new(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);

    assert!(delegate.apply_day_night());
    assert_eq!(window.update_count(), 2);

    assert!(!delegate.apply_day_night());
    assert_eq!(window.update_count(), 2);
    assert_eq!(window.recreation_count(), 0);
}

#[test]
fn font_scale_perturbation_is_not_externally_observable() {
    let window = top_level_window(DisplayConfig {
        font_scale: 1.25,
        ..DisplayConfig::default()
    });
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);

    assert!(delegate.apply_day_night());

    let updates = window.updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].appearance, Appearance::Night);
    assert_eq!(updates[0].font_scale, 2.5);
    assert_eq!(updates[1].appearance, Appearance::Night);
    assert_eq!(updates[1].font_scale, 1.25);

    assert_eq!(window.configuration().font_scale, 1.25);
    assert_eq!(window.configuration().mode_type, UiModeType::Normal);
}

#[test]
fn system_authority_blocks_manual_apply() {
    let window = top_level_window(DisplayConfig::default());
    let ui_mode = Arc::new(FakeUiModeService::new(
        UiModeType::Normal,
        NightModeSetting::Automatic,
    ));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services_with_ui_mode(handles_changes_table(), None, MANUAL_API_LEVEL, ui_mode),
    );
    delegate.set_night_mode(NightMode::Yes);

    assert!(!delegate.apply_day_night());
    assert_eq!(window.update_count(), 0);
    assert_eq!(window.recreation_count(), 0);
}

#[test]
fn night_setting_below_threshold_only_counts_in_car_mode() {
    // Outside car mode the delegate drives night mode despite the setting.
    let window = top_level_window(DisplayConfig::default());
    let ui_mode = Arc::new(FakeUiModeService::new(
        UiModeType::Normal,
        NightModeSetting::On,
    ));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services_with_ui_mode(handles_changes_table(), None, ApiLevel::new(21), ui_mode),
    );
    delegate.set_night_mode(NightMode::Yes);
    assert!(delegate.apply_day_night());
    assert_eq!(window.update_count(), 2);

    // In car mode the same setting is system authority.
    let window = top_level_window(DisplayConfig::default());
    let ui_mode = Arc::new(FakeUiModeService::new(
        UiModeType::Car,
        NightModeSetting::On,
    ));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services_with_ui_mode(handles_changes_table(), None, ApiLevel::new(21), ui_mode),
    );
    delegate.set_night_mode(NightMode::Yes);
    assert!(!delegate.apply_day_night());
    assert_eq!(window.update_count(), 0);
}

#[test]
fn auto_mode_follows_the_twilight_oracle() {
    let window = top_level_window(DisplayConfig::default());
    let twilight = Arc::new(FakeTwilightOracle::new(true));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(
            handles_changes_table(),
            Some(twilight.clone()),
            MANUAL_API_LEVEL,
        ),
    );

    // The requested mode defaults to Auto.
    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Night);

    twilight.set_night(false);
    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Day);
}

#[test]
fn auto_mode_without_oracle_falls_back_to_day() {
    let window = top_level_window(DisplayConfig::default());
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), None, MANUAL_API_LEVEL),
    );

    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Day);
}

#[test]
fn missing_capability_declaration_recreates_after_first_apply() {
    let window = top_level_window(DisplayConfig::default());
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(CapabilityTable::new(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);
    assert!(delegate.apply_day_night());
    assert_eq!(window.recreation_count(), 0);

    delegate.set_night_mode(NightMode::No);
    assert!(delegate.apply_day_night());
    assert_eq!(window.recreation_count(), 1);
    // The in-place update path was discarded for the recreating call.
    assert_eq!(window.update_count(), 2);
}

#[test]
fn declared_handler_keeps_updating_in_place() {
    let window = top_level_window(DisplayConfig::default());
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);
    assert!(delegate.apply_day_night());
    delegate.set_night_mode(NightMode::No);
    assert!(delegate.apply_day_night());

    assert_eq!(window.configuration().appearance, Appearance::Day);
    assert_eq!(window.update_count(), 4);
    assert_eq!(window.recreation_count(), 0);
}

#[test]
fn embedded_windows_are_never_recreated() {
    let window = Arc::new(FakeWindowHost::new(
        WindowIdentity::new("app/embedded"),
        WindowKind::Embedded,
        DisplayConfig::default(),
    ));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(CapabilityTable::new(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Yes);
    delegate.apply_day_night();
    delegate.set_night_mode(NightMode::No);
    delegate.apply_day_night();

    assert_eq!(window.recreation_count(), 0);
    assert_eq!(window.update_count(), 4);
}

#[test]
fn blackout_is_applied_verbatim() {
    let window = top_level_window(DisplayConfig::default());
    // A twilight oracle reporting night must not matter for a manual value.
    let twilight = Arc::new(FakeTwilightOracle::new(true));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), Some(twilight), MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Blackout);

    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Blackout);
}

#[test]
fn unspecified_request_against_an_undefined_configuration_is_a_no_op() {
    let window = top_level_window(DisplayConfig::default());
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), None, MANUAL_API_LEVEL),
    );
    delegate.set_night_mode(NightMode::Unspecified);

    assert!(!delegate.apply_day_night());
    assert_eq!(window.update_count(), 0);
}

#[test]
fn restored_local_night_mode_overrides_the_requested_mode() {
    let saved = {
        let window = top_level_window(DisplayConfig::default());
        let mut original = AppearanceDelegate::new(
            window,
            services(handles_changes_table(), None, MANUAL_API_LEVEL),
        );
        original.set_local_night_mode(NightMode::Yes);
        original.save_state()
    };

    // The snapshot survives whatever persistence the caller uses.
    let json = serde_json::to_string(&saved).unwrap();
    let restored: SavedAppearanceState = serde_json::from_str(&json).unwrap();

    let window = top_level_window(DisplayConfig::default());
    let twilight = Arc::new(FakeTwilightOracle::new(false));
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), Some(twilight), MANUAL_API_LEVEL),
    );
    delegate.restore_state(restored);
    assert_eq!(delegate.local_night_mode(), NightMode::Yes);

    // Auto would resolve to day; the restored local override wins.
    assert!(delegate.apply_day_night());
    assert_eq!(window.configuration().appearance, Appearance::Night);
    assert_eq!(window.recreation_count(), 0);
}

#[test]
fn legacy_generation_skips_manual_night_mode() {
    let window = top_level_window(DisplayConfig::default());
    let mut delegate = AppearanceDelegate::new(
        window.clone(),
        services(handles_changes_table(), None, ApiLevel::new(13)),
    );
    delegate.set_night_mode(NightMode::Yes);

    assert!(!delegate.apply_day_night());
    assert_eq!(window.update_count(), 0);
}
