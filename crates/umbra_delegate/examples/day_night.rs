//! Day/Night Delegate Example
//!
//! Walks one window through the full appearance flow (explicit modes,
//! automatic twilight resolution, action-session interception) against the
//! in-memory platform doubles from `umbra_test_suite`.
//!
//! Run with: cargo run -p umbra_delegate --example day_night

use std::sync::Arc;

use umbra_core::{ApiLevel, DisplayConfig, NightMode, UiModeType};
use umbra_delegate::{AppearanceDelegate, PlatformServices};
use umbra_platform::{
    CapabilityTable, DeclaredCapabilities, NightModeSetting, TwilightOracle, WindowHost,
    WindowIdentity, WindowKind,
};
use umbra_test_suite::{
    FakeTwilightOracle, FakeUiModeService, FakeWindowHost, RecordingCompatActionHost,
    RecordingNativeCallback, RecordingWindowCallback,
};

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let window = Arc::new(FakeWindowHost::new(
        WindowIdentity::new("demo/main"),
        WindowKind::TopLevel,
        DisplayConfig::default(),
    ));
    let twilight = Arc::new(FakeTwilightOracle::new(true));
    let action_host = Arc::new(RecordingCompatActionHost::new(true));

    let services = PlatformServices {
        ui_mode: Arc::new(FakeUiModeService::new(
            UiModeType::Normal,
            NightModeSetting::Off,
        )),
        capabilities: Arc::new(CapabilityTable::new().declare(
            WindowIdentity::new("demo/main"),
            DeclaredCapabilities {
                handles_appearance_change: true,
            },
        )),
        action_host: action_host.clone(),
        twilight: Some(twilight.clone() as Arc<dyn TwilightOracle>),
        api_level: ApiLevel::new(24),
    };
    let mut delegate = AppearanceDelegate::new(window.clone(), services);
    tracing::info!("resolved features: {:?}", delegate.features());

    // Night has fallen: automatic mode resolves through the twilight oracle.
    delegate.set_night_mode(NightMode::Auto);
    delegate.apply_day_night();
    tracing::info!("after auto apply: {:?}", window.configuration().appearance);

    // Morning: same request, new twilight answer.
    twilight.set_night(false);
    delegate.apply_day_night();
    tracing::info!("after sunrise: {:?}", window.configuration().appearance);

    // An explicit request wins over twilight.
    delegate.set_night_mode(NightMode::Blackout);
    delegate.apply_day_night();
    tracing::info!("after blackout: {:?}", window.configuration().appearance);

    // A host would persist this snapshot under the suggested key and restore
    // it into the delegate of the recreated window.
    delegate.set_local_night_mode(NightMode::Yes);
    tracing::info!(
        "snapshot for {:?}: {:?}",
        umbra_delegate::SAVED_STATE_KEY,
        delegate.save_state()
    );

    // Contextual action sessions are rerouted through the compatibility host.
    let mut callback = delegate.wrap_window_callback(Box::new(RecordingWindowCallback::new()));
    let session = callback.action_session_starting(Arc::new(RecordingNativeCallback::new()));
    tracing::info!(
        "intercepted session: {}, compat host started {} session(s)",
        session.is_some(),
        action_host.start_count()
    );
}
