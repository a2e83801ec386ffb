//! Umbra Appearance Delegate
//!
//! Day/night theming for application windows on platforms that may or may not
//! manage the distinction natively.
//!
//! The delegate answers two questions per window:
//!
//! - **Who drives night mode?** If the system owns the switch, the delegate
//!   stays out of the way. Otherwise it resolves the requested mode,
//!   automatically through a twilight oracle when asked, and applies it to
//!   the window's live display configuration, recreating the window only when
//!   the hosting application did not declare that it handles the change
//!   itself.
//! - **Who presents contextual action sessions?** Native session starts are
//!   intercepted and rerouted through the compatibility implementation so the
//!   session UI matches the rest of the theme, falling back to the native
//!   path when the compatibility host declines.
//!
//! Both capabilities are resolved once at construction from platform version
//! facts; on generations that predate them the delegate degrades to a
//! pass-through.
//!
//! # Example
//!
//! ```rust,ignore
//! use umbra_core::NightMode;
//! use umbra_delegate::{AppearanceDelegate, PlatformServices};
//!
//! let mut delegate = AppearanceDelegate::new(window, services);
//! delegate.set_night_mode(NightMode::Auto);
//! delegate.apply_day_night();
//! ```

pub mod apply;
pub mod authority;
pub mod delegate;
pub mod features;
pub mod intercept;
pub mod recreate;
pub mod state;

pub use apply::{appearance_for_mode, ApplyOutcome, ConfigurationApplier};
pub use authority::SystemAuthority;
pub use delegate::{AppearanceDelegate, PlatformServices};
pub use features::DelegateFeatures;
pub use intercept::{CompatSessionBridge, InterceptingWindowCallback, NativeCallbackAdapter};
pub use recreate::RecreationPolicy;
pub use state::{AppearanceState, SavedAppearanceState, SAVED_STATE_KEY};
