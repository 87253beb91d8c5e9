// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `android`, `ios` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// This attribute represents the state of the application.
///
/// Type: `string`. Examples: `"created"`.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_APP_STATE: &str = "android.app.state";

/// Any time before Activity.onResume() or, if the app has no Activity, Context.startService() has been called in the app for the first time.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_APP_STATE_VALUE_CREATED: &str = "created";

/// Any time after Activity.onPause() or, if the app has no Activity, Context.stopService() has been called when the app was in the foreground state.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_APP_STATE_VALUE_BACKGROUND: &str = "background";

/// Any time after Activity.onResume() or, if the app has no Activity, Context.startService() has been called when the app was in either the created or background states.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_APP_STATE_VALUE_FOREGROUND: &str = "foreground";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`ANDROID_APP_STATE`].
    AndroidAppState for ANDROID_APP_STATE {
        /// Any time before Activity.onResume() or, if the app has no Activity, Context.startService() has been called in the app for the first time.
        Created = "created",
        /// Any time after Activity.onPause() or, if the app has no Activity, Context.stopService() has been called when the app was in the foreground state.
        Background = "background",
        /// Any time after Activity.onResume() or, if the app has no Activity, Context.startService() has been called when the app was in either the created or background states.
        Foreground = "foreground",
    }
}

/// Uniquely identifies the framework API revision offered by a version (`os.version`) of the android operating system.
///
/// Type: `string`. Examples: `"33"`, `"32"`.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_OS_API_LEVEL: &str = "android.os.api_level";

/// Deprecated. Use `android.app.state` attribute instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `android.app.state`.")]
pub const ANDROID_STATE: &str = "android.state";

/// Any time before Activity.onResume() or, if the app has no Activity, Context.startService() has been called in the app for the first time.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_STATE_VALUE_CREATED: &str = "created";

/// Any time after Activity.onPause() or, if the app has no Activity, Context.stopService() has been called when the app was in the foreground state.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_STATE_VALUE_BACKGROUND: &str = "background";

/// Any time after Activity.onResume() or, if the app has no Activity, Context.startService() has been called when the app was in either the created or background states.
#[cfg(feature = "semconv_experimental")]
pub const ANDROID_STATE_VALUE_FOREGROUND: &str = "foreground";

/// This attribute represents the state of the application.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE: &str = "ios.app.state";

/// The app has become `active`. Associated with UIKit notification `applicationDidBecomeActive`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE_VALUE_ACTIVE: &str = "active";

/// The app is now `inactive`. Associated with UIKit notification `applicationWillResignActive`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE_VALUE_INACTIVE: &str = "inactive";

/// The app is now in the background. This value is associated with UIKit notification `applicationDidEnterBackground`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE_VALUE_BACKGROUND: &str = "background";

/// The app is now in the foreground. This value is associated with UIKit notification `applicationWillEnterForeground`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE_VALUE_FOREGROUND: &str = "foreground";

/// The app is about to terminate. Associated with UIKit notification `applicationWillTerminate`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_APP_STATE_VALUE_TERMINATE: &str = "terminate";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`IOS_APP_STATE`].
    IosAppState for IOS_APP_STATE {
        /// The app has become `active`. Associated with UIKit notification `applicationDidBecomeActive`.
        Active = "active",
        /// The app is now `inactive`. Associated with UIKit notification `applicationWillResignActive`.
        Inactive = "inactive",
        /// The app is now in the background. This value is associated with UIKit notification `applicationDidEnterBackground`.
        Background = "background",
        /// The app is now in the foreground. This value is associated with UIKit notification `applicationWillEnterForeground`.
        Foreground = "foreground",
        /// The app is about to terminate. Associated with UIKit notification `applicationWillTerminate`.
        Terminate = "terminate",
    }
}

/// Deprecated. Use `ios.app.state` instead.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `ios.app.state`.")]
pub const IOS_STATE: &str = "ios.state";

/// The app has become `active`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_STATE_VALUE_ACTIVE: &str = "active";

/// The app is now `inactive`.
#[cfg(feature = "semconv_experimental")]
pub const IOS_STATE_VALUE_INACTIVE: &str = "inactive";

/// The app is now in the background.
#[cfg(feature = "semconv_experimental")]
pub const IOS_STATE_VALUE_BACKGROUND: &str = "background";

/// The app is now in the foreground.
#[cfg(feature = "semconv_experimental")]
pub const IOS_STATE_VALUE_FOREGROUND: &str = "foreground";

/// The app is about to terminate.
#[cfg(feature = "semconv_experimental")]
pub const IOS_STATE_VALUE_TERMINATE: &str = "terminate";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("ANDROID_APP_STATE", "android.app.state", Experimental),
    Entry::value("ANDROID_APP_STATE_VALUE_CREATED", "android.app.state", "created", Experimental),
    Entry::value(
        "ANDROID_APP_STATE_VALUE_BACKGROUND",
        "android.app.state",
        "background",
        Experimental,
    ),
    Entry::value(
        "ANDROID_APP_STATE_VALUE_FOREGROUND",
        "android.app.state",
        "foreground",
        Experimental,
    ),
    Entry::attribute("ANDROID_OS_API_LEVEL", "android.os.api_level", Experimental),
    Entry::attribute("ANDROID_STATE", "android.state", Experimental)
        .deprecated(Renamed("android.app.state")),
    Entry::value("ANDROID_STATE_VALUE_CREATED", "android.state", "created", Experimental),
    Entry::value("ANDROID_STATE_VALUE_BACKGROUND", "android.state", "background", Experimental),
    Entry::value("ANDROID_STATE_VALUE_FOREGROUND", "android.state", "foreground", Experimental),
    Entry::attribute("IOS_APP_STATE", "ios.app.state", Experimental),
    Entry::value("IOS_APP_STATE_VALUE_ACTIVE", "ios.app.state", "active", Experimental),
    Entry::value("IOS_APP_STATE_VALUE_INACTIVE", "ios.app.state", "inactive", Experimental),
    Entry::value("IOS_APP_STATE_VALUE_BACKGROUND", "ios.app.state", "background", Experimental),
    Entry::value("IOS_APP_STATE_VALUE_FOREGROUND", "ios.app.state", "foreground", Experimental),
    Entry::value("IOS_APP_STATE_VALUE_TERMINATE", "ios.app.state", "terminate", Experimental),
    Entry::attribute("IOS_STATE", "ios.state", Experimental).deprecated(Renamed("ios.app.state")),
    Entry::value("IOS_STATE_VALUE_ACTIVE", "ios.state", "active", Experimental),
    Entry::value("IOS_STATE_VALUE_INACTIVE", "ios.state", "inactive", Experimental),
    Entry::value("IOS_STATE_VALUE_BACKGROUND", "ios.state", "background", Experimental),
    Entry::value("IOS_STATE_VALUE_FOREGROUND", "ios.state", "foreground", Experimental),
    Entry::value("IOS_STATE_VALUE_TERMINATE", "ios.state", "terminate", Experimental),
];
