// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `app`, `browser`, `device`, `session`, `user`, `enduser`, `webengine` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// A unique identifier representing the installation of an application on a specific device
///
/// Type: `string`. Examples: `"2ab2916d-a51f-4ac8-80ee-45ac31a28092"`.
#[cfg(feature = "semconv_experimental")]
pub const APP_INSTALLATION_ID: &str = "app.installation.id";

/// The x (horizontal) coordinate of a screen coordinate, in screen pixels.
///
/// Type: `int`. Examples: `0`, `131`.
#[cfg(feature = "semconv_experimental")]
pub const APP_SCREEN_COORDINATE_X: &str = "app.screen.coordinate.x";

/// The y (vertical) component of a screen coordinate, in screen pixels.
///
/// Type: `int`. Examples: `12`, `99`.
#[cfg(feature = "semconv_experimental")]
pub const APP_SCREEN_COORDINATE_Y: &str = "app.screen.coordinate.y";

/// An identifier that uniquely differentiates this widget from other widgets in the same application.
///
/// Type: `string`. Examples: `"f9bc787d-ff05-48ad-90e1-fca1d46130b3"`, `"submit_order_1829"`.
#[cfg(feature = "semconv_experimental")]
pub const APP_WIDGET_ID: &str = "app.widget.id";

/// The name of an application widget.
///
/// Type: `string`. Examples: `"submit"`, `"attack"`, `"Clear Cart"`.
#[cfg(feature = "semconv_experimental")]
pub const APP_WIDGET_NAME: &str = "app.widget.name";

/// Array of brand name and version separated by a space
///
/// Type: `string[]`. Examples: `[" Not A;Brand 99", "Chromium 99", "Chrome 99"]`.
#[cfg(feature = "semconv_experimental")]
pub const BROWSER_BRANDS: &str = "browser.brands";

/// Preferred language of the user using the browser
///
/// Type: `string`. Examples: `"en"`, `"en-US"`, `"fr"`, `"fr-FR"`.
#[cfg(feature = "semconv_experimental")]
pub const BROWSER_LANGUAGE: &str = "browser.language";

/// A boolean that is true if the browser is running on a mobile device
///
/// Type: `boolean`.
#[cfg(feature = "semconv_experimental")]
pub const BROWSER_MOBILE: &str = "browser.mobile";

/// The platform on which the browser is running
///
/// Type: `string`. Examples: `"Windows"`, `"macOS"`, `"Android"`.
#[cfg(feature = "semconv_experimental")]
pub const BROWSER_PLATFORM: &str = "browser.platform";

/// A unique identifier representing the device
///
/// Type: `string`. Examples: `"123456789012345"`, `"01:23:45:67:89:AB"`.
#[cfg(feature = "semconv_experimental")]
pub const DEVICE_ID: &str = "device.id";

/// The name of the device manufacturer
///
/// Type: `string`. Examples: `"Apple"`, `"Samsung"`.
#[cfg(feature = "semconv_experimental")]
pub const DEVICE_MANUFACTURER: &str = "device.manufacturer";

/// The model identifier for the device
///
/// Type: `string`. Examples: `"iPhone3,4"`, `"SM-G920F"`.
#[cfg(feature = "semconv_experimental")]
pub const DEVICE_MODEL_IDENTIFIER: &str = "device.model.identifier";

/// The marketing name for the device model
///
/// Type: `string`. Examples: `"iPhone 6s Plus"`, `"Samsung Galaxy S6"`.
#[cfg(feature = "semconv_experimental")]
pub const DEVICE_MODEL_NAME: &str = "device.model.name";

/// Unique identifier of an end user in the system. It maybe a username, email address, or other identifier.
///
/// Type: `string`. Examples: `"username"`, `"client_id"`, `"0x12a4f"`, `"email@example.com"`.
#[cfg(feature = "semconv_experimental")]
pub const ENDUSER_ID: &str = "enduser.id";

/// Pseudonymous identifier of an end user. This identifier should be a random value that is not directly linked or associated with the end user's actual identity.
///
/// Type: `string`. Examples: `"QdH5CAWJgqVT4rOr0qtumf"`.
#[cfg(feature = "semconv_experimental")]
pub const ENDUSER_PSEUDO_ID: &str = "enduser.pseudo.id";

/// Deprecated, use `user.roles` instead.
///
/// Type: `string`. Examples: `"admin"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Use `user.roles` instead.")]
pub const ENDUSER_ROLE: &str = "enduser.role";

/// Deprecated, no replacement at this time.
///
/// Type: `string`. Examples: `"read:message, write:files"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const ENDUSER_SCOPE: &str = "enduser.scope";

/// A unique id to identify a session.
///
/// Type: `string`. Examples: `"00112233-4455-6677-8899-aabbccddeeff"`.
#[cfg(feature = "semconv_experimental")]
pub const SESSION_ID: &str = "session.id";

/// The previous `session.id` for this user, when known.
///
/// Type: `string`. Examples: `"00112233-4455-6677-8899-aabbccddeeff"`.
#[cfg(feature = "semconv_experimental")]
pub const SESSION_PREVIOUS_ID: &str = "session.previous_id";

/// User email address.
///
/// Type: `string`. Examples: `"a.einstein@example.com"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_EMAIL: &str = "user.email";

/// User's full name
///
/// Type: `string`. Examples: `"Albert Einstein"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_FULL_NAME: &str = "user.full_name";

/// Unique user hash to correlate information for a user in anonymized form.
///
/// Type: `string`. Examples: `"364fc68eaf4c8acec74a4e52d7d1feaa"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_HASH: &str = "user.hash";

/// Unique identifier of the user.
///
/// Type: `string`. Examples: `"S-1-5-21-202424912787-2692429404-2351956786-1000"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_ID: &str = "user.id";

/// Short name or login/username of the user.
///
/// Type: `string`. Examples: `"a.einstein"`.
#[cfg(feature = "semconv_experimental")]
pub const USER_NAME: &str = "user.name";

/// Array of user roles at the time of the event.
///
/// Type: `string[]`. Examples: `["admin", "reporting_user"]`.
#[cfg(feature = "semconv_experimental")]
pub const USER_ROLES: &str = "user.roles";

/// Additional description of the web engine (e.g. detailed version and edition information).
///
/// Type: `string`. Examples: `"WildFly Full 21.0.0.Final (WildFly Core 13.0.1.Final) - 2.2.2.Final"`.
#[cfg(feature = "semconv_experimental")]
pub const WEBENGINE_DESCRIPTION: &str = "webengine.description";

/// The name of the web engine.
///
/// Type: `string`. Examples: `"WildFly"`.
#[cfg(feature = "semconv_experimental")]
pub const WEBENGINE_NAME: &str = "webengine.name";

/// The version of the web engine.
///
/// Type: `string`. Examples: `"21.0.0"`.
#[cfg(feature = "semconv_experimental")]
pub const WEBENGINE_VERSION: &str = "webengine.version";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("APP_INSTALLATION_ID", "app.installation.id", Experimental),
    Entry::attribute("APP_SCREEN_COORDINATE_X", "app.screen.coordinate.x", Experimental),
    Entry::attribute("APP_SCREEN_COORDINATE_Y", "app.screen.coordinate.y", Experimental),
    Entry::attribute("APP_WIDGET_ID", "app.widget.id", Experimental),
    Entry::attribute("APP_WIDGET_NAME", "app.widget.name", Experimental),
    Entry::attribute("BROWSER_BRANDS", "browser.brands", Experimental),
    Entry::attribute("BROWSER_LANGUAGE", "browser.language", Experimental),
    Entry::attribute("BROWSER_MOBILE", "browser.mobile", Experimental),
    Entry::attribute("BROWSER_PLATFORM", "browser.platform", Experimental),
    Entry::attribute("DEVICE_ID", "device.id", Experimental),
    Entry::attribute("DEVICE_MANUFACTURER", "device.manufacturer", Experimental),
    Entry::attribute("DEVICE_MODEL_IDENTIFIER", "device.model.identifier", Experimental),
    Entry::attribute("DEVICE_MODEL_NAME", "device.model.name", Experimental),
    Entry::attribute("ENDUSER_ID", "enduser.id", Experimental),
    Entry::attribute("ENDUSER_PSEUDO_ID", "enduser.pseudo.id", Experimental),
    Entry::attribute("ENDUSER_ROLE", "enduser.role", Experimental).deprecated(Uncategorized),
    Entry::attribute("ENDUSER_SCOPE", "enduser.scope", Experimental).deprecated(Obsoleted),
    Entry::attribute("SESSION_ID", "session.id", Experimental),
    Entry::attribute("SESSION_PREVIOUS_ID", "session.previous_id", Experimental),
    Entry::attribute("USER_EMAIL", "user.email", Experimental),
    Entry::attribute("USER_FULL_NAME", "user.full_name", Experimental),
    Entry::attribute("USER_HASH", "user.hash", Experimental),
    Entry::attribute("USER_ID", "user.id", Experimental),
    Entry::attribute("USER_NAME", "user.name", Experimental),
    Entry::attribute("USER_ROLES", "user.roles", Experimental),
    Entry::attribute("WEBENGINE_DESCRIPTION", "webengine.description", Experimental),
    Entry::attribute("WEBENGINE_NAME", "webengine.name", Experimental),
    Entry::attribute("WEBENGINE_VERSION", "webengine.version", Experimental),
];
