// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! # Event Semantic Conventions
//!
//! Names of the events defined by the semantic conventions.

use crate::registry::{Entry, Stability::*};

/// This event represents an instantaneous click on the screen of an application.
#[cfg(feature = "semconv_experimental")]
pub const APP_SCREEN_CLICK: &str = "app.screen.click";

/// This event indicates that an application widget has been clicked.
#[cfg(feature = "semconv_experimental")]
pub const APP_WIDGET_CLICK: &str = "app.widget.click";

/// This event describes the website performance metrics introduced by Google.
#[cfg(feature = "semconv_experimental")]
pub const BROWSER_WEB_VITAL: &str = "browser.web_vital";

/// This event represents an occurrence of a lifecycle transition on Android or iOS platform.
#[cfg(feature = "semconv_experimental")]
pub const DEVICE_APP_LIFECYCLE: &str = "device.app.lifecycle";

/// This event describes a single exception.
pub const EXCEPTION: &str = "exception";

/// Defines feature flag evaluation as an event.
#[cfg(feature = "semconv_experimental")]
pub const FEATURE_FLAG_EVALUATION: &str = "feature_flag.evaluation";

/// This event describes the assistant message passed to GenAI system.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_ASSISTANT_MESSAGE: &str = "gen_ai.assistant.message";

/// This event describes the Gen AI response message.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CHOICE: &str = "gen_ai.choice";

/// This event describes the system instructions passed to the GenAI model.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_MESSAGE: &str = "gen_ai.system.message";

/// This event describes the response from a tool or function call passed to the GenAI model.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOOL_MESSAGE: &str = "gen_ai.tool.message";

/// This event describes the user message passed to GenAI system.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_USER_MESSAGE: &str = "gen_ai.user.message";

/// Describes a message sent or received within the context of an RPC call.
#[cfg(feature = "semconv_experimental")]
pub const RPC_MESSAGE: &str = "rpc.message";

/// Indicates that a session has ended.
#[cfg(feature = "semconv_experimental")]
pub const SESSION_END: &str = "session.end";

/// Indicates that a new session has been started, optionally linking to the prior session.
#[cfg(feature = "semconv_experimental")]
pub const SESSION_START: &str = "session.start";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::event("APP_SCREEN_CLICK", "app.screen.click", Experimental),
    Entry::event("APP_WIDGET_CLICK", "app.widget.click", Experimental),
    Entry::event("BROWSER_WEB_VITAL", "browser.web_vital", Experimental),
    Entry::event("DEVICE_APP_LIFECYCLE", "device.app.lifecycle", Experimental),
    Entry::event("EXCEPTION", "exception", Stable),
    Entry::event("FEATURE_FLAG_EVALUATION", "feature_flag.evaluation", Experimental),
    Entry::event("GEN_AI_ASSISTANT_MESSAGE", "gen_ai.assistant.message", Experimental),
    Entry::event("GEN_AI_CHOICE", "gen_ai.choice", Experimental),
    Entry::event("GEN_AI_SYSTEM_MESSAGE", "gen_ai.system.message", Experimental),
    Entry::event("GEN_AI_TOOL_MESSAGE", "gen_ai.tool.message", Experimental),
    Entry::event("GEN_AI_USER_MESSAGE", "gen_ai.user.message", Experimental),
    Entry::event("RPC_MESSAGE", "rpc.message", Experimental),
    Entry::event("SESSION_END", "session.end", Experimental),
    Entry::event("SESSION_START", "session.start", Experimental),
];
