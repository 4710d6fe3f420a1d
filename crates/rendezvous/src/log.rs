use derive_more::Display;

///
/// Level
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Config,
    Membership,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some($topic), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<$crate::log::Topic>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let message = format!($fmt $(, $arg)*);

        $crate::log::__emit(env!("CARGO_PKG_NAME"), $topic, $level, &message);
    }};
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(crate_name: &str, topic: Option<Topic>, level: Level, message: &str) {
    let topic = topic.map_or_else(String::new, |t| t.to_string());

    match level {
        Level::Debug => tracing::debug!(krate = crate_name, %topic, "{message}"),
        Level::Info | Level::Ok => tracing::info!(krate = crate_name, %topic, "{message}"),
        Level::Warn => tracing::warn!(krate = crate_name, %topic, "{message}"),
        Level::Error => tracing::error!(krate = crate_name, %topic, "{message}"),
    }
}

///
/// TESTS
///
