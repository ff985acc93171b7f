//! Logging macros.
//!
//! Each macro records the file, line and enclosing function of its call site
//! and writes through the process-wide logger:
//!
//! ```rust
//! use omlogger::{om_info, om_warning, Tag};
//!
//! om_info!("Loaded {} textures", 12);
//! om_warning!(tag: Tag::Render, "Shader cache miss for {}", "water.wgsl");
//! ```

/// Name of the enclosing function, without its module path
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Source location of the macro call site
#[doc(hidden)]
#[macro_export]
macro_rules! __om_location {
    () => {
        $crate::SourceLocation::new(file!(), line!(), Some($crate::function_name!()))
    };
}

/// Log at an explicit level, optionally tagged
#[macro_export]
macro_rules! om_log {
    (tag: $tag:expr, $level:expr, $($arg:tt)+) => {
        $crate::global().log_at(
            $level,
            $crate::__om_location!(),
            ::std::option::Option::Some($tag),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global().log_at(
            $level,
            $crate::__om_location!(),
            ::std::option::Option::None,
            format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! om_debug {
    (tag: $tag:expr, $($arg:tt)+) => { $crate::om_log!(tag: $tag, $crate::Level::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::om_log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! om_info {
    (tag: $tag:expr, $($arg:tt)+) => { $crate::om_log!(tag: $tag, $crate::Level::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::om_log!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! om_warning {
    (tag: $tag:expr, $($arg:tt)+) => { $crate::om_log!(tag: $tag, $crate::Level::Warning, $($arg)+) };
    ($($arg:tt)+) => { $crate::om_log!($crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! om_error {
    (tag: $tag:expr, $($arg:tt)+) => { $crate::om_log!(tag: $tag, $crate::Level::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::om_log!($crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! om_critical {
    (tag: $tag:expr, $($arg:tt)+) => { $crate::om_log!(tag: $tag, $crate::Level::Critical, $($arg)+) };
    ($($arg:tt)+) => { $crate::om_log!($crate::Level::Critical, $($arg)+) };
}

/// Log a critical line and stop the program unless `cond` holds.
///
/// Nothing is evaluated besides `cond` when it holds.
#[macro_export]
macro_rules! om_assert {
    ($cond:expr $(,)?) => {
        $crate::om_assert!($cond, "{}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::global().fail_assertion($crate::__om_location!(), format_args!($($arg)+));
        }
    };
}
