/// Build version shown in the page footer.
///
/// Set `EXPLORER_BUILD_VERSION` at compile time (for example to a git
/// describe string) to override the crate version.
pub const VERSION: &str = match option_env!("EXPLORER_BUILD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
