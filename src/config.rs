//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header and login screen.
pub const APP_NAME: &str = "ERP";

// =============================================================================
// Network Configuration
// =============================================================================

/// Login endpoint. Override at build time with `ERP_AUTH_ENDPOINT`.
pub const AUTH_ENDPOINT: &str = match option_env!("ERP_AUTH_ENDPOINT") {
    Some(url) => url,
    None => "http://2.58.80.90:81/erp/auth/login",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Session Configuration
// =============================================================================

/// sessionStorage key for the cached session.
pub const SESSION_KEY: &str = "erp_session";

/// Branch preselected on the login form.
pub const DEFAULT_LOGIN_BRANCH: &str = "1";

// =============================================================================
// Data Table Configuration
// =============================================================================

/// Data table defaults.
pub mod table {
    /// Label of the add button when a page does not provide one.
    pub const DEFAULT_ADD_LABEL: &str = "REGISTRAR";
    /// Export file name (without `.csv`) when a page does not provide one.
    pub const DEFAULT_EXPORT_FILENAME: &str = "export";
    /// Screens matching this query start in card view.
    pub const NARROW_SCREEN_QUERY: &str = "(max-width: 768px)";
    /// How long an exported file's object URL outlives the download click.
    pub const EXPORT_URL_LIFETIME_MS: i32 = 1000;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
