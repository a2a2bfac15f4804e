pub mod background;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod icons;
pub mod layout;
pub mod locale;
pub mod metrics;
pub mod render;
pub mod resolve;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{BackgroundColor, Flag, Scalar, UiConfig, parse_boolean};
pub use data::DataRecord;
pub use error::{CardError, Result};
pub use icons::IconCatalog;
pub use locale::{FALLBACK_LOCALE, LocaleEntry, LocaleTable};
pub use metrics::{MetricItem, MetricKey, select_items};
pub use render::{assemble, render_card};
pub use resolve::{ResolvedParams, resolve};
pub use theme::Theme;

/// Renders a card with the built-in locale table and icon catalog.
pub fn render_default(data: &DataRecord, config: &UiConfig) -> String {
    render_card(data, config, LocaleTable::builtin(), IconCatalog::builtin())
}
