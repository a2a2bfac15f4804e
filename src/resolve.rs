use crate::background::Background;
use crate::config::{Scalar, UiConfig, flag_set};
use crate::layout::{CardLayout, Direction};
use crate::locale::{LocaleTable, LocaleText};
use crate::theme::Theme;
use log::debug;

/// Resolved text colors, bare hex tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub title: String,
    pub text: String,
    pub username: String,
    pub icon: String,
}

/// Everything the assembler needs, computed once per render.
#[derive(Debug, Clone)]
pub struct ResolvedParams<'a> {
    pub locale: LocaleText<'a>,
    pub animated: bool,
    pub direction: Direction,
    pub layout: CardLayout,
    pub palette: Palette,
    /// Avatar circle stroke attributes; empty when hidden.
    pub stroke_attrs: String,
    /// Background rectangle border attributes; empty when hidden.
    pub border_attrs: String,
    pub border_radius: String,
    pub background: Option<Background>,
    pub hidden_items: String,
    pub shown_items: String,
}

fn pick(value: Option<&String>, default: &str) -> String {
    value.cloned().unwrap_or_else(|| default.to_string())
}

fn resolve_theme(name: Option<&str>) -> Theme {
    match name {
        None => Theme::default(),
        Some(name) => Theme::by_name(name).unwrap_or_else(|| {
            debug!("unknown theme `{name}`, using default");
            Theme::default()
        }),
    }
}

pub fn resolve<'a>(config: &UiConfig, locales: &'a LocaleTable) -> ResolvedParams<'a> {
    let locale = locales.select(config.locale.as_deref());
    let theme = resolve_theme(config.theme.as_deref());

    let animated = !config.animations_disabled();
    let direction = Direction::from_rtl(locale.is_rtl());
    let layout = CardLayout::select(animated, direction);

    let palette = Palette {
        title: pick(config.title_color.as_ref(), &theme.title_color),
        text: pick(config.text_color.as_ref(), &theme.text_color),
        username: pick(config.username_color.as_ref(), &theme.username_color),
        icon: pick(config.icon_color.as_ref(), &theme.icon_color),
    };

    let stroke_attrs = if flag_set(config.hide_stroke.as_ref()) {
        String::new()
    } else {
        let color = pick(config.stroke_color.as_ref(), &theme.stroke_color);
        format!("stroke=\"#{color}\" stroke-width=\"5\"")
    };

    let border_attrs = if flag_set(config.hide_border.as_ref()) {
        String::new()
    } else {
        let color = pick(config.border_color.as_ref(), &theme.border_color);
        let width = config
            .border_width
            .as_ref()
            .and_then(Scalar::attr_value)
            .unwrap_or_else(|| theme.border_width.clone());
        format!("stroke=\"#{color}\" stroke-opacity=\"1\" stroke-width=\"{width}\"")
    };

    let border_radius = config
        .border_radius
        .as_ref()
        .and_then(Scalar::attr_value)
        .unwrap_or_else(|| theme.border_radius.clone());

    let background = match &config.bg_color {
        Some(color) => Background::from_color(color),
        None => theme.background.clone().map(Background::Solid),
    };

    debug!(
        "resolved card params: locale={}, animated={animated}, direction={}",
        locale.id(),
        direction.as_str()
    );

    ResolvedParams {
        locale,
        animated,
        direction,
        layout,
        palette,
        stroke_attrs,
        border_attrs,
        border_radius,
        background,
        hidden_items: config.hidden_items.clone().unwrap_or_default(),
        shown_items: config.show_items.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackgroundColor, Flag, Scalar};

    fn resolve_builtin(config: &UiConfig) -> ResolvedParams<'static> {
        resolve(config, LocaleTable::builtin())
    }

    #[test]
    fn defaults_are_animated_ltr() {
        let params = resolve_builtin(&UiConfig::default());
        assert!(params.animated);
        assert_eq!(params.direction, Direction::LeftToRight);
        assert_eq!(params.layout, CardLayout::select(true, Direction::LeftToRight));
        assert_eq!(params.locale.id(), "en");
        assert!(params.background.is_none());
        assert_eq!(params.border_radius, "4.5");
    }

    #[test]
    fn disabled_animations_flag_selects_static_layout() {
        let config = UiConfig {
            disabled_animations: Some(Flag::Text("true".to_string())),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        assert!(!params.animated);
        assert_eq!(params.layout, CardLayout::select(false, Direction::LeftToRight));
    }

    #[test]
    fn png_format_disables_animations() {
        let config = UiConfig {
            format: Some("png".to_string()),
            disabled_animations: Some(Flag::Bool(false)),
            ..Default::default()
        };
        assert!(!resolve_builtin(&config).animated);
    }

    #[test]
    fn rtl_locale_sets_direction() {
        let config = UiConfig {
            locale: Some("he".to_string()),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        assert_eq!(params.direction, Direction::RightToLeft);
        assert_eq!(params.layout.title_x, 510.0);
    }

    #[test]
    fn hidden_stroke_and_border_render_no_attributes() {
        let config = UiConfig {
            hide_stroke: Some(Flag::Text("TRUE".to_string())),
            hide_border: Some(Flag::Int(1)),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        assert!(params.stroke_attrs.is_empty());
        assert!(params.border_attrs.is_empty());
    }

    #[test]
    fn visible_stroke_and_border_use_configured_values() {
        let config = UiConfig {
            stroke_color: Some("abcdef".to_string()),
            border_color: Some("123456".to_string()),
            border_width: Some(Scalar::Number(3.0)),
            border_radius: Some(Scalar::Text("12".to_string())),
            hide_stroke: Some(Flag::Text("no".to_string())),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        assert_eq!(params.stroke_attrs, "stroke=\"#abcdef\" stroke-width=\"5\"");
        assert_eq!(
            params.border_attrs,
            "stroke=\"#123456\" stroke-opacity=\"1\" stroke-width=\"3\""
        );
        assert_eq!(params.border_radius, "12");
    }

    #[test]
    fn unusable_border_values_fall_back_to_theme() {
        let config = UiConfig {
            border_width: Some(Scalar::Other(serde_json::json!([3]))),
            border_radius: Some(Scalar::Other(serde_json::json!(true))),
            hide_border: Some(Flag::Other(serde_json::json!(1.0))),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        let theme = Theme::default();
        assert_eq!(params.border_radius, theme.border_radius);
        assert!(
            params
                .border_attrs
                .ends_with(&format!("stroke-width=\"{}\"", theme.border_width))
        );
    }

    #[test]
    fn theme_supplies_missing_colors() {
        let config = UiConfig {
            theme: Some("dark".to_string()),
            title_color: Some("ff00ff".to_string()),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        let dark = Theme::dark();
        assert_eq!(params.palette.title, "ff00ff");
        assert_eq!(params.palette.text, dark.text_color);
        assert_eq!(params.background, dark.background.map(Background::Solid));
    }

    #[test]
    fn configured_background_wins_over_theme() {
        let config = UiConfig {
            theme: Some("light".to_string()),
            bg_color: Some(BackgroundColor::from("000000")),
            ..Default::default()
        };
        assert_eq!(
            resolve_builtin(&config).background,
            Some(Background::Solid("000000".to_string()))
        );
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = UiConfig {
            theme: Some("neon".to_string()),
            ..Default::default()
        };
        let params = resolve_builtin(&config);
        assert_eq!(params.palette.text, Theme::default().text_color);
    }
}
