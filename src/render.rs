use crate::background::render_background;
use crate::config::UiConfig;
use crate::data::DataRecord;
use crate::icons::IconCatalog;
use crate::layout::{CARD_WIDTH, CardLayout, ROW_HEIGHT, card_height};
use crate::locale::{LocaleTable, TextKey};
use crate::metrics::{MetricItem, select_items};
use crate::resolve::{Palette, ResolvedParams, resolve};
use anyhow::Result;
use std::path::Path;

const FONT_FAMILY: &str = "\"Segoe UI\", Ubuntu, sans-serif";
const FIRST_ROW_DELAY_MS: usize = 210;
const ROW_DELAY_STEP_MS: usize = 100;

/// Renders a complete stats card.
pub fn render_card(
    data: &DataRecord,
    config: &UiConfig,
    locales: &LocaleTable,
    icons: &IconCatalog,
) -> String {
    let params = resolve(config, locales);
    let items = select_items(
        data,
        &params.locale,
        icons,
        &params.hidden_items,
        &params.shown_items,
    );
    let background = render_background(
        params.background.as_ref(),
        &params.border_radius,
        &params.border_attrs,
    );
    assemble(data, &params, &items, &background)
}

/// Interpolates resolved parameters, data and rows into the final SVG.
pub fn assemble(
    data: &DataRecord,
    params: &ResolvedParams<'_>,
    items: &[MetricItem<'_>],
    background: &str,
) -> String {
    let height = card_height(items.len());
    let layout = &params.layout;
    let title = escape_xml(&params.locale.title(&data.name));
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg width=\"{CARD_WIDTH}\" height=\"{height}\" direction=\"{}\" viewBox=\"0 0 {CARD_WIDTH} {height}\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n",
        params.direction.as_str()
    ));
    svg.push_str("    <style>\n");
    if params.animated {
        svg.push_str(&animation_styles(layout));
    }
    svg.push_str(&text_styles(&params.palette));
    svg.push_str("    </style>\n");
    svg.push_str(&format!("    <title id=\"titleId\">{title}</title>\n\n"));
    svg.push_str(&format!("    {background}\n"));

    svg.push_str("    <g transform=\"translate(0, 25)\">\n");
    svg.push_str(&format!(
        "        <g class=\"div-animation\">\n            <text x=\"{}\" y=\"{}\" class=\"text-title\">{title}</text>\n        </g>\n",
        layout.title_x, layout.title_y
    ));
    svg.push_str(&avatar_svg(&data.pic, layout, &params.stroke_attrs));
    svg.push_str(&format!(
        "        <text x=\"{}\" y=\"{}\" direction=\"ltr\" class=\"text-username div-animation\">@{}</text>\n",
        layout.username_x,
        layout.username_y,
        escape_xml(&data.username)
    ));
    svg.push_str(&format!(
        "        <g class=\"div-animation text-middle\">\n            <text x=\"{}\" y=\"{}\" class=\"text-followers\"><tspan class=\"text-bold\">{}</tspan> {} · <tspan class=\"text-bold\">{}</tspan> {}</text>\n        </g>\n",
        layout.followers_x,
        layout.followers_y,
        data.followers,
        escape_xml(params.locale.get(TextKey::Followers)),
        data.following,
        escape_xml(params.locale.get(TextKey::Following)),
    ));

    svg.push_str("\n        <svg x=\"-10\" y=\"12\">");
    let rows: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| item_svg(idx, item, layout))
        .collect();
    svg.push_str(&rows.join("\n"));
    svg.push_str("\n        </svg>\n    </g>\n</svg>");
    svg
}

fn animation_styles(layout: &CardLayout) -> String {
    format!(
        r#"        /* Animations */
        @keyframes scaleInAnimation {{
            from {{
                transform: translate(-5px, 5px) scale(0);
            }}
            to {{
                transform: translate(-5px, 5px) scale(1);
            }}
        }}
        @keyframes fadeInAnimation {{
            from {{
                opacity: 0;
            }}
            to {{
                opacity: 1;
            }}
        }}
        @keyframes fadeLeftInAnimation {{
            from {{
                opacity: 0;
                transform: translate(-90px, 10px);
            }}
            to {{
                opacity: 1;
                transform: translate(10px, 10px);
            }}
        }}

        .div-animation {{
            animation: fadeLeftInAnimation 0.7s ease-in-out forwards;
        }}

        .image-profile-animation {{
            animation: scaleInAnimation 1.2s ease-in-out forwards;
            transform-origin: {}px {}px;
        }}

        .single-item-animation {{
            opacity: 0;
            animation: fadeInAnimation 0.3s ease-in-out forwards;
        }}
"#,
        layout.image_x, layout.image_y
    )
}

fn text_styles(palette: &Palette) -> String {
    format!(
        r#"
        .text {{
            font-family: {FONT_FAMILY};
            fill: #{text};
            font-size: 14px;
        }}

        .text-bold {{
            font-weight: 700;
        }}

        .text-middle {{
            alignment-baseline: middle;
            text-anchor: middle;
        }}

        .text-followers {{
            font-family: {FONT_FAMILY};
            fill: #{text};
            font-size: 13px;
        }}

        .text-username {{
            font-family: {FONT_FAMILY};
            fill: #{username};
            font-weight: 750;
            font-size: 14.6px;
            alignment-baseline: middle;
            text-anchor: middle;
        }}

        .text-title {{
            font-family: {FONT_FAMILY};
            fill: #{title};
            font-size: 17px;
            font-weight: 600;
        }}

        .icon {{
            fill: #{icon};
            display: block;
        }}
"#,
        text = palette.text,
        username = palette.username,
        title = palette.title,
        icon = palette.icon,
    )
}

fn avatar_svg(pic: &str, layout: &CardLayout, stroke_attrs: &str) -> String {
    format!(
        r#"        <g class="image-profile-animation">
            <defs>
                <pattern id="image" x="0%" y="0%" height="100%" width="100%" viewBox="0 0 512 512">
                    <image x="0%" y="0%" width="512" height="512" href="data:image/jpeg;base64,{pic}"></image>
                </pattern>
            </defs>
            <circle cx="{}" cy="{}" r="50" fill="url(#image)" {stroke_attrs}/>
        </g>
"#,
        layout.image_x, layout.image_y
    )
}

fn item_svg(idx: usize, item: &MetricItem<'_>, layout: &CardLayout) -> String {
    let offset = idx * ROW_HEIGHT as usize;
    let delay = FIRST_ROW_DELAY_MS + idx * ROW_DELAY_STEP_MS;
    format!(
        r#"
            <g transform="translate(230, {offset})">
                <g class="single-item-animation" style="animation-delay: {delay}ms" transform="translate(25, 0)">
                    <svg x="{}" y="0" class="icon" viewBox="0 0 16 16" version="1.1" width="16" height="16">
                        {}
                    </svg>
                    <text class="text" x="{}" y="12.5">{}:</text>
                    <text class="text text-bold" x="{}" y="12.5">{}</text>
                </g>
            </g>"#,
        layout.icon_x,
        item.icon,
        layout.text_x,
        escape_xml(item.label),
        layout.data_x,
        item.value
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Segoe UI".to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackgroundColor, Flag};

    fn ada() -> DataRecord {
        DataRecord {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            pic: "QUJD".to_string(),
            followers: 10,
            following: 5,
            public_repos: 3,
            ..Default::default()
        }
    }

    fn render(config: &UiConfig) -> String {
        render_card(&ada(), config, LocaleTable::builtin(), IconCatalog::builtin())
    }

    fn row_count(svg: &str) -> usize {
        svg.matches("class=\"single-item-animation\"").count()
    }

    #[test]
    fn default_card_scenario() {
        let svg = render(&UiConfig::default());
        assert!(svg.starts_with("<svg width=\"535\" height=\"245\""));
        assert!(svg.contains("viewBox=\"0 0 535 245\""));
        assert!(svg.contains(">@ada</text>"));
        assert!(svg.contains(
            "<tspan class=\"text-bold\">10</tspan> Followers · <tspan class=\"text-bold\">5</tspan> Following"
        ));
        assert_eq!(row_count(&svg), 8);
        assert!(svg.contains("<title id=\"titleId\">Ada&apos;s GitHub Stats</title>"));
        assert!(svg.contains("@keyframes fadeInAnimation"));
        assert!(svg.contains("href=\"data:image/jpeg;base64,QUJD\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn rows_are_offset_and_staggered() {
        let svg = render(&UiConfig::default());
        assert!(svg.contains("<g transform=\"translate(230, 0)\">"));
        assert!(svg.contains("<g transform=\"translate(230, 175)\">"));
        assert!(svg.contains("animation-delay: 210ms"));
        assert!(svg.contains("animation-delay: 910ms"));
        assert!(!svg.contains("animation-delay: 1010ms"));
        assert!(svg.contains("<text class=\"text\" x=\"25\" y=\"12.5\">Total Repos:</text>"));
        assert!(svg.contains("<text class=\"text text-bold\" x=\"225\" y=\"12.5\">3</text>"));
    }

    #[test]
    fn disabled_animations_render_static_card() {
        let config = UiConfig {
            disabled_animations: Some(Flag::Text("true".to_string())),
            ..Default::default()
        };
        let svg = render(&config);
        assert!(!svg.contains("@keyframes"));
        assert!(svg.contains("<text x=\"15\" y=\"0\" class=\"text-title\">"));
        assert!(svg.contains("<circle cx=\"120\" cy=\"70\" r=\"50\""));
        assert!(svg.contains("<text x=\"119.9\" y=\"140\""));
        assert!(svg.contains("<text x=\"120\" y=\"161\" class=\"text-followers\">"));
    }

    #[test]
    fn every_metric_shown_grows_the_card() {
        let config = UiConfig {
            show_items: Some(
                "reviews,issues_closed,discussions_started,discussions_answered".to_string(),
            ),
            ..Default::default()
        };
        let svg = render(&config);
        assert_eq!(row_count(&svg), 12);
        assert!(svg.contains("height=\"345\""));
    }

    #[test]
    fn hiding_rows_keeps_the_minimum_height() {
        let config = UiConfig {
            hidden_items: Some("repos,stars,forks,commits,prs,prs_merged,issues".to_string()),
            ..Default::default()
        };
        let svg = render(&config);
        assert_eq!(row_count(&svg), 1);
        assert!(svg.contains("height=\"220\""));
    }

    #[test]
    fn gradient_background_scenario() {
        let config = UiConfig {
            bg_color: Some(BackgroundColor::List(vec![
                "45".to_string(),
                "ff0000".to_string(),
                "00ff00".to_string(),
            ])),
            ..Default::default()
        };
        let svg = render(&config);
        assert!(svg.contains("rotate(45)"));
        assert!(svg.contains("<stop offset=\"0%\" stop-color=\"#ff0000\"/>"));
        assert!(svg.contains("<stop offset=\"100%\" stop-color=\"#00ff00\"/>"));
    }

    #[test]
    fn solid_background_scenario() {
        let config = UiConfig {
            bg_color: Some(BackgroundColor::from("112233")),
            ..Default::default()
        };
        let svg = render(&config);
        assert!(svg.contains("fill=\"#112233\""));
        assert!(!svg.contains("linearGradient"));
    }

    #[test]
    fn unexpected_config_values_render_with_defaults() {
        let config = crate::config::parse_config(
            r#"{"hideBorder": 1.0, "disabledAnimations": ["x"], "borderRadius": true, "locale": "es", "bgColor": "112233"}"#,
        )
        .unwrap();
        let svg = render(&config);
        assert!(svg.contains("@keyframes fadeInAnimation"));
        assert!(svg.contains("rx=\"4.5\""));
        assert!(svg.contains("stroke-opacity=\"1\" stroke-width=\"1\""));
        assert!(svg.contains("Seguidores"));
    }

    #[test]
    fn unknown_locale_matches_fallback() {
        let unknown = UiConfig {
            locale: Some("zz".to_string()),
            ..Default::default()
        };
        let explicit = UiConfig {
            locale: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&unknown), render(&explicit));
        assert_eq!(render(&explicit), render(&UiConfig::default()));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = UiConfig {
            locale: Some("ar".to_string()),
            bg_color: Some(BackgroundColor::from("0,000000,ffffff,888888")),
            ..Default::default()
        };
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn rtl_card_sets_direction_and_mirrors_rows() {
        let config = UiConfig {
            locale: Some("ar".to_string()),
            ..Default::default()
        };
        let svg = render(&config);
        assert!(svg.contains("direction=\"rtl\""));
        assert!(svg.contains("<svg x=\"225\" y=\"0\" class=\"icon\""));
        assert!(svg.contains("<text class=\"text text-bold\" x=\"15\" y=\"12.5\">"));
    }

    #[test]
    fn text_content_is_escaped() {
        let data = DataRecord {
            name: "<script>".to_string(),
            username: "a&b".to_string(),
            ..ada()
        };
        let svg = render_card(
            &data,
            &UiConfig::default(),
            LocaleTable::builtin(),
            IconCatalog::builtin(),
        );
        assert!(svg.contains("&lt;script&gt;&apos;s GitHub Stats"));
        assert!(svg.contains("@a&amp;b"));
        assert!(!svg.contains("<script>"));
    }
}
