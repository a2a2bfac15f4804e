use std::path::{Path, PathBuf};

use stats_card_renderer::config::load_config;
use stats_card_renderer::data::load_data;
use stats_card_renderer::{DataRecord, IconCatalog, LocaleTable, UiConfig, render_card};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.starts_with("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{fixture}: missing </svg tag");
    assert!(!svg.contains("NaN"), "{fixture}: NaN leaked into output");
}

fn load_fixture(data: &str, config: Option<&str>) -> (DataRecord, UiConfig) {
    let root = fixtures();
    let data = load_data(&root.join("data").join(data)).expect("fixture data read failed");
    let config = load_config(config.map(|rel| root.join("config").join(rel)).as_deref())
        .expect("fixture config read failed");
    (data, config)
}

fn render_fixture(data: &str, config: Option<&str>) -> String {
    let (data, config) = load_fixture(data, config);
    render_card(&data, &config, LocaleTable::builtin(), IconCatalog::builtin())
}

fn height_of(svg: &str) -> u32 {
    let start = svg.find("height=\"").expect("height attribute") + "height=\"".len();
    let end = svg[start..].find('"').expect("closing quote") + start;
    svg[start..end].parse().expect("numeric height")
}

fn row_count(svg: &str) -> usize {
    svg.matches("class=\"single-item-animation\"").count()
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        ("ada.json", None),
        ("octocat.json", None),
        ("octocat.json", Some("dark_gradient.json5")),
        ("octocat.json", Some("static_rtl.json")),
        ("octocat.json", Some("unknown_locale.json")),
        ("octocat.json", Some("fallback_locale.json")),
    ];

    for (data, config) in candidates {
        let label = format!("{data} + {}", config.unwrap_or("defaults"));
        let svg = render_fixture(data, config);
        assert_valid_svg(&svg, &label);
        assert_eq!(
            height_of(&svg),
            (45 + row_count(&svg) as u32 * 25).max(220),
            "{label}: height does not match row count"
        );
    }
}

#[test]
fn ada_scenario() {
    let svg = render_fixture("ada.json", None);
    assert!(svg.contains("@ada"));
    assert!(svg.contains("<tspan class=\"text-bold\">10</tspan>"));
    assert!(svg.contains("<tspan class=\"text-bold\">5</tspan>"));
    assert_eq!(row_count(&svg), 8);
    assert_eq!(height_of(&svg), 245);
}

#[test]
fn dark_gradient_fixture() {
    let svg = render_fixture("octocat.json", Some("dark_gradient.json5"));
    assert!(svg.contains("rotate(90)"));
    assert!(svg.contains("<stop offset=\"0%\" stop-color=\"#0d1117\"/>"));
    assert!(svg.contains("<stop offset=\"50%\" stop-color=\"#161b22\"/>"));
    assert!(svg.contains("<stop offset=\"100%\" stop-color=\"#21262d\"/>"));
    assert!(svg.contains("rx=\"10\""));
    assert!(svg.contains("fill: #9f9f9f;"));
    // 8 defaults - forks + reviews + discussions_answered
    assert_eq!(row_count(&svg), 9);
    assert!(!svg.contains("Total Forks"));
    assert!(svg.contains("Total PRs Reviewed"));
}

#[test]
fn static_rtl_fixture() {
    let svg = render_fixture("octocat.json", Some("static_rtl.json"));
    assert!(svg.contains("direction=\"rtl\""));
    assert!(!svg.contains("@keyframes"));
    assert!(svg.contains("<text x=\"520\" y=\"0\" class=\"text-title\">"));
    assert!(svg.contains("<stop offset=\"50%\" stop-color=\"#00ff00\"/>"));
    assert!(svg.contains("stroke=\"#333333\" stroke-opacity=\"1\" stroke-width=\"2\""));
    assert!(svg.contains("fill=\"url(#image)\" />"));
    // he lacks the merged-PR label, so it comes from the fallback locale
    assert!(svg.contains("Total PRs Merged:"));
}

#[test]
fn unknown_locale_is_byte_identical_to_fallback() {
    let unknown = render_fixture("octocat.json", Some("unknown_locale.json"));
    let fallback = render_fixture("octocat.json", Some("fallback_locale.json"));
    assert_eq!(unknown, fallback);
}

#[test]
fn rendering_twice_is_identical() {
    let (data, config) = load_fixture("octocat.json", Some("dark_gradient.json5"));
    let first = render_card(&data, &config, LocaleTable::builtin(), IconCatalog::builtin());
    let second = render_card(&data, &config, LocaleTable::builtin(), IconCatalog::builtin());
    assert_eq!(first, second);
}

#[test]
fn custom_locale_table_from_file() {
    let custom = LocaleTable::load(&fixtures().join("locales_custom.json"))
        .expect("custom locale table loads");
    let (data, _) = load_fixture("ada.json", None);
    let config = UiConfig {
        locale: Some("la".to_string()),
        ..Default::default()
    };
    let svg = render_card(&data, &config, &custom, IconCatalog::builtin());
    assert!(svg.contains(">Statisticae Ada</title>"));
    assert!(svg.contains("Sectatores · "));
    assert!(svg.contains("</tspan> Idols</text>"));
    assert!(svg.contains(">Repos:</text>"));
}
