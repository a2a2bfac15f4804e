use serde::Deserialize;
use stats_card_renderer::{DataRecord, IconCatalog, LocaleTable, UiConfig, render_card};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRenderOptions {
    /// Extra locale entries merged over the built-in table.
    locales: Option<serde_json::Value>,
}

fn parse_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|error| error.to_string())
}

fn build_locales(options: &CardRenderOptions) -> Result<LocaleTable, String> {
    match &options.locales {
        Some(value) => {
            let custom = LocaleTable::parse(&value.to_string()).map_err(|error| error.to_string())?;
            Ok(LocaleTable::builtin().merged(&custom))
        }
        None => Ok(LocaleTable::builtin().clone()),
    }
}

fn render(data_json: &str, config_json: Option<&str>, options_json: Option<&str>) -> Result<String, String> {
    let data: DataRecord = parse_json(data_json)?;
    let config: UiConfig = match config_json {
        Some(raw) => parse_json(raw)?,
        None => UiConfig::default(),
    };
    let options: CardRenderOptions = match options_json {
        Some(raw) => parse_json(raw)?,
        None => CardRenderOptions::default(),
    };
    let locales = build_locales(&options)?;
    Ok(render_card(&data, &config, &locales, IconCatalog::builtin()))
}

#[wasm_bindgen]
pub fn render_stats_card_svg(
    data_json: &str,
    config_json: Option<String>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    render(data_json, config_json.as_deref(), options_json.as_deref())
        .map_err(|error| JsValue::from_str(&error))
}
