use crate::config::BackgroundColor;
use log::{debug, trace};

pub const GRADIENT_ID: &str = "gradient";

/// Normalized background fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(String),
    Gradient { angle: String, stops: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop<'a> {
    pub offset: f64,
    pub color: &'a str,
}

impl Background {
    /// Returns `None` when no usable color is configured.
    ///
    /// A list, or a string with at least one comma, is read as
    /// `angle, color, ...`; anything shorter is a solid fill.
    pub fn from_color(color: &BackgroundColor) -> Option<Self> {
        match color {
            BackgroundColor::List(tokens) => Self::from_tokens(tokens.clone()),
            BackgroundColor::Single(value) if value.is_empty() => None,
            BackgroundColor::Single(value) => {
                let tokens: Vec<String> = value.split(',').map(|t| t.trim().to_string()).collect();
                if tokens.len() >= 2 {
                    Self::from_tokens(tokens)
                } else {
                    Some(Self::Solid(value.clone()))
                }
            }
            BackgroundColor::Other(value) => {
                debug!("ignoring background color {value}");
                None
            }
        }
    }

    fn from_tokens(mut tokens: Vec<String>) -> Option<Self> {
        match tokens.len() {
            0 => None,
            1 => tokens.pop().map(Self::Solid),
            _ => {
                let stops = tokens.split_off(1);
                let angle = tokens.pop()?;
                trace!("gradient background: angle {angle}, {} stops", stops.len());
                Some(Self::Gradient { angle, stops })
            }
        }
    }
}

/// Spreads colors evenly from 0% to 100%; a lone stop sits at 0%.
pub fn gradient_stops(colors: &[String]) -> Vec<GradientStop<'_>> {
    let last = colors.len().saturating_sub(1);
    colors
        .iter()
        .enumerate()
        .map(|(idx, color)| GradientStop {
            offset: if last == 0 {
                0.0
            } else {
                (idx as f64 * 100.0) / last as f64
            },
            color: color.as_str(),
        })
        .collect()
}

/// Background fragment; empty when there is no background.
pub fn render_background(
    background: Option<&Background>,
    border_radius: &str,
    border_attrs: &str,
) -> String {
    match background {
        None => String::new(),
        Some(Background::Solid(color)) => format!(
            "<rect x=\"0.5\" y=\"0.5\" rx=\"{border_radius}\" height=\"99.6%\" width=\"99.8%\" fill=\"#{color}\" {border_attrs}/>"
        ),
        Some(Background::Gradient { angle, stops }) => {
            let mut svg = String::new();
            svg.push_str("\n    <defs>\n");
            svg.push_str(&format!(
                "        <linearGradient id=\"{GRADIENT_ID}\" gradientTransform=\"rotate({angle})\" gradientUnits=\"userSpaceOnUse\">\n            "
            ));
            for stop in gradient_stops(stops) {
                svg.push_str(&format!(
                    "<stop offset=\"{}%\" stop-color=\"#{}\"/>",
                    stop.offset, stop.color
                ));
            }
            svg.push_str("\n        </linearGradient>\n    </defs>\n");
            svg.push_str(&format!(
                "    <rect x=\"0.5\" y=\"0.5\" rx=\"{border_radius}\" height=\"99.6%\" width=\"99.8%\" fill=\"url(#{GRADIENT_ID})\" {border_attrs}/>\n    "
            ));
            svg
        }
    }
}
