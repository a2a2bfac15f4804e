use serde::{Deserialize, Serialize};

/// Color and border defaults applied wherever the UI configuration is silent.
///
/// Colors are bare hex tokens without the leading `#`, matching the way they
/// arrive from query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub title_color: String,
    pub text_color: String,
    pub username_color: String,
    pub icon_color: String,
    pub border_color: String,
    pub stroke_color: String,
    pub background: Option<String>,
    pub border_radius: String,
    pub border_width: String,
}

impl Theme {
    /// Transparent card; no background fragment is rendered.
    pub fn card_default() -> Self {
        Self {
            title_color: "2f80ed".to_string(),
            text_color: "434d58".to_string(),
            username_color: "2f80ed".to_string(),
            icon_color: "4c71f2".to_string(),
            border_color: "e4e2e2".to_string(),
            stroke_color: "e4e2e2".to_string(),
            background: None,
            border_radius: "4.5".to_string(),
            border_width: "1".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Some("fffefe".to_string()),
            ..Self::card_default()
        }
    }

    pub fn dark() -> Self {
        Self {
            title_color: "fff".to_string(),
            text_color: "9f9f9f".to_string(),
            username_color: "79ff97".to_string(),
            icon_color: "79ff97".to_string(),
            border_color: "30363d".to_string(),
            stroke_color: "30363d".to_string(),
            background: Some("151515".to_string()),
            border_radius: "4.5".to_string(),
            border_width: "1".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::card_default()),
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::card_default()
    }
}
