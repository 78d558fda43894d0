use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_1: &str = "Dataset 1";
pub const DEFAULT_NAME_2: &str = "Dataset 2";
pub const DEFAULT_COLOR_1: &str = "#0066cc";
pub const DEFAULT_COLOR_2: &str = "#00cc66";

//the caller's choice of which csv columns serve as x/y axes for each of the
//two datasets, plus display names and colors
//supplied entirely by the caller and immutable once constructed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FieldMapping {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,

    #[serde(default)]
    pub name1: Option<String>,
    #[serde(default)]
    pub name2: Option<String>,
    #[serde(default)]
    pub color1: Option<String>,
    #[serde(default)]
    pub color2: Option<String>,
}

impl FieldMapping {
    pub fn display_name1(&self) -> &str {
        self.name1.as_deref().unwrap_or(DEFAULT_NAME_1)
    }

    pub fn display_name2(&self) -> &str {
        self.name2.as_deref().unwrap_or(DEFAULT_NAME_2)
    }

    pub fn display_color1(&self) -> &str {
        self.color1.as_deref().unwrap_or(DEFAULT_COLOR_1)
    }

    pub fn display_color2(&self) -> &str {
        self.color2.as_deref().unwrap_or(DEFAULT_COLOR_2)
    }
}
