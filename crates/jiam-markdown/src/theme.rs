use serde::{Deserialize, Serialize};

/// CSS classes the HTML writer puts on each element.
///
/// Any field may be left out of a config file; missing fields keep the
/// default styling. An empty string omits the `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub heading_1: String,
    pub heading_2: String,
    pub heading_3: String,
    pub paragraph: String,
    pub block_quote: String,
    pub thematic_break: String,
    pub unordered_list: String,
    pub ordered_list: String,
    pub list_item: String,
    pub code: String,
    pub link: String,
}

impl Theme {
    /// Class for a heading, sized down as the level goes up.
    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.heading_1,
            2 => &self.heading_2,
            _ => &self.heading_3,
        }
    }

    /// A theme with no classes at all, for bare semantic markup.
    pub fn unstyled() -> Self {
        Self {
            heading_1: String::new(),
            heading_2: String::new(),
            heading_3: String::new(),
            paragraph: String::new(),
            block_quote: String::new(),
            thematic_break: String::new(),
            unordered_list: String::new(),
            ordered_list: String::new(),
            list_item: String::new(),
            code: String::new(),
            link: String::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading_1: "text-2xl font-bold my-2".to_string(),
            heading_2: "text-xl font-bold my-2".to_string(),
            heading_3: "text-lg font-semibold my-1".to_string(),
            paragraph: "my-1".to_string(),
            block_quote: "border-l-4 border-gray-300 pl-3 my-2 italic text-gray-600".to_string(),
            thematic_break: "my-3 border-gray-300".to_string(),
            unordered_list: "list-disc ml-5 my-1".to_string(),
            ordered_list: "list-decimal ml-5 my-1".to_string(),
            list_item: String::new(),
            code: "bg-gray-100 rounded px-1 font-mono text-sm".to_string(),
            link: "text-blue-500 underline".to_string(),
        }
    }
}
