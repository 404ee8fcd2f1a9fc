use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Salvation,
    Love,
    Grace,
    Mercy,
    Redemption,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Salvation => "salvation",
            Theme::Love => "love",
            Theme::Grace => "grace",
            Theme::Mercy => "mercy",
            Theme::Redemption => "redemption",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedVerse {
    pub reference: &'static str,
    pub text: &'static str,
    pub theme: Theme,
}
