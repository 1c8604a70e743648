//! Site-wide settings document.
//!
//! DESIGN
//! ======
//! There is exactly one settings value per deployment. Stored documents are
//! merged over [`SiteSettings::default`] at load time: the container-level
//! `#[serde(default)]` back-fills any field a visitor's stored copy predates,
//! while every field it does carry wins.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// Global presentation settings edited from the admin page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub hero_video_url: String,
    /// Asset path or inline `data:` URI.
    pub about_image_url: String,
    /// Asset path or inline `data:` URI. Empty renders the color badge.
    pub logo_url: String,
    pub email: String,
    pub phone: String,
    /// Tint for the fallback logo badge.
    pub logo_color: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_video_url: "https://www.youtube.com/watch?v=실제_메인_쇼릴_ID".to_owned(),
            about_image_url: "/assets/profile.jpg".to_owned(),
            logo_url: "/assets/logo.png".to_owned(),
            email: "hayeong0369@gmail.com".to_owned(),
            phone: "010-xxxx-xxxx".to_owned(),
            logo_color: "#A5F3FC".to_owned(),
        }
    }
}

/// Image slots that accept an uploaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageField {
    Logo,
    About,
}

impl SiteSettings {
    /// Parse a stored document, back-filling missing fields from the defaults.
    ///
    /// Only a JSON object is accepted. Serde would otherwise fill the struct
    /// positionally from an array.
    pub fn merge_stored(raw: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        serde_json::from_value(serde_json::Value::Object(map))
    }

    pub fn image(&self, field: ImageField) -> &str {
        match field {
            ImageField::Logo => &self.logo_url,
            ImageField::About => &self.about_image_url,
        }
    }

    pub fn set_image(&mut self, field: ImageField, value: String) {
        match field {
            ImageField::Logo => self.logo_url = value,
            ImageField::About => self.about_image_url = value,
        }
    }
}
