//! # Section Model
//!
//! A page is an ordered list of [`Section`]s. Each section carries props
//! whose shape is fixed by its type, so the type is not stored separately:
//! it is read off the [`SectionProps`] variant.
//!
//! Wire shape (camelCase, matches the export format):
//!
//! ```json
//! {
//!   "id": "3f0c...",
//!   "type": "hero",
//!   "order": 1,
//!   "isVisible": true,
//!   "props": { "title": "Welcome", "alignment": "center", ... }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::mutations::MutationError;

/// Opaque section identifier
pub type SectionId = String;

/// Closed set of section types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Hero,
    Features,
    About,
    Footer,
}

impl SectionType {
    pub const ALL: [SectionType; 5] = [
        SectionType::Header,
        SectionType::Hero,
        SectionType::Features,
        SectionType::About,
        SectionType::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::About => "about",
            SectionType::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown section type: {}", s))
    }
}

/// One page block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,

    /// Position among siblings
    pub order: u32,

    pub is_visible: bool,

    /// Serialized as the adjacent `type` / `props` pair
    #[serde(flatten)]
    pub props: SectionProps,
}

impl Section {
    pub fn section_type(&self) -> SectionType {
        self.props.section_type()
    }

    /// Merge an update into this section.
    ///
    /// The new props are computed before anything is written, so a rejected
    /// update leaves the section untouched.
    pub fn apply_update(&mut self, update: &SectionUpdate) -> Result<(), MutationError> {
        let mut props = match &update.props {
            Some(replacement) => {
                if replacement.section_type() != self.section_type() {
                    return Err(MutationError::TypeMismatch {
                        expected: self.section_type(),
                        found: replacement.section_type(),
                    });
                }
                replacement.clone()
            }
            None => self.props.clone(),
        };

        if let Some(patch) = &update.props_patch {
            props = props.merged(patch)?;
        }

        self.props = props;
        if let Some(visible) = update.is_visible {
            self.is_visible = visible;
        }

        Ok(())
    }
}

/// Props variant per section type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum SectionProps {
    Header(HeaderProps),
    Hero(HeroProps),
    Features(FeaturesProps),
    About(AboutProps),
    Footer(FooterProps),
}

impl SectionProps {
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionProps::Header(_) => SectionType::Header,
            SectionProps::Hero(_) => SectionType::Hero,
            SectionProps::Features(_) => SectionType::Features,
            SectionProps::About(_) => SectionType::About,
            SectionProps::Footer(_) => SectionType::Footer,
        }
    }

    /// Shallow-merge prop fields into these props, keeping the variant
    pub fn merged(&self, patch: &Map<String, Value>) -> Result<SectionProps, MutationError> {
        let mut tagged =
            serde_json::to_value(self).map_err(|e| MutationError::InvalidProps(e.to_string()))?;

        let fields = tagged
            .get_mut("props")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| MutationError::InvalidProps("props are not an object".to_string()))?;

        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }

        serde_json::from_value(tagged).map_err(|e| MutationError::InvalidProps(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    pub href: String,
}

impl NavigationLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub logo_text: String,
    pub navigation: Vec<NavigationLink>,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub background_color: String,
    pub text_color: String,
    pub button_text: String,
    pub button_href: String,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesProps {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<FeatureItem>,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProps {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    pub company_name: String,
    pub description: String,
    pub links: Vec<NavigationLink>,
    pub social_links: Vec<SocialLink>,
    pub background_color: String,
    pub text_color: String,
}

/// A section that has not been added yet (no id, no order)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSection {
    #[serde(default = "default_visible")]
    pub is_visible: bool,

    #[serde(flatten)]
    pub props: SectionProps,
}

fn default_visible() -> bool {
    true
}

impl NewSection {
    pub fn new(props: SectionProps) -> Self {
        Self {
            is_visible: true,
            props,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn section_type(&self) -> SectionType {
        self.props.section_type()
    }
}

/// Partial update for an existing section.
///
/// There is no way to express a new `id`, `order` or `type` here; those are
/// fixed once the section exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Full replacement, must be the section's own variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<SectionProps>,

    /// Individual prop fields, applied after `props`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props_patch: Option<Map<String, Value>>,
}

impl SectionUpdate {
    pub fn visibility(visible: bool) -> Self {
        Self {
            is_visible: Some(visible),
            ..Self::default()
        }
    }

    pub fn props(props: SectionProps) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn patch(fields: Map<String, Value>) -> Self {
        Self {
            props_patch: Some(fields),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_visible.is_none() && self.props.is_none() && self.props_patch.is_none()
    }
}
