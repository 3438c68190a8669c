//! Static catalog of section templates and their default content.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::section::{
    AboutProps, Alignment, FeatureItem, FeaturesProps, FooterProps, HeaderProps, HeroProps,
    NavigationLink, NewSection, SectionProps, SectionType, SocialLink,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
    Marketing,
    Navigation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Layout,
        Category::Content,
        Category::Marketing,
        Category::Navigation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Content => "content",
            Category::Marketing => "marketing",
            Category::Navigation => "navigation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid category: {}. Use: layout, content, marketing, or navigation",
                    s
                )
            })
    }
}

/// Display metadata for one addable section template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionLibraryItem {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Style tokens for the thumbnail
    pub preview: &'static str,
    pub category: Category,
}

pub const SECTION_LIBRARY: [SectionLibraryItem; 5] = [
    SectionLibraryItem {
        id: "header-1",
        section_type: SectionType::Header,
        name: "Header",
        description: "Navigation header with logo and menu",
        icon: "Navigation",
        preview: "bg-white border-b p-2 flex items-center justify-between",
        category: Category::Navigation,
    },
    SectionLibraryItem {
        id: "hero-1",
        section_type: SectionType::Hero,
        name: "Hero Section",
        description: "Eye-catching hero with title and CTA",
        icon: "Zap",
        preview: "bg-gradient-to-r from-blue-500 to-purple-600 text-white p-2 text-center",
        category: Category::Marketing,
    },
    SectionLibraryItem {
        id: "features-1",
        section_type: SectionType::Features,
        name: "Features Grid",
        description: "Showcase your key features",
        icon: "Grid3X3",
        preview: "bg-gray-50 p-2",
        category: Category::Content,
    },
    SectionLibraryItem {
        id: "about-1",
        section_type: SectionType::About,
        name: "About Section",
        description: "Tell your story and mission",
        icon: "Users",
        preview: "bg-white p-2",
        category: Category::Content,
    },
    SectionLibraryItem {
        id: "footer-1",
        section_type: SectionType::Footer,
        name: "Footer",
        description: "Site footer with links and info",
        icon: "Square",
        preview: "bg-gray-900 text-white p-2",
        category: Category::Layout,
    },
];

pub fn library_by_category(category: Category) -> Vec<&'static SectionLibraryItem> {
    SECTION_LIBRARY
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

pub fn library_item(section_type: SectionType) -> &'static SectionLibraryItem {
    let index = match section_type {
        SectionType::Header => 0,
        SectionType::Hero => 1,
        SectionType::Features => 2,
        SectionType::About => 3,
        SectionType::Footer => 4,
    };
    &SECTION_LIBRARY[index]
}

/// Default payload used when a section is added from the library
pub fn default_section(section_type: SectionType) -> NewSection {
    NewSection::new(default_props(section_type))
}

pub fn default_props(section_type: SectionType) -> SectionProps {
    match section_type {
        SectionType::Header => SectionProps::Header(HeaderProps {
            logo: None,
            logo_text: "Logo".to_string(),
            navigation: vec![
                NavigationLink::new("Home", "#"),
                NavigationLink::new("About", "#"),
                NavigationLink::new("Contact", "#"),
            ],
            background_color: "bg-white".to_string(),
            text_color: "text-gray-900".to_string(),
        }),
        SectionType::Hero => SectionProps::Hero(HeroProps {
            title: "Welcome to Our Website".to_string(),
            subtitle: "Build amazing websites with ease".to_string(),
            background_image: None,
            background_color: "bg-gradient-to-r from-blue-500 to-purple-600".to_string(),
            text_color: "text-white".to_string(),
            button_text: "Get Started".to_string(),
            button_href: "#".to_string(),
            alignment: Alignment::Center,
        }),
        SectionType::Features => SectionProps::Features(FeaturesProps {
            title: "Our Features".to_string(),
            subtitle: "What makes us special".to_string(),
            features: (1..=3)
                .map(|n| FeatureItem {
                    icon: None,
                    title: format!("Feature {}", n),
                    description: format!("Description for feature {}", n),
                })
                .collect(),
            background_color: "bg-gray-50".to_string(),
            text_color: "text-gray-900".to_string(),
        }),
        SectionType::About => SectionProps::About(AboutProps {
            title: "About Us".to_string(),
            content: "We are a team of passionate developers...".to_string(),
            image: None,
            background_color: "bg-white".to_string(),
            text_color: "text-gray-900".to_string(),
        }),
        SectionType::Footer => SectionProps::Footer(FooterProps {
            company_name: "Your Company".to_string(),
            description: "Building amazing websites".to_string(),
            links: vec![
                NavigationLink::new("Privacy Policy", "#"),
                NavigationLink::new("Terms of Service", "#"),
            ],
            social_links: vec![
                SocialLink {
                    platform: "Twitter".to_string(),
                    url: "#".to_string(),
                },
                SocialLink {
                    platform: "Linkedin".to_string(),
                    url: "#".to_string(),
                },
            ],
            background_color: "bg-gray-900".to_string(),
            text_color: "text-white".to_string(),
        }),
    }
}
