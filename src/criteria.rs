//! The search criteria record and its enum-valued selectors.
//!
//! One flat record mirrors the form: free-text operator fields, enum
//! selectors for terms location / search type / image filters, and two
//! optional dates. All fields are independent except `specific_color`,
//! which only matters while `color_filter` is [`ColorFilter::Specific`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Selector enums
// ============================================================================

/// Where the "all these words" terms must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsLocation {
    #[default]
    Anywhere,
    Title,
    Text,
    Url,
    Links,
}

impl TermsLocation {
    pub fn label(&self) -> &'static str {
        match self {
            TermsLocation::Anywhere => "anywhere in the page",
            TermsLocation::Title => "in the title of the page",
            TermsLocation::Text => "in the text of the page",
            TermsLocation::Url => "in the URL of the page",
            TermsLocation::Links => "in links to the page",
        }
    }

    /// Operator prefix for the all-words group, `None` for `Anywhere`.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            TermsLocation::Anywhere => None,
            TermsLocation::Title => Some("allintitle:"),
            TermsLocation::Text => Some("allintext:"),
            TermsLocation::Url => Some("allinurl:"),
            TermsLocation::Links => Some("allinanchor:"),
        }
    }

    pub fn all() -> &'static [TermsLocation] {
        &[
            TermsLocation::Anywhere,
            TermsLocation::Title,
            TermsLocation::Text,
            TermsLocation::Url,
            TermsLocation::Links,
        ]
    }
}

/// Google vertical to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    Web,
    Images,
    Videos,
    News,
}

impl SearchType {
    pub fn label(&self) -> &'static str {
        match self {
            SearchType::Web => "Web",
            SearchType::Images => "Images",
            SearchType::Videos => "Videos",
            SearchType::News => "News",
        }
    }

    /// `tbm` parameter value; `None` for plain web search.
    pub fn tbm(&self) -> Option<&'static str> {
        match self {
            SearchType::Web => None,
            SearchType::Images => Some("isch"),
            SearchType::Videos => Some("vid"),
            SearchType::News => Some("nws"),
        }
    }

    pub fn all() -> &'static [SearchType] {
        &[
            SearchType::Web,
            SearchType::Images,
            SearchType::Videos,
            SearchType::News,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    Any,
    Large,
    Medium,
    Icon,
}

impl ImageSize {
    pub fn label(&self) -> &'static str {
        match self {
            ImageSize::Any => "Any size",
            ImageSize::Large => "Large",
            ImageSize::Medium => "Medium",
            ImageSize::Icon => "Icon",
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ImageSize::Any => None,
            ImageSize::Large => Some("isz:l"),
            ImageSize::Medium => Some("isz:m"),
            ImageSize::Icon => Some("isz:i"),
        }
    }

    pub fn all() -> &'static [ImageSize] {
        &[ImageSize::Any, ImageSize::Large, ImageSize::Medium, ImageSize::Icon]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    Any,
    Square,
    Tall,
    Wide,
    Panoramic,
}

impl AspectRatio {
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Any => "Any aspect ratio",
            AspectRatio::Square => "Square",
            AspectRatio::Tall => "Tall",
            AspectRatio::Wide => "Wide",
            AspectRatio::Panoramic => "Panoramic",
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            AspectRatio::Any => None,
            AspectRatio::Square => Some("iar:s"),
            AspectRatio::Tall => Some("iar:t"),
            AspectRatio::Wide => Some("iar:w"),
            AspectRatio::Panoramic => Some("iar:xw"),
        }
    }

    pub fn all() -> &'static [AspectRatio] {
        &[
            AspectRatio::Any,
            AspectRatio::Square,
            AspectRatio::Tall,
            AspectRatio::Wide,
            AspectRatio::Panoramic,
        ]
    }
}

/// Colour filter. `Specific` is a sentinel: the actual colour comes from
/// the separate [`SpecificColor`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorFilter {
    #[default]
    Any,
    FullColor,
    BlackAndWhite,
    Transparent,
    Specific,
}

impl ColorFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ColorFilter::Any => "Any color",
            ColorFilter::FullColor => "Full color",
            ColorFilter::BlackAndWhite => "Black and white",
            ColorFilter::Transparent => "Transparent",
            ColorFilter::Specific => "Specific color",
        }
    }

    /// `tbs` code for the fixed filters; `Specific` contributes through
    /// [`SpecificColor::code`] instead.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ColorFilter::FullColor => Some("ic:color"),
            ColorFilter::BlackAndWhite => Some("ic:gray"),
            ColorFilter::Transparent => Some("ic:trans"),
            ColorFilter::Any | ColorFilter::Specific => None,
        }
    }

    pub fn all() -> &'static [ColorFilter] {
        &[
            ColorFilter::Any,
            ColorFilter::FullColor,
            ColorFilter::BlackAndWhite,
            ColorFilter::Transparent,
            ColorFilter::Specific,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecificColor {
    #[default]
    Black,
    Blue,
    Brown,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

impl SpecificColor {
    pub fn label(&self) -> &'static str {
        match self {
            SpecificColor::Black => "Black",
            SpecificColor::Blue => "Blue",
            SpecificColor::Brown => "Brown",
            SpecificColor::Gray => "Gray",
            SpecificColor::Green => "Green",
            SpecificColor::Orange => "Orange",
            SpecificColor::Pink => "Pink",
            SpecificColor::Purple => "Purple",
            SpecificColor::Red => "Red",
            SpecificColor::Teal => "Teal",
            SpecificColor::White => "White",
            SpecificColor::Yellow => "Yellow",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SpecificColor::Black => "isc:black",
            SpecificColor::Blue => "isc:blue",
            SpecificColor::Brown => "isc:brown",
            SpecificColor::Gray => "isc:gray",
            SpecificColor::Green => "isc:green",
            SpecificColor::Orange => "isc:orange",
            SpecificColor::Pink => "isc:pink",
            SpecificColor::Purple => "isc:purple",
            SpecificColor::Red => "isc:red",
            SpecificColor::Teal => "isc:teal",
            SpecificColor::White => "isc:white",
            SpecificColor::Yellow => "isc:yellow",
        }
    }

    pub fn all() -> &'static [SpecificColor] {
        &[
            SpecificColor::Black,
            SpecificColor::Blue,
            SpecificColor::Brown,
            SpecificColor::Gray,
            SpecificColor::Green,
            SpecificColor::Orange,
            SpecificColor::Pink,
            SpecificColor::Purple,
            SpecificColor::Red,
            SpecificColor::Teal,
            SpecificColor::White,
            SpecificColor::Yellow,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageType {
    #[default]
    Any,
    Face,
    Photo,
    ClipArt,
    LineDrawing,
    Animated,
}

impl ImageType {
    pub fn label(&self) -> &'static str {
        match self {
            ImageType::Any => "Any type",
            ImageType::Face => "Face",
            ImageType::Photo => "Photo",
            ImageType::ClipArt => "Clip art",
            ImageType::LineDrawing => "Line drawing",
            ImageType::Animated => "Animated",
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ImageType::Any => None,
            ImageType::Face => Some("itp:face"),
            ImageType::Photo => Some("itp:photo"),
            ImageType::ClipArt => Some("itp:clipart"),
            ImageType::LineDrawing => Some("itp:lineart"),
            ImageType::Animated => Some("itp:animated"),
        }
    }

    pub fn all() -> &'static [ImageType] {
        &[
            ImageType::Any,
            ImageType::Face,
            ImageType::Photo,
            ImageType::ClipArt,
            ImageType::LineDrawing,
            ImageType::Animated,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UsageRights {
    #[default]
    All,
    Share,
    ShareCommercially,
    Modify,
    ModifyCommercially,
}

impl UsageRights {
    pub fn label(&self) -> &'static str {
        match self {
            UsageRights::All => "All",
            UsageRights::Share => "Free to use or share",
            UsageRights::ShareCommercially => "Free to use or share commercially",
            UsageRights::Modify => "Free to use or share or modify",
            UsageRights::ModifyCommercially => "Free to use or share or modify commercially",
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            UsageRights::All => None,
            UsageRights::Share => Some("sur:f"),
            UsageRights::ShareCommercially => Some("sur:fc"),
            UsageRights::Modify => Some("sur:fm"),
            UsageRights::ModifyCommercially => Some("sur:fmc"),
        }
    }

    pub fn all() -> &'static [UsageRights] {
        &[
            UsageRights::All,
            UsageRights::Share,
            UsageRights::ShareCommercially,
            UsageRights::Modify,
            UsageRights::ModifyCommercially,
        ]
    }
}

// ============================================================================
// The criteria record
// ============================================================================

/// Default region label; unmapped labels emit no `cr` parameter.
pub const ANY_REGION: &str = "Any region";

/// Region labels offered in the form, in combo order.
pub const REGIONS: &[&str] = &[
    ANY_REGION,
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "India",
    "Japan",
    "Brazil",
    "Afghanistan",
    "Albania",
    "Algeria",
];

/// One complete set of search criteria, gathered from the form on every
/// preview refresh and stored by value in the recent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub all_words: String,
    pub terms_location: TermsLocation,
    pub exact_phrase: String,
    pub exclude_words: String,
    pub or_words: String,
    pub site: String,
    pub filetype: String,
    pub intitle: String,
    pub inurl: String,
    pub range_from: String,
    pub range_to: String,
    pub range_unit: String,
    pub before: Option<NaiveDate>,
    pub after: Option<NaiveDate>,
    pub search_type: SearchType,
    pub image_size: ImageSize,
    pub aspect_ratio: AspectRatio,
    pub color_filter: ColorFilter,
    pub specific_color: SpecificColor,
    pub image_type: ImageType,
    pub region: String,
    pub usage_rights: UsageRights,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            all_words: String::new(),
            terms_location: TermsLocation::default(),
            exact_phrase: String::new(),
            exclude_words: String::new(),
            or_words: String::new(),
            site: String::new(),
            filetype: String::new(),
            intitle: String::new(),
            inurl: String::new(),
            range_from: String::new(),
            range_to: String::new(),
            range_unit: String::new(),
            before: None,
            after: None,
            search_type: SearchType::default(),
            image_size: ImageSize::default(),
            aspect_ratio: AspectRatio::default(),
            color_filter: ColorFilter::default(),
            specific_color: SpecificColor::default(),
            image_type: ImageType::default(),
            region: ANY_REGION.to_string(),
            usage_rights: UsageRights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_any() {
        let criteria = SearchCriteria::default();
        assert_eq!(criteria.region, ANY_REGION);
        assert_eq!(REGIONS[0], ANY_REGION);
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let criteria = SearchCriteria {
            all_words: "laptop".into(),
            terms_location: TermsLocation::Title,
            exact_phrase: "gaming rig".into(),
            exclude_words: "used refurbished".into(),
            or_words: "asus|lenovo".into(),
            site: "reviews.com".into(),
            filetype: "pdf".into(),
            intitle: "2023".into(),
            inurl: "deals".into(),
            range_from: "500".into(),
            range_to: "1000".into(),
            range_unit: "$".into(),
            before: NaiveDate::from_ymd_opt(2024, 6, 1),
            after: NaiveDate::from_ymd_opt(2023, 6, 1),
            search_type: SearchType::Images,
            image_size: ImageSize::Large,
            aspect_ratio: AspectRatio::Wide,
            color_filter: ColorFilter::Specific,
            specific_color: SpecificColor::Red,
            image_type: ImageType::Photo,
            region: "Japan".into(),
            usage_rights: UsageRights::ShareCommercially,
        };

        let json = serde_json::to_string(&criteria).unwrap();
        let restored: SearchCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, criteria);
    }

    #[test]
    fn deserialize_tolerates_missing_fields() {
        let restored: SearchCriteria = serde_json::from_str(r#"{"all_words":"cats"}"#).unwrap();
        assert_eq!(restored.all_words, "cats");
        assert_eq!(restored.search_type, SearchType::Web);
        assert_eq!(restored.region, ANY_REGION);
    }

    #[test]
    fn tbm_codes_match_verticals() {
        assert_eq!(SearchType::Web.tbm(), None);
        assert_eq!(SearchType::Images.tbm(), Some("isch"));
        assert_eq!(SearchType::Videos.tbm(), Some("vid"));
        assert_eq!(SearchType::News.tbm(), Some("nws"));
    }

    #[test]
    fn every_combo_lists_its_default_first() {
        assert_eq!(TermsLocation::all()[0], TermsLocation::default());
        assert_eq!(SearchType::all()[0], SearchType::default());
        assert_eq!(ImageSize::all()[0], ImageSize::default());
        assert_eq!(AspectRatio::all()[0], AspectRatio::default());
        assert_eq!(ColorFilter::all()[0], ColorFilter::default());
        assert_eq!(ImageType::all()[0], ImageType::default());
        assert_eq!(UsageRights::all()[0], UsageRights::default());
    }
}
