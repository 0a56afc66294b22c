//! Canned example searches for the Examples menu.
//!
//! Each preset builds a complete criteria record from scratch; relative
//! dates are computed against today when the preset is applied, not when
//! the program starts.

use chrono::{Local, Months, NaiveDate};

use crate::criteria::{ColorFilter, SearchCriteria, SearchType, SpecificColor, TermsLocation};

/// One menu entry: a label plus a criteria constructor.
pub struct Preset {
    pub label: &'static str,
    build: fn() -> SearchCriteria,
}

impl Preset {
    /// Build a fresh criteria record for this preset.
    pub fn criteria(&self) -> SearchCriteria {
        (self.build)()
    }
}

/// All presets, in menu order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn months_ago(months: u32) -> Option<NaiveDate> {
    today().checked_sub_months(Months::new(months))
}

static PRESETS: &[Preset] = &[
    Preset {
        label: "Find PDFs on example.com",
        build: || SearchCriteria {
            all_words: "annual report".into(),
            site: "example.com".into(),
            filetype: "pdf".into(),
            after: months_ago(12),
            ..Default::default()
        },
    },
    Preset {
        label: "Exact phrase + exclude",
        build: || SearchCriteria {
            exact_phrase: "system failure analysis".into(),
            exclude_words: "draft sample".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Price range for laptops",
        build: || SearchCriteria {
            all_words: "laptop".into(),
            range_from: "500".into(),
            range_to: "1000".into(),
            range_unit: "$".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Recipes with ingredients OR",
        build: || SearchCriteria {
            all_words: "recipe".into(),
            or_words: "chicken|beef|tofu".into(),
            exclude_words: "fried".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "News articles in last month",
        build: || SearchCriteria {
            all_words: "climate change".into(),
            site: "news.com".into(),
            after: months_ago(1),
            ..Default::default()
        },
    },
    Preset {
        label: "Tutorials in URL",
        build: || SearchCriteria {
            all_words: "python tutorial".into(),
            inurl: "beginner".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Files excluding certain types",
        build: || SearchCriteria {
            all_words: "project management".into(),
            filetype: "pdf".into(),
            exclude_words: "pptx xlsx".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Books in title",
        build: || SearchCriteria {
            intitle: "best books 2023".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Events in specific year range",
        build: || SearchCriteria {
            all_words: "olympic games".into(),
            range_from: "2000".into(),
            range_to: "2020".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Products in price range with unit",
        build: || SearchCriteria {
            all_words: "smartphone".into(),
            range_from: "200".into(),
            range_to: "500".into(),
            range_unit: "€".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Research papers on site",
        build: || SearchCriteria {
            all_words: "machine learning".into(),
            site: "arxiv.org".into(),
            filetype: "pdf".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Quotes exact phrase",
        build: || SearchCriteria {
            all_words: "shakespeare".into(),
            exact_phrase: "to be or not to be".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Exclude common sites",
        build: || SearchCriteria {
            all_words: "diy home repair".into(),
            exclude_words: "youtube pinterest".into(),
            ..Default::default()
        },
    },
    Preset {
        label: "Images by file type",
        build: || SearchCriteria {
            all_words: "mountain landscape".into(),
            filetype: "jpg".into(),
            search_type: SearchType::Images,
            ..Default::default()
        },
    },
    Preset {
        label: "Videos in URL",
        build: || SearchCriteria {
            all_words: "cooking tutorial".into(),
            inurl: "video".into(),
            search_type: SearchType::Videos,
            ..Default::default()
        },
    },
    Preset {
        label: "All words in text",
        build: || SearchCriteria {
            all_words: "quantum computing basics".into(),
            terms_location: TermsLocation::Text,
            ..Default::default()
        },
    },
    Preset {
        label: "Links to page with anchor",
        build: || SearchCriteria {
            all_words: "recommended reading".into(),
            terms_location: TermsLocation::Links,
            ..Default::default()
        },
    },
    Preset {
        label: "Date range for historical events",
        build: || SearchCriteria {
            all_words: "world war ii".into(),
            after: NaiveDate::from_ymd_opt(1939, 1, 1),
            before: NaiveDate::from_ymd_opt(1945, 12, 31),
            ..Default::default()
        },
    },
    Preset {
        label: "Red images of a subject",
        build: || SearchCriteria {
            all_words: "sports car".into(),
            search_type: SearchType::Images,
            color_filter: ColorFilter::Specific,
            specific_color: SpecificColor::Red,
            ..Default::default()
        },
    },
    Preset {
        label: "Combined operators",
        build: || SearchCriteria {
            all_words: "electric car".into(),
            or_words: "tesla|rivian|nissan".into(),
            exclude_words: "used".into(),
            site: "reviews.com".into(),
            intitle: "2023".into(),
            ..Default::default()
        },
    },
];
