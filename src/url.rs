//! URL parameter builder
//!
//! Turns a [`SearchCriteria`] record into the query string of a Google
//! search URL: `q` plus the engine selectors `tbm` (vertical), `tbs`
//! (image filter bitset) and `cr` (region). All lookup tables are static;
//! output is a pure function of the record.

use crate::criteria::{ColorFilter, SearchCriteria, SearchType};
use crate::query::build_query;

/// Base endpoint the assembled parameters are appended to.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?";

/// Build the URL query string (`q=...&tbm=...&tbs=...&cr=...`) for a
/// criteria record. Empty criteria produce an empty string.
pub fn build_url_params(criteria: &SearchCriteria) -> String {
    let query = build_query(criteria);
    if query.is_empty() {
        return String::new();
    }

    let mut params = format!("q={}", encode_query(&query));

    if let Some(tbm) = criteria.search_type.tbm() {
        params.push_str("&tbm=");
        params.push_str(tbm);
    }

    if criteria.search_type == SearchType::Images {
        let codes = image_filter_codes(criteria);
        if !codes.is_empty() {
            params.push_str("&tbs=");
            params.push_str(&codes.join(","));
        }

        if let Some(country) = region_code(&criteria.region) {
            params.push_str("&cr=");
            params.push_str(country);
        }
    }

    params
}

/// Full search URL, ready to hand to the OS browser.
pub fn search_url(criteria: &SearchCriteria) -> String {
    format!("{}{}", SEARCH_ENDPOINT, build_url_params(criteria))
}

/// Percent-encode a query with spaces as `+` (the `q=` convention).
fn encode_query(query: &str) -> String {
    urlencoding::encode(query).replace("%20", "+")
}

/// Collect the `tbs` fragments for the image filter selectors, in fixed
/// order: size, aspect ratio, colour, type, usage rights.
fn image_filter_codes(criteria: &SearchCriteria) -> Vec<&'static str> {
    let mut codes = Vec::new();

    if let Some(code) = criteria.image_size.code() {
        codes.push(code);
    }
    if let Some(code) = criteria.aspect_ratio.code() {
        codes.push(code);
    }
    if let Some(code) = criteria.color_filter.code() {
        codes.push(code);
    } else if criteria.color_filter == ColorFilter::Specific {
        codes.push(criteria.specific_color.code());
    }
    if let Some(code) = criteria.image_type.code() {
        codes.push(code);
    }
    if let Some(code) = criteria.usage_rights.code() {
        codes.push(code);
    }

    codes
}

/// Region label → `cr` country code. Labels without an entry (including
/// "Any region") emit nothing.
pub fn region_code(label: &str) -> Option<&'static str> {
    match label {
        "Afghanistan" => Some("countryAF"),
        "Albania" => Some("countryAL"),
        "Algeria" => Some("countryDZ"),
        "Australia" => Some("countryAU"),
        "Brazil" => Some("countryBR"),
        "Canada" => Some("countryCA"),
        "France" => Some("countryFR"),
        "Germany" => Some("countryDE"),
        "India" => Some("countryIN"),
        "Japan" => Some("countryJP"),
        "United Kingdom" => Some("countryGB"),
        "United States" => Some("countryUS"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{
        AspectRatio, ImageSize, ImageType, SpecificColor, UsageRights, ANY_REGION,
    };

    #[test]
    fn empty_criteria_produce_empty_params() {
        assert_eq!(build_url_params(&SearchCriteria::default()), "");
    }

    #[test]
    fn spaces_encode_as_plus() {
        let criteria = SearchCriteria {
            all_words: "climate change".into(),
            ..Default::default()
        };
        assert_eq!(build_url_params(&criteria), "q=climate+change");
    }

    #[test]
    fn operators_are_percent_encoded() {
        let criteria = SearchCriteria {
            exact_phrase: "system failure".into(),
            site: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(
            build_url_params(&criteria),
            "q=%22system+failure%22+site%3Aexample.com"
        );
    }

    #[test]
    fn web_search_has_no_tbm() {
        let criteria = SearchCriteria {
            all_words: "news".into(),
            search_type: SearchType::Web,
            ..Default::default()
        };
        assert!(!build_url_params(&criteria).contains("tbm="));
    }

    #[test]
    fn verticals_select_tbm_codes() {
        let mut criteria = SearchCriteria {
            all_words: "cats".into(),
            search_type: SearchType::Videos,
            ..Default::default()
        };
        assert_eq!(build_url_params(&criteria), "q=cats&tbm=vid");

        criteria.search_type = SearchType::News;
        assert_eq!(build_url_params(&criteria), "q=cats&tbm=nws");

        criteria.search_type = SearchType::Images;
        assert_eq!(build_url_params(&criteria), "q=cats&tbm=isch");
    }

    #[test]
    fn image_filters_join_into_tbs() {
        let criteria = SearchCriteria {
            all_words: "mountain landscape".into(),
            search_type: SearchType::Images,
            image_size: ImageSize::Large,
            aspect_ratio: AspectRatio::Wide,
            image_type: ImageType::Photo,
            usage_rights: UsageRights::Share,
            ..Default::default()
        };
        assert_eq!(
            build_url_params(&criteria),
            "q=mountain+landscape&tbm=isch&tbs=isz:l,iar:w,itp:photo,sur:f"
        );
    }

    #[test]
    fn specific_color_emits_only_its_own_code() {
        let criteria = SearchCriteria {
            all_words: "roses".into(),
            search_type: SearchType::Images,
            color_filter: ColorFilter::Specific,
            specific_color: SpecificColor::Red,
            ..Default::default()
        };
        let params = build_url_params(&criteria);
        assert!(params.contains("tbs=isc:red"));
        assert!(!params.contains("isc:black"));
        assert!(!params.contains("isc:white"));
        assert!(!params.contains("ic:"));
    }

    #[test]
    fn specific_color_ignored_under_other_filters() {
        let criteria = SearchCriteria {
            all_words: "roses".into(),
            search_type: SearchType::Images,
            color_filter: ColorFilter::BlackAndWhite,
            specific_color: SpecificColor::Red,
            ..Default::default()
        };
        let params = build_url_params(&criteria);
        assert!(params.contains("tbs=ic:gray"));
        assert!(!params.contains("isc:red"));
    }

    #[test]
    fn default_image_filters_emit_no_tbs() {
        let criteria = SearchCriteria {
            all_words: "cats".into(),
            search_type: SearchType::Images,
            ..Default::default()
        };
        assert_eq!(build_url_params(&criteria), "q=cats&tbm=isch");
    }

    #[test]
    fn region_applies_to_image_search_only() {
        let mut criteria = SearchCriteria {
            all_words: "cats".into(),
            search_type: SearchType::Images,
            region: "Japan".into(),
            ..Default::default()
        };
        assert_eq!(build_url_params(&criteria), "q=cats&tbm=isch&cr=countryJP");

        criteria.search_type = SearchType::Web;
        assert_eq!(build_url_params(&criteria), "q=cats");
    }

    #[test]
    fn unmapped_region_labels_emit_nothing() {
        assert_eq!(region_code(ANY_REGION), None);
        assert_eq!(region_code("Atlantis"), None);

        let criteria = SearchCriteria {
            all_words: "cats".into(),
            search_type: SearchType::Images,
            region: "Atlantis".into(),
            ..Default::default()
        };
        assert!(!build_url_params(&criteria).contains("cr="));
    }

    #[test]
    fn search_url_prepends_endpoint() {
        let criteria = SearchCriteria {
            all_words: "cats".into(),
            ..Default::default()
        };
        assert_eq!(search_url(&criteria), "https://www.google.com/search?q=cats");
    }
}
