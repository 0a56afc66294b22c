//! Form state: the widget-backed fields behind the criteria record.
//!
//! The form keeps the two date checkboxes separate from the picked dates;
//! [`FormState::criteria`] collapses them into the record's optional date
//! fields on every gather.

use chrono::{Days, Local, Months, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::criteria::{
    AspectRatio, ColorFilter, ImageSize, ImageType, SearchCriteria, SearchType, SpecificColor,
    TermsLocation, UsageRights, ANY_REGION, REGIONS,
};

// ============================================================================
// Quick date presets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    PastDay,
    PastWeek,
    PastMonth,
    PastYear,
}

impl QuickRange {
    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::PastDay => "Past 24h",
            QuickRange::PastWeek => "Past week",
            QuickRange::PastMonth => "Past month",
            QuickRange::PastYear => "Past year",
        }
    }

    /// Start date of the range, counting back from `today`.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            QuickRange::PastDay => today.checked_sub_days(Days::new(1)),
            QuickRange::PastWeek => today.checked_sub_days(Days::new(7)),
            QuickRange::PastMonth => today.checked_sub_months(Months::new(1)),
            QuickRange::PastYear => today.checked_sub_months(Months::new(12)),
        }
        .unwrap_or(today)
    }

    pub fn all() -> &'static [QuickRange] {
        &[
            QuickRange::PastDay,
            QuickRange::PastWeek,
            QuickRange::PastMonth,
            QuickRange::PastYear,
        ]
    }
}

// ============================================================================
// Form state
// ============================================================================

pub struct FormState {
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
    pub use_after: bool,
    pub after_date: NaiveDate,
    pub use_before: bool,
    pub before_date: NaiveDate,
    pub search_type: SearchType,
    pub image_size: ImageSize,
    pub aspect_ratio: AspectRatio,
    pub color_filter: ColorFilter,
    pub specific_color: SpecificColor,
    pub image_type: ImageType,
    pub region: String,
    pub usage_rights: UsageRights,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
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
            use_after: false,
            after_date: today.checked_sub_days(Days::new(30)).unwrap_or(today),
            use_before: false,
            before_date: today,
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

    /// Gather the current form state into a criteria record. The date
    /// checkboxes collapse into the optional date fields here.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            all_words: self.all_words.clone(),
            terms_location: self.terms_location,
            exact_phrase: self.exact_phrase.clone(),
            exclude_words: self.exclude_words.clone(),
            or_words: self.or_words.clone(),
            site: self.site.clone(),
            filetype: self.filetype.clone(),
            intitle: self.intitle.clone(),
            inurl: self.inurl.clone(),
            range_from: self.range_from.clone(),
            range_to: self.range_to.clone(),
            range_unit: self.range_unit.clone(),
            before: self.use_before.then_some(self.before_date),
            after: self.use_after.then_some(self.after_date),
            search_type: self.search_type,
            image_size: self.image_size,
            aspect_ratio: self.aspect_ratio,
            color_filter: self.color_filter,
            specific_color: self.specific_color,
            image_type: self.image_type,
            region: self.region.clone(),
            usage_rights: self.usage_rights,
        }
    }

    /// Restore the form from a saved criteria record.
    pub fn apply(&mut self, criteria: &SearchCriteria) {
        self.all_words = criteria.all_words.clone();
        self.terms_location = criteria.terms_location;
        self.exact_phrase = criteria.exact_phrase.clone();
        self.exclude_words = criteria.exclude_words.clone();
        self.or_words = criteria.or_words.clone();
        self.site = criteria.site.clone();
        self.filetype = criteria.filetype.clone();
        self.intitle = criteria.intitle.clone();
        self.inurl = criteria.inurl.clone();
        self.range_from = criteria.range_from.clone();
        self.range_to = criteria.range_to.clone();
        self.range_unit = criteria.range_unit.clone();
        match criteria.after {
            Some(date) => {
                self.after_date = date;
                self.use_after = true;
            }
            None => self.use_after = false,
        }
        match criteria.before {
            Some(date) => {
                self.before_date = date;
                self.use_before = true;
            }
            None => self.use_before = false,
        }
        self.search_type = criteria.search_type;
        self.image_size = criteria.image_size;
        self.aspect_ratio = criteria.aspect_ratio;
        self.color_filter = criteria.color_filter;
        self.specific_color = criteria.specific_color;
        self.image_type = criteria.image_type;
        self.region = criteria.region.clone();
        self.usage_rights = criteria.usage_rights;
    }

    /// Reset every field, including the date pickers.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Apply a quick date preset: sets `after` to the range start and
    /// clears `before`.
    pub fn apply_quick_range(&mut self, range: QuickRange) {
        self.after_date = range.start(Local::now().date_naive());
        self.use_after = true;
        self.use_before = false;
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the operator fields. Returns true when anything changed.
    pub fn show_fields(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        egui::Grid::new("criteria_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("All these words:");
                ui.horizontal(|ui| {
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.all_words)
                                .hint_text("words separated by spaces (must all appear)")
                                .desired_width(280.0),
                        )
                        .changed();
                    egui::ComboBox::from_id_salt("terms_location")
                        .selected_text(self.terms_location.label())
                        .show_ui(ui, |ui| {
                            for location in TermsLocation::all() {
                                changed |= ui
                                    .selectable_value(
                                        &mut self.terms_location,
                                        *location,
                                        location.label(),
                                    )
                                    .changed();
                            }
                        });
                });
                ui.end_row();

                ui.label("This exact word or phrase:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.exact_phrase)
                            .hint_text("exact phrase (will be quoted)")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("None of these words (-):");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.exclude_words)
                            .hint_text("words to exclude (space-separated)")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("Any of these words (OR):");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.or_words)
                            .hint_text("word1|word2|word3")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("Site or domain:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.site)
                            .hint_text("example.com")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("File type:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.filetype)
                            .hint_text("pdf, docx, xls")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("intitle:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.intitle)
                            .hint_text("words that must appear in the title")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("inurl:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut self.inurl)
                            .hint_text("words in the URL")
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
                ui.end_row();

                ui.label("Numbers ranging from:");
                ui.horizontal(|ui| {
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.range_from)
                                .hint_text("from")
                                .desired_width(80.0),
                        )
                        .changed();
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.range_to)
                                .hint_text("to")
                                .desired_width(80.0),
                        )
                        .changed();
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.range_unit)
                                .hint_text("unit e.g. $ (optional)")
                                .desired_width(120.0),
                        )
                        .changed();
                });
                ui.end_row();

                ui.label("Date range (optional):");
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        changed |= ui.checkbox(&mut self.use_after, "after").changed();
                        changed |= ui
                            .add(DatePickerButton::new(&mut self.after_date).id_salt("after_date"))
                            .changed();
                        ui.add_space(12.0);
                        changed |= ui.checkbox(&mut self.use_before, "before").changed();
                        changed |= ui
                            .add(
                                DatePickerButton::new(&mut self.before_date).id_salt("before_date"),
                            )
                            .changed();
                    });
                    ui.horizontal(|ui| {
                        for range in QuickRange::all() {
                            if ui.button(range.label()).clicked() {
                                self.apply_quick_range(*range);
                                changed = true;
                            }
                        }
                    });
                });
                ui.end_row();
            });

        changed
    }

    /// Render the image search options, enabled only for image search.
    pub fn show_image_options(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.add_enabled_ui(self.search_type == SearchType::Images, |ui| {
            ui.group(|ui| {
                ui.label(egui::RichText::new("Image Search Options").strong());
                egui::Grid::new("image_options")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Image size:");
                        egui::ComboBox::from_id_salt("image_size")
                            .selected_text(self.image_size.label())
                            .show_ui(ui, |ui| {
                                for size in ImageSize::all() {
                                    changed |= ui
                                        .selectable_value(&mut self.image_size, *size, size.label())
                                        .changed();
                                }
                            });
                        ui.end_row();

                        ui.label("Aspect ratio:");
                        egui::ComboBox::from_id_salt("aspect_ratio")
                            .selected_text(self.aspect_ratio.label())
                            .show_ui(ui, |ui| {
                                for ratio in AspectRatio::all() {
                                    changed |= ui
                                        .selectable_value(
                                            &mut self.aspect_ratio,
                                            *ratio,
                                            ratio.label(),
                                        )
                                        .changed();
                                }
                            });
                        ui.end_row();

                        ui.label("Colors in image:");
                        ui.horizontal(|ui| {
                            egui::ComboBox::from_id_salt("color_filter")
                                .selected_text(self.color_filter.label())
                                .show_ui(ui, |ui| {
                                    for filter in ColorFilter::all() {
                                        changed |= ui
                                            .selectable_value(
                                                &mut self.color_filter,
                                                *filter,
                                                filter.label(),
                                            )
                                            .changed();
                                    }
                                });
                            if self.color_filter == ColorFilter::Specific {
                                egui::ComboBox::from_id_salt("specific_color")
                                    .selected_text(self.specific_color.label())
                                    .show_ui(ui, |ui| {
                                        for color in SpecificColor::all() {
                                            changed |= ui
                                                .selectable_value(
                                                    &mut self.specific_color,
                                                    *color,
                                                    color.label(),
                                                )
                                                .changed();
                                        }
                                    });
                            }
                        });
                        ui.end_row();

                        ui.label("Type of image:");
                        egui::ComboBox::from_id_salt("image_type")
                            .selected_text(self.image_type.label())
                            .show_ui(ui, |ui| {
                                for kind in ImageType::all() {
                                    changed |= ui
                                        .selectable_value(&mut self.image_type, *kind, kind.label())
                                        .changed();
                                }
                            });
                        ui.end_row();

                        ui.label("Region:");
                        egui::ComboBox::from_id_salt("region")
                            .selected_text(self.region.clone())
                            .show_ui(ui, |ui| {
                                for region in REGIONS {
                                    changed |= ui
                                        .selectable_value(
                                            &mut self.region,
                                            region.to_string(),
                                            *region,
                                        )
                                        .changed();
                                }
                            });
                        ui.end_row();

                        ui.label("Usage rights:");
                        egui::ComboBox::from_id_salt("usage_rights")
                            .selected_text(self.usage_rights.label())
                            .show_ui(ui, |ui| {
                                for rights in UsageRights::all() {
                                    changed |= ui
                                        .selectable_value(
                                            &mut self.usage_rights,
                                            *rights,
                                            rights.label(),
                                        )
                                        .changed();
                                }
                            });
                        ui.end_row();
                    });
            });
        });

        changed
    }

    /// Render the search type selector row.
    pub fn show_search_type(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Search type:");
            egui::ComboBox::from_id_salt("search_type")
                .selected_text(self.search_type.label())
                .show_ui(ui, |ui| {
                    for kind in SearchType::all() {
                        changed |= ui
                            .selectable_value(&mut self.search_type, *kind, kind.label())
                            .changed();
                    }
                });
        });
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn unchecked_dates_collapse_to_none() {
        let form = FormState::new();
        let criteria = form.criteria();
        assert_eq!(criteria.before, None);
        assert_eq!(criteria.after, None);
    }

    #[test]
    fn checked_dates_flow_into_the_record() {
        let mut form = FormState::new();
        form.use_after = true;
        form.after_date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        form.use_before = true;
        form.before_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let criteria = form.criteria();
        assert_eq!(criteria.after, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(criteria.before, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn apply_then_gather_round_trips_the_record() {
        let criteria = SearchCriteria {
            all_words: "electric car".into(),
            terms_location: TermsLocation::Title,
            or_words: "tesla|rivian".into(),
            range_from: "200".into(),
            range_to: "500".into(),
            range_unit: "$".into(),
            after: NaiveDate::from_ymd_opt(2023, 1, 1),
            search_type: SearchType::Images,
            image_size: ImageSize::Large,
            color_filter: ColorFilter::Specific,
            specific_color: SpecificColor::Teal,
            region: "Canada".into(),
            ..Default::default()
        };

        let mut form = FormState::new();
        form.apply(&criteria);
        assert_eq!(form.criteria(), criteria);
    }

    #[test]
    fn clear_resets_dates_and_selectors() {
        let mut form = FormState::new();
        form.all_words = "cats".into();
        form.use_after = true;
        form.search_type = SearchType::News;

        form.clear();
        assert!(form.all_words.is_empty());
        assert!(!form.use_after);
        assert_eq!(form.search_type, SearchType::Web);
    }

    #[test]
    fn quick_range_sets_after_and_clears_before() {
        let mut form = FormState::new();
        form.use_before = true;
        form.apply_quick_range(QuickRange::PastWeek);

        assert!(form.use_after);
        assert!(!form.use_before);
        let today = Local::now().date_naive();
        assert_eq!(form.after_date, QuickRange::PastWeek.start(today));
    }
}
