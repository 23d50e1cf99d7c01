use crate::model::records::Locale;

/// Fixed UI string table for one locale. Every supported locale must
/// fill every field; entity names come from the catalog instead.
#[derive(Debug, Clone, Copy)]
pub struct UiStrings {
    pub title: &'static str,
    pub header: &'static str,
    pub sub_header: &'static str,
    pub antibiotic_col: &'static str,
    pub legend_header: &'static str,
    pub legend_intrinsic: &'static str,
    pub legend_high: &'static str,
    pub legend_medium: &'static str,
    pub legend_low: &'static str,
    pub legend_no_data: &'static str,
}

const DE: UiStrings = UiStrings {
    title: "Antibiogramm Report",
    header: "Antibiogramm",
    sub_header: "Resistenzrate (%)",
    antibiotic_col: "Antibiotikum",
    legend_header: "Legende",
    legend_intrinsic: "Erwartete (intrinsische) Resistenz",
    legend_high: "Hohe Resistenzrate (&ge;20%)",
    legend_medium: "Mittlere Resistenzrate (10% &ndash; 19%)",
    legend_low: "Niedrige Resistenzrate (<10%)",
    legend_no_data: "Keine Daten",
};

const EN: UiStrings = UiStrings {
    title: "Antibiogram Report",
    header: "Antibiogram",
    sub_header: "Resistance Rate (%)",
    antibiotic_col: "Antibiotic",
    legend_header: "Legend",
    legend_intrinsic: "Expected (intrinsic) Resistance",
    legend_high: "High Resistance Rate (&ge;20%)",
    legend_medium: "Medium Resistance Rate (10% &ndash; 19%)",
    legend_low: "Low Resistance Rate (<10%)",
    legend_no_data: "No data",
};

pub fn ui_strings(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::De => &DE,
        Locale::En => &EN,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/locale.rs"]
mod tests;
