use std::fmt::Write;

use crate::input::Catalog;
use crate::model::records::Locale;
use crate::model::thresholds::{ResistanceBand, classify};
use crate::pipeline::stage3_pivot::Matrix;
use crate::report::locale::ui_strings;
use crate::report::{ReportError, contiguous_spans};

pub fn fill_color(band: ResistanceBand) -> &'static str {
    match band {
        ResistanceBand::Intrinsic => "#a50026",
        ResistanceBand::High => "#d73027",
        ResistanceBand::Medium => "#fee08b",
        ResistanceBand::Low => "#1a9850",
        ResistanceBand::NoData => "#f0f0f0",
    }
}

pub fn text_color(band: ResistanceBand) -> &'static str {
    match band {
        ResistanceBand::Intrinsic | ResistanceBand::High => "#ffffff",
        _ => "#000000",
    }
}

pub fn cell_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 100.0 => "R".to_string(),
        Some(v) => format!("{v:.0}"),
        None => String::new(),
    }
}

pub fn html_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full localized document: three column header bands
/// (super-class spans, class spans, vertical organism labels), the body
/// grouped into antibiotic-class row bands, and the legend. The matrix
/// must already be in final row/column order; header spans are plain
/// run-length groupings over neighboring columns.
pub fn render_html(
    matrix: &Matrix,
    catalog: &Catalog,
    locale: Locale,
) -> Result<String, ReportError> {
    let t = ui_strings(locale);
    let mut html = String::with_capacity(64 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"{}\">", locale.code())?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(html, "<title>{}</title>", t.title)?;
    writeln!(html, "<style>")?;
    writeln!(html, "body{{font-family:sans-serif;margin:2em;color:#222;}}")?;
    writeln!(html, "h1{{color:#333;}}")?;
    writeln!(
        html,
        "table{{border-collapse:collapse;font-size:0.8em;table-layout:auto;}}"
    )?;
    writeln!(
        html,
        "th,td{{border:1px solid #ddd;padding:8px;text-align:center;}}"
    )?;
    writeln!(
        html,
        ".antibiotic-col{{text-align:left;white-space:nowrap;}}"
    )?;
    writeln!(
        html,
        "th.ab-class-header,th.org-class-header{{background-color:#f2f2f2;text-align:left;font-weight:bold;}}"
    )?;
    writeln!(
        html,
        "th.org-superclass-header{{background-color:#e0e0e0;font-weight:bold;}}"
    )?;
    writeln!(
        html,
        ".organism-name{{writing-mode:vertical-rl;text-orientation:mixed;white-space:nowrap;font-size:0.9em;}}"
    )?;
    writeln!(
        html,
        ".color-box{{width:12px;height:12px;display:inline-block;border:1px solid #ccc;}}"
    )?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{}</h1>", t.header)?;
    writeln!(html, "<p>{}</p>", t.sub_header)?;

    writeln!(html, "<table>")?;
    writeln!(html, "<thead>")?;
    write_super_class_band(&mut html, matrix, catalog, locale)?;
    write_class_band(&mut html, matrix, catalog, locale, t.antibiotic_col)?;
    write_organism_band(&mut html, matrix, catalog, locale)?;
    writeln!(html, "</thead>")?;

    write_body(&mut html, matrix, catalog, locale)?;
    writeln!(html, "</table>")?;

    write_legend(&mut html, t)?;

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_super_class_band(
    html: &mut String,
    matrix: &Matrix,
    catalog: &Catalog,
    locale: Locale,
) -> Result<(), ReportError> {
    write!(html, "<tr><th class=\"antibiotic-col\"></th>")?;
    let super_ids: Vec<Option<&str>> = matrix
        .col_keys()
        .iter()
        .map(|code| organism_super_class_id(catalog, code))
        .collect();
    for (id, colspan) in contiguous_spans(super_ids.iter().copied()) {
        let label = match id {
            Some(id) => class_label(catalog, id, locale),
            None => String::new(),
        };
        write!(
            html,
            "<th colspan=\"{colspan}\" class=\"org-superclass-header\">{label}</th>"
        )?;
    }
    writeln!(html, "</tr>")?;
    Ok(())
}

fn write_class_band(
    html: &mut String,
    matrix: &Matrix,
    catalog: &Catalog,
    locale: Locale,
    antibiotic_col: &str,
) -> Result<(), ReportError> {
    write!(html, "<tr><th class=\"antibiotic-col\">{antibiotic_col}</th>")?;
    let class_ids: Vec<Option<&str>> = matrix
        .col_keys()
        .iter()
        .map(|code| catalog.organism(code).map(|o| o.class_id.as_str()))
        .collect();
    for (id, colspan) in contiguous_spans(class_ids.iter().copied()) {
        let label = match id {
            Some(id) => class_label(catalog, id, locale),
            None => String::new(),
        };
        write!(
            html,
            "<th colspan=\"{colspan}\" class=\"org-class-header\">{label}</th>"
        )?;
    }
    writeln!(html, "</tr>")?;
    Ok(())
}

fn write_organism_band(
    html: &mut String,
    matrix: &Matrix,
    catalog: &Catalog,
    locale: Locale,
) -> Result<(), ReportError> {
    write!(html, "<tr><th class=\"antibiotic-col\"></th>")?;
    for code in matrix.col_keys() {
        let name = catalog
            .organism(code)
            .map(|o| o.full_name.or_id(locale, code))
            .unwrap_or(code);
        write!(
            html,
            "<th><div class=\"organism-name\">{}</div></th>",
            html_escape(name)
        )?;
    }
    writeln!(html, "</tr>")?;
    Ok(())
}

fn write_body(
    html: &mut String,
    matrix: &Matrix,
    catalog: &Catalog,
    locale: Locale,
) -> Result<(), ReportError> {
    writeln!(html, "<tbody>")?;
    let band_span = matrix.n_cols() + 1;
    let mut current_class: Option<&str> = None;

    for (row, code) in matrix.row_keys().iter().enumerate() {
        let class_id = catalog.antibiotic(code).map(|a| a.class_id.as_str());
        if class_id != current_class {
            current_class = class_id;
            let label = match class_id {
                Some(id) => match catalog.antibiotic_class(id) {
                    Some(class) => html_escape(class.name.or_id(locale, id)),
                    None => html_escape(id),
                },
                None => String::new(),
            };
            writeln!(
                html,
                "<tr><th colspan=\"{band_span}\" class=\"ab-class-header\">{label}</th></tr>"
            )?;
        }

        let name = catalog
            .antibiotic(code)
            .map(|a| a.full_name.or_id(locale, code))
            .unwrap_or(code);
        write!(
            html,
            "<tr><td class=\"antibiotic-col\">{}</td>",
            html_escape(name)
        )?;
        for col in 0..matrix.n_cols() {
            let value = matrix.cell(row, col);
            let band = classify(value);
            write!(
                html,
                "<td style=\"background-color: {}; color: {};\">{}</td>",
                fill_color(band),
                text_color(band),
                cell_text(value)
            )?;
        }
        writeln!(html, "</tr>")?;
    }
    writeln!(html, "</tbody>")?;
    Ok(())
}

fn write_legend(html: &mut String, t: &crate::report::locale::UiStrings) -> Result<(), ReportError> {
    writeln!(html, "<h2>{}</h2>", t.legend_header)?;
    writeln!(html, "<table>")?;
    let entries = [
        (ResistanceBand::Intrinsic, t.legend_intrinsic),
        (ResistanceBand::High, t.legend_high),
        (ResistanceBand::Medium, t.legend_medium),
        (ResistanceBand::Low, t.legend_low),
        (ResistanceBand::NoData, t.legend_no_data),
    ];
    for (band, label) in entries {
        writeln!(
            html,
            "<tr><td style=\"width: 30px;\"><div class=\"color-box\" style=\"background-color: {};\"></div></td><td>{label}</td></tr>",
            fill_color(band)
        )?;
    }
    writeln!(html, "</table>")?;
    Ok(())
}

fn organism_super_class_id<'a>(catalog: &'a Catalog, organism_code: &str) -> Option<&'a str> {
    let organism = catalog.organism(organism_code)?;
    catalog
        .super_class_of(&organism.class_id)
        .map(|c| c.id.as_str())
}

fn class_label(catalog: &Catalog, class_id: &str, locale: Locale) -> String {
    match catalog.organism_class(class_id) {
        Some(class) => html_escape(class.name.or_id(locale, class_id)),
        None => html_escape(class_id),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
