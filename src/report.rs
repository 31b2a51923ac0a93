use crate::errors::AppError;
use crate::models::{Progress, TOTAL_DAYS};
use crate::plan::{self, MONTHS, STUDY_TIPS, SUBJECTS};
use crate::stats::build_stats;
use chrono::Local;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, PolygonMode, Rgb,
};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 15.0;
// Content stops here; the strip below is reserved for page numbers.
const PAGE_LIMIT: f64 = PAGE_HEIGHT - 25.0;

const BLUE: (u8, u8, u8) = (59, 130, 246);
const GREEN: (u8, u8, u8) = (16, 185, 129);
const AMBER: (u8, u8, u8) = (245, 158, 11);
const RED: (u8, u8, u8) = (239, 68, 68);
const INK: (u8, u8, u8) = (0, 0, 0);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const GRAY_TEXT: (u8, u8, u8) = (80, 80, 80);
const GRAY_MUTED: (u8, u8, u8) = (120, 120, 120);
const GRAY_FAINT: (u8, u8, u8) = (150, 150, 150);
const GRAY_PANEL: (u8, u8, u8) = (245, 245, 245);

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
}

/// Top-down layout over printpdf's bottom-left coordinate system: `cursor`
/// is millimetres from the top of the current page, and every drawing call
/// converts before touching the layer.
struct ReportWriter {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: f64,
}

impl ReportWriter {
    fn new(title: &str) -> Result<Self, AppError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(PAGE_WIDTH as f32),
            Mm(PAGE_HEIGHT as f32),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(AppError::internal)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(AppError::internal)?;
        let current = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            layer: current,
            regular,
            bold,
            cursor: 20.0,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages.push((page, layer));
        self.cursor = 20.0;
    }

    fn check_page_break(&mut self, required: f64) {
        if self.cursor + required > PAGE_LIMIT {
            self.new_page();
        }
    }

    fn font(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
        }
    }

    fn text(&self, text: &str, face: Face, size: f64, x: f64, y_top: f64, color: (u8, u8, u8)) {
        self.layer.set_fill_color(rgb(color));
        self.layer.use_text(
            text,
            size as f32,
            Mm(x as f32),
            Mm((PAGE_HEIGHT - y_top) as f32),
            self.font(face),
        );
    }

    fn text_centered(
        &self,
        text: &str,
        face: Face,
        size: f64,
        center_x: f64,
        y_top: f64,
        color: (u8, u8, u8),
    ) {
        let x = (center_x - approx_width_mm(text, size) / 2.0).max(0.0);
        self.text(text, face, size, x, y_top, color);
    }

    fn text_right(
        &self,
        text: &str,
        face: Face,
        size: f64,
        right_x: f64,
        y_top: f64,
        color: (u8, u8, u8),
    ) {
        let x = (right_x - approx_width_mm(text, size)).max(0.0);
        self.text(text, face, size, x, y_top, color);
    }

    fn fill_rect(&self, x: f64, y_top: f64, width: f64, height: f64, color: (u8, u8, u8)) {
        self.layer.set_fill_color(rgb(color));
        self.layer
            .add_polygon(rect_poly(x, y_top, width, height, PolygonMode::Fill));
    }

    fn stroke_rect(
        &self,
        x: f64,
        y_top: f64,
        width: f64,
        height: f64,
        color: (u8, u8, u8),
        thickness: f64,
    ) {
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(thickness as f32);
        self.layer
            .add_polygon(rect_poly(x, y_top, width, height, PolygonMode::Stroke));
    }

    fn hline(&self, x1: f64, x2: f64, y_top: f64, color: (u8, u8, u8), thickness: f64) {
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(thickness as f32);
        let line = Line {
            points: vec![
                (
                    Point::new(Mm(x1 as f32), Mm((PAGE_HEIGHT - y_top) as f32)),
                    false,
                ),
                (
                    Point::new(Mm(x2 as f32), Mm((PAGE_HEIGHT - y_top) as f32)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn section_heading(&mut self, title: &str, underline_to: f64, color: (u8, u8, u8)) {
        let y = self.cursor;
        self.text(title, Face::Bold, 20.0, MARGIN, y, INK);
        self.hline(MARGIN, underline_to, y + 3.0, color, 0.8);
        self.cursor = y + 15.0;
    }

    fn stamp_page_numbers(&self) {
        let total = self.pages.len();
        for (i, &(page, layer)) in self.pages.iter().enumerate() {
            let layer = self.doc.get_page(page).get_layer(layer);
            layer.set_fill_color(rgb(GRAY_FAINT));
            layer.use_text(
                format!("Page {} of {}", i + 1, total),
                9.0,
                Mm((PAGE_WIDTH - 30.0) as f32),
                Mm(10.0),
                &self.regular,
            );
        }
    }

    fn into_bytes(self) -> Result<Vec<u8>, AppError> {
        self.doc.save_to_bytes().map_err(AppError::internal)
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Build a rectangle polygon from a top-left-origin box, converting into
/// printpdf's bottom-left millimetre coordinate system.
fn rect_poly(x: f64, y_top: f64, width: f64, height: f64, mode: PolygonMode) -> Polygon {
    let x0 = x as f32;
    let x1 = (x + width) as f32;
    let y0 = (PAGE_HEIGHT - y_top - height) as f32;
    let y1 = (PAGE_HEIGHT - y_top) as f32;
    Polygon {
        rings: vec![vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x0), Mm(y1)), false),
        ]],
        mode,
        ..Default::default()
    }
}

/// Pastel version of a color, used for banner and stat-box backgrounds.
fn tint((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    (
        r.saturating_add(200),
        g.saturating_add(200),
        b.saturating_add(200),
    )
}

/// The builtin fonts carry no metric tables here; a 0.5 em average advance
/// is close enough for centering headings and labels.
fn approx_width_mm(text: &str, size: f64) -> f64 {
    const PT_TO_MM: f64 = 25.4 / 72.0;
    text.chars().count() as f64 * size * 0.5 * PT_TO_MM
}

pub fn render_report(progress: &Progress) -> Result<Vec<u8>, AppError> {
    let stats = build_stats(progress);
    let mut w = ReportWriter::new("Class 12th Study Roadmap")?;

    // Title band.
    w.fill_rect(0.0, 0.0, PAGE_WIDTH, 50.0, BLUE);
    w.text_centered(
        "Class 12th Study Roadmap",
        Face::Bold,
        28.0,
        PAGE_WIDTH / 2.0,
        18.0,
        WHITE,
    );
    w.text_centered(
        "150 Days Progress Report - CBSE/Bihar Board",
        Face::Regular,
        16.0,
        PAGE_WIDTH / 2.0,
        28.0,
        WHITE,
    );
    let generated = Local::now().format("%d %B %Y, %H:%M");
    w.text_centered(
        &format!("Generated on: {generated}"),
        Face::Regular,
        11.0,
        PAGE_WIDTH / 2.0,
        38.0,
        WHITE,
    );
    w.cursor = 60.0;

    // Overall statistics.
    w.section_heading("OVERALL STATISTICS", 80.0, BLUE);

    w.text("Overall Progress:", Face::Bold, 12.0, MARGIN, w.cursor, INK);
    w.cursor += 8.0;

    let bar_width = PAGE_WIDTH - 2.0 * MARGIN;
    let bar_height = 12.0;
    let fill_width = bar_width * stats.percentage / 100.0;
    w.fill_rect(MARGIN, w.cursor, bar_width, bar_height, (230, 230, 230));
    if stats.percentage > 0.0 {
        w.fill_rect(MARGIN, w.cursor, fill_width, bar_height, GREEN);
    }
    let pct_label = format!("{:.1}%", stats.percentage);
    if stats.percentage > 10.0 {
        w.text_right(
            &pct_label,
            Face::Bold,
            14.0,
            MARGIN + fill_width - 2.0,
            w.cursor + 8.5,
            WHITE,
        );
    } else {
        w.text(
            &pct_label,
            Face::Bold,
            14.0,
            MARGIN + fill_width + 5.0,
            w.cursor + 8.5,
            INK,
        );
    }
    w.cursor += 20.0;

    let boxes = [
        ("TOTAL", "Total Days", TOTAL_DAYS.to_string(), BLUE),
        ("DONE", "Completed", stats.completed_count.to_string(), GREEN),
        ("TODO", "Remaining", stats.remaining_count.to_string(), RED),
        ("FIRE", "Streak", stats.streak.to_string(), AMBER),
    ];
    let box_width = (PAGE_WIDTH - 2.0 * MARGIN - 9.0) / 4.0;
    for (i, (tag, label, value, color)) in boxes.iter().enumerate() {
        let x = MARGIN + i as f64 * (box_width + 3.0);
        w.fill_rect(x + 1.0, w.cursor + 1.0, box_width, 28.0, (200, 200, 200));
        w.fill_rect(x, w.cursor, box_width, 28.0, *color);
        w.fill_rect(x + 2.0, w.cursor + 2.0, box_width - 4.0, 10.0, WHITE);
        w.text_centered(tag, Face::Bold, 7.0, x + box_width / 2.0, w.cursor + 8.0, *color);
        w.text_centered(
            value.as_str(),
            Face::Bold,
            18.0,
            x + box_width / 2.0,
            w.cursor + 19.0,
            WHITE,
        );
        w.text_centered(
            label,
            Face::Regular,
            8.0,
            x + box_width / 2.0,
            w.cursor + 25.0,
            WHITE,
        );
    }
    w.cursor += 38.0;

    let (summary, summary_color) = plan::performance_summary(stats.percentage);
    w.fill_rect(
        MARGIN,
        w.cursor,
        PAGE_WIDTH - 2.0 * MARGIN,
        12.0,
        tint(summary_color),
    );
    w.text_centered(
        summary,
        Face::Bold,
        12.0,
        PAGE_WIDTH / 2.0,
        w.cursor + 8.0,
        summary_color,
    );
    w.cursor += 20.0;

    // Subject-wise analysis.
    w.check_page_break(50.0);
    w.section_heading("SUBJECT-WISE ANALYSIS", 90.0, BLUE);

    for subject in SUBJECTS {
        w.check_page_break(32.0);
        let done = subject.days.iter().filter(|d| progress.is_complete(**d)).count();
        let total = subject.days.len();
        let pct = if total > 0 {
            done as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        w.fill_rect(MARGIN, w.cursor, PAGE_WIDTH - 2.0 * MARGIN, 18.0, GRAY_PANEL);
        w.text(subject.name, Face::Bold, 13.0, MARGIN + 3.0, w.cursor + 6.0, subject.color);
        w.text(
            &format!("{done}/{total} days"),
            Face::Regular,
            10.0,
            MARGIN + 3.0,
            w.cursor + 11.0,
            GRAY_TEXT,
        );
        w.text(
            subject.topics,
            Face::Regular,
            8.0,
            MARGIN + 3.0,
            w.cursor + 15.5,
            GRAY_MUTED,
        );
        w.text_right(
            &format!("{pct:.1}%"),
            Face::Bold,
            16.0,
            PAGE_WIDTH - MARGIN - 5.0,
            w.cursor + 9.0,
            subject.color,
        );
        w.cursor += 20.0;

        w.fill_rect(MARGIN, w.cursor, bar_width, 5.0, (220, 220, 220));
        if pct > 0.0 {
            w.fill_rect(MARGIN, w.cursor, bar_width * pct / 100.0, 5.0, subject.color);
        }
        w.cursor += 10.0;
    }
    w.cursor += 5.0;

    // Monthly breakdown.
    w.check_page_break(60.0);
    w.section_heading("MONTHLY BREAKDOWN", 85.0, BLUE);

    for month in MONTHS {
        w.check_page_break(25.0);
        let done = progress.days.range(month.first_day..=month.last_day).count();
        let total = (month.last_day - month.first_day + 1) as usize;
        let pct = done as f64 / total as f64 * 100.0;

        w.fill_rect(MARGIN, w.cursor, PAGE_WIDTH - 2.0 * MARGIN, 20.0, (250, 250, 250));
        w.fill_rect(MARGIN, w.cursor, 5.0, 20.0, month.color);
        w.text(
            &format!("{} (Days {}-{})", month.name, month.first_day, month.last_day),
            Face::Bold,
            14.0,
            MARGIN + 8.0,
            w.cursor + 6.0,
            INK,
        );
        w.text(
            month.focus,
            Face::Regular,
            9.0,
            MARGIN + 8.0,
            w.cursor + 11.0,
            (100, 100, 100),
        );

        let stats_x = PAGE_WIDTH - MARGIN - 45.0;
        w.fill_rect(stats_x, w.cursor + 2.0, 43.0, 16.0, tint(month.color));
        w.text_centered(
            &format!("{done}/{total}"),
            Face::Bold,
            11.0,
            stats_x + 21.5,
            w.cursor + 9.0,
            month.color,
        );
        w.text_centered(
            &format!("{pct:.1}%"),
            Face::Regular,
            10.0,
            stats_x + 21.5,
            w.cursor + 15.0,
            GRAY_TEXT,
        );
        w.cursor += 23.0;
    }

    // Completed days detail.
    w.new_page();
    w.section_heading("COMPLETED DAYS DETAIL", 100.0, GREEN);

    if progress.days.is_empty() {
        w.fill_rect(MARGIN, w.cursor, PAGE_WIDTH - 2.0 * MARGIN, 40.0, GRAY_PANEL);
        w.text_centered(
            "No days completed yet.",
            Face::Regular,
            14.0,
            PAGE_WIDTH / 2.0,
            w.cursor + 15.0,
            (100, 100, 100),
        );
        w.text_centered(
            "Start your journey today!",
            Face::Regular,
            14.0,
            PAGE_WIDTH / 2.0,
            w.cursor + 25.0,
            (100, 100, 100),
        );
        w.cursor += 45.0;
    } else {
        w.fill_rect(MARGIN, w.cursor, PAGE_WIDTH - 2.0 * MARGIN, 15.0, (220, 252, 231));
        w.text(
            &format!("Total Completed: {} days", stats.completed_count),
            Face::Bold,
            12.0,
            MARGIN + 5.0,
            w.cursor + 6.0,
            GREEN,
        );
        w.text(
            &format!("Streak: {} days", stats.streak),
            Face::Regular,
            10.0,
            MARGIN + 5.0,
            w.cursor + 11.0,
            GRAY_TEXT,
        );
        w.cursor += 20.0;

        const COLS: usize = 10;
        const CELL: f64 = 15.0;
        const GAP: f64 = 2.0;
        let mut col = 0usize;
        for &day in &progress.days {
            if w.cursor + CELL > PAGE_LIMIT {
                w.new_page();
                col = 0;
            }
            let x = MARGIN + col as f64 * (CELL + GAP);
            w.fill_rect(x, w.cursor, CELL, CELL, GREEN);
            w.text_centered(
                &day.to_string(),
                Face::Bold,
                9.0,
                x + CELL / 2.0,
                w.cursor + CELL / 2.0 + 2.0,
                WHITE,
            );
            col += 1;
            if col == COLS {
                col = 0;
                w.cursor += CELL + GAP;
            }
        }
        if col > 0 {
            w.cursor += CELL + GAP;
        }
        w.cursor += 15.0;
    }

    // Recommendations, chosen by completion bucket.
    w.check_page_break(80.0);
    w.section_heading("RECOMMENDATIONS & NEXT STEPS", 130.0, AMBER);

    for advice in plan::recommendations(stats.percentage) {
        w.check_page_break(12.0);
        w.fill_rect(MARGIN, w.cursor, PAGE_WIDTH - 2.0 * MARGIN, 10.0, (252, 246, 228));
        w.fill_rect(MARGIN + 3.5, w.cursor + 3.5, 3.0, 3.0, AMBER);
        w.text(advice, Face::Regular, 10.0, MARGIN + 10.0, w.cursor + 6.0, GRAY_TEXT);
        w.cursor += 12.0;
    }
    w.cursor += 5.0;

    // Study tips.
    w.check_page_break(60.0);
    w.section_heading("STUDY TIPS FOR SUCCESS", 95.0, GREEN);

    for tip in STUDY_TIPS {
        w.check_page_break(10.0);
        w.fill_rect(MARGIN + 1.0, w.cursor - 3.5, 3.0, 3.0, GREEN);
        w.text(tip, Face::Regular, 10.0, MARGIN + 6.0, w.cursor, GRAY_TEXT);
        w.cursor += 7.0;
    }
    w.cursor += 10.0;

    // Motivational box and footer band.
    w.check_page_break(60.0);
    let box_width = PAGE_WIDTH - 2.0 * MARGIN;
    w.fill_rect(MARGIN, w.cursor, box_width, 35.0, (230, 240, 250));
    w.stroke_rect(MARGIN, w.cursor, box_width, 35.0, BLUE, 1.0);
    w.text_centered(
        "YOUR SUCCESS JOURNEY",
        Face::Bold,
        16.0,
        PAGE_WIDTH / 2.0,
        w.cursor + 8.0,
        BLUE,
    );
    w.text_centered(
        "Consistency > Intensity",
        Face::Regular,
        11.0,
        PAGE_WIDTH / 2.0,
        w.cursor + 16.0,
        GRAY_TEXT,
    );
    w.text_centered(
        "Progress > Perfection",
        Face::Regular,
        11.0,
        PAGE_WIDTH / 2.0,
        w.cursor + 22.0,
        GRAY_TEXT,
    );
    w.text_centered(
        "Learning > Marks",
        Face::Regular,
        11.0,
        PAGE_WIDTH / 2.0,
        w.cursor + 28.0,
        GRAY_TEXT,
    );

    w.fill_rect(0.0, PAGE_HEIGHT - 35.0, PAGE_WIDTH, 35.0, GRAY_PANEL);
    w.text_centered(
        "Best of Luck for Your Board Exams!",
        Face::Bold,
        12.0,
        PAGE_WIDTH / 2.0,
        PAGE_HEIGHT - 22.0,
        BLUE,
    );
    w.text_centered(
        "Stay focused, stay consistent, and success will follow!",
        Face::Regular,
        10.0,
        PAGE_WIDTH / 2.0,
        PAGE_HEIGHT - 15.0,
        (100, 100, 100),
    );
    w.text_centered(
        "Generated by Class 12th Roadmap Tracker",
        Face::Regular,
        8.0,
        PAGE_WIDTH / 2.0,
        PAGE_HEIGHT - 8.0,
        GRAY_FAINT,
    );

    w.stamp_page_numbers();
    w.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_for_empty_progress() {
        let bytes = render_report(&Progress::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn report_renders_for_full_progress() {
        let progress = Progress {
            days: (1..=TOTAL_DAYS).collect(),
        };
        let bytes = render_report(&progress).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn report_renders_for_partial_progress() {
        let progress = Progress {
            days: [1, 2, 3, 40, 77].into_iter().collect(),
        };
        assert!(render_report(&progress).unwrap().starts_with(b"%PDF"));
    }
}
