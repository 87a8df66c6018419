use crate::core::grouping::CategoryMap;
use crate::core::models::{RankedStudent, Student};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const RANKED_HEADERS: [&str; 4] = ["POS", "NAME", "AGE", "GRADE"];
const ALL_HEADERS: [&str; 4] = ["ID", "NAME", "AGE", "GRADE"];
const NO_MATCH_MESSAGE: &str = "No students matched the selection.";

/// Builds the console views of the roster: the flat "show all" table and
/// the per-category ranked sections.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil::default(),
        }
    }

    /// Flat dump in load order.
    pub fn display_all_students(&self, students: &[Student]) {
        let mut stdout = io::stdout();
        let _ = self.render_all_students(students, &mut stdout);
    }

    pub fn render_all_students<W: Write>(
        &self,
        students: &[Student],
        out: &mut W,
    ) -> io::Result<()> {
        let rows = Self::all_rows(students);
        self.printer.render_table(
            "All Students",
            &ALL_HEADERS,
            &rows,
            Some("No students loaded."),
            None,
            out,
        )
    }

    /// Ranked groups, one titled section per category, centered on screen.
    pub fn display_ranked(&self, title: &str, grouped: &CategoryMap<RankedStudent>) {
        let width = self.ranked_max_width(title, grouped);
        let printer = self.printer.with_left_pad(self.util.center_pad(width));
        let mut stdout = io::stdout();
        let _ = self.render_ranked_with(&printer, title, grouped, width, &mut stdout);
    }

    pub fn render_ranked<W: Write>(
        &self,
        title: &str,
        grouped: &CategoryMap<RankedStudent>,
        out: &mut W,
    ) -> io::Result<()> {
        let width = self.ranked_max_width(title, grouped);
        self.render_ranked_with(&self.printer, title, grouped, width, out)
    }

    fn render_ranked_with<W: Write>(
        &self,
        printer: &TablePrinter,
        title: &str,
        grouped: &CategoryMap<RankedStudent>,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        printer.render_banner(title, width, out)?;

        if grouped.is_empty() {
            return printer.render_table(
                "Results",
                &RANKED_HEADERS,
                &Vec::<Vec<String>>::new(),
                Some(NO_MATCH_MESSAGE),
                Some(width),
                out,
            );
        }

        for (category, bucket) in grouped.iter() {
            let rows = Self::ranked_rows(bucket);
            printer.render_table(&category.key(), &RANKED_HEADERS, &rows, None, Some(width), out)?;
        }
        Ok(())
    }

    fn ranked_max_width(&self, title: &str, grouped: &CategoryMap<RankedStudent>) -> usize {
        let mut width = self
            .util
            .visible_width(title)
            .max(self.util.visible_width(NO_MATCH_MESSAGE));
        for (category, bucket) in grouped.iter() {
            let rows = Self::ranked_rows(bucket);
            let table_w = self.printer.compute_table_width(&RANKED_HEADERS, &rows);
            width = width
                .max(table_w)
                .max(self.util.visible_width(&category.key()));
        }
        width
    }

    fn all_rows(students: &[Student]) -> Vec<Vec<String>> {
        students
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.name.clone(),
                    s.age.text.clone(),
                    s.grade.text.clone(),
                ]
            })
            .collect()
    }

    fn ranked_rows(bucket: &[RankedStudent]) -> Vec<Vec<String>> {
        bucket
            .iter()
            .map(|r| {
                vec![
                    r.position.to_string(),
                    r.student.name.clone(),
                    r.student.age.text.clone(),
                    r.student.grade.text.clone(),
                ]
            })
            .collect()
    }
}
