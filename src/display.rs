use crate::model::ProjectRecord;
use std::fmt::Write;

/// Plain text listing of the paginated gallery.
pub fn display_rows(rows: &[&[&ProjectRecord]], total: usize) -> String {
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        writeln!(out, "Row {}:", index + 1).ok();
        for record in *row {
            writeln!(out, "  - {record}").ok();
            if !record.members.is_empty() {
                writeln!(out, "      members: {}", record.members).ok();
            }
            if !record.link.is_empty() {
                writeln!(out, "      link: {}", record.link).ok();
            }
        }
    }
    let shown = rows.iter().map(|row| row.len()).sum::<usize>();
    writeln!(out, "Showing {shown} of {total} projects").ok();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{RowWidth, paginate_into_rows};

    #[test]
    fn text_listing() {
        let mut alpha = ProjectRecord::new("Alpha", "A, B", "vision project");
        alpha.link = "https://example.com/alpha".into();
        let beta = ProjectRecord::new("Beta", "", "nlp project");
        let refs = vec![&alpha, &beta];
        let rows = paginate_into_rows(&refs, RowWidth::try_from(1_i64).unwrap());
        assert_eq!(
            display_rows(&rows, 5),
            "\
Row 1:
  - Alpha
      members: A, B
      link: https://example.com/alpha
Row 2:
  - Beta
Showing 2 of 5 projects
"
        );
    }

    #[test]
    fn empty_listing() {
        assert_eq!(display_rows(&[], 3), "Showing 0 of 3 projects\n");
    }
}
