use eyre::{Error, ensure};

/// Number of cards on each row of the gallery, always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowWidth(usize);

impl RowWidth {
    pub const DEFAULT: RowWidth = RowWidth(3);

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for RowWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for RowWidth {
    type Error = Error;

    fn try_from(width: i64) -> Result<Self, Error> {
        ensure!(width > 0, "invalid row width {width}: must be a positive integer");
        Ok(RowWidth(usize::try_from(width)?))
    }
}

/// Split `records` into consecutive rows of `width` items. Only the last row
/// may be shorter, and an empty input gives no row at all.
pub fn paginate_into_rows<T>(records: &[T], width: RowWidth) -> Vec<&[T]> {
    records.chunks(width.get()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_records_in_rows_of_three() {
        let records = (0..7).collect::<Vec<_>>();
        let rows = paginate_into_rows(&records, RowWidth::DEFAULT);
        assert_eq!(rows.iter().map(|r| r.len()).collect::<Vec<_>>(), vec![3, 3, 1]);
        assert_eq!(rows.concat(), records);
        assert_eq!(rows[1], &[3, 4, 5]);
    }

    #[test]
    fn exact_multiple() {
        let records = (0..6).collect::<Vec<_>>();
        let rows = paginate_into_rows(&records, RowWidth::try_from(2_i64).unwrap());
        assert_eq!(rows, vec![&[0, 1][..], &[2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        let records: Vec<u8> = Vec::new();
        assert!(paginate_into_rows(&records, RowWidth::DEFAULT).is_empty());
    }

    #[test]
    fn single_record() {
        let records = ["Beta"];
        assert_eq!(paginate_into_rows(&records, RowWidth::DEFAULT), vec![&["Beta"][..]]);
    }

    #[test]
    fn row_width_must_be_positive() {
        assert!(RowWidth::try_from(0_i64).is_err());
        assert!(RowWidth::try_from(-1_i64).is_err());
        assert_eq!(RowWidth::try_from(3_i64).unwrap(), RowWidth::DEFAULT);
        assert_eq!(RowWidth::default().get(), 3);
    }
}
