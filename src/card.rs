use crate::BingoError;

/// Configuration for a batch of bingo cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    /// Number of rows per card.
    pub rows: usize,
    /// Number of columns per card.
    pub cols: usize,
    /// Whether to reserve one cell for a fixed free space.
    pub free_space: bool,
    /// Text for the free space cell.
    ///
    /// Providing a text implies `free_space`; with `free_space` set and no
    /// text, "Free Space" is used. Both defaults are applied by
    /// [`CardSpec::normalized`].
    pub free_space_text: Option<String>,
    /// Number of unique cards to generate.
    pub count: usize,
    /// Title printed at the top of each card by the renderer.
    pub title: String,
}

impl Default for CardSpec {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            free_space: false,
            free_space_text: None,
            count: 1,
            title: "BINGO".to_string(),
        }
    }
}

impl CardSpec {
    /// Applies the free-space defaulting rules.
    ///
    /// A provided `free_space_text` turns `free_space` on, and an enabled
    /// free space with no text gets "Free Space". Idempotent.
    pub fn normalized(mut self) -> Self {
        if self.free_space_text.is_some() {
            self.free_space = true;
        }
        if self.free_space && self.free_space_text.is_none() {
            self.free_space_text = Some("Free Space".to_string());
        }
        self
    }

    /// Checks the dimensional constraints.
    pub fn validate(&self) -> Result<(), BingoError> {
        if self.rows == 0 {
            return Err(BingoError::Configuration(
                "the number of rows must be positive".to_string(),
            ));
        }
        if self.cols == 0 {
            return Err(BingoError::Configuration(
                "the number of columns must be positive".to_string(),
            ));
        }
        if self.count == 0 {
            return Err(BingoError::Configuration(
                "the number of cards must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of entries that must be sampled for one card.
    ///
    /// A free space occupies one cell, so it reduces the requirement by one.
    pub fn entries_required(&self) -> usize {
        self.rows * self.cols - usize::from(self.free_space)
    }

    /// Row-major index of the free space cell, if any.
    ///
    /// The free space goes in the center of the card. When a dimension is
    /// even there is no single center cell, and the free space goes in the
    /// last cell of the first half along that axis. This tie-break is a
    /// stable part of the output format: cards generated under the same seed
    /// must not move their free space between versions.
    ///
    /// The index is the same for every card sharing this spec.
    pub fn free_space_index(&self) -> Option<usize> {
        if !self.free_space {
            return None;
        }
        let free_row = half_index(self.rows);
        let free_col = half_index(self.cols);
        Some(free_row * self.cols + free_col)
    }

    /// Lays out one card from a sampled entry sequence.
    ///
    /// Without a free space the card is the sampled sequence verbatim. With
    /// one, the free space text is inserted at [`CardSpec::free_space_index`]
    /// and later entries shift by one; sampled order is otherwise untouched.
    ///
    /// # Panics
    /// Panics if `sampled.len() != self.entries_required()`.
    pub fn build_card(&self, sampled: Vec<String>) -> Card {
        assert_eq!(
            sampled.len(),
            self.entries_required(),
            "sampled entry count must match the card requirement"
        );
        let mut slots = sampled;
        if let Some(index) = self.free_space_index() {
            let text = self.free_space_text.as_deref().unwrap_or("Free Space");
            slots.insert(index, text.to_string());
        }
        Card {
            rows: self.rows,
            cols: self.cols,
            slots,
        }
    }
}

/// Center index along one axis, biased toward the first half on ties.
fn half_index(n: usize) -> usize {
    if n % 2 == 0 {
        n / 2 - 1
    } else {
        n / 2
    }
}

/// One complete bingo card: `rows * cols` cell texts in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    rows: usize,
    cols: usize,
    slots: Vec<String>,
}

impl Card {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell text at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> &str {
        assert!(r < self.rows && c < self.cols, "index out of bounds");
        &self.slots[r * self.cols + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * cols + c`.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn free_index_odd_dimensions_hit_the_center() {
        let spec = CardSpec {
            free_space: true,
            ..Default::default()
        };
        // 5x5: row 2, column 2.
        assert_eq!(spec.free_space_index(), Some(12));

        let spec = CardSpec {
            rows: 3,
            cols: 7,
            free_space: true,
            ..Default::default()
        };
        // row 1, column 3.
        assert_eq!(spec.free_space_index(), Some(10));
    }

    #[test]
    fn free_index_even_dimensions_bias_first_half() {
        let spec = CardSpec {
            rows: 4,
            cols: 4,
            free_space: true,
            ..Default::default()
        };
        // row 1, column 1.
        assert_eq!(spec.free_space_index(), Some(5));

        let spec = CardSpec {
            rows: 5,
            cols: 4,
            free_space: true,
            ..Default::default()
        };
        // row 2, column 1.
        assert_eq!(spec.free_space_index(), Some(9));
    }

    #[test]
    fn free_index_degenerate_single_dimension() {
        let spec = CardSpec {
            rows: 1,
            cols: 5,
            free_space: true,
            ..Default::default()
        };
        assert_eq!(spec.free_space_index(), Some(2));

        let spec = CardSpec {
            rows: 1,
            cols: 1,
            free_space: true,
            ..Default::default()
        };
        assert_eq!(spec.free_space_index(), Some(0));
    }

    #[test]
    fn free_index_absent_without_free_space() {
        assert_eq!(CardSpec::default().free_space_index(), None);
    }

    #[test]
    fn normalized_text_implies_free_space() {
        let spec = CardSpec {
            free_space_text: Some("GRATIS".to_string()),
            ..Default::default()
        }
        .normalized();
        assert!(spec.free_space);
        assert_eq!(spec.free_space_text.as_deref(), Some("GRATIS"));
    }

    #[test]
    fn normalized_defaults_free_space_text() {
        let spec = CardSpec {
            free_space: true,
            ..Default::default()
        }
        .normalized();
        assert_eq!(spec.free_space_text.as_deref(), Some("Free Space"));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        for spec in [
            CardSpec {
                rows: 0,
                ..Default::default()
            },
            CardSpec {
                cols: 0,
                ..Default::default()
            },
            CardSpec {
                count: 0,
                ..Default::default()
            },
        ] {
            assert!(
                matches!(spec.validate(), Err(BingoError::Configuration(_))),
                "{spec:?} should be rejected"
            );
        }
        assert!(CardSpec::default().validate().is_ok());
    }

    #[test]
    fn entries_required_accounts_for_free_space() {
        let spec = CardSpec::default();
        assert_eq!(spec.entries_required(), 25);

        let spec = CardSpec {
            free_space: true,
            ..Default::default()
        };
        assert_eq!(spec.entries_required(), 24);
    }

    #[test]
    fn build_card_without_free_space_keeps_sampled_order() {
        let spec = CardSpec {
            rows: 2,
            cols: 2,
            ..Default::default()
        };
        let card = spec.build_card(strings(&["A", "B", "C", "D"]));
        assert_eq!(card.slots(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn build_card_inserts_free_space_and_shifts() {
        let spec = CardSpec {
            rows: 3,
            cols: 3,
            free_space: true,
            ..Default::default()
        }
        .normalized();
        let card = spec.build_card(strings(&["A", "B", "C", "D", "E", "F", "G", "H"]));
        // Free space at row 1, column 1 (index 4).
        assert_eq!(
            card.slots(),
            ["A", "B", "C", "D", "Free Space", "E", "F", "G", "H"]
        );
        assert_eq!(card.get(1, 1), "Free Space");
    }

    #[test]
    fn built_card_always_has_rows_times_cols_slots() {
        for free_space in [false, true] {
            let spec = CardSpec {
                rows: 4,
                cols: 3,
                free_space,
                ..Default::default()
            }
            .normalized();
            let sampled: Vec<String> =
                (0..spec.entries_required()).map(|i| i.to_string()).collect();
            let card = spec.build_card(sampled);
            assert_eq!(card.slots().len(), 12, "free_space={free_space}");
        }
    }

    #[test]
    #[should_panic(expected = "sampled entry count")]
    fn build_card_rejects_wrong_sample_size() {
        let spec = CardSpec {
            rows: 2,
            cols: 2,
            ..Default::default()
        };
        spec.build_card(strings(&["A", "B", "C"]));
    }
}
