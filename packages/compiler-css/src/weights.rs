/// Fixed mapping from weight alias to numeric font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    entries: &'static [(&'static str, u16)],
}

/// The weight aliases the font document may declare.
pub const FONT_WEIGHTS: WeightTable = WeightTable::new(&[
    ("regular", 400),
    ("medium", 500),
    ("semi-bold", 600),
    ("bold", 700),
]);

impl WeightTable {
    pub const fn new(entries: &'static [(&'static str, u16)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, alias: &str) -> Option<u16> {
        self.entries
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, weight)| *weight)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        FONT_WEIGHTS
    }
}
