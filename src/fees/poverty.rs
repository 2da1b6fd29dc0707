use super::household::StateRegion;

/// 2025 HHS poverty guidelines, annual dollars. HHS publishes these as a
/// table of first-eight household sizes plus a per-additional-member
/// increment, not as a formula; the lookup mirrors that shape.
struct GuidelineTable {
    /// Guideline for household sizes 1 through 8.
    rows: [f64; 8],
    /// Added for each member beyond the eighth.
    per_additional: f64,
}

const CONTIGUOUS: GuidelineTable = GuidelineTable {
    rows: [
        15_650.0, 21_150.0, 26_650.0, 32_150.0, 37_650.0, 43_150.0, 48_650.0, 54_150.0,
    ],
    per_additional: 5_500.0,
};

const ALASKA: GuidelineTable = GuidelineTable {
    rows: [
        19_550.0, 26_430.0, 33_310.0, 40_190.0, 47_070.0, 53_950.0, 60_830.0, 67_710.0,
    ],
    per_additional: 6_880.0,
};

const HAWAII: GuidelineTable = GuidelineTable {
    rows: [
        17_990.0, 24_320.0, 30_650.0, 36_980.0, 43_310.0, 49_640.0, 55_970.0, 62_300.0,
    ],
    per_additional: 6_330.0,
};

/// The Federal Poverty Guideline for a household of `size` in the given
/// region. Sizes below 1 are clamped to 1; sizes beyond the tabulated rows
/// extend by the published per-member increment.
pub fn federal_poverty_guideline(size: u32, region: StateRegion) -> f64 {
    let table = match region {
        StateRegion::Contiguous => &CONTIGUOUS,
        StateRegion::Alaska => &ALASKA,
        StateRegion::Hawaii => &HAWAII,
    };
    let size = size.max(1) as usize;
    if size <= table.rows.len() {
        table.rows[size - 1]
    } else {
        table.rows[table.rows.len() - 1] + (size - table.rows.len()) as f64 * table.per_additional
    }
}

/// Convenience for the two-letter state code form.
pub fn federal_poverty_guideline_for_state(size: u32, state: &str) -> f64 {
    federal_poverty_guideline(size, StateRegion::from_state_code(state))
}
