use crate::shared::table::sort_list;
use contracts::domain::a003_hpp_derivative::{HppCategory, HppDerivative, HppNo};
use contracts::shared::date::RecordDate;

fn hpp(
    code: &str,
    name: &str,
    source: &str,
    category: HppCategory,
    unit: &str,
    cost: i64,
    period: &str,
) -> HppDerivative {
    HppDerivative {
        // Positional, renumbered by the store
        no: HppNo(0),
        product_code: code.to_string(),
        product_name: name.to_string(),
        source_product: source.to_string(),
        category,
        unit: unit.to_string(),
        hpp: cost,
        period: RecordDate::parse(period),
    }
}

/// Derived cost rows, newest period first
pub fn seed_records() -> Vec<HppDerivative> {
    use HppCategory::{FinishedGood, RawMaterial, WorkInProgress};
    let mut records = vec![
        hpp("BB-001", "Tepung Terigu Curah", "Tepung Terigu 25kg", RawMaterial, "kg", 9_800, "01-01-2024"),
        hpp("BB-002", "Gula Pasir Curah", "Gula Pasir 50kg", RawMaterial, "kg", 14_200, "01-01-2024"),
        hpp("WIP-010", "Adonan Roti Tawar", "Tepung Terigu Curah", WorkInProgress, "kg", 18_500, "2024-02-01"),
        hpp("FG-100", "Roti Tawar 400g", "Adonan Roti Tawar", FinishedGood, "pcs", 11_250, "01-02-2024"),
        hpp("WIP-011", "Adonan Roti Manis", "Tepung Terigu Curah", WorkInProgress, "kg", 21_300, "01-03-2024"),
        hpp("FG-101", "Roti Manis Coklat", "Adonan Roti Manis", FinishedGood, "pcs", 4_750, "01-03-2024"),
        hpp("FG-102", "Roti Manis Keju", "Adonan Roti Manis", FinishedGood, "pcs", 5_100, "2024-03-01"),
        hpp("BB-003", "Mentega Blok", "Mentega 15kg", RawMaterial, "kg", 42_000, "01-04-2024"),
        hpp("WIP-012", "Adonan Croissant", "Mentega Blok", WorkInProgress, "kg", 56_800, "01-04-2024"),
        hpp("FG-103", "Croissant Butter", "Adonan Croissant", FinishedGood, "pcs", 9_900, "01-04-2024"),
    ];
    sort_list(&mut records, "period", false);
    records
}
