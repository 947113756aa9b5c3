use super::repository;
use crate::domain::{seeded_table, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a003_hpp_derivative::{HppDerivative, HppDerivativeForm, HppNo};

pub fn new_table(config: &Config) -> anyhow::Result<Table<HppDerivative>> {
    seeded_table(ScreenKind::HppDerivatives, repository::seed_records(), config)
}

/// Add a derived cost row at the top; every row below moves down by one
pub fn create(table: &mut Table<HppDerivative>, form: HppDerivativeForm) -> anyhow::Result<HppNo> {
    let no = table.add(form)?;
    tracing::info!("HPP row inserted at no {}, {} rows total", no, table.store().len());
    Ok(no)
}

pub fn request_delete(table: &Table<HppDerivative>, no: HppNo) -> PendingDeletion<HppNo> {
    table.request_delete(no)
}

/// Delete and renumber. A confirmation issued before another insert or
/// delete is ignored, because its `no` may now name a different row.
pub fn confirm_delete(
    table: &mut Table<HppDerivative>,
    pending: PendingDeletion<HppNo>,
) -> Option<HppDerivative> {
    let removed = table.confirm_delete(pending)?;
    tracing::info!("HPP row {} deleted, rows renumbered", removed.product_code);
    Some(removed)
}
