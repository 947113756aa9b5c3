pub mod repository;
pub mod service;

use super::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a003_hpp_derivative::{HppDerivative, HppDerivativeForm, HppNo};

pub struct HppDerivativeScreen;

impl Screen for HppDerivativeScreen {
    type Record = HppDerivative;
    type Form = HppDerivativeForm;

    const KIND: ScreenKind = ScreenKind::HppDerivatives;

    fn new_table(config: &Config) -> anyhow::Result<Table<HppDerivative>> {
        service::new_table(config)
    }

    fn create(table: &mut Table<HppDerivative>, form: HppDerivativeForm) -> anyhow::Result<HppNo> {
        service::create(table, form)
    }

    fn request_delete(table: &Table<HppDerivative>, no: HppNo) -> PendingDeletion<HppNo> {
        service::request_delete(table, no)
    }

    fn confirm_delete(
        table: &mut Table<HppDerivative>,
        pending: PendingDeletion<HppNo>,
    ) -> Option<HppDerivative> {
        service::confirm_delete(table, pending)
    }
}
