pub mod repository;
pub mod service;

use super::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a002_employee_loan::{EmployeeLoan, EmployeeLoanForm, EmployeeLoanId};

pub struct EmployeeLoanScreen;

impl Screen for EmployeeLoanScreen {
    type Record = EmployeeLoan;
    type Form = EmployeeLoanForm;

    const KIND: ScreenKind = ScreenKind::EmployeeLoans;

    fn new_table(config: &Config) -> anyhow::Result<Table<EmployeeLoan>> {
        service::new_table(config)
    }

    fn create(
        table: &mut Table<EmployeeLoan>,
        form: EmployeeLoanForm,
    ) -> anyhow::Result<EmployeeLoanId> {
        service::create(table, form)
    }

    fn update(
        table: &mut Table<EmployeeLoan>,
        id: EmployeeLoanId,
        form: EmployeeLoanForm,
    ) -> anyhow::Result<bool> {
        service::update(table, id, form)
    }

    fn request_delete(
        table: &Table<EmployeeLoan>,
        id: EmployeeLoanId,
    ) -> PendingDeletion<EmployeeLoanId> {
        service::request_delete(table, id)
    }

    fn confirm_delete(
        table: &mut Table<EmployeeLoan>,
        pending: PendingDeletion<EmployeeLoanId>,
    ) -> Option<EmployeeLoan> {
        service::confirm_delete(table, pending)
    }
}
