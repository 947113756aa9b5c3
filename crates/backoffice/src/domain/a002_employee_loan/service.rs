use super::repository;
use crate::domain::{seeded_table, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a002_employee_loan::{EmployeeLoan, EmployeeLoanForm, EmployeeLoanId};

pub fn new_table(config: &Config) -> anyhow::Result<Table<EmployeeLoan>> {
    seeded_table(ScreenKind::EmployeeLoans, repository::seed_records(), config)
}

/// Register a loan from the modal form
pub fn create(
    table: &mut Table<EmployeeLoan>,
    form: EmployeeLoanForm,
) -> anyhow::Result<EmployeeLoanId> {
    let id = table.add(form)?;
    tracing::info!("Employee loan {} created", id);
    Ok(id)
}

/// Edit a loan; identity is preserved
pub fn update(
    table: &mut Table<EmployeeLoan>,
    id: EmployeeLoanId,
    form: EmployeeLoanForm,
) -> anyhow::Result<bool> {
    let updated = table.update(id, form)?;
    if updated {
        tracing::info!("Employee loan {} updated", id);
    } else {
        tracing::warn!("Employee loan {} not found, nothing updated", id);
    }
    Ok(updated)
}

pub fn request_delete(
    table: &Table<EmployeeLoan>,
    id: EmployeeLoanId,
) -> PendingDeletion<EmployeeLoanId> {
    table.request_delete(id)
}

pub fn confirm_delete(
    table: &mut Table<EmployeeLoan>,
    pending: PendingDeletion<EmployeeLoanId>,
) -> Option<EmployeeLoan> {
    let removed = table.confirm_delete(pending)?;
    tracing::info!("Employee loan {} ({}) deleted", removed.id, removed.item);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_employee_loan::LoanStatus;
    use contracts::shared::table::Predicate;

    fn table() -> Table<EmployeeLoan> {
        new_table(&Config::default()).unwrap()
    }

    fn form() -> EmployeeLoanForm {
        EmployeeLoanForm {
            employee_name: "Rina Kartika".into(),
            nik: "19950317".into(),
            department: "Finance".into(),
            item: "Laptop Dell".into(),
            borrow_date: "02-05-2024".into(),
            return_date: String::new(),
            status: LoanStatus::Borrowed,
        }
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut table = table();
        let before = table.store().records().to_vec();

        let id = create(&mut table, form()).unwrap();
        assert_eq!(id, EmployeeLoanId(12));

        let pending = request_delete(&table, id);
        assert_eq!(pending.summary(), Some("Rina Kartika - Laptop Dell"));
        confirm_delete(&mut table, pending);
        assert_eq!(table.store().records(), before.as_slice());
    }

    #[test]
    fn test_update_return() {
        let mut table = table();
        let mut returned = form();
        returned.return_date = "09-05-2024".into();
        returned.status = LoanStatus::Returned;
        assert!(update(&mut table, EmployeeLoanId(2), returned).unwrap());

        let loan = table.store().get(EmployeeLoanId(2)).unwrap();
        assert_eq!(loan.status, LoanStatus::Returned);
        assert_eq!(loan.return_date.raw(), "09-05-2024");
        assert!(!update(&mut table, EmployeeLoanId(99), form()).unwrap());
    }

    #[test]
    fn test_filter_by_department_and_status() {
        let mut table = table();
        table.set_filter("department", Predicate::equals("IT")).unwrap();
        table.set_filter("status", Predicate::equals("Dipinjam")).unwrap();
        let names: Vec<&str> = table
            .export_rows()
            .iter()
            .map(|l| l.employee_name.as_str())
            .collect();
        assert_eq!(names, vec!["Rizky Pratama"]);
    }

    #[test]
    fn test_nik_must_be_numeric() {
        let mut table = table();
        let mut bad = form();
        bad.nik = "1995-03".into();
        let err = create(&mut table, bad).unwrap_err();
        assert!(err.to_string().contains("NIK"));
    }
}
