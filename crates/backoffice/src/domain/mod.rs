pub mod a001_payment;
pub mod a002_employee_loan;
pub mod a003_hpp_derivative;
pub mod a004_training_request;
pub mod a005_purchase_request;

use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::shared::table::{RecordForm, TableRecord};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// Table screens of the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Payments,
    EmployeeLoans,
    HppDerivatives,
    TrainingRequests,
    PurchaseRequests,
}

impl ScreenKind {
    pub fn all() -> &'static [ScreenKind] {
        &[
            Self::Payments,
            Self::EmployeeLoans,
            Self::HppDerivatives,
            Self::TrainingRequests,
            Self::PurchaseRequests,
        ]
    }

    /// Key used on the command line and in export file names
    pub fn key(&self) -> &'static str {
        match self {
            Self::Payments => "payments",
            Self::EmployeeLoans => "employee-loans",
            Self::HppDerivatives => "hpp-derivatives",
            Self::TrainingRequests => "training-requests",
            Self::PurchaseRequests => "purchase-requests",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Payments => "Pembayaran",
            Self::EmployeeLoans => "Peminjaman Karyawan",
            Self::HppDerivatives => "HPP Turunan",
            Self::TrainingRequests => "Pengajuan Training",
            Self::PurchaseRequests => "Purchase Request Gudang",
        }
    }

    pub fn department(&self) -> &'static str {
        match self {
            Self::Payments => "Finance",
            Self::EmployeeLoans | Self::TrainingRequests => "HR",
            Self::HppDerivatives => "Project Control",
            Self::PurchaseRequests => "Warehouse",
        }
    }
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(|k| k.key()).collect();
                format!("Unknown screen '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Service entry points of one screen, used by the command dispatcher
pub trait Screen {
    type Record: TableRecord;
    type Form: RecordForm<Self::Record> + DeserializeOwned;

    const KIND: ScreenKind;

    fn new_table(config: &Config) -> anyhow::Result<Table<Self::Record>>;

    fn create(
        table: &mut Table<Self::Record>,
        form: Self::Form,
    ) -> anyhow::Result<<Self::Record as TableRecord>::Id>;

    /// Edit the record with `id`; `Ok(false)` when nothing has that id.
    /// Screens without an edit form refuse.
    fn update(
        _table: &mut Table<Self::Record>,
        _id: <Self::Record as TableRecord>::Id,
        _form: Self::Form,
    ) -> anyhow::Result<bool> {
        anyhow::bail!("{} rows cannot be edited", Self::KIND.title())
    }

    fn request_delete(
        table: &Table<Self::Record>,
        id: <Self::Record as TableRecord>::Id,
    ) -> PendingDeletion<<Self::Record as TableRecord>::Id>;

    fn confirm_delete(
        table: &mut Table<Self::Record>,
        pending: PendingDeletion<<Self::Record as TableRecord>::Id>,
    ) -> Option<Self::Record>;
}

/// Seeded table with the configured page size and page size options
pub(crate) fn seeded_table<R: TableRecord>(
    kind: ScreenKind,
    records: Vec<R>,
    config: &Config,
) -> anyhow::Result<Table<R>> {
    let count = records.len();
    let table =
        Table::new(records, config.table.default_page_size)?.with_page_sizes(config.page_sizes());
    tracing::info!("{} table ready with {} record(s)", kind.title(), count);
    Ok(table)
}
