use contracts::domain::a002_employee_loan::{EmployeeLoan, EmployeeLoanId, LoanStatus};
use contracts::shared::date::RecordDate;

struct Seed {
    name: &'static str,
    nik: &'static str,
    department: &'static str,
    item: &'static str,
    borrowed: &'static str,
    returned: &'static str,
    status: LoanStatus,
}

const SEEDS: &[Seed] = &[
    Seed { name: "Andi Saputra", nik: "19870312", department: "IT", item: "Laptop Lenovo ThinkPad", borrowed: "02-01-2024", returned: "02-04-2024", status: LoanStatus::Returned },
    Seed { name: "Siti Rahma", nik: "19910521", department: "Finance", item: "Kalkulator Casio", borrowed: "10-01-2024", returned: "", status: LoanStatus::Borrowed },
    Seed { name: "Budi Santoso", nik: "19850907", department: "Gudang", item: "Handy Talky", borrowed: "2024-01-15", returned: "2024-01-29", status: LoanStatus::Overdue },
    Seed { name: "Dewi Lestari", nik: "19930214", department: "HR", item: "Proyektor Epson", borrowed: "01-02-2024", returned: "03-02-2024", status: LoanStatus::Returned },
    Seed { name: "Rizky Pratama", nik: "19960730", department: "IT", item: "Monitor 24 inch", borrowed: "12-02-2024", returned: "", status: LoanStatus::Borrowed },
    Seed { name: "Agus Wijaya", nik: "19821118", department: "Produksi", item: "Helm Safety", borrowed: "20-02-2024", returned: "20-03-2024", status: LoanStatus::Overdue },
    Seed { name: "Nur Aisyah", nik: "19940405", department: "Finance", item: "Laptop Asus", borrowed: "2024-03-04", returned: "2024-06-04", status: LoanStatus::Borrowed },
    Seed { name: "Hendra Gunawan", nik: "19880626", department: "Gudang", item: "Barcode Scanner", borrowed: "11-03-2024", returned: "18-03-2024", status: LoanStatus::Returned },
    Seed { name: "Maya Sari", nik: "19970909", department: "HR", item: "Kamera Canon", borrowed: "25-03-2024", returned: "", status: LoanStatus::Borrowed },
    Seed { name: "Fajar Nugroho", nik: "19900101", department: "Produksi", item: "Sepatu Safety", borrowed: "03-04-2024", returned: "03-05-2024", status: LoanStatus::Borrowed },
    Seed { name: "Andi Saputra", nik: "19870312", department: "IT", item: "Kabel HDMI", borrowed: "15-04-2024", returned: "16-04-2024", status: LoanStatus::Returned },
];

/// Sample loans for the HR item-loan screen; ids follow seed order
pub fn seed_records() -> Vec<EmployeeLoan> {
    SEEDS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| EmployeeLoan {
            id: EmployeeLoanId(id),
            employee_name: seed.name.to_string(),
            nik: seed.nik.to_string(),
            department: seed.department.to_string(),
            item: seed.item.to_string(),
            borrow_date: RecordDate::parse(seed.borrowed),
            return_date: RecordDate::parse(seed.returned),
            status: seed.status,
        })
        .collect()
}
