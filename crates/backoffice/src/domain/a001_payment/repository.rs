use contracts::domain::a001_payment::{Payment, PaymentNo, PaymentStatus};
use contracts::shared::date::RecordDate;

#[allow(clippy::too_many_arguments)]
fn payment(
    no: u32,
    invoice_number: &str,
    vendor: &str,
    description: &str,
    date: &str,
    due_date: &str,
    amount: i64,
    status: PaymentStatus,
) -> Payment {
    Payment {
        no: PaymentNo(no),
        invoice_number: invoice_number.to_string(),
        vendor: vendor.to_string(),
        description: description.to_string(),
        date: RecordDate::parse(date),
        due_date: RecordDate::parse(due_date),
        amount,
        status,
    }
}

/// Sample payments shown on the finance screen.
///
/// Dates arrive in mixed display formats, as exported by the accounting system.
pub fn seed_records() -> Vec<Payment> {
    use PaymentStatus::{Paid, Unpaid};
    vec![
        payment(1, "INV-2024-001", "PT Sinar Jaya", "Pembelian bahan baku", "05-01-2024", "04-02-2024", 1_500_000, Paid),
        payment(2, "INV-2024-002", "CV Maju Bersama", "Jasa pengiriman", "2024-01-20", "2024-02-19", 750_000, Unpaid),
        payment(3, "INV-2024-003", "UD Sumber Rejeki", "Alat tulis kantor", "11-02-2024", "12-03-2024", 2_250_000, Paid),
        payment(4, "INV-2024-004", "PT Cahaya Abadi", "Sewa gudang Februari", "15-02-2024", "15-02-2024", 12_000_000, Paid),
        payment(5, "INV-2024-005", "PT Sinar Jaya", "Pembelian bahan baku", "01-03-2024", "31-03-2024", 3_100_000, Unpaid),
        payment(6, "INV-2024-006", "CV Mitra Teknik", "Perbaikan mesin press", "2024-03-07", "2024-04-06", 4_800_000, Paid),
        payment(7, "INV-2024-007", "PT Telekom Indonesia", "Internet kantor Maret", "10-03-2024", "25-03-2024", 1_250_000, Paid),
        payment(8, "INV-2024-008", "UD Sumber Rejeki", "Kertas dan tinta printer", "18-03-2024", "17-04-2024", 675_000, Unpaid),
        payment(9, "INV-2024-009", "PT Cahaya Abadi", "Sewa gudang April", "2024-04-01", "2024-04-15", 12_000_000, Unpaid),
        payment(10, "INV-2024-010", "CV Maju Bersama", "Jasa pengiriman", "08-04-2024", "08-05-2024", 920_000, Paid),
        payment(11, "INV-2024-011", "PT Global Logistik", "Ekspedisi antar pulau", "22-04-2024", "22-05-2024", 8_450_000, Unpaid),
        payment(12, "INV-2024-012", "CV Mitra Teknik", "Suku cadang conveyor", "2024-05-02", "2024-06-01", 2_975_000, Unpaid),
    ]
}
