use contracts::domain::a005_purchase_request::{
    PurchaseRequest, PurchaseRequestId, PurchaseRequestStatus,
};
use contracts::shared::date::RecordDate;

/// Sample warehouse requests
pub fn seed_records() -> Vec<PurchaseRequest> {
    use PurchaseRequestStatus::{Approved, Ordered, Pending, Received};
    let rows = [
        ("PR/GDG/2024/001", "Palet Kayu 120x100", "Gudang Cikarang", "03-01-2024", 50, "pcs", "Budi Santoso", Received),
        ("PR/GDG/2024/002", "Stretch Film 50cm", "Gudang Cikarang", "2024-01-17", 120, "roll", "Hendra Gunawan", Received),
        ("PR/GDG/2024/003", "Rak Besi Heavy Duty", "Gudang Surabaya", "05-02-2024", 8, "unit", "Yusuf Hidayat", Ordered),
        ("PR/GDG/2024/004", "Hand Pallet 2.5 Ton", "Gudang Cikarang", "19-02-2024", 2, "unit", "Budi Santoso", Approved),
        ("PR/GDG/2024/005", "Label Barcode 100x50", "Gudang Medan", "2024-03-01", 40, "roll", "Lina Marpaung", Pending),
        ("PR/GDG/2024/006", "Kardus Double Wall", "Gudang Surabaya", "12-03-2024", 500, "pcs", "Yusuf Hidayat", Approved),
        ("PR/GDG/2024/007", "Sarung Tangan Kerja", "Gudang Medan", "26-03-2024", 60, "pasang", "Lina Marpaung", Pending),
        ("PR/GDG/2024/008", "Lakban Coklat 2 inch", "Gudang Cikarang", "2024-04-09", 200, "roll", "Hendra Gunawan", Pending),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(
            |((pr_number, item, warehouse, date, quantity, unit, requested_by, status), id)| {
                PurchaseRequest {
                    id: PurchaseRequestId(id),
                    pr_number: pr_number.to_string(),
                    item: item.to_string(),
                    warehouse: warehouse.to_string(),
                    request_date: RecordDate::parse(date),
                    quantity,
                    unit: unit.to_string(),
                    requested_by: requested_by.to_string(),
                    status,
                }
            },
        )
        .collect()
}
