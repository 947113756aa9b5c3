use contracts::domain::a004_training_request::{
    TrainingRequest, TrainingRequestId, TrainingStatus,
};
use contracts::shared::date::RecordDate;

pub fn seed_records() -> Vec<TrainingRequest> {
    use TrainingStatus::{Approved, Rejected, Submitted};
    let rows: [(&str, &str, &str, &str, &str, i64, TrainingStatus); 9] = [
        ("Dewi Lestari", "HR", "Manajemen Kinerja Karyawan", "PPM Manajemen", "15-02-2024", 3_500_000, Approved),
        ("Andi Saputra", "IT", "AWS Cloud Practitioner", "Dicoding", "2024-02-20", 2_750_000, Approved),
        ("Siti Rahma", "Finance", "Brevet Pajak A & B", "IAI Jakarta", "04-03-2024", 4_200_000, Submitted),
        ("Budi Santoso", "Gudang", "K3 Operator Forklift", "Disnaker DKI", "11-03-2024", 1_850_000, Approved),
        ("Rizky Pratama", "IT", "Kubernetes Fundamentals", "Linux Foundation", "2024-03-25", 5_100_000, Rejected),
        ("Nur Aisyah", "Finance", "IFRS 16 Leases", "KAP Partners", "08-04-2024", 2_400_000, Submitted),
        ("Agus Wijaya", "Produksi", "Lean Manufacturing", "Astra Management Development", "22-04-2024", 6_000_000, Submitted),
        ("Maya Sari", "HR", "Rekrutmen Berbasis Kompetensi", "PPM Manajemen", "06-05-2024", 2_950_000, Submitted),
        ("Hendra Gunawan", "Gudang", "Manajemen Persediaan", "APICS Indonesia", "2024-05-20", 3_300_000, Rejected),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((name, department, title, organizer, date, cost, status), id)| TrainingRequest {
            id: TrainingRequestId(id),
            employee_name: name.to_string(),
            department: department.to_string(),
            title: title.to_string(),
            organizer: organizer.to_string(),
            training_date: RecordDate::parse(date),
            cost,
            status,
        })
        .collect()
}
