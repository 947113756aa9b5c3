use super::repository;
use crate::domain::{seeded_table, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a005_purchase_request::{
    PurchaseRequest, PurchaseRequestForm, PurchaseRequestId,
};

pub fn new_table(config: &Config) -> anyhow::Result<Table<PurchaseRequest>> {
    seeded_table(ScreenKind::PurchaseRequests, repository::seed_records(), config)
}

pub fn create(
    table: &mut Table<PurchaseRequest>,
    form: PurchaseRequestForm,
) -> anyhow::Result<PurchaseRequestId> {
    let number = form.pr_number.clone();
    let id = table.add(form)?;
    tracing::info!("Purchase request {} created (id {})", number, id);
    Ok(id)
}

pub fn update(
    table: &mut Table<PurchaseRequest>,
    id: PurchaseRequestId,
    form: PurchaseRequestForm,
) -> anyhow::Result<bool> {
    Ok(table.update(id, form)?)
}

pub fn request_delete(
    table: &Table<PurchaseRequest>,
    id: PurchaseRequestId,
) -> PendingDeletion<PurchaseRequestId> {
    table.request_delete(id)
}

pub fn confirm_delete(
    table: &mut Table<PurchaseRequest>,
    pending: PendingDeletion<PurchaseRequestId>,
) -> Option<PurchaseRequest> {
    let removed = table.confirm_delete(pending)?;
    tracing::info!("Purchase request {} deleted", removed.pr_number);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::{export_records, ExportFormat, ExportOptions};
    use contracts::domain::a005_purchase_request::PurchaseRequestStatus;
    use contracts::shared::table::Predicate;

    fn table() -> Table<PurchaseRequest> {
        new_table(&Config::default()).unwrap()
    }

    #[test]
    fn test_hidden_id_not_exported() {
        let mut table = table();
        table.set_filter("warehouse", Predicate::equals("Gudang Medan")).unwrap();
        let options = ExportOptions {
            csv_bom: false,
            ..ExportOptions::default()
        };
        let bytes = export_records(ExportFormat::Csv, &table.export_rows(), &options).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("No. PR,Barang,Gudang,Tgl Permintaan,Qty,Satuan,Pemohon,Status")
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_like_filter_on_item() {
        let mut table = table();
        table.set_filter("item", Predicate::contains("roll")).unwrap();
        assert_eq!(table.filtered_count(), 0);
        table.set_filter("unit", Predicate::contains("roll")).unwrap();
        table.clear_filter("item");
        assert_eq!(table.filtered_count(), 3);
    }

    #[test]
    fn test_create_and_receive() {
        let mut table = table();
        let form = PurchaseRequestForm {
            pr_number: "PR/GDG/2024/009".into(),
            item: "Forklift Battery".into(),
            warehouse: "Gudang Surabaya".into(),
            request_date: "15-04-2024".into(),
            quantity: 1,
            unit: "unit".into(),
            requested_by: "Yusuf Hidayat".into(),
            status: PurchaseRequestStatus::Pending,
        };
        let id = create(&mut table, form.clone()).unwrap();
        assert_eq!(id, PurchaseRequestId(9));

        let received = PurchaseRequestForm {
            status: PurchaseRequestStatus::Received,
            ..form
        };
        assert!(update(&mut table, id, received).unwrap());

        let zero = PurchaseRequestForm {
            quantity: 0,
            ..next_form()
        };
        assert!(create(&mut table, zero).is_err());
    }

    fn next_form() -> PurchaseRequestForm {
        PurchaseRequestForm {
            pr_number: "PR/GDG/2024/010".into(),
            item: "Tali Rafia".into(),
            warehouse: "Gudang Medan".into(),
            request_date: "16-04-2024".into(),
            quantity: 10,
            unit: "roll".into(),
            requested_by: "Lina Marpaung".into(),
            status: PurchaseRequestStatus::Pending,
        }
    }
}
