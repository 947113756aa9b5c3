use super::repository;
use crate::domain::{seeded_table, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a001_payment::{Payment, PaymentForm, PaymentNo};

/// Finance payment table seeded with the sample payments
pub fn new_table(config: &Config) -> anyhow::Result<Table<Payment>> {
    seeded_table(ScreenKind::Payments, repository::seed_records(), config)
}

/// Record a new payment; it gets `max(no) + 1`
pub fn create(table: &mut Table<Payment>, form: PaymentForm) -> anyhow::Result<PaymentNo> {
    let invoice = form.invoice_number.clone();
    let no = table.add(form)?;
    tracing::info!("Payment {} recorded as no {}", invoice, no);
    Ok(no)
}

pub fn update(table: &mut Table<Payment>, no: PaymentNo, form: PaymentForm) -> anyhow::Result<bool> {
    let updated = table.update(no, form)?;
    if updated {
        tracing::info!("Payment no {} updated", no);
    }
    Ok(updated)
}

pub fn request_delete(table: &Table<Payment>, no: PaymentNo) -> PendingDeletion<PaymentNo> {
    table.request_delete(no)
}

pub fn confirm_delete(
    table: &mut Table<Payment>,
    pending: PendingDeletion<PaymentNo>,
) -> Option<Payment> {
    let removed = table.confirm_delete(pending)?;
    tracing::info!("Payment {} deleted", removed.invoice_number);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_payment::PaymentStatus;
    use contracts::shared::table::{ListQuery, Predicate, SortDirection, SortSpec};

    fn table() -> Table<Payment> {
        new_table(&Config::default()).unwrap()
    }

    fn form() -> PaymentForm {
        PaymentForm {
            invoice_number: "INV-2024-013".into(),
            vendor: "PT Sinar Jaya".into(),
            description: "Pembelian bahan baku".into(),
            date: "06-05-2024".into(),
            due_date: "05-06-2024".into(),
            amount: 1_800_000,
            status: PaymentStatus::Unpaid,
        }
    }

    #[test]
    fn test_filter_paid_sorted_by_amount() {
        let mut table = table();
        table.set_filter("status", Predicate::equals("Lunas")).unwrap();
        table.set_sort(SortSpec::by("amount", SortDirection::Desc)).unwrap();

        let rows = table.export_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].amount, 12_000_000);
        assert!(rows.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn test_january_range_over_mixed_formats() {
        let mut table = table();
        let mut query = ListQuery::default();
        query.from.insert("date".into(), "01-01-2024".into());
        query.to.insert("date".into(), "2024-01-31".into());
        table.apply_query(&query).unwrap();

        let invoices: Vec<&str> = table
            .export_rows()
            .iter()
            .map(|p| p.invoice_number.as_str())
            .collect();
        assert_eq!(invoices, vec!["INV-2024-001", "INV-2024-002"]);
    }

    #[test]
    fn test_quick_search_over_vendor_and_description() {
        let mut table = table();
        table.set_quick_search("gudang");
        assert_eq!(table.filtered_count(), 2);
    }

    #[test]
    fn test_create_update_delete() {
        let mut table = table();
        let no = create(&mut table, form()).unwrap();
        assert_eq!(no, PaymentNo(13));

        let mut paid = form();
        paid.status = PaymentStatus::Paid;
        assert!(update(&mut table, no, paid).unwrap());
        assert_eq!(table.store().get(no).map(|p| p.status), Some(PaymentStatus::Paid));

        let pending = request_delete(&table, no);
        assert_eq!(pending.summary(), Some("INV-2024-013 (PT Sinar Jaya)"));
        assert!(confirm_delete(&mut table, pending).is_some());
        assert_eq!(table.store().len(), 12);
    }

    #[test]
    fn test_invalid_form_rejected() {
        let mut table = table();
        let mut bad = form();
        bad.vendor.clear();
        assert!(create(&mut table, bad).is_err());
        assert_eq!(table.store().len(), 12);
    }
}
