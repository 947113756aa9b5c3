pub mod repository;
pub mod service;

use super::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a001_payment::{Payment, PaymentForm, PaymentNo};

pub struct PaymentScreen;

impl Screen for PaymentScreen {
    type Record = Payment;
    type Form = PaymentForm;

    const KIND: ScreenKind = ScreenKind::Payments;

    fn new_table(config: &Config) -> anyhow::Result<Table<Payment>> {
        service::new_table(config)
    }

    fn create(table: &mut Table<Payment>, form: PaymentForm) -> anyhow::Result<PaymentNo> {
        service::create(table, form)
    }

    fn update(
        table: &mut Table<Payment>,
        no: PaymentNo,
        form: PaymentForm,
    ) -> anyhow::Result<bool> {
        service::update(table, no, form)
    }

    fn request_delete(table: &Table<Payment>, no: PaymentNo) -> PendingDeletion<PaymentNo> {
        service::request_delete(table, no)
    }

    fn confirm_delete(
        table: &mut Table<Payment>,
        pending: PendingDeletion<PaymentNo>,
    ) -> Option<Payment> {
        service::confirm_delete(table, pending)
    }
}
