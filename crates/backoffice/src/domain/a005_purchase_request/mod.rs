pub mod repository;
pub mod service;

use super::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a005_purchase_request::{
    PurchaseRequest, PurchaseRequestForm, PurchaseRequestId,
};

pub struct PurchaseRequestScreen;

impl Screen for PurchaseRequestScreen {
    type Record = PurchaseRequest;
    type Form = PurchaseRequestForm;

    const KIND: ScreenKind = ScreenKind::PurchaseRequests;

    fn new_table(config: &Config) -> anyhow::Result<Table<PurchaseRequest>> {
        service::new_table(config)
    }

    fn create(
        table: &mut Table<PurchaseRequest>,
        form: PurchaseRequestForm,
    ) -> anyhow::Result<PurchaseRequestId> {
        service::create(table, form)
    }

    fn update(
        table: &mut Table<PurchaseRequest>,
        id: PurchaseRequestId,
        form: PurchaseRequestForm,
    ) -> anyhow::Result<bool> {
        service::update(table, id, form)
    }

    fn request_delete(
        table: &Table<PurchaseRequest>,
        id: PurchaseRequestId,
    ) -> PendingDeletion<PurchaseRequestId> {
        service::request_delete(table, id)
    }

    fn confirm_delete(
        table: &mut Table<PurchaseRequest>,
        pending: PendingDeletion<PurchaseRequestId>,
    ) -> Option<PurchaseRequest> {
        service::confirm_delete(table, pending)
    }
}
