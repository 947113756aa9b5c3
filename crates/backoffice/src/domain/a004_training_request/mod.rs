pub mod repository;
pub mod service;

use super::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a004_training_request::{
    TrainingRequest, TrainingRequestForm, TrainingRequestId,
};

pub struct TrainingRequestScreen;

impl Screen for TrainingRequestScreen {
    type Record = TrainingRequest;
    type Form = TrainingRequestForm;

    const KIND: ScreenKind = ScreenKind::TrainingRequests;

    fn new_table(config: &Config) -> anyhow::Result<Table<TrainingRequest>> {
        service::new_table(config)
    }

    fn create(
        table: &mut Table<TrainingRequest>,
        form: TrainingRequestForm,
    ) -> anyhow::Result<TrainingRequestId> {
        service::create(table, form)
    }

    fn update(
        table: &mut Table<TrainingRequest>,
        id: TrainingRequestId,
        form: TrainingRequestForm,
    ) -> anyhow::Result<bool> {
        service::update(table, id, form)
    }

    fn request_delete(
        table: &Table<TrainingRequest>,
        id: TrainingRequestId,
    ) -> PendingDeletion<TrainingRequestId> {
        service::request_delete(table, id)
    }

    fn confirm_delete(
        table: &mut Table<TrainingRequest>,
        pending: PendingDeletion<TrainingRequestId>,
    ) -> Option<TrainingRequest> {
        service::confirm_delete(table, pending)
    }
}
