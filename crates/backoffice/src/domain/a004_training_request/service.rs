use super::repository;
use crate::domain::{seeded_table, ScreenKind};
use crate::shared::config::Config;
use crate::shared::table::{PendingDeletion, Table};
use contracts::domain::a004_training_request::{
    TrainingRequest, TrainingRequestForm, TrainingRequestId,
};

pub fn new_table(config: &Config) -> anyhow::Result<Table<TrainingRequest>> {
    seeded_table(ScreenKind::TrainingRequests, repository::seed_records(), config)
}

pub fn create(
    table: &mut Table<TrainingRequest>,
    form: TrainingRequestForm,
) -> anyhow::Result<TrainingRequestId> {
    let title = form.title.clone();
    let id = table.add(form)?;
    tracing::info!("Training request {} submitted: {}", id, title);
    Ok(id)
}

pub fn update(
    table: &mut Table<TrainingRequest>,
    id: TrainingRequestId,
    form: TrainingRequestForm,
) -> anyhow::Result<bool> {
    let updated = table.update(id, form)?;
    if updated {
        tracing::info!("Training request {} updated", id);
    }
    Ok(updated)
}

pub fn request_delete(
    table: &Table<TrainingRequest>,
    id: TrainingRequestId,
) -> PendingDeletion<TrainingRequestId> {
    table.request_delete(id)
}

pub fn confirm_delete(
    table: &mut Table<TrainingRequest>,
    pending: PendingDeletion<TrainingRequestId>,
) -> Option<TrainingRequest> {
    let removed = table.confirm_delete(pending)?;
    tracing::info!("Training request {} withdrawn", removed.id);
    Some(removed)
}
