use tokio::sync::mpsc;

use roster_cli::ApiClient;

use crate::tui::types::{Action, ActionResult};

pub async fn action_worker(
    client: ApiClient,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    result_tx: mpsc::UnboundedSender<ActionResult>,
) {
    while let Some(action) = action_rx.recv().await {
        let result = match action {
            Action::Refresh => ActionResult::Refreshed(
                client.list_employees().await.map_err(|e| e.to_string()),
            ),
            Action::LoadDetail(id) => ActionResult::DetailLoaded(
                client.get_employee(id).await.map_err(|e| e.to_string()),
            ),
            Action::Create(fields) => ActionResult::Created(
                client
                    .create_employee(&fields)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::Update { id, fields } => ActionResult::Updated(
                client
                    .update_employee(id, &fields)
                    .await
                    .map_err(|e| e.to_string()),
            ),
            Action::Delete(id) => match client.delete_employee(id).await {
                Ok(_) => ActionResult::Deleted(id, Ok(())),
                Err(e) => ActionResult::Deleted(id, Err(e.to_string())),
            },
        };
        if result_tx.send(result).is_err() {
            break;
        }
    }
}
