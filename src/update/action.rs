//! Toolbar action handlers (sort, filter, columns, import/export, share)

use chrono::{Local, NaiveDate};

use crate::commands::Cmd;
use crate::io::export_csv;
use crate::messages::Action;
use crate::model::{AppModel, Notification};
use crate::records::{Field, Record};

/// Handle a decoded toolbar action
pub fn update_action(model: &mut AppModel, action: Action) -> Option<Cmd> {
    match action {
        Action::Sort(directive) => {
            tracing::debug!(field = %directive.field, direction = ?directive.direction, "sort set");
            model.view.sort = Some(directive);
            Some(Cmd::Redraw)
        }

        Action::Filter(directive) => {
            tracing::debug!(field = %directive.field, value = %directive.value, "filter set");
            model.view.filter = Some(directive);
            Some(Cmd::Redraw)
        }

        Action::ClearFilter => model.view.filter.take().map(|_| Cmd::Redraw),

        Action::HideField(field) => {
            let hidden = model.view.toggle_hidden(field);
            tracing::debug!(%field, hidden, "column visibility toggled");
            Some(Cmd::Redraw)
        }

        Action::Export => match export_csv(model.records.records(), model.config.export.quote_style)
        {
            Ok(contents) => Some(Cmd::WriteExport {
                filename: model.config.export.filename.clone(),
                contents,
            }),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                model.notify(Notification::error(format!("Export failed: {}", e)));
                Some(Cmd::Redraw)
            }
        },

        Action::Import { path } => Some(Cmd::ReadImport { path }),

        Action::Share => {
            let share = &model.config.share;
            Some(Cmd::Share {
                title: share.title.clone(),
                text: share.text.clone(),
                url: share.url.clone(),
            })
        }

        Action::NewAction => {
            let index = model
                .records
                .append(new_task_record(Local::now().date_naive()));
            tracing::info!(index, "new task appended");
            Some(Cmd::Redraw)
        }

        Action::CellView => {
            tracing::info!("cell view requested; no alternate cell display modes");
            None
        }
    }
}

/// The placeholder record appended by the new-action command
///
/// The identifier is assigned by the store on append.
pub fn new_task_record(today: NaiveDate) -> Record {
    Record::default()
        .with(Field::JobRequest, "New Task")
        .with(Field::Submitted, today.format("%d/%m/%Y").to_string())
        .with(Field::Status, "Need to start")
        .with(Field::Submitter, "Current User")
        .with(Field::Priority, "Medium")
        .with(Field::EstValue, "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FilterDirective, SortDirection, SortDirective};

    #[test]
    fn test_new_task_record_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let record = new_task_record(date);
        assert_eq!(record.job_request, "New Task");
        assert_eq!(record.submitted, "07/03/2024");
        assert_eq!(record.status, "Need to start");
        assert_eq!(record.submitter, "Current User");
        assert_eq!(record.priority, "Medium");
        assert_eq!(record.est_value, "0");
        assert_eq!(record.url, "");
        assert_eq!(record.assigned, "");
        assert_eq!(record.due_date, "");
    }

    #[test]
    fn test_new_action_appends_with_next_id() {
        let mut model = AppModel::default();
        update_action(&mut model, Action::NewAction);
        assert_eq!(model.records.len(), 6);
        assert_eq!(model.records.records()[5].id, "6");
        assert_eq!(model.records.records()[5].job_request, "New Task");
    }

    #[test]
    fn test_sort_and_filter_replace_prior_directives() {
        let mut model = AppModel::default();
        update_action(
            &mut model,
            Action::Sort(SortDirective::new(Field::Id, SortDirection::Asc)),
        );
        update_action(
            &mut model,
            Action::Sort(SortDirective::new(Field::Priority, SortDirection::Desc)),
        );
        assert_eq!(
            model.view.sort,
            Some(SortDirective::new(Field::Priority, SortDirection::Desc))
        );

        update_action(&mut model, Action::Filter(FilterDirective::new(Field::Status, "x")));
        assert!(update_action(&mut model, Action::ClearFilter).is_some());
        assert_eq!(model.view.filter, None);
        assert!(update_action(&mut model, Action::ClearFilter).is_none());
    }

    #[test]
    fn test_export_uses_canonical_order_and_config_filename() {
        let mut model = AppModel::default();
        model.view.sort = Some(SortDirective::new(Field::Id, SortDirection::Desc));
        let Some(Cmd::WriteExport { filename, contents }) = update_action(&mut model, Action::Export)
        else {
            panic!("expected export command");
        };
        assert_eq!(filename, "project-data.csv");
        let ids: Vec<&str> = contents
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap_or(""))
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_hide_field_toggles() {
        let mut model = AppModel::default();
        update_action(&mut model, Action::HideField(Field::Url));
        assert!(model.view.is_hidden(Field::Url));
        update_action(&mut model, Action::HideField(Field::Url));
        assert!(!model.view.is_hidden(Field::Url));
    }

    #[test]
    fn test_share_uses_config() {
        let mut model = AppModel::default();
        model.config.share.url = "https://example.test/sheet".into();
        let Some(Cmd::Share { url, .. }) = update_action(&mut model, Action::Share) else {
            panic!("expected share command");
        };
        assert_eq!(url, "https://example.test/sheet");
    }

    #[test]
    fn test_cell_view_is_noop() {
        let mut model = AppModel::default();
        assert_eq!(update_action(&mut model, Action::CellView), None);
    }
}
