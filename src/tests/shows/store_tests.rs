use super::*;

fn show(id: i64, title: &str) -> Show {
    Show {
        id: Some(ShowId(id)),
        tvdbid: 70_000 + id as u64,
        title: title.to_string(),
        quality: "720p".to_string(),
        episodal: true,
        last_update: 1_500_000_000_000_000_000,
    }
}

fn loaded(shows: Vec<Show>) -> ShowStore {
    let mut store = ShowStore::new();
    store.begin_load().expect("begin load");
    store.complete_load(Ok(shows)).expect("load");
    store
}

fn three() -> ShowStore {
    loaded(vec![show(1, "Alpha"), show(2, "Bravo"), show(3, "Charlie")])
}

fn titles(store: &ShowStore) -> Vec<String> {
    store.shows().map(|s| s.title.clone()).collect()
}

#[test]
fn episodal_literals_convert_or_fail() {
    assert!(parse_episodal("true").expect("true"));
    assert!(!parse_episodal("false").expect("false"));
    for bad in ["", "yes", "TRUE", "1", "undefined"] {
        assert!(matches!(parse_episodal(bad), Err(SyncError::InvalidInput(_))));
    }
}

#[test]
fn load_initializes_closed_edit_forms() {
    let store = three();
    assert_eq!(store.len(), 3);
    for i in 0..3 {
        assert!(!store.is_edit_form_visible(i).expect("visible"));
    }
    assert!(matches!(
        store.is_edit_form_visible(3),
        Err(SyncError::NoSuchRow(3))
    ));
}

#[test]
fn failed_load_keeps_the_previous_list() {
    let mut store = three();
    store.begin_load().expect("begin");
    let err = store
        .complete_load(Err(anyhow::anyhow!("connection reset")))
        .expect_err("fails");
    assert!(matches!(err, SyncError::LoadFailure { .. }));
    assert_eq!(titles(&store), vec!["Alpha", "Bravo", "Charlie"]);
}

#[test]
fn create_appends_the_server_record_and_resets_draft() {
    let mut store = three();
    *store.draft_mut() = ShowDraft::new("Show A", "1080p", "true");

    let plan = store.begin_create().expect("begin");
    assert!(plan.show().episodal);
    assert_eq!(plan.show().id, None);

    let mut created = plan.show().clone();
    created.id = Some(ShowId(42));
    let index = store.complete_create(plan, Ok(created)).expect("create");

    assert_eq!(index, 3);
    assert_eq!(store.len(), 4);
    let row = &store.rows()[3];
    assert_eq!(row.show.id, Some(ShowId(42)));
    assert!(row.show.episodal);
    assert_eq!(row.show.title, "Show A");
    assert!(!row.ui.edit_form_visible);
    assert!(store.draft().is_empty());
}

#[test]
fn failed_create_leaves_list_and_draft() {
    let mut store = three();
    *store.draft_mut() = ShowDraft::new("Show A", "", "false");
    let plan = store.begin_create().expect("begin");
    let err = store
        .complete_create(plan, Err(anyhow::anyhow!("500")))
        .expect_err("fails");

    assert!(matches!(err, SyncError::SubmitFailure { .. }));
    assert_eq!(store.len(), 3);
    assert_eq!(store.draft().title, "Show A");
    assert!(store.begin_create().is_ok());
}

#[test]
fn create_rejects_bad_drafts_before_sending() {
    let mut store = ShowStore::new();
    *store.draft_mut() = ShowDraft::new("Show A", "", "maybe");
    assert!(matches!(
        store.begin_create(),
        Err(SyncError::InvalidInput(_))
    ));

    *store.draft_mut() = ShowDraft::new("   ", "", "true");
    assert!(matches!(
        store.begin_create(),
        Err(SyncError::InvalidInput(_))
    ));

    // Neither attempt left a create in flight.
    *store.draft_mut() = ShowDraft::new("Show A", "", "true");
    assert!(store.begin_create().is_ok());
}

#[test]
fn second_create_while_in_flight_is_busy() {
    let mut store = ShowStore::new();
    *store.draft_mut() = ShowDraft::new("Show A", "", "true");
    let _plan = store.begin_create().expect("begin");
    assert!(matches!(store.begin_create(), Err(SyncError::Busy(_))));
    assert!(matches!(store.begin_load(), Err(SyncError::Busy(_))));
}

#[test]
fn cancel_draft_resets_it() {
    let mut store = ShowStore::new();
    store.draft_mut().title = "half typed".to_string();
    store.cancel_draft();
    assert!(store.draft().is_empty());
}

#[test]
fn toggle_edit_form_flips_and_seeds_from_record() {
    let mut store = three();
    store.edit_draft_mut(1).expect("draft").title = "stale".to_string();

    assert!(store.toggle_edit_form(1).expect("open"));
    assert!(store.is_edit_form_visible(1).expect("visible"));
    assert_eq!(store.rows()[1].ui.edit, ShowDraft::new("Bravo", "720p", "true"));

    assert!(!store.toggle_edit_form(1).expect("close"));
    assert!(!store.is_edit_form_visible(1).expect("visible"));
    assert!(!store.is_edit_form_visible(0).expect("untouched row"));
}

#[test]
fn successful_update_applies_edit_and_closes_form() {
    let mut store = three();
    store.toggle_edit_form(0).expect("open");
    {
        let edit = store.edit_draft_mut(0).expect("draft");
        edit.title = "Alpha Prime".to_string();
        edit.episodal = "false".to_string();
    }
    let plan = store.begin_update(0).expect("begin");
    assert_eq!(plan.id(), ShowId(1));
    assert!(!plan.show().episodal);
    assert_eq!(plan.show().tvdbid, 70_001);

    store.complete_update(plan, Ok(())).expect("update");
    let row = &store.rows()[0];
    assert_eq!(row.show.title, "Alpha Prime");
    assert!(!row.show.episodal);
    assert!(!row.ui.edit_form_visible);
}

#[test]
fn failed_update_keeps_form_open() {
    let mut store = three();
    store.toggle_edit_form(2).expect("open");
    store.edit_draft_mut(2).expect("draft").title = "Charlie 2".to_string();
    let plan = store.begin_update(2).expect("begin");
    let err = store
        .complete_update(plan, Err(anyhow::anyhow!("500")))
        .expect_err("fails");

    assert!(matches!(err, SyncError::SubmitFailure { .. }));
    assert!(store.is_edit_form_visible(2).expect("visible"));
    assert_eq!(store.rows()[2].show.title, "Charlie");
    assert!(!store.is_pending(ShowId(3)));
}

#[test]
fn update_with_bad_episodal_is_invalid_input() {
    let mut store = three();
    store.toggle_edit_form(0).expect("open");
    store.edit_draft_mut(0).expect("draft").episodal = "sometimes".to_string();
    assert!(matches!(
        store.begin_update(0),
        Err(SyncError::InvalidInput(_))
    ));
    assert!(!store.is_pending(ShowId(1)));
}

#[test]
fn update_lands_on_the_right_row_after_a_splice() {
    let mut store = three();
    store.toggle_edit_form(2).expect("open");
    store.edit_draft_mut(2).expect("draft").title = "Charlie 2".to_string();
    let update = store.begin_update(2).expect("begin update");

    let mut yes = |_: &str| true;
    let delete = store
        .begin_delete(0, &mut yes)
        .expect("begin delete")
        .expect("confirmed");
    store.complete_delete(delete, Ok(())).expect("delete");

    store.complete_update(update, Ok(())).expect("update");
    assert_eq!(titles(&store), vec!["Bravo", "Charlie 2"]);
}

#[test]
fn second_update_for_same_show_is_busy() {
    let mut store = three();
    let _plan = store.begin_update(1).expect("begin");
    assert!(matches!(store.begin_update(1), Err(SyncError::Busy(_))));
    assert!(store.begin_update(0).is_ok());
}

#[test]
fn confirmed_delete_removes_exactly_that_row() {
    let mut store = three();
    let mut prompts = Vec::new();
    let mut confirm = |p: &str| {
        prompts.push(p.to_string());
        true
    };
    let plan = store
        .begin_delete(1, &mut confirm)
        .expect("begin")
        .expect("confirmed");

    // Nothing is removed before the daemon acknowledges.
    assert_eq!(store.len(), 3);
    store.complete_delete(plan, Ok(())).expect("delete");

    assert_eq!(prompts, vec!["Delete Bravo?".to_string()]);
    assert_eq!(titles(&store), vec!["Alpha", "Charlie"]);
}

#[test]
fn declined_delete_leaves_list_unchanged() {
    let mut store = three();
    let mut no = |_: &str| false;
    assert!(store.begin_delete(1, &mut no).expect("begin").is_none());
    assert_eq!(titles(&store), vec!["Alpha", "Bravo", "Charlie"]);
    assert!(!store.is_pending(ShowId(2)));
}

#[test]
fn failed_delete_keeps_the_row() {
    let mut store = three();
    let mut yes = |_: &str| true;
    let plan = store.begin_delete(0, &mut yes).expect("begin").expect("plan");
    let err = store
        .complete_delete(plan, Err(anyhow::anyhow!("500")))
        .expect_err("fails");
    assert!(matches!(err, SyncError::SubmitFailure { .. }));
    assert_eq!(store.len(), 3);
}

#[test]
fn rows_without_identity_cannot_be_updated_or_deleted() {
    let mut unsaved = show(0, "Draft");
    unsaved.id = None;
    let mut store = loaded(vec![unsaved]);
    assert!(matches!(
        store.begin_update(0),
        Err(SyncError::InvalidInput(_))
    ));
    let mut yes = |_: &str| true;
    assert!(matches!(
        store.begin_delete(0, &mut yes),
        Err(SyncError::InvalidInput(_))
    ));
}

#[test]
fn out_of_range_index_is_reported() {
    let mut store = three();
    assert!(matches!(store.toggle_edit_form(7), Err(SyncError::NoSuchRow(7))));
    assert!(matches!(store.begin_update(7), Err(SyncError::NoSuchRow(7))));
}

#[test]
fn draft_text_is_trimmed_before_sending() {
    let mut store = ShowStore::new();
    *store.draft_mut() = ShowDraft::new("  Show A ", " 720p ", "true");
    let plan = store.begin_create().expect("begin");
    assert_eq!(plan.show().title, "Show A");
    assert_eq!(plan.show().quality, "720p");
}

#[test]
fn aborted_requests_free_their_entities() {
    let mut store = three();

    let update = store.begin_update(0).expect("begin update");
    store.abort_update(update);
    assert!(!store.is_pending(ShowId(1)));
    let again = store.begin_update(0).expect("update again");
    store.abort_update(again);

    let mut yes = |_: &str| true;
    let delete = store.begin_delete(1, &mut yes).expect("begin").expect("plan");
    store.abort_delete(delete);
    assert!(!store.is_pending(ShowId(2)));
    assert_eq!(store.len(), 3);

    store.begin_load().expect("begin load");
    store.abort_load();
    store.begin_load().expect("load again");
    store.abort_load();
}

#[test]
fn aborted_create_keeps_the_draft() {
    let mut store = ShowStore::new();
    *store.draft_mut() = ShowDraft::new("Show A", "", "true");
    let plan = store.begin_create().expect("begin");
    store.abort_create(plan);

    assert_eq!(store.draft().title, "Show A");
    assert!(store.is_empty());
    assert!(store.begin_create().is_ok());
}
