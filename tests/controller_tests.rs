mod support;

use std::sync::Arc;

use basketry::adapter::inbound::controller::{
    Action, BasketController, FORBIDDEN_MESSAGE, STATUS_FORBIDDEN, STATUS_OK,
};
use basketry::adapter::outbound::sqlite::store::SqliteStoreProvider;
use basketry::application::service::BasketService;
use basketry::domain::identity::Identity;
use basketry::testkit::domain::{settings, subscriber};
use serde_json::json;

use support::stores::TempDb;

fn controller(db: &TempDb, identity: Identity) -> BasketController {
    let provider = Arc::new(SqliteStoreProvider::new(db.pool().clone()));
    BasketController::new(BasketService::new(settings(3, 4), provider, identity))
}

#[test]
fn every_action_is_forbidden_without_entitlement() {
    let db = TempDb::create();
    let mut controller = controller(&db, Identity::anonymous());

    for action in [
        Action::Add("1".into()),
        Action::Remove("1".into()),
        Action::Clear,
        Action::Dump,
        Action::List,
        Action::Create("x".into()),
        Action::Delete(1),
        Action::Rename(1, "x".into()),
        Action::Select(1),
    ] {
        let response = controller.handle(action).unwrap();
        assert_eq!(response.status, STATUS_FORBIDDEN);
        assert_eq!(response.body, json!(FORBIDDEN_MESSAGE));
    }
}

#[test]
fn contents_actions_report_count_and_fullness() {
    let db = TempDb::create();
    let mut controller = controller(&db, subscriber(3));

    let response = controller.handle(Action::Add(" 10, 20 ,junk,30".into())).unwrap();
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(
        response.body,
        json!({ "action": "add", "result": [10, 20, 30], "count": 3, "full": false })
    );

    let response = controller.handle(Action::Remove("20,99".into())).unwrap();
    assert_eq!(
        response.body,
        json!({ "action": "remove", "result": [20], "count": 2, "full": false })
    );

    let response = controller.handle(Action::Dump).unwrap();
    assert_eq!(
        response.body,
        json!({ "action": "dump", "result": [10, 30], "count": 2, "full": false })
    );

    let response = controller.handle(Action::Clear).unwrap();
    assert_eq!(
        response.body,
        json!({ "action": "clear", "result": [10, 30], "count": 0, "full": false })
    );
}

#[test]
fn empty_item_list_adds_nothing() {
    let db = TempDb::create();
    let mut controller = controller(&db, subscriber(3));

    let response = controller.handle(Action::Add("  ".into())).unwrap();
    assert_eq!(
        response.body,
        json!({ "action": "add", "result": [], "count": 0, "full": false })
    );
}

#[test]
fn collection_actions_act_on_selected_basket() {
    let db = TempDb::create();
    let mut controller = controller(&db, subscriber(3));

    let created = controller.handle(Action::Create("Later".into())).unwrap();
    assert_eq!(created.body, json!({ "action": "create", "result": 2 }));

    controller.handle(Action::Select(2)).unwrap();
    controller.handle(Action::Add("5".into())).unwrap();
    controller.handle(Action::Rename(2, "Soon".into())).unwrap();

    let mut reopened = controller_for_same_user(&db);
    let listed = reopened.handle(Action::List).unwrap();
    assert_eq!(
        listed.body,
        json!({
            "action": "list",
            "result": [
                { "id": 1, "name": "My Selection" },
                { "id": 2, "name": "Soon" },
            ],
            "current": 2,
        })
    );
    let dumped = reopened.handle(Action::Dump).unwrap();
    assert_eq!(dumped.body["result"], json!([5]));

    let deleted = reopened.handle(Action::Delete(2)).unwrap();
    assert_eq!(deleted.body, json!({ "action": "delete", "result": 2 }));
    let listed = reopened.handle(Action::List).unwrap();
    assert_eq!(listed.body["current"], json!(1));
}

fn controller_for_same_user(db: &TempDb) -> BasketController {
    controller(db, subscriber(3))
}

#[test]
fn unknown_basket_propagates_error() {
    let db = TempDb::create();
    let mut controller = controller(&db, subscriber(3));

    let err = controller.handle(Action::Rename(7, "x".into())).unwrap_err();
    assert_eq!(err.to_string(), "Basket 7 does not exist.");
}

#[test]
fn logging_out_forbids_further_actions() {
    let db = TempDb::create();
    let mut controller = controller(&db, subscriber(3));
    controller.handle(Action::Add("1".into())).unwrap();

    controller.service().switch_identity(Identity::anonymous());
    assert!(controller.handle(Action::Dump).unwrap().is_forbidden());

    controller.service().switch_identity(subscriber(3));
    let dumped = controller.handle(Action::Dump).unwrap();
    assert_eq!(dumped.body["result"], json!([1]));
}
