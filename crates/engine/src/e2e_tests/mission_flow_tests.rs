//! Full mission lifecycle over HTTP.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use magic_movers_domain::{ItemId, MoverId};

use super::TestServer;
use crate::infrastructure::ports::{ItemRepo, MissionRepo, MoverRepo};

#[tokio::test]
async fn load_start_end_round_trip() {
    let server = TestServer::start().await;
    let m1 = server.create_mover("M1-mover", 100).await;
    let i1 = server.create_item("I1-item", 60).await;
    let i2 = server.create_item("I2-item", 50).await;

    let (status, mission) = server.load(&m1, &[&i1]).await;
    assert_eq!(status, StatusCode::OK, "{mission}");
    assert_eq!(mission["questState"], "LOADING");
    assert_eq!(mission["moverId"], m1.as_str());
    assert_eq!(mission["itemsIds"], json!([i1]));
    let mission_id = mission["id"].as_str().expect("mission id").to_string();

    // 60 + 50 > 100: rejected, nothing changes
    let (status, body) = server.load(&m1, &[&i2]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Total items weight has exceeded the mover capacity"
    );
    let (_, items) = server.get("/api/magic-items").await;
    let i2_json = items
        .as_array()
        .expect("items array")
        .iter()
        .find(|i| i["id"] == i2.as_str())
        .expect("I2 listed");
    assert_eq!(i2_json["isBeingUsed"], false);

    let (status, started) = server
        .patch(&format!("/api/missions/{mission_id}/start"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["questState"], "ON_MISSION");

    let (_, movers) = server.get("/api/magic-movers").await;
    assert_eq!(movers[0]["questState"], "ON_MISSION");
    assert!(movers[0].get("completedMissionsCount").is_none());

    let (status, ended) = server
        .patch(&format!("/api/missions/{mission_id}/end"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ended["questState"], "DONE");

    let store = &server.seeded.store;
    let mover_id = MoverId::from_uuid(m1.parse().expect("uuid"));
    let mover = MoverRepo::get(store.as_ref(), mover_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mover.completed_missions_count(), 1);
    let item = ItemRepo::get(store.as_ref(), ItemId::from_uuid(i1.parse().expect("uuid")))
        .await
        .unwrap()
        .unwrap();
    assert!(!item.is_being_used());
}

#[tokio::test]
async fn first_load_over_capacity_has_its_own_message() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Weakling", 50).await;
    let anvil = server.create_item("Anvil", 60).await;

    let (status, body) = server.load(&mover, &[&anvil]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Items weight has exceeded the mover capacity."
    );
    let (_, missions) = server.get("/api/missions").await;
    assert_eq!(missions, json!([]));
}

#[tokio::test]
async fn start_and_end_only_succeed_once() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Repeater", 100).await;
    let item = server.create_item("Lantern", 5).await;
    let (_, mission) = server.load(&mover, &[&item]).await;
    let mission_id = mission["id"].as_str().expect("mission id").to_string();

    let start = format!("/api/missions/{mission_id}/start");
    let end = format!("/api/missions/{mission_id}/end");

    assert_eq!(server.patch(&end).await.0, StatusCode::BAD_REQUEST);
    assert_eq!(server.patch(&start).await.0, StatusCode::OK);
    let (status, body) = server.patch(&start).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Mission is not in the loading state");

    assert_eq!(server.patch(&end).await.0, StatusCode::OK);
    let (status, body) = server.patch(&end).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Mission is not \"ON_MISSION\" state");
}

#[tokio::test]
async fn incremental_loads_share_one_mission() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Collector", 100).await;
    let a = server.create_item("Amulet", 30).await;
    let b = server.create_item("Bracelet", 30).await;

    let (_, first) = server.load(&mover, &[&a]).await;
    let (status, second) = server.load(&mover, &[b.as_str(), "not-a-uuid"]).await;

    assert_eq!(status, StatusCode::OK, "{second}");
    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["itemsIds"], json!([a, b]));

    let (_, loading) = server.get("/api/missions?state=LOADING").await;
    assert_eq!(loading.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn loading_a_mover_on_a_mission_is_rejected() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Busy Mover", 100).await;
    let a = server.create_item("Atlas", 10).await;
    let b = server.create_item("Bottle", 10).await;
    let (_, mission) = server.load(&mover, &[&a]).await;
    let mission_id = mission["id"].as_str().expect("mission id").to_string();
    server
        .patch(&format!("/api/missions/{mission_id}/start"))
        .await;

    let (status, body) = server.load(&mover, &[&b]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The mover is on another mission.");
}

#[tokio::test]
async fn item_on_another_mission_cannot_be_loaded() {
    let server = TestServer::start().await;
    let first = server.create_mover("First Mover", 100).await;
    let second = server.create_mover("Second Mover", 100).await;
    let item = server.create_item("Shared Orb", 10).await;
    server.load(&first, &[&item]).await;

    let (status, body) = server.load(&second, &[&item]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["validation"]["magicItemsIds"],
        "Items Shared Orb is being used."
    );
}

#[tokio::test]
async fn unknown_ids_only_open_an_empty_mission() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Empty Hands", 100).await;

    let (status, mission) = server
        .load(&mover, &[&ItemId::new().to_string()])
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mission["itemsIds"], json!([]));
    assert_eq!(mission["questState"], "LOADING");
}

#[tokio::test]
async fn missing_mover_and_mission_are_not_found() {
    let server = TestServer::start().await;
    let item = server.create_item("Compass", 10).await;

    let (status, body) = server.load(&MoverId::new().to_string(), &[&item]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Mover doesn't exist");

    let (status, _) = server.load("garbage", &[&item]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = server.patch("/api/missions/garbage/start").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Mission doesn't exist");
}

#[tokio::test]
async fn rank_orders_by_completed_missions() {
    let server = TestServer::start().await;
    let idle = server.create_mover("Idle Mover", 100).await;
    let busy = server.create_mover("Busy Bee", 100).await;

    for n in 0..2 {
        let item = server.create_item(&format!("Cargo {n}"), 10).await;
        let (_, mission) = server.load(&busy, &[&item]).await;
        let mission_id = mission["id"].as_str().expect("mission id").to_string();
        server
            .patch(&format!("/api/missions/{mission_id}/start"))
            .await;
        server
            .patch(&format!("/api/missions/{mission_id}/end"))
            .await;
    }

    let (status, rank) = server.get("/api/magic-movers/rank").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rank[0]["id"], busy.as_str());
    assert_eq!(rank[0]["rank"], 1);
    assert_eq!(rank[1]["id"], idle.as_str());
    assert_eq!(rank[1]["rank"], 2);
    assert!(rank[0].get("completedMissionsCount").is_none());
}

#[tokio::test]
async fn missions_can_be_filtered_by_state() {
    let server = TestServer::start().await;
    let a = server.create_mover("Alpha Mover", 100).await;
    let b = server.create_mover("Beta Mover", 100).await;
    let x = server.create_item("Xylophone", 10).await;
    let y = server.create_item("Yoyo", 10).await;
    server.load(&a, &[&x]).await;
    let (_, mission) = server.load(&b, &[&y]).await;
    let mission_id = mission["id"].as_str().expect("mission id").to_string();
    server
        .patch(&format!("/api/missions/{mission_id}/start"))
        .await;

    let (_, all) = server.get("/api/missions").await;
    let (_, on_mission) = server.get("/api/missions?state=ON_MISSION").await;
    let (_, done) = server.get("/api/missions?state=DONE").await;

    assert_eq!(all.as_array().map(Vec::len), Some(2));
    assert_eq!(on_mission.as_array().map(Vec::len), Some(1));
    assert_eq!(on_mission[0]["id"], mission_id.as_str());
    assert_eq!(done, json!([]));
}

#[tokio::test]
async fn state_survives_a_restart() {
    let server = TestServer::start().await;
    let mover = server.create_mover("Durable", 100).await;
    let item = server.create_item("Stone", 40).await;
    server.load(&mover, &[&item]).await;

    let reopened = server.seeded.reopen().await;

    let missions = MissionRepo::list(&reopened, None).await.unwrap();
    assert_eq!(missions.len(), 1);
    let items = ItemRepo::list(&reopened).await.unwrap();
    assert!(items[0].is_being_used());
    let movers = MoverRepo::list(&reopened).await.unwrap();
    assert_eq!(movers[0].quest_state().as_str(), "LOADING");
}

#[tokio::test]
async fn concurrent_loads_cannot_double_book_an_item() {
    let server = Arc::new(TestServer::start().await);
    let item = server.create_item("Contested", 10).await;
    let mut movers = Vec::new();
    for n in 0..8 {
        movers.push(server.create_mover(&format!("Racer {n}"), 100).await);
    }

    let mut handles = Vec::new();
    for mover in movers {
        let server = server.clone();
        let item = item.clone();
        handles.push(tokio::spawn(async move {
            server.load(&mover, &[&item]).await.0
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);

    let (_, missions) = server.get("/api/missions").await;
    assert_eq!(missions.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn seeded_done_mover_can_start_a_new_cycle() {
    let mut veteran = crate::test_fixtures::travelling_mover("Veteran", 100);
    veteran.complete_mission();
    let cargo = crate::test_fixtures::item("Fresh Cargo", 20);
    let seeded = crate::test_fixtures::store_seeder::SeededStore::with(
        vec![veteran.clone()],
        vec![cargo.clone()],
        vec![],
    )
    .await;
    let server = TestServer::over(seeded);

    let (status, mission) = server
        .load(&veteran.id().to_string(), &[cargo.id().to_string()])
        .await;

    assert_eq!(status, StatusCode::OK, "{mission}");
    assert_eq!(mission["questState"], "LOADING");
    let (_, rank) = server.get("/api/magic-movers/rank").await;
    assert_eq!(rank[0]["name"], "Veteran");
}
