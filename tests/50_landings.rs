mod common;

use anyhow::Result;
use common::{id_of, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn landings_page_by_length() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, token) = server.sign_up("alice@example.com").await?;
    let report = server
        .create_report(&token, json!({ "locationId": 1, "tripDate": "2025-06-01" }))
        .await?;
    let landings = format!("/api/fishingreports/{}/landings", report);

    for length in [24, 20] {
        let res = server
            .post(&token, &landings, json!({ "fishSpeciesId": 1, "lengthInInches": length }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let first: Value = server
        .get(&token, &format!("{}?limit=1", landings))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(first["count"], 1);
    assert_eq!(first["data"][0]["lengthInInches"], json!(20.0));
    assert_eq!(first["hasMore"], true);

    let next = first["nextCursor"].as_str().unwrap_or_default();
    let second: Value = server
        .get(&token, &format!("{}?limit=1&next={}", landings, next))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(second["data"][0]["lengthInInches"], json!(24.0));
    assert_eq!(second["hasMore"], false);
    Ok(())
}

#[tokio::test]
async fn landing_embeds_species_and_tackle() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, token) = server.sign_up("alice@example.com").await?;
    let report = server.create_report(&token, json!({ "locationId": 3 })).await?;

    let res = server
        .post(&token, "/api/tackle", json!({ "type": "Lure", "name": "Paddle tail" }))
        .send()
        .await?;
    let lure = id_of(&res.json().await?)?;

    let res = server
        .post(
            &token,
            &format!("/api/fishingreports/{}/landings", report),
            json!({ "fishSpeciesId": 5, "lengthInInches": 21.5, "lureUsed": lure, "released": false }),
        )
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let landing: Value = res.json().await?;

    assert_eq!(landing["fishSpecies"]["name"], "Bonefish");
    assert_eq!(landing["lure"]["name"], "Paddle tail");
    assert!(landing["rod"].is_null());
    assert_eq!(landing["released"], false);
    Ok(())
}

#[tokio::test]
async fn landing_against_foreign_report_is_business_error() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, alice) = server.sign_up("alice@example.com").await?;
    let (_, bob) = server.sign_up("bob@example.com").await?;
    let report = server.create_report(&alice, json!({ "locationId": 1 })).await?;
    let landings = format!("/api/fishingreports/{}/landings", report);

    let res = server
        .post(&bob, &landings, json!({ "fishSpeciesId": 1, "lengthInInches": 20 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(
        body["message"],
        "Fishing report does not exist or does not belong to the account"
    );

    let res = server
        .post(&alice, &landings, json!({ "fishSpeciesId": 1, "lengthInInches": 20 }))
        .send()
        .await?;
    let landing = id_of(&res.json().await?)?;
    let path = format!("{}/{}", landings, landing);

    assert_eq!(server.get(&bob, &path).send().await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.delete(&bob, &path).send().await?.status(), StatusCode::NOT_FOUND);

    let listed: Value = server.get(&bob, &landings).send().await?.json().await?;
    assert_eq!(listed["count"], 0);
    assert_eq!(listed["hasMore"], false);
    Ok(())
}

#[tokio::test]
async fn landing_rejects_unknown_species_and_foreign_tackle() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, alice) = server.sign_up("alice@example.com").await?;
    let (_, bob) = server.sign_up("bob@example.com").await?;
    let report = server.create_report(&alice, json!({ "locationId": 1 })).await?;
    let landings = format!("/api/fishingreports/{}/landings", report);

    let res = server
        .post(&alice, &landings, json!({ "fishSpeciesId": 404 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Fish species does not exist");

    let res = server
        .post(&bob, "/api/tackle", json!({ "type": "Rod", "name": "Bob's rod" }))
        .send()
        .await?;
    let bobs_rod = id_of(&res.json().await?)?;

    let res = server
        .post(&alice, &landings, json!({ "fishSpeciesId": 1, "rodUsed": bobs_rod }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .post(&alice, &landings, json!({ "lengthInInches": 12 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["field_errors"]["fishSpeciesId"].is_string());
    Ok(())
}

#[tokio::test]
async fn landing_update_overwrites_and_delete_hides() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, token) = server.sign_up("alice@example.com").await?;
    let report = server.create_report(&token, json!({ "locationId": 1 })).await?;
    let landings = format!("/api/fishingreports/{}/landings", report);

    let res = server
        .post(&token, &landings, json!({ "fishSpeciesId": 1, "lengthInInches": 30, "mainLineTestInPounds": 20 }))
        .send()
        .await?;
    let path = format!("{}/{}", landings, id_of(&res.json().await?)?);

    let res = server
        .put(&token, &path, json!({ "fishSpeciesId": 2, "lengthInInches": 48 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["fishSpeciesId"], 2);
    assert!(updated["mainLineTestInPounds"].is_null());
    assert_eq!(updated["released"], true);

    assert_eq!(server.delete(&token, &path).send().await?.status(), StatusCode::NO_CONTENT);
    assert_eq!(server.get(&token, &path).send().await?.status(), StatusCode::NOT_FOUND);
    Ok(())
}
