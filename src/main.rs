#[macro_use]
extern crate rocket;
extern crate lazy_static;

mod api;
mod config;
mod error;
mod middleware;
mod model;
mod util;

use std::time::Instant;

use chrono::Utc;
use lazy_static::lazy_static;
use log::{info, warn};
use rocket::fairing::AdHoc;
use rocket::form::Form;
use rocket::response::status;
use rocket::serde::json::{json, Json, Value};
use rocket::{Build, Rocket, State};

use api::henrik::HenrikClient;
use config::Config;
use middleware::catcher::{bad_request, internal_server_error, not_found, unprocessable_entity};
use middleware::{cors::Cors, logger::RequestLogger};
use model::profile::ValidateProfileBody;
use model::response::Response;
use util::message;

lazy_static! {
    static ref STARTED_AT: Instant = Instant::now();
}

#[get("/")]
async fn index() -> Value {
    json!({
        "message": message::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "validateProfile": "/api/valorant/validate-profile"
        }
    })
}

#[get("/health")]
async fn health(config: &State<Config>) -> Value {
    json!({
        "status": message::STATUS_HEALTHY,
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": STARTED_AT.elapsed().as_secs_f64(),
        "environment": config.environment,
    })
}

#[get("/test")]
async fn api_test() -> Value {
    json!({ "message": message::MESSAGE_API_TEST, "timestamp": Utc::now().to_rfc3339() })
}

#[get("/simple")]
async fn api_simple() -> Value {
    json!({ "message": message::MESSAGE_API_SIMPLE, "timestamp": Utc::now().to_rfc3339() })
}

#[get("/ping")]
async fn ping() -> Value {
    json!({ "message": message::MESSAGE_PING, "timestamp": Utc::now().to_rfc3339() })
}

#[get("/test")]
async fn valorant_test() -> Value {
    json!({ "message": message::MESSAGE_PING, "timestamp": Utc::now().to_rfc3339() })
}

#[post("/test-post", data = "<body>")]
async fn test_post(body: Json<Value>) -> Value {
    json!({
        "message": message::MESSAGE_TEST_POST,
        "body": body.into_inner(),
        "timestamp": Utc::now().to_rfc3339(),
    })
}

/// Urlencoded bodies take this route; everything else falls through to the JSON one.
#[post("/validate-profile", format = "form", data = "<body>", rank = 1)]
async fn validate_profile_form(
    config: &State<Config>,
    client: &State<HenrikClient>,
    body: Form<ValidateProfileBody>,
) -> status::Custom<Json<Response>> {
    api::wrapper::validate_profile(body.into_inner().into(), config.inner(), client.inner())
        .await
        .into_custom()
}

#[post("/validate-profile", data = "<body>", rank = 2)]
async fn validate_profile(
    config: &State<Config>,
    client: &State<HenrikClient>,
    body: Json<ValidateProfileBody>,
) -> status::Custom<Json<Response>> {
    api::wrapper::validate_profile(body.into_inner().into(), config.inner(), client.inner())
        .await
        .into_custom()
}

fn build_rocket(config: Config) -> anyhow::Result<Rocket<Build>> {
    lazy_static::initialize(&STARTED_AT);

    let client = HenrikClient::new(&config)?;
    let log_level = if config.is_development() { "debug" } else { "normal" };
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.port))
        .merge(("log_level", log_level));

    let rocket = rocket::custom(figment)
        .mount("/", routes![index, health])
        .mount("/api", routes![api_test, api_simple])
        .mount(
            "/api/valorant",
            routes![ping, valorant_test, test_post, validate_profile_form, validate_profile],
        )
        .register(
            "/",
            catchers![bad_request, unprocessable_entity, not_found, internal_server_error],
        )
        .attach(RequestLogger)
        .attach(Cors::new(config.allowed_origins.clone()))
        .attach(AdHoc::on_liftoff("Config check", |rocket| {
            Box::pin(async move {
                if let Some(config) = rocket.state::<Config>() {
                    info!("Valorant Finder Backend running in {} mode", config.environment);
                    if config.api_key.is_none() {
                        warn!("VALORANT_API_KEY is not set, profile validation will fail");
                    }
                }
            })
        }))
        .manage(client)
        .manage(config);
    Ok(rocket)
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let _rocket = build_rocket(config)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("server failed: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::Client;

    async fn client_for(api_base_url: &str, api_key: Option<&str>) -> Client {
        let config = Config {
            api_key: api_key.map(str::to_string),
            api_base_url: api_base_url.to_string(),
            region: "eu".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "*.vercel.app".to_string(),
            ],
            ..Config::default()
        };
        Client::tracked(build_rocket(config).unwrap()).await.unwrap()
    }

    const TENZ: &str = r#"{"valorantName":"Tenz","valorantTag":"0505"}"#;

    async fn post_profile_as(
        client: &Client,
        content_type: ContentType,
        body: &str,
    ) -> (Status, Value) {
        let response = client
            .post("/api/valorant/validate-profile")
            .header(content_type)
            .body(body)
            .dispatch()
            .await;
        let status = response.status();
        (status, response.into_json::<Value>().await.unwrap())
    }

    async fn post_profile(client: &Client, body: &str) -> (Status, Value) {
        post_profile_as(client, ContentType::JSON, body).await
    }

    #[rocket::async_test]
    async fn test_validate_profile_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/mmr/eu/Tenz/0505")
            .match_header("authorization", "HDEV-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": 200,
                    "data": {
                        "current_data": {
                            "currenttierpatched": "Diamond 2",
                            "images": { "small": "https://media.valorant-api.com/small.png" }
                        },
                        "by_season": {
                            "e6a1": { "wins": 20, "number_of_games": 41 },
                            "e6a2": { "wins": "5", "number_of_games": "9" },
                            "e6a3": { "error": "No data Available" }
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;
        let client = client_for(&server.url(), Some("HDEV-key")).await;

        let (status, body) = post_profile(&client, TENZ).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"],
            json!({
                "rank": "Diamond 2",
                "profilePhotoUrl": "https://media.valorant-api.com/small.png",
                "lifetimeWins": 25,
                "lifetimeGamesPlayed": 50
            })
        );
    }

    #[rocket::async_test]
    async fn test_validate_profile_missing_fields() {
        let client = client_for("http://127.0.0.1:9", Some("k")).await;

        let (status, body) = post_profile(&client, r#"{"valorantName":"Tenz"}"#).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Missing valorantName or valorantTag" })
        );

        let (status, _) = post_profile(&client, r#"{"valorantName":"","valorantTag":"EU1"}"#).await;
        assert_eq!(status, Status::BadRequest);
    }

    #[rocket::async_test]
    async fn test_validate_profile_malformed_body() {
        let client = client_for("http://127.0.0.1:9", Some("k")).await;

        let (status, body) = post_profile(&client, "{not json").await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body, json!({ "success": false, "error": "Request body is malformed" }));

        let wrong_type = r#"{"valorantName":7,"valorantTag":"EU1"}"#;
        let (status, body) = post_profile(&client, wrong_type).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["success"], false);
    }

    #[rocket::async_test]
    async fn test_validate_profile_accepts_urlencoded_form() {
        let mut server = mockito::Server::new_async().await;
        let upstream = json!({ "current_data": { "currenttierpatched": "Ascendant 1" } });
        let mock = server
            .mock("GET", "/mmr/eu/Tenz/0505")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(upstream.to_string())
            .create_async()
            .await;
        let client = client_for(&server.url(), Some("k")).await;

        let form = "valorantName=Tenz&valorantTag=0505";
        let (status, body) = post_profile_as(&client, ContentType::Form, form).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["rank"], "Ascendant 1");
        assert_eq!(body["data"]["lifetimeWins"], 0);
        mock.assert_async().await;

        let (status, body) =
            post_profile_as(&client, ContentType::Form, "valorantName=Tenz").await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["error"], "Missing valorantName or valorantTag");
    }

    #[rocket::async_test]
    async fn test_malformed_body_on_other_routes_gets_generic_message() {
        let client = client_for("http://127.0.0.1:9", None).await;
        let response = client
            .post("/api/valorant/test-post")
            .header(ContentType::JSON)
            .body("{oops")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["error"], "Request body is malformed");
    }

    #[rocket::async_test]
    async fn test_validate_profile_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/mmr/eu/Ghost/000")
            .with_status(404)
            .create_async()
            .await;
        let client = client_for(&server.url(), Some("k")).await;

        let ghost = r#"{"valorantName":"Ghost","valorantTag":"000"}"#;
        let (status, body) = post_profile(&client, ghost).await;
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Player not found"));
    }

    #[rocket::async_test]
    async fn test_validate_profile_upstream_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/mmr/eu/Tenz/0505")
            .with_status(503)
            .create_async()
            .await;
        let client = client_for(&server.url(), Some("k")).await;

        let (status, body) = post_profile(&client, TENZ).await;
        assert_eq!(status, Status::BadGateway);
        assert_eq!(body["error"], "Valorant API returned status 503");
    }

    #[rocket::async_test]
    async fn test_validate_profile_without_key() {
        let client = client_for("http://127.0.0.1:9", None).await;

        let (status, body) = post_profile(&client, TENZ).await;
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body, json!({ "success": false, "error": "Valorant API key not configured" }));
    }

    #[rocket::async_test]
    async fn test_probes() {
        let client = client_for("http://127.0.0.1:9", None).await;

        let paths = [
            "/api/valorant/ping",
            "/api/valorant/test",
            "/api/test",
            "/api/simple",
            "/health",
            "/",
        ];
        for path in paths {
            let response = client.get(path).dispatch().await;
            assert_eq!(response.status(), Status::Ok, "{}", path);
        }

        let health = client.get("/health").dispatch().await.into_json::<Value>().await.unwrap();
        assert_eq!(health["status"], "OK");
        assert_eq!(health["environment"], "development");
    }

    #[rocket::async_test]
    async fn test_test_post_echoes_body() {
        let client = client_for("http://127.0.0.1:9", None).await;
        let response = client
            .post("/api/valorant/test-post")
            .header(ContentType::JSON)
            .body(r#"{"hello":"world"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["body"], json!({ "hello": "world" }));
    }

    #[rocket::async_test]
    async fn test_unknown_route() {
        let client = client_for("http://127.0.0.1:9", None).await;
        let response = client.get("/api/nope").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["message"], "Cannot GET /api/nope");
    }

    #[rocket::async_test]
    async fn test_cors_preflight() {
        let client = client_for("http://127.0.0.1:9", None).await;

        let response = client
            .options("/api/valorant/validate-profile")
            .header(Header::new("Origin", "https://preview.vercel.app"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NoContent);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("https://preview.vercel.app")
        );

        let response = client
            .get("/api/valorant/ping")
            .header(Header::new("Origin", "https://evil.example"))
            .dispatch()
            .await;
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);
    }
}
