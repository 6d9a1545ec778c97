use chrono::Utc;
use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request};

pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        info!("{} - {} {}", Utc::now().to_rfc3339(), req.method(), req.uri().path());
    }
}
