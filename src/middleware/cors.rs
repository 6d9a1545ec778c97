use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};

use std::io::Cursor;

pub static ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub static ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Reflects allowed origins back with credentials and answers preflight requests.
/// An entry like `*.vercel.app` matches any origin ending in `.vercel.app`; `*` matches all.
pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Cors { allowed_origins }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| {
            if allowed == "*" {
                true
            } else if let Some(suffix) = allowed.strip_prefix('*') {
                origin.ends_with(suffix)
            } else {
                allowed == origin
            }
        })
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else {
            return;
        };
        if !self.is_allowed(origin) {
            return;
        }

        res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
        res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        res.set_header(Header::new("Vary", "Origin"));

        if req.method() == Method::Options {
            res.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
            res.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
            res.set_status(Status::NoContent);
            res.set_sized_body(0, Cursor::new(""));
        }
    }
}
