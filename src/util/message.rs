pub static MESSAGE_PROFILE_VALIDATED: &str = "Profile validated successfully";
pub static MESSAGE_UPSTREAM_UNAVAILABLE: &str =
    "Valorant API is unavailable, please try again later";
pub static MESSAGE_INTERNAL_SERVER_ERROR: &str = "Something went wrong";
pub static MESSAGE_INVALID_BODY: &str = "Request body is malformed";
pub static MESSAGE_ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

pub static MESSAGE_PING: &str = "Valorant routes are working!";
pub static MESSAGE_TEST_POST: &str = "POST route is working!";
pub static MESSAGE_API_TEST: &str = "API routing is working!";
pub static MESSAGE_API_SIMPLE: &str = "Simple API route works!";

pub static SERVICE_NAME: &str = "Valorant Finder Backend API";
pub static STATUS_HEALTHY: &str = "OK";
