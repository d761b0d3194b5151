mod api_key;
mod error_location;
mod http_status;
