/// State handed to every HTTP worker.
pub mod http_service_data;
