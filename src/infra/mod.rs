pub mod http_client;
pub mod json_file_store;
