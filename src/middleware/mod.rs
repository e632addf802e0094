pub mod http_logger;

pub use http_logger::http_logging_middleware;
