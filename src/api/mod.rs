mod chess_com_client;
pub mod handlers;
pub mod models;
pub mod routes;

pub use chess_com_client::ChessComClient;
