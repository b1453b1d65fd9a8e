pub mod consts;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod sweeper;
pub mod timer;
