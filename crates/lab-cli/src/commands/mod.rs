pub mod admin;
pub mod basics;
pub mod dispatch;
pub mod entity;
pub mod hotel;
pub mod managers;
pub mod pack;
pub mod relations;
pub mod schema;
pub mod shared;
pub mod students;
