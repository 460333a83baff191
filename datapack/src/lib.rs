//! ntp_datapack is a crate to build and write the resources of the No Tree Punching mod
//!
//! Every kind of json file has its own typed record in [data] (server side data) or [assets]
//! (client side resources).<br>
//! The records carry only what the game format allows, where the format has rules the records
//! cannot express the docs carry notes on how to use them.<br>
//! Apart from placed features needing their configured feature, nothing here checks that
//! referenced ids exist, that is left to the game when it loads the files.

pub mod assets;
pub mod data;
mod error;
mod lang;
mod resource_manager;

pub use error::DataGenError;
pub use lang::LangBuffer;
pub use ntp_util::ResourceLocation;
pub use resource_manager::*;
